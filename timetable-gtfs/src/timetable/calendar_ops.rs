use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use itertools::Itertools;

use crate::timetable::day_type::DayType;
use crate::timetable::feed::{CalendarException, CalendarRule, Trip};
use crate::timetable::timetable_error::TimetableError;

/// dates provided to this application and inside a GTFS archive use
/// yyyymmdd format.
pub const GTFS_DATE_FORMAT: &str = "%Y%m%d";

/// active service ids partitioned by day type. every input id appears in
/// exactly one bucket; buckets are kept sorted so logs and downstream
/// output are reproducible across runs.
#[derive(Debug, Clone, Default)]
pub struct DayTypeClassification {
    weekday: Vec<String>,
    saturday: Vec<String>,
    sunday: Vec<String>,
}

impl DayTypeClassification {
    pub fn get(&self, day_type: DayType) -> &[String] {
        match day_type {
            DayType::Weekday => &self.weekday,
            DayType::Saturday => &self.saturday,
            DayType::Sunday => &self.sunday,
        }
    }
}

/// resolves the set of service ids active on the target date from
/// calendar.txt rules and calendar_dates.txt additions.
///
/// removal exceptions (exception_type 2) are deliberately not applied: the
/// policy only ever adds ids, so a service listed as removed on the target
/// date can still appear in the result.
///
/// if neither relation yields a match, falls back to every distinct service
/// id in the trips relation rather than reporting zero services for the
/// whole feed. an empty trips relation then produces an empty set, which is
/// a normal outcome for callers, not an error.
pub fn resolve_active_services(
    calendar: Option<&[CalendarRule]>,
    calendar_dates: Option<&[CalendarException]>,
    trips: &[Trip],
    target_date: &str,
) -> Result<HashSet<String>, TimetableError> {
    let date = NaiveDate::parse_from_str(target_date, GTFS_DATE_FORMAT)
        .map_err(|e| TimetableError::InvalidDateError(target_date.to_string(), e))?;
    let date_key = date_key(&date);
    let weekday = date.weekday();

    let mut active: HashSet<String> = HashSet::new();
    if let Some(rules) = calendar {
        for rule in rules {
            let in_range = rule.start_date <= date_key && date_key <= rule.end_date;
            if in_range && runs_on(rule, weekday) {
                active.insert(rule.service_id.clone());
            }
        }
    }
    if let Some(exceptions) = calendar_dates {
        for exception in exceptions {
            let is_added = exception.exception_type == CalendarException::ADDED;
            if exception.date == date_key && is_added {
                active.insert(exception.service_id.clone());
            }
        }
    }
    if active.is_empty() {
        active = trips.iter().map(|trip| trip.service_id.clone()).collect();
        if !active.is_empty() {
            log::warn!(
                "no calendar entries matched {target_date}, falling back to all {} service ids found in trips",
                active.len()
            );
        }
    }
    Ok(active)
}

/// partitions the active service set into day-type buckets using the given
/// classification strategy (see
/// [`crate::timetable::classify_service_name`] for the shipped one).
pub fn classify_by_day_type<F>(active_services: &HashSet<String>, classify: F) -> DayTypeClassification
where
    F: Fn(&str) -> DayType,
{
    let mut classified = DayTypeClassification::default();
    for service_id in active_services.iter().sorted() {
        let bucket = match classify(service_id) {
            DayType::Weekday => &mut classified.weekday,
            DayType::Saturday => &mut classified.saturday,
            DayType::Sunday => &mut classified.sunday,
        };
        bucket.push(service_id.clone());
    }
    classified
}

/// yyyymmdd integer key for comparison against calendar date bounds.
fn date_key(date: &NaiveDate) -> u32 {
    date.year() as u32 * 10_000 + date.month() * 100 + date.day()
}

fn runs_on(rule: &CalendarRule, weekday: Weekday) -> bool {
    let flag = match weekday {
        Weekday::Mon => rule.monday,
        Weekday::Tue => rule.tuesday,
        Weekday::Wed => rule.wednesday,
        Weekday::Thu => rule.thursday,
        Weekday::Fri => rule.friday,
        Weekday::Sat => rule.saturday,
        Weekday::Sun => rule.sunday,
    };
    flag == 1
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::timetable::day_type::classify_service_name;

    fn weekday_rule(service_id: &str, start_date: u32, end_date: u32) -> CalendarRule {
        CalendarRule {
            service_id: service_id.to_string(),
            monday: 1,
            tuesday: 1,
            wednesday: 1,
            thursday: 1,
            friday: 1,
            saturday: 0,
            sunday: 0,
            start_date,
            end_date,
        }
    }

    fn trip(trip_id: &str, service_id: &str) -> Trip {
        Trip {
            trip_id: trip_id.to_string(),
            route_id: String::from("10"),
            service_id: service_id.to_string(),
            direction_id: Some(0),
        }
    }

    #[test]
    fn test_rule_matches_weekday_in_range() {
        let rules = [weekday_rule("WKDY", 20250101, 20251231)];
        // 2025-06-02 is a Monday
        let active = resolve_active_services(Some(&rules), None, &[], "20250602")
            .expect("valid date should resolve");
        assert_eq!(active, HashSet::from([String::from("WKDY")]));
    }

    #[test]
    fn test_rule_skipped_outside_date_range() {
        let rules = [weekday_rule("WKDY", 20240101, 20241231)];
        let trips = [trip("t1", "FALLBACK")];
        let active = resolve_active_services(Some(&rules), None, &trips, "20250602")
            .expect("valid date should resolve");
        // nothing matched, so the trips fallback kicks in
        assert_eq!(active, HashSet::from([String::from("FALLBACK")]));
    }

    #[test]
    fn test_rule_skipped_on_wrong_weekday() {
        let rules = [weekday_rule("WKDY", 20250101, 20251231)];
        // 2025-06-07 is a Saturday, the weekday-only rule does not apply
        let active = resolve_active_services(Some(&rules), None, &[], "20250607")
            .expect("valid date should resolve");
        assert!(active.is_empty());
    }

    #[test]
    fn test_added_exception_without_rule() {
        let exceptions = [CalendarException {
            service_id: String::from("HOLIDAY1"),
            date: 20250607,
            exception_type: CalendarException::ADDED,
        }];
        let active = resolve_active_services(None, Some(&exceptions), &[], "20250607")
            .expect("valid date should resolve");
        assert!(active.contains("HOLIDAY1"));
    }

    #[test]
    fn test_removed_exception_is_not_applied() {
        let rules = [weekday_rule("WKDY", 20250101, 20251231)];
        let exceptions = [CalendarException {
            service_id: String::from("WKDY"),
            date: 20250602,
            exception_type: CalendarException::REMOVED,
        }];
        // additive-only policy: the removal on the target date does not
        // subtract the id resolved from calendar.txt
        let active = resolve_active_services(Some(&rules), Some(&exceptions), &[], "20250602")
            .expect("valid date should resolve");
        assert!(active.contains("WKDY"));
    }

    #[test]
    fn test_active_set_deduplicates() {
        let rules = [weekday_rule("WKDY", 20250101, 20251231)];
        let exceptions = [CalendarException {
            service_id: String::from("WKDY"),
            date: 20250602,
            exception_type: CalendarException::ADDED,
        }];
        let active = resolve_active_services(Some(&rules), Some(&exceptions), &[], "20250602")
            .expect("valid date should resolve");
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn test_fallback_deduplicates_trip_service_ids() {
        let trips = [trip("t1", "S"), trip("t2", "S"), trip("t3", "T")];
        let active = resolve_active_services(None, None, &trips, "20250602")
            .expect("valid date should resolve");
        assert_eq!(active.len(), 2);
    }

    #[test]
    fn test_no_calendar_and_no_trips_yields_empty_set() {
        let active = resolve_active_services(None, None, &[], "20250602")
            .expect("valid date should resolve");
        assert!(active.is_empty());
    }

    #[test]
    fn test_invalid_date_is_an_error() {
        let result = resolve_active_services(None, None, &[], "2025-06-02");
        assert!(matches!(
            result,
            Err(TimetableError::InvalidDateError(_, _))
        ));
    }

    #[test]
    fn test_classification_partitions_input() {
        let active: HashSet<String> = [
            "Saturday-22",
            "Sunday-22",
            "WKDY",
            "Express-7-days",
            "Night-Owl",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        let classified = classify_by_day_type(&active, classify_service_name);
        let weekday = classified.get(DayType::Weekday);
        let saturday = classified.get(DayType::Saturday);
        let sunday = classified.get(DayType::Sunday);

        assert_eq!(weekday.len() + saturday.len() + sunday.len(), active.len());
        for bucket in [weekday, saturday, sunday] {
            for service_id in bucket {
                assert!(active.contains(service_id));
            }
        }
        assert_eq!(saturday, ["Express-7-days", "Saturday-22"]);
        assert_eq!(sunday, ["Sunday-22"]);
        assert_eq!(weekday, ["Night-Owl", "WKDY"]);
    }
}

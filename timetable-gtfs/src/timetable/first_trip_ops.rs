use std::collections::{HashMap, HashSet};

use crate::timetable::day_type::DayType;
use crate::timetable::direction_labels::DirectionLabels;
use crate::timetable::feed::{ScheduleFeed, Trip};
use crate::timetable::timetable_row::TimetableRow;
use crate::timetable::trip_ops;

/// builds the first-trip-of-the-day table for one day type: for every
/// (route_id, direction_id) pair served by the active service ids, the
/// single trip with the earliest scheduled departure anywhere in its stop
/// time rows.
///
/// an empty active service set is a normal outcome and produces an empty
/// table. ties on the minimal departure time are broken by the lowest
/// trip_id so output is stable across runs.
pub fn build_first_trip_table(
    feed: &ScheduleFeed,
    day_type: DayType,
    active_services: &[String],
    labels: &DirectionLabels,
) -> Vec<TimetableRow> {
    if active_services.is_empty() {
        log::info!("no service ids found for {day_type}");
        return vec![];
    }
    let service_set: HashSet<&str> = active_services.iter().map(String::as_str).collect();
    let day_trips: Vec<&Trip> = feed
        .trips
        .iter()
        .filter(|trip| service_set.contains(trip.service_id.as_str()))
        .collect();
    if day_trips.is_empty() {
        log::info!("no trips found for {day_type}");
        return vec![];
    }

    // earliest scheduled departure across each trip's stop time rows
    let day_trip_ids: HashSet<&str> = day_trips.iter().map(|trip| trip.trip_id.as_str()).collect();
    let mut earliest_departure: HashMap<&str, &String> = HashMap::new();
    for stop_time in &feed.stop_times {
        if !day_trip_ids.contains(stop_time.trip_id.as_str()) {
            continue;
        }
        let departure = match &stop_time.departure_time {
            Some(departure) => departure,
            None => continue,
        };
        earliest_departure
            .entry(stop_time.trip_id.as_str())
            .and_modify(|current| {
                if departure < *current {
                    *current = departure;
                }
            })
            .or_insert(departure);
    }

    let mut groups: HashMap<(&str, Option<u8>), Vec<&Trip>> = HashMap::new();
    for trip in day_trips.iter().copied() {
        groups
            .entry((trip.route_id.as_str(), trip.direction_id))
            .or_default()
            .push(trip);
    }

    let mut selected: Vec<&Trip> = Vec::with_capacity(groups.len());
    for group_trips in groups.values() {
        let first = group_trips
            .iter()
            .filter_map(|trip| {
                earliest_departure
                    .get(trip.trip_id.as_str())
                    .map(|departure| (*departure, *trip))
            })
            .min_by(|(departure_a, trip_a), (departure_b, trip_b)| {
                departure_a
                    .cmp(departure_b)
                    .then_with(|| trip_a.trip_id.cmp(&trip_b.trip_id))
            });
        if let Some((_, trip)) = first {
            selected.push(trip);
        }
    }

    let mut summaries =
        trip_ops::build_trip_summaries(&selected, &feed.stop_times, &feed.stops, labels);
    // direction is compared as a string here, so e.g. "EB" sorts before "NB"
    summaries.sort_by(|a, b| {
        (a.route_id.as_str(), a.direction.as_str(), a.trip_id.as_str()).cmp(&(
            b.route_id.as_str(),
            b.direction.as_str(),
            b.trip_id.as_str(),
        ))
    });
    summaries.iter().map(TimetableRow::new).collect()
}

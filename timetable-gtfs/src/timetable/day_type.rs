use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the timetable bucket a service pattern belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    Weekday,
    Saturday,
    Sunday,
}

impl DayType {
    pub const ALL: [DayType; 3] = [DayType::Weekday, DayType::Saturday, DayType::Sunday];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Weekday => "weekday",
            DayType::Saturday => "saturday",
            DayType::Sunday => "sunday",
        }
    }
}

impl Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// best-effort day-type classification from the literal service id text.
/// relies on a naming convention in the source feed ("Saturday", "Sunday",
/// "7-days" keywords), not on calendar structure; ids without a recognized
/// keyword land in the weekday bucket. callers that need a different rule
/// can pass their own `fn(&str) -> DayType` to
/// [`crate::timetable::classify_by_day_type`].
pub fn classify_service_name(service_id: &str) -> DayType {
    if service_id.contains("Saturday") || service_id.contains("7-days") {
        DayType::Saturday
    } else if service_id.contains("Sunday") {
        DayType::Sunday
    } else {
        DayType::Weekday
    }
}

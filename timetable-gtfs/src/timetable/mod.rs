pub mod app;
mod calendar_ops;
mod day_type;
mod direction_labels;
mod feed;
mod first_trip_ops;
mod route_ops;
mod service_row;
mod timetable_error;
mod timetable_row;
mod trip_ops;

pub use calendar_ops::{
    classify_by_day_type, resolve_active_services, DayTypeClassification, GTFS_DATE_FORMAT,
};
pub use day_type::{classify_service_name, DayType};
pub use direction_labels::DirectionLabels;
pub use feed::{CalendarException, CalendarRule, ScheduleFeed, Stop, StopTime, Trip};
pub use first_trip_ops::build_first_trip_table;
pub use route_ops::build_route_table;
pub use service_row::ServiceTimetableRow;
pub use timetable_error::TimetableError;
pub use timetable_row::TimetableRow;
pub use trip_ops::{build_trip_summaries, StopCall, TripSummary};

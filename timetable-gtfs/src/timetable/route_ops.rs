use crate::timetable::direction_labels::DirectionLabels;
use crate::timetable::feed::{ScheduleFeed, Trip};
use crate::timetable::service_row::ServiceTimetableRow;
use crate::timetable::timetable_error::TimetableError;
use crate::timetable::timetable_row::TimetableRow;
use crate::timetable::trip_ops;

/// builds the all-trips table for one route: every trip of every service
/// pattern, no calendar filtering. route_id is matched by exact,
/// case-sensitive equality.
///
/// a route with zero trips is an error; a route whose trips all get
/// dropped during aggregation (missing times, unresolved stops) is a
/// normal empty table.
pub fn build_route_table(
    feed: &ScheduleFeed,
    route_id: &str,
    labels: &DirectionLabels,
) -> Result<Vec<ServiceTimetableRow>, TimetableError> {
    let route_trips: Vec<&Trip> = feed
        .trips
        .iter()
        .filter(|trip| trip.route_id == route_id)
        .collect();
    if route_trips.is_empty() {
        return Err(TimetableError::NoTripsFoundError(route_id.to_string()));
    }
    log::info!("found {} trips for route {route_id}", route_trips.len());

    let mut summaries =
        trip_ops::build_trip_summaries(&route_trips, &feed.stop_times, &feed.stops, labels);
    // group service patterns together, chronological within each pattern
    summaries.sort_by(|a, b| {
        (
            a.service_id.as_str(),
            a.origin.time.as_str(),
            a.direction.as_str(),
            a.trip_id.as_str(),
        )
            .cmp(&(
                b.service_id.as_str(),
                b.origin.time.as_str(),
                b.direction.as_str(),
                b.trip_id.as_str(),
            ))
    });
    let rows = summaries
        .iter()
        .map(|summary| ServiceTimetableRow::new(&TimetableRow::new(summary), &summary.service_id))
        .collect();
    Ok(rows)
}

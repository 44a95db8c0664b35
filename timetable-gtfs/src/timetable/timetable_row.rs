use serde::{Deserialize, Serialize};

use crate::timetable::trip_ops::TripSummary;

/// a row in a timetable CSV: for one trip of a route, where and when it
/// leaves its origin stop and reaches its destination stop.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TimetableRow {
    /// the unique name of this route within the feed
    pub route_id: String,
    /// rider-facing compass label for the trip's direction code
    pub direction: String,
    pub origin_name: String,
    pub origin_latitude: f64,
    pub origin_longitude: f64,
    /// departure time at the first stop of the trip
    pub origin_departure_time: String,
    pub destination_name: String,
    pub destination_latitude: f64,
    pub destination_longitude: f64,
    /// arrival time at the last stop of the trip
    pub destination_arrival_time: String,
}

impl TimetableRow {
    pub const CSV_HEADER: [&'static str; 10] = [
        "route_id",
        "direction",
        "origin_name",
        "origin_latitude",
        "origin_longitude",
        "origin_departure_time",
        "destination_name",
        "destination_latitude",
        "destination_longitude",
        "destination_arrival_time",
    ];

    pub fn new(summary: &TripSummary) -> TimetableRow {
        TimetableRow {
            route_id: summary.route_id.clone(),
            direction: summary.direction.clone(),
            origin_name: summary.origin.stop_name.clone(),
            origin_latitude: summary.origin.stop_lat,
            origin_longitude: summary.origin.stop_lon,
            origin_departure_time: summary.origin.time.clone(),
            destination_name: summary.destination.stop_name.clone(),
            destination_latitude: summary.destination.stop_lat,
            destination_longitude: summary.destination.stop_lon,
            destination_arrival_time: summary.destination.time.clone(),
        }
    }
}

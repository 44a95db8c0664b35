use serde::{Deserialize, Serialize};

use crate::timetable::timetable_row::TimetableRow;

/// a [`TimetableRow`] extended with the service pattern the trip belongs
/// to. used by the all-trips-for-a-route table, where rows from several
/// service patterns appear together and are grouped by service_id.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceTimetableRow {
    pub route_id: String,
    pub direction: String,
    pub origin_name: String,
    pub origin_latitude: f64,
    pub origin_longitude: f64,
    pub origin_departure_time: String,
    pub destination_name: String,
    pub destination_latitude: f64,
    pub destination_longitude: f64,
    pub destination_arrival_time: String,
    /// the unique name of the service schedule attached to this trip
    pub service_id: String,
}

impl ServiceTimetableRow {
    pub const CSV_HEADER: [&'static str; 11] = [
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
        "service_id",
    ];

    pub fn new(row: &TimetableRow, service_id: &str) -> ServiceTimetableRow {
        ServiceTimetableRow {
            route_id: row.route_id.clone(),
            direction: row.direction.clone(),
            origin_name: row.origin_name.clone(),
            origin_latitude: row.origin_latitude,
            origin_longitude: row.origin_longitude,
            origin_departure_time: row.origin_departure_time.clone(),
            destination_name: row.destination_name.clone(),
            destination_latitude: row.destination_latitude,
            destination_longitude: row.destination_longitude,
            destination_arrival_time: row.destination_arrival_time.clone(),
            service_id: service_id.to_string(),
        }
    }
}

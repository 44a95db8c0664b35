use std::collections::HashMap;

use crate::timetable::direction_labels::DirectionLabels;
use crate::timetable::feed::{Stop, StopTime, Trip};

/// one end of a summarized trip, with the stop join resolved and the
/// relevant wall-clock time attached (departure at the origin, arrival at
/// the destination).
#[derive(Debug, Clone)]
pub struct StopCall {
    pub stop_name: String,
    pub stop_lat: f64,
    pub stop_lon: f64,
    pub time: String,
}

/// a per-trip origin/destination summary produced by
/// [`build_trip_summaries`]. keeps the trip and service ids so builders can
/// apply their own grouping, selection and ordering before mapping to
/// output rows.
#[derive(Debug, Clone)]
pub struct TripSummary {
    pub trip_id: String,
    pub route_id: String,
    pub service_id: String,
    /// rider-facing label for the trip's direction code
    pub direction: String,
    pub origin: StopCall,
    pub destination: StopCall,
}

/// groups raw stop time rows into one origin/destination summary per trip.
///
/// `trips_filtered` must already be restricted to the trip set of interest
/// (service set membership or route equality, applied upstream). the output
/// contains at most one summary per trip id; a trip whose origin or
/// destination stop cannot be resolved, or whose origin departure or
/// destination arrival time is missing, is dropped entirely rather than
/// emitted as a partial row. output order is unspecified, callers sort.
pub fn build_trip_summaries(
    trips_filtered: &[&Trip],
    stop_times: &[StopTime],
    stops: &HashMap<String, Stop>,
    labels: &DirectionLabels,
) -> Vec<TripSummary> {
    let trip_index: HashMap<&str, &Trip> = trips_filtered
        .iter()
        .map(|trip| (trip.trip_id.as_str(), *trip))
        .collect();

    // origin is the stop_sequence-minimal row, destination the maximal one.
    // a trip with a single stop time row is its own origin and destination.
    let mut endpoints: HashMap<&str, (&StopTime, &StopTime)> = HashMap::new();
    for stop_time in stop_times {
        if !trip_index.contains_key(stop_time.trip_id.as_str()) {
            continue;
        }
        endpoints
            .entry(stop_time.trip_id.as_str())
            .and_modify(|(origin, destination)| {
                if stop_time.stop_sequence < origin.stop_sequence {
                    *origin = stop_time;
                }
                if stop_time.stop_sequence >= destination.stop_sequence {
                    *destination = stop_time;
                }
            })
            .or_insert((stop_time, stop_time));
    }

    let mut summaries: Vec<TripSummary> = Vec::with_capacity(endpoints.len());
    for (trip_id, (origin_row, destination_row)) in endpoints {
        let trip = match trip_index.get(trip_id) {
            Some(trip) => *trip,
            None => continue,
        };
        // inner join against stops: either end unresolved drops the trip
        let origin_stop = stops.get(&origin_row.stop_id);
        let destination_stop = stops.get(&destination_row.stop_id);
        let (origin_stop, destination_stop) = match (origin_stop, destination_stop) {
            (Some(origin), Some(destination)) => (origin, destination),
            _ => continue,
        };
        // rows without both times would not be sortable or consumable
        let departure = &origin_row.departure_time;
        let arrival = &destination_row.arrival_time;
        let (departure, arrival) = match (departure, arrival) {
            (Some(departure), Some(arrival)) => (departure, arrival),
            _ => continue,
        };
        summaries.push(TripSummary {
            trip_id: trip.trip_id.clone(),
            route_id: trip.route_id.clone(),
            service_id: trip.service_id.clone(),
            direction: labels.label(trip.direction_id),
            origin: StopCall {
                stop_name: origin_stop.stop_name.clone(),
                stop_lat: origin_stop.stop_lat,
                stop_lon: origin_stop.stop_lon,
                time: departure.clone(),
            },
            destination: StopCall {
                stop_name: destination_stop.stop_name.clone(),
                stop_lat: destination_stop.stop_lat,
                stop_lon: destination_stop.stop_lon,
                time: arrival.clone(),
            },
        });
    }
    summaries
}

use std::collections::HashMap;
use std::path::Path;

use kdam::tqdm;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::timetable::timetable_error::TimetableError;

/// one scheduled vehicle journey along a route on one service pattern.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Trip {
    pub trip_id: String,
    pub route_id: String,
    /// the service pattern this trip belongs to. a route may correspond
    /// with multiple service ids.
    pub service_id: String,
    /// small integer direction code. the GTFS spec only defines 0 and 1 but
    /// some feeds use a wider domain, so this is kept as a raw code and
    /// mapped to a label late (see [`crate::timetable::DirectionLabels`]).
    pub direction_id: Option<u8>,
}

/// one scheduled arrival/departure of one trip at one stop. times are
/// wall-clock strings which may exceed 24:00:00 for service past midnight;
/// they order correctly under lexicographic comparison.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StopTime {
    pub trip_id: String,
    /// defines the within-trip stop ordering. the minimal row is the trip's
    /// origin, the maximal row its destination.
    pub stop_sequence: u32,
    pub stop_id: String,
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
}

/// a named physical location where a trip may pick up or drop off.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Stop {
    pub stop_id: String,
    pub stop_name: String,
    pub stop_lat: f64,
    pub stop_lon: f64,
}

/// a recurring weekly pattern plus an inclusive date range defining when a
/// service pattern normally operates. date bounds use yyyymmdd integers.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CalendarRule {
    pub service_id: String,
    pub monday: u8,
    pub tuesday: u8,
    pub wednesday: u8,
    pub thursday: u8,
    pub friday: u8,
    pub saturday: u8,
    pub sunday: u8,
    pub start_date: u32,
    pub end_date: u32,
}

/// a one-off addition or removal of a service pattern on a specific date.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CalendarException {
    pub service_id: String,
    pub date: u32,
    pub exception_type: u8,
}

impl CalendarException {
    pub const ADDED: u8 = 1;
    pub const REMOVED: u8 = 2;
}

/// an in-memory GTFS schedule feed. relations are materialized once at
/// startup and treated as read-only snapshots for the rest of the run;
/// every resolver/aggregator/builder operation takes the feed as an
/// explicit argument.
pub struct ScheduleFeed {
    pub trips: Vec<Trip>,
    pub stop_times: Vec<StopTime>,
    /// stops indexed by stop_id for join resolution
    pub stops: HashMap<String, Stop>,
    pub calendar: Option<Vec<CalendarRule>>,
    pub calendar_dates: Option<Vec<CalendarException>>,
}

impl ScheduleFeed {
    /// reads the feed file set from a directory. `calendar.txt` and
    /// `calendar_dates.txt` are optional; a missing file becomes `None`.
    pub fn from_dir(feed_dir: &Path) -> Result<ScheduleFeed, TimetableError> {
        let trips: Vec<Trip> = read_feed_file(feed_dir, "trips.txt")?;
        let stop_times: Vec<StopTime> = read_feed_file(feed_dir, "stop_times.txt")?;
        let stop_rows: Vec<Stop> = read_feed_file(feed_dir, "stops.txt")?;
        let stops: HashMap<String, Stop> = stop_rows
            .into_iter()
            .map(|stop| (stop.stop_id.clone(), stop))
            .collect();
        let calendar = read_optional_feed_file(feed_dir, "calendar.txt")?;
        let calendar_dates = read_optional_feed_file(feed_dir, "calendar_dates.txt")?;
        log::info!(
            "loaded feed from {}: {} trips, {} stop times, {} stops, calendar {}, calendar_dates {}",
            feed_dir.display(),
            trips.len(),
            stop_times.len(),
            stops.len(),
            presence(&calendar),
            presence(&calendar_dates),
        );
        Ok(ScheduleFeed {
            trips,
            stop_times,
            stops,
            calendar,
            calendar_dates,
        })
    }
}

fn presence<T>(relation: &Option<Vec<T>>) -> String {
    match relation {
        Some(rows) => format!("{} rows", rows.len()),
        None => String::from("absent"),
    }
}

/// reads rows from one feed CSV file. unknown columns are ignored; empty
/// optional fields deserialize to `None`.
fn read_feed_file<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<Vec<T>, TimetableError> {
    let path = dir.join(name);
    let reader = csv::ReaderBuilder::new().from_path(&path).map_err(|e| {
        TimetableError::FeedReadError(path.to_string_lossy().into_owned(), format!("{e}"))
    })?;
    let rows = tqdm!(reader.into_deserialize::<T>(), desc = name)
        .map(|row| {
            row.map_err(|e| TimetableError::FeedReadError(name.to_string(), format!("{e}")))
        })
        .collect::<Result<Vec<T>, TimetableError>>()?;
    Ok(rows)
}

fn read_optional_feed_file<T: DeserializeOwned>(
    dir: &Path,
    name: &str,
) -> Result<Option<Vec<T>>, TimetableError> {
    if !dir.join(name).is_file() {
        return Ok(None);
    }
    read_feed_file(dir, name).map(Some)
}

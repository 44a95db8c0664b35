//! timetable extraction operations over a GTFS feed directory: the
//! first-trips tables for the configured day-type dates, or the all-trips
//! table for a single route.
use std::path::Path;

use clap::Subcommand;
use rayon::prelude::*;
use serde::Serialize;

use crate::timetable::app::AppConfig;
use crate::timetable::{
    build_first_trip_table, build_route_table, classify_by_day_type, classify_service_name,
    resolve_active_services, DayType, ScheduleFeed, ServiceTimetableRow, TimetableError,
    TimetableRow,
};

#[derive(Debug, Clone, Subcommand)]
pub enum TimetableOperation {
    /// first trip of the day for every route and direction, one CSV per day type
    FirstTrips,
    /// every trip of one route across all of its service patterns
    RouteTrips {
        /// route identifier, matched against trips route_id exactly
        route_id: String,
    },
}

impl TimetableOperation {
    pub fn run(&self, feed_dir: &str, config: &AppConfig) -> Result<(), TimetableError> {
        let feed = ScheduleFeed::from_dir(Path::new(feed_dir))?;
        match self {
            TimetableOperation::FirstTrips => first_trips(&feed, config),
            TimetableOperation::RouteTrips { route_id } => route_trips(&feed, route_id, config),
        }
    }
}

/// builds and writes the three day-type tables. day types are independent
/// units of work over a read-only feed, so they run in parallel. a failure
/// for one day type does not stop the others; the first failure is
/// reported once all day types have been attempted.
fn first_trips(feed: &ScheduleFeed, config: &AppConfig) -> Result<(), TimetableError> {
    let results: Vec<Result<(), TimetableError>> = DayType::ALL
        .par_iter()
        .map(|day_type| first_trips_for_day(feed, *day_type, config))
        .collect();

    let mut first_failure: Option<TimetableError> = None;
    for result in results {
        if let Err(e) = result {
            match first_failure {
                None => first_failure = Some(e),
                Some(_) => log::error!("{e}"),
            }
        }
    }
    match first_failure {
        None => Ok(()),
        Some(e) => Err(e),
    }
}

fn first_trips_for_day(
    feed: &ScheduleFeed,
    day_type: DayType,
    config: &AppConfig,
) -> Result<(), TimetableError> {
    let target_date = config.dates.get(day_type);
    log::info!("processing {day_type} schedule for date {target_date}");
    let active = resolve_active_services(
        feed.calendar.as_deref(),
        feed.calendar_dates.as_deref(),
        &feed.trips,
        target_date,
    )?;
    let classified = classify_by_day_type(&active, classify_service_name);
    let bucket = classified.get(day_type);
    log::info!("found {} service ids for {day_type}", bucket.len());

    let table = build_first_trip_table(feed, day_type, bucket, &config.direction_labels);
    let out_path =
        Path::new(&config.output_directory).join(format!("route_timetable_{day_type}.csv"));
    write_table(&out_path, &TimetableRow::CSV_HEADER, &table)?;
    log::info!(
        "created {day_type} table with {} rows at {}",
        table.len(),
        out_path.display()
    );
    Ok(())
}

fn route_trips(
    feed: &ScheduleFeed,
    route_id: &str,
    config: &AppConfig,
) -> Result<(), TimetableError> {
    log::info!("processing all trips for route {route_id}");
    let table = build_route_table(feed, route_id, &config.direction_labels)?;
    let out_path =
        Path::new(&config.output_directory).join(format!("route_{route_id}_all_trips.csv"));
    write_table(&out_path, &ServiceTimetableRow::CSV_HEADER, &table)?;
    log::info!("created {} with {} trips", out_path.display(), table.len());
    Ok(())
}

/// writes one output table. the header row is written explicitly so an
/// empty table still yields a well-formed CSV.
fn write_table<T: Serialize>(
    path: &Path,
    header: &[&str],
    rows: &[T],
) -> Result<(), TimetableError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| write_error(path, e))?;
    writer
        .write_record(header)
        .map_err(|e| write_error(path, e))?;
    for row in rows {
        writer.serialize(row).map_err(|e| write_error(path, e))?;
    }
    writer.flush().map_err(|e| write_error(path, e))?;
    Ok(())
}

fn write_error(path: &Path, e: impl std::fmt::Display) -> TimetableError {
    TimetableError::OutputWriteError(path.to_string_lossy().into_owned(), format!("{e}"))
}

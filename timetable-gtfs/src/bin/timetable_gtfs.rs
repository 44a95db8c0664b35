//! this tool derives rider-facing timetable extracts from a GTFS schedule
//! archive: the first trip of the day for every route and direction on a
//! set of representative dates, or every trip of a single route across all
//! of its service patterns.
use clap::Parser;
use timetable_gtfs::timetable::app::TimetableApp;

fn main() {
    env_logger::init();
    let args = TimetableApp::parse();
    if let Err(e) = args.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

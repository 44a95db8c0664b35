use clap::Parser;

use crate::timetable::app::{AppConfig, TimetableOperation};
use crate::timetable::TimetableError;

/// command line tool for deriving timetable extracts from a GTFS archive
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TimetableApp {
    #[command(subcommand)]
    pub op: TimetableOperation,
    /// directory containing the GTFS feed file set
    #[arg(long, default_value_t=String::from("googletransit"))]
    pub feed: String,
    /// configuration file overriding the built-in defaults
    #[arg(long)]
    pub config_file: Option<String>,
}

impl TimetableApp {
    pub fn run(&self) -> Result<(), TimetableError> {
        let config = AppConfig::new(self.config_file.as_deref())?;
        self.op.run(&self.feed, &config)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum TimetableError {
    #[error("Failed to parse target date '{0}', expected YYYYMMDD format: {1}")]
    InvalidDateError(String, chrono::ParseError),
    #[error("No trips found for route '{0}'")]
    NoTripsFoundError(String),
    #[error("Failure reading feed file '{0}': {1}")]
    FeedReadError(String, String),
    #[error("Failure writing output file '{0}': {1}")]
    OutputWriteError(String, String),
    #[error("Failed loading app configuration: {0}")]
    ConfigError(#[from] config::ConfigError),
}

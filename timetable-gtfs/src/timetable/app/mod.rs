mod app_config;
mod operation;
mod timetable_app;

pub use app_config::{AppConfig, TargetDates};
pub use operation::TimetableOperation;
pub use timetable_app::TimetableApp;

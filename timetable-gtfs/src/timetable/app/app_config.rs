use config::{Config, File};
use serde::Deserialize;

use crate::timetable::day_type::DayType;
use crate::timetable::direction_labels::DirectionLabels;
use crate::timetable::timetable_error::TimetableError;

/// target dates for the first-trips tables: one representative date per
/// day type, in yyyymmdd format.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetDates {
    pub weekday: String,
    pub saturday: String,
    pub sunday: String,
}

impl TargetDates {
    pub fn get(&self, day_type: DayType) -> &str {
        match day_type {
            DayType::Weekday => &self.weekday,
            DayType::Saturday => &self.saturday,
            DayType::Sunday => &self.sunday,
        }
    }
}

/// application configuration. built-in defaults are overridden by an
/// optional `timetable.toml` in the working directory, which in turn is
/// overridden by an explicit `--config-file` argument.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub output_directory: String,
    pub dates: TargetDates,
    #[serde(default)]
    pub direction_labels: DirectionLabels,
}

impl AppConfig {
    pub fn new(config_file: Option<&str>) -> Result<AppConfig, TimetableError> {
        let mut builder = Config::builder()
            .set_default("output_directory", ".")?
            .set_default("dates.weekday", "20250602")?
            .set_default("dates.saturday", "20250607")?
            .set_default("dates.sunday", "20250608")?
            .add_source(File::with_name("timetable").required(false));
        if let Some(path) = config_file {
            builder = builder.add_source(File::with_name(path));
        }
        let config = builder.build()?.try_deserialize::<AppConfig>()?;
        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use super::AppConfig;
    use crate::timetable::day_type::DayType;

    #[test]
    fn test_default_config() {
        let config = AppConfig::new(None).expect("defaults should build");
        assert_eq!(config.output_directory, ".");
        assert_eq!(config.dates.get(DayType::Weekday), "20250602");
        assert_eq!(config.dates.get(DayType::Saturday), "20250607");
        assert_eq!(config.dates.get(DayType::Sunday), "20250608");
        assert_eq!(config.direction_labels.label(Some(0)), "NB");
    }
}

/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub elevator: ElevatorConfig,
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ElevatorConfig {
    /// Door hold time in milliseconds, one time unit.
    pub door_open_time: u64,
    /// Time to travel a single floor in milliseconds.
    pub travel_time: u64,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    Read(std::io::Error),
    Parse(toml::de::Error),
}

/***************************************/
/*          Implementations            */
/***************************************/
impl Default for ElevatorConfig {
    fn default() -> Self {
        ElevatorConfig {
            door_open_time: 1000,
            travel_time: 2000,
        }
    }
}

impl ElevatorConfig {
    pub fn door_open_duration(&self) -> Duration {
        Duration::from_millis(self.door_open_time)
    }

    pub fn travel_duration(&self) -> Duration {
        Duration::from_millis(self.travel_time)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read(e) => write!(f, "failed to read configuration file: {}", e),
            ConfigError::Parse(e) => write!(f, "failed to parse configuration file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path).map_err(ConfigError::Read)?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(config_str).map_err(ConfigError::Parse)
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        // Arrange
        let input = r#"
            [elevator]
            door_open_time = 10
            travel_time = 20

            [logging]
            level = "debug"
        "#;

        // Act
        let config = parse_config(input).unwrap();

        // Assert
        assert_eq!(config.elevator.door_open_duration(), Duration::from_millis(10));
        assert_eq!(config.elevator.travel_duration(), Duration::from_millis(20));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[elevator]\ntravel_time = 5\n").unwrap();

        assert_eq!(config.elevator.door_open_time, 1000);
        assert_eq!(config.elevator.travel_time, 5);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let result = parse_config("[elevator]\ndoor_open_time = \"soon\"\n");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = load_config("this/file/does/not/exist.toml");

        assert!(matches!(result, Err(ConfigError::Read(_))));
    }
}

//! Startup configuration: history size and the initial flight catalog.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::NewFlight;
use crate::history::DEFAULT_HISTORY_CAPACITY;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV_VAR: &str = "AIRLINE_DESK_CONFIG";

/// Errors from loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid config JSON
    #[error("invalid config {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Configuration for a [`ReservationSystem`](crate::system::ReservationSystem).
///
/// Missing fields in a config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// How many cancellations the undo history keeps.
    pub history_capacity: usize,

    /// Flights loaded into the catalog at startup, in insertion order.
    pub flights: Vec<NewFlight>,
}

impl SystemConfig {
    /// Configuration with the given history size and no flights.
    pub fn empty(history_capacity: usize) -> Self {
        Self {
            history_capacity,
            flights: Vec::new(),
        }
    }

    /// Add a flight to the startup catalog.
    pub fn with_flight(mut self, flight: NewFlight) -> Self {
        self.flights.push(flight);
        self
    }

    /// Read configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], or use the defaults
    /// if it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_path_var(std::env::var_os(CONFIG_ENV_VAR))
    }

    /// Load from `path` if set, otherwise use the defaults.
    fn from_path_var(path: Option<OsString>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self::empty(DEFAULT_HISTORY_CAPACITY)
            .with_flight(NewFlight::new(101, "Mumbai", "Delhi", "08:00", 3))
            .with_flight(NewFlight::new(102, "Chennai", "Hyderabad", "09:30", 4))
            .with_flight(NewFlight::new(103, "Pune", "Bangalore", "11:00", 5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FlightId;
    use tempfile::tempdir;

    #[test]
    fn default_config() {
        let config = SystemConfig::default();
        assert_eq!(config.history_capacity, 10);
        let ids: Vec<_> = config.flights.iter().map(|f| f.id).collect();
        assert_eq!(
            ids,
            vec![FlightId::new(101), FlightId::new(102), FlightId::new(103)]
        );
        assert_eq!(config.flights[0].capacity, 3);
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("desk.json");
        std::fs::write(
            &path,
            r#"{
                "history_capacity": 4,
                "flights": [
                    {"id": 7, "origin": "Goa", "destination": "Kochi", "departure": "06:15", "capacity": 2}
                ]
            }"#,
        )
        .unwrap();

        let config = SystemConfig::load(&path).unwrap();
        assert_eq!(config.history_capacity, 4);
        assert_eq!(
            config.flights,
            vec![NewFlight::new(7, "Goa", "Kochi", "06:15", 2)]
        );
    }

    #[test]
    fn missing_fields_use_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("desk.json");
        std::fs::write(&path, r#"{"history_capacity": 3}"#).unwrap();

        let config = SystemConfig::load(&path).unwrap();
        assert_eq!(config.history_capacity, 3);
        assert_eq!(config.flights, SystemConfig::default().flights);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SystemConfig::load("/nonexistent/desk.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().starts_with("failed to read config /nonexistent/desk.json"));
    }

    #[test]
    fn malformed_file_is_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("desk.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = SystemConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn env_var_names_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("desk.json");
        std::fs::write(&path, r#"{"history_capacity": 5, "flights": []}"#).unwrap();

        let config = SystemConfig::from_path_var(Some(path.into_os_string())).unwrap();
        assert_eq!(config, SystemConfig::empty(5));
    }

    #[test]
    fn unset_env_var_uses_defaults() {
        assert_eq!(
            SystemConfig::from_path_var(None).unwrap(),
            SystemConfig::default()
        );
    }

    #[test]
    fn env_var_pointing_at_missing_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = SystemConfig::from_path_var(Some(path.into_os_string())).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("desk.json");
        let config = SystemConfig::empty(2).with_flight(NewFlight::new(9, "X", "Y", "Z", 1));
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        assert_eq!(SystemConfig::load(&path).unwrap(), config);
    }
}

//! Configuration types for the Benefits Engine.
//!
//! This module contains the roster file structure deserialized from YAML
//! and the server settings read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// Environment variable holding the listen address.
pub const ENV_LISTEN_ADDR: &str = "BENEFITS_LISTEN_ADDR";
/// Environment variable holding the roster file path.
pub const ENV_ROSTER_PATH: &str = "BENEFITS_ROSTER_PATH";
/// Environment variable selecting `text` or `json` log output.
pub const ENV_LOG_FORMAT: &str = "BENEFITS_LOG_FORMAT";
/// Environment variable pinning "today" to a `YYYY-MM-DD` date.
pub const ENV_TODAY: &str = "BENEFITS_TODAY";

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_ROSTER_PATH: &str = "./config/roster.yaml";

/// Roster configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Employees with their dependents, in listing order.
    pub employees: Vec<Employee>,
}

/// Log output format for the server binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Settings for the HTTP server process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub listen_addr: SocketAddr,
    /// Path of the roster YAML file.
    pub roster_path: PathBuf,
    /// Log output format.
    pub log_format: LogFormat,
    /// Fixed date for age calculations; `None` uses the system date.
    pub today: Option<NaiveDate>,
}

impl ServerConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` naming the variable when a value is set but
    /// cannot be parsed.
    pub fn from_vars<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup(ENV_LISTEN_ADDR)
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| EngineError::ConfigParseError {
                path: ENV_LISTEN_ADDR.to_string(),
                message: e.to_string(),
            })?;

        let roster_path = PathBuf::from(
            lookup(ENV_ROSTER_PATH).unwrap_or_else(|| DEFAULT_ROSTER_PATH.to_string()),
        );

        let log_format = match lookup(ENV_LOG_FORMAT) {
            None => LogFormat::default(),
            Some(value) if value.eq_ignore_ascii_case("text") => LogFormat::Text,
            Some(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(value) => {
                return Err(EngineError::ConfigParseError {
                    path: ENV_LOG_FORMAT.to_string(),
                    message: format!("expected 'text' or 'json', got '{}'", value),
                });
            }
        };

        let today = lookup(ENV_TODAY)
            .map(|value| {
                NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|e| {
                    EngineError::ConfigParseError {
                        path: ENV_TODAY.to_string(),
                        message: format!("'{}': {}", value, e),
                    }
                })
            })
            .transpose()?;

        Ok(Self {
            listen_addr,
            roster_path,
            log_format,
            today,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> EngineResult<ServerConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_vars(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.roster_path, PathBuf::from("./config/roster.yaml"));
        assert_eq!(config.log_format, LogFormat::default());
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.today, None);
    }

    #[test]
    fn test_all_values_overridden() {
        let config = config_from(&[
            (ENV_LISTEN_ADDR, "0.0.0.0:9000"),
            (ENV_ROSTER_PATH, "/etc/benefits/roster.yaml"),
            (ENV_LOG_FORMAT, "JSON"),
            (ENV_TODAY, "2025-10-01"),
        ])
        .unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.roster_path, PathBuf::from("/etc/benefits/roster.yaml"));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2025, 10, 1));
    }

    #[test]
    fn test_invalid_listen_addr() {
        let result = config_from(&[(ENV_LISTEN_ADDR, "not-an-address")]);
        match result {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, ENV_LISTEN_ADDR),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_log_format() {
        let result = config_from(&[(ENV_LOG_FORMAT, "xml")]);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_invalid_today() {
        let result = config_from(&[(ENV_TODAY, "01/10/2025")]);
        match result {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert_eq!(path, ENV_TODAY);
                assert!(message.contains("01/10/2025"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_roster_config_deserializes_from_yaml() {
        let yaml = r#"
employees:
  - id: 6
    firstName: Employee6
    lastName: Last6
    salary: "80000.00"
    dateOfBirth: 1988-03-14
"#;
        let config: RosterConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.employees.len(), 1);
        assert_eq!(config.employees[0].salary.to_string(), "80000.00");
        assert!(config.employees[0].dependents.is_empty());
    }
}

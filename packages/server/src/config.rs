//! Layered server configuration.
//!
//! Built-in defaults are overridden by an optional TOML file, then by the
//! `BIND_ADDR` / `PORT` environment variables, then by command-line flags.

use std::path::{Path, PathBuf};

use rcce_dashboard_models::MapSettings;
use rcce_dataset::DataPaths;
use serde::Deserialize;
use thiserror::Error;

/// Config file read when no `--config` path is given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "rcce.toml";

/// Errors that can occur while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has the wrong shape.
    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Address to bind.
    pub bind_addr: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory holding the pre-built front end.
    pub static_dir: PathBuf,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 8080,
            static_dir: PathBuf::from("app/dist"),
        }
    }
}

/// Complete server configuration.
///
/// ```toml
/// [data]
/// activities = "data/rcce.csv"
///
/// [server]
/// port = 9000
///
/// [map]
/// region_zoom = 6.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Source table locations.
    pub data: DataPaths,
    /// HTTP listener.
    pub server: ServerSettings,
    /// Map centering rules.
    pub map: MapSettings,
}

impl Config {
    /// Parses a TOML document. Omitted sections and keys keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`toml::de::Error`] if the document is malformed or has
    /// unknown sections.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Loads the config file at `path`, or [`DEFAULT_CONFIG_PATH`] if it
    /// exists, or the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an explicitly given file cannot be read,
    /// or if the file that was read cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !default.is_file() {
                    log::debug!("No {DEFAULT_CONFIG_PATH} found, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        log::info!("Loading config from {}", path.display());
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Applies `BIND_ADDR` and `PORT` from `lookup`. An unparseable port is
    /// ignored with a warning.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(bind_addr) = lookup("BIND_ADDR") {
            self.server.bind_addr = bind_addr;
        }

        if let Some(port) = lookup("PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(e) => log::warn!("Ignoring invalid PORT '{port}': {e}"),
            }
        }
    }

    /// Applies command-line overrides.
    pub fn apply_overrides(&mut self, bind_addr: Option<String>, port: Option<u16>) {
        if let Some(bind_addr) = bind_addr {
            self.server.bind_addr = bind_addr;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_the_default_config() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = Config::from_toml_str(
            r#"
            [data]
            activities = "sheets/rcce.csv"

            [server]
            port = 9000

            [map]
            region_zoom = 6.0
            "#,
        )
        .unwrap();

        assert_eq!(config.data.activities, PathBuf::from("sheets/rcce.csv"));
        assert_eq!(config.data.regions, DataPaths::default().regions);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.bind_addr, "127.0.0.1");
        assert!((config.map.region_zoom - 6.0).abs() < f64::EPSILON);
        assert!((config.map.national_zoom - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_sections_are_rejected() {
        assert!(Config::from_toml_str("[database]\nurl = \"x\"").is_err());
    }

    #[test]
    fn env_overrides_file_and_cli_overrides_env() {
        let mut config = Config::from_toml_str("[server]\nport = 9000").unwrap();

        config.apply_env(|name| match name {
            "PORT" => Some("9100".to_string()),
            "BIND_ADDR" => Some("0.0.0.0".to_string()),
            _ => None,
        });
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.bind_addr, "0.0.0.0");

        config.apply_overrides(None, Some(9200));
        assert_eq!(config.server.port, 9200);
        assert_eq!(config.server.bind_addr, "0.0.0.0");
    }

    #[test]
    fn invalid_port_env_is_ignored() {
        let mut config = Config::default();
        config.apply_env(|name| (name == "PORT").then(|| "eighty".to_string()));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let result = Config::load(Some(Path::new("does/not/exist.toml")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}

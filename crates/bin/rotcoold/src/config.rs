//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `rotcool.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Which installation to read and how many zones it has.
    pub plant: PlantConfig,
    /// Equipment status polling.
    pub status: StatusConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Plant identification.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PlantConfig {
    pub area_id: String,
    pub center_id: String,
    /// Zones `1..=expected_zone_count` must all be configured at startup.
    pub expected_zone_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    pub poll_interval_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `rotcool.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting values are invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("rotcool.toml")?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("ROTCOOL_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("ROTCOOL_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("ROTCOOL_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("ROTCOOL_DATABASE_URL") {
            self.database.url = val;
        }
        if let Some(val) = var("ROTCOOL_AREA_ID") {
            self.plant.area_id = val;
        }
        if let Some(val) = var("ROTCOOL_CENTER_ID") {
            self.plant.center_id = val;
        }
        if let Some(count) = var("ROTCOOL_ZONE_COUNT").and_then(|val| val.parse().ok()) {
            self.plant.expected_zone_count = count;
        }
        if let Some(ms) = var("ROTCOOL_POLL_INTERVAL_MS").and_then(|val| val.parse().ok()) {
            self.status.poll_interval_ms = ms;
        }
        if let Some(val) = var("ROTCOOL_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if !(1..=3).contains(&self.plant.expected_zone_count) {
            return Err(ConfigError::Validation(format!(
                "expected_zone_count must be between 1 and 3, got {}",
                self.plant.expected_zone_count
            )));
        }
        if self.status.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "poll_interval_ms must be non-zero".to_string(),
            ));
        }
        if self.plant.area_id.trim().is_empty() || self.plant.center_id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "area_id and center_id must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.status.poll_interval_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:rotcool.db?mode=rwc".to_string(),
        }
    }
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            area_id: "HSM".to_string(),
            center_id: "DC".to_string(),
            expected_zone_count: 3,
        }
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1_000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "rotcoold=info,rotcool=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.url, "sqlite:rotcool.db?mode=rwc");
        assert_eq!(config.plant.area_id, "HSM");
        assert_eq!(config.plant.center_id, "DC");
        assert_eq!(config.plant.expected_zone_count, 3);
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.plant.expected_zone_count, 3);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [database]
            url = 'sqlite:test.db'

            [plant]
            area_id = 'HSM2'
            center_id = 'RM'
            expected_zone_count = 2

            [status]
            poll_interval_ms = 250

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.url, "sqlite:test.db");
        assert_eq!(config.plant.area_id, "HSM2");
        assert_eq!(config.plant.center_id, "RM");
        assert_eq!(config.plant.expected_zone_count, 2);
        assert_eq!(config.poll_interval(), Duration::from_millis(250));
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [plant]
            expected_zone_count = 1
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.plant.expected_zone_count, 1);
        assert_eq!(config.plant.area_id, "HSM");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_apply_env_overrides() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[
            ("ROTCOOL_DATABASE_URL", "sqlite::memory:"),
            ("ROTCOOL_AREA_ID", "HSM2"),
            ("ROTCOOL_CENTER_ID", "RM"),
            ("ROTCOOL_ZONE_COUNT", "2"),
            ("ROTCOOL_POLL_INTERVAL_MS", "500"),
            ("ROTCOOL_LOG", "warn"),
        ]));
        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.plant.area_id, "HSM2");
        assert_eq!(config.plant.center_id, "RM");
        assert_eq!(config.plant.expected_zone_count, 2);
        assert_eq!(config.poll_interval(), Duration::from_millis(500));
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_prefer_rust_log_over_rotcool_log() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[("ROTCOOL_LOG", "warn"), ("RUST_LOG", "trace")]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_split_bind_override_into_host_and_port() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[("ROTCOOL_BIND", "127.0.0.1:8080")]));
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn should_ignore_unparsable_numeric_overrides() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[
            ("ROTCOOL_PORT", "http"),
            ("ROTCOOL_ZONE_COUNT", "three"),
        ]));
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.plant.expected_zone_count, 3);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zone_count_outside_one_to_three() {
        for count in [0, 4] {
            let mut config = Config::default();
            config.plant.expected_zone_count = count;
            assert!(matches!(
                config.validate(),
                Err(ConfigError::Validation(_))
            ));
        }
    }

    #[test]
    fn should_reject_zero_poll_interval() {
        let mut config = Config::default();
        config.status.poll_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_blank_plant_ids() {
        let mut config = Config::default();
        config.plant.center_id = "  ".to_string();
        assert!(config.validate().is_err());
    }
}

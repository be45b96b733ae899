//! Runtime settings for order tracking.
//!
//! Defaults match the demo page: a 15 second cadence and the fixed ETA texts. A JSON file
//! named by `ORDER_TRACKING_CONFIG` can override any field, and `ORDER_TRACKING_TICK`
//! (a humantime duration such as `2s`) overrides the cadence last.
//!
//! ```json
//! { "tick_interval": "5s", "arriving_soon_eta": "Any minute now" }
//! ```

use crate::model::EtaMessages;
use serde::Deserialize;
use std::env::VarError;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

pub const CONFIG_PATH_ENV: &str = "ORDER_TRACKING_CONFIG";
pub const TICK_ENV: &str = "ORDER_TRACKING_TICK";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tick interval {value:?}: {reason}")]
    InvalidTick { value: String, reason: String },

    #[error("mailbox_size must be at least 1")]
    ZeroMailbox,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// How often the driver advances an order.
    #[serde(with = "humantime_serde")]
    pub tick_interval: Duration,
    pub arriving_soon_eta: String,
    pub delivered_eta: String,
    /// ETA shown from confirmation until the order goes out for delivery.
    pub initial_eta: Option<String>,
    /// Capacity of the tracking actor's mailbox.
    pub mailbox_size: usize,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        let eta = EtaMessages::default();
        Self {
            tick_interval: Duration::from_secs(15),
            arriving_soon_eta: eta.arriving_soon,
            delivered_eta: eta.delivered,
            initial_eta: None,
            mailbox_size: 32,
        }
    }
}

impl TrackingConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Defaults, then the file from `ORDER_TRACKING_CONFIG`, then `ORDER_TRACKING_TICK`.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                info!(path = %path.display(), "Loading tracking config");
                Self::from_file(&path)?
            }
            None => Self::default(),
        };
        if let Some(tick) = tick_override(std::env::var(TICK_ENV))? {
            config.tick_interval = tick;
            debug!(?tick, "Tick interval overridden from environment");
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval.is_zero() {
            return Err(ConfigError::InvalidTick {
                value: "0s".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.mailbox_size == 0 {
            return Err(ConfigError::ZeroMailbox);
        }
        Ok(())
    }

    pub fn eta_messages(&self) -> EtaMessages {
        EtaMessages {
            arriving_soon: self.arriving_soon_eta.clone(),
            delivered: self.delivered_eta.clone(),
        }
    }
}

/// An unset variable means no override; a set but unreadable one is an error.
fn tick_override(var: Result<String, VarError>) -> Result<Option<Duration>, ConfigError> {
    match var {
        Ok(value) => parse_tick(&value).map(Some),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::InvalidTick {
            value: raw.to_string_lossy().into_owned(),
            reason: format!("{TICK_ENV} is not valid unicode"),
        }),
    }
}

#[derive(Deserialize)]
struct Tick(#[serde(with = "humantime_serde")] Duration);

fn parse_tick(value: &str) -> Result<Duration, ConfigError> {
    serde_json::from_value::<Tick>(serde_json::Value::String(value.to_string()))
        .map(|Tick(tick)| tick)
        .map_err(|e| ConfigError::InvalidTick {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = TrackingConfig::default();
        assert_eq!(config.tick_interval, Duration::from_secs(15));
        assert_eq!(config.arriving_soon_eta, "In 10-15 minutes");
        assert_eq!(config.delivered_eta, "Delivered");
        assert_eq!(config.mailbox_size, 32);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            TrackingConfig::from_json_str(r#"{ "tick_interval": "2s", "delivered_eta": "Done" }"#)
                .unwrap();
        assert_eq!(config.tick_interval, Duration::from_secs(2));
        assert_eq!(config.delivered_eta, "Done");
        assert_eq!(config.arriving_soon_eta, "In 10-15 minutes");
        assert_eq!(config.eta_messages().delivered, "Done");
    }

    #[test]
    fn rejects_zero_tick_and_mailbox() {
        assert!(matches!(
            TrackingConfig::from_json_str(r#"{ "tick_interval": "0s" }"#),
            Err(ConfigError::InvalidTick { .. })
        ));
        assert!(matches!(
            TrackingConfig::from_json_str(r#"{ "mailbox_size": 0 }"#),
            Err(ConfigError::ZeroMailbox)
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            TrackingConfig::from_json_str("{ tick_interval"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "initial_eta": "6:15 PM - 6:30 PM" }}"#).unwrap();
        let config = TrackingConfig::from_file(file.path()).unwrap();
        assert_eq!(config.initial_eta.as_deref(), Some("6:15 PM - 6:30 PM"));

        let missing = TrackingConfig::from_file(Path::new("/nonexistent/tracking.json"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn parses_humantime_ticks() {
        assert_eq!(parse_tick("1m 30s").unwrap(), Duration::from_secs(90));
        assert!(matches!(parse_tick("soon"), Err(ConfigError::InvalidTick { .. })));
    }

    #[test]
    fn tick_override_from_environment_value() {
        assert_eq!(tick_override(Err(VarError::NotPresent)).unwrap(), None);
        assert_eq!(
            tick_override(Ok("2s".to_string())).unwrap(),
            Some(Duration::from_secs(2))
        );
        assert!(matches!(
            tick_override(Err(VarError::NotUnicode(std::ffi::OsString::from("2s")))),
            Err(ConfigError::InvalidTick { .. })
        ));
    }
}

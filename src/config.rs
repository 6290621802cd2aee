//! Configuration management for the contact form core.
//!
//! Values come from environment variables, with an optional `.env` file loaded
//! through `dotenvy`. Only the form endpoint is required; the reviews settings
//! default to the placeholders that mark the integration as unconfigured.

use crate::error::{ConfigError, ConfigResult};
use crate::reviews::ReviewsConfig;
use std::env;
use std::time::Duration;

/// Configuration for the contact form core.
#[derive(Debug, Clone)]
pub struct Config {
    /// Form backend endpoint the contact form posts to
    pub form_endpoint: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Delay before a notification starts closing, in milliseconds (default: 5000)
    pub notification_dismiss_ms: u64,

    /// Length of the notification exit transition, in milliseconds (default: 300)
    pub notification_exit_ms: u64,

    /// Google reviews integration settings
    pub reviews: ReviewsConfig,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `FORM_ENDPOINT`: URL of the form backend
    ///
    /// Optional environment variables:
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `NOTIFICATION_DISMISS_MS`: auto-dismiss delay (default: 5000)
    /// - `NOTIFICATION_EXIT_MS`: exit transition length (default: 300)
    /// - `GOOGLE_PLACE_ID`, `GOOGLE_API_KEY`, `GOOGLE_REVIEW_URL`, `GOOGLE_MAPS_URL`
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let form_endpoint = env::var("FORM_ENDPOINT")
            .map_err(|_| ConfigError::MissingVar("FORM_ENDPOINT".to_string()))?;

        if !form_endpoint.starts_with("http://") && !form_endpoint.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "FORM_ENDPOINT".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let notification_dismiss_ms = Self::parse_env_u64("NOTIFICATION_DISMISS_MS", 5000)?;
        let notification_exit_ms = Self::parse_env_u64("NOTIFICATION_EXIT_MS", 300)?;

        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be at least 1 second".to_string(),
            });
        }

        let defaults = ReviewsConfig::default();
        let reviews = ReviewsConfig {
            place_id: env::var("GOOGLE_PLACE_ID").unwrap_or(defaults.place_id),
            api_key: env::var("GOOGLE_API_KEY").unwrap_or(defaults.api_key),
            review_url: env::var("GOOGLE_REVIEW_URL").unwrap_or(defaults.review_url),
            maps_url: env::var("GOOGLE_MAPS_URL").unwrap_or(defaults.maps_url),
            api_base_url: defaults.api_base_url,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            form_endpoint,
            request_timeout,
            notification_dismiss_ms,
            notification_exit_ms,
            reviews,
            log_level,
        })
    }

    /// Auto-dismiss delay as a `Duration`.
    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.notification_dismiss_ms)
    }

    /// Exit transition length as a `Duration`.
    pub fn exit_transition(&self) -> Duration {
        Duration::from_millis(self.notification_exit_ms)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            form_endpoint: String::new(),
            request_timeout: 10,
            notification_dismiss_ms: 5000,
            notification_exit_ms: 300,
            reviews: ReviewsConfig::default(),
            log_level: "error".to_string(),
        }
    }
}

//! Configuration validation.

use crate::config::types::UnitelConfig;
use crate::errors::ConfigError;

/// Validate the merged configuration.
///
/// # Errors
///
/// Returns an error when the base URL lacks an http(s) scheme, when the
/// refresh interval is zero (which would spin the poller) or when the
/// request timeout is zero (every request would fail at once).
pub fn validate_config(config: &UnitelConfig) -> Result<(), ConfigError> {
    let base_url = config.server.base_url();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
        });
    }

    if config.refresh.interval_ms == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "refresh.interval_ms must be greater than zero".to_string(),
        });
    }

    if config.server.request_timeout_ms == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "server.request_timeout_ms must be greater than zero".to_string(),
        });
    }

    Ok(())
}

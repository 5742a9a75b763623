//! Default values and resolved accessors for configuration types.

use std::time::Duration;

use crate::config::types::{NotificationConfig, RefreshConfig, ServerConfig, UnitelConfig};
use crate::dashboard::DashboardSettings;
use crate::notify::NotificationTiming;

/// Base URL used when neither config files nor the environment set one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable overriding `[server] base_url`.
pub const BASE_URL_ENV: &str = "UNITEL_BASE_URL";

impl ServerConfig {
    /// Returns the base URL, defaulting to `http://localhost:8080`.
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Returns the request timeout, defaulting to 10 seconds.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms.unwrap_or(10_000))
    }
}

impl RefreshConfig {
    /// Returns the auto-refresh interval, defaulting to 5 seconds.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.unwrap_or(5_000))
    }

    /// Returns the post-command reload delay, defaulting to 1 second.
    pub fn followup_delay(&self) -> Duration {
        Duration::from_millis(self.followup_delay_ms.unwrap_or(1_000))
    }
}

impl NotificationConfig {
    /// Returns the toast display time, defaulting to 3 seconds.
    pub fn display(&self) -> Duration {
        Duration::from_millis(self.display_ms.unwrap_or(3_000))
    }

    /// Returns the toast exit animation time, defaulting to 300ms.
    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms.unwrap_or(300))
    }
}

impl UnitelConfig {
    /// Collect the controller timings from the resolved configuration.
    pub fn dashboard_settings(&self) -> DashboardSettings {
        DashboardSettings {
            refresh_interval: self.refresh.interval(),
            followup_delay: self.refresh.followup_delay(),
            notifications: NotificationTiming {
                display: self.notifications.display(),
                exit: self.notifications.exit(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unitel_config_default() {
        let config = UnitelConfig::default();
        assert_eq!(config.server.base_url(), "http://localhost:8080");
        assert_eq!(config.server.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.refresh.interval(), Duration::from_secs(5));
        assert_eq!(config.refresh.followup_delay(), Duration::from_secs(1));
        assert_eq!(config.notifications.display(), Duration::from_secs(3));
        assert_eq!(config.notifications.exit(), Duration::from_millis(300));
    }

    #[test]
    fn test_dashboard_settings_follow_config() {
        let config: UnitelConfig = toml::from_str(
            r#"
[refresh]
interval_ms = 2000

[notifications]
exit_ms = 150
"#,
        )
        .unwrap();

        let settings = config.dashboard_settings();
        assert_eq!(settings.refresh_interval, Duration::from_secs(2));
        assert_eq!(settings.followup_delay, Duration::from_secs(1));
        assert_eq!(settings.notifications.display, Duration::from_secs(3));
        assert_eq!(settings.notifications.exit, Duration::from_millis(150));
    }

    #[test]
    fn test_explicit_zero_preserved() {
        let config: UnitelConfig = toml::from_str(
            r#"
[refresh]
followup_delay_ms = 0
"#,
        )
        .unwrap();

        assert_eq!(
            config.refresh.followup_delay(),
            Duration::ZERO,
            "explicit zero should be preserved, not overridden to default"
        );
    }
}

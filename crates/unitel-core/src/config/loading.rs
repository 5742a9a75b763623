//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.unitel/config.toml`
//! 3. **Project config** - `./.unitel/config.toml`
//! 4. **Environment** - `UNITEL_BASE_URL`
//! 5. **CLI arguments** - Command-line flags (applied by the caller)

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::defaults::BASE_URL_ENV;
use crate::config::types::{NotificationConfig, RefreshConfig, ServerConfig, UnitelConfig};
use crate::errors::ConfigError;

/// Load configuration from the hierarchy of config files and the environment.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed.
/// Missing config files are not errors. The result is not validated: CLI
/// flags still apply on top, so callers validate the final config.
pub fn load_hierarchy() -> Result<UnitelConfig, ConfigError> {
    let mut paths = Vec::new();
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".unitel").join("config.toml"));
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".unitel").join("config.toml"));
    }

    load_from_paths(&paths, std::env::var(BASE_URL_ENV).ok())
}

/// Load and merge the given config files in order, then apply the base URL
/// override. Exposed separately so the hierarchy can be exercised without
/// touching the real home directory.
pub fn load_from_paths(
    paths: &[PathBuf],
    base_url_override: Option<String>,
) -> Result<UnitelConfig, ConfigError> {
    let mut config = UnitelConfig::default();

    for path in paths {
        if let Some(layer) = load_config_file(path)? {
            config = merge_configs(config, layer);
        }
    }

    if let Some(url) = base_url_override.filter(|u| !u.trim().is_empty()) {
        config.server.base_url = Some(url);
    }

    Ok(config)
}

/// Load a configuration file. Returns `Ok(None)` when the file does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<UnitelConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::IoError {
                path: path.display().to_string(),
                source: e,
            });
        }
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::debug!(event = "core.config.file_loaded", path = %path.display());

    Ok(Some(config))
}

/// Merge two configurations, with override_config taking precedence.
///
/// Each field of the override replaces the base value only if present.
pub fn merge_configs(base: UnitelConfig, override_config: UnitelConfig) -> UnitelConfig {
    UnitelConfig {
        server: ServerConfig {
            base_url: override_config.server.base_url.or(base.server.base_url),
            request_timeout_ms: override_config
                .server
                .request_timeout_ms
                .or(base.server.request_timeout_ms),
        },
        refresh: RefreshConfig {
            interval_ms: override_config
                .refresh
                .interval_ms
                .or(base.refresh.interval_ms),
            followup_delay_ms: override_config
                .refresh
                .followup_delay_ms
                .or(base.refresh.followup_delay_ms),
        },
        notifications: NotificationConfig {
            display_ms: override_config
                .notifications
                .display_ms
                .or(base.notifications.display_ms),
            exit_ms: override_config
                .notifications
                .exit_ms
                .or(base.notifications.exit_ms),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_missing_files_yield_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            load_from_paths(&[dir.path().join("absent").join("config.toml")], None).unwrap();
        assert_eq!(config, UnitelConfig::default());
    }

    #[test]
    fn test_config_hierarchy_integration() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("user.toml");
        let project = dir.path().join("project.toml");

        fs::write(
            &user,
            r#"
[server]
base_url = "http://10.0.0.5:8080"
request_timeout_ms = 2500

[refresh]
interval_ms = 10000
"#,
        )
        .unwrap();
        fs::write(
            &project,
            r#"
[refresh]
interval_ms = 2000
"#,
        )
        .unwrap();

        let config = load_from_paths(&[user, project], None).unwrap();
        assert_eq!(config.server.base_url(), "http://10.0.0.5:8080"); // From user
        assert_eq!(config.server.request_timeout(), Duration::from_millis(2500));
        assert_eq!(config.refresh.interval(), Duration::from_secs(2)); // From project
    }

    #[test]
    fn test_env_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("config.toml");
        fs::write(&user, "[server]\nbase_url = \"http://file:8080\"\n").unwrap();

        let config =
            load_from_paths(&[user], Some("http://env.example:9000".to_string())).unwrap();
        assert_eq!(config.server.base_url(), "http://env.example:9000");
    }

    #[test]
    fn test_blank_env_override_ignored() {
        let config = load_from_paths(&[], Some("  ".to_string())).unwrap();
        assert_eq!(config.server.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_parse_error_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("config.toml");
        fs::write(&broken, "invalid toml [[[").unwrap();

        let err = load_from_paths(&[broken.clone()], None).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains(&broken.display().to_string()));
    }

    #[test]
    fn test_invalid_merged_config_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server]\nbase_url = \"ftp://nope\"\n").unwrap();

        let config = load_from_paths(&[path], None).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_bad_file_url_keeps_other_settings_for_later_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[server]\nbase_url = \"ftp://nope\"\n\n[refresh]\ninterval_ms = 2000\n",
        )
        .unwrap();

        let mut config = load_from_paths(&[path], None).unwrap();
        assert_eq!(config.refresh.interval(), Duration::from_secs(2));

        config.server.base_url = Some("http://flag.example:8080".to_string());
        assert!(config.validate().is_ok());
        assert_eq!(config.refresh.interval(), Duration::from_secs(2));
    }

    #[test]
    fn test_merge_keeps_base_when_override_unset() {
        let base: UnitelConfig = toml::from_str(
            r#"
[notifications]
display_ms = 5000
exit_ms = 500
"#,
        )
        .unwrap();
        let override_config: UnitelConfig = toml::from_str(
            r#"
[notifications]
exit_ms = 100
"#,
        )
        .unwrap();

        let merged = merge_configs(base, override_config);
        assert_eq!(merged.notifications.display_ms, Some(5000));
        assert_eq!(merged.notifications.exit_ms, Some(100));
    }
}

//! Configuration type definitions.
//!
//! Every tunable is optional so that merging layers can tell "unset" apart
//! from an explicit value. Accessors in [`super::defaults`] resolve the
//! effective value.

use serde::{Deserialize, Serialize};

/// Root configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitelConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub refresh: RefreshConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Backend location and request limits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the operations backend, without the `/api` suffix.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Per-request timeout in milliseconds.
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

/// Polling cadence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Auto-refresh interval in milliseconds.
    #[serde(default)]
    pub interval_ms: Option<u64>,

    /// Delay before the silent reload that follows a hire/fire command.
    #[serde(default)]
    pub followup_delay_ms: Option<u64>,
}

/// Toast timings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a toast stays fully visible.
    #[serde(default)]
    pub display_ms: Option<u64>,

    /// Length of the leaving phase before the toast is removed.
    #[serde(default)]
    pub exit_ms: Option<u64>,
}

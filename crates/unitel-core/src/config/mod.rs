//! # Configuration System
//!
//! Hierarchical TOML configuration for the dashboard.
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.unitel/config.toml
//! [server]
//! base_url = "http://localhost:8080"
//! request_timeout_ms = 10000
//!
//! [refresh]
//! interval_ms = 5000
//! followup_delay_ms = 1000
//!
//! [notifications]
//! display_ms = 3000
//! exit_ms = 300
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use unitel_core::config::UnitelConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = UnitelConfig::load_hierarchy()?;
//!     println!("polling {}", config.server.base_url());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use defaults::{BASE_URL_ENV, DEFAULT_BASE_URL};
pub use types::{NotificationConfig, RefreshConfig, ServerConfig, UnitelConfig};
pub use validation::validate_config;

impl UnitelConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details. The result is not
    /// validated; call [`UnitelConfig::validate`] once overrides are applied.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}

use clap::ArgMatches;
use tracing::{info, warn};

use unitel_core::api::HttpDashboardApi;
use unitel_core::config::{BASE_URL_ENV, UnitelConfig};
use unitel_core::events;

/// Load config, falling back to defaults with a warning on failure.
///
/// The base URL from the environment still applies on the fallback path.
pub fn load_config_with_warning() -> UnitelConfig {
    match UnitelConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.unitel/config.toml and ./.unitel/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );

            let mut config = UnitelConfig::default();
            config.server.base_url = std::env::var(BASE_URL_ENV)
                .ok()
                .filter(|u| !u.trim().is_empty());
            config
        }
    }
}

/// Resolve the effective config: file hierarchy, environment, then `--url`.
/// Validation runs once, on the final result.
pub fn resolve_config(matches: &ArgMatches) -> Result<UnitelConfig, Box<dyn std::error::Error>> {
    let mut config = load_config_with_warning();

    if let Some(url) = matches.get_one::<String>("url") {
        config.server.base_url = Some(url.clone());
    }

    config.validate().inspect_err(|e| {
        eprintln!("❌ Invalid configuration: {}", e);
        events::log_app_error(e);
    })?;

    info!(
        event = "cli.config.resolved",
        base_url = config.server.base_url(),
        interval_ms = config.refresh.interval().as_millis() as u64,
        request_timeout_ms = config.server.request_timeout().as_millis() as u64
    );

    Ok(config)
}

pub fn build_api(config: &UnitelConfig) -> Result<HttpDashboardApi, Box<dyn std::error::Error>> {
    Ok(HttpDashboardApi::from_config(&config.server)?)
}

/// Multi-threaded runtime for one command invocation.
pub fn runtime() -> Result<tokio::runtime::Runtime, Box<dyn std::error::Error>> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

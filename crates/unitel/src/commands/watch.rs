use std::sync::Arc;
use std::time::Duration;

use clap::ArgMatches;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use unitel_core::api::HttpDashboardApi;
use unitel_core::chart::ChartRenderer;
use unitel_core::dashboard::{Dashboard, DashboardSettings};
use unitel_core::notify::ToastKind;

use super::helpers::{build_api, resolve_config, runtime};
use crate::render::{ChartCanvas, FrameStyle, TerminalChart, TerminalRenderer};

/// A line typed into the live view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WatchCommand {
    Hire,
    Fire,
    Refresh,
    Quit,
}

impl WatchCommand {
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "c" | "contratar" => Some(WatchCommand::Hire),
            "d" | "demitir" => Some(WatchCommand::Fire),
            "r" => Some(WatchCommand::Refresh),
            "q" => Some(WatchCommand::Quit),
            _ => None,
        }
    }
}

pub(crate) fn handle_watch_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(matches)?;

    let mut settings = config.dashboard_settings();
    if let Some(interval_ms) = matches.get_one::<u64>("interval-ms") {
        settings.refresh_interval = Duration::from_millis(*interval_ms);
    }

    let api = build_api(&config)?;
    let rt = runtime()?;

    info!(
        event = "cli.watch.started",
        base_url = api.base_url(),
        interval_ms = settings.refresh_interval.as_millis() as u64
    );

    rt.block_on(run_watch(api, settings));

    // The stdin reader sits in a blocking read; don't wait for it.
    rt.shutdown_background();

    info!(event = "cli.watch.completed");

    Ok(())
}

async fn run_watch(api: HttpDashboardApi, settings: DashboardSettings) {
    let canvas = ChartCanvas::default();
    let renderer = TerminalRenderer::new(
        Box::new(std::io::stdout()),
        Arc::clone(&canvas),
        FrameStyle::Interactive,
    );
    let dashboard = Dashboard::new(
        api,
        Box::new(renderer),
        Box::new(move || {
            Box::new(TerminalChart::new(Arc::clone(&canvas), true)) as Box<dyn ChartRenderer>
        }),
        settings,
    );

    dashboard.mount().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(line)) => match WatchCommand::parse(&line) {
                    Some(WatchCommand::Quit) => break,
                    Some(command) => spawn_command(&dashboard, command),
                    None if line.trim().is_empty() => {}
                    None => {
                        dashboard.notifier().show(
                            format!("Comando desconhecido: {}", line.trim()),
                            ToastKind::Info,
                        );
                    }
                },
                Ok(None) => {
                    // Keep the live view running until Ctrl-C
                    debug!(event = "cli.watch.stdin_closed");
                    stdin_open = false;
                }
                Err(e) => {
                    warn!(event = "cli.watch.stdin_failed", error = %e);
                    stdin_open = false;
                }
            },
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    warn!(event = "cli.watch.signal_failed", error = %e);
                }
                break;
            }
        }
    }

    dashboard.unmount();
}

/// Run a command without blocking the input loop. Outcomes surface as toasts.
fn spawn_command(dashboard: &Dashboard<HttpDashboardApi>, command: WatchCommand) {
    debug!(event = "cli.watch.command_received", command = ?command);

    let dashboard = dashboard.clone();
    tokio::spawn(async move {
        let _ = match command {
            WatchCommand::Hire => dashboard.hire().await,
            WatchCommand::Fire => dashboard.fire().await,
            WatchCommand::Refresh => dashboard.refresh().await,
            WatchCommand::Quit => Ok(()),
        };
    });
}

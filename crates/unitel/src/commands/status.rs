use clap::ArgMatches;
use tracing::{error, info};

use unitel_core::UnitelError;
use unitel_core::api::DashboardApi;
use unitel_core::dashboard::LOAD_ERROR_MESSAGE;
use unitel_core::events;
use unitel_core::view::DashboardView;

use super::helpers::{build_api, resolve_config, runtime};
use crate::render::chart::draw_series;
use crate::render::FrameStyle;
use crate::render::terminal::compose_frame;

pub(crate) fn handle_status_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.status_started", json_output = json_output);

    let config = resolve_config(matches)?;
    let api = build_api(&config)?;
    let rt = runtime()?;

    let snapshot = match rt.block_on(api.fetch_dashboard()) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("❌ {}: {}", LOAD_ERROR_MESSAGE, e);
            error!(
                event = "cli.status_failed",
                error_code = e.error_code(),
                error = %e
            );
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        let view = DashboardView::project(&snapshot);
        let chart = view.shifts.as_ref().map(draw_series).unwrap_or_default();
        print!("{}", compose_frame(&view, &chart, None, &[], FrameStyle::Plain));
    }

    info!(event = "cli.status_completed", timestamp = %snapshot.timestamp);

    Ok(())
}

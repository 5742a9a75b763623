use clap::ArgMatches;
use tracing::error;

use unitel_core::events;

pub mod helpers;

mod operation;
mod status;
mod watch;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("watch", sub_matches)) => watch::handle_watch_command(sub_matches),
        Some(("status", sub_matches)) => status::handle_status_command(sub_matches),
        Some(("hire", sub_matches)) => operation::handle_hire_command(sub_matches),
        Some(("fire", sub_matches)) => operation::handle_fire_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    events::log_app_shutdown();
    result
}

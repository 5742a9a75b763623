use clap::ArgMatches;
use tracing::{error, info};

use unitel_core::UnitelError;
use unitel_core::api::{DashboardApi, Operation};
use unitel_core::dashboard::{operation_failure_message, operation_success_message};
use unitel_core::events;

use super::helpers::{build_api, resolve_config, runtime};

pub(crate) fn handle_hire_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    run_operation(matches, Operation::Hire)
}

pub(crate) fn handle_fire_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    run_operation(matches, Operation::Fire)
}

fn run_operation(
    matches: &ArgMatches,
    operation: Operation,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.operation_started", operation = %operation);

    let config = resolve_config(matches)?;
    let api = build_api(&config)?;
    let rt = runtime()?;

    match rt.block_on(api.submit_operation(operation)) {
        Ok(()) => {
            println!("✅ {}", operation_success_message(operation));
            info!(event = "cli.operation_completed", operation = %operation);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}: {}", operation_failure_message(operation), e);
            error!(
                event = "cli.operation_failed",
                operation = %operation,
                error_code = e.error_code(),
                error = %e
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

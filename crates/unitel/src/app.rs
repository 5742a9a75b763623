use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("unitel")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Terminal dashboard for the UNITEL operations simulator")
        .long_about("Polls the UNITEL operations backend and shows card inventory, staffing, sales by shift, the customer queue, recent sales and branches. Staffing commands (hire, fire) can be sent from the live view or as one-shot subcommands.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("url")
                .long("url")
                .help("Backend base URL (overrides config and UNITEL_BASE_URL)")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("watch")
                .about("Show the live dashboard and accept staffing commands on stdin")
                .long_about(
                    "Shows the live dashboard, refreshing it on a fixed interval.\n\n\
                    Commands (type and press Enter):\n  \
                    c, contratar   start a hiring process\n  \
                    d, demitir     dismiss one employee\n  \
                    r              refresh now\n  \
                    q              quit (Ctrl-C also quits)"
                )
                .arg(
                    Arg::new("interval-ms")
                        .long("interval-ms")
                        .help("Auto-refresh interval in milliseconds (overrides config)")
                        .value_parser(value_parser!(u64).range(1..))
                )
        )
        .subcommand(
            Command::new("status")
                .about("Load the dashboard once and print it")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the raw snapshot as JSON")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(Command::new("hire").about("Start a hiring process"))
        .subcommand(Command::new("fire").about("Dismiss one employee"))
}

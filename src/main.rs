use anyhow::Result;
use clap::Parser;
use par_workbench::cli::{self, Cli, LogLevelArg};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize unified logging: routes all log::info!() etc. to the debug log file.
    // When RUST_LOG is set, also mirrors to stderr.
    // CLI --log-level flag takes highest precedence, then RUST_LOG, then config (applied in run).
    par_workbench::debug::init_log_bridge(cli.log_level.map(LogLevelArg::to_level_filter));

    log::info!("Starting par-workbench {}", par_workbench::VERSION);

    let result = cli::run(cli);
    if let Err(ref e) = result {
        eprintln!("par-workbench: error: {e:#}");
    }
    result
}

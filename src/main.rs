mod cli;
mod config;
mod error;
mod runner;

use std::process::ExitCode;

use anyhow::{Context, Result};
use bench_timer::Stopwatch;
use clap::Parser;
use tracing::{info, warn};

use crate::cli::Cli;

fn main() -> Result<ExitCode> {
    bench_utils::init_logging();

    let cli = Cli::parse();
    let config = cli
        .resolve_config()
        .context("failed to load configuration")?;
    config.color.apply();

    let Some((program, args)) = cli.command.split_first() else {
        warn!("no command given, nothing to time");
        Stopwatch::new().print_result(config.thresholds);
        return Ok(ExitCode::SUCCESS);
    };

    let outcome = runner::run_command(program, args, cli.quiet_output)?;
    if !outcome.success() {
        info!(code = ?outcome.code, "`{program}` exited unsuccessfully");
    }
    outcome.stopwatch.print_result(config.thresholds);

    Ok(outcome.exit_code())
}

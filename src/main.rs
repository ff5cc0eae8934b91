// src/main.rs
use std::process::ExitCode;

use anyhow::{Context, Result};
use line_sieve::{app, cli::Args, config::Config, presentation};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[line_sieve] {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::from_env();
    let config = Config::try_from(args)?;
    log::debug!("{config:?}");

    let buckets = app::run(&config)?;
    presentation::print_report(&buckets, config.verbosity, config.format)
        .context("failed to print statistics")?;
    Ok(())
}

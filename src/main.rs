// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use srclines::args::Args;
use srclines::config::Config;
use srclines::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::try_from(args).context("invalid arguments")?;
    let result = srclines_engine::run(&config)
        .with_context(|| format!("failed to count lines in {}", config.walk.root.display()))?;
    presentation::print_results(&result, &config).context("failed to write results")?;
    Ok(())
}

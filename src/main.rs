mod manager;

use crate::manager::Manager;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seriesmean::{Method, report::Format};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// Problem file (TOML).
    #[arg(long)]
    input: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute the mean and print the working.
    Solve {
        #[arg(long, value_enum)]
        method: Option<Method>,

        #[arg(long, allow_negative_numbers = true)]
        assumed_mean: Option<f64>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Compute the mean with every applicable method and check they agree.
    Compare {
        #[arg(long, allow_negative_numbers = true)]
        assumed_mean: Option<f64>,
    },
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let mgr = Manager::new(args.input).context("failed to construct mgr")?;

    match args.command {
        Command::Solve {
            method,
            assumed_mean,
            format,
        } => mgr.solve(method, assumed_mean, format)?,
        Command::Compare { assumed_mean } => mgr.compare(assumed_mean)?,
    }

    Ok(())
}

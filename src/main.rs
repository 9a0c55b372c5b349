use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::debug;

mod cli;
mod config;
mod core;
mod error;
mod utils;

use cli::combine::{self, CombineArgs};
use config::Config;
use error::Result;

#[derive(Parser)]
#[command(name = "lyric-combine")]
#[command(about = "Interleave parallel lyric files line by line")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file path (optional)
    #[arg(short, long)]
    config: Option<String>,

    #[command(flatten)]
    combine: CombineArgs,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    utils::logging::init_logging(cli.verbose)
        .map_err(error::CombineError::Internal)?;

    let config = Config::load(cli.config.as_deref())?;

    let outcome = combine::execute(cli.combine, &config, io::stdin().lock(), io::stdout().lock())?;
    debug!(
        "Wrote {} bytes to {} with {} error(s)",
        outcome.text.len(),
        outcome.output_path.display(),
        outcome.failures
    );

    Ok(outcome.exit_code())
}

use clap::Args;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

use crate::cli::prompt;
use crate::config::validation::ConfigValidator;
use crate::config::Config;
use crate::core::{combine_files, save_to_file};
use crate::error::Result;

/// Exit status used by `--strict` when any error was logged.
pub const STRICT_FAILURE_STATUS: u8 = 2;

#[derive(Args, Debug, Default)]
pub struct CombineArgs {
    /// Lyric files to combine (prompts on standard input when omitted)
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,

    /// File to save the combined lyrics to
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Exit with status 2 if any file could not be read or saved
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineOutcome {
    pub text: String,
    pub output_path: PathBuf,
    /// Open, read and save errors that were logged during the run.
    pub failures: usize,
    pub strict: bool,
}

impl CombineOutcome {
    pub fn exit_status(&self) -> u8 {
        if self.strict && self.failures > 0 {
            STRICT_FAILURE_STATUS
        } else {
            0
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

/// Gather filenames, combine them, print the result and save it.
///
/// Unreadable inputs and a failed save are logged and counted, never
/// returned as errors.
pub fn execute<R, W>(args: CombineArgs, config: &Config, input: R, mut output: W) -> Result<CombineOutcome>
where
    R: BufRead,
    W: Write,
{
    let output_path = match args.output {
        Some(path) => {
            ConfigValidator::validate_output_path(&path)?;
            path
        }
        None => config.output_path.clone(),
    };
    let strict = args.strict || config.strict;

    let filenames: Vec<String> = if args.files.is_empty() {
        prompt::read_filenames(input, &mut output)?
    } else {
        args.files.iter().map(|name| name.trim().to_string()).collect()
    };
    info!("Combining lyrics from: {:?}", filenames);

    let combination = combine_files(&filenames, &config.formatter());
    info!("Formatted {} row groups", combination.groups);

    writeln!(output, "{}", combination.text)?;
    output.flush()?;

    let mut failures = combination.failed_sources;
    if save_to_file(&output_path, &combination.text).is_err() {
        failures += 1;
    } else {
        info!("Saved combined lyrics to {}", output_path.display());
    }

    if failures > 0 {
        warn!("Finished with {} error(s)", failures);
    }

    Ok(CombineOutcome {
        text: combination.text,
        output_path,
        failures,
        strict,
    })
}

//! wmark
//!
//! Trims a video to a fixed duration, burns in a text watermark in the
//! bottom-right corner and transcodes it, by running FFmpeg.
//!
//! # Usage
//!
//! ```bash
//! wmark input.mov output.mp4
//! wmark input.mov output.webm --text "O'Brien's: draft" --duration 5
//! wmark input.mov output.mp4 --dry-run --json
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use wmark_cli::cli::{commands, Cli};
use wmark_cli::error::{ErrorCategory, WmarkError};
use wmark_cli::utils::init_logging;

fn main() -> ExitCode {
    // Usage errors exit here through clap
    let cli = Cli::parse();
    init_logging(&cli.logging_config());
    debug!("Parsed arguments: {:?}", cli);

    let quiet = cli.quiet;
    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_error(&err, quiet),
    }
}

/// Print the error chain and pick the exit code from its category
fn report_error(err: &anyhow::Error, quiet: bool) -> ExitCode {
    let wmark_error = err.downcast_ref::<WmarkError>();
    let category = wmark_error
        .map(WmarkError::category)
        .unwrap_or(ErrorCategory::Processing);

    eprintln!("error: {}", err);
    for cause in err.chain().skip(1) {
        eprintln!("  caused by: {}", cause);
    }

    // Tool output was not shown live, so show what was kept
    if quiet {
        if let Some(tail) = wmark_error.and_then(WmarkError::stderr_tail) {
            eprintln!("\nFFmpeg output:\n{}", tail);
        }
    }

    ExitCode::from(category.exit_code())
}

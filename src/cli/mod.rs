//! CLI module for wmark
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::Parser;

use crate::utils::logging::{LogFormat, LogLevel, LoggingConfig};

pub mod commands;

/// wmark - trim a video, burn in a text watermark and transcode it
///
/// The output container is chosen from the output file extension. An existing
/// output file is overwritten.
#[derive(Parser, Debug)]
#[command(name = "wmark")]
#[command(about = "Trim a video, add a text watermark, and transcode it to a new file")]
#[command(version)]
pub struct Cli {
    /// Path to the input video file
    pub input: PathBuf,

    /// Path for the processed video file (extension sets format)
    pub output: PathBuf,

    /// Text to use for the watermark [default: "Sample Watermark"]
    #[arg(short = 't', long = "text")]
    pub text: Option<String>,

    /// Length of the output clip in seconds [default: 10]
    #[arg(short = 'd', long = "duration", value_parser = clap::value_parser!(u32).range(1..))]
    pub duration: Option<u32>,

    /// Path to a TTF font file to render the watermark [default: platform font]
    #[arg(long, conflicts_with = "no_font")]
    pub font: Option<PathBuf>,

    /// Do not pass a font file; let FFmpeg use its default font
    #[arg(long)]
    pub no_font: bool,

    /// FFmpeg program name or path [default: ffmpeg]
    #[arg(long, value_name = "PROGRAM")]
    pub ffmpeg: Option<String>,

    /// Configuration file (TOML). Defaults to ./wmark.toml when present
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the FFmpeg command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// With --dry-run, print the command as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Do not forward FFmpeg's diagnostic output
    #[arg(short, long)]
    pub quiet: bool,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    /// Log output format (pretty, compact, json)
    #[arg(long, default_value = "compact")]
    pub log_format: LogFormat,
}

impl Cli {
    /// Logging settings requested on the command line
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level,
            format: self.log_format,
            ..LoggingConfig::default()
        }
    }
}

//! wmark Library
//!
//! Builds and runs the FFmpeg command that trims a video, overlays a text
//! watermark with the `drawtext` filter and transcodes the result.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::errors::DomainError;
pub use domain::model::{AppConfig, ClipDuration, DrawtextStyle, ProcessingRequest};
pub use domain::rules::{build_drawtext_filter, drawtext_options, escape_drawtext, FilterOptionList};
pub use engine::{build_invocation, CommandInvocation};
pub use error::{ErrorCategory, WmarkError, WmarkResult};

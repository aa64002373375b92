//! FFmpeg command-line assembly

use std::ffi::{OsStr, OsString};
use std::fmt;

use serde_json::json;

use crate::domain::model::ProcessingRequest;

/// Replace existing output without prompting
pub const OVERWRITE_FLAG: &str = "-y";
pub const INPUT_FLAG: &str = "-i";
/// Limit output duration
pub const DURATION_FLAG: &str = "-t";
/// Video filter chain
pub const VIDEO_FILTER_FLAG: &str = "-vf";

/// A program plus its discrete arguments. Never joined into a shell string for
/// execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    program: OsString,
    args: Vec<OsString>,
}

impl CommandInvocation {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Program name for messages
    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Arguments as UTF-8, replacing invalid sequences
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    /// Build a `std::process::Command` with the program and arguments
    pub fn to_command(&self) -> std::process::Command {
        let mut command = std::process::Command::new(&self.program);
        command.args(&self.args);
        command
    }

    /// JSON description for `--dry-run --json`
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "program": self.program_name(),
            "args": self.args_lossy(),
            "command_line": self.to_string(),
        })
    }
}

/// Quoted for display only; the process is never started through a shell.
impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program.to_string_lossy()))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(&arg.to_string_lossy()))?;
        }
        Ok(())
    }
}

fn shell_quote(value: &str) -> String {
    let is_plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '=' | '@' | ',' | '+'));
    if is_plain {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', "'\"'\"'"))
    }
}

/// Assemble `<program> -y -i <input> -t <secs> -vf <filter> <output>`
pub fn build_invocation(program: impl Into<OsString>, request: &ProcessingRequest, filter: &str) -> CommandInvocation {
    CommandInvocation::new(program)
        .arg(OVERWRITE_FLAG)
        .arg(INPUT_FLAG)
        .arg(request.input.as_os_str())
        .arg(DURATION_FLAG)
        .arg(request.duration.to_string())
        .arg(VIDEO_FILTER_FLAG)
        .arg(filter)
        .arg(request.output.as_os_str())
}

// Domain models - Core types and data structures

use std::fmt;
use std::num::NonZeroU32;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

#[cfg(test)]
mod tests;

/// Default watermark text when none is given
pub const DEFAULT_WATERMARK_TEXT: &str = "Sample Watermark";

/// Default clip length in seconds
pub const DEFAULT_DURATION_SECS: u32 = 10;

/// Default external tool program name, resolved through PATH
pub const DEFAULT_FFMPEG_PROGRAM: &str = "ffmpeg";

/// Platform font used when neither the CLI nor the config names one
#[cfg(target_os = "windows")]
pub const DEFAULT_FONT_PATH: &str = "C:/Windows/Fonts/arialbd.ttf";
#[cfg(target_os = "macos")]
pub const DEFAULT_FONT_PATH: &str = "/System/Library/Fonts/Supplemental/Arial Bold.ttf";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Length of the output clip, in whole seconds. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClipDuration(NonZeroU32);

impl ClipDuration {
    /// Create a duration from seconds, rejecting zero
    pub fn from_secs(seconds: u32) -> Result<Self, DomainError> {
        NonZeroU32::new(seconds)
            .map(Self)
            .ok_or_else(|| DomainError::BadArgs("Duration must be a positive number of seconds".to_string()))
    }

    pub fn as_secs(&self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for ClipDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single trim + watermark + transcode job
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingRequest {
    /// Video to read
    pub input: PathBuf,
    /// Target file; overwritten if it exists. Its extension selects the container.
    pub output: PathBuf,
    /// Watermark text, unescaped
    pub text: String,
    pub duration: ClipDuration,
    /// Font file handed to the text overlay; `None` lets the tool pick its default
    pub font: Option<PathBuf>,
}

impl ProcessingRequest {
    /// Create a validated processing request
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        text: impl Into<String>,
        duration: ClipDuration,
        font: Option<PathBuf>,
    ) -> Result<Self, DomainError> {
        let request = Self {
            input: input.into(),
            output: output.into(),
            text: text.into(),
            duration,
            font,
        };
        request.validate()?;
        Ok(request)
    }

    /// Check path invariants
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.input.as_os_str().is_empty() {
            return Err(DomainError::BadArgs("Input path cannot be empty".to_string()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(DomainError::BadArgs("Output path cannot be empty".to_string()));
        }
        if normalized(&self.input) == normalized(&self.output) {
            return Err(DomainError::BadArgs(format!(
                "Output path must differ from input path: {}",
                self.input.display()
            )));
        }
        if let Some(font) = &self.font {
            if font.as_os_str().is_empty() {
                return Err(DomainError::BadArgs("Font path cannot be empty".to_string()));
            }
            // The filter expression is a string, so the path must be one too
            if font.to_str().is_none() {
                return Err(DomainError::BadArgs(format!(
                    "Font path must be valid UTF-8: {}",
                    font.display()
                )));
            }
        }
        Ok(())
    }

    pub fn font_path(&self) -> Option<&Path> {
        self.font.as_deref()
    }
}

/// Path components without `.` entries, so `./a.mp4` and `a.mp4` compare equal
fn normalized(path: &Path) -> Vec<Component<'_>> {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

/// Reject characters that would end a drawtext option value
fn check_option_value(key: &str, value: &str) -> Result<(), DomainError> {
    if value.contains(|c: char| matches!(c, ':' | '\'' | '\\')) {
        return Err(DomainError::InvalidConfig(format!(
            "{} cannot contain ':', '\'' or '\\': {}",
            key, value
        )));
    }
    Ok(())
}

/// Styling of the text overlay.
///
/// The defaults render white 32px text on a semi-transparent black box with
/// 10px padding, anchored 20px from the bottom-right corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawtextStyle {
    pub font_color: String,
    pub font_size: u32,
    /// Draw a background box behind the text
    pub box_enabled: bool,
    pub box_color: String,
    /// Box padding around the text, in pixels
    pub box_border_width: u32,
    /// Distance from the right and bottom edges, in pixels
    pub margin: u32,
}

impl Default for DrawtextStyle {
    fn default() -> Self {
        Self {
            font_color: "white".to_string(),
            font_size: 32,
            box_enabled: true,
            box_color: "black@0.4".to_string(),
            box_border_width: 10,
            margin: 20,
        }
    }
}

impl DrawtextStyle {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.font_color.trim().is_empty() {
            return Err(DomainError::InvalidConfig("style.font_color cannot be empty".to_string()));
        }
        if self.font_size == 0 {
            return Err(DomainError::InvalidConfig("style.font_size must be greater than 0".to_string()));
        }
        check_option_value("style.font_color", &self.font_color)?;
        if self.box_enabled {
            if self.box_color.trim().is_empty() {
                return Err(DomainError::InvalidConfig("style.box_color cannot be empty".to_string()));
            }
            check_option_value("style.box_color", &self.box_color)?;
        }
        Ok(())
    }
}

/// Values used when the command line leaves an argument out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestDefaults {
    pub text: String,
    pub duration: u32,
    pub font: Option<PathBuf>,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            text: DEFAULT_WATERMARK_TEXT.to_string(),
            duration: DEFAULT_DURATION_SECS,
            font: Some(PathBuf::from(DEFAULT_FONT_PATH)),
        }
    }
}

/// How the external tool is located and supervised
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Program name or path; bare names are resolved through PATH
    pub program: String,
    /// Lines of the tool's stderr kept for error reports
    pub stderr_tail_lines: usize,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_FFMPEG_PROGRAM.to_string(),
            stderr_tail_lines: 50,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tool: ToolConfig,
    pub style: DrawtextStyle,
    pub defaults: RequestDefaults,
}

impl AppConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.tool.program.trim().is_empty() {
            return Err(DomainError::InvalidConfig("tool.program cannot be empty".to_string()));
        }
        self.style.validate()?;
        if self.defaults.duration == 0 {
            return Err(DomainError::InvalidConfig("defaults.duration must be greater than 0".to_string()));
        }
        if matches!(&self.defaults.font, Some(font) if font.as_os_str().is_empty()) {
            return Err(DomainError::InvalidConfig("defaults.font cannot be empty".to_string()));
        }
        Ok(())
    }
}

// TOML config adapter - Configuration loading from TOML files

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::model::AppConfig;
use crate::error::{WmarkError, WmarkResult};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "wmark.toml";

/// TOML configuration adapter
pub struct TomlConfigAdapter {
    search_dir: PathBuf,
}

impl TomlConfigAdapter {
    /// Create adapter that discovers config files in the current directory
    pub fn new() -> Self {
        Self::with_search_dir(".")
    }

    /// Create adapter that discovers config files in `dir`
    pub fn with_search_dir(dir: impl Into<PathBuf>) -> Self {
        Self { search_dir: dir.into() }
    }

    /// Pick the config file to load: the explicit path (which must exist), or
    /// the default file if present.
    pub fn locate(&self, explicit: Option<&Path>) -> WmarkResult<Option<PathBuf>> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(WmarkError::ConfigLoad {
                    path: path.display().to_string(),
                    message: "file does not exist".to_string(),
                });
            }
            return Ok(Some(path.to_path_buf()));
        }

        let candidate = self.search_dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            debug!("Found config file {}", candidate.display());
            Ok(Some(candidate))
        } else {
            Ok(None)
        }
    }

    /// Load configuration, falling back to defaults when no file is found
    pub fn load(&self, explicit: Option<&Path>) -> WmarkResult<AppConfig> {
        match self.locate(explicit)? {
            Some(path) => Self::load_file(&path),
            None => {
                debug!("No config file found, using defaults");
                Ok(AppConfig::default())
            }
        }
    }

    /// Read a config file. Values are validated once CLI overrides are applied.
    pub fn load_file(path: &Path) -> WmarkResult<AppConfig> {
        info!("Loading configuration from: {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| WmarkError::ConfigLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse TOML config text
    pub fn parse(content: &str, origin: &str) -> WmarkResult<AppConfig> {
        let config: AppConfig = toml::from_str(content).map_err(|e| WmarkError::ConfigLoad {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        Ok(config)
    }
}

impl Default for TomlConfigAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use tempfile::TempDir;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = TomlConfigAdapter::parse("", "inline").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_sections_merge_with_defaults() {
        let config = TomlConfigAdapter::parse(
            r#"
            [tool]
            program = "/opt/ffmpeg/bin/ffmpeg"

            [style]
            font_size = 48
            box_enabled = false

            [defaults]
            text = "Draft"
            duration = 30
            font = "/fonts/custom.ttf"
            "#,
            "inline",
        )
        .unwrap();

        assert_eq!(config.tool.program, "/opt/ffmpeg/bin/ffmpeg");
        assert_eq!(config.tool.stderr_tail_lines, 50);
        assert_eq!(config.style.font_size, 48);
        assert!(!config.style.box_enabled);
        assert_eq!(config.style.font_color, "white");
        assert_eq!(config.defaults.text, "Draft");
        assert_eq!(config.defaults.duration, 30);
        assert_eq!(config.defaults.font, Some(PathBuf::from("/fonts/custom.ttf")));
    }

    #[test]
    fn test_malformed_values_are_configuration_errors() {
        let err = TomlConfigAdapter::parse("[defaults]\nduration = \"ten\"\n", "inline").unwrap_err();
        assert!(matches!(err, WmarkError::ConfigLoad { .. }));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_discovers_default_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[style]\nfont_color = \"yellow\"\n").unwrap();

        let adapter = TomlConfigAdapter::with_search_dir(dir.path());
        let config = adapter.load(None).unwrap();
        assert_eq!(config.style.font_color, "yellow");
    }

    #[test]
    fn test_no_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let adapter = TomlConfigAdapter::with_search_dir(dir.path());
        assert_eq!(adapter.locate(None).unwrap(), None);
        assert_eq!(adapter.load(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let adapter = TomlConfigAdapter::with_search_dir(dir.path());
        let missing = dir.path().join("nope.toml");
        let err = adapter.load(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_explicit_file_wins_over_default() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[defaults]\ntext = \"default file\"\n").unwrap();
        let explicit = dir.path().join("other.toml");
        std::fs::write(&explicit, "[defaults]\ntext = \"explicit\"\n").unwrap();

        let adapter = TomlConfigAdapter::with_search_dir(dir.path());
        assert_eq!(adapter.load(Some(&explicit)).unwrap().defaults.text, "explicit");
    }
}

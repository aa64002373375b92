// Adapters - External system implementations

pub mod exec_ffmpeg;
pub mod toml_config;

// Re-export adapters
pub use exec_ffmpeg::FfmpegProcessAdapter;
pub use toml_config::TomlConfigAdapter;

//! Configuration initialization and hierarchy management

use tracing::{debug, info};

use crate::adapters::TomlConfigAdapter;
use crate::cli::Cli;
use crate::domain::model::{AppConfig, ClipDuration, ProcessingRequest};
use crate::error::WmarkResult;

/// Resolve configuration following precedence: CLI > File > Defaults
pub fn initialize_configuration(cli: &Cli) -> WmarkResult<AppConfig> {
    initialize_configuration_with(&TomlConfigAdapter::new(), cli)
}

/// Same as [`initialize_configuration`] with an explicit config adapter
pub fn initialize_configuration_with(adapter: &TomlConfigAdapter, cli: &Cli) -> WmarkResult<AppConfig> {
    let mut config = adapter.load(cli.config.as_deref())?;

    let overrides = apply_cli_overrides(&mut config, cli);
    if overrides > 0 {
        info!("Applied {} CLI configuration overrides", overrides);
    }

    config.validate()?;
    Ok(config)
}

fn apply_cli_overrides(config: &mut AppConfig, cli: &Cli) -> usize {
    let mut overrides = 0;

    if let Some(program) = &cli.ffmpeg {
        debug!("CLI override: tool.program = {}", program);
        config.tool.program = program.clone();
        overrides += 1;
    }
    if let Some(text) = &cli.text {
        config.defaults.text = text.clone();
        overrides += 1;
    }
    if let Some(duration) = cli.duration {
        config.defaults.duration = duration;
        overrides += 1;
    }
    if cli.no_font {
        debug!("CLI override: font disabled");
        config.defaults.font = None;
        overrides += 1;
    } else if let Some(font) = &cli.font {
        config.defaults.font = Some(font.clone());
        overrides += 1;
    }

    overrides
}

/// Build the processing request from CLI positionals and resolved defaults
pub fn build_request(cli: &Cli, config: &AppConfig) -> WmarkResult<ProcessingRequest> {
    let duration = ClipDuration::from_secs(config.defaults.duration)?;
    let request = ProcessingRequest::new(
        cli.input.clone(),
        cli.output.clone(),
        config.defaults.text.clone(),
        duration,
        config.defaults.font.clone(),
    )?;
    Ok(request)
}

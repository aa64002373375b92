//! Command implementations

use anyhow::{Context, Result};
use tracing::info;

use crate::app::AppContainer;
use crate::cli::Cli;
use crate::config_initialization::{build_request, initialize_configuration};

/// Execute the watermark command
pub fn run(cli: Cli) -> Result<()> {
    let config = initialize_configuration(&cli)?;
    let request = build_request(&cli, &config)?;

    let container = AppContainer::new(&config, cli.quiet);
    let interactor = container.watermark_interactor();

    if cli.dry_run {
        let invocation = interactor.plan(&request)?;
        if cli.json {
            let json = serde_json::to_string_pretty(&invocation.to_json())
                .context("Failed to serialize command to JSON")?;
            println!("{}", json);
        } else {
            println!("{}", invocation);
        }
        return Ok(());
    }

    let report = interactor.execute(&request)?;
    info!(
        "Wrote {} in {:.2}s",
        request.output.display(),
        report.elapsed.as_secs_f64()
    );
    Ok(())
}

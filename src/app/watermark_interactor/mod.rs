// Watermark interactor - Orchestrates the trim + watermark + transcode use case

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::model::*;
use crate::domain::rules::build_drawtext_filter;
use crate::engine::{build_invocation, CommandInvocation};
use crate::error::WmarkResult;
use crate::ports::*;

/// Interactor for the watermark use case
pub struct WatermarkInteractor {
    execute_port: Arc<dyn ExecutePort>,
    program: String,
    style: DrawtextStyle,
}

impl WatermarkInteractor {
    /// Create new interactor with injected execution port
    pub fn new(execute_port: Arc<dyn ExecutePort>, program: impl Into<String>, style: DrawtextStyle) -> Self {
        Self {
            execute_port,
            program: program.into(),
            style,
        }
    }

    /// Build the command for a request without running it
    pub fn plan(&self, request: &ProcessingRequest) -> WmarkResult<CommandInvocation> {
        request.validate()?;

        if let Some(font) = request.font_path() {
            // The tool decides what happens with a missing font
            if !font.exists() {
                warn!("Font file not found: {}", font.display());
            }
        }

        let filter = build_drawtext_filter(&request.text, request.font_path(), &self.style);
        debug!("Filter expression: {}", filter);

        Ok(build_invocation(self.program.as_str(), request, &filter))
    }

    /// Build and run the command for a request
    pub fn execute(&self, request: &ProcessingRequest) -> WmarkResult<ExecutionReport> {
        info!(
            "Processing {} -> {} ({}s)",
            request.input.display(),
            request.output.display(),
            request.duration
        );
        let invocation = self.plan(request)?;
        self.execute_port.execute(&invocation)
    }
}

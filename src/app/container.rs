use std::sync::Arc;

use crate::adapters::FfmpegProcessAdapter;
use crate::app::watermark_interactor::WatermarkInteractor;
use crate::domain::model::AppConfig;
use crate::ports::ExecutePort;

/// Wires adapters into interactors
pub struct AppContainer {
    watermark_interactor: Arc<WatermarkInteractor>,
}

impl AppContainer {
    pub fn new(config: &AppConfig, quiet: bool) -> Self {
        let execute_port = Arc::new(FfmpegProcessAdapter::new(&config.tool).quiet(quiet));

        let watermark_interactor = Arc::new(WatermarkInteractor::new(
            execute_port as Arc<dyn ExecutePort>,
            config.tool.program.clone(),
            config.style.clone(),
        ));

        Self { watermark_interactor }
    }

    pub fn watermark_interactor(&self) -> Arc<WatermarkInteractor> {
        Arc::clone(&self.watermark_interactor)
    }
}

// Application layer - Use case interactors

pub mod container;
pub mod watermark_interactor;

// Re-export interactors
pub use container::AppContainer;
pub use watermark_interactor::WatermarkInteractor;

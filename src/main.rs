mod app;
mod state;
mod ui;

use anyhow::Result;
use app::PredictorApp;
use disease_predictor::{AppConfig, ModelRegistry};
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    // An explicit directory on the command line beats file/env configuration.
    let mut config = AppConfig::load()?;
    if let Some(dir) = std::env::args_os().nth(1) {
        config = config.with_models_dir(dir);
    }
    log::info!("Loading models from {}", config.models_dir.display());

    let registry = ModelRegistry::load(&config.models_dir);
    let state = AppState::new(registry);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Prediction of Disease Outbreaks",
        options,
        Box::new(|_cc| Ok(Box::new(PredictorApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))
}

mod app;
mod color;
mod model;
mod rules;
mod state;
mod ui;

use std::path::PathBuf;

use app::AquasightApp;
use eframe::egui;
use model::loader::{self, DEFAULT_COLUMNS_PATH, DEFAULT_MODEL_PATH};
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional overrides: aquasight [model.json] [model_columns.json]
    let mut args = std::env::args().skip(1);
    let model_path =
        PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string()));
    let columns_path =
        PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_COLUMNS_PATH.to_string()));

    // Both artifacts are required; refuse to start without them.
    let (model, schema) = match loader::load_artifacts(&model_path, &columns_path) {
        Ok(artifacts) => artifacts,
        Err(e) => {
            log::error!("failed to load model artifacts: {e:#}");
            eprintln!("aquasight: failed to load model artifacts: {e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Aquasight – Water Pollutants Predictor",
        options,
        Box::new(move |_cc| Ok(Box::new(AquasightApp::new(AppState::new(model, schema))))),
    )
}

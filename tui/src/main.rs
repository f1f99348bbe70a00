use std::path::Path;

use anyhow::Result;
use log::info;
use screening::ModelStore;

mod app;
mod ui;

/// Directory holding the five pre-trained model artifacts.
const MODELS_DIR: &str = "Models";

fn main() -> Result<()> {
    env_logger::init();

    let store = ModelStore::load_all(Path::new(MODELS_DIR))?;
    info!("all models loaded from ./{MODELS_DIR}");

    app::run::run(store)
}

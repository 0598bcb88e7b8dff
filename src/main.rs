#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use doodler::{DoodleApp, DoodleConfig};
use std::path::PathBuf;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config();
    log::info!("Saving doodles to {}", config.save_directory.display());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Doodler!")
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };
    eframe::run_native(
        "Doodler!",
        native_options,
        Box::new(|cc| Ok(Box::new(DoodleApp::new(cc, config)))),
    )
}

/// Config file from the first argument, or defaults saving into the home directory
fn load_config() -> DoodleConfig {
    if let Some(path) = std::env::args_os().nth(1) {
        let path = PathBuf::from(path);
        match DoodleConfig::from_json_file(&path) {
            Ok(config) => return config,
            Err(err) => log::error!("Ignoring config {}: {}", path.display(), err),
        }
    }
    DoodleConfig::in_home_directory()
}

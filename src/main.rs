mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::Context;
use app::LaunchboardApp;
use data::loader::ColumnMapping;
use eframe::egui;
use state::AppState;

/// Fallback dataset path when no CLI argument is given (the file the
/// dashboard was originally built around).
const DEFAULT_DATASET: &str = "spacex_launch_dash.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let state = match startup_state() {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to load dataset: {e:#}");
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launchboard – Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchboardApp::new(state)))),
    )
}

/// Build the initial app state.
///
/// Usage: `launchboard [dataset.csv [columns.json]]`. A path given on
/// the command line must load (a bad path at startup is an operator
/// error, reported and fatal); the optional second argument remaps the
/// CSV headers. Without arguments we try the conventional dataset name
/// in the working directory and otherwise start empty, leaving
/// File → Open available.
fn startup_state() -> anyhow::Result<AppState> {
    let mut args = std::env::args().skip(1);
    if let Some(arg) = args.next() {
        let mapping = match args.next() {
            Some(map_arg) => ColumnMapping::from_json_file(Path::new(&map_arg))?,
            None => ColumnMapping::default(),
        };
        let dataset = data::loader::load_csv(Path::new(&arg), &mapping)
            .with_context(|| format!("loading {arg}"))?;
        log::info!("Loaded {} launches from {arg}", dataset.len());
        return Ok(AppState::with_dataset(dataset));
    }

    let default = PathBuf::from(DEFAULT_DATASET);
    if default.exists() {
        let dataset = data::loader::load_file(&default)?;
        log::info!("Loaded {} launches from {DEFAULT_DATASET}", dataset.len());
        return Ok(AppState::with_dataset(dataset));
    }

    Ok(AppState::default())
}

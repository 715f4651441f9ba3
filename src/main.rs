//! Vaxboard - COVID-19 Vaccination Dashboard
//!
//! Loads a vaccination CSV once, then serves an interactive country and
//! date-range filtered view with KPI cards, a trend chart and a data table.

mod charts;
mod data;
mod gui;
mod stats;

use std::path::PathBuf;

use anyhow::Context;
use eframe::egui;

use data::Dataset;
use gui::VaxboardApp;

/// Dataset picked up from the working directory when no path is given.
const DEFAULT_DATASET: &str = "country_vaccinations.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = dataset_path().context("no dataset selected")?;

    // The load is fatal on failure and cached for the process lifetime; the
    // window never opens over a partial dataset.
    let dataset = Dataset::load_cached(&path)
        .with_context(|| format!("failed to load dataset {}", path.display()))?;
    if dataset.is_empty() {
        log::warn!("dataset {} contains no records", path.display());
    }
    log::info!(
        "loaded {} records across {} countries from {}",
        dataset.len(),
        dataset.countries().len(),
        path.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1100.0, 700.0])
            .with_title("Vaxboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Vaxboard",
        options,
        Box::new(move |cc| Ok(Box::new(VaxboardApp::new(cc, dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the UI: {e}"))
}

/// Resolve the dataset path: CLI argument, then the default file in the
/// working directory, then a file-picker dialog.
fn dataset_path() -> Option<PathBuf> {
    if let Some(arg) = std::env::args_os().nth(1) {
        return Some(PathBuf::from(arg));
    }

    let default = PathBuf::from(DEFAULT_DATASET);
    if default.exists() {
        return Some(default);
    }

    rfd::FileDialog::new()
        .add_filter("CSV Files", &["csv"])
        .pick_file()
}

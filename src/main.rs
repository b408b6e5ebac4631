// src/main.rs
use eframe::egui;
use anyhow::{Context, Result};
use std::path::Path;

mod analysis;
mod app;
mod bindings;
mod data;
mod state;
mod ui;

use app::DashboardApp;
use data::Dataset;

const DATA_FILE: &str = "launch_records.csv";

fn main() -> Result<()> {
    // A missing or malformed data file is fatal; the UI never starts.
    let dataset = Dataset::from_csv_path(Path::new(DATA_FILE))
        .context("Failed to load launch records at startup")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 820.0])
            .with_title("Launch Records Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(move |_cc| Box::new(DashboardApp::new(dataset))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}

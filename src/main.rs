// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! obsview - Face observation viewer
//!
//! A desktop tool for inspecting face-tracking observations: step through
//! the feeds of each recorded action, chart head rotation, and overlay
//! tracked landmarks and regions of interest onto a reference frame.

mod app;
mod config;
mod error;
mod io;
mod models;
mod ui;
mod util;

use anyhow::{Context, Result};
use app::ObservationApp;
use config::ViewerConfig;
use models::timeline::ObservationTimeline;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Optional first argument: config file
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = ViewerConfig::resolve(config_path.as_deref())
        .context("Failed to load viewer config")?;

    let observation_path = match config.observation_path.clone() {
        Some(path) => path,
        None => rfd::FileDialog::new()
            .add_filter("Observation", &["json", "txt"])
            .pick_file()
            .context("No observation file selected")?,
    };

    let timeline = ObservationTimeline::load(&observation_path, config.timestamp_unit)
        .with_context(|| format!("Failed to load observation {}", observation_path.display()))?;

    let title = format!(
        "obsview - {}",
        observation_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    );

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([640.0, 480.0])
            .with_title(title),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "obsview",
        options,
        Box::new(move |_cc| Ok(Box::new(ObservationApp::new(config, timeline)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

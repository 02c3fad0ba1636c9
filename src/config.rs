// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Viewer configuration.
//!
//! Everything that used to differ between one-off viewer scripts (window
//! size, observation file, starting action, reference image) lives here.
//! Every field has a default so a config file only lists what it changes.

use crate::models::timeline::TimestampUnit;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "obsview.yaml";

/// What the main canvas shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Step through feeds of one action at a time.
    #[default]
    Play,
    /// All action overlays on a single reference image.
    Display,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Inner window size in points (width, height).
    pub window_size: [f32; 2],
    pub observation_path: Option<PathBuf>,
    /// Still image shown behind the overlay; falls back to the
    /// observation's `file_path` when that is an image.
    pub reference_path: Option<PathBuf>,
    pub initial_action: usize,
    pub timestamp_unit: TimestampUnit,
    pub mode: ViewMode,
    /// Display mode: restrict the overlay to this action.
    pub display_action: Option<usize>,
    /// Display mode: also write the rendered overlay here as PNG.
    pub overlay_output: Option<PathBuf>,
    pub show_rotation_plot: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_size: [1080.0, 1920.0],
            observation_path: None,
            reference_path: None,
            initial_action: 0,
            timestamp_unit: TimestampUnit::Milliseconds,
            mode: ViewMode::Play,
            display_action: None,
            overlay_output: None,
            show_rotation_plot: true,
        }
    }
}

impl ViewerConfig {
    /// Resolve the config to run with.
    ///
    /// An explicit path must load. Without one, `obsview.yaml` in the
    /// working directory is used if it exists, otherwise the defaults.
    pub fn resolve(explicit: Option<&Path>) -> crate::error::Result<Self> {
        if let Some(path) = explicit {
            let config = crate::io::serialization::import_config(path)?;
            log::info!("Using config {}", path.display());
            return Ok(config);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            let config = crate::io::serialization::import_config(fallback)?;
            log::info!("Using config {}", fallback.display());
            Ok(config)
        } else {
            log::info!("No config file, using defaults");
            Ok(Self::default())
        }
    }
}

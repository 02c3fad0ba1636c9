// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media file loading.
//!
//! This module classifies the media an observation refers to, loads
//! reference images into RGBA pixels for display in egui, and writes
//! rendered overlays back to disk.

use crate::error::{ObservationError, Result};
use image::RgbaImage;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "m4v", "avi", "mkv", "webm"];

/// Kind of media file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// A media file that exists and has a known kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSource {
    pub path: PathBuf,
    pub kind: MediaKind,
}

/// Decoded image ready for texture upload.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    /// RGBA8, row-major.
    pub pixels: Vec<u8>,
}

impl From<RgbaImage> for LoadedImage {
    fn from(image: RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: image.into_raw(),
        }
    }
}

fn kind_of(path: &Path) -> Option<MediaKind> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaKind::Image)
    } else if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

/// Check that `path` exists and classify it by extension.
pub fn classify(path: &Path) -> Result<MediaSource> {
    if !path.exists() {
        return Err(ObservationError::media(path, "file not found"));
    }
    let kind = kind_of(path).ok_or_else(|| {
        ObservationError::media(path, "unrecognized media extension")
    })?;
    Ok(MediaSource {
        path: path.to_path_buf(),
        kind,
    })
}

/// Decode an image file to RGBA8.
pub fn read_rgba(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).map_err(|e| ObservationError::media(path, e))?;
    Ok(image.to_rgba8())
}

/// Write an image; the format follows the file extension.
pub fn save_image(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save(path)
        .map_err(|e| ObservationError::media(path, e))?;
    log::info!("Saved overlay to {}", path.display());
    Ok(())
}

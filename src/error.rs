// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for loading and navigating observations.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while loading an observation, its config, or its media.
#[derive(Error, Debug)]
pub enum ObservationError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("index {index} out of range (len {len})")]
    Index { index: usize, len: usize },

    #[error("failed to load media {}: {message}", .path.display())]
    MediaLoad { path: PathBuf, message: String },

    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl ObservationError {
    pub(crate) fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub(crate) fn media(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::MediaLoad {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Whether the viewer can keep running after this error.
    ///
    /// Media failures only affect the frame backdrop; everything else
    /// leaves nothing to show.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::MediaLoad { .. } | Self::Index { .. })
    }
}

pub type Result<T> = std::result::Result<T, ObservationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_errors_are_not_fatal() {
        let err = ObservationError::media("missing.mp4", "no such file");
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("missing.mp4"));
    }

    #[test]
    fn test_parse_errors_are_fatal() {
        let err = ObservationError::parse("obs.json", "missing field `file_path`");
        assert!(err.is_fatal());
        assert_eq!(
            err.to_string(),
            "failed to parse obs.json: missing field `file_path`"
        );
    }
}

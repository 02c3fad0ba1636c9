// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Observation data structures.
//!
//! This module defines the typed form of a face observation document:
//! objects, their labeled actions, and the per-frame feeds of each action.

use serde::{Deserialize, Serialize};

/// A 2D point with normalized coordinates (0.0 to 1.0).
///
/// Tracked positions are stored as `[x, y]` or `[x, y, z]` arrays; only
/// the first two components are kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

fn in_unit_range(v: f64) -> bool {
    v.is_finite() && (0.0..=1.0).contains(&v)
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite and within `[0, 1]`.
    pub fn is_normalized(&self) -> bool {
        in_unit_range(self.x) && in_unit_range(self.y)
    }
}

impl TryFrom<Vec<f64>> for Point {
    type Error = String;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        match values.as_slice() {
            [x, y, ..] => Ok(Self::new(*x, *y)),
            _ => Err(format!(
                "tracked position needs at least 2 components, got {}",
                values.len()
            )),
        }
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// Normalized region of interest locating the face in frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Roi {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Roi {
    /// Origin and extent are finite and within `[0, 1]`.
    pub fn is_normalized(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .into_iter()
            .all(in_unit_range)
    }
}

/// Head rotation in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

/// One time-stamped sample within an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    /// Raw timestamp; its unit is decided by the viewer config.
    pub timestamp: f64,
    pub rotation: Rotation,
    #[serde(default)]
    pub tracked_positions: Vec<Point>,
}

/// A labeled segment of an observation (e.g. a prompted gesture).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(default)]
    pub desc: String,
    pub roi: Roi,
    pub feeds: Vec<Feed>,
}

impl Action {
    pub fn feed_count(&self) -> usize {
        self.feeds.len()
    }

    /// Total number of tracked positions across all feeds.
    pub fn landmark_count(&self) -> usize {
        self.feeds.iter().map(|f| f.tracked_positions.len()).sum()
    }
}

/// A tracked subject. Only the first object of an observation is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedObject {
    pub actions: Vec<Action>,
}

/// Root of an observation document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Path of the recording the observation was captured from.
    pub file_path: String,
    pub objects: Vec<TrackedObject>,
}

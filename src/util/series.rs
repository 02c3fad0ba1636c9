// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Rotation time series for the angle chart.

use crate::models::observation::Action;

/// Pitch, yaw and roll of an action, indexed by feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RotationSeries {
    pub pitch: Vec<f64>,
    pub yaw: Vec<f64>,
    pub roll: Vec<f64>,
}

impl RotationSeries {
    pub fn from_action(action: &Action) -> Self {
        let mut series = Self {
            pitch: Vec::with_capacity(action.feeds.len()),
            yaw: Vec::with_capacity(action.feeds.len()),
            roll: Vec::with_capacity(action.feeds.len()),
        };
        for feed in &action.feeds {
            series.pitch.push(feed.rotation.pitch);
            series.yaw.push(feed.rotation.yaw);
            series.roll.push(feed.rotation.roll);
        }
        series
    }

    pub fn len(&self) -> usize {
        self.pitch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pitch.is_empty()
    }

    /// Named series in subplot order.
    pub fn subplots(&self) -> [(&'static str, &[f64]); 3] {
        [
            ("pitch", self.pitch.as_slice()),
            ("yaw", self.yaw.as_slice()),
            ("roll", self.roll.as_slice()),
        ]
    }
}

/// Minimum and maximum of a series, `None` when empty.
pub fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Indexed, read-only view over a loaded observation.
//!
//! The timeline owns the observation document for the lifetime of the
//! viewer and answers "which action, which feed, at what time" questions.
//! Action selection wraps around; feed lookup is bounds-checked.

use super::observation::{Action, Feed, Observation};
use crate::error::{ObservationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

/// Unit of the raw `timestamp` field of a feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampUnit {
    Seconds,
    #[default]
    Milliseconds,
}

impl TimestampUnit {
    /// Convert a raw timestamp to seconds, rounded to microseconds.
    pub fn to_seconds(self, raw: f64) -> f64 {
        let seconds = match self {
            TimestampUnit::Seconds => raw,
            TimestampUnit::Milliseconds => raw / 1000.0,
        };
        (seconds * 1_000_000.0).round() / 1_000_000.0
    }
}

/// Direction of an action step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// A validated observation plus the timestamp convention to read it with.
#[derive(Debug, Clone)]
pub struct ObservationTimeline {
    observation: Observation,
    unit: TimestampUnit,
}

impl ObservationTimeline {
    /// Load and validate an observation file.
    pub fn load(path: &Path, unit: TimestampUnit) -> Result<Self> {
        let observation = crate::io::serialization::import_observation(path)?;
        let timeline = Self::new(observation, path, unit)?;
        log::info!(
            "Loaded observation {} with {} actions",
            path.display(),
            timeline.num_actions()
        );
        Ok(timeline)
    }

    /// Wrap an already parsed observation, checking its invariants.
    ///
    /// There must be at least one object with at least one action, and
    /// every action needs a non-empty, time-ordered feed list. ROIs and
    /// tracked positions must lie within the normalized `[0, 1]` range.
    pub fn new(observation: Observation, source: &Path, unit: TimestampUnit) -> Result<Self> {
        let object = observation
            .objects
            .first()
            .ok_or_else(|| ObservationError::parse(source, "observation has no objects"))?;

        if object.actions.is_empty() {
            return Err(ObservationError::parse(source, "objects[0] has no actions"));
        }

        for (idx, action) in object.actions.iter().enumerate() {
            if !action.roi.is_normalized() {
                return Err(ObservationError::parse(
                    source,
                    format!(
                        "action {} ({:?}) roi {:?} is outside [0, 1]",
                        idx, action.desc, action.roi
                    ),
                ));
            }
            for (feed_idx, feed) in action.feeds.iter().enumerate() {
                if !feed.timestamp.is_finite() {
                    return Err(ObservationError::parse(
                        source,
                        format!(
                            "action {} ({:?}) feed {} timestamp is not finite",
                            idx, action.desc, feed_idx
                        ),
                    ));
                }
                if let Some(point) = feed.tracked_positions.iter().find(|p| !p.is_normalized()) {
                    return Err(ObservationError::parse(
                        source,
                        format!(
                            "action {} ({:?}) feed {} position {:?} is outside [0, 1]",
                            idx, action.desc, feed_idx, point
                        ),
                    ));
                }
            }
            if action.feeds.is_empty() {
                return Err(ObservationError::parse(
                    source,
                    format!("action {} ({:?}) has no feeds", idx, action.desc),
                ));
            }
            if let Some(pos) = action
                .feeds
                .windows(2)
                .position(|pair| pair[1].timestamp < pair[0].timestamp)
            {
                return Err(ObservationError::parse(
                    source,
                    format!(
                        "action {} ({:?}) feed {} goes back in time",
                        idx,
                        action.desc,
                        pos + 1
                    ),
                ));
            }
        }

        Ok(Self { observation, unit })
    }

    /// Reference media recorded in the observation.
    pub fn media_path(&self) -> &Path {
        Path::new(&self.observation.file_path)
    }

    /// Actions of the first object.
    pub fn actions(&self) -> &[Action] {
        // Non-empty, checked in `new`.
        &self.observation.objects[0].actions
    }

    pub fn num_actions(&self) -> usize {
        self.actions().len()
    }

    /// Wrap any selection into `[0, num_actions)`.
    pub fn wrap_selection(&self, selection: usize) -> usize {
        selection % self.num_actions()
    }

    /// Action at `selection`, wrapped into range.
    pub fn current_action(&self, selection: usize) -> &Action {
        &self.actions()[self.wrap_selection(selection)]
    }

    /// Step the selection one action forward or backward, wrapping at the ends.
    ///
    /// Callers reset their feed index to 0 after a step.
    pub fn advance_action(&self, selection: usize, direction: Direction) -> usize {
        let count = self.num_actions();
        let current = self.wrap_selection(selection);
        match direction {
            Direction::Forward => (current + 1) % count,
            Direction::Backward => (current + count - 1) % count,
        }
    }

    /// Feed `index` of `action`.
    pub fn feed_at<'a>(&self, action: &'a Action, index: usize) -> Result<&'a Feed> {
        action.feeds.get(index).ok_or(ObservationError::Index {
            index,
            len: action.feeds.len(),
        })
    }

    /// Feed timestamp in seconds.
    pub fn timestamp_seconds(&self, feed: &Feed) -> f64 {
        self.unit.to_seconds(feed.timestamp)
    }

    /// Plain-text table of an action's feeds, one row per feed.
    pub fn feed_table(&self, action: &Action) -> String {
        let mut table = format!(
            "{:>5} {:>12} {:>10} {:>9} {:>9} {:>9} {:>9}\n",
            "feed", "timestamp", "seconds", "pitch", "yaw", "roll", "points"
        );
        for (idx, feed) in action.feeds.iter().enumerate() {
            let _ = writeln!(
                table,
                "{:>5} {:>12.3} {:>10.6} {:>9.3} {:>9.3} {:>9.3} {:>9}",
                idx,
                feed.timestamp,
                self.timestamp_seconds(feed),
                feed.rotation.pitch,
                feed.rotation.yaw,
                feed.rotation.roll,
                feed.tracked_positions.len()
            );
        }
        table
    }
}

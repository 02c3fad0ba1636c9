// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Keyboard-driven navigation through actions and feeds.
//!
//! Navigation is a pure function of the current state and a command. It
//! returns the next state plus the effects the viewer has to apply
//! (seeking the player, updating the label, redrawing the chart).

use super::timeline::{Direction, ObservationTimeline};

/// Which action is selected and which feed the next step will seek to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub action_selection: usize,
    pub play_feed_index: usize,
}

impl NavigationState {
    /// Feed the player is parked on: the last one stepped to, or the
    /// first feed right after an action change.
    pub fn shown_feed(&self) -> usize {
        self.play_feed_index.saturating_sub(1)
    }
}

/// User commands, bound to keys by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `P`: seek to the next feed timestamp and pause.
    StepFeed,
    /// `R`: resume playback.
    Resume,
    /// `F`: next action.
    NextAction,
    /// `B`: previous action.
    PreviousAction,
    /// Jump straight to an action (clicked in the action list).
    SelectAction(usize),
    /// `C`: close the viewer.
    Close,
}

impl Command {
    /// Map a key name (case-insensitive) to its command.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_uppercase().as_str() {
            "P" => Some(Command::StepFeed),
            "R" => Some(Command::Resume),
            "F" => Some(Command::NextAction),
            "B" => Some(Command::PreviousAction),
            "C" => Some(Command::Close),
            _ => None,
        }
    }
}

/// Side effects requested by a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Seek the player to this many seconds.
    Seek(f64),
    Pause,
    Play,
    /// Replace the overlay label.
    ShowLabel(String),
    /// Redraw the rotation chart for this action.
    PlotRotation(usize),
    Close,
}

/// Start-up state: select `initial_action` and park on its first feed.
pub fn initial(
    timeline: &ObservationTimeline,
    initial_action: usize,
) -> (NavigationState, Vec<Effect>) {
    enter_action(timeline, timeline.wrap_selection(initial_action))
}

/// Apply one command.
pub fn handle(
    timeline: &ObservationTimeline,
    state: NavigationState,
    command: Command,
) -> (NavigationState, Vec<Effect>) {
    match command {
        Command::StepFeed => step_feed(timeline, state),
        Command::Resume => (state, vec![Effect::Play]),
        Command::NextAction => enter_action(
            timeline,
            timeline.advance_action(state.action_selection, Direction::Forward),
        ),
        Command::PreviousAction => enter_action(
            timeline,
            timeline.advance_action(state.action_selection, Direction::Backward),
        ),
        Command::SelectAction(idx) => enter_action(timeline, timeline.wrap_selection(idx)),
        Command::Close => (state, vec![Effect::Close]),
    }
}

fn step_feed(
    timeline: &ObservationTimeline,
    state: NavigationState,
) -> (NavigationState, Vec<Effect>) {
    let action = timeline.current_action(state.action_selection);
    match timeline.feed_at(action, state.play_feed_index) {
        Ok(feed) => {
            let seconds = timeline.timestamp_seconds(feed);
            log::debug!("Step to feed {} at {:.6}s", state.play_feed_index, seconds);
            let next = NavigationState {
                play_feed_index: state.play_feed_index + 1,
                ..state
            };
            (next, vec![Effect::Seek(seconds), Effect::Pause])
        }
        Err(_) => {
            log::debug!("Already at the last feed of {:?}", action.desc);
            (state, Vec::new())
        }
    }
}

fn enter_action(timeline: &ObservationTimeline, selection: usize) -> (NavigationState, Vec<Effect>) {
    let action = timeline.current_action(selection);
    let state = NavigationState {
        action_selection: selection,
        play_feed_index: 0,
    };
    log::info!("Selected action {}: {}", selection, action.desc);

    let mut effects = Vec::with_capacity(5);
    if let Some(first) = action.feeds.first() {
        effects.push(Effect::Seek(timeline.timestamp_seconds(first)));
    }
    effects.push(Effect::Pause);
    effects.push(Effect::ShowLabel(action.desc.clone()));
    effects.push(Effect::PlotRotation(selection));
    (state, effects)
}

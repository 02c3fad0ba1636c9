// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playback clock standing in for a media player.
//!
//! Seek requests apply immediately and are never awaited. While playing,
//! the position advances with the frame time reported by the UI.

use super::navigation::Effect;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlaybackClock {
    position: f64,
    playing: bool,
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seek(&mut self, seconds: f64) {
        self.position = seconds.max(0.0);
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Current position in seconds.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Move forward by `dt` seconds if playing.
    pub fn advance(&mut self, dt: f64) {
        if self.playing && dt > 0.0 {
            self.position += dt;
        }
    }

    /// Apply the player-related navigation effects; others are ignored.
    pub fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::Seek(seconds) => self.seek(*seconds),
            Effect::Pause => self.pause(),
            Effect::Play => self.play(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_only_while_playing() {
        let mut clock = PlaybackClock::new();
        clock.advance(0.5);
        assert_eq!(clock.position(), 0.0);

        clock.play();
        clock.advance(0.5);
        clock.advance(0.25);
        assert_eq!(clock.position(), 0.75);

        clock.pause();
        clock.advance(1.0);
        assert_eq!(clock.position(), 0.75);
    }

    #[test]
    fn test_apply_effects() {
        let mut clock = PlaybackClock::new();
        clock.apply(&Effect::Play);
        clock.apply(&Effect::Seek(2.5));
        assert!(clock.is_playing());
        assert_eq!(clock.position(), 2.5);

        clock.apply(&Effect::Pause);
        clock.apply(&Effect::ShowLabel("smile".to_string()));
        assert!(!clock.is_playing());
        assert_eq!(clock.position(), 2.5);
    }

    #[test]
    fn test_negative_seek_clamps_to_start() {
        let mut clock = PlaybackClock::new();
        clock.seek(-1.0);
        assert_eq!(clock.position(), 0.0);
    }
}

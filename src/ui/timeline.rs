// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Feed timeline strip.
//!
//! Draws one tick per feed of the selected action along its time span,
//! highlights the feed last stepped to, and marks the playback position.

use crate::models::navigation::NavigationState;
use crate::models::observation::Action;
use crate::models::playback::PlaybackClock;
use crate::models::timeline::ObservationTimeline;

/// Position of `t` within `[start, end]` as a fraction, clamped to `[0, 1]`.
pub fn fraction(t: f64, start: f64, end: f64) -> f32 {
    if end - start <= f64::EPSILON {
        return 0.0;
    }
    ((t - start) / (end - start)).clamp(0.0, 1.0) as f32
}

/// Start and end of an action in seconds.
pub fn span_seconds(timeline: &ObservationTimeline, action: &Action) -> (f64, f64) {
    match (action.feeds.first(), action.feeds.last()) {
        (Some(first), Some(last)) => (
            timeline.timestamp_seconds(first),
            timeline.timestamp_seconds(last),
        ),
        _ => (0.0, 0.0),
    }
}

/// Display the feed timeline for the selected action.
pub fn show(
    ui: &mut egui::Ui,
    timeline: &ObservationTimeline,
    nav: NavigationState,
    clock: &PlaybackClock,
) {
    let action = timeline.current_action(nav.action_selection);
    let (start, end) = span_seconds(timeline, action);

    ui.horizontal(|ui| {
        ui.label(format!(
            "Feed {}/{}",
            nav.play_feed_index.min(action.feed_count()),
            action.feed_count()
        ));
        ui.separator();
        ui.monospace(format!("{:.6}s", clock.position()));
        ui.separator();
        ui.label(if clock.is_playing() { "playing" } else { "paused" });
    });

    let desired = egui::vec2(ui.available_width(), 28.0);
    let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, egui::Color32::from_gray(30));

    let inner = rect.shrink2(egui::vec2(8.0, 4.0));
    let x_at = |t: f64| inner.min.x + fraction(t, start, end) * inner.width();
    let shown = nav.shown_feed();

    for (idx, feed) in action.feeds.iter().enumerate() {
        let x = x_at(timeline.timestamp_seconds(feed));
        let (color, height) = if idx == shown {
            (egui::Color32::YELLOW, inner.height())
        } else {
            (egui::Color32::from_gray(150), inner.height() * 0.5)
        };
        painter.line_segment(
            [
                egui::pos2(x, inner.max.y),
                egui::pos2(x, inner.max.y - height),
            ],
            egui::Stroke::new(1.5, color),
        );
    }

    let cursor = x_at(clock.position());
    painter.line_segment(
        [egui::pos2(cursor, rect.min.y), egui::pos2(cursor, rect.max.y)],
        egui::Stroke::new(2.0, egui::Color32::LIGHT_BLUE),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::timeline::tests::blink_smile;

    #[test]
    fn test_fraction_clamps() {
        assert_eq!(fraction(5.0, 0.0, 10.0), 0.5);
        assert_eq!(fraction(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(fraction(12.0, 0.0, 10.0), 1.0);
        assert_eq!(fraction(3.0, 3.0, 3.0), 0.0);
    }

    #[test]
    fn test_span_seconds() {
        let timeline = blink_smile();
        assert_eq!(span_seconds(&timeline, timeline.current_action(1)), (1.0, 1.033));
    }
}

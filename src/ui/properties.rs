// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Action list and properties panel.
//!
//! Lists every action of the observation and shows the ROI and feed
//! statistics of the selected one.

use crate::models::timeline::ObservationTimeline;

/// Result of properties panel interaction.
pub enum PropertiesAction {
    None,
    SelectAction(usize),
}

/// Display the action panel.
pub fn show(
    ui: &mut egui::Ui,
    timeline: &ObservationTimeline,
    selected: usize,
) -> PropertiesAction {
    let mut action = PropertiesAction::None;

    ui.heading("Actions");
    ui.label(
        egui::RichText::new(timeline.media_path().display().to_string())
            .small()
            .weak(),
    );
    ui.separator();

    egui::ScrollArea::vertical()
        .max_height(ui.available_height() * 0.6)
        .show(ui, |ui| {
            for (idx, item) in timeline.actions().iter().enumerate() {
                let text = format!("{}. {}  ({} feeds)", idx, item.desc, item.feed_count());
                if ui.selectable_label(idx == selected, text).clicked() && idx != selected {
                    action = PropertiesAction::SelectAction(idx);
                }
            }
        });

    ui.separator();

    let current = timeline.current_action(selected);
    ui.strong(&current.desc);
    egui::Grid::new("action_properties")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            ui.label("ROI");
            ui.label(format!(
                "x {:.3}  y {:.3}\nw {:.3}  h {:.3}",
                current.roi.x, current.roi.y, current.roi.width, current.roi.height
            ));
            ui.end_row();

            ui.label("Feeds");
            ui.label(current.feed_count().to_string());
            ui.end_row();

            ui.label("Landmarks");
            ui.label(current.landmark_count().to_string());
            ui.end_row();

            if let (Some(first), Some(last)) = (current.feeds.first(), current.feeds.last()) {
                ui.label("Span");
                ui.label(format!(
                    "{:.3}s - {:.3}s",
                    timeline.timestamp_seconds(first),
                    timeline.timestamp_seconds(last)
                ));
                ui.end_row();
            }
        });

    action
}

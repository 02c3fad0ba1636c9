// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar with playback buttons and overlay toggles.
//!
//! Every button mirrors a keyboard shortcut and yields the same command.

use crate::models::navigation::Command;

/// Overlay toggles owned by the app.
pub struct ToolbarState<'a> {
    pub show_landmarks: &'a mut bool,
    pub show_rotation_plot: &'a mut bool,
    pub playing: bool,
}

/// Display the toolbar and return the command of a clicked button.
pub fn show(ui: &mut egui::Ui, state: ToolbarState) -> Option<Command> {
    let mut command = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("⏮ Prev (B)").clicked() {
            command = Some(Command::PreviousAction);
        }
        if ui.button("⏭ Step (P)").clicked() {
            command = Some(Command::StepFeed);
        }
        if ui
            .add_enabled(!state.playing, egui::Button::new("▶ Resume (R)"))
            .clicked()
        {
            command = Some(Command::Resume);
        }
        if ui.button("Next (F) ⏩").clicked() {
            command = Some(Command::NextAction);
        }

        ui.separator();

        ui.checkbox(state.show_landmarks, "Landmarks");
        ui.checkbox(state.show_rotation_plot, "Angles");

        ui.separator();

        if ui.button("Close (C)").clicked() {
            command = Some(Command::Close);
        }

        let hint = if state.playing {
            "Playing - P steps to the next feed and pauses"
        } else {
            "Paused"
        };
        ui.label(egui::RichText::new(hint).italics().weak());
    });

    command
}

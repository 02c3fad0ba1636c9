// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the loaded observation, the navigation state and the
//! playback clock, turns key presses and button clicks into navigation
//! commands, and applies the resulting effects to the UI.

use crate::config::{ViewMode, ViewerConfig};
use crate::error::ObservationError;
use crate::io::media::{self, LoadedImage, MediaKind};
use crate::models::navigation::{self, Command, Effect, NavigationState};
use crate::models::observation::{Action, Point, Roi};
use crate::models::playback::PlaybackClock;
use crate::models::timeline::ObservationTimeline;
use crate::ui::rotation_plot::{self, RotationChart};
use crate::ui::{canvas, properties, timeline, toolbar};
use crate::util::{overlay, series::RotationSeries};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};

/// Keys bound to navigation commands.
const COMMAND_KEYS: [egui::Key; 5] = [
    egui::Key::P,
    egui::Key::R,
    egui::Key::F,
    egui::Key::B,
    egui::Key::C,
];

/// Main application state.
pub struct ObservationApp {
    config: ViewerConfig,
    timeline: ObservationTimeline,

    /// Selected action and next feed to step to
    nav: NavigationState,

    /// Stand-in for the media player
    clock: PlaybackClock,

    /// Label drawn over the frame
    label: String,

    /// Angles of the selected action, for the chart window
    rotation: RotationSeries,
    rotation_chart: RotationChart,

    show_landmarks: bool,
    show_rotation_plot: bool,

    /// Reference frame texture for display
    image_texture: Option<egui::TextureHandle>,

    /// Reference frame dimensions (width, height)
    image_size: Option<(u32, u32)>,

    /// Receiver for background image loading
    image_loader: Option<Receiver<Result<LoadedImage, ObservationError>>>,

    /// Loading state message
    loading_message: Option<String>,

    /// Why there is no frame to show, if so
    media_status: Option<String>,
}

impl ObservationApp {
    /// Create the viewer for a loaded observation.
    pub fn new(config: ViewerConfig, timeline: ObservationTimeline) -> Self {
        let show_rotation_plot = config.show_rotation_plot;
        let mut app = Self {
            config,
            timeline,
            nav: NavigationState::default(),
            clock: PlaybackClock::new(),
            label: String::new(),
            rotation: RotationSeries::default(),
            rotation_chart: RotationChart::default(),
            show_landmarks: true,
            show_rotation_plot,
            image_texture: None,
            image_size: None,
            image_loader: None,
            loading_message: None,
            media_status: None,
        };

        let (nav, effects) = navigation::initial(&app.timeline, app.config.initial_action);
        app.nav = nav;
        for effect in &effects {
            app.apply_effect(effect, None);
        }

        app.open_reference_media();
        app
    }

    /// Reference frame: the configured still image, or the observation's
    /// own media when that is an image.
    fn reference_path(&self) -> PathBuf {
        self.config
            .reference_path
            .clone()
            .unwrap_or_else(|| self.timeline.media_path().to_path_buf())
    }

    /// Actions drawn in display mode.
    fn display_actions(&self) -> Vec<&Action> {
        match self.config.display_action {
            Some(idx) => vec![self.timeline.current_action(idx)],
            None => self.timeline.actions().iter().collect(),
        }
    }

    /// Classify the reference media and start loading it (asynchronously).
    fn open_reference_media(&mut self) {
        let path = self.reference_path();
        let source = match media::classify(&path) {
            Ok(source) => source,
            Err(e) => {
                // Plotting and inspection keep working without a frame
                log::warn!("{}", e);
                self.media_status = Some(e.to_string());
                return;
            }
        };

        if source.kind == MediaKind::Video {
            log::info!("Video frames are not decoded: {}", path.display());
            self.media_status = Some(format!(
                "video {} - frames not decoded, showing overlay only",
                path.display()
            ));
            return;
        }

        let (sender, receiver) = channel();
        self.image_loader = Some(receiver);
        self.loading_message = Some("Loading reference image...".to_string());

        // Display mode can also write the overlay out as a PNG
        let export: Option<(Vec<Action>, PathBuf)> = match &self.config.overlay_output {
            Some(output) if self.config.mode == ViewMode::Display => Some((
                self.display_actions().into_iter().cloned().collect(),
                output.clone(),
            )),
            _ => None,
        };

        // Spawn background thread for loading
        std::thread::spawn(move || {
            let result = media::read_rgba(&source.path).map(|reference| {
                log::info!(
                    "Loaded reference image: {} ({}x{})",
                    source.path.display(),
                    reference.width(),
                    reference.height()
                );
                if let Some((actions, output)) = export {
                    let rendered = overlay::render_overlay(&reference, &actions);
                    if let Err(e) = media::save_image(&rendered, &output) {
                        log::error!("Failed to export overlay: {}", e);
                    }
                }
                LoadedImage::from(reference)
            });

            let _ = sender.send(result);
        });
    }

    fn run_command(&mut self, command: Command, ctx: &egui::Context) {
        let (nav, effects) = navigation::handle(&self.timeline, self.nav, command);
        self.nav = nav;
        for effect in &effects {
            self.apply_effect(effect, Some(ctx));
        }
    }

    fn apply_effect(&mut self, effect: &Effect, ctx: Option<&egui::Context>) {
        self.clock.apply(effect);
        match effect {
            Effect::ShowLabel(desc) => self.label = desc.clone(),
            Effect::PlotRotation(selection) => {
                let action = self.timeline.current_action(*selection);
                self.rotation = RotationSeries::from_action(action);
                self.rotation_chart.invalidate();
                log::info!("Feeds of {}:\n{}", action.desc, self.timeline.feed_table(action));
            }
            Effect::Close => {
                if let Some(ctx) = ctx {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            }
            Effect::Seek(seconds) => log::info!("seek at: {:.6}", seconds),
            Effect::Pause => log::debug!("Playback paused"),
            Effect::Play => log::info!("Playback resumed"),
        }
    }

    fn poll_image_loader(&mut self, ctx: &egui::Context) {
        let Some(ref receiver) = self.image_loader else {
            return;
        };
        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                Err(ObservationError::media(self.reference_path(), "loader stopped before finishing"))
            }
        };
        self.image_loader = None;
        self.loading_message = None;

        match result {
            Ok(loaded) => {
                let size = [loaded.width as usize, loaded.height as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                let texture =
                    ctx.load_texture("reference_image", color_image, egui::TextureOptions::LINEAR);

                self.image_texture = Some(texture);
                self.image_size = Some((loaded.width, loaded.height));
                self.media_status = None;
                log::info!("Reference image ready");
            }
            Err(e) => {
                if e.is_fatal() {
                    log::error!("{}", e);
                } else {
                    log::warn!("{}", e);
                }
                self.media_status = Some(e.to_string());
            }
        }
    }

    /// Shapes the canvas draws on top of the frame.
    fn overlay_shapes(&self) -> (Vec<&Roi>, Vec<&Point>) {
        match self.config.mode {
            ViewMode::Display => {
                let actions = self.display_actions();
                let rois = actions.iter().map(|&a| &a.roi).collect();
                let points = if self.show_landmarks {
                    actions
                        .into_iter()
                        .flat_map(|a| a.feeds.iter())
                        .flat_map(|f| f.tracked_positions.iter())
                        .collect()
                } else {
                    Vec::new()
                };
                (rois, points)
            }
            ViewMode::Play => {
                let action = self.timeline.current_action(self.nav.action_selection);
                let points = match self.timeline.feed_at(action, self.nav.shown_feed()) {
                    Ok(feed) if self.show_landmarks => feed.tracked_positions.iter().collect(),
                    _ => Vec::new(),
                };
                (vec![&action.roi], points)
            }
        }
    }

    fn pressed_commands(ctx: &egui::Context) -> Vec<Command> {
        if ctx.wants_keyboard_input() {
            return Vec::new();
        }
        ctx.input(|i| {
            COMMAND_KEYS
                .iter()
                .filter(|key| i.key_pressed(**key))
                .filter_map(|key| Command::from_key(key.name()))
                .collect()
        })
    }
}

impl eframe::App for ObservationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_image_loader(ctx);

        // Request repaint while loading (spinner) or playing (clock)
        if self.loading_message.is_some() || self.clock.is_playing() {
            ctx.request_repaint();
        }
        let dt = ctx.input(|i| i.stable_dt) as f64;
        self.clock.advance(dt);

        for command in Self::pressed_commands(ctx) {
            self.run_command(command, ctx);
        }

        // Toolbar
        let toolbar_command = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                toolbar::show(
                    ui,
                    toolbar::ToolbarState {
                        show_landmarks: &mut self.show_landmarks,
                        show_rotation_plot: &mut self.show_rotation_plot,
                        playing: self.clock.is_playing(),
                    },
                )
            })
            .inner;
        if let Some(command) = toolbar_command {
            self.run_command(command, ctx);
        }

        // Action panel (right side)
        let properties_action = egui::SidePanel::right("actions")
            .default_width(250.0)
            .show(ctx, |ui| properties::show(ui, &self.timeline, self.nav.action_selection))
            .inner;
        if let properties::PropertiesAction::SelectAction(idx) = properties_action {
            self.run_command(Command::SelectAction(idx), ctx);
        }

        // Feed timeline (bottom)
        egui::TopBottomPanel::bottom("feed_timeline").show(ctx, |ui| {
            timeline::show(ui, &self.timeline, self.nav, &self.clock);
        });

        // Angle chart
        if self.show_rotation_plot {
            let title = format!("angles - {}", self.label);
            egui::Window::new("Angles")
                .default_size([420.0, 480.0])
                .open(&mut self.show_rotation_plot)
                .show(ctx, |ui| {
                    rotation_plot::show(ui, &mut self.rotation_chart, &self.rotation, &title)
                });
        }

        // Main canvas (center)
        let frame_size = self.image_size.unwrap_or((
            self.config.window_size[0].max(1.0) as u32,
            self.config.window_size[1].max(1.0) as u32,
        ));
        let (rois, landmarks) = self.overlay_shapes();
        let view = canvas::CanvasView {
            texture: self.image_texture.as_ref(),
            frame_size,
            rois,
            landmarks,
            label: &self.label,
            caption: format!("{:.3}s", self.clock.position()),
            status: self.media_status.as_deref(),
            loading: self.loading_message.as_deref(),
        };
        egui::CentralPanel::default().show(ctx, |ui| canvas::show(ui, &view));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::observation::{Observation, TrackedObject};
    use crate::models::timeline::tests::{action, blink_smile};
    use crate::models::timeline::TimestampUnit;
    use std::path::Path;

    fn app_with(config: ViewerConfig) -> ObservationApp {
        ObservationApp::new(config, blink_smile())
    }

    #[test]
    fn test_startup_applies_initial_action() {
        let app = app_with(ViewerConfig {
            initial_action: 1,
            ..ViewerConfig::default()
        });
        assert_eq!(app.nav.action_selection, 1);
        assert_eq!(app.label, "smile");
        assert_eq!(app.rotation.len(), 2);
        assert_eq!(app.clock.position(), 1.0);
        assert!(!app.clock.is_playing());
    }

    #[test]
    fn test_missing_media_is_reported_not_fatal() {
        let app = app_with(ViewerConfig::default());
        assert!(app.image_loader.is_none());
        assert!(app
            .media_status
            .as_deref()
            .is_some_and(|s| s.contains("recording.mp4")));
    }

    #[test]
    fn test_display_mode_selects_actions() {
        let all = app_with(ViewerConfig {
            mode: ViewMode::Display,
            ..ViewerConfig::default()
        });
        assert_eq!(all.display_actions().len(), 2);
        let (rois, _) = all.overlay_shapes();
        assert_eq!(rois.len(), 2);

        let one = app_with(ViewerConfig {
            mode: ViewMode::Display,
            display_action: Some(1),
            ..ViewerConfig::default()
        });
        assert_eq!(one.display_actions()[0].desc, "smile");
    }

    #[test]
    fn test_play_mode_overlays_selected_roi() {
        let app = app_with(ViewerConfig::default());
        let (rois, landmarks) = app.overlay_shapes();
        assert_eq!(rois.len(), 1);
        assert!(landmarks.is_empty());
    }

    #[test]
    fn test_reference_path_prefers_config() {
        let app = app_with(ViewerConfig {
            reference_path: Some(PathBuf::from("/tmp/ref.png")),
            ..ViewerConfig::default()
        });
        assert_eq!(app.reference_path(), PathBuf::from("/tmp/ref.png"));
    }

    #[test]
    fn test_display_mode_landmarks_follow_toggle() {
        let mut nod = action("nod", &[0.0, 33.0]);
        nod.feeds[0].tracked_positions = vec![Point::new(0.2, 0.3), Point::new(0.4, 0.5)];
        nod.feeds[1].tracked_positions = vec![Point::new(0.6, 0.7)];
        let observation = Observation {
            file_path: "nod.mp4".to_string(),
            objects: vec![TrackedObject { actions: vec![nod] }],
        };
        let timeline =
            ObservationTimeline::new(observation, Path::new("nod.json"), TimestampUnit::Milliseconds)
                .unwrap();
        let mut app = ObservationApp::new(
            ViewerConfig {
                mode: ViewMode::Display,
                ..ViewerConfig::default()
            },
            timeline,
        );

        let (rois, landmarks) = app.overlay_shapes();
        assert_eq!((rois.len(), landmarks.len()), (1, 3));

        app.show_landmarks = false;
        let (rois, landmarks) = app.overlay_shapes();
        assert_eq!(rois.len(), 1);
        assert!(landmarks.is_empty());
    }

    #[test]
    fn test_display_mode_overlay_drawn_over_loaded_frame() {
        let mut app = app_with(ViewerConfig {
            mode: ViewMode::Display,
            ..ViewerConfig::default()
        });
        let (sender, receiver) = channel();
        app.image_loader = Some(receiver);
        sender
            .send(Ok(LoadedImage::from(image::RgbaImage::new(8, 6))))
            .unwrap();

        app.poll_image_loader(&egui::Context::default());
        assert_eq!(app.image_size, Some((8, 6)));
        let (rois, _) = app.overlay_shapes();
        assert_eq!(rois.len(), 2);
    }

    #[test]
    fn test_pending_loader_keeps_waiting() {
        let mut app = app_with(ViewerConfig::default());
        let (_sender, receiver) = channel();
        app.image_loader = Some(receiver);
        app.loading_message = Some("Loading reference image...".to_string());

        app.poll_image_loader(&egui::Context::default());
        assert!(app.image_loader.is_some());
        assert!(app.loading_message.is_some());
    }

    #[test]
    fn test_loader_dropped_without_result_clears_loading() {
        let mut app = app_with(ViewerConfig::default());
        let (sender, receiver) = channel();
        app.image_loader = Some(receiver);
        app.loading_message = Some("Loading reference image...".to_string());
        drop(sender);

        app.poll_image_loader(&egui::Context::default());
        assert!(app.image_loader.is_none());
        assert!(app.loading_message.is_none());
        assert!(app
            .media_status
            .as_deref()
            .is_some_and(|s| s.contains("loader stopped")));
    }

    #[test]
    fn test_next_action_redraws_chart() {
        let mut app = app_with(ViewerConfig::default());
        app.rotation_chart = RotationChart::default();
        app.run_command(Command::NextAction, &egui::Context::default());
        assert_eq!(app.rotation.len(), 2);
        assert!(app.rotation_chart.is_dirty());
    }
}

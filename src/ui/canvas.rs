// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Frame area: reference image, ROI and landmark overlay, action label.
//!
//! Overlay shapes are given in normalized coordinates and mapped onto the
//! letterboxed frame rectangle.

use crate::models::observation::{Point, Roi};
use crate::util::geometry::normalize_coordinates;

/// Everything the canvas draws for one frame.
pub struct CanvasView<'a> {
    pub texture: Option<&'a egui::TextureHandle>,
    /// Frame size in pixels, used for aspect ratio and pointer readout.
    pub frame_size: (u32, u32),
    pub rois: Vec<&'a Roi>,
    pub landmarks: Vec<&'a Point>,
    pub label: &'a str,
    /// Small caption in the frame corner (playback time).
    pub caption: String,
    /// Shown instead of the frame when media could not be loaded.
    pub status: Option<&'a str>,
    pub loading: Option<&'a str>,
}

/// Fit a `frame_w` x `frame_h` frame inside `available`, centered.
pub fn fit_rect(available: egui::Rect, frame_w: u32, frame_h: u32) -> egui::Rect {
    let frame_aspect = frame_w.max(1) as f32 / frame_h.max(1) as f32;
    let available_aspect = available.width() / available.height().max(1.0);

    let (display_width, display_height) = if frame_aspect > available_aspect {
        // Frame is wider - fit to width
        let width = available.width();
        (width, width / frame_aspect)
    } else {
        // Frame is taller - fit to height
        let height = available.height();
        (height * frame_aspect, height)
    };

    egui::Rect::from_center_size(available.center(), egui::vec2(display_width, display_height))
}

fn to_screen(rect: &egui::Rect, x: f64, y: f64) -> egui::Pos2 {
    egui::pos2(
        rect.min.x + x as f32 * rect.width(),
        rect.min.y + y as f32 * rect.height(),
    )
}

/// Display the frame area.
pub fn show(ui: &mut egui::Ui, view: &CanvasView) {
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);
    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        if let Some(message) = view.loading {
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.spinner();
                    ui.add_space(10.0);
                    ui.label(
                        egui::RichText::new(message)
                            .size(16.0)
                            .color(egui::Color32::from_gray(200)),
                    );
                });
            });
            return;
        }

        let (outer, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
        let frame_rect = fit_rect(outer, view.frame_size.0, view.frame_size.1);
        let painter = ui.painter_at(outer);

        match view.texture {
            Some(texture) => {
                painter.image(
                    texture.id(),
                    frame_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
            None => {
                painter.rect_filled(frame_rect, 0.0, egui::Color32::from_gray(20));
                if let Some(status) = view.status {
                    painter.text(
                        frame_rect.center_bottom() - egui::vec2(0.0, 24.0),
                        egui::Align2::CENTER_CENTER,
                        status,
                        egui::FontId::proportional(13.0),
                        egui::Color32::from_rgb(230, 160, 60),
                    );
                }
            }
        }

        for roi in &view.rois {
            let min = to_screen(&frame_rect, roi.x, roi.y);
            let max = to_screen(&frame_rect, roi.x + roi.width, roi.y + roi.height);
            painter.rect_stroke(
                egui::Rect::from_min_max(min, max),
                0.0,
                egui::Stroke::new(2.0, egui::Color32::GREEN),
            );
        }

        for point in &view.landmarks {
            painter.circle_filled(to_screen(&frame_rect, point.x, point.y), 1.5, egui::Color32::RED);
        }

        if !view.label.is_empty() {
            painter.text(
                frame_rect.center(),
                egui::Align2::CENTER_CENTER,
                view.label,
                egui::FontId::proportional(36.0),
                egui::Color32::WHITE,
            );
        }

        painter.text(
            frame_rect.left_top() + egui::vec2(8.0, 8.0),
            egui::Align2::LEFT_TOP,
            &view.caption,
            egui::FontId::monospace(14.0),
            egui::Color32::from_gray(220),
        );

        // Pointer readout in normalized frame coordinates
        if let Some(pos) = response.hover_pos().filter(|p| frame_rect.contains(*p)) {
            let (frame_w, frame_h) = view.frame_size;
            let pixel_x = (pos.x - frame_rect.min.x) / frame_rect.width() * frame_w as f32;
            let pixel_y = (pos.y - frame_rect.min.y) / frame_rect.height() * frame_h as f32;
            let normalized = normalize_coordinates(pixel_x as f64, pixel_y as f64, frame_w, frame_h);
            painter.text(
                frame_rect.right_top() + egui::vec2(-8.0, 8.0),
                egui::Align2::RIGHT_TOP,
                format!("({:.3}, {:.3})", normalized.x, normalized.y),
                egui::FontId::monospace(12.0),
                egui::Color32::from_gray(180),
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_rect_wide_frame() {
        let available = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 800.0));
        let rect = fit_rect(available, 640, 480);
        assert_eq!(rect.width(), 800.0);
        assert_eq!(rect.height(), 600.0);
        assert_eq!(rect.min.y, 100.0);
    }

    #[test]
    fn test_fit_rect_tall_frame() {
        let available = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1000.0, 960.0));
        let rect = fit_rect(available, 1080, 1920);
        assert_eq!(rect.height(), 960.0);
        assert_eq!(rect.width(), 540.0);
        assert_eq!(rect.min.x, 230.0);
    }
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing observation overlays into a raster image.
//!
//! Used to export the display-mode overlay (ROI boxes and landmark dots
//! over the reference frame) as a PNG.

use super::geometry::{point_to_pixel, roi_to_pixels};
use crate::models::observation::{Action, Feed, Roi};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;

pub const ROI_COLOR: Rgba<u8> = Rgba([0, 255, 0, 255]);
pub const ROI_THICKNESS: u32 = 3;
pub const LANDMARK_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const LANDMARK_RADIUS: i32 = 1;

/// Draw the outline of a normalized ROI. Edges are centered on the ROI border.
pub fn draw_roi(image: &mut RgbaImage, roi: &Roi, color: Rgba<u8>, thickness: u32) {
    let (width, height) = image.dimensions();
    let thickness = thickness.max(1);
    // Keep corners near the frame so imageproc's i32 rect math cannot overflow.
    let rect = roi_to_pixels(roi, width, height).clamp_to(width, height, thickness as i64);
    let before = ((thickness - 1) / 2) as i32;
    let span_x = rect.width() as u32 + thickness;
    let span_y = rect.height() as u32 + thickness;
    let (x0, y0) = (rect.x0 as i32 - before, rect.y0 as i32 - before);
    let (x1, y1) = (rect.x1 as i32 - before, rect.y1 as i32 - before);

    // top, bottom
    draw_filled_rect_mut(image, Rect::at(x0, y0).of_size(span_x, thickness), color);
    draw_filled_rect_mut(image, Rect::at(x0, y1).of_size(span_x, thickness), color);
    // left, right
    draw_filled_rect_mut(image, Rect::at(x0, y0).of_size(thickness, span_y), color);
    draw_filled_rect_mut(image, Rect::at(x1, y0).of_size(thickness, span_y), color);
}

/// Draw a filled dot for every tracked position of every feed.
pub fn draw_landmarks(image: &mut RgbaImage, feeds: &[Feed], color: Rgba<u8>, radius: i32) {
    let (width, height) = image.dimensions();
    let margin = radius.max(0) as i64 + 1;
    for feed in feeds {
        for point in &feed.tracked_positions {
            let (cx, cy) = point_to_pixel(point, width, height);
            let cx = cx.clamp(-margin, width as i64 + margin) as i32;
            let cy = cy.clamp(-margin, height as i64 + margin) as i32;
            draw_filled_circle_mut(image, (cx, cy), radius, color);
        }
    }
}

/// Draw one action: its ROI box, then all of its landmarks.
pub fn draw_action(image: &mut RgbaImage, action: &Action) {
    draw_roi(image, &action.roi, ROI_COLOR, ROI_THICKNESS);
    draw_landmarks(image, &action.feeds, LANDMARK_COLOR, LANDMARK_RADIUS);
}

/// Draw a set of actions over a copy of `base`.
pub fn render_overlay<'a>(
    base: &RgbaImage,
    actions: impl IntoIterator<Item = &'a Action>,
) -> RgbaImage {
    let mut image = base.clone();
    let mut drawn = 0;
    for action in actions {
        draw_action(&mut image, action);
        drawn += 1;
    }
    log::debug!("Rendered overlay for {} actions", drawn);
    image
}

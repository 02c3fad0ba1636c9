// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides utilities for coordinate transformations between
//! pixel coordinates and the normalized coordinates used by observations.

use crate::models::observation::{Point, Roi};

/// Axis-aligned rectangle in pixel space, corners inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl PixelRect {
    pub fn width(&self) -> i64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i64 {
        self.y1 - self.y0
    }

    /// Order the corners and clamp them to `margin` pixels around a
    /// `width` x `height` frame.
    pub fn clamp_to(&self, width: u32, height: u32, margin: i64) -> PixelRect {
        let cx = |v: i64| v.clamp(-margin, width as i64 + margin);
        let cy = |v: i64| v.clamp(-margin, height as i64 + margin);
        PixelRect {
            x0: cx(self.x0.min(self.x1)),
            y0: cy(self.y0.min(self.y1)),
            x1: cx(self.x0.max(self.x1)),
            y1: cy(self.y0.max(self.y1)),
        }
    }
}

/// Convert pixel coordinates to normalized coordinates (0.0 to 1.0).
pub fn normalize_coordinates(pixel_x: f64, pixel_y: f64, width: u32, height: u32) -> Point {
    Point {
        x: pixel_x / width as f64,
        y: pixel_y / height as f64,
    }
}

/// Convert normalized coordinates to pixel coordinates.
pub fn denormalize_coordinates(point: &Point, width: u32, height: u32) -> (f64, f64) {
    (point.x * width as f64, point.y * height as f64)
}

/// Snap a normalized point to a pixel, rounding up.
pub fn point_to_pixel(point: &Point, width: u32, height: u32) -> (i64, i64) {
    let (x, y) = denormalize_coordinates(point, width, height);
    (x.ceil() as i64, y.ceil() as i64)
}

/// Map a normalized ROI onto a `width` x `height` frame.
///
/// Origin and extent are rounded up independently, so the far corner is
/// `origin + ceil(extent)` rather than `ceil(origin + extent)`. Values that
/// do not fit an `i64` saturate; NaN maps to 0.
pub fn roi_to_pixels(roi: &Roi, width: u32, height: u32) -> PixelRect {
    let (w, h) = (width as f64, height as f64);
    let x0 = (roi.x * w).ceil() as i64;
    let y0 = (roi.y * h).ceil() as i64;
    PixelRect {
        x0,
        y0,
        x1: x0.saturating_add((roi.width * w).ceil() as i64),
        y1: y0.saturating_add((roi.height * h).ceil() as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_pixel_roundtrip_on_portrait_frame() {
        // Portrait capture, as recorded by the phone app.
        let (width, height) = (1080, 1920);
        let landmark = Point::new(0.25, 0.75);

        let (px, py) = denormalize_coordinates(&landmark, width, height);
        assert_eq!((px, py), (270.0, 1440.0));

        let back = normalize_coordinates(px, py, width, height);
        assert!((back.x - landmark.x).abs() < 1e-12);
        assert!((back.y - landmark.y).abs() < 1e-12);
        assert_eq!(point_to_pixel(&back, width, height), (270, 1440));
    }

    #[test]
    fn test_roi_to_pixels_vga() {
        let roi = Roi {
            x: 0.1,
            y: 0.1,
            width: 0.2,
            height: 0.2,
        };
        let rect = roi_to_pixels(&roi, 640, 480);
        assert_eq!((rect.x0, rect.y0), (64, 48));
        assert_eq!((rect.x1, rect.y1), (192, 144));
        assert_eq!(rect.width(), 128);
        assert_eq!(rect.height(), 96);
    }

    #[test]
    fn test_point_to_pixel_rounds_up() {
        let point = Point::new(0.501, 0.25);
        assert_eq!(point_to_pixel(&point, 640, 480), (321, 120));
    }

    #[test]
    fn test_full_frame_roi() {
        let roi = Roi {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
        };
        let rect = roi_to_pixels(&roi, 1080, 1920);
        assert_eq!(rect, PixelRect { x0: 0, y0: 0, x1: 1080, y1: 1920 });
    }

    #[test]
    fn test_oversized_roi_saturates() {
        let roi = Roi {
            x: 0.5,
            y: 0.5,
            width: 1e300,
            height: f64::INFINITY,
        };
        let rect = roi_to_pixels(&roi, 640, 480);
        assert_eq!((rect.x0, rect.y0), (320, 240));
        assert_eq!(rect.x1, i64::MAX);
        assert_eq!(rect.y1, i64::MAX);

        let nan = Roi { x: f64::NAN, ..roi };
        assert_eq!(roi_to_pixels(&nan, 640, 480).x0, 0);

        let clamped = rect.clamp_to(640, 480, 3);
        assert_eq!(clamped, PixelRect { x0: 320, y0: 240, x1: 643, y1: 483 });
        assert_eq!((clamped.width(), clamped.height()), (323, 243));
    }
}

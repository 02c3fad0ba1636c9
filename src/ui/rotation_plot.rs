// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Angle chart window: pitch, yaw and roll against feed index, stacked.

use crate::util::chart;
use crate::util::series::RotationSeries;

const MIN_SIZE: [f32; 2] = [160.0, 180.0];

/// Rendered chart texture, redrawn when the series or the space changes.
#[derive(Default)]
pub struct RotationChart {
    texture: Option<egui::TextureHandle>,
    size: [usize; 2],
    dirty: bool,
}

impl RotationChart {
    /// Mark the chart for redrawing on the next frame.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// Display the chart for `series`.
pub fn show(ui: &mut egui::Ui, chart: &mut RotationChart, series: &RotationSeries, title: &str) {
    ui.vertical_centered(|ui| {
        ui.heading(title);
    });

    if series.is_empty() {
        ui.label("No feeds");
        return;
    }

    let available = ui.available_size();
    let size = [
        available.x.max(MIN_SIZE[0]) as usize,
        available.y.max(MIN_SIZE[1]) as usize,
    ];
    if chart.is_dirty() || chart.texture.is_none() || chart.size != size {
        chart.texture = render_texture(ui.ctx(), series, size);
        chart.size = size;
        chart.dirty = false;
    }

    if let Some(texture) = &chart.texture {
        ui.image(egui::load::SizedTexture::new(
            texture.id(),
            egui::vec2(size[0] as f32, size[1] as f32),
        ));
    }
}

fn render_texture(
    ctx: &egui::Context,
    series: &RotationSeries,
    size: [usize; 2],
) -> Option<egui::TextureHandle> {
    let (width, height) = (size[0] as u32, size[1] as u32);
    let rgb = chart::render_rotation_chart(series, width, height, true)
        .or_else(|e| {
            log::warn!("Chart labels unavailable ({}), drawing lines only", e);
            chart::render_rotation_chart(series, width, height, false)
        })
        .map_err(|e| log::error!("Failed to render angle chart: {}", e))
        .ok()?;

    let image = egui::ColorImage::from_rgb(size, &rgb);
    Some(ctx.load_texture("angle_chart", image, egui::TextureOptions::LINEAR))
}

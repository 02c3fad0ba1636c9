// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Off-screen rendering of the angle chart.

use super::series::{value_range, RotationSeries};
use plotters::prelude::*;

pub const SERIES_COLOR: RGBColor = RGBColor(30, 120, 200);

/// Render pitch, yaw and roll of `series` as three stacked subplots into an
/// RGB buffer of `width` x `height` pixels.
///
/// Captions and axis labels need a system font. With `labels` off only the
/// frame and the lines are drawn.
pub fn render_rotation_chart(
    series: &RotationSeries,
    width: u32,
    height: u32,
    labels: bool,
) -> anyhow::Result<Vec<u8>> {
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        let x_max = series.len().saturating_sub(1).max(1) as f64;
        let areas = root.split_evenly((3, 1));
        for (area, (name, values)) in areas.iter().zip(series.subplots()) {
            let (lo, hi) = padded_range(values);

            let mut builder = ChartBuilder::on(area);
            builder.margin(5);
            if labels {
                builder
                    .caption(name, ("sans-serif", 16).into_font())
                    .x_label_area_size(20)
                    .y_label_area_size(40);
            }
            let mut chart = builder.build_cartesian_2d(0f64..x_max, lo..hi)?;

            if labels {
                chart.configure_mesh().x_desc("feed").draw()?;
            }

            let points = values.iter().enumerate().map(|(i, &v)| (i as f64, v));
            if values.len() == 1 {
                chart.draw_series(points.map(|p| Circle::new(p, 3, SERIES_COLOR.filled())))?;
            } else {
                chart.draw_series(LineSeries::new(points, &SERIES_COLOR))?;
            }
        }

        root.present()?;
    }
    Ok(buffer)
}

/// Value range with a little headroom; flat or empty series get a unit band.
fn padded_range(values: &[f64]) -> (f64, f64) {
    match value_range(values) {
        Some((lo, hi)) if hi - lo > f64::EPSILON => {
            let pad = (hi - lo) * 0.05;
            (lo - pad, hi + pad)
        }
        Some((lo, _)) => (lo - 1.0, lo + 1.0),
        None => (-1.0, 1.0),
    }
}

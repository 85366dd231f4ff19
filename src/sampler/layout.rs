//! Pixel geometry: container sizes, linear scales, and ready-to-draw frames
//! for the main plot and the wave previews.
//!
//! Frames are rebuilt from scratch whenever the model changes or a plot
//! container is resized.

use serde::Serialize;

use crate::config::{Margin, VisualizerConfig};
use crate::wave::Wave;

use super::curve::{sample_sum, sample_wave, CurvePoint};
use super::scale::{compute_y_range, superposition_title, x_ticks};

/// Outer and inner (margin-free) size of a plot container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotDimensions {
    pub width: f64,
    pub height: f64,
    pub inner_width: f64,
    pub inner_height: f64,
}

impl PlotDimensions {
    /// Measure a container from its bounding box and total border widths.
    /// Inner sizes never go negative.
    pub fn measure(
        outer_width: f64,
        outer_height: f64,
        border_x: f64,
        border_y: f64,
        margin: &Margin,
    ) -> Self {
        let width = outer_width - border_x;
        let height = outer_height - border_y;
        PlotDimensions {
            width,
            height,
            inner_width: (width - margin.horizontal()).max(0.0),
            inner_height: (height - margin.vertical()).max(0.0),
        }
    }
}

/// Maps a value interval linearly onto a pixel interval. Either interval
/// may be reversed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    /// A collapsed domain maps everything to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 != d0 { (value - d0) / (d1 - d0) } else { 0.5 };
        r0 + t * (r1 - r0)
    }

    pub fn map_point(&self, y_scale: &LinearScale, p: CurvePoint) -> CurvePoint {
        CurvePoint::new(self.map(p.x), y_scale.map(p.y))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedTick {
    pub value: f64,
    pub label: String,
    /// x pixel offset inside the drawing area.
    pub position: f64,
}

/// Everything needed to draw the superposition plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotFrame {
    pub dimensions: PlotDimensions,
    /// Translation of the drawing area inside the container.
    pub offset: (f64, f64),
    pub y_half_range: f64,
    /// y pixel of the x axis (the middle of the drawing area).
    pub baseline: f64,
    pub ticks: Vec<PlacedTick>,
    /// Superposition curve in drawing-area pixels.
    pub path: Vec<CurvePoint>,
    pub title: String,
}

impl PlotFrame {
    pub fn build(waves: &[Wave], config: &VisualizerConfig, dimensions: PlotDimensions) -> Self {
        let domain = config.domain;
        let curve: Vec<CurvePoint> = sample_sum(waves, domain, config.main_points).collect();
        let half = compute_y_range(&curve);

        let x_scale = LinearScale::new((domain.min, domain.max), (0.0, dimensions.inner_width));
        let y_scale = LinearScale::new((-half, half), (dimensions.inner_height, 0.0));

        let ticks = x_ticks(domain, config.tick_step)
            .into_iter()
            .map(|t| PlacedTick {
                position: x_scale.map(t.value),
                value: t.value,
                label: t.label,
            })
            .collect();

        PlotFrame {
            dimensions,
            offset: (config.margin.left, config.margin.top),
            y_half_range: half,
            baseline: dimensions.inner_height / 2.0,
            ticks,
            path: curve.into_iter().map(|p| x_scale.map_point(&y_scale, p)).collect(),
            title: superposition_title(waves.len()),
        }
    }
}

/// A wave card preview, drawn on a fixed y domain so cards compare at a
/// glance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewFrame {
    pub id: u32,
    pub color: String,
    pub width: f64,
    pub height: f64,
    pub path: Vec<CurvePoint>,
}

impl PreviewFrame {
    /// `None` while the container has no width (e.g. not laid out yet).
    pub fn build(
        wave: &Wave,
        config: &VisualizerConfig,
        dimensions: PlotDimensions,
    ) -> Option<Self> {
        if dimensions.width <= 0.0 {
            return None;
        }
        let (w, h) = (dimensions.width, dimensions.height);
        let limit = config.preview_y_limit;
        let x_scale = LinearScale::new(
            (config.domain.min, config.domain.max),
            (config.preview_inset, w - config.preview_inset),
        );
        let y_scale = LinearScale::new(
            (-limit, limit),
            (h - config.preview_y_margin, config.preview_y_margin),
        );

        let path = sample_wave(wave, config.domain, config.preview_points)
            .map(|p| x_scale.map_point(&y_scale, p))
            .collect();

        Some(PreviewFrame {
            id: wave.id,
            color: wave.color.clone(),
            width: w,
            height: h,
            path,
        })
    }
}

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaveError};
use crate::sampler::SampleDomain;
use crate::wave::DEFAULT_PALETTE;

/// Upper bound on `mainPoints` / `previewPoints`.
pub const MAX_POINTS: usize = 100_000;
/// Upper bound on the number of x-axis ticks a config may produce.
pub const MAX_TICKS: usize = 1_000;

/// Spacing in pixels between a plot's outer box and its drawing area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Margin {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Visualizer settings. Every field has a default, so a JSON document only
/// needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisualizerConfig {
    pub domain: SampleDomain,
    /// Resolution of the superposition plot.
    pub main_points: usize,
    /// Resolution of each wave card's preview.
    pub preview_points: usize,
    pub margin: Margin,
    pub preview_inset: f64,
    pub preview_y_margin: f64,
    /// Previews use the fixed y domain [-limit, limit].
    pub preview_y_limit: f64,
    pub tick_step: f64,
    pub palette: Vec<String>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            domain: SampleDomain::default(),
            main_points: 300,
            preview_points: 200,
            margin: Margin::new(30.0, 50.0, 30.0, 50.0),
            preview_inset: 10.0,
            preview_y_margin: 5.0,
            preview_y_limit: 5.0,
            tick_step: PI / 2.0,
            palette: default_palette(),
        }
    }
}

impl VisualizerConfig {
    /// Parse a (possibly partial) JSON config. An empty palette falls back
    /// to the default one; out-of-range numbers are rejected.
    pub fn from_json(source: &str) -> Result<Self> {
        let mut config: VisualizerConfig = serde_json::from_str(source)?;
        if config.palette.is_empty() {
            config.palette = default_palette();
        }
        config.validate()?;
        Ok(config)
    }

    /// Check that sampling and layout values stay finite and bounded.
    pub fn validate(&self) -> Result<()> {
        let d = self.domain;
        if !d.min.is_finite() || !d.max.is_finite() || d.min >= d.max {
            return Err(invalid(format!(
                "domain [{}, {}] must be finite with min < max",
                d.min, d.max
            )));
        }
        let step = self.tick_step;
        if !step.is_finite() || step <= 0.0 {
            return Err(invalid(format!("tickStep {step} must be finite and > 0")));
        }
        if d.span() / step > MAX_TICKS as f64 {
            return Err(invalid(format!(
                "tickStep {step} yields more than {MAX_TICKS} ticks"
            )));
        }
        let counts = [
            ("mainPoints", self.main_points),
            ("previewPoints", self.preview_points),
        ];
        for (name, points) in counts {
            if points > MAX_POINTS {
                return Err(invalid(format!("{name} {points} exceeds {MAX_POINTS}")));
            }
        }
        let limit = self.preview_y_limit;
        if !limit.is_finite() || limit <= 0.0 {
            return Err(invalid(format!(
                "previewYLimit {limit} must be finite and > 0"
            )));
        }
        let lengths = [
            self.margin.top,
            self.margin.right,
            self.margin.bottom,
            self.margin.left,
            self.preview_inset,
            self.preview_y_margin,
        ];
        if lengths.iter().any(|v| !v.is_finite()) {
            return Err(invalid("margins and insets must be finite".to_string()));
        }
        Ok(())
    }

    /// Margin applied around a preview: inset left/right, y margin top/bottom.
    pub fn preview_margin(&self) -> Margin {
        Margin::new(
            self.preview_y_margin,
            self.preview_inset,
            self.preview_y_margin,
            self.preview_inset,
        )
    }
}

fn invalid(reason: String) -> WaveError {
    WaveError::InvalidConfig(reason)
}

pub fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

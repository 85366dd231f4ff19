//! Wave descriptors: the sinusoids that make up a superposition.

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WaveError;

/// Colors assigned to waves in creation order, cycling by id.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98FB98", "#DDA0DD", "#F0E68C", "#87CEFA",
];

/// Glyph used when labelling multiples of π.
pub const PI_SYMBOL: &str = "π";

/// Amplitude, frequency and phase of a single sinusoid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveParams {
    pub amplitude: f64,
    pub frequency: f64,
    /// Radians, [0, 2π].
    pub phase: f64,
}

impl WaveParams {
    pub const fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        WaveParams {
            amplitude,
            frequency,
            phase,
        }
    }

    /// Evaluate `amplitude · sin(frequency · x + phase)`.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.amplitude * (self.frequency * x + self.phase).sin()
    }

    pub fn get(&self, property: WaveProperty) -> f64 {
        match property {
            WaveProperty::Amplitude => self.amplitude,
            WaveProperty::Frequency => self.frequency,
            WaveProperty::Phase => self.phase,
        }
    }

    fn field_mut(&mut self, property: WaveProperty) -> &mut f64 {
        match property {
            WaveProperty::Amplitude => &mut self.amplitude,
            WaveProperty::Frequency => &mut self.frequency,
            WaveProperty::Phase => &mut self.phase,
        }
    }
}

impl Default for WaveParams {
    fn default() -> Self {
        WaveParams::new(1.0, 1.0, 0.0)
    }
}

/// A wave owned by the model. Ids are unique within one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    pub id: u32,
    pub color: String,
    #[serde(flatten)]
    pub params: WaveParams,
}

impl Wave {
    pub fn new(id: u32, color: impl Into<String>, params: WaveParams) -> Self {
        Wave {
            id,
            color: color.into(),
            params,
        }
    }

    /// Card title shown next to the color swatch.
    pub fn label(&self) -> String {
        format!("Wave {}", self.id)
    }

    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.params.eval(x)
    }

    /// Write a clamped value and return what was stored.
    pub(crate) fn set(&mut self, property: WaveProperty, value: f64) -> f64 {
        let stored = property.clamp(value);
        *self.params.field_mut(property) = stored;
        stored
    }
}

/// The editable fields of a wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveProperty {
    Amplitude,
    Frequency,
    Phase,
}

/// Bounds and step of the slider editing one property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl WaveProperty {
    pub const ALL: [WaveProperty; 3] = [
        WaveProperty::Amplitude,
        WaveProperty::Frequency,
        WaveProperty::Phase,
    ];

    pub fn key(self) -> &'static str {
        match self {
            WaveProperty::Amplitude => "amplitude",
            WaveProperty::Frequency => "frequency",
            WaveProperty::Phase => "phase",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            WaveProperty::Amplitude => "Amplitude",
            WaveProperty::Frequency => "Frequency",
            WaveProperty::Phase => "Phase",
        }
    }

    /// Valid stored range, inclusive.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            WaveProperty::Amplitude => (0.0, 5.0),
            WaveProperty::Frequency => (0.1, 10.0),
            WaveProperty::Phase => (0.0, TAU),
        }
    }

    /// Clamp into [`bounds`](Self::bounds). Phase past 2π saturates at
    /// exactly 2π; it never wraps.
    pub fn clamp(self, value: f64) -> f64 {
        let (lo, hi) = self.bounds();
        value.clamp(lo, hi)
    }

    /// Slider configuration for the wave card. The phase slider overshoots
    /// 2π by 0.001 so that 2.00π stays reachable with a π/100 step.
    pub fn slider(self) -> SliderRange {
        match self {
            WaveProperty::Amplitude => SliderRange {
                min: 0.0,
                max: 5.0,
                step: 0.01,
            },
            WaveProperty::Frequency => SliderRange {
                min: 0.1,
                max: 10.0,
                step: 0.1,
            },
            WaveProperty::Phase => SliderRange {
                min: 0.0,
                max: TAU + 0.001,
                step: PI / 100.0,
            },
        }
    }

    /// Value text next to the slider label.
    pub fn format(self, value: f64) -> String {
        match self {
            WaveProperty::Phase => format!("{:.2}{PI_SYMBOL}", value / PI),
            _ => format!("{value:.2}"),
        }
    }
}

impl fmt::Display for WaveProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for WaveProperty {
    type Err = WaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "amplitude" => Ok(WaveProperty::Amplitude),
            "frequency" => Ok(WaveProperty::Frequency),
            "phase" => Ok(WaveProperty::Phase),
            _ => Err(WaveError::UnknownProperty(s.to_string())),
        }
    }
}

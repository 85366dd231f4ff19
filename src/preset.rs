//! Built-in presets: classic waveforms approximated by their first four
//! harmonics.
//!
//! Presets are static tables. Loading one replaces the whole model (see
//! [`WaveModel::load_preset`](crate::model::WaveModel::load_preset)).

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WaveError;
use crate::wave::WaveParams;

/// Select value meaning "the waves were edited by hand".
pub const CUSTOM_PRESET_KEY: &str = "custom";

const SQUARE: [WaveParams; 4] = [
    WaveParams::new(1.0, 1.0, 0.0),
    WaveParams::new(1.0 / 3.0, 3.0, 0.0),
    WaveParams::new(1.0 / 5.0, 5.0, 0.0),
    WaveParams::new(1.0 / 7.0, 7.0, 0.0),
];

const SAWTOOTH: [WaveParams; 4] = [
    WaveParams::new(1.0, 1.0, 0.0),
    WaveParams::new(0.5, 2.0, 0.0),
    WaveParams::new(0.33, 3.0, 0.0),
    WaveParams::new(0.25, 4.0, 0.0),
];

// Alternating harmonics are inverted with a phase of π.
const TRIANGLE: [WaveParams; 4] = [
    WaveParams::new(1.0, 1.0, 0.0),
    WaveParams::new(1.0 / 9.0, 3.0, PI),
    WaveParams::new(1.0 / 25.0, 5.0, 0.0),
    WaveParams::new(1.0 / 49.0, 7.0, PI),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetKind {
    Square,
    Sawtooth,
    Triangle,
}

impl PresetKind {
    pub const ALL: [PresetKind; 3] = [
        PresetKind::Square,
        PresetKind::Sawtooth,
        PresetKind::Triangle,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PresetKind::Square => "square",
            PresetKind::Sawtooth => "sawtooth",
            PresetKind::Triangle => "triangle",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PresetKind::Square => "Square Wave",
            PresetKind::Sawtooth => "Sawtooth Wave",
            PresetKind::Triangle => "Triangle Wave",
        }
    }

    /// Harmonic table, fundamental first.
    pub fn waves(self) -> &'static [WaveParams] {
        match self {
            PresetKind::Square => &SQUARE,
            PresetKind::Sawtooth => &SAWTOOTH,
            PresetKind::Triangle => &TRIANGLE,
        }
    }

    pub fn definition(self) -> PresetDefinition {
        PresetDefinition {
            key: self.key().to_string(),
            name: self.name().to_string(),
            waves: self.waves().to_vec(),
        }
    }

    /// Parse a select value. `custom` and unknown keys are both `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        PresetKind::ALL.into_iter().find(|k| k.key() == key)
    }
}

impl fmt::Display for PresetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PresetKind {
    type Err = WaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetKind::from_key(s.trim()).ok_or_else(|| WaveError::UnknownPreset(s.to_string()))
    }
}

/// Serializable preset entry for populating the preset picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetDefinition {
    pub key: String,
    pub name: String,
    pub waves: Vec<WaveParams>,
}

/// Every built-in preset, in picker order.
pub fn catalog() -> Vec<PresetDefinition> {
    PresetKind::ALL.into_iter().map(PresetKind::definition).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::WaveProperty;

    #[test]
    fn square_is_odd_harmonics() {
        let waves = PresetKind::Square.waves();
        let freqs: Vec<f64> = waves.iter().map(|w| w.frequency).collect();
        assert_eq!(freqs, vec![1.0, 3.0, 5.0, 7.0]);
        for w in waves {
            assert_eq!(w.amplitude, 1.0 / w.frequency);
            assert_eq!(w.phase, 0.0);
        }
    }

    #[test]
    fn sawtooth_table() {
        let amps: Vec<f64> = PresetKind::Sawtooth.waves().iter().map(|w| w.amplitude).collect();
        assert_eq!(amps, vec![1.0, 0.5, 0.33, 0.25]);
    }

    #[test]
    fn triangle_alternates_phase() {
        let phases: Vec<f64> = PresetKind::Triangle.waves().iter().map(|w| w.phase).collect();
        assert_eq!(phases, vec![0.0, PI, 0.0, PI]);
        assert_eq!(PresetKind::Triangle.waves()[3].amplitude, 1.0 / 49.0);
    }

    #[test]
    fn tables_are_within_slider_bounds() {
        for kind in PresetKind::ALL {
            for w in kind.waves() {
                for prop in WaveProperty::ALL {
                    let v = w.get(prop);
                    assert_eq!(prop.clamp(v), v, "{kind} {prop} out of range: {v}");
                }
            }
        }
    }

    #[test]
    fn parse_keys() {
        assert_eq!("square".parse::<PresetKind>().unwrap(), PresetKind::Square);
        assert_eq!(PresetKind::from_key("triangle"), Some(PresetKind::Triangle));
        assert_eq!(PresetKind::from_key(CUSTOM_PRESET_KEY), None);
        assert!(matches!(
            "custom".parse::<PresetKind>(),
            Err(WaveError::UnknownPreset(_))
        ));
    }

    #[test]
    fn catalog_roundtrip() {
        let cat = catalog();
        assert_eq!(cat.len(), 3);
        assert_eq!(cat[1].name, "Sawtooth Wave");

        let json = serde_json::to_string(&cat).unwrap();
        let back: Vec<PresetDefinition> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cat);
    }
}

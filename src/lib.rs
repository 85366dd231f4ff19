pub mod config;
pub mod error;
pub mod model;
pub mod preset;
pub mod sampler;
pub mod session;
pub mod wave;

use serde::Serialize;
use wasm_bindgen::prelude::*;

pub use crate::config::{Margin, VisualizerConfig};
pub use crate::error::{Result, WaveError};
pub use crate::model::{ModelChange, WaveModel};
pub use crate::preset::{PresetDefinition, PresetKind};
pub use crate::sampler::{
    compute_y_range, sample_sum, sample_wave, x_ticks, CurvePoint, SampleDomain,
};
pub use crate::session::WaveSession;
pub use crate::wave::{SliderRange, Wave, WaveParams, WaveProperty};

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the wavesum-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// WASM-exposed: route `log` output to the browser console and panics to
/// `console.error`. Safe to call more than once.
#[wasm_bindgen]
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_ok() {
            log::info!("wavesum-core {VERSION} ready");
        }
    }
}

/// WASM-exposed: every built-in preset, for filling the preset picker.
#[wasm_bindgen]
pub fn preset_catalog() -> std::result::Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&preset::catalog()).map_err(|e| JsValue::from_str(&format!("{e}")))
}

#[derive(Serialize)]
struct SliderSpec {
    property: WaveProperty,
    label: &'static str,
    #[serde(flatten)]
    range: SliderRange,
}

/// WASM-exposed: slider bounds and steps for each wave property, in card
/// order.
#[wasm_bindgen]
pub fn slider_ranges() -> std::result::Result<JsValue, JsValue> {
    let specs: Vec<SliderSpec> = WaveProperty::ALL
        .into_iter()
        .map(|property| SliderSpec {
            property,
            label: property.display_name(),
            range: property.slider(),
        })
        .collect();
    serde_wasm_bindgen::to_value(&specs).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: text shown next to a slider, e.g. `1.25` or `0.50π`.
#[wasm_bindgen]
pub fn format_property(property: &str, value: f64) -> std::result::Result<String, JsValue> {
    let property: WaveProperty = property.parse().map_err(|e| JsValue::from_str(&format!("{e}")))?;
    Ok(property.format(value))
}

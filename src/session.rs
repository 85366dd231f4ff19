//! WASM session, the handle the browser UI holds.
//!
//! A session owns one [`WaveModel`] and its [`VisualizerConfig`]. The UI
//! forwards input events to the mutation methods, then calls
//! [`drain_changes`](WaveSession::drain_changes) and redraws from
//! [`main_plot`](WaveSession::main_plot) / [`preview_plot`](WaveSession::preview_plot).
//! Changes are queued rather than pushed to a JS callback so the UI never
//! re-enters the session while a mutation is still running.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::VisualizerConfig;
use crate::model::{ModelChange, WaveModel};
use crate::preset::{PresetKind, CUSTOM_PRESET_KEY};
use crate::sampler::{
    compute_y_range, sample_sum, sample_wave, x_ticks, CurvePoint, PlotDimensions, PlotFrame,
    PreviewFrame,
};
use crate::wave::{WaveParams, WaveProperty};

#[wasm_bindgen]
pub struct WaveSession {
    model: WaveModel,
    config: VisualizerConfig,
    pending: Rc<RefCell<Vec<ModelChange>>>,
    /// Preset the waves came from; cleared by any later edit.
    preset: Option<PresetKind>,
}

impl WaveSession {
    fn from_config(config: VisualizerConfig) -> Self {
        let mut model = WaveModel::with_palette(config.palette.clone());
        let pending = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&pending);
        model.subscribe(move |change| sink.borrow_mut().push(change.clone()));
        model.add_wave(None);
        WaveSession {
            model,
            config,
            pending,
            preset: None,
        }
    }

    pub fn model(&self) -> &WaveModel {
        &self.model
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }
}

#[wasm_bindgen]
impl WaveSession {
    /// New session with default settings and one default wave, the state
    /// the page opens in.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WaveSession {
        Self::from_config(VisualizerConfig::default())
    }

    /// New session from a (partial) JSON config.
    pub fn with_config(json: &str) -> Result<WaveSession, JsValue> {
        let config = VisualizerConfig::from_json(json).map_err(to_js)?;
        Ok(Self::from_config(config))
    }

    pub fn add_wave(&mut self) -> u32 {
        self.preset = None;
        self.model.add_wave(None)
    }

    /// Parameters are stored as given, without clamping.
    pub fn add_wave_with(&mut self, amplitude: f64, frequency: f64, phase: f64) -> u32 {
        self.preset = None;
        self.model
            .add_wave(Some(WaveParams::new(amplitude, frequency, phase)))
    }

    /// `false` if no wave had that id.
    pub fn remove_wave(&mut self, id: u32) -> bool {
        let removed = self.model.remove_wave(id).is_some();
        if removed {
            self.preset = None;
        }
        removed
    }

    /// Load a preset by picker key. `"custom"` leaves the waves untouched
    /// and returns `false`.
    pub fn load_preset(&mut self, key: &str) -> Result<bool, JsValue> {
        if key == CUSTOM_PRESET_KEY {
            self.preset = None;
            return Ok(false);
        }
        let kind: PresetKind = key.parse().map_err(to_js)?;
        self.model.load_preset(kind.waves());
        self.preset = Some(kind);
        Ok(true)
    }

    /// Picker key to show: the last loaded preset, or `"custom"` once the
    /// waves have been edited by hand.
    pub fn active_preset(&self) -> String {
        self.preset
            .map_or(CUSTOM_PRESET_KEY, PresetKind::key)
            .to_string()
    }

    /// Slider input. Returns the stored (clamped) value, or `undefined` for
    /// an unknown wave id.
    pub fn set_property(
        &mut self,
        id: u32,
        property: &str,
        value: f64,
    ) -> Result<Option<f64>, JsValue> {
        let property: WaveProperty = property.parse().map_err(to_js)?;
        let stored = self.model.set_property(id, property, value);
        if stored.is_some() {
            self.preset = None;
        }
        Ok(stored)
    }

    /// Changes since the last call, oldest first.
    pub fn drain_changes(&mut self) -> Result<JsValue, JsValue> {
        let changes: Vec<ModelChange> = self.pending.borrow_mut().drain(..).collect();
        to_value(&changes)
    }

    pub fn wave_count(&self) -> usize {
        self.model.len()
    }

    /// Card title of wave `id`, e.g. `Wave 3`.
    pub fn wave_label(&self, id: u32) -> Option<String> {
        self.model.wave(id).map(|w| w.label())
    }

    pub fn waves(&self) -> Result<JsValue, JsValue> {
        to_value(self.model.waves())
    }

    /// Summed curve at main-plot resolution.
    pub fn superposition(&self) -> Result<JsValue, JsValue> {
        to_value(&self.superposition_curve())
    }

    /// Preview curve of one wave, `undefined` for an unknown id.
    pub fn preview(&self, id: u32) -> Result<JsValue, JsValue> {
        let curve: Option<Vec<CurvePoint>> = self
            .model
            .wave(id)
            .map(|w| sample_wave(w, self.config.domain, self.config.preview_points).collect());
        to_value(&curve)
    }

    /// Half-range of the main plot's y axis.
    pub fn y_range(&self) -> f64 {
        compute_y_range(&self.superposition_curve())
    }

    pub fn x_ticks(&self) -> Result<JsValue, JsValue> {
        to_value(&x_ticks(self.config.domain, self.config.tick_step))
    }

    /// Main plot frame for a container of the given bounding box and total
    /// border widths.
    pub fn main_plot(
        &self,
        width: f64,
        height: f64,
        border_x: f64,
        border_y: f64,
    ) -> Result<JsValue, JsValue> {
        let dims = PlotDimensions::measure(width, height, border_x, border_y, &self.config.margin);
        to_value(&PlotFrame::build(self.model.waves(), &self.config, dims))
    }

    /// Preview frame for wave `id`; `undefined` if the wave is gone or the
    /// container has no width yet.
    pub fn preview_plot(
        &self,
        id: u32,
        width: f64,
        height: f64,
        border_x: f64,
        border_y: f64,
    ) -> Result<JsValue, JsValue> {
        let margin = self.config.preview_margin();
        let dims = PlotDimensions::measure(width, height, border_x, border_y, &margin);
        let frame = self
            .model
            .wave(id)
            .and_then(|w| PreviewFrame::build(w, &self.config, dims));
        to_value(&frame)
    }
}

impl WaveSession {
    fn superposition_curve(&self) -> Vec<CurvePoint> {
        sample_sum(self.model.waves(), self.config.domain, self.config.main_points).collect()
    }
}

impl Default for WaveSession {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{e}"))
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(to_js)
}

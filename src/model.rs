//! Wave model: the ordered set of waves being superposed.
//!
//! Ids come from a counter that only moves forward while the model holds at
//! least one wave. Emptying the model (removing the last wave, loading a
//! preset, `clear`) rewinds it to 1, so numbering and colors restart from
//! the first palette entry.
//!
//! Every mutation is reported to registered listeners as a [`ModelChange`].
//! The rendering layer subscribes and redraws; the model knows nothing
//! about rendering.

use std::fmt;

use serde::Serialize;

use crate::config::default_palette;
use crate::wave::{Wave, WaveParams, WaveProperty};

/// What a mutation did to the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ModelChange {
    Added { id: u32 },
    Removed { id: u32 },
    /// The whole sequence was replaced (preset load or clear).
    Replaced { count: usize },
    PropertyChanged {
        id: u32,
        property: WaveProperty,
        value: f64,
    },
}

type Listener = Box<dyn FnMut(&ModelChange)>;

pub struct WaveModel {
    waves: Vec<Wave>,
    next_id: u32,
    palette: Vec<String>,
    listeners: Vec<Listener>,
}

impl WaveModel {
    pub fn new() -> Self {
        Self::with_palette(default_palette())
    }

    /// An empty palette falls back to the default colors.
    pub fn with_palette(palette: Vec<String>) -> Self {
        let palette = if palette.is_empty() {
            default_palette()
        } else {
            palette
        };
        WaveModel {
            waves: Vec::new(),
            next_id: 1,
            palette,
            listeners: Vec::new(),
        }
    }

    /// Register a callback run after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&ModelChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Waves in display order.
    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    pub fn wave(&self, id: u32) -> Option<&Wave> {
        self.waves.iter().find(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    /// Id the next added wave will receive.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Color the wave with `id` gets: palette[(id - 1) mod len].
    pub fn color_for(&self, id: u32) -> &str {
        let idx = (id.saturating_sub(1) as usize) % self.palette.len();
        &self.palette[idx]
    }

    /// Append a wave (default parameters when `params` is `None`) and
    /// return its id. Parameters are stored as given; only slider edits
    /// through [`set_property`](Self::set_property) are clamped.
    pub fn add_wave(&mut self, params: Option<WaveParams>) -> u32 {
        let id = self.push(params.unwrap_or_default());
        self.notify(ModelChange::Added { id });
        id
    }

    /// Remove the wave with `id`. Unknown ids are a no-op.
    pub fn remove_wave(&mut self, id: u32) -> Option<Wave> {
        let pos = self.waves.iter().position(|w| w.id == id)?;
        let removed = self.waves.remove(pos);
        if self.waves.is_empty() {
            self.next_id = 1;
        }
        log::debug!("removed wave {id}, {} remaining", self.waves.len());
        self.notify(ModelChange::Removed { id });
        Some(removed)
    }

    /// Replace every wave with `preset`, numbering from 1 again.
    pub fn load_preset(&mut self, preset: &[WaveParams]) {
        self.reset();
        for &params in preset {
            self.push(params);
        }
        log::debug!("loaded preset with {} waves", preset.len());
        self.notify(ModelChange::Replaced { count: self.waves.len() });
    }

    /// Drop every wave and rewind the id counter.
    pub fn clear(&mut self) {
        self.reset();
        self.notify(ModelChange::Replaced { count: 0 });
    }

    /// Write one property of wave `id`, clamped to the property's bounds.
    /// Returns the stored value, or `None` if no wave has that id or the
    /// value is not finite.
    pub fn set_property(&mut self, id: u32, property: WaveProperty, value: f64) -> Option<f64> {
        if !value.is_finite() {
            log::warn!("ignoring non-finite {property} value {value} for wave {id}");
            return None;
        }
        let wave = self.waves.iter_mut().find(|w| w.id == id)?;
        let stored = wave.set(property, value);
        self.notify(ModelChange::PropertyChanged {
            id,
            property,
            value: stored,
        });
        Some(stored)
    }

    fn push(&mut self, params: WaveParams) -> u32 {
        let id = self.next_id;
        self.next_id = match id.checked_add(1) {
            Some(next) => next,
            None => {
                log::warn!("wave id counter exhausted, reusing {id}");
                id
            }
        };
        let wave = Wave::new(id, self.color_for(id), params);
        log::debug!("added wave {id} ({})", wave.color);
        self.waves.push(wave);
        id
    }

    fn reset(&mut self) {
        self.waves.clear();
        self.next_id = 1;
    }

    fn notify(&mut self, change: ModelChange) {
        for listener in self.listeners.iter_mut() {
            listener(&change);
        }
    }
}

impl Default for WaveModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WaveModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaveModel")
            .field("waves", &self.waves)
            .field("next_id", &self.next_id)
            .field("palette", &self.palette)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

//! Axis ranges and tick marks derived from sampled curves.

use std::borrow::Borrow;
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::config::MAX_TICKS;
use crate::wave::PI_SYMBOL;

use super::curve::CurvePoint;
use super::domain::SampleDomain;

/// Smallest y half-range the main plot will shrink to.
pub const Y_RANGE_FLOOR: f64 = 2.0;
/// Headroom above the tallest peak.
pub const Y_RANGE_PAD: f64 = 1.1;
/// Peak used when the curve is empty or silent.
const SILENT_PEAK: f64 = 0.1;

/// Half-range of the symmetric y axis for `curve`: `max(peak, 2) · 1.1`,
/// where `peak` is the largest |y| (0.1 for an empty or all-zero curve).
pub fn compute_y_range<I>(curve: I) -> f64
where
    I: IntoIterator,
    I::Item: Borrow<CurvePoint>,
{
    let peak = curve
        .into_iter()
        .map(|p| p.borrow().y.abs())
        .fold(0.0, f64::max);
    let peak = if peak > 0.0 { peak } else { SILENT_PEAK };
    peak.max(Y_RANGE_FLOOR) * Y_RANGE_PAD
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

impl AxisTick {
    /// Tick labeled as a multiple of π with one decimal, e.g. `1.5π`.
    pub fn pi_multiple(value: f64) -> Self {
        AxisTick {
            value,
            label: format!("{:.1}{PI_SYMBOL}", value / PI),
        }
    }
}

/// Ticks at `domain.min + k · step` up to and including `domain.max`
/// (within half a step), at most `MAX_TICKS` of them. A non-positive step
/// yields no ticks.
pub fn x_ticks(domain: SampleDomain, step: f64) -> Vec<AxisTick> {
    if step <= 0.0 || !step.is_finite() {
        return Vec::new();
    }
    let stop = domain.max + step / 2.0;
    let count = ((stop - domain.min) / step).ceil().clamp(0.0, MAX_TICKS as f64) as usize;
    (0..count)
        .map(|i| AxisTick::pi_multiple(domain.min + i as f64 * step))
        .collect()
}

/// Caption drawn in the corner of the main plot.
pub fn superposition_title(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Superposition of {count} wave{plural}")
}

//! Per-wave and summed curves.

use serde::{Deserialize, Serialize};

use crate::wave::{Wave, WaveParams};

use super::domain::{GridIter, SampleDomain};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

impl CurvePoint {
    pub const fn new(x: f64, y: f64) -> Self {
        CurvePoint { x, y }
    }
}

/// Curve of a single wave. Clone to sample it again from the start.
#[derive(Debug, Clone)]
pub struct WaveSamples {
    grid: GridIter,
    params: WaveParams,
}

impl Iterator for WaveSamples {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<CurvePoint> {
        let x = self.grid.next()?;
        Some(CurvePoint::new(x, self.params.eval(x)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.grid.size_hint()
    }
}

impl ExactSizeIterator for WaveSamples {}

/// Curve of the pointwise sum of a wave list, in list order.
#[derive(Debug, Clone)]
pub struct SumSamples<'a> {
    grid: GridIter,
    waves: &'a [Wave],
}

impl Iterator for SumSamples<'_> {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<CurvePoint> {
        let x = self.grid.next()?;
        let y = self.waves.iter().fold(0.0, |acc, w| acc + w.eval(x));
        Some(CurvePoint::new(x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.grid.size_hint()
    }
}

impl ExactSizeIterator for SumSamples<'_> {}

/// Sample `wave` at `n` evenly spaced points of `domain`, endpoints included.
pub fn sample_wave(wave: &Wave, domain: SampleDomain, n: usize) -> WaveSamples {
    WaveSamples {
        grid: domain.grid(n),
        params: wave.params,
    }
}

/// Sample the superposition of `waves` on the same grid as [`sample_wave`].
/// An empty list gives a flat zero curve.
pub fn sample_sum(waves: &[Wave], domain: SampleDomain, n: usize) -> SumSamples<'_> {
    SumSamples {
        grid: domain.grid(n),
        waves,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn wave(id: u32, a: f64, f: f64, p: f64) -> Wave {
        Wave::new(id, "#fff", WaveParams::new(a, f, p))
    }

    #[test]
    fn single_wave_values() {
        let w = wave(1, 2.0, 0.5, PI / 3.0);
        let curve: Vec<CurvePoint> = sample_wave(&w, SampleDomain::STANDARD, 50).collect();
        assert_eq!(curve.len(), 50);
        for p in &curve {
            assert_abs_diff_eq!(p.y, 2.0 * (0.5 * p.x + PI / 3.0).sin(), epsilon = 1e-12);
        }
    }

    #[test]
    fn sum_equals_sum_of_parts() {
        let waves = vec![
            wave(1, 1.0, 1.0, 0.0),
            wave(2, 0.4, 3.0, 1.2),
            wave(3, 2.5, 0.1, 6.0),
        ];
        let d = SampleDomain::new(-2.0, 9.0);
        let n = 137;
        let sum: Vec<CurvePoint> = sample_sum(&waves, d, n).collect();
        let parts: Vec<Vec<CurvePoint>> = waves
            .iter()
            .map(|w| sample_wave(w, d, n).collect())
            .collect();

        for (i, p) in sum.iter().enumerate() {
            let expected = parts.iter().fold(0.0, |acc, c| acc + c[i].y);
            assert_eq!(p.y, expected, "index {i}");
            assert_eq!(p.x, parts[0][i].x);
        }
    }

    #[test]
    fn empty_sum_is_flat() {
        let curve: Vec<CurvePoint> = sample_sum(&[], SampleDomain::STANDARD, 300).collect();
        assert_eq!(curve.len(), 300);
        assert!(curve.iter().all(|p| p.y == 0.0));
    }

    #[test]
    fn default_wave_vanishes_at_multiples_of_pi() {
        let waves = vec![wave(1, 1.0, 1.0, 0.0)];
        let curve: Vec<CurvePoint> = sample_sum(&waves, SampleDomain::STANDARD, 5).collect();
        for (i, p) in curve.iter().enumerate() {
            assert_abs_diff_eq!(p.x, i as f64 * PI, epsilon = 1e-12);
            assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn curves_are_restartable() {
        let w = wave(1, 1.0, 2.0, 0.0);
        let samples = sample_wave(&w, SampleDomain::STANDARD, 20);
        assert_eq!(samples.len(), 20);
        let a: Vec<CurvePoint> = samples.clone().collect();
        let b: Vec<CurvePoint> = samples.collect();
        assert_eq!(a, b);
    }
}

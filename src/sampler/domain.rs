//! Sample domain and the evenly spaced x grid laid over it.

use std::f64::consts::PI;
use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

/// Points in the superposition plot.
pub const MAIN_POINTS: usize = 300;
/// Points in a wave card preview.
pub const PREVIEW_POINTS: usize = 200;

/// The closed x interval curves are evaluated over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleDomain {
    pub min: f64,
    pub max: f64,
}

impl SampleDomain {
    /// [0, 4π]: two full periods of the fundamental.
    pub const STANDARD: SampleDomain = SampleDomain {
        min: 0.0,
        max: 4.0 * PI,
    };

    pub const fn new(min: f64, max: f64) -> Self {
        SampleDomain { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// `n` evenly spaced x values covering both endpoints.
    pub fn grid(&self, n: usize) -> GridIter {
        GridIter {
            domain: *self,
            count: n,
            front: 0,
            back: n,
        }
    }
}

impl Default for SampleDomain {
    fn default() -> Self {
        SampleDomain::STANDARD
    }
}

/// Iterator over the x grid of a domain: `n` points, `n - 1` equal
/// intervals. The last point is exactly `domain.max`; a single point sits at
/// `domain.min`.
#[derive(Debug, Clone)]
pub struct GridIter {
    domain: SampleDomain,
    count: usize,
    front: usize,
    back: usize,
}

impl GridIter {
    fn x_at(&self, i: usize) -> f64 {
        if self.count < 2 {
            return self.domain.min;
        }
        if i == self.count - 1 {
            return self.domain.max;
        }
        let t = i as f64 / (self.count - 1) as f64;
        self.domain.min + t * self.domain.span()
    }
}

impl Iterator for GridIter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        let x = self.x_at(self.front);
        self.front += 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for GridIter {
    fn next_back(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.x_at(self.back))
    }
}

impl ExactSizeIterator for GridIter {}
impl FusedIterator for GridIter {}

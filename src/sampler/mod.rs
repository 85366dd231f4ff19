//! Sampler: evaluates waves over a fixed x domain and derives the axis
//! scaling the plots need.
//!
//! Everything here is a pure function of its inputs. Curves are lazy
//! iterators that can be cloned to restart; collect them when a `Vec` is
//! needed.

pub mod curve;
pub mod domain;
pub mod layout;
pub mod scale;

pub use curve::{sample_sum, sample_wave, CurvePoint, SumSamples, WaveSamples};
pub use domain::{GridIter, SampleDomain, MAIN_POINTS, PREVIEW_POINTS};
pub use layout::{LinearScale, PlotDimensions, PlotFrame, PreviewFrame};
pub use scale::{compute_y_range, superposition_title, x_ticks, AxisTick};

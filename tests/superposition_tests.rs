use std::f64::consts::{PI, TAU};

use approx::{assert_abs_diff_eq, assert_relative_eq};
use wavesum_core::sampler::{PlotDimensions, PlotFrame, MAIN_POINTS};
use wavesum_core::{
    compute_y_range, sample_sum, sample_wave, CurvePoint, PresetKind, SampleDomain,
    VisualizerConfig, WaveModel, WaveParams, WaveProperty,
};

#[test]
fn default_wave_sums_to_zero_at_multiples_of_pi() {
    let mut model = WaveModel::new();
    model.add_wave(None);

    let curve: Vec<CurvePoint> = sample_sum(model.waves(), SampleDomain::STANDARD, 5).collect();
    let xs: Vec<f64> = curve.iter().map(|p| p.x).collect();
    assert_eq!(xs[0], 0.0);
    assert_eq!(xs[4], 4.0 * PI);
    for p in &curve {
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn square_preset_approaches_square_wave() {
    let mut model = WaveModel::new();
    model.load_preset(PresetKind::Square.waves());
    assert_eq!(model.len(), 4);

    let curve: Vec<CurvePoint> = sample_sum(model.waves(), SampleDomain::STANDARD, 401).collect();
    // Partial Fourier sum of a square wave with height π/4 ≈ 0.785.
    let mid = curve[50];
    assert_abs_diff_eq!(mid.x, PI / 2.0, epsilon = 1e-12);
    let expected = 1.0 - 1.0 / 3.0 + 1.0 / 5.0 - 1.0 / 7.0;
    assert_abs_diff_eq!(mid.y, expected, epsilon = 1e-12);
    assert_abs_diff_eq!(curve[150].y, -expected, epsilon = 1e-12);

    // Gibbs overshoot stays below the axis floor.
    assert_relative_eq!(compute_y_range(&curve), 2.2);
}

#[test]
fn triangle_preset_edits_flow_into_samples() {
    let mut model = WaveModel::new();
    model.load_preset(PresetKind::Triangle.waves());
    let ids: Vec<u32> = model.waves().iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    model.set_property(1, WaveProperty::Amplitude, 4.5);
    model.set_property(2, WaveProperty::Phase, TAU + 0.0005);
    assert_eq!(model.wave(2).unwrap().params.phase, TAU);

    let d = SampleDomain::STANDARD;
    let sum: Vec<CurvePoint> = sample_sum(model.waves(), d, MAIN_POINTS).collect();
    let first: Vec<CurvePoint> = sample_wave(&model.waves()[0], d, MAIN_POINTS).collect();
    assert_eq!(sum.len(), MAIN_POINTS);
    assert_eq!(first.len(), MAIN_POINTS);

    let peak = first.iter().map(|p| p.y.abs()).fold(0.0, f64::max);
    assert!(peak > 4.49 && peak <= 4.5, "peak {peak}");

    let h = compute_y_range(&sum);
    assert!(h > 4.5 && h < 6.0, "half range {h}");
}

#[test]
fn removing_everything_restarts_numbering() {
    let mut model = WaveModel::new();
    let a = model.add_wave(Some(WaveParams::new(0.5, 2.0, 0.0)));
    let b = model.add_wave(None);
    model.remove_wave(a);
    assert_eq!(model.add_wave(None), 3);
    model.remove_wave(b);
    model.remove_wave(3);
    assert!(model.is_empty());

    let curve: Vec<CurvePoint> = sample_sum(model.waves(), SampleDomain::STANDARD, 10).collect();
    assert!(curve.iter().all(|p| p.y == 0.0));
    assert_eq!(model.add_wave(None), 1);
}

#[test]
fn plot_frame_from_config_json() {
    let json = r#"{ "mainPoints": 64, "margin": { "top": 10, "bottom": 10 } }"#;
    let config = VisualizerConfig::from_json(json).unwrap();
    let mut model = WaveModel::with_palette(config.palette.clone());
    model.load_preset(PresetKind::Sawtooth.waves());

    let dims = PlotDimensions::measure(500.0, 220.0, 0.0, 0.0, &config.margin);
    let frame = PlotFrame::build(model.waves(), &config, dims);
    assert_eq!(frame.path.len(), 64);
    assert_eq!(frame.dimensions.inner_width, 500.0);
    assert_eq!(frame.dimensions.inner_height, 200.0);
    assert_eq!(frame.title, "Superposition of 4 waves");
    assert!(frame.path.iter().all(|p| (0.0..=200.0).contains(&p.y)));
}

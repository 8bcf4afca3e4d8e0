// Host-side tests for the loudness reduction.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod loudness {
    include!("../src/core/loudness.rs");
}

use loudness::*;

const WINDOW: usize = 1024;

#[test]
fn silence_yields_exactly_zero() {
    let window = vec![128u8; WINDOW];
    assert_eq!(estimate(&window), 0.0);
}

#[test]
fn output_is_clamped_for_extreme_windows() {
    let all_min = vec![0u8; WINDOW];
    let all_max = vec![255u8; WINDOW];
    for window in [&all_min, &all_max] {
        let v = estimate(window);
        assert!((0.0..=1.0).contains(&v), "out of range: {v}");
    }
    // Full-scale windows saturate the clamp ceiling.
    assert_eq!(estimate(&all_min), 1.0);
    assert_eq!(estimate(&all_max), 1.0);
}

#[test]
fn full_scale_square_wave_hits_ceiling() {
    let window: Vec<u8> = (0..WINDOW)
        .map(|i| if i % 2 == 0 { 0 } else { 255 })
        .collect();
    assert_eq!(estimate(&window), 1.0);
}

#[test]
fn estimate_is_deterministic() {
    let window: Vec<u8> = (0..WINDOW).map(|i| (i % 256) as u8).collect();
    let first = estimate(&window);
    for _ in 0..10 {
        assert_eq!(estimate(&window), first);
    }
}

#[test]
fn quiet_signal_scales_with_gain() {
    // 4 counts above midpoint: (4/128) * gain, well below the clamp.
    let window = vec![132u8; WINDOW];
    let expected = (4.0 / 128.0) * LOUDNESS_GAIN;
    let v = estimate(&window);
    assert!((v - expected).abs() < 1e-6, "got {v}, expected {expected}");
}

#[test]
fn louder_windows_never_estimate_lower() {
    // Monotonic in amplitude below the clamp.
    let mut prev = 0.0f32;
    for amp in 0u8..16 {
        let window = vec![128 + amp; WINDOW];
        let v = estimate(&window);
        assert!(v >= prev, "not monotonic at amplitude {amp}");
        prev = v;
    }
}

#[test]
fn empty_window_is_silent() {
    assert_eq!(estimate(&[]), 0.0);
}

// Host-side tests for the viewport fit transform.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod layout {
    include!("../src/core/layout.rs");
}

use layout::*;

#[test]
fn wide_viewport_fits_by_height() {
    // Height is the binding dimension: min(1000/400, 500/800) * 0.9.
    let t = fit_transform(1000.0, 500.0, 400.0, 800.0, 0.9);
    assert!((t.scale - 0.5625).abs() < 1e-6);
    assert!((t.position.x - 500.0).abs() < 1e-6);
    assert!((t.position.y - 250.0).abs() < 1e-6);
}

#[test]
fn tall_viewport_fits_by_width() {
    let t = fit_transform(400.0, 2000.0, 800.0, 400.0, 1.0);
    assert!((t.scale - 0.5).abs() < 1e-6);
}

#[test]
fn unit_padding_is_exact_fit() {
    let t = fit_transform(800.0, 400.0, 800.0, 400.0, 1.0);
    assert!((t.scale - 1.0).abs() < 1e-6);
}

#[test]
fn zero_viewport_yields_zero_scale() {
    let t = fit_transform(0.0, 0.0, 400.0, 800.0, 0.9);
    assert_eq!(t.scale, 0.0);
    assert_eq!(t.position, glam::Vec2::ZERO);
}

#[test]
fn recompute_is_idempotent() {
    let a = fit_transform(1280.0, 720.0, 300.0, 600.0, FIT_PADDING);
    let b = fit_transform(1280.0, 720.0, 300.0, 600.0, FIT_PADDING);
    assert_eq!(a, b);
}

#[test]
fn position_is_viewport_center_regardless_of_base() {
    for (bw, bh) in [(100.0, 100.0), (640.0, 480.0), (1.0, 2000.0)] {
        let t = fit_transform(900.0, 600.0, bw, bh, FIT_PADDING);
        assert!((t.position.x - 450.0).abs() < 1e-6);
        assert!((t.position.y - 300.0).abs() < 1e-6);
    }
}

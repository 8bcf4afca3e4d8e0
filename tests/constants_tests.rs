// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod loudness {
    include!("../src/core/loudness.rs");
}
mod layout {
    include!("../src/core/layout.rs");
}

use constants::*;
use layout::FIT_PADDING;
use loudness::{LOUDNESS_GAIN, SAMPLE_MIDPOINT};

#[test]
#[allow(clippy::assertions_on_constants)]
fn analysis_window_is_a_valid_fft_size() {
    assert!(ANALYSIS_WINDOW.is_power_of_two());
    // WebAudio AnalyserNode accepts fftSize in [32, 32768].
    assert!(ANALYSIS_WINDOW >= 32 && ANALYSIS_WINDOW <= 32768);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_are_within_reasonable_bounds() {
    assert!(LOUDNESS_GAIN > 0.0);
    assert!(SAMPLE_MIDPOINT == 128.0);
    assert!(FIT_PADDING > 0.0 && FIT_PADDING <= 1.0);
    assert!(VOICE_VOLUME >= 0.0 && VOICE_VOLUME <= 1.0);
}

#[test]
fn names_are_non_empty() {
    assert!(!MOUTH_PARAM_ID.is_empty());
    assert!(!HIT_AREA_BODY.is_empty());
    assert!(!TAP_BODY_MOTION.is_empty());
}

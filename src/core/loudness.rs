// Perceptual loudness reduction over a byte time-domain window.
// Pure and host-testable; no web types here.

/// Idle level of an AnalyserNode byte sample (unsigned 8-bit midpoint).
pub const SAMPLE_MIDPOINT: f32 = 128.0;

/// Empirical gain so typical speech RMS lands near full mouth aperture.
/// Tuned by ear, not derived; adjust together with the analysis window size.
pub const LOUDNESS_GAIN: f32 = 8.0;

/// Reduce one analysis window to a normalized mouth-aperture value in [0, 1].
///
/// Each byte is mapped from [0, 255] to [-1, 1] around the midpoint, then
/// the root-mean-square of the window is scaled by [`LOUDNESS_GAIN`] and
/// clamped. A silent window (all bytes at the midpoint) yields exactly 0.
pub fn estimate(window: &[u8]) -> f32 {
    if window.is_empty() {
        return 0.0;
    }
    let mut sum_sq = 0.0f32;
    for &b in window {
        let v = (b as f32 - SAMPLE_MIDPOINT) / SAMPLE_MIDPOINT;
        sum_sq += v * v;
    }
    let rms = (sum_sq / window.len() as f32).sqrt();
    (rms * LOUDNESS_GAIN).clamp(0.0, 1.0)
}

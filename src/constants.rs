/// Lip-sync and layout tuning constants.
///
/// These constants express intended behavior (analysis window size, gain
/// calibration, fit padding) and keep magic numbers out of the code.
// Time-domain analysis window; must be a power of two (AnalyserNode fftSize).
pub const ANALYSIS_WINDOW: usize = 1024;
const _: () = assert!(ANALYSIS_WINDOW.is_power_of_two());

// Model parameter id driven by the loudness estimate.
pub const MOUTH_PARAM_ID: &str = "MouthOpenY";

// Playback volume applied at the shared tap gain.
pub const VOICE_VOLUME: f32 = 1.0;

// Hit-test region and the one-shot motion it triggers.
pub const HIT_AREA_BODY: &str = "body";
pub const TAP_BODY_MOTION: &str = "tap_body";

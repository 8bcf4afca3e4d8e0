// Viewport-responsive fit of a fixed-size visual object.
// Pure and host-testable; no web types here.

use glam::Vec2;

/// Fraction of the viewport left as breathing room around the model.
pub const FIT_PADDING: f32 = 0.9;

/// Scale and center position derived from the current viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTransform {
    pub scale: f32,
    pub position: Vec2,
}

/// Fit an object of `base_w` x `base_h` into a `viewport_w` x `viewport_h`
/// viewport, centered, preserving aspect ratio, shrunk by `padding`.
///
/// Total over all non-negative inputs: a degenerate zero-size viewport
/// yields scale 0, which renders nothing but is not an error.
pub fn fit_transform(
    viewport_w: f32,
    viewport_h: f32,
    base_w: f32,
    base_h: f32,
    padding: f32,
) -> ViewportTransform {
    let scale = (viewport_w / base_w).min(viewport_h / base_h) * padding;
    ViewportTransform {
        scale,
        position: Vec2::new(viewport_w / 2.0, viewport_h / 2.0),
    }
}

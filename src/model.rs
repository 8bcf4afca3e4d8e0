use crate::core::ViewportTransform;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Opaque handle to the host page's avatar renderer.
    ///
    /// The page adapts its model object (e.g. a pixi-live2d display model)
    /// to this surface; we never reach into renderer internals.
    #[derive(Debug, Clone)]
    pub type AvatarModel;

    /// Write a named animation parameter; used for `MouthOpenY` in [0, 1].
    #[wasm_bindgen(method, js_name = setParameter)]
    pub fn set_parameter(this: &AvatarModel, id: &str, value: f64);

    /// Unscaled model width, captured once at startup as the fit base.
    #[wasm_bindgen(method, getter)]
    pub fn width(this: &AvatarModel) -> f64;

    /// Unscaled model height, captured once at startup as the fit base.
    #[wasm_bindgen(method, getter)]
    pub fn height(this: &AvatarModel) -> f64;

    #[wasm_bindgen(method, js_name = setScale)]
    pub fn set_scale(this: &AvatarModel, scale: f64);

    #[wasm_bindgen(method, js_name = setPosition)]
    pub fn set_position(this: &AvatarModel, x: f64, y: f64);

    /// Trigger a named one-shot motion (hit-test reaction).
    #[wasm_bindgen(method)]
    pub fn motion(this: &AvatarModel, name: &str);

    /// Subscribe to a model event; used for `"hit"` notifications carrying
    /// an array of hit-area names.
    #[wasm_bindgen(method)]
    pub fn on(this: &AvatarModel, event: &str, callback: &js_sys::Function);
}

#[inline]
pub fn apply_transform(model: &AvatarModel, t: &ViewportTransform) {
    model.set_scale(t.scale as f64);
    model.set_position(t.position.x as f64, t.position.y as f64);
}

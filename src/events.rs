use crate::constants::{HIT_AREA_BODY, TAP_BODY_MOTION};
use crate::core;
use crate::dom;
use crate::model::{self, AvatarModel};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Resume the audio context on the first user gesture, then disengage.
/// Autoplay policy keeps a fresh context suspended until a gesture arrives;
/// both pointer and keyboard count.
pub fn wire_gesture_unlock(audio_ctx: &web::AudioContext) {
    if let Some(window) = web::window() {
        for event in ["pointerdown", "keydown"] {
            let ctx = audio_ctx.clone();
            dom::add_once_listener(&window, event, move || {
                _ = ctx.resume();
            });
        }
    }
}

/// Fit the model to the viewport now and again on every window resize.
/// Base dimensions are fixed at wiring time; the fit itself is a pure
/// recompute from the current viewport.
pub fn wire_viewport_fit(model: &AvatarModel, base_w: f32, base_h: f32) {
    apply_fit(model, base_w, base_h);
    let model_resize = model.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        apply_fit(&model_resize, base_w, base_h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn apply_fit(model: &AvatarModel, base_w: f32, base_h: f32) {
    if let Some(window) = web::window() {
        let (vw, vh) = dom::viewport_size(&window);
        let t = core::fit_transform(vw, vh, base_w, base_h, core::FIT_PADDING);
        model::apply_transform(model, &t);
    }
}

/// Trigger the one-shot body motion when the model reports a hit whose
/// area list contains the body region. Orthogonal to the audio pipeline.
pub fn wire_hit_motion(model: &AvatarModel) {
    let target = model.clone();
    let hit_closure = Closure::wrap(Box::new(move |areas: js_sys::Array| {
        if areas.includes(&wasm_bindgen::JsValue::from_str(HIT_AREA_BODY), 0) {
            target.motion(TAP_BODY_MOTION);
        }
    }) as Box<dyn FnMut(js_sys::Array)>);
    model.on("hit", hit_closure.as_ref().unchecked_ref());
    hit_closure.forget();
}

#![cfg(target_arch = "wasm32")]
use crate::model::AvatarModel;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod model;
mod playback;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lipsync-web starting");
    Ok(())
}

/// Audio-driven lip-sync for one avatar model.
///
/// Construction builds the long-lived audio graph (tap gain + analyser),
/// wires the autoplay unlock, viewport fit and hit-test handlers, and starts
/// the per-frame driver. `playVoice` is the single playback operation; at
/// most one voice session is active at any time.
#[wasm_bindgen]
pub struct LipSync {
    playback: Rc<playback::Playback>,
}

#[wasm_bindgen]
impl LipSync {
    #[wasm_bindgen(constructor)]
    pub fn new(model: AvatarModel) -> Result<LipSync, JsValue> {
        let graph = audio::build_voice_graph().map_err(|e| JsValue::from_str(&e.to_string()))?;
        events::wire_gesture_unlock(&graph.ctx);

        // Base dimensions are the unscaled model size at startup.
        let base_w = model.width() as f32;
        let base_h = model.height() as f32;
        events::wire_viewport_fit(&model, base_w, base_h);
        events::wire_hit_motion(&model);

        let playback = Rc::new(playback::Playback::new(graph, model.clone()));

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            enabled: playback.enabled_flag(),
            analyser: playback.analyser(),
            window: playback.sample_window(),
            model,
        }));
        frame::start_loop(frame_ctx);

        log::info!(
            "lip-sync wired (window={} samples, base={}x{})",
            constants::ANALYSIS_WINDOW,
            base_w,
            base_h
        );
        Ok(LipSync { playback })
    }

    /// Fetch, decode and play `url`, replacing any active voice session.
    /// Resolves `true` once the new session is installed; rejects with the
    /// fetch/decode error otherwise. The frame loop is unaffected either way.
    #[wasm_bindgen(js_name = playVoice)]
    pub fn play_voice(&self, url: String) -> js_sys::Promise {
        let playback = self.playback.clone();
        future_to_promise(async move {
            if url.is_empty() {
                log::warn!("playVoice: url is required");
                return Ok(JsValue::FALSE);
            }
            match playback.play(&url).await {
                Ok(()) => Ok(JsValue::TRUE),
                Err(e) => {
                    log::error!("playVoice: {}", e);
                    Err(JsValue::from_str(&e.to_string()))
                }
            }
        })
    }

    /// Stop the active session, if any, without starting a new one.
    /// Safe to call repeatedly, including after natural completion.
    pub fn stop(&self) {
        self.playback.stop_current();
    }
}

use crate::constants::MOUTH_PARAM_ID;
use crate::core;
use crate::model::AvatarModel;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame lip-sync driver, pulled by requestAnimationFrame.
///
/// While the enabled flag is clear the tick does nothing and the mouth
/// parameter is left untouched; while set, each tick snapshots the analyser's
/// time-domain window into the reused buffer, reduces it to a loudness value
/// and writes it to the model. One write per frame, no per-tick allocation.
pub struct FrameContext {
    pub enabled: Rc<Cell<bool>>,
    pub analyser: Option<web::AnalyserNode>,
    pub window: Rc<RefCell<Vec<u8>>>,
    pub model: AvatarModel,
}

impl FrameContext {
    pub fn frame(&mut self) {
        if !self.enabled.get() {
            return;
        }
        let Some(analyser) = &self.analyser else {
            return;
        };
        let value = {
            let mut win = self.window.borrow_mut();
            analyser.get_byte_time_domain_data(win.as_mut_slice());
            core::estimate(&win)
        };
        self.model.set_parameter(MOUTH_PARAM_ID, value as f64);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

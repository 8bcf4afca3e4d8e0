use crate::audio::{self, AudioError, VoiceGraph};
use crate::constants::MOUTH_PARAM_ID;
use crate::model::AvatarModel;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One in-flight playback: the live source node plus its completion closure.
/// The closure must outlive the node's ability to fire `ended`, so it is
/// stored alongside the node and dropped with it.
struct Session {
    source: web::AudioBufferSourceNode,
    _onended: Closure<dyn FnMut()>,
}

/// Exclusive owner of the single playback slot and the lip-sync enabled flag.
///
/// At most one session exists at any time; the flag is set iff a session is
/// installed and has not completed. The flag is always cleared before a new
/// session starts, so a frame observes either the old session in full or the
/// new one, never a mix.
pub struct Playback {
    graph: VoiceGraph,
    model: AvatarModel,
    enabled: Rc<Cell<bool>>,
    session: Rc<RefCell<Option<Session>>>,
}

impl Playback {
    pub fn new(graph: VoiceGraph, model: AvatarModel) -> Self {
        Self {
            graph,
            model,
            enabled: Rc::new(Cell::new(false)),
            session: Rc::new(RefCell::new(None)),
        }
    }

    pub fn enabled_flag(&self) -> Rc<Cell<bool>> {
        self.enabled.clone()
    }

    pub fn analyser(&self) -> Option<web::AnalyserNode> {
        self.graph.analyser.clone()
    }

    pub fn sample_window(&self) -> Rc<RefCell<Vec<u8>>> {
        self.graph.window.clone()
    }

    /// Stop and disconnect the current session, if any. Clearing `onended`
    /// first discards the pending completion notification, so replacement
    /// never races the old session's completion handler. Stopping a source
    /// that already finished naturally throws; the result is ignored.
    pub fn stop_current(&self) {
        self.enabled.set(false);
        if let Some(sess) = self.session.borrow_mut().take() {
            sess.source.set_onended(None);
            _ = sess.source.stop();
            _ = sess.source.disconnect();
        }
    }

    /// Replace whatever is playing with `url`: tear down, fetch + decode,
    /// install, start. On fetch/decode failure the prior session stays torn
    /// down and the slot stays empty.
    pub async fn play(&self, url: &str) -> Result<(), AudioError> {
        self.stop_current();

        let buffer = audio::fetch_audio_buffer(&self.graph.ctx, url).await?;

        // An overlapping play() may have installed a session while this
        // decode was pending; teardown is scoped to installation, not to
        // call entry, so run it again.
        self.stop_current();

        let source = web::AudioBufferSourceNode::new(&self.graph.ctx)
            .map_err(|e| AudioError::Graph(format!("{:?}", e)))?;
        source.set_buffer(Some(&buffer));
        source
            .connect_with_audio_node(&self.graph.tap)
            .map_err(|e| AudioError::Graph(format!("{:?}", e)))?;

        let onended = {
            let enabled = self.enabled.clone();
            let slot = self.session.clone();
            let model = self.model.clone();
            Closure::wrap(Box::new(move || {
                enabled.set(false);
                slot.borrow_mut().take();
                model.set_parameter(MOUTH_PARAM_ID, 0.0);
                log::info!("voice playback completed");
            }) as Box<dyn FnMut()>)
        };
        source.set_onended(Some(onended.as_ref().unchecked_ref()));

        source
            .start()
            .map_err(|e| AudioError::Graph(format!("{:?}", e)))?;
        *self.session.borrow_mut() = Some(Session {
            source,
            _onended: onended,
        });
        self.enabled.set(true);
        Ok(())
    }
}

use crate::constants::{ANALYSIS_WINDOW, VOICE_VOLUME};
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Failures on the fetch-decode path of a `play` call. Neither variant is
/// retried; both leave the playback slot empty.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio fetch failed: {0}")]
    Fetch(String),
    #[error("audio decode failed: {0}")]
    Decode(String),
    #[error("audio graph error: {0}")]
    Graph(String),
}

fn fetch_err(e: impl std::fmt::Debug) -> AudioError {
    AudioError::Fetch(format!("{:?}", e))
}

fn decode_err(e: impl std::fmt::Debug) -> AudioError {
    AudioError::Decode(format!("{:?}", e))
}

/// Long-lived tail of the signal graph. Sessions connect into `tap` serially;
/// `tap` feeds both the analyser and the context destination, so the analyser
/// observes exactly what is audible.
pub struct VoiceGraph {
    pub ctx: web::AudioContext,
    pub tap: web::GainNode,
    pub analyser: Option<web::AnalyserNode>,
    pub window: Rc<RefCell<Vec<u8>>>,
}

pub fn build_voice_graph() -> anyhow::Result<VoiceGraph> {
    let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let tap = web::GainNode::new(&ctx).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    tap.gain().set_value(VOICE_VOLUME);
    let (analyser, window) = create_analyser(&ctx);
    if let Some(a) = &analyser {
        _ = tap.connect_with_audio_node(a);
    }
    tap.connect_with_audio_node(&ctx.destination())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(VoiceGraph {
        ctx,
        tap,
        analyser,
        window,
    })
}

// Create analyser and an appropriately sized time-domain window
pub fn create_analyser(
    audio_ctx: &web::AudioContext,
) -> (Option<web::AnalyserNode>, Rc<RefCell<Vec<u8>>>) {
    let analyser: Option<web::AnalyserNode> = web::AnalyserNode::new(audio_ctx).ok();
    if let Some(a) = &analyser {
        a.set_fft_size(ANALYSIS_WINDOW as u32);
    }
    let buf: Rc<RefCell<Vec<u8>>> = Rc::new(RefCell::new(Vec::new()));
    if let Some(a) = &analyser {
        buf.borrow_mut().resize(a.fft_size() as usize, 0);
    }
    (analyser, buf)
}

/// Fetch `url` and decode the bytes into a playable buffer. One attempt,
/// no retry; the caller owns retry policy.
pub async fn fetch_audio_buffer(
    ctx: &web::AudioContext,
    url: &str,
) -> Result<web::AudioBuffer, AudioError> {
    let window = web::window().ok_or_else(|| AudioError::Fetch("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(fetch_err)?;
    let resp: web::Response = resp_value.dyn_into().map_err(fetch_err)?;
    if !resp.ok() {
        return Err(AudioError::Fetch(format!("http status {}", resp.status())));
    }
    let bytes_value = JsFuture::from(resp.array_buffer().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?;
    let bytes: js_sys::ArrayBuffer = bytes_value.dyn_into().map_err(fetch_err)?;

    let decoded = JsFuture::from(ctx.decode_audio_data(&bytes).map_err(decode_err)?)
        .await
        .map_err(decode_err)?;
    decoded
        .dyn_into::<web::AudioBuffer>()
        .map_err(decode_err)
}

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::core::audio::{PlaybackError, PlaybackResource, PlaybackSession};

/// Web Audio playback resource: the shared `AudioContext` plus the decoded
/// ambient track. The buffer slot starts empty and is filled by the async
/// loader; until then session creation reports `ResourceUnavailable` and the
/// experience stays visual-only.
pub struct WebAudioResource {
    ctx: web::AudioContext,
    buffer: Rc<RefCell<Option<web::AudioBuffer>>>,
}

impl WebAudioResource {
    pub fn new(ctx: web::AudioContext) -> Self {
        Self {
            ctx,
            buffer: Rc::new(RefCell::new(None)),
        }
    }

    /// Slot the async track loader writes into once decoding finishes.
    pub fn buffer_slot(&self) -> Rc<RefCell<Option<web::AudioBuffer>>> {
        self.buffer.clone()
    }
}

/// One buffer-source playback routed through its own gain node.
pub struct WebAudioSession {
    source: web::AudioBufferSourceNode,
    gain: web::GainNode,
}

impl PlaybackSession for WebAudioSession {
    fn set_gain(&self, value: f32, at_sec: f64) {
        _ = self.gain.gain().set_value_at_time(value, at_sec);
    }

    fn ramp_gain(&self, value: f32, to_sec: f64) {
        _ = self.gain.gain().linear_ramp_to_value_at_time(value, to_sec);
    }

    fn start(&self, looped: bool) {
        self.source.set_loop(looped);
        _ = self.source.start();
    }

    fn stop(&self) {
        _ = self.source.stop();
    }
}

impl PlaybackResource for WebAudioResource {
    type Session = WebAudioSession;

    fn create_session(&mut self) -> Result<WebAudioSession, PlaybackError> {
        let buffer_ref = self.buffer.borrow();
        let buffer = buffer_ref
            .as_ref()
            .ok_or(PlaybackError::ResourceUnavailable)?;
        let source = web::AudioBufferSourceNode::new(&self.ctx).map_err(|e| {
            log::error!("[audio] AudioBufferSourceNode error: {:?}", e);
            PlaybackError::ResourceUnavailable
        })?;
        source.set_buffer(Some(buffer));
        let gain = web::GainNode::new(&self.ctx).map_err(|e| {
            log::error!("[audio] GainNode error: {:?}", e);
            PlaybackError::ResourceUnavailable
        })?;
        _ = source.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&self.ctx.destination());
        Ok(WebAudioSession { source, gain })
    }
}

/// Fetch and decode the ambient track.
pub async fn load_ambient_track(
    ctx: &web::AudioContext,
    url: &str,
) -> anyhow::Result<web::AudioBuffer> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch error: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let array_buffer: js_sys::ArrayBuffer = JsFuture::from(
        response
            .array_buffer()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("read error: {:?}", e))?
    .dyn_into()
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let decoded = JsFuture::from(
        ctx.decode_audio_data(&array_buffer)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("decode error: {:?}", e))?;
    decoded
        .dyn_into::<web::AudioBuffer>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

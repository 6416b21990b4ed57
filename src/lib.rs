#![cfg(target_arch = "wasm32")]
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::core::sim::Simulation;
use crate::core::world::{CameraPose, DirectionInput};

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;

thread_local! {
    static RENDER_CALLBACK: Rc<RefCell<Option<js_sys::Function>>> =
        Rc::new(RefCell::new(None));
}

/// Register the JS renderer's per-frame callback. It receives the packed
/// `Float32Array` snapshot described in `constants`.
#[wasm_bindgen]
pub fn set_render_callback(callback: js_sys::Function) {
    RENDER_CALLBACK.with(|slot| *slot.borrow_mut() = Some(callback));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("stillgrove starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = audio_ctx.resume();
    let resource = audio::WebAudioResource::new(audio_ctx.clone());

    // Decode the ambient track in the background; sessions report unavailable
    // until it lands and the garden stays visual-only.
    {
        let slot = resource.buffer_slot();
        let ctx = audio_ctx.clone();
        spawn_local(async move {
            match audio::load_ambient_track(&ctx, constants::MEDITATION_TRACK_URL).await {
                Ok(buffer) => {
                    *slot.borrow_mut() = Some(buffer);
                    log::info!("[audio] ambient track ready");
                }
                Err(e) => log::warn!("[audio] ambient track unavailable: {e:?}"),
            }
        });
    }

    let mut sim = Simulation::new(resource);
    sim.attach_avatar(Vec2::ZERO);
    sim.attach_camera(CameraPose::rest());

    let input = Rc::new(RefCell::new(DirectionInput::default()));
    events::keyboard::wire_movement_keys(input.clone());
    overlay::set_controls_hint(&document, events::is_touch_device());

    let render_cb = RENDER_CALLBACK.with(|slot| slot.clone());
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim,
        input,
        audio_ctx: audio_ctx.clone(),
        document: document.clone(),
        render_cb,
        last_instant: Instant::now(),
        recovery_visible: false,
        session_visible: false,
    }));

    wire_overlay_actions(&document, &audio_ctx, &frame_ctx);
    frame::start_loop(frame_ctx);
    Ok(())
}

fn wire_overlay_actions(
    document: &web::Document,
    audio_ctx: &web::AudioContext,
    frame_ctx: &Rc<RefCell<frame::FrameContext>>,
) {
    {
        let ctx = frame_ctx.clone();
        dom::add_click_listener(document, constants::RETURN_HOME_ID, move || {
            ctx.borrow_mut().sim.trigger_recovery();
        });
    }
    {
        let ctx = frame_ctx.clone();
        let doc = document.clone();
        let audio = audio_ctx.clone();
        dom::add_click_listener(document, constants::SESSION_START_ID, move || {
            let minutes = dom::select_value(&doc, constants::SESSION_DURATION_ID)
                .and_then(|v| v.parse().ok())
                .unwrap_or(5);
            ctx.borrow_mut().sim.begin_session(minutes, audio.current_time());
        });
    }
    {
        let ctx = frame_ctx.clone();
        let audio = audio_ctx.clone();
        dom::add_click_listener(document, constants::SESSION_STOP_ID, move || {
            ctx.borrow_mut().sim.end_session(audio.current_time());
        });
    }
}

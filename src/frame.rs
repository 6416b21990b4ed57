use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::audio::WebAudioResource;
use crate::constants::{SNAPSHOT_HEADER_FLOATS, SNAPSHOT_SPOT_FLOATS};
use crate::core::sim::{RenderSnapshot, Simulation};
use crate::core::world::DirectionInput;
use crate::overlay;

pub struct FrameContext {
    pub sim: Simulation<WebAudioResource>,
    pub input: Rc<RefCell<DirectionInput>>,
    pub audio_ctx: web::AudioContext,
    pub document: web::Document,
    pub render_cb: Rc<RefCell<Option<js_sys::Function>>>,

    pub last_instant: Instant,
    pub recovery_visible: bool,
    pub session_visible: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let input = *self.input.borrow();
        let audio_now = self.audio_ctx.current_time();
        self.sim.tick(dt, &input, audio_now);

        // Overlay state only touches the DOM on change.
        let recovery = self.sim.recovery_available();
        if recovery != self.recovery_visible {
            self.recovery_visible = recovery;
            overlay::set_visible(&self.document, crate::constants::RETURN_HOME_ID, recovery);
        }
        let session = self.sim.session_running();
        if session != self.session_visible {
            self.session_visible = session;
            overlay::sync_session_buttons(&self.document, session);
        }

        // Hand this tick's snapshot to the external renderer.
        if let Some(cb) = self.render_cb.borrow().as_ref() {
            let packed = pack_snapshot(&self.sim.render_state(), session);
            let array = js_sys::Float32Array::from(packed.as_slice());
            _ = cb.call1(&JsValue::NULL, &array.into());
        }
    }
}

/// Flatten the snapshot into the layout described in `constants`; absent
/// avatar/camera pack as zeros.
fn pack_snapshot(snapshot: &RenderSnapshot, session_running: bool) -> Vec<f32> {
    let mut out =
        Vec::with_capacity(SNAPSHOT_HEADER_FLOATS + snapshot.spots.len() * SNAPSHOT_SPOT_FLOATS);
    let avatar = snapshot.avatar_position.unwrap_or_default();
    out.extend_from_slice(&[avatar.x, avatar.y]);
    match snapshot.camera {
        Some(cam) => out.extend_from_slice(&[
            cam.azimuth,
            cam.polar,
            cam.distance,
            cam.target.x,
            cam.target.y,
            cam.target.z,
        ]),
        None => out.extend_from_slice(&[0.0; 6]),
    }
    out.push(if snapshot.recovery_available { 1.0 } else { 0.0 });
    out.push(if session_running { 1.0 } else { 0.0 });
    for spot in &snapshot.spots {
        out.extend_from_slice(&[
            spot.position.x,
            spot.position.y,
            spot.position.z,
            spot.display_color[0],
            spot.display_color[1],
            spot.display_color[2],
            spot.emissive_intensity,
            if spot.show_beacon_particles { 1.0 } else { 0.0 },
            if spot.show_beam_and_text { 1.0 } else { 0.0 },
        ]);
    }
    out
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

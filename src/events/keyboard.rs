use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::world::DirectionInput;

/// Map a DOM key value onto the directional flag it controls. Returns false
/// for keys we do not own so the page keeps its default behavior.
pub fn apply_key(input: &mut DirectionInput, key: &str, pressed: bool) -> bool {
    match key {
        "w" | "W" | "ArrowUp" => input.forward = pressed,
        "s" | "S" | "ArrowDown" => input.backward = pressed,
        "a" | "A" | "ArrowLeft" => input.left = pressed,
        "d" | "D" | "ArrowRight" => input.right = pressed,
        _ => return false,
    }
    true
}

/// Wire keydown/keyup on the window into the shared input flags read once
/// per simulation tick.
pub fn wire_movement_keys(input: Rc<RefCell<DirectionInput>>) {
    let Some(window) = web::window() else {
        return;
    };
    {
        let input_down = input.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                if apply_key(&mut input_down.borrow_mut(), &ev.key(), true) {
                    ev.prevent_default();
                }
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let input_up = input;
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                if apply_key(&mut input_up.borrow_mut(), &ev.key(), false) {
                    ev.prevent_default();
                }
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

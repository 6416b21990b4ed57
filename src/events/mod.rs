pub mod keyboard;

use wasm_bindgen::JsValue;
use web_sys as web;

/// Touch-capability check; the joystick layer itself lives outside this
/// crate, we only pick the matching overlay copy.
pub fn is_touch_device() -> bool {
    web::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("ontouchstart")).unwrap_or(false))
        .unwrap_or(false)
}

use web_sys as web;

use crate::constants::{CONTROLS_HINT_ID, SESSION_START_ID, SESSION_STOP_ID};

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn set_visible(document: &web::Document, id: &str, visible: bool) {
    if visible {
        show(document, id);
    } else {
        hide(document, id);
    }
}

/// Swap the controls hint for the host's input scheme. Touch hosts get the
/// joystick copy; everyone else gets keyboard and mouse.
pub fn set_controls_hint(document: &web::Document, touch: bool) {
    if let Some(el) = document.get_element_by_id(CONTROLS_HINT_ID) {
        let hint = if touch {
            "<p>Use the joystick to move</p>"
        } else {
            "<p>Move: WASD or Arrow Keys</p><p>Look: Click and Drag</p><p>Zoom: Mouse Wheel</p>"
        };
        el.set_inner_html(hint);
    }
}

/// Show the stop button while a guided session runs, the start button
/// otherwise.
pub fn sync_session_buttons(document: &web::Document, running: bool) {
    set_visible(document, SESSION_START_ID, !running);
    set_visible(document, SESSION_STOP_ID, running);
}

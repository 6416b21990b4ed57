use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn window_document() -> Option<web::Document> {
    web::window()?.document()
}

/// Attach a persistent click handler to an element by id. Missing elements
/// are ignored so a trimmed-down page still boots.
pub fn add_click_listener(document: &web::Document, id: &str, mut handler: impl FnMut() + 'static) {
    if let Some(el) = document.get_element_by_id(id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Read the current value of a `<select>` element by id.
pub fn select_value(document: &web::Document, id: &str) -> Option<String> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlSelectElement>()
        .ok()
        .map(|select| select.value())
}

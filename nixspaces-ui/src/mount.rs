//! Host document lookup and the one-shot mount.

use crate::app::App;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Id of the element the page markup provides for the app.
pub const ROOT_ID: &str = "root";

/// Finds an HTML element by id in the current document.
///
/// No window, no document, no such id, or a non-HTML element all come back
/// as `None`.
pub fn find_mount_point(id: &str) -> Option<HtmlElement> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// Mounts [`App`] into the `root` element if the page has one.
///
/// A missing root is not an error: nothing is rendered and nothing is logged.
pub fn bootstrap() {
    match find_mount_point(ROOT_ID) {
        Some(root) => leptos::mount_to(root, App),
        None => {}
    }
}

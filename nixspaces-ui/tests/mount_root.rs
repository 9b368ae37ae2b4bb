#![cfg(target_arch = "wasm32")]

use nixspaces_ui::{bootstrap, find_mount_point, ROOT_ID, TAGLINE, TITLE};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window()
        .expect("window")
        .document()
        .expect("document")
}

#[wasm_bindgen_test]
fn bootstrap_renders_title_and_tagline_into_root() {
    let document = document();
    let root = document.create_element("div").expect("create root");
    root.set_id(ROOT_ID);
    document
        .body()
        .expect("body")
        .append_child(&root)
        .expect("append root");

    assert!(find_mount_point(ROOT_ID).is_some());

    bootstrap();

    let heading = root
        .query_selector("h1")
        .expect("query h1")
        .expect("heading rendered");
    assert_eq!(heading.text_content().as_deref(), Some(TITLE));

    let tagline = root
        .query_selector("p")
        .expect("query p")
        .expect("paragraph rendered");
    assert_eq!(tagline.text_content().as_deref(), Some(TAGLINE));
}

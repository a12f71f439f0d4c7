//! Shared DOM plumbing: accessors, marker-guarded style injection and
//! selector iteration. Everything returns `Option` and degrades to a no-op
//! when the document is not what we expect.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Appends a `<style id=marker>` block to `<head>` unless an element with
/// that marker id already exists. Returns true when the block was inserted.
pub fn inject_style_once(marker_id: &str, css: &str) -> bool {
    let Some(document) = document() else {
        return false;
    };
    if document.get_element_by_id(marker_id).is_some() {
        return false;
    }
    let Ok(style) = document.create_element("style") else {
        return false;
    };
    style.set_id(marker_id);
    style.set_text_content(Some(css));
    let Some(head) = document.head() else {
        return false;
    };
    head.append_child(&style).is_ok()
}

/// Runs `action` for every element matching `selector`. Zero matches is fine.
pub fn for_each_selected(selector: &str, mut action: impl FnMut(Element)) {
    let Some(document) = document() else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        if let Ok(element) = node.dyn_into::<Element>() {
            action(element);
        }
    }
}

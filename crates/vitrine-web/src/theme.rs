//! Theme application and persistence.
//!
//! The active theme lives in the `data-theme` attribute on `<html>`; the
//! background painter re-reads it every frame, so a toggle shows up on
//! the next paint without any other plumbing.

use vitrine_core::{Theme, THEME_STORAGE_KEY};
use web_sys as web;

use crate::dom;

/// Apply the stored theme (dark by default) and wire the toggle button.
pub fn init(window: &web::Window, document: &web::Document) {
    let stored = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    let theme = Theme::from_attr(stored.as_deref());
    apply(document, theme);
    persist(window, theme);

    dom::add_click_listener(document, "theme-toggle", move || {
        if let Some((window, document)) = dom::window_document() {
            let next = current(&document).toggled();
            apply(&document, next);
            persist(&window, next);
        }
    });
}

/// Theme currently set on the document element.
pub fn current(document: &web::Document) -> Theme {
    let attr = document
        .document_element()
        .and_then(|root| root.get_attribute("data-theme"));
    Theme::from_attr(attr.as_deref())
}

fn apply(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.attr());
    }
    if let Ok(Some(label)) = document.query_selector(".toggle-label") {
        label.set_text_content(Some(theme.label()));
    }
}

fn persist(window: &web::Window, theme: Theme) {
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.attr());
    }
}

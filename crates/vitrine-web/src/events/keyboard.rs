//! Global keydown wiring for the keyboard-sequence easter egg.

use std::cell::RefCell;
use std::rc::Rc;

use vitrine_core::sequence::SequenceDetector;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::overlay;

/// Wire the Konami detector to `#easter-egg`. Both the overlay and its
/// close button must be present, otherwise nothing is armed.
pub fn wire_easter_egg(document: &web::Document) {
    let Some(overlay_el) = document.get_element_by_id("easter-egg") else {
        return;
    };
    if document.get_element_by_id("ee-close").is_none() {
        return;
    }

    let detector = Rc::new(RefCell::new(SequenceDetector::konami()));
    {
        let detector = detector.clone();
        dom::add_listener(document, "keydown", move |ev: web::Event| {
            let ev = ev.unchecked_into::<web::KeyboardEvent>();
            if detector.borrow_mut().push(&ev.key()) {
                log::info!("easter egg unlocked");
                if let Some((_, document)) = dom::window_document() {
                    overlay::show(&document);
                }
            }
        });
    }

    dom::add_click_listener(document, "ee-close", || {
        if let Some((_, document)) = dom::window_document() {
            overlay::hide(&document);
        }
    });

    // Backdrop click closes too, but clicks inside the dialog do not.
    let backdrop = overlay_el.clone();
    dom::add_listener(&overlay_el, "click", move |ev: web::Event| {
        let hit_backdrop = ev
            .target()
            .map(|t| t.loose_eq(backdrop.as_ref()))
            .unwrap_or(false);
        if hit_backdrop {
            if let Some((_, document)) = dom::window_document() {
                overlay::hide(&document);
            }
        }
    });
}

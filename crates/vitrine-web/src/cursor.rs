//! Custom cursor: a dot glued to the pointer (moved by the pointer
//! wiring) and a glow that eases after it on its own frame loop.
//! Hovering an interactive element flips a body class so the CSS can
//! restyle both; the first touch event hides the whole thing.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use vitrine_core::constants::CURSOR_GLOW_LERP;
use vitrine_core::motion;
use web_sys as web;

use crate::dom;
use crate::frame::FrameLoop;
use crate::input::{MouseState, OFFSCREEN};

/// Elements whose hover swaps the cursor into its active look.
const HOVER_TARGETS: &str =
    "a, button, .project-card, .service-card, .skill-category, input, textarea, .gaming-link, .tag";

pub struct CustomCursor {
    frame_loop: FrameLoop,
}

impl CustomCursor {
    /// Attach to `#cursor-glow` and `#cursor-dot`; both must exist.
    pub fn mount(document: &web::Document, mouse: Rc<RefCell<MouseState>>) -> Option<Self> {
        let glow = dom::html_element(document, "cursor-glow")?;
        let dot = dom::html_element(document, "cursor-dot")?;

        let frame_loop = {
            let glow = glow.clone();
            let mut glow_pos = Vec2::new(OFFSCREEN, OFFSCREEN);
            FrameLoop::start(move || {
                let target = mouse.borrow().page;
                glow_pos = motion::follow(glow_pos, target, CURSOR_GLOW_LERP);
                dom::set_px_position(&glow, glow_pos);
            })
        };

        wire_hover_state(document);
        wire_touch_disable(document, glow, dot);

        Some(Self { frame_loop })
    }

    pub fn stop(&self) {
        self.frame_loop.stop();
    }
}

fn wire_hover_state(document: &web::Document) {
    for el in dom::query_all(document, HOVER_TARGETS) {
        dom::add_listener(&el, "mouseenter", |_| set_body_hover(true));
        dom::add_listener(&el, "mouseleave", |_| set_body_hover(false));
    }
}

fn set_body_hover(hovering: bool) {
    if let Some((_, document)) = dom::window_document() {
        if let Some(body) = document.body() {
            let _ = body
                .class_list()
                .toggle_with_force("cursor-hover", hovering);
        }
    }
}

/// Touch devices get the native cursor back.
fn wire_touch_disable(document: &web::Document, glow: web::HtmlElement, dot: web::HtmlElement) {
    if let Some(window) = web::window() {
        let document = document.clone();
        dom::add_once_listener(&window, "touchstart", move |_| {
            let _ = glow.style().set_property("display", "none");
            let _ = dot.style().set_property("display", "none");
            if let Some(body) = document.body() {
                let _ = body.style().set_property("cursor", "auto");
            }
        });
    }
}

//! Document-level pointer wiring: one `mousemove` listener feeds the
//! shared mouse state, moves the cursor dot and keeps the background's
//! normalized pointer position current.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom::{self, Listener};
use crate::input::{self, MouseState};

/// Keeps the listener attached; dropping it detaches.
pub struct PointerWiring {
    _mousemove: Listener,
}

pub fn wire_pointer_move(
    document: &web::Document,
    mouse: Rc<RefCell<MouseState>>,
    canvas: Option<web::HtmlCanvasElement>,
) -> PointerWiring {
    let dot = dom::html_element(document, "cursor-dot");
    let mousemove = Listener::new(document, "mousemove", move |ev: web::Event| {
        let ev = ev.unchecked_into::<web::MouseEvent>();
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        {
            let mut state = mouse.borrow_mut();
            state.page = client;
            if let Some(canvas) = &canvas {
                let rect = canvas.get_bounding_client_rect();
                let min = Vec2::new(rect.left() as f32, rect.top() as f32);
                let size = Vec2::new(rect.width() as f32, rect.height() as f32);
                if let Some(uv) = input::surface_uv(client, min, size) {
                    state.surface_uv = uv;
                }
            }
        }
        if let Some(dot) = &dot {
            dom::set_px_position(dot, client);
        }
    });
    PointerWiring {
        _mousemove: mousemove,
    }
}

//! Small DOM helpers shared by the effect modules.

use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

#[inline]
pub fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list
                .item(i)
                .and_then(|node| node.dyn_into::<web::Element>().ok())
            {
                out.push(el);
            }
        }
    }
    out
}

/// Event listener that detaches itself when dropped. Used by the
/// components the page can tear down again; fire-and-forget wiring uses
/// [`add_listener`] instead.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Listener for page-lifetime wiring; the closure is leaked to the JS
/// side, matching how the page never unbinds its chrome.
pub fn add_listener(
    target: &web::EventTarget,
    kind: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Listener registered with `{ once: true }`.
pub fn add_once_listener(
    target: &web::EventTarget,
    kind: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Passive listener, for scroll handlers.
pub fn add_passive_listener(
    target: &web::EventTarget,
    kind: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

#[inline]
pub fn add_click_listener(document: &web::Document, element_id: &str, mut handler: impl FnMut() + 'static) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener(&el, "click", move |_| handler());
    }
}

/// One-shot timeout on the window; no-op without one.
pub fn set_timeout(handler: impl FnOnce() + 'static, delay_ms: i32) {
    if let Some(window) = web::window() {
        let cb = Closure::once_into_js(handler);
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
    }
}

/// Repeating timer; returns the interval id for [`clear_interval`].
pub fn set_interval(handler: impl FnMut() + 'static, period_ms: i32) -> Option<i32> {
    let window = web::window()?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        )
        .ok();
    closure.forget();
    id
}

pub fn clear_interval(id: i32) {
    if let Some(window) = web::window() {
        window.clear_interval_with_handle(id);
    }
}

/// Place an absolutely-positioned element at page coordinates.
pub fn set_px_position(el: &web::HtmlElement, pos: Vec2) {
    let style = el.style();
    let _ = style.set_property("left", &format!("{}px", pos.x));
    let _ = style.set_property("top", &format!("{}px", pos.y));
}

/// Match the canvas backing store to its rendered size. The page draws in
/// CSS pixels, so no device-pixel-ratio scaling is applied.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let width = canvas.offset_width().max(0) as u32;
    let height = canvas.offset_height().max(0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    (width, height)
}

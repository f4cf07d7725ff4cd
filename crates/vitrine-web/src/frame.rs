//! Display-synchronized render loop with an explicit stop.
//!
//! The loop is a value owned by its component: it reschedules itself via
//! `requestAnimationFrame` until [`FrameLoop::stop`] or drop cancels the
//! pending callback, so a dismounted component cannot leak it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
    // Keeps the callback alive for as long as the loop may still fire.
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    /// Run `frame` once per animation frame until stopped.
    pub fn start(mut frame: impl FnMut() + 'static) -> Self {
        let running = Rc::new(Cell::new(true));
        let raf_id = Rc::new(Cell::new(0));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let running_tick = running.clone();
        let raf_tick = raf_id.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running_tick.get() {
                return;
            }
            frame();
            // frame() may have stopped the loop
            if !running_tick.get() {
                return;
            }
            if let Some(window) = web::window() {
                let tick_ref = tick_clone.borrow();
                if let Some(cb) = tick_ref.as_ref() {
                    if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        raf_tick.set(id);
                    }
                }
            }
        }) as Box<dyn FnMut()>));

        let this = Self {
            running,
            raf_id,
            tick,
        };
        this.request_first();
        this
    }

    fn request_first(&self) {
        if let Some(window) = web::window() {
            let tick_ref = self.tick.borrow();
            if let Some(cb) = tick_ref.as_ref() {
                if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    self.raf_id.set(id);
                }
            }
        }
    }

    /// Cancel the pending callback and prevent rescheduling. Idempotent.
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let Some(window) = web::window() {
            let _ = window.cancel_animation_frame(self.raf_id.get());
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        // The callback holds an Rc to its own cell so it can reschedule;
        // clear the cell to break the cycle once nothing can fire it.
        self.tick.borrow_mut().take();
    }
}

#![cfg(target_arch = "wasm32")]
//! WASM front-end for the portfolio effects layer.
//!
//! Every effect finds its own DOM elements on startup and silently skips
//! itself when they are missing, so a stripped-down page degrades to
//! fewer effects rather than an error. The pieces with per-frame state
//! (background canvas, cursor glow) own their render loops and are kept
//! in a page-level [`App`] so [`shutdown`] can stop them cleanly.

mod background;
mod cursor;
mod dom;
mod events;
mod form;
mod frame;
mod input;
mod nav;
mod overlay;
mod reveal;
mod terminal;
mod theme;
mod tilt;
mod typer;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

struct App {
    background: Option<background::CanvasBackground>,
    cursor: Option<cursor::CustomCursor>,
    _pointer: events::pointer::PointerWiring,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("vitrine-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop the render loops and detach the pointer listener. The one-shot
/// page chrome (observers, timers already scheduled) is left to finish;
/// nothing re-schedules after this.
#[wasm_bindgen]
pub fn shutdown() {
    let Some(app) = APP.with(|app| app.borrow_mut().take()) else {
        return;
    };
    if let Some(background) = &app.background {
        background.stop();
    }
    if let Some(cursor) = &app.cursor {
        cursor.stop();
    }
    log::info!("vitrine-web stopped");
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    theme::init(&window, &document);

    // Shared pointer state: page pixels for the cursor, surface-normalized
    // coordinates for the background canvas.
    let mouse = Rc::new(RefCell::new(input::MouseState::default()));

    let background = background::CanvasBackground::mount(&window, &document, mouse.clone());
    let cursor = cursor::CustomCursor::mount(&document, mouse.clone());
    let pointer = events::pointer::wire_pointer_move(
        &document,
        mouse,
        background.as_ref().map(|b| b.canvas().clone()),
    );

    nav::init(&window, &document);
    typer::init(&document);
    terminal::init(&document);
    reveal::init(&document);
    tilt::init(&document);
    form::init(&document);
    events::keyboard::wire_easter_egg(&document);

    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            background,
            cursor,
            _pointer: pointer,
        });
    });
    Ok(())
}

//! Canvas 2D painter for the animated background.
//!
//! The scene lives in `vitrine-core`; this module owns the `#grid-canvas`
//! element, rebuilds the scene when the container resizes, and repaints
//! once per animation frame in the page's draw order: grid lines,
//! intersection glow, particles, then the pointer-follow gradient over
//! everything.

use std::cell::RefCell;
use std::rc::Rc;

use vitrine_core::constants::GRID_LINE_WIDTH;
use vitrine_core::{BackgroundScene, Theme, ACCENT};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom::{self, Listener};
use crate::frame::FrameLoop;
use crate::input::MouseState;
use crate::theme;

pub struct CanvasBackground {
    canvas: web::HtmlCanvasElement,
    frame_loop: FrameLoop,
    _resize: Listener,
}

impl CanvasBackground {
    /// Attach to `#grid-canvas`; a page without one simply has no
    /// animated background.
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        mouse: Rc<RefCell<MouseState>>,
    ) -> Option<Self> {
        let canvas = document
            .get_element_by_id("grid-canvas")?
            .dyn_into::<web::HtmlCanvasElement>()
            .ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;

        let seed = js_sys::Date::now() as u64;
        let scene = Rc::new(RefCell::new(BackgroundScene::new(0.0, 0.0, seed)));
        sync_surface_size(&canvas, &scene);

        let resize = {
            let canvas = canvas.clone();
            let scene = scene.clone();
            Listener::new(window, "resize", move |_| {
                sync_surface_size(&canvas, &scene);
            })
        };

        let frame_loop = {
            let document = document.clone();
            let scene = scene.clone();
            FrameLoop::start(move || {
                let pointer_uv = mouse.borrow().surface_uv;
                paint(&ctx, &mut scene.borrow_mut(), pointer_uv, theme::current(&document));
            })
        };
        log::info!("background canvas running");

        Some(Self {
            canvas,
            frame_loop,
            _resize: resize,
        })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    pub fn stop(&self) {
        self.frame_loop.stop();
    }
}

fn sync_surface_size(canvas: &web::HtmlCanvasElement, scene: &Rc<RefCell<BackgroundScene>>) {
    let (width, height) = dom::sync_canvas_backing_size(canvas);
    scene.borrow_mut().resize(width as f32, height as f32);
}

fn paint(
    ctx: &web::CanvasRenderingContext2d,
    scene: &mut BackgroundScene,
    pointer_uv: glam::Vec2,
    theme: Theme,
) {
    let w = scene.width() as f64;
    let h = scene.height() as f64;
    if w == 0.0 || h == 0.0 {
        // container not laid out yet; skip the frame
        return;
    }
    ctx.clear_rect(0.0, 0.0, w, h);

    ctx.set_stroke_style_str(&theme.grid_color().css());
    ctx.set_line_width(GRID_LINE_WIDTH as f64);
    for x in scene.vertical_lines() {
        ctx.begin_path();
        ctx.move_to(x as f64, 0.0);
        ctx.line_to(x as f64, h);
        ctx.stroke();
    }
    for y in scene.horizontal_lines() {
        ctx.begin_path();
        ctx.move_to(0.0, y as f64);
        ctx.line_to(w, y as f64);
        ctx.stroke();
    }

    for dot in scene.glow_dots(pointer_uv) {
        ctx.begin_path();
        let _ = ctx.arc(
            dot.pos.x as f64,
            dot.pos.y as f64,
            dot.radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.set_fill_style_str(&ACCENT.with_alpha(dot.alpha).css());
        ctx.fill();
    }

    scene.advance_particles();
    for p in scene.particles() {
        ctx.begin_path();
        let _ = ctx.arc(
            p.pos.x as f64,
            p.pos.y as f64,
            p.radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.set_fill_style_str(&ACCENT.with_alpha(p.alpha).css());
        ctx.fill();
    }

    let glow = scene.pointer_glow(pointer_uv, theme);
    let (cx, cy) = (glow.center.x as f64, glow.center.y as f64);
    if let Ok(gradient) = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, glow.radius as f64) {
        let _ = gradient.add_color_stop(0.0, &glow.inner.css());
        let _ = gradient.add_color_stop(1.0, "transparent");
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill_rect(0.0, 0.0, w, h);
    }
}

//! Hover effects: magnetic buttons, project-card tilt and the level-badge
//! glow. The math lives in `vitrine_core::motion`; this module only turns
//! pointer events into transform strings.

use glam::Vec2;
use vitrine_core::constants::{TILT_LIFT_PX, TILT_PERSPECTIVE_PX};
use vitrine_core::motion;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::input;

pub fn init(document: &web::Document) {
    wire_magnetic(document);
    wire_card_tilt(document);
    wire_level_badge(document);
}

fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn rect_min_size(el: &web::Element) -> (Vec2, Vec2) {
    let rect = el.get_bounding_client_rect();
    (
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    )
}

fn wire_magnetic(document: &web::Document) {
    for el in dom::query_all(document, ".magnetic") {
        let Ok(html) = el.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        {
            let html = html.clone();
            dom::add_listener(&html.clone(), "mousemove", move |ev: web::Event| {
                let ev = ev.unchecked_into::<web::MouseEvent>();
                let (min, size) = rect_min_size(&html);
                let offset = motion::magnetic_offset(input::center_delta(client_pos(&ev), min, size));
                let _ = html.style().set_property(
                    "transform",
                    &format!("translate({}px, {}px)", offset.x, offset.y),
                );
            });
        }
        {
            let html = html.clone();
            dom::add_listener(&html.clone(), "mouseleave", move |_| {
                let _ = html.style().set_property("transform", "translate(0, 0)");
            });
        }
    }
}

fn wire_card_tilt(document: &web::Document) {
    for card in dom::query_all(document, ".project-card:not(.project-locked)") {
        let Ok(html) = card.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        {
            let html = html.clone();
            dom::add_listener(&html.clone(), "mousemove", move |ev: web::Event| {
                let ev = ev.unchecked_into::<web::MouseEvent>();
                let (min, size) = rect_min_size(&html);
                let Some(frac) = input::element_frac(client_pos(&ev), min, size) else {
                    return;
                };
                let tilt = motion::card_tilt(frac);
                let _ = html.style().set_property(
                    "transform",
                    &format!(
                        "perspective({TILT_PERSPECTIVE_PX}px) rotateY({}deg) rotateX({}deg) translateY(-{TILT_LIFT_PX}px)",
                        tilt.rotate_y_deg, tilt.rotate_x_deg
                    ),
                );
            });
        }
        {
            let html = html.clone();
            dom::add_listener(&html.clone(), "mouseleave", move |_| {
                let _ = html.style().remove_property("transform");
            });
        }
    }
}

fn wire_level_badge(document: &web::Document) {
    let Some(badge) = dom::html_element(document, "level-badge") else {
        return;
    };
    let _ = badge
        .style()
        .set_property("transition", "box-shadow 0.3s, transform 0.3s");
    {
        let badge = badge.clone();
        dom::add_listener(&badge.clone(), "mouseenter", move |_| {
            let style = badge.style();
            let _ = style.set_property("box-shadow", "0 0 40px rgba(124,45,58,0.7)");
            let _ = style.set_property("transform", "scale(1.04)");
        });
    }
    dom::add_listener(&badge.clone(), "mouseleave", move |_| {
        let style = badge.style();
        let _ = style.remove_property("box-shadow");
        let _ = style.remove_property("transform");
    });
}

//! Viewport-triggered effects: scroll reveal, stat counters, XP bars and
//! the active nav-link highlight. All four ride `IntersectionObserver`;
//! the one-shot ones unobserve their element after firing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use vitrine_core::constants::{
    ACTIVE_NAV_THRESHOLD, COUNTER_THRESHOLD, COUNTER_TICK_MS, NAV_HEIGHT_PX, REVEAL_STAGGER_SEC,
    REVEAL_THRESHOLD, XP_BAR_FILL_DELAY_MS, XP_BAR_THRESHOLD,
};
use vitrine_core::counter::CounterAnim;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::dom;

/// Sections and cards that fade in on first view, staggered per selector
/// group.
const REVEAL_TARGETS: &[&str] = &[
    ".terminal-card",
    ".about-text",
    ".skill-category",
    ".overall-xp",
    ".project-card",
    ".service-card",
    ".timeline-item",
    ".contact-info",
    ".contact-form",
    ".section-header",
    ".achievement-badge.center-badge",
    ".hero-stats",
    ".gaming-links",
    ".coffee-block",
];

pub fn init(document: &web::Document) {
    wire_reveal(document);
    wire_counters(document);
    wire_xp_bars(document);
    wire_active_nav(document);
}

/// Build an observer that hands each entry to `on_entry`. The callback
/// closure is leaked alongside the observer, which lives for the page.
fn observe_entries(
    mut on_entry: impl FnMut(web::IntersectionObserverEntry, &web::IntersectionObserver) + 'static,
    threshold: f64,
    root_margin: Option<&str>,
) -> Option<web::IntersectionObserver> {
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                on_entry(entry.unchecked_into(), &observer);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
            .ok()?;
    closure.forget();
    Some(observer)
}

fn wire_reveal(document: &web::Document) {
    for selector in REVEAL_TARGETS {
        for (i, el) in dom::query_all(document, selector).into_iter().enumerate() {
            let _ = el.class_list().add_1("reveal");
            if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
                let _ = html.style().set_property(
                    "transition-delay",
                    &format!("{:.2}s", i as f32 * REVEAL_STAGGER_SEC),
                );
            }
        }
    }

    let Some(observer) = observe_entries(
        |entry, observer| {
            if entry.is_intersecting() {
                let target = entry.target();
                let _ = target.class_list().add_1("visible");
                observer.unobserve(&target);
            }
        },
        REVEAL_THRESHOLD,
        None,
    ) else {
        return;
    };
    for el in dom::query_all(document, ".reveal") {
        observer.observe(&el);
    }
}

fn wire_counters(document: &web::Document) {
    let counters = dom::query_all(document, "[data-count]");
    if counters.is_empty() {
        return;
    }
    let Some(observer) = observe_entries(
        |entry, observer| {
            if entry.is_intersecting() {
                let target = entry.target();
                observer.unobserve(&target);
                start_counter(target);
            }
        },
        COUNTER_THRESHOLD,
        None,
    ) else {
        return;
    };
    for el in &counters {
        observer.observe(el);
    }
}

fn start_counter(el: web::Element) {
    let target = el
        .get_attribute("data-count")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(0);
    let anim = Rc::new(RefCell::new(CounterAnim::new(target)));
    let interval_id = Rc::new(Cell::new(None::<i32>));
    let id = {
        let interval_id = interval_id.clone();
        dom::set_interval(
            move || {
                let mut anim = anim.borrow_mut();
                el.set_text_content(Some(&anim.tick().to_string()));
                if anim.done() {
                    if let Some(id) = interval_id.get() {
                        dom::clear_interval(id);
                    }
                }
            },
            COUNTER_TICK_MS,
        )
    };
    interval_id.set(id);
}

fn wire_xp_bars(document: &web::Document) {
    let fills = dom::query_all(document, ".xp-fill, .oxp-fill");
    if fills.is_empty() {
        return;
    }
    let Some(observer) = observe_entries(
        |entry, observer| {
            if entry.is_intersecting() {
                let target = entry.target();
                observer.unobserve(&target);
                let pct = target
                    .get_attribute("data-fill")
                    .unwrap_or_else(|| "0".to_string());
                if let Ok(html) = target.dyn_into::<web::HtmlElement>() {
                    dom::set_timeout(
                        move || {
                            let _ = html.style().set_property("width", &format!("{pct}%"));
                        },
                        XP_BAR_FILL_DELAY_MS,
                    );
                }
            }
        },
        XP_BAR_THRESHOLD,
        None,
    ) else {
        return;
    };
    for el in &fills {
        observer.observe(el);
    }
}

fn wire_active_nav(document: &web::Document) {
    let sections = dom::query_all(document, "section[id]");
    if sections.is_empty() {
        return;
    }
    let doc = document.clone();
    let margin = format!("-{NAV_HEIGHT_PX}px 0px 0px 0px");
    let Some(observer) = observe_entries(
        move |entry, _| {
            if !entry.is_intersecting() {
                return;
            }
            let Some(id) = entry.target().get_attribute("id") else {
                return;
            };
            let anchor = format!("#{id}");
            for link in dom::query_all(&doc, ".nav-link") {
                let Some(html) = link.dyn_ref::<web::HtmlElement>() else {
                    continue;
                };
                if link.get_attribute("href").as_deref() == Some(anchor.as_str()) {
                    let _ = html.style().set_property("color", "var(--wine-light)");
                } else {
                    let _ = html.style().remove_property("color");
                }
            }
        },
        ACTIVE_NAV_THRESHOLD,
        Some(&margin),
    ) else {
        return;
    };
    for section in &sections {
        observer.observe(section);
    }
}

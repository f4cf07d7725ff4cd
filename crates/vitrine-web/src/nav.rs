//! Navigation chrome: navbar scroll state, the mobile menu and smooth
//! anchor scrolling.

use vitrine_core::constants::{NAV_HEIGHT_PX, NAV_SCROLLED_Y};
use web_sys as web;

use crate::dom;

pub fn init(window: &web::Window, document: &web::Document) {
    wire_navbar_scroll(window, document);
    wire_mobile_menu(document);
    wire_smooth_anchors(document);
}

fn wire_navbar_scroll(window: &web::Window, document: &web::Document) {
    let Some(nav) = document.get_element_by_id("navbar") else {
        return;
    };
    dom::add_passive_listener(window, "scroll", move |_| {
        let Some(window) = web::window() else { return };
        let scrolled = window.scroll_y().unwrap_or(0.0) > NAV_SCROLLED_Y;
        let _ = nav.class_list().toggle_with_force("scrolled", scrolled);
    });
}

fn wire_mobile_menu(document: &web::Document) {
    let Some(button) = document.get_element_by_id("hamburger") else {
        return;
    };
    let Some(menu) = document.get_element_by_id("mobile-menu") else {
        return;
    };

    {
        let toggle = button.clone();
        let menu = menu.clone();
        dom::add_listener(&button, "click", move |_| {
            let open = menu.class_list().toggle("open").unwrap_or(false);
            let _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
        });
    }

    for link in dom::query_all(document, ".mobile-link") {
        let button = button.clone();
        let menu = menu.clone();
        dom::add_listener(&link, "click", move |_| {
            let _ = menu.class_list().remove_1("open");
            let _ = button.set_attribute("aria-expanded", "false");
        });
    }
}

/// Anchor clicks scroll to their section, compensating for the fixed nav.
fn wire_smooth_anchors(document: &web::Document) {
    for anchor in dom::query_all(document, "a[href^='#']") {
        let anchor_el = anchor.clone();
        dom::add_listener(&anchor, "click", move |ev: web::Event| {
            let Some(href) = anchor_el.get_attribute("href") else {
                return;
            };
            if href == "#" {
                return;
            }
            let Some((window, document)) = dom::window_document() else {
                return;
            };
            let Ok(Some(target)) = document.query_selector(&href) else {
                return;
            };
            ev.prevent_default();
            let top = target.get_bounding_client_rect().top
                + window.scroll_y().unwrap_or(0.0)
                - NAV_HEIGHT_PX;
            let options = web::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        });
    }
}

//! Easter-egg overlay helpers.

use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("easter-egg") {
        let classes = el.class_list();
        let _ = classes.remove_1("hidden");
        let _ = classes.add_1("visible");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("easter-egg") {
        let classes = el.class_list();
        let _ = classes.remove_1("visible");
        let _ = classes.add_1("hidden");
    }
}

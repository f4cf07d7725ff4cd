//! Drives the typed-roles animation in the hero with chained timeouts.

use std::cell::RefCell;
use std::rc::Rc;

use vitrine_core::constants::TYPER_START_DELAY_MS;
use vitrine_core::typer::Typer;
use web_sys as web;

use crate::dom;

const ROLES: &[&str] = &[
    "Systems Programmer",
    "Security Enthusiast",
    "Interface Designer",
    "Hardware Tinkerer",
    "Open Source Contributor",
    "Lifelong Learner",
];

pub fn init(document: &web::Document) {
    let Some(el) = document.get_element_by_id("typed-role") else {
        return;
    };
    let typer = Rc::new(RefCell::new(Typer::new(
        ROLES.iter().map(|r| r.to_string()).collect(),
    )));
    schedule(el, typer, TYPER_START_DELAY_MS);
}

fn schedule(el: web::Element, typer: Rc<RefCell<Typer>>, delay_ms: u32) {
    dom::set_timeout(
        move || {
            let step = typer.borrow_mut().step();
            el.set_text_content(Some(&step.visible));
            schedule(el, typer, step.next_delay_ms);
        },
        delay_ms as i32,
    );
}

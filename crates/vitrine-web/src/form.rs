//! Simulated contact-form submit: validate, pretend to transmit, confirm.
//! There is no backend; the page ships with a stand-in flow so the form
//! feels alive.

use vitrine_core::constants::{FORM_FEEDBACK_CLEAR_MS, FORM_SEND_DELAY_MS};
use vitrine_core::form::Submission;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

const ERROR_TEXT: &str = "\u{26a0} Please fill in name, email, and message.";
const SUCCESS_TEXT: &str = "\u{2713} MESSAGE RECEIVED. I'll reply within 24h. Thank you!";
const SENDING_LABEL: &str = "TRANSMITTING...";
const IDLE_LABEL: &str = "SEND MESSAGE \u{27f6}";

pub fn init(document: &web::Document) {
    let Some(form) = document
        .get_element_by_id("contact-form")
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };

    let form_el = form.clone();
    dom::add_listener(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let Some((_, document)) = dom::window_document() else {
            return;
        };
        handle_submit(&document, &form_el);
    });
}

fn handle_submit(document: &web::Document, form: &web::HtmlFormElement) {
    let Some(feedback) = dom::html_element(document, "form-feedback") else {
        return;
    };
    let submission = read_fields(document);
    if submission.validate().is_err() {
        feedback.set_class_name("form-feedback error");
        feedback.set_text_content(Some(ERROR_TEXT));
        return;
    }

    let button = form
        .query_selector("button[type='submit']")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());
    if let Some(button) = &button {
        button.set_disabled(true);
    }
    let label = document.get_element_by_id("submit-text");
    if let Some(label) = &label {
        label.set_text_content(Some(SENDING_LABEL));
    }
    feedback.set_class_name("form-feedback");
    feedback.set_text_content(Some(""));

    let form = form.clone();
    dom::set_timeout(
        move || {
            feedback.set_class_name("form-feedback success");
            feedback.set_text_content(Some(SUCCESS_TEXT));
            if let Some(label) = &label {
                label.set_text_content(Some(IDLE_LABEL));
            }
            if let Some(button) = &button {
                button.set_disabled(false);
            }
            form.reset();
            dom::set_timeout(
                move || {
                    feedback.set_text_content(Some(""));
                },
                FORM_FEEDBACK_CLEAR_MS,
            );
        },
        FORM_SEND_DELAY_MS,
    );
}

fn read_fields(document: &web::Document) -> Submission {
    let input_value = |id: &str| {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    };
    let message = document
        .get_element_by_id("cf-message")
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
        .map(|area| area.value())
        .unwrap_or_default();
    Submission::from_fields(&input_value("cf-name"), &input_value("cf-email"), &message)
}

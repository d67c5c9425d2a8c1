//! Certificate viewer modal.
//!
//! Open and close are idempotent class/style writes, so closing an already
//! closed modal (e.g. Escape pressed twice) is a no-op.

use crate::dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn open(document: &web::Document, image_path: &str) {
    if let Some(modal) = document.get_element_by_id("cert-modal") {
        if let Some(image) = image_element(document) {
            image.set_src(image_path);
        }
        _ = modal.class_list().add_1("active");
        set_body_overflow(document, "hidden");
    }
}

pub fn close(document: &web::Document) {
    if let Some(modal) = document.get_element_by_id("cert-modal") {
        _ = modal.class_list().remove_1("active");
        if let Some(image) = image_element(document) {
            image.set_src("");
        }
        set_body_overflow(document, "auto");
    }
}

fn image_element(document: &web::Document) -> Option<web::HtmlImageElement> {
    document
        .get_element_by_id("cert-image")
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
}

fn set_body_overflow(document: &web::Document, value: &str) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("overflow", value);
    }
}

// Page-facing entry points; the certificate cards call these from onclick.

#[wasm_bindgen(js_name = viewCertificate)]
pub fn view_certificate(image_path: String) {
    if let Some(document) = dom::window_document() {
        open(&document, &image_path);
    }
}

#[wasm_bindgen(js_name = closeCertModal)]
pub fn close_cert_modal() {
    if let Some(document) = dom::window_document() {
        close(&document);
    }
}

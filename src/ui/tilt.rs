//! Pointer-tracking 3D tilt on certificate and contact cards, plus the
//! glow-highlight position variables the stylesheet reads.

use crate::constants::{CERT_TILT_DIVISOR, CONTACT_TILT_DIVISOR};
use crate::dom::{self, Listener};
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_cards(document: &web::Document, listeners: &mut Vec<Listener>) {
    wire_selector(document, ".certificate-card", CERT_TILT_DIVISOR, listeners);
    wire_selector(document, ".contact-card", CONTACT_TILT_DIVISOR, listeners);
}

fn wire_selector(
    document: &web::Document,
    selector: &str,
    divisor: f32,
    listeners: &mut Vec<Listener>,
) {
    for card in dom::query_all(document, selector) {
        {
            let card = card.clone();
            let target = card.clone();
            listeners.push(Listener::new::<web::MouseEvent>(
                &target,
                "mousemove",
                move |ev: web::MouseEvent| {
                    let rect = card.get_bounding_client_rect();
                    let x = ev.client_x() as f32 - rect.left() as f32;
                    let y = ev.client_y() as f32 - rect.top() as f32;
                    let (rotate_x, rotate_y) = input::tilt_angles(
                        x,
                        y,
                        rect.width() as f32,
                        rect.height() as f32,
                        divisor,
                    );
                    if let Some(el) = card.dyn_ref::<web::HtmlElement>() {
                        let style = el.style();
                        _ = style.set_property("transform", &input::tilt_transform(rotate_x, rotate_y));
                        _ = style.set_property("--mouse-x", &input::glow_offset_px(x));
                        _ = style.set_property("--mouse-y", &input::glow_offset_px(y));
                    }
                },
            ));
        }
        {
            let card = card.clone();
            let target = card.clone();
            listeners.push(Listener::simple(&target, "mouseleave", move || {
                if let Some(el) = card.dyn_ref::<web::HtmlElement>() {
                    let style = el.style();
                    _ = style.set_property("transform", input::TILT_RESET);
                    _ = style.set_property("--mouse-x", input::GLOW_CENTER);
                    _ = style.set_property("--mouse-y", input::GLOW_CENTER);
                }
            }));
        }
    }
}

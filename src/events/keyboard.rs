//! Global keyboard shortcuts.

use crate::dom::Listener;
use crate::ui::modal;
use web_sys as web;

pub fn wire_escape(document: &web::Document, listeners: &mut Vec<Listener>) {
    let doc = document.clone();
    listeners.push(Listener::new::<web::KeyboardEvent>(
        document,
        "keydown",
        move |ev: web::KeyboardEvent| {
            if ev.key() == "Escape" {
                modal::close(&doc);
            }
        },
    ));
}

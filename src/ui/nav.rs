//! Navigation widgets: mobile menu toggle, smooth anchor scrolling and the
//! scroll-to-top button.

use crate::constants::ANCHOR_SCROLL_OFFSET_PX;
use crate::dom::{self, Listener};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_menu_toggle(document: &web::Document, listeners: &mut Vec<Listener>) {
    let toggle = match document.get_element_by_id("menu-toggle") {
        Some(el) => el,
        None => return,
    };
    let nav_links = match document.get_element_by_id("nav-links") {
        Some(el) => el,
        None => return,
    };

    {
        let nav_links = nav_links.clone();
        let icon_toggle = toggle.clone();
        listeners.push(Listener::simple(&toggle, "click", move || {
            let open = nav_links.class_list().toggle("active").unwrap_or(false);
            set_menu_icon(&icon_toggle, open);
        }));
    }

    // choosing a destination closes the menu
    for link in dom::query_all(document, ".nav-links a") {
        let toggle = toggle.clone();
        let nav_links = nav_links.clone();
        listeners.push(Listener::simple(&link, "click", move || {
            _ = nav_links.class_list().remove_1("active");
            set_menu_icon(&toggle, false);
        }));
    }
}

/// Morph the three icon bars between hamburger and X.
fn set_menu_icon(toggle: &web::Element, open: bool) {
    let mut bars = Vec::new();
    if let Ok(nodes) = toggle.query_selector_all("span") {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                bars.push(el);
            }
        }
    }
    if bars.len() < 3 {
        return;
    }
    dom::set_style(
        &bars[0],
        "transform",
        if open { "rotate(45deg) translateY(8px)" } else { "none" },
    );
    dom::set_style(&bars[1], "opacity", if open { "0" } else { "1" });
    dom::set_style(
        &bars[2],
        "transform",
        if open { "rotate(-45deg) translateY(-8px)" } else { "none" },
    );
}

pub fn wire_smooth_anchors(document: &web::Document, listeners: &mut Vec<Listener>) {
    for anchor in dom::query_all(document, "a[href^='#']") {
        let doc = document.clone();
        let href = anchor.get_attribute("href");
        listeners.push(Listener::new::<web::MouseEvent>(
            &anchor,
            "click",
            move |ev: web::MouseEvent| {
                ev.prevent_default();
                let href = match href.as_ref() {
                    Some(h) => h,
                    None => return,
                };
                if let (Some(window), Ok(Some(target))) = (web::window(), doc.query_selector(href)) {
                    if let Some(target) = target.dyn_ref::<web::HtmlElement>() {
                        dom::smooth_scroll_to(
                            &window,
                            target.offset_top() as f64 - ANCHOR_SCROLL_OFFSET_PX,
                        );
                    }
                }
            },
        ));
    }
}

pub fn wire_scroll_top(document: &web::Document, listeners: &mut Vec<Listener>) {
    if let Some(button) = document.get_element_by_id("scroll-top") {
        listeners.push(Listener::simple(&button, "click", move || {
            if let Some(window) = web::window() {
                dom::smooth_scroll_to(&window, 0.0);
            }
        }));
    }
}

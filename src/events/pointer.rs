//! Pointer tracking and the cursor glow.

use crate::constants::MOBILE_BREAKPOINT_PX;
use crate::dom::{self, Listener};
use crate::input;
use crate::state::InteractionState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire(
    document: &web::Document,
    interaction: Rc<RefCell<InteractionState>>,
    glow: Option<web::Element>,
    listeners: &mut Vec<Listener>,
) {
    if let Some(glow) = &glow {
        apply_glow_visibility(glow, interaction.borrow().viewport.width);
    }

    listeners.push(Listener::new::<web::MouseEvent>(
        document,
        "mousemove",
        move |ev: web::MouseEvent| {
            let (width, height) = {
                let state = interaction.borrow();
                (state.viewport.width, state.viewport.height)
            };
            if width <= MOBILE_BREAKPOINT_PX {
                return;
            }

            let (nx, ny) = input::normalized_pointer(
                ev.client_x() as f32,
                ev.client_y() as f32,
                width,
                height,
            );
            {
                let mut state = interaction.borrow_mut();
                state.pointer.nx = nx;
                state.pointer.ny = ny;
            }

            if let Some(glow) = &glow {
                dom::set_style(glow, "left", &format!("{}px", ev.client_x()));
                dom::set_style(glow, "top", &format!("{}px", ev.client_y()));
            }
        },
    ));
}

/// The glow is a desktop-only affordance.
pub fn apply_glow_visibility(glow: &web::Element, viewport_w: f32) {
    let display = if viewport_w <= MOBILE_BREAKPOINT_PX {
        "none"
    } else {
        "block"
    };
    dom::set_style(glow, "display", display);
}

//! Window resize: viewport record, camera aspect, canvas backing size and
//! glow visibility. The GPU surface itself follows the canvas size on the
//! next frame.

use crate::dom::{self, Listener};
use crate::events::pointer;
use crate::scene::Scene;
use crate::state::InteractionState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire(
    window: &web::Window,
    interaction: Rc<RefCell<InteractionState>>,
    scene: Option<Rc<RefCell<Scene>>>,
    canvas: Option<web::HtmlCanvasElement>,
    glow: Option<web::Element>,
    listeners: &mut Vec<Listener>,
) {
    let win = window.clone();
    listeners.push(Listener::simple(window, "resize", move || {
        let (width, height) = dom::viewport_size(&win);
        {
            let mut state = interaction.borrow_mut();
            state.viewport.width = width;
            state.viewport.height = height;
        }
        if let Some(scene) = &scene {
            scene.borrow_mut().set_viewport(width, height);
        }
        if let Some(canvas) = &canvas {
            dom::sync_canvas_backing_size(canvas);
        }
        if let Some(glow) = &glow {
            pointer::apply_glow_visibility(glow, width);
        }
    }));
}

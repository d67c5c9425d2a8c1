#![cfg(target_arch = "wasm32")]
//! Client-side behavior for the portfolio page: scroll-reactive background
//! color, a WebGPU particle/shape backdrop, navigation interactions, the
//! certificate modal and card tilt effects.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod geometry;
mod input;
mod palette;
mod render;
mod scene;
mod state;
mod ui;

use scene::Scene;
use state::InteractionState;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let (viewport_w, viewport_h) = dom::viewport_size(&window);
    let interaction = Rc::new(RefCell::new(InteractionState::new(viewport_w, viewport_h)));
    let mut listeners: Vec<dom::Listener> = Vec::new();

    // Widgets are independent leaves; wire them before the scene so a
    // missing canvas cannot take them down.
    ui::nav::wire_menu_toggle(&document, &mut listeners);
    ui::nav::wire_smooth_anchors(&document, &mut listeners);
    ui::nav::wire_scroll_top(&document, &mut listeners);
    ui::tilt::wire_cards(&document, &mut listeners);
    events::keyboard::wire_escape(&document, &mut listeners);

    let glow = document.query_selector(".cursor-glow").ok().flatten();
    events::pointer::wire(&document, interaction.clone(), glow.clone(), &mut listeners);

    let progress_bar = dom::create_progress_bar(&document);
    let effects = Rc::new(events::scroll::ScrollEffects::new(
        window.clone(),
        document.clone(),
        interaction.clone(),
        progress_bar,
    ));
    events::scroll::wire(effects.clone(), &mut listeners);
    // initial paint before the first scroll event
    effects.apply();

    let canvas = document
        .get_element_by_id("webgl-canvas")
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    let mut scene_for_resize = None;
    let mut canvas_for_resize = None;
    match canvas {
        None => log::error!("missing #webgl-canvas; background scene disabled"),
        Some(canvas) => {
            dom::sync_canvas_backing_size(&canvas);
            let scene = Rc::new(RefCell::new(Scene::new(
                viewport_w,
                viewport_h,
                &mut rand::thread_rng(),
            )));
            let gpu = Rc::new(RefCell::new(frame::init_gpu(&canvas, &scene.borrow()).await));

            // the loop only starts after a successful renderer init; the
            // page itself keeps working without the backdrop
            if gpu.borrow().is_some() {
                let frame_loop = frame::FrameLoop::new();
                {
                    let scene = scene.clone();
                    let interaction = interaction.clone();
                    frame_loop.add_callback(Box::new(move |tick| {
                        scene.borrow_mut().advance(tick.dt_sec, &interaction.borrow());
                    }));
                }
                {
                    let scene = scene.clone();
                    let gpu = gpu.clone();
                    let canvas = canvas.clone();
                    frame_loop.add_callback(Box::new(move |tick| {
                        // the renderer can be absent; every frame checks
                        if let Some(gpu) = gpu.borrow_mut().as_mut() {
                            gpu.resize_if_needed(canvas.width(), canvas.height());
                            if let Err(e) = gpu.render(&scene.borrow(), tick.dt_sec) {
                                log::error!("render error: {:?}", e);
                            }
                        }
                    }));
                }

                {
                    let frame_loop = frame_loop.clone();
                    let doc = document.clone();
                    listeners.push(dom::Listener::simple(
                        &document,
                        "visibilitychange",
                        move || {
                            if doc.hidden() {
                                frame_loop.pause();
                            } else {
                                frame_loop.start();
                            }
                        },
                    ));
                }
                frame_loop.start();
                log::info!(
                    "background scene running ({} particles)",
                    scene.borrow().particles.positions.len()
                );
            }

            scene_for_resize = Some(scene);
            canvas_for_resize = Some(canvas);
        }
    }

    events::resize::wire(
        &window,
        interaction.clone(),
        scene_for_resize,
        canvas_for_resize,
        glow,
        &mut listeners,
    );

    // subscriptions live for the page lifetime
    std::mem::forget(listeners);
    Ok(())
}

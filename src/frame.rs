//! Render loop driver: an ordered list of per-frame callbacks on a
//! requestAnimationFrame chain, pausable on tab visibility changes.

use crate::constants::MAX_FRAME_DT_SEC;
use crate::render;
use crate::scene::Scene;
use crate::state::RenderLoopState;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameTick {
    pub dt_sec: f32,
    pub time_sec: f32,
}

pub type FrameCallback = Box<dyn FnMut(&FrameTick)>;

/// Owns the frame callbacks and the scheduling chain. Callbacks are
/// registered once at setup and run in registration order every frame.
#[derive(Clone)]
pub struct FrameLoop {
    callbacks: Rc<RefCell<Vec<FrameCallback>>>,
    state: Rc<RefCell<RenderLoopState>>,
    last: Rc<Cell<Option<Instant>>>,
    time_accum: Rc<Cell<f32>>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            callbacks: Rc::new(RefCell::new(Vec::new())),
            state: Rc::new(RefCell::new(RenderLoopState::new())),
            last: Rc::new(Cell::new(None)),
            time_accum: Rc::new(Cell::new(0.0)),
        }
    }

    pub fn add_callback(&self, callback: FrameCallback) {
        self.callbacks.borrow_mut().push(callback);
    }

    /// Enter RUNNING; schedules a fresh chain only when none is alive.
    pub fn start(&self) {
        if !self.state.borrow_mut().start() {
            return;
        }
        // dt restarts from zero so a long pause does not become one huge step
        self.last.set(None);
        self.spawn_chain();
    }

    pub fn pause(&self) {
        self.state.borrow_mut().pause();
    }

    fn spawn_chain(&self) {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let callbacks = self.callbacks.clone();
        let state = self.state.clone();
        let last = self.last.clone();
        let time_accum = self.time_accum.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !state.borrow_mut().tick() {
                return;
            }
            let now = Instant::now();
            let dt_sec = last
                .get()
                .map(|prev| (now - prev).as_secs_f32())
                .unwrap_or(0.0)
                .min(MAX_FRAME_DT_SEC);
            last.set(Some(now));
            let time_sec = time_accum.get() + dt_sec;
            time_accum.set(time_sec);

            let frame_tick = FrameTick { dt_sec, time_sec };
            for callback in callbacks.borrow_mut().iter_mut() {
                callback(&frame_tick);
            }

            if let Some(w) = web::window() {
                _ = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                );
            }
        }) as Box<dyn FnMut()>));
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement, scene: &Scene) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for the surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, scene).await {
        Ok(gpu) => Some(gpu),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

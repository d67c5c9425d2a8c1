//! Small DOM helpers and the event-subscription type.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An attached event handler. The listener is registered on construction and
/// removed again when the value drops, so subscriptions are scoped to
/// whatever owns them (here: a bag kept alive for the life of the page).
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    function: js_sys::Function,
    _closure: Box<dyn std::any::Any>,
}

impl Listener {
    pub fn new<E>(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(E) + 'static,
    ) -> Self
    where
        E: FromWasmAbi + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
        let function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        _ = target.add_event_listener_with_callback(event, &function);
        Self {
            target: target.clone(),
            event,
            function,
            _closure: Box::new(closure),
        }
    }

    /// Listener for handlers that ignore the event object.
    pub fn simple(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut() + 'static,
    ) -> Self {
        Self::new::<web::Event>(target, event, move |_| handler())
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, &self.function);
    }
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    (width, height)
}

/// Vertical scroll offset in CSS pixels.
pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Scrollable range: document height minus viewport height. Zero when the
/// content fits the viewport.
pub fn scroll_range(document: &web::Document) -> f32 {
    document
        .document_element()
        .map(|root| (root.scroll_height() - root.client_height()) as f32)
        .unwrap_or(0.0)
}

/// Set one inline style property, ignoring elements without a style.
pub fn set_style(element: &web::Element, property: &str, value: &str) {
    if let Some(el) = element.dyn_ref::<web::HtmlElement>() {
        _ = el.style().set_property(property, value);
    }
}

/// Collect the elements matched by a selector.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(nodes) = document.query_selector_all(selector) {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

/// Keep the canvas backing store in sync with its CSS size and pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(2.0);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Create and attach the scroll progress bar.
pub fn create_progress_bar(document: &web::Document) -> Option<web::Element> {
    let bar = document.create_element("div").ok()?;
    bar.set_class_name("scroll-progress");
    let body = document.body()?;
    body.append_child(&bar).ok()?;
    Some(bar)
}

/// Smooth-scroll the window to a vertical offset.
pub fn smooth_scroll_to(window: &web::Window, top: f64) {
    let options = web::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

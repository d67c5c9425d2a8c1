//! Scroll-driven page effects: progress bar, background color, navbar state,
//! active nav link and the scroll-to-top control.

use crate::constants::*;
use crate::dom::{self, Listener};
use crate::input;
use crate::palette;
use crate::state::InteractionState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Element handles resolved once at wiring time. Missing elements stay
/// `None`/empty and their effect is skipped on every pass.
pub struct ScrollEffects {
    window: web::Window,
    document: web::Document,
    interaction: Rc<RefCell<InteractionState>>,
    progress_bar: Option<web::Element>,
    navbar: Option<web::Element>,
    scroll_top: Option<web::Element>,
    sections: Vec<web::HtmlElement>,
    nav_links: Vec<(web::HtmlElement, Option<String>)>,
}

impl ScrollEffects {
    pub fn new(
        window: web::Window,
        document: web::Document,
        interaction: Rc<RefCell<InteractionState>>,
        progress_bar: Option<web::Element>,
    ) -> Self {
        let navbar = document.get_element_by_id("navbar");
        let scroll_top = document.get_element_by_id("scroll-top");
        let sections = dom::query_all(&document, ".section, .hero")
            .into_iter()
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .collect();
        let nav_links = dom::query_all(&document, ".nav-links a")
            .into_iter()
            .filter_map(|el| {
                let href = el.get_attribute("href");
                el.dyn_into::<web::HtmlElement>().ok().map(|link| (link, href))
            })
            .collect();
        Self {
            window,
            document,
            interaction,
            progress_bar,
            navbar,
            scroll_top,
            sections,
            nav_links,
        }
    }

    /// One pass over every scroll effect; also used for the initial paint.
    pub fn apply(&self) {
        let scroll = dom::scroll_y(&self.window);
        self.interaction.borrow_mut().scroll_y = scroll;
        let range = dom::scroll_range(&self.document);

        if let Some(bar) = &self.progress_bar {
            let percent = input::progress_percent(scroll, range);
            dom::set_style(bar, "width", &format!("{percent:.2}%"));
        }

        let color = palette::background_color(palette::scroll_fraction(scroll, range));
        if let Some(body) = self.document.body() {
            _ = body.style().set_property("background-color", &color.css());
        }

        if let Some(navbar) = &self.navbar {
            let classes = navbar.class_list();
            if scroll > NAVBAR_SCROLLED_PX {
                _ = classes.add_1("scrolled");
            } else {
                _ = classes.remove_1("scrolled");
            }
        }

        self.highlight_active_link(scroll);

        if let Some(button) = &self.scroll_top {
            let classes = button.class_list();
            if scroll > SCROLL_TOP_SHOW_PX {
                _ = classes.add_1("visible");
            } else {
                _ = classes.remove_1("visible");
            }
        }
    }

    fn highlight_active_link(&self, scroll: f32) {
        // section offsets move when images load, so they are re-read per pass
        let tops: Vec<f32> = self
            .sections
            .iter()
            .map(|section| section.offset_top() as f32)
            .collect();
        let current = input::active_section(&tops, scroll, ACTIVE_SECTION_MARGIN_PX)
            .map(|index| self.sections[index].id());

        for (link, href) in &self.nav_links {
            _ = link.style().remove_property("color");
            if let (Some(id), Some(href)) = (&current, href) {
                if !id.is_empty() && href.strip_prefix('#') == Some(id.as_str()) {
                    _ = link.style().set_property("color", ACTIVE_LINK_COLOR);
                }
            }
        }
    }
}

pub fn wire(effects: Rc<ScrollEffects>, listeners: &mut Vec<Listener>) {
    let window = effects.window.clone();
    let fx = effects.clone();
    listeners.push(Listener::simple(&window, "scroll", move || fx.apply()));
}

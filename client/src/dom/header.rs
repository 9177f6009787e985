//! Sticky header and smooth in-page anchor scrolling.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use super::overlay::{SharedOverlays, sync};
use crate::state::header::{HeaderTracker, STICKY_CLASS, anchor_scroll_top, anchor_target};

pub const HEADER_ID: &str = "header";

fn header_height() -> f64 {
    super::by_id(HEADER_ID)
        .and_then(|h| h.dyn_into::<HtmlElement>().ok())
        .map_or(0.0, |h| f64::from(h.offset_height()))
}

fn mount_sticky(window: &web_sys::Window) {
    let Some(header) = super::by_id(HEADER_ID) else {
        return;
    };
    let tracker = RefCell::new(HeaderTracker::new(window.scroll_y().unwrap_or(0.0)));
    let win = window.clone();
    super::on(window, "scroll", move |_| {
        let y = win.scroll_y().unwrap_or(0.0);
        let state = tracker.borrow_mut().on_scroll(y);
        super::set_class(&header, STICKY_CLASS, state.sticky);
        super::set_style(&header, "transform", state.transform());
    });
}

fn mount_anchors(window: &web_sys::Window, overlays: &SharedOverlays) {
    let Some(doc) = super::document() else {
        return;
    };
    let win = window.clone();
    let overlays = Rc::clone(overlays);
    super::on(&doc, "click", move |event| {
        let Some(link) = super::event_element(&event)
            .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten())
        else {
            return;
        };
        event.prevent_default();

        let href = link.get_attribute("href").unwrap_or_default();
        let Some(target) = anchor_target(&href)
            .and_then(super::by_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };

        let options = ScrollToOptions::new();
        options.set_top(anchor_scroll_top(f64::from(target.offset_top()), header_height()));
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);

        let mut state = overlays.borrow_mut();
        if state.menu.close() {
            sync(&state);
        }
    });
}

pub fn mount(overlays: &SharedOverlays) {
    let Some(window) = web_sys::window() else {
        return;
    };
    mount_sticky(&window);
    mount_anchors(&window, overlays);
}

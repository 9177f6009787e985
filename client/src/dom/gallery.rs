//! Project filter controls and the lightbox opener.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

use super::overlay::{LIGHTBOX_ID, SharedOverlays, sync};
use crate::state::gallery::{
    ACTIVE_CLASS, CardTransition, Filter, GalleryFilter, GalleryItem, HIDDEN_TRANSFORM,
    LightboxView, SHOWN_TRANSFORM,
};

pub const GRID_ID: &str = "projects-grid";
pub const LIGHTBOX_IMG_ID: &str = "lightbox-img";

fn play(card: Element, transition: CardTransition, filter: &Rc<RefCell<GalleryFilter>>) {
    let filter = Rc::clone(filter);
    match transition {
        CardTransition::Show { delay_ms, generation, .. } => {
            super::set_style(&card, "display", "");
            Timeout::new(delay_ms, move || {
                if filter.borrow().is_current(generation) {
                    super::set_style(&card, "transform", SHOWN_TRANSFORM);
                    super::set_style(&card, "opacity", "1");
                }
            })
            .forget();
        }
        CardTransition::Hide { remove_after_ms, generation, .. } => {
            super::set_style(&card, "transform", HIDDEN_TRANSFORM);
            super::set_style(&card, "opacity", "0");
            Timeout::new(remove_after_ms, move || {
                if filter.borrow().is_current(generation) {
                    super::set_style(&card, "display", "none");
                }
            })
            .forget();
        }
    }
}

fn mount_filters(grid: &Element) {
    let buttons = super::query_all(None, ".filter-btn");
    if buttons.is_empty() {
        return;
    }
    let filter = Rc::new(RefCell::new(GalleryFilter::new()));

    for button in &buttons {
        let buttons = buttons.clone();
        let grid = grid.clone();
        let filter = Rc::clone(&filter);
        let clicked = button.clone();
        super::on(button, "click", move |_| {
            for b in &buttons {
                super::set_class(b, ACTIVE_CLASS, b == &clicked);
            }

            let selected = Filter::parse(clicked.get_attribute("data-filter").as_deref());
            let cards = super::children(&grid);
            let items: Vec<GalleryItem> = cards
                .iter()
                .map(|card| GalleryItem::new(card.get_attribute("data-type").as_deref()))
                .collect();
            let transitions = filter.borrow_mut().apply(&items, &selected);
            log::debug!("gallery filter {selected:?}");

            for (card, transition) in cards.into_iter().zip(transitions) {
                play(card, transition, &filter);
            }
        });
    }
}

fn mount_lightbox(grid: &Element, overlays: &SharedOverlays) {
    let (Some(_), Some(img)) = (
        super::by_id(LIGHTBOX_ID),
        super::by_id(LIGHTBOX_IMG_ID).and_then(|el| el.dyn_into::<HtmlImageElement>().ok()),
    ) else {
        return;
    };
    let overlays = Rc::clone(overlays);
    super::on(grid, "click", move |event| {
        let Some(card) = super::event_element(&event)
            .and_then(|el| el.closest(".view-btn").ok().flatten())
            .and_then(|btn| btn.closest(".project-card").ok().flatten())
        else {
            return;
        };

        let card_img = card
            .query_selector("img")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
            .map(|el| el.src());
        let title = card
            .query_selector("h3")
            .ok()
            .flatten()
            .and_then(|el| el.text_content());
        let view = LightboxView::for_card(card_img.as_deref(), title.as_deref());
        img.set_src(&view.src);
        img.set_alt(&view.alt);

        let mut state = overlays.borrow_mut();
        state.open_lightbox();
        sync(&state);
    });
}

pub fn mount(overlays: &SharedOverlays) {
    let Some(grid) = super::by_id(GRID_ID) else {
        return;
    };
    mount_filters(&grid);
    mount_lightbox(&grid, overlays);
}

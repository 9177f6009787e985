//! Resume modal, project lightbox, mobile menu, and the Escape key.
//!
//! Handlers mutate the shared [`Overlays`] and then call [`sync`], which
//! writes the whole overlay state back to the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::state::nav::{CLOSE_ICON, MENU_ICON, OPEN_CLASS};
use crate::state::overlay::{Overlays, aria_hidden};

pub const RESUME_MODAL_ID: &str = "resume-modal";
pub const OPEN_RESUME_ID: &str = "open-resume";
pub const CLOSE_RESUME_ID: &str = "close-resume";
pub const RESUME_PREVIEW_ID: &str = "resume-preview";
pub const RESUME_FRAME_ID: &str = "resume-preview-frame";
pub const LIGHTBOX_ID: &str = "lightbox";
pub const CLOSE_LIGHTBOX_ID: &str = "close-lightbox";
pub const NAV_ID: &str = "navbar";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";

pub type SharedOverlays = Rc<RefCell<Overlays>>;

pub fn sync(overlays: &Overlays) {
    if let Some(modal) = super::by_id(RESUME_MODAL_ID) {
        let _ = modal.set_attribute("aria-hidden", aria_hidden(overlays.resume.open));
    }
    if let Some(frame) = super::by_id(RESUME_FRAME_ID) {
        super::set_hidden(&frame, !overlays.resume.preview_visible);
    }
    if let Some(lightbox) = super::by_id(LIGHTBOX_ID) {
        let _ = lightbox.set_attribute("aria-hidden", aria_hidden(overlays.lightbox.open));
    }
    if let Some(body) = super::document().and_then(|doc| doc.body()) {
        let _ = body
            .style()
            .set_property("overflow", overlays.scroll_lock().body_overflow());
    }

    let open = overlays.menu.is_open();
    if let Some(nav) = super::by_id(NAV_ID) {
        super::set_class(&nav, OPEN_CLASS, open);
    }
    if let Some(icon) = super::by_id(MENU_TOGGLE_ID).and_then(|t| t.query_selector("i").ok().flatten()) {
        super::set_class(&icon, CLOSE_ICON, open);
        super::set_class(&icon, MENU_ICON, !open);
    }
}

/// Install a click handler on the element with `id` that runs `action` and syncs.
fn on_click<F>(overlays: &SharedOverlays, id: &str, mut action: F)
where
    F: FnMut(&mut Overlays, &web_sys::Event) + 'static,
{
    let Some(el) = super::by_id(id) else {
        return;
    };
    let overlays = Rc::clone(overlays);
    super::on(&el, "click", move |event| {
        let mut state = overlays.borrow_mut();
        action(&mut state, &event);
        sync(&state);
    });
}

pub fn mount(overlays: &SharedOverlays) {
    on_click(overlays, OPEN_RESUME_ID, |state, _| state.open_resume());
    on_click(overlays, CLOSE_RESUME_ID, |state, _| {
        state.close_resume();
    });
    on_click(overlays, RESUME_PREVIEW_ID, |state, event| {
        event.prevent_default();
        state.toggle_preview();
    });
    on_click(overlays, CLOSE_LIGHTBOX_ID, |state, _| {
        state.close_lightbox();
    });

    // Background clicks close an overlay; clicks inside its content do not.
    if let Some(target) = super::by_id(RESUME_MODAL_ID) {
        on_click(overlays, RESUME_MODAL_ID, move |state, event| {
            if super::targets_self(event, &target) {
                state.close_resume();
            }
        });
    }
    if let Some(target) = super::by_id(LIGHTBOX_ID) {
        on_click(overlays, LIGHTBOX_ID, move |state, event| {
            if super::targets_self(event, &target) {
                state.close_lightbox();
            }
        });
    }

    on_click(overlays, MENU_TOGGLE_ID, |state, _| state.menu.toggle());
    for link in super::query_all(None, ".nav-link") {
        let overlays = Rc::clone(overlays);
        super::on(&link, "click", move |_| {
            let mut state = overlays.borrow_mut();
            state.menu.close();
            sync(&state);
        });
    }

    if let Some(doc) = super::document() {
        let overlays = Rc::clone(overlays);
        super::on(&doc, "keydown", move |event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Escape");
            if !is_escape {
                return;
            }
            let mut state = overlays.borrow_mut();
            let closed = state.escape();
            if closed.any() {
                log::debug!("escape closed {closed:?}");
                sync(&state);
            }
        });
    }
}

//! Lazy image loading and broken-image styling.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry};

use crate::state::images::{BROKEN_FILTER, BROKEN_OPACITY, DATA_SRC_ATTR, LazyImages};

/// Slot index stored on each lazily loaded image.
const SLOT_ATTR: &str = "data-lazy-slot";

fn mount_lazy() {
    let images = super::query_all(None, "img[data-src]");
    if images.is_empty() {
        return;
    }

    let mut lazy = LazyImages::new();
    for (slot, img) in images.iter().enumerate() {
        if let Some(src) = img.get_attribute(DATA_SRC_ATTR) {
            lazy.register(slot, src);
            let _ = img.set_attribute(SLOT_ATTR, &slot.to_string());
        }
    }
    let lazy = RefCell::new(lazy);

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let img: Element = entry.target();
                let slot = img
                    .get_attribute(SLOT_ATTR)
                    .and_then(|s| s.parse::<usize>().ok());
                if let Some(src) = slot.and_then(|slot| lazy.borrow_mut().take(slot)) {
                    if let Some(img) = img.dyn_ref::<HtmlImageElement>() {
                        img.set_src(&src);
                    }
                }
                let _ = img.remove_attribute(DATA_SRC_ATTR);
                let _ = img.remove_attribute(SLOT_ATTR);
                observer.unobserve(&img);
            }
        },
    ));

    let Ok(observer) = IntersectionObserver::new(callback.as_ref().unchecked_ref()) else {
        return;
    };
    callback.forget();
    for img in &images {
        observer.observe(img);
    }
}

fn mount_broken() {
    for img in super::query_all(None, "img") {
        let target = img.clone();
        super::on(&img, "error", move |_| {
            super::set_style(&target, "opacity", BROKEN_OPACITY);
            super::set_style(&target, "filter", BROKEN_FILTER);
        });
    }
}

pub fn mount() {
    mount_lazy();
    mount_broken();
}

//! Browser bindings: wire the state machines in [`crate::state`] to the page.
//!
//! Each submodule exposes a `mount` that looks up its elements and installs
//! listeners. A missing element turns its feature into a no-op; DOM call
//! failures are ignored.

pub mod animate;
pub mod boot;
pub mod contact;
pub mod gallery;
pub mod header;
pub mod images;
pub mod overlay;
pub mod reveal;
pub mod theme;
pub mod typing;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// First element matching `selector`.
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// All elements matching `selector` under `root` (the document when `None`).
pub fn query_all(root: Option<&Element>, selector: &str) -> Vec<Element> {
    let list = match root {
        Some(root) => root.query_selector_all(selector),
        None => match document() {
            Some(doc) => doc.query_selector_all(selector),
            None => return Vec::new(),
        },
    };
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Element children of `parent`, in order.
pub fn children(parent: &Element) -> Vec<Element> {
    let list = parent.children();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn on<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));
    let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}

pub fn set_hidden(el: &Element, hidden: bool) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        el.set_hidden(hidden);
    }
}

pub fn set_class(el: &Element, class: &str, present: bool) {
    let _ = el.class_list().toggle_with_force(class, present);
}

/// Element the event was dispatched to, when it is an element.
pub fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Whether the event hit `el` itself rather than one of its descendants.
pub fn targets_self(event: &Event, el: &Element) -> bool {
    event_element(event).is_some_and(|target| &target == el)
}

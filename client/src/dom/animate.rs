//! Frame-driven text tweens.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Element;

use crate::state::tween::Tween;

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or(0.0, |p| p.now())
}

/// Render `tween` into `el`'s text once per animation frame until it ends.
pub fn run_text_tween(el: Element, tween: Tween) {
    let Some(window) = web_sys::window() else {
        el.set_text_content(Some(&tween.sample(f64::INFINITY).text));
        return;
    };

    let started = now_ms();
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();

    *holder.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        let frame = tween.sample(now_ms() - started);
        el.set_text_content(Some(&frame.text));
        if frame.done {
            // Breaks the self-reference so the closure is freed.
            holder_for_cb.borrow_mut().take();
            return;
        }
        if let Some(cb) = holder_for_cb.borrow().as_ref() {
            let _ = window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = holder.borrow().as_ref() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

//! Hero headline typewriter, driven by a chain of timeouts.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Element;

use crate::state::typing::{PHRASES, TypingState};

pub const TYPED_ID: &str = "typed";

/// Running typewriter. Dropping it (or calling [`stop`](Self::stop)) cancels
/// the pending tick.
pub struct TypingAnimator {
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl TypingAnimator {
    /// Render the first tick into `el` now and schedule the rest.
    #[must_use]
    pub fn start(el: Element) -> Self {
        let pending = Rc::new(RefCell::new(None));
        step(el, TypingState::default(), &pending);
        Self { pending }
    }

    pub fn stop(&self) {
        self.pending.borrow_mut().take();
    }

    /// Keep typing for the rest of the page's life.
    pub fn detach(self) {
        std::mem::forget(self);
    }
}

impl Drop for TypingAnimator {
    fn drop(&mut self) {
        self.stop();
    }
}

fn step(el: Element, state: TypingState, pending: &Rc<RefCell<Option<Timeout>>>) {
    let (next, tick) = state.tick(PHRASES);
    el.set_text_content(Some(&tick.text));

    let pending_for_cb = Rc::clone(pending);
    let timeout = Timeout::new(tick.delay_ms, move || {
        step(el, next, &pending_for_cb);
    });
    *pending.borrow_mut() = Some(timeout);
}

pub fn mount() -> Option<TypingAnimator> {
    super::by_id(TYPED_ID).map(TypingAnimator::start)
}

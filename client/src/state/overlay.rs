//! Modal overlays (resume viewer, project lightbox) and the page scroll lock.
//!
//! SCROLL LOCK
//! ===========
//! Body scrolling is disabled while any overlay is open. The lock tracks the
//! set of open overlays and is released only when that set becomes empty, so
//! closing one overlay never unlocks the page under another.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use std::collections::BTreeSet;

use super::nav::MobileMenu;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Overlay {
    ResumeModal,
    Lightbox,
}

#[derive(Debug, Default)]
pub struct ScrollLock {
    holders: BTreeSet<Overlay>,
}

impl ScrollLock {
    pub fn acquire(&mut self, overlay: Overlay) {
        self.holders.insert(overlay);
    }

    pub fn release(&mut self, overlay: Overlay) {
        self.holders.remove(&overlay);
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }

    /// Value for the body's `overflow` style.
    #[must_use]
    pub fn body_overflow(&self) -> &'static str {
        if self.is_locked() { "hidden" } else { "" }
    }
}

/// `aria-hidden` attribute value for an overlay's visibility.
#[must_use]
pub fn aria_hidden(open: bool) -> &'static str {
    if open { "false" } else { "true" }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResumeModal {
    pub open: bool,
    pub preview_visible: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    pub open: bool,
}

/// Which overlays an Escape press closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EscapeOutcome {
    pub resume_closed: bool,
    pub lightbox_closed: bool,
    pub menu_closed: bool,
}

impl EscapeOutcome {
    #[must_use]
    pub fn any(self) -> bool {
        self.resume_closed || self.lightbox_closed || self.menu_closed
    }
}

/// All page-level dismissible UI in one place.
#[derive(Debug, Default)]
pub struct Overlays {
    pub resume: ResumeModal,
    pub lightbox: Lightbox,
    pub menu: MobileMenu,
    lock: ScrollLock,
}

impl Overlays {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.lock
    }

    pub fn open_resume(&mut self) {
        self.resume.open = true;
        self.lock.acquire(Overlay::ResumeModal);
    }

    /// Close the resume modal and hide its preview frame. Returns whether it
    /// was open.
    pub fn close_resume(&mut self) -> bool {
        let was_open = self.resume.open;
        self.resume = ResumeModal::default();
        self.lock.release(Overlay::ResumeModal);
        was_open
    }

    /// Flip the embedded preview frame; independent of the modal's state.
    pub fn toggle_preview(&mut self) -> bool {
        self.resume.preview_visible = !self.resume.preview_visible;
        self.resume.preview_visible
    }

    pub fn open_lightbox(&mut self) {
        self.lightbox.open = true;
        self.lock.acquire(Overlay::Lightbox);
    }

    pub fn close_lightbox(&mut self) -> bool {
        let was_open = self.lightbox.open;
        self.lightbox.open = false;
        self.lock.release(Overlay::Lightbox);
        was_open
    }

    /// Escape key: close whatever is open. A preview frame toggled while the
    /// modal is closed is left as it is.
    pub fn escape(&mut self) -> EscapeOutcome {
        EscapeOutcome {
            resume_closed: self.resume.open && self.close_resume(),
            lightbox_closed: self.close_lightbox(),
            menu_closed: self.menu.close(),
        }
    }
}

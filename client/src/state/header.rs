//! Sticky header and in-page anchor scrolling.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

pub const STICKY_CLASS: &str = "sticky";
/// Scroll offset past which the header gets the sticky class.
pub const STICKY_AFTER_PX: f64 = 100.0;
/// Scroll offset past which scrolling down hides the header.
pub const HIDE_AFTER_PX: f64 = 500.0;
pub const HIDDEN_TRANSFORM: &str = "translateY(-100%)";
pub const SHOWN_TRANSFORM: &str = "translateY(0)";
/// Extra gap left above an anchor target.
pub const ANCHOR_GAP_PX: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderState {
    pub sticky: bool,
    pub hidden: bool,
}

impl HeaderState {
    #[must_use]
    pub fn transform(self) -> &'static str {
        if self.hidden { HIDDEN_TRANSFORM } else { SHOWN_TRANSFORM }
    }
}

/// Remembers the previous scroll offset to tell direction.
#[derive(Clone, Copy, Debug)]
pub struct HeaderTracker {
    last_y: f64,
}

impl HeaderTracker {
    #[must_use]
    pub fn new(initial_y: f64) -> Self {
        Self { last_y: initial_y }
    }

    pub fn on_scroll(&mut self, y: f64) -> HeaderState {
        let state = HeaderState {
            sticky: y > STICKY_AFTER_PX,
            hidden: y > self.last_y && y > HIDE_AFTER_PX,
        };
        self.last_y = y;
        state
    }
}

/// Element id targeted by an in-page link, e.g. `#contact` -> `contact`.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts `target_offset_top` just below the header.
#[must_use]
pub fn anchor_scroll_top(target_offset_top: f64, header_height: f64) -> f64 {
    target_offset_top - header_height - ANCHOR_GAP_PX
}

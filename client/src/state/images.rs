//! Deferred image loading and broken-image styling.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use std::collections::HashMap;

pub const DATA_SRC_ATTR: &str = "data-src";
pub const BROKEN_OPACITY: &str = "0.4";
pub const BROKEN_FILTER: &str = "grayscale(100%)";

/// Real sources of lazily loaded images, keyed by observation slot. Each
/// source is handed out once; later intersections are ignored.
#[derive(Debug, Default)]
pub struct LazyImages {
    pending: HashMap<usize, String>,
}

impl LazyImages {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, slot: usize, src: impl Into<String>) {
        self.pending.insert(slot, src.into());
    }

    /// Source to load for `slot` on first intersection.
    pub fn take(&mut self, slot: usize) -> Option<String> {
        self.pending.remove(&slot)
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

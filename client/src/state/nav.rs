//! Navigation chrome: the collapsible mobile menu and active-link highlighting.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

pub const OPEN_CLASS: &str = "open";
pub const ACTIVE_CLASS: &str = "active";
pub const MENU_ICON: &str = "bx-menu";
pub const CLOSE_ICON: &str = "bx-x";

/// Mobile nav drawer. The toggle icon shows a cross while open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the menu; returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Icon class to show on the toggle control.
    #[must_use]
    pub fn icon(self) -> &'static str {
        if self.open { CLOSE_ICON } else { MENU_ICON }
    }
}

/// Nav link hrefs in document order plus which one is highlighted.
#[derive(Clone, Debug, Default)]
pub struct NavLinks {
    hrefs: Vec<String>,
    active: Option<usize>,
}

impl NavLinks {
    pub fn new<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hrefs: hrefs.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    /// Highlight the link pointing at `#section_id`, clearing every other.
    /// Returns the active state of each link in order.
    pub fn activate_section(&mut self, section_id: &str) -> Vec<bool> {
        let target = format!("#{section_id}");
        self.active = self.hrefs.iter().position(|href| *href == target);
        self.states()
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.hrefs[i].as_str())
    }

    #[must_use]
    pub fn states(&self) -> Vec<bool> {
        (0..self.hrefs.len()).map(|i| self.active == Some(i)).collect()
    }
}

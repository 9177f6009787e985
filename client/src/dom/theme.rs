//! Theme toggle control.

use std::rc::Rc;

use crate::state::theme::{LIGHT_CLASS, Theme, ThemePreference};
use crate::util::storage::LocalStore;

pub const TOGGLE_ID: &str = "theme-toggle";

/// Show `theme` on the page: root class and toggle icon.
pub fn apply(theme: Theme) {
    if let Some(root) = super::document().and_then(|doc| doc.document_element()) {
        super::set_class(&root, LIGHT_CLASS, theme.applies_light_class());
    }
    if let Some(toggle) = super::by_id(TOGGLE_ID) {
        toggle.set_inner_html(theme.icon_markup());
    }
}

/// Theme currently shown, read back from the root element.
pub fn current() -> Theme {
    let light = super::document()
        .and_then(|doc| doc.document_element())
        .is_some_and(|root| root.class_list().contains(LIGHT_CLASS));
    if light { Theme::Light } else { Theme::Dark }
}

pub fn mount() {
    let prefs = Rc::new(ThemePreference::new(LocalStore::new()));
    let initial = prefs.load();
    prefs.save(initial);
    apply(initial);
    log::debug!("theme restored: {}", initial.as_str());

    let Some(toggle) = super::by_id(TOGGLE_ID) else {
        return;
    };
    super::on(&toggle, "click", move |_| {
        let next = prefs.toggle(current());
        apply(next);
    });
}

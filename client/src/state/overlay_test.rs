use super::*;

#[test]
fn aria_hidden_mirrors_visibility() {
    assert_eq!(aria_hidden(true), "false");
    assert_eq!(aria_hidden(false), "true");
}

#[test]
fn opening_resume_locks_scroll() {
    let mut overlays = Overlays::new();
    overlays.open_resume();
    assert!(overlays.resume.open);
    assert!(overlays.scroll_lock().is_locked());
    assert_eq!(overlays.scroll_lock().body_overflow(), "hidden");
}

#[test]
fn closing_resume_hides_preview_and_unlocks() {
    let mut overlays = Overlays::new();
    overlays.open_resume();
    overlays.toggle_preview();
    assert!(overlays.close_resume());
    assert_eq!(overlays.resume, ResumeModal::default());
    assert_eq!(overlays.scroll_lock().body_overflow(), "");
}

#[test]
fn preview_toggles_while_closed() {
    let mut overlays = Overlays::new();
    assert!(overlays.toggle_preview());
    assert!(!overlays.toggle_preview());
    assert!(!overlays.resume.open);
}

#[test]
fn lock_held_until_last_overlay_closes() {
    let mut overlays = Overlays::new();
    overlays.open_resume();
    overlays.open_lightbox();
    overlays.close_lightbox();
    assert!(overlays.scroll_lock().is_locked());
    overlays.close_resume();
    assert!(!overlays.scroll_lock().is_locked());
}

#[test]
fn escape_closes_only_the_open_lightbox() {
    let mut overlays = Overlays::new();
    overlays.open_lightbox();
    let outcome = overlays.escape();
    assert_eq!(
        outcome,
        EscapeOutcome { resume_closed: false, lightbox_closed: true, menu_closed: false }
    );
    assert!(!overlays.scroll_lock().is_locked());
}

#[test]
fn escape_closes_menu_too() {
    let mut overlays = Overlays::new();
    overlays.menu.toggle();
    overlays.open_resume();
    let outcome = overlays.escape();
    assert!(outcome.menu_closed && outcome.resume_closed);
    assert!(!overlays.menu.is_open());
}

#[test]
fn escape_with_nothing_open_is_noop() {
    let mut overlays = Overlays::new();
    assert!(!overlays.escape().any());
}

#[test]
fn closing_twice_reports_false() {
    let mut overlays = Overlays::new();
    overlays.open_lightbox();
    assert!(overlays.close_lightbox());
    assert!(!overlays.close_lightbox());
}

#[test]
fn escape_leaves_preview_toggled_while_modal_closed() {
    let mut overlays = Overlays::new();
    overlays.toggle_preview();
    let outcome = overlays.escape();
    assert!(!outcome.any());
    assert!(overlays.resume.preview_visible);
    // The next preview click hides the frame rather than appearing inert.
    assert!(!overlays.toggle_preview());
}

#[test]
fn escape_hides_preview_of_open_modal() {
    let mut overlays = Overlays::new();
    overlays.open_resume();
    overlays.toggle_preview();
    assert!(overlays.escape().resume_closed);
    assert!(!overlays.resume.preview_visible);
}

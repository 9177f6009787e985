use super::*;

#[test]
fn menu_starts_closed_with_menu_icon() {
    let menu = MobileMenu::default();
    assert!(!menu.is_open());
    assert_eq!(menu.icon(), MENU_ICON);
}

#[test]
fn toggle_swaps_icon() {
    let mut menu = MobileMenu::default();
    menu.toggle();
    assert!(menu.is_open());
    assert_eq!(menu.icon(), CLOSE_ICON);
    menu.toggle();
    assert_eq!(menu.icon(), MENU_ICON);
}

#[test]
fn close_reports_previous_state() {
    let mut menu = MobileMenu::default();
    assert!(!menu.close());
    menu.toggle();
    assert!(menu.close());
    assert!(!menu.is_open());
}

#[test]
fn exactly_one_link_is_active() {
    let mut links = NavLinks::new(["#home", "#about", "#skills"]);
    assert_eq!(links.activate_section("about"), vec![false, true, false]);
    assert_eq!(links.active(), Some("#about"));
    assert_eq!(links.activate_section("skills"), vec![false, false, true]);
}

#[test]
fn unknown_section_clears_all_links() {
    let mut links = NavLinks::new(["#home", "#about"]);
    links.activate_section("home");
    assert_eq!(links.activate_section("footer"), vec![false, false]);
    assert_eq!(links.active(), None);
}

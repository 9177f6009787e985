use super::*;

#[test]
fn source_is_handed_out_once() {
    let mut images = LazyImages::new();
    images.register(0, "img/a.webp");
    images.register(1, "img/b.webp");

    assert_eq!(images.take(0).as_deref(), Some("img/a.webp"));
    assert_eq!(images.take(0), None);
    assert_eq!(images.remaining(), 1);
}

#[test]
fn unknown_slot_yields_nothing() {
    let mut images = LazyImages::new();
    assert_eq!(images.take(7), None);
}

//! Page state machines.
//!
//! DESIGN
//! ======
//! Each interactive feature owns a small state type with explicit
//! transitions. The browser layer reads markup into these types, applies a
//! transition, and writes the result back, so none of the behavior here
//! needs a rendered page to test.

pub mod contact;
pub mod gallery;
pub mod header;
pub mod images;
pub mod nav;
pub mod overlay;
pub mod reveal;
pub mod theme;
pub mod tween;
pub mod typing;

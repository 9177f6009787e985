//! # client
//!
//! Browser behavior for the portfolio site, compiled to WebAssembly.
//!
//! Every interactive feature (theme, typing effect, scroll reveal, project
//! gallery, resume modal, contact form, header chrome) is modelled as plain
//! state in [`state`] so it can be tested natively. The [`dom`] module, built
//! only with the `browser` feature, binds that state to the page markup.

pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "browser")]
pub mod dom;

/// WASM entry point: install logging and wire up the page.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    dom::boot::mount();
}

//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from the state
//! machines so those stay testable without a rendered page.

pub mod particles;
pub mod storage;

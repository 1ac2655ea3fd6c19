//! Utility helpers shared across the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, DOM access, timers)
//! from the state models so the latter stay testable.

pub mod animation;
#[cfg(feature = "browser")]
pub mod dom;
pub mod format;
pub mod storage;

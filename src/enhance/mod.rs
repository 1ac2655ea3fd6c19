//! Enhancements over the server-rendered page.
//!
//! Each submodule finds its markup, seeds a state model from it and keeps an
//! effect that renders the model back. Missing optional markup is a no-op.

pub mod data;
pub mod entry;
pub mod search;
pub mod sort;
pub mod theme;

//! Leptos components rendered by the dashboard itself.
//!
//! Everything else on the page is server-rendered and only enhanced.

pub mod toast_layer;

//! # offer-dashboard
//!
//! Leptos + WASM enhancement layer for the server-rendered offers dashboard.
//!
//! The server renders the whole page; this crate adds theme switching,
//! freshness timestamps, expandable rows, search, sort indicators, entry
//! animation and toast notifications on top of that markup.
//!
//! `config`, `state` and `util` are plain Rust and test natively. The
//! `browser` feature adds the DOM glue, the root component and the JS
//! exports, and mounts everything on module start.

pub mod config;
pub mod state;
pub mod util;

#[cfg(feature = "browser")]
pub mod app;
#[cfg(feature = "browser")]
pub mod bridge;
#[cfg(feature = "browser")]
pub mod components;
#[cfg(feature = "browser")]
pub mod enhance;

#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use app::DashboardApp;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let (config, config_error) = match app::read_config() {
        Ok(config) => (config, None),
        Err(err) => (config::DashboardConfig::default(), Some(err)),
    };
    let level = if config.debug { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    if let Some(err) = config_error {
        log::warn!("dashboard config ignored, using defaults: {err}");
    }

    mount_to_body(move || view! { <DashboardApp config/> });
}

//! Page-level functions exported to JavaScript.
//!
//! Inline handlers in the server templates call these the way they used to
//! call the old `DashboardUtils` helpers. Everything except `formatNumber`
//! acts on the mounted dashboard and is a no-op before mount.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::components::toast_layer::Notifier;
use crate::enhance::{data::DataController, theme::ThemeController};
use crate::state::toast::ToastVariant;
use crate::util::format;

/// Controllers of the mounted dashboard.
#[derive(Clone, Copy)]
pub struct Dashboard {
    pub theme: ThemeController,
    pub data: DataController,
    pub notifier: Notifier,
}

thread_local! {
    static MOUNTED: RefCell<Option<Dashboard>> = const { RefCell::new(None) };
}

/// Make `dashboard` the target of every exported call.
pub fn register(dashboard: Dashboard) {
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(dashboard));
}

fn with_mounted<R>(call: &str, f: impl FnOnce(Dashboard) -> R) -> Option<R> {
    let mounted = MOUNTED.with(|slot| *slot.borrow());
    if mounted.is_none() {
        log::debug!("{call} called before the dashboard mounted");
    }
    mounted.map(f)
}

#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number(n: f64) -> String {
    format::format_number(n)
}

/// `variant` is one of `info`, `success`, `warning`, `error`; default `info`.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: String, variant: Option<String>) {
    let variant = variant.as_deref().map_or_else(ToastVariant::default, ToastVariant::parse);
    with_mounted("showToast", |d| d.notifier.show_toast(message, variant));
}

#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: String) {
    with_mounted("copyToClipboard", |d| d.notifier.copy_to_clipboard(text));
}

/// Returns the theme now in effect, or `undefined` when nothing is mounted.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Option<String> {
    with_mounted("toggleTheme", |d| d.theme.toggle_theme()).flatten().map(|t| t.as_str().to_owned())
}

#[wasm_bindgen(js_name = applyTheme)]
pub fn apply_theme(raw: String) -> Option<String> {
    with_mounted("applyTheme", |d| d.theme.apply_theme(&raw)).flatten().map(|t| t.as_str().to_owned())
}

#[wasm_bindgen(js_name = currentTheme)]
pub fn current_theme() -> Option<String> {
    with_mounted("currentTheme", |d| d.theme.current()).flatten().map(|t| t.as_str().to_owned())
}

/// Re-render the freshness timestamps now instead of at the next tick.
#[wasm_bindgen(js_name = refreshTimestamp)]
pub fn refresh_timestamp() {
    with_mounted("refreshTimestamp", |d| d.data.refresh());
}

//! Root component: installs every enhancement and renders the toast layer.

use leptos::prelude::*;

use crate::bridge::{self, Dashboard};
use crate::components::toast_layer::{Notifier, ToastLayer};
use crate::config::{CONFIG_ELEMENT_ID, ConfigError, DashboardConfig};
use crate::enhance::{data::DataController, entry, search, sort, theme::ThemeController};
use crate::state::theme::Theme;
use crate::state::toast::ToastStack;
use crate::util::dom;

/// Load the optional `#dashboard-config` JSON block.
///
/// An absent block, or a document that cannot be queried yet, yields the
/// defaults.
///
/// # Errors
///
/// Returns [`ConfigError`] when the block is present but unusable.
pub fn read_config() -> Result<DashboardConfig, ConfigError> {
    let raw = dom::by_id(CONFIG_ELEMENT_ID).ok().flatten().and_then(|el| el.text_content()).unwrap_or_default();
    DashboardConfig::from_json(&raw)
}

/// Root application component.
///
/// Provides the controllers as context and registers them with the JS bridge.
#[component]
pub fn DashboardApp(config: DashboardConfig) -> impl IntoView {
    let notifier = Notifier::new(RwSignal::new(ToastStack::default()), config.toast, config.labels.clone());
    let theme = ThemeController::install(&config);
    let data = DataController::install(&config);

    match entry::install(config.entry_stagger_ms) {
        Ok(count) => log::debug!("entry animation scheduled for {count} elements"),
        Err(err) => log::warn!("entry animation skipped: {err}"),
    }
    if let Err(err) = search::install() {
        log::warn!("search not wired: {err}");
    }
    if let Err(err) = sort::install() {
        log::warn!("sort indicators not wired: {err}");
    }

    provide_context(notifier);
    provide_context(theme);
    provide_context(data);
    bridge::register(Dashboard { theme, data, notifier });

    log::info!("dashboard initialized (theme: {})", theme.current().map_or("unknown", Theme::as_str));

    view! { <ToastLayer toasts=notifier.toasts()/> }
}

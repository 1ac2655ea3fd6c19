//! Theme toggle wiring: body class, toggle button, OS preference listener.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, MediaQueryList, MediaQueryListEvent};

use crate::config::DashboardConfig;
use crate::state::theme::{DARK_MODE_CLASS, Theme, ThemeManager, ThemeSignal, ToggleControl};
use crate::util::dom::{self, DomError};
use crate::util::storage::BrowserStore;

pub const TOGGLE_ID: &str = "theme-toggle";
const COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
const BODY_TRANSITION: &str = "all 0.3s ease";

/// Reactive theme state bound to `localStorage`.
#[derive(Clone, Copy)]
pub struct ThemeController {
    manager: ThemeSignal<BrowserStore>,
    transition_ms: u32,
}

impl ThemeController {
    /// Resolve the starting theme, render it and attach listeners.
    pub fn install(config: &DashboardConfig) -> Self {
        let query = color_scheme_query();
        let prefers_dark = query.as_ref().is_some_and(MediaQueryList::matches);
        let manager = ThemeSignal::new(ThemeManager::initialize(BrowserStore, config.storage_key.clone(), prefers_dark));

        let labels = config.labels.clone();
        Effect::new(move || {
            let Some((theme, control)) = manager.view(&labels) else {
                return;
            };
            if let Err(err) = render(theme, &control) {
                log::warn!("theme render skipped: {err}");
            }
        });

        let controller = Self { manager, transition_ms: config.theme_transition_ms };
        if let Err(err) = controller.wire_toggle() {
            log::warn!("theme toggle not wired: {err}");
        }
        if let Some(query) = query {
            if let Err(err) = controller.wire_os_listener(&query) {
                log::warn!("color-scheme listener not wired: {err}");
            }
        }
        controller
    }

    /// Theme in effect, `None` once the dashboard is torn down.
    #[must_use]
    pub fn current(self) -> Option<Theme> {
        self.manager.current()
    }

    /// Apply a raw theme name; anything but `"dark"` becomes light.
    pub fn apply_theme(self, raw: &str) -> Option<Theme> {
        let theme = self.manager.apply_theme(raw)?;
        log::debug!("theme applied: {}", theme.as_str());
        Some(theme)
    }

    /// Flip the theme with a short whole-page transition.
    pub fn toggle_theme(self) -> Option<Theme> {
        let theme = self.manager.toggle_theme()?;
        log::debug!("theme toggled to {}", theme.as_str());
        if let Ok(body) = dom::body() {
            dom::set_style(&body, "transition", BODY_TRANSITION);
            Timeout::new(self.transition_ms, move || dom::set_style(&body, "transition", "")).forget();
        }
        Some(theme)
    }

    fn wire_toggle(self) -> Result<(), DomError> {
        let Some(button) = dom::by_id(TOGGLE_ID)? else {
            return Ok(());
        };
        dom::listen(&button, "click", move |_| {
            self.toggle_theme();
        })
    }

    fn wire_os_listener(self, query: &MediaQueryList) -> Result<(), DomError> {
        let manager = self.manager;
        dom::listen(query, "change", move |event: Event| {
            let prefers_dark = event.dyn_ref::<MediaQueryListEvent>().is_some_and(MediaQueryListEvent::matches);
            let applied = manager.on_os_change(prefers_dark);
            if let Some(theme) = applied {
                log::debug!("theme follows OS preference: {}", theme.as_str());
            }
        })
    }
}

fn color_scheme_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(COLOR_SCHEME_QUERY).ok().flatten()
}

fn render(theme: Theme, control: &ToggleControl) -> Result<(), DomError> {
    let body = dom::body()?;
    if theme.is_dark() {
        body.class_list().add_1(DARK_MODE_CLASS)?;
    } else {
        body.class_list().remove_1(DARK_MODE_CLASS)?;
    }

    let Some(button) = dom::by_id(TOGGLE_ID)? else {
        return Ok(());
    };
    if let Some(icon) = button.query_selector("i")? {
        icon.set_class_name(control.icon_class);
    }
    if let Some(label) = button.query_selector("span")? {
        label.set_text_content(Some(&control.label));
    }
    Ok(())
}

//! Light/dark theme state and preference resolution.
//!
//! DESIGN
//! ======
//! Precedence is stored preference, then OS preference, then light. Every
//! applied theme is written back to the store, so once anything has been
//! applied the OS listener stops having an effect until the key is cleared.

use leptos::prelude::*;

use crate::config::Labels;
use crate::util::storage::PreferenceStore;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Class toggled on `<body>` while dark mode is active.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Presentation mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Normalize a raw preference: only `"dark"` is dark.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }

    /// Theme implied by the OS `prefers-color-scheme: dark` query.
    #[must_use]
    pub fn from_os(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// What the theme toggle button should display.
///
/// The control always offers the mode the user would switch *to*.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleControl {
    pub icon_class: &'static str,
    pub label: String,
}

impl ToggleControl {
    #[must_use]
    pub fn for_theme(theme: Theme, labels: &Labels) -> Self {
        match theme {
            Theme::Dark => Self { icon_class: "fas fa-sun", label: labels.switch_to_light.clone() },
            Theme::Light => Self { icon_class: "fas fa-moon", label: labels.switch_to_dark.clone() },
        }
    }
}

/// Theme state bound to a preference store.
#[derive(Clone, Debug)]
pub struct ThemeManager<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeManager<S> {
    /// Resolve and apply the starting theme.
    ///
    /// The resolved value is persisted even when it only came from the OS.
    pub fn initialize(store: S, key: impl Into<String>, os_prefers_dark: bool) -> Self {
        let key = key.into();
        let current = store.get(&key).map_or_else(|| Theme::from_os(os_prefers_dark), |raw| Theme::parse(&raw));
        let mut manager = Self { store, key, current };
        manager.apply(current);
        manager
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable store access, for callers that need to clear the key.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Apply a raw theme name; anything but `"dark"` becomes light.
    pub fn apply_theme(&mut self, raw: &str) -> Theme {
        self.apply(Theme::parse(raw))
    }

    /// Apply and persist `theme`.
    pub fn apply(&mut self, theme: Theme) -> Theme {
        self.current = theme;
        self.store.set(&self.key, theme.as_str());
        theme
    }

    /// Switch to the opposite theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.apply(self.current.opposite())
    }

    /// Whether an explicit preference is currently stored.
    #[must_use]
    pub fn has_stored_preference(&self) -> bool {
        self.store.get(&self.key).is_some()
    }

    /// React to an OS color-scheme change.
    ///
    /// Returns the applied theme, or `None` when a stored preference wins.
    pub fn on_os_change(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.has_stored_preference() {
            return None;
        }
        Some(self.apply(Theme::from_os(prefers_dark)))
    }

    #[must_use]
    pub fn toggle_control(&self, labels: &Labels) -> ToggleControl {
        ToggleControl::for_theme(self.current, labels)
    }
}

/// Shared handle to a [`ThemeManager`] held in a reactive signal.
///
/// Every accessor yields `None` once the owning reactive scope is gone.
pub struct ThemeSignal<S: 'static> {
    manager: RwSignal<ThemeManager<S>>,
}

impl<S: 'static> Clone for ThemeSignal<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for ThemeSignal<S> {}

impl<S: PreferenceStore + Send + Sync + 'static> ThemeSignal<S> {
    pub fn new(manager: ThemeManager<S>) -> Self {
        Self { manager: RwSignal::new(manager) }
    }

    #[must_use]
    pub fn current(self) -> Option<Theme> {
        self.manager.try_with_untracked(ThemeManager::current)
    }

    /// Current theme and toggle control, tracked.
    #[must_use]
    pub fn view(self, labels: &Labels) -> Option<(Theme, ToggleControl)> {
        self.manager.try_with(|m| (m.current(), m.toggle_control(labels)))
    }

    pub fn apply_theme(self, raw: &str) -> Option<Theme> {
        self.manager.try_update(|m| m.apply_theme(raw))
    }

    pub fn toggle_theme(self) -> Option<Theme> {
        self.manager.try_update(ThemeManager::toggle_theme)
    }

    pub fn on_os_change(self, prefers_dark: bool) -> Option<Theme> {
        self.manager.try_update(|m| m.on_os_change(prefers_dark)).flatten()
    }

    /// Drop the underlying signal.
    pub fn dispose(self) {
        self.manager.dispose();
    }
}

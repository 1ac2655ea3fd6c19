//! Dashboard configuration embedded in the served page.
//!
//! The server may render a `<script type="application/json"
//! id="dashboard-config">` block; every field is optional and falls back to
//! the defaults below, which reproduce the stock pt-BR dashboard.

use serde::Deserialize;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_REFRESH_INTERVAL_MS: u32 = 30_000;
pub const DEFAULT_THEME_TRANSITION_MS: u32 = 300;
pub const DEFAULT_ENTRY_STAGGER_MS: u32 = 100;
pub const DEFAULT_TOAST_ENTER_DELAY_MS: u32 = 100;
pub const DEFAULT_TOAST_VISIBLE_MS: u32 = 3_000;
pub const DEFAULT_TOAST_EXIT_MS: u32 = 300;

/// Id of the JSON script element the config is read from.
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Error returned by [`DashboardConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config block is not valid JSON for [`DashboardConfig`].
    #[error("failed to parse dashboard config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but holds an unusable value.
    #[error("invalid dashboard config: {0}")]
    Invalid(String),
}

/// Toast choreography, in milliseconds relative to the previous step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToastTiming {
    /// Delay between insertion and the slide-in.
    pub enter_delay_ms: u32,
    /// Time from insertion until the slide-out starts.
    pub visible_ms: u32,
    /// Slide-out duration; the node is removed when it elapses.
    pub exit_ms: u32,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            enter_delay_ms: DEFAULT_TOAST_ENTER_DELAY_MS,
            visible_ms: DEFAULT_TOAST_VISIBLE_MS,
            exit_ms: DEFAULT_TOAST_EXIT_MS,
        }
    }
}

impl ToastTiming {
    /// Total time a toast spends in the document.
    #[must_use]
    pub fn lifetime_ms(&self) -> u32 {
        self.visible_ms.saturating_add(self.exit_ms)
    }
}

/// User-facing strings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Toggle label shown while dark mode is active.
    pub switch_to_light: String,
    /// Toggle label shown while light mode is active.
    pub switch_to_dark: String,
    pub last_update_prefix: String,
    pub copy_succeeded: String,
    pub copy_failed: String,
    pub store: String,
    pub price: String,
    pub posted_at: String,
    pub source: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            switch_to_light: "Modo Claro".to_owned(),
            switch_to_dark: "Modo Escuro".to_owned(),
            last_update_prefix: "Última Atualização: ".to_owned(),
            copy_succeeded: "Copiado para clipboard!".to_owned(),
            copy_failed: "Erro ao copiar".to_owned(),
            store: "Loja".to_owned(),
            price: "Preço".to_owned(),
            posted_at: "Data de Postagem".to_owned(),
            source: "Fonte".to_owned(),
        }
    }
}

/// Complete dashboard configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Local-storage key holding the explicit theme preference.
    pub storage_key: String,
    pub refresh_interval_ms: u32,
    pub theme_transition_ms: u32,
    pub entry_stagger_ms: u32,
    pub toast: ToastTiming,
    pub labels: Labels,
    /// Raise console logging from `Info` to `Debug`.
    pub debug: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            theme_transition_ms: DEFAULT_THEME_TRANSITION_MS,
            entry_stagger_ms: DEFAULT_ENTRY_STAGGER_MS,
            toast: ToastTiming::default(),
            labels: Labels::default(),
            debug: false,
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a config block.
    ///
    /// Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for values the dashboard cannot run with.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the page.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty".into()));
        }
        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::Invalid("refresh_interval_ms must be positive".into()));
        }
        if self.toast.visible_ms == 0 {
            return Err(ConfigError::Invalid("toast.visible_ms must be positive".into()));
        }
        if self.toast.enter_delay_ms >= self.toast.visible_ms {
            return Err(ConfigError::Invalid(format!(
                "toast.enter_delay_ms ({}) must be shorter than toast.visible_ms ({})",
                self.toast.enter_delay_ms, self.toast.visible_ms
            )));
        }
        Ok(())
    }
}

//! Toast notification stack.
//!
//! DESIGN
//! ======
//! Each toast walks `Entering -> Shown -> Leaving -> removed`. [`schedule`]
//! lists those steps with their delays from creation; the browser layer
//! arms one timer per step and applies it with [`ToastStack::apply`].
//! Toasts share one fixed position and overlap when concurrent.

use crate::config::ToastTiming;

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual style, rendered as the `toast-<variant>` class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToastVariant {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastVariant {
    /// Parse a variant name, falling back to `Info`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn class_name(self) -> String {
        format!("toast toast-{}", self.as_str())
    }
}

/// Where a toast is in its slide-in/slide-out cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    /// Inserted off-screen.
    Entering,
    Shown,
    Leaving,
}

impl ToastPhase {
    /// CSS transform for this phase.
    #[must_use]
    pub fn transform(self) -> &'static str {
        match self {
            Self::Shown => "translateX(0)",
            Self::Entering | Self::Leaving => "translateX(100%)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub variant: ToastVariant,
    pub phase: ToastPhase,
}

/// Live toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastStack {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastStack {
    /// Insert a new toast and return its id.
    pub fn push(&mut self, message: impl Into<String>, variant: ToastVariant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, message: message.into(), variant, phase: ToastPhase::Entering });
        id
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Move a toast to `phase`; unknown ids are ignored.
    pub fn set_phase(&mut self, id: u64, phase: ToastPhase) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.phase = phase;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Apply one lifecycle step to toast `id`.
    pub fn apply(&mut self, id: u64, step: ToastStep) {
        match step {
            ToastStep::Show => self.set_phase(id, ToastPhase::Shown),
            ToastStep::Hide => self.set_phase(id, ToastPhase::Leaving),
            ToastStep::Remove => self.remove(id),
        }
    }
}

/// One timed transition in a toast's life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastStep {
    /// Slide in.
    Show,
    /// Slide out.
    Hide,
    Remove,
}

/// Lifecycle steps with their delay in milliseconds after creation.
#[must_use]
pub fn schedule(timing: &ToastTiming) -> [(u32, ToastStep); 3] {
    [
        (timing.enter_delay_ms, ToastStep::Show),
        (timing.visible_ms, ToastStep::Hide),
        (timing.lifetime_ms(), ToastStep::Remove),
    ]
}

//! Toast notifications and the clipboard helper that reports through them.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`Notifier`] owns the toast stack signal and drives each toast's
//! choreography with timers; [`ToastLayer`] renders the stack. Every toast
//! sits at the same fixed corner, so concurrent toasts overlap.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::config::{Labels, ToastTiming};
use crate::state::toast::{ToastPhase, ToastStack, ToastVariant, schedule};
use crate::util::dom::{self, DomError};

const TOAST_BASE_STYLE: &str = "position: fixed; top: 20px; right: 20px; \
    background: var(--accent-color); color: white; padding: 1rem 1.5rem; \
    border-radius: 8px; box-shadow: var(--shadow); z-index: 1000; \
    transition: transform 0.3s ease;";

/// Handle for raising toasts and copying text.
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: RwSignal<ToastStack>,
    timing: ToastTiming,
    labels: StoredValue<Labels>,
}

impl Notifier {
    pub fn new(toasts: RwSignal<ToastStack>, timing: ToastTiming, labels: Labels) -> Self {
        Self { toasts, timing, labels: StoredValue::new(labels) }
    }

    #[must_use]
    pub fn toasts(self) -> RwSignal<ToastStack> {
        self.toasts
    }

    /// Insert a toast and arm one timer per lifecycle step.
    pub fn show_toast(self, message: impl Into<String>, variant: ToastVariant) -> Option<u64> {
        let message = message.into();
        log::debug!("toast [{}]: {message}", variant.as_str());
        let id = self.toasts.try_update(|stack| stack.push(message, variant))?;

        let toasts = self.toasts;
        for (delay_ms, step) in schedule(&self.timing) {
            Timeout::new(delay_ms, move || toasts.update(|stack| stack.apply(id, step))).forget();
        }
        Some(id)
    }

    /// Write `text` to the OS clipboard and report the outcome as a toast.
    pub fn copy_to_clipboard(self, text: String) {
        leptos::task::spawn_local(async move {
            let (message, variant) = match write_clipboard(&text).await {
                Ok(()) => (self.labels.with_value(|l| l.copy_succeeded.clone()), ToastVariant::Success),
                Err(err) => {
                    log::debug!("clipboard write failed: {err}");
                    (self.labels.with_value(|l| l.copy_failed.clone()), ToastVariant::Error)
                }
            };
            self.show_toast(message, variant);
        });
    }
}

async fn write_clipboard(text: &str) -> Result<(), DomError> {
    let navigator = dom::window()?.navigator();
    // `navigator.clipboard` is undefined outside secure contexts.
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(DomError::Js("clipboard API unavailable".into()));
    }
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into::<js_sys::Function>()?;
    let promise = write_text.call1(&clipboard, &JsValue::from_str(text))?.dyn_into::<js_sys::Promise>()?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// Renders every live toast.
#[component]
pub fn ToastLayer(toasts: RwSignal<ToastStack>) -> impl IntoView {
    view! {
        <div class="toast-layer">
            <For
                each=move || toasts.with(|stack| stack.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let style = move || {
                        let phase = toasts.with(|stack| stack.get(id).map_or(ToastPhase::Leaving, |t| t.phase));
                        format!("{TOAST_BASE_STYLE} transform: {};", phase.transform())
                    };
                    view! {
                        <div class=toast.variant.class_name() style=style>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

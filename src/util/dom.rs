//! Thin `web-sys` helpers for the server-rendered document.
//!
//! ERROR HANDLING
//! ==============
//! Missing window/document/body are errors; a missing *optional* element is
//! `Ok(None)` and callers skip it.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

/// Failure talking to the DOM.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("browser window is unavailable")]
    NoWindow,
    #[error("document is unavailable")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    /// A DOM call threw; carries the JS error description.
    #[error("dom call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// # Errors
///
/// [`DomError::NoWindow`] outside a browser window context.
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// # Errors
///
/// [`DomError::NoWindow`] / [`DomError::NoDocument`].
pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// # Errors
///
/// [`DomError::NoBody`] when the document has no `<body>` yet.
pub fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}

/// First element matching `selector`, if any.
///
/// # Errors
///
/// Propagates document lookup failures and invalid selectors.
pub fn query(selector: &str) -> Result<Option<Element>, DomError> {
    Ok(document()?.query_selector(selector)?)
}

/// All elements matching `selector`, in document order.
///
/// # Errors
///
/// Propagates document lookup failures and invalid selectors.
pub fn query_all(selector: &str) -> Result<Vec<Element>, DomError> {
    let list = document()?.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Element with `id`, if any.
///
/// # Errors
///
/// Propagates document lookup failures.
pub fn by_id(id: &str) -> Result<Option<Element>, DomError> {
    Ok(document()?.get_element_by_id(id))
}

/// Set (or clear, with `""`) one inline style property.
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}

/// Attach a listener for the lifetime of the page.
///
/// # Errors
///
/// [`DomError::Js`] if the target rejects the listener.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

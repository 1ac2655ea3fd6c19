//! Live search over the offer table.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::state::rows::{DETAILS_ROW_CLASS, data_row_selector};
use crate::state::table::SearchFilter;
use crate::util::dom::{self, DomError};

pub const SEARCH_INPUT_ID: &str = "search-input";

/// Wire `#search-input`, if the page has one.
///
/// # Errors
///
/// Propagates DOM lookup and listener failures.
pub fn install() -> Result<(), DomError> {
    let Some(input) = dom::by_id(SEARCH_INPUT_ID)? else {
        return Ok(());
    };
    let filter = RwSignal::new(SearchFilter::default());

    Effect::new(move || {
        let result = filter.with(apply_filter);
        if let Err(err) = result {
            log::warn!("search filter not applied: {err}");
        }
    });

    let field = input.clone();
    dom::listen(&input, "input", move |_| {
        let raw = field.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::value).unwrap_or_default();
        filter.set(SearchFilter::new(&raw));
    })
}

fn apply_filter(filter: &SearchFilter) -> Result<(), DomError> {
    for row in dom::query_all(&data_row_selector())? {
        let text = row.text_content().unwrap_or_default();
        let display = if filter.matches(&text) { "" } else { "none" };
        dom::set_style(&row, "display", display);
        if let Some(details) = details_row_of(&row) {
            dom::set_style(&details, "display", display);
        }
    }
    Ok(())
}

fn details_row_of(row: &Element) -> Option<Element> {
    row.next_element_sibling().filter(|next| next.class_list().contains(DETAILS_ROW_CLASS))
}

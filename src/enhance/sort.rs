//! Sort indicators on sortable headers. Rows are never reordered.

use leptos::prelude::*;
use web_sys::Element;

use crate::state::table::{SortHeader, SortOrder, SortState};
use crate::util::dom::{self, DomError};

pub const SORTABLE_HEADER_SELECTOR: &str = ".table th[data-sortable]";

/// Seed indicator state from the rendered headers and wire their clicks.
///
/// # Errors
///
/// Propagates DOM lookup and listener failures.
pub fn install() -> Result<(), DomError> {
    let elements = dom::query_all(SORTABLE_HEADER_SELECTOR)?;
    if elements.is_empty() {
        return Ok(());
    }
    let headers = elements
        .iter()
        .map(|th| SortHeader::from_attributes(th.get_attribute("data-column"), th.get_attribute("data-order").as_deref()))
        .collect();
    let state = RwSignal::new(SortState::new(headers));

    for (index, th) in elements.iter().enumerate() {
        dom::listen(th, "click", move |_| {
            let clicked = state.try_update(|s| {
                let order = s.click(index)?;
                Some((s.headers()[index].column_name().to_owned(), order))
            });
            if let Some(Some((column, order))) = clicked {
                log::info!("Sorting by {column} in {} order", order.as_str());
            }
        })?;
    }

    Effect::new(move || {
        let orders = state.with(|s| s.headers().iter().map(|h| h.order).collect::<Vec<_>>());
        for (th, order) in elements.iter().zip(orders) {
            if let Err(err) = render_indicator(th, order) {
                log::warn!("sort indicator not rendered: {err}");
            }
        }
    });
    Ok(())
}

fn render_indicator(th: &Element, order: Option<SortOrder>) -> Result<(), DomError> {
    let classes = th.class_list();
    classes.remove_2(SortOrder::Asc.class_name(), SortOrder::Desc.class_name())?;
    match order {
        Some(order) => {
            classes.add_1(order.class_name())?;
            th.set_attribute("data-order", order.as_str())?;
        }
        None => th.remove_attribute("data-order")?,
    }
    Ok(())
}

//! Freshness timestamps and offer-row interactions.
//!
//! Rows are wired once, over the rows present at start-up. Rows the server
//! or another script adds later get neither hover nor click handling.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlTableCellElement, HtmlTableRowElement};

use crate::config::{DashboardConfig, Labels};
use crate::state::freshness::{FreshnessText, LAST_UPDATE_SELECTOR, LAST_UPDATE_SUMMARY_SELECTOR, TODAY_ELEMENT_ID};
use crate::state::rows::{
    DETAILS_ROW_CLASS, DetailsPanel, ROW_SELECTOR, RowId, RowToggle, RowsState, is_interactive_tag,
};
use crate::util::dom::{self, DomError};
use crate::util::format::LocalStamp;

const ROW_HOVER_TRANSITION: &str = "all 0.2s ease";

/// Freshness clock plus row expansion state.
#[derive(Clone, Copy)]
pub struct DataController {
    now: RwSignal<LocalStamp>,
    rows: RwSignal<RowsState>,
}

impl DataController {
    /// Render the timestamp, start the refresh interval and wire rows.
    pub fn install(config: &DashboardConfig) -> Self {
        let now = RwSignal::new(LocalStamp::now());
        let labels = config.labels.clone();
        Effect::new(move || {
            let text = now.with(|stamp| FreshnessText::render(stamp, &labels));
            if let Err(err) = render_timestamp(&text) {
                log::warn!("timestamp render skipped: {err}");
            }
        });
        Interval::new(config.refresh_interval_ms, move || now.set(LocalStamp::now())).forget();

        let controller = Self { now, rows: RwSignal::new(RowsState::default()) };
        match row_elements() {
            Ok(elements) => {
                if let Err(err) = controller.wire_rows(&elements) {
                    log::warn!("row interactions not wired: {err}");
                }
                render_details_rows(elements, controller.rows, config.labels.clone());
            }
            Err(err) => log::warn!("offer rows unavailable: {err}"),
        }
        controller
    }

    /// Re-read the clock immediately.
    pub fn refresh(self) {
        self.now.set(LocalStamp::now());
    }

    /// Expand or collapse one row's details.
    pub fn toggle_row_details(self, row: RowId) -> Option<RowToggle> {
        let outcome = self.rows.try_update(|state| state.toggle_row_details(row));
        if let Some(outcome) = outcome {
            log::debug!("row {} {:?}", row.0, outcome);
        }
        outcome
    }

    fn wire_rows(self, elements: &[HtmlTableRowElement]) -> Result<(), DomError> {
        for (index, row) in elements.iter().enumerate() {
            let hovered = row.clone();
            dom::listen(row, "mouseenter", move |_| dom::set_style(&hovered, "transition", ROW_HOVER_TRANSITION))?;
            dom::listen(row, "click", move |event: Event| {
                let on_control = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .is_some_and(|el| is_interactive_tag(&el.tag_name()));
                if !on_control {
                    self.toggle_row_details(RowId(index));
                }
            })?;
        }
        Ok(())
    }
}

fn render_timestamp(text: &FreshnessText) -> Result<(), DomError> {
    if let Some(el) = dom::query(LAST_UPDATE_SELECTOR)? {
        el.set_text_content(Some(&text.last_update));
    }
    if let Some(el) = dom::query(LAST_UPDATE_SUMMARY_SELECTOR)? {
        el.set_text_content(Some(&text.summary));
    }
    if let Some(el) = dom::by_id(TODAY_ELEMENT_ID)? {
        el.set_text_content(Some(&text.today));
    }
    Ok(())
}

fn row_elements() -> Result<Vec<HtmlTableRowElement>, DomError> {
    Ok(dom::query_all(ROW_SELECTOR)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlTableRowElement>().ok())
        .collect())
}

/// Keep one details row in the document per expanded id.
fn render_details_rows(elements: Vec<HtmlTableRowElement>, rows: RwSignal<RowsState>, labels: Labels) {
    let rendered: Rc<RefCell<HashMap<RowId, Element>>> = Rc::default();
    Effect::new(move || {
        let expanded = rows.with(|state| state.expanded().collect::<BTreeSet<_>>());
        let mut rendered = rendered.borrow_mut();
        rendered.retain(|id, details| {
            let keep = expanded.contains(id);
            if !keep {
                details.remove();
            }
            keep
        });
        for id in expanded {
            if rendered.contains_key(&id) {
                continue;
            }
            let Some(row) = elements.get(id.0) else {
                continue;
            };
            match insert_details_row(row, id, &labels) {
                Ok(details) => {
                    rendered.insert(id, details);
                }
                Err(err) => log::warn!("details row {} not rendered: {err}", id.0),
            }
        }
    });
}

fn insert_details_row(row: &HtmlTableRowElement, id: RowId, labels: &Labels) -> Result<Element, DomError> {
    let document = dom::document()?;
    let cells = row.cells();
    let texts = (0..cells.length())
        .filter_map(|i| cells.item(i))
        .map(|cell| cell.text_content().unwrap_or_default())
        .collect::<Vec<_>>();
    let panel = DetailsPanel::from_cells(&texts);

    let details = document.create_element("tr")?;
    details.set_class_name(DETAILS_ROW_CLASS);
    details.set_attribute("data-details-for", &id.0.to_string())?;
    dom::set_style(&details, "background-color", "var(--bg-secondary)");

    let cell = document.create_element("td")?;
    if let Some(td) = cell.dyn_ref::<HtmlTableCellElement>() {
        td.set_col_span(u32::try_from(texts.len()).unwrap_or(1).max(1));
    }
    dom::set_style(&cell, "padding", "1rem");

    let content = document.create_element("div")?;
    content.set_class_name("details-content");

    let heading = document.create_element("h4")?;
    heading.set_attribute("style", "margin-bottom: 0.5rem; color: var(--accent-color);")?;
    heading.set_text_content(Some(&panel.title));
    content.append_child(&heading)?;

    let grid = document.create_element("div")?;
    grid.set_attribute(
        "style",
        "display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1rem;",
    )?;
    for group in panel.groups(labels) {
        let column = document.create_element("div")?;
        for (i, field) in group.iter().enumerate() {
            if i > 0 {
                let br = document.create_element("br")?;
                column.append_child(&br)?;
            }
            let label = document.create_element("strong")?;
            label.set_text_content(Some(&format!("{}:", field.label)));
            column.append_child(&label)?;
            column.append_with_str_1(&format!(" {}", field.value))?;
        }
        grid.append_child(&column)?;
    }
    content.append_child(&grid)?;
    cell.append_child(&content)?;
    details.append_child(&cell)?;

    let parent = row.parent_node().ok_or_else(|| DomError::Js("offer row is detached".into()))?;
    parent.insert_before(&details, row.next_sibling().as_ref())?;
    Ok(details)
}

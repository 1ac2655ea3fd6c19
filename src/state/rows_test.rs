use super::*;

// =============================================================
// Selectors
// =============================================================

#[test]
fn data_row_selector_skips_details_rows() {
    let selector = data_row_selector();
    assert!(selector.starts_with(ROW_SELECTOR));
    assert!(selector.ends_with(&format!(":not(.{DETAILS_ROW_CLASS})")));
    assert_eq!(selector, ".table tbody tr:not(.details-row)");
}

// =============================================================
// RowsState
// =============================================================

#[test]
fn toggle_is_strict() {
    let mut rows = RowsState::default();
    let id = RowId(3);
    assert_eq!(rows.toggle_row_details(id), RowToggle::Expanded);
    assert_eq!(rows.expanded_count(), 1);
    assert_eq!(rows.toggle_row_details(id), RowToggle::Collapsed);
    assert_eq!(rows.expanded_count(), 0);
    assert_eq!(rows.toggle_row_details(id), RowToggle::Expanded);
    assert_eq!(rows.expanded_count(), 1);
    assert!(rows.is_expanded(id));
}

#[test]
fn rows_toggle_independently() {
    let mut rows = RowsState::default();
    rows.toggle_row_details(RowId(0));
    rows.toggle_row_details(RowId(2));
    rows.toggle_row_details(RowId(0));
    assert_eq!(rows.expanded().collect::<Vec<_>>(), vec![RowId(2)]);
}

// =============================================================
// Click filtering
// =============================================================

#[test]
fn links_and_buttons_are_interactive() {
    assert!(is_interactive_tag("A"));
    assert!(is_interactive_tag("BUTTON"));
    assert!(is_interactive_tag("a"));
}

#[test]
fn plain_cells_are_not_interactive() {
    for tag in ["TD", "TR", "SPAN", "I", "ABBR"] {
        assert!(!is_interactive_tag(tag), "{tag}");
    }
}

// =============================================================
// DetailsPanel
// =============================================================

#[test]
fn panel_reads_positional_cells() {
    let panel = DetailsPanel::from_cells(&["10/01", "LojaX", "Produto Y", "R$ 99", "", "Site Z"]);
    assert_eq!(panel.title, "Produto Y");
    let groups = panel.groups(&Labels::default());
    assert_eq!(
        groups[0].iter().map(|f| f.value.as_str()).collect::<Vec<_>>(),
        vec!["LojaX", "R$ 99"]
    );
    assert_eq!(
        groups[1].iter().map(|f| f.value.as_str()).collect::<Vec<_>>(),
        vec!["10/01", "Site Z"]
    );
}

#[test]
fn groups_carry_labels() {
    let panel = DetailsPanel::from_cells(&["d", "s", "t", "p", "", "src"]);
    let groups = panel.groups(&Labels::default());
    assert_eq!(groups[0][0].label, "Loja");
    assert_eq!(groups[0][1].label, "Preço");
    assert_eq!(groups[1][0].label, "Data de Postagem");
    assert_eq!(groups[1][1].label, "Fonte");
}

#[test]
fn missing_cells_read_na() {
    let panel = DetailsPanel::from_cells(&["10/01", "LojaX"]);
    assert_eq!(panel.posted_at, "10/01");
    assert_eq!(panel.store, "LojaX");
    assert_eq!(panel.title, MISSING_CELL);
    assert_eq!(panel.price, MISSING_CELL);
    assert_eq!(panel.source, MISSING_CELL);
}

#[test]
fn empty_cells_read_na() {
    let cells: Vec<String> = vec![String::new(); 6];
    let panel = DetailsPanel::from_cells(&cells);
    assert_eq!(panel.title, "N/A");
    assert_eq!(panel.posted_at, "N/A");
}

#[test]
fn no_cells_at_all() {
    let panel = DetailsPanel::from_cells::<&str>(&[]);
    assert_eq!(panel.store, MISSING_CELL);
}

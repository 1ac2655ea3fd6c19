use super::*;

// =============================================================
// SearchFilter
// =============================================================

#[test]
fn empty_term_matches_everything() {
    let filter = SearchFilter::new("");
    assert!(filter.matches(""));
    assert!(filter.matches("Kabum RTX 4070"));
}

#[test]
fn matching_is_case_insensitive() {
    let filter = SearchFilter::new("RTX");
    assert_eq!(filter.term(), "rtx");
    assert!(filter.matches("Placa de vídeo rtx 4070"));
    assert!(filter.matches("PLACA RTX"));
    assert!(!filter.matches("Radeon RX 7800"));
}

#[test]
fn matching_handles_accents() {
    let filter = SearchFilter::new("PREÇO");
    assert!(filter.matches("menor preço do mês"));
}

// =============================================================
// SortState
// =============================================================

fn headers() -> SortState {
    SortState::new(vec![
        SortHeader::from_attributes(Some("data".into()), None),
        SortHeader::from_attributes(Some("preco".into()), None),
        SortHeader::from_attributes(None, None),
    ])
}

#[test]
fn first_click_on_unmarked_header_is_desc() {
    let mut sort = headers();
    assert_eq!(sort.click(1), Some(SortOrder::Desc));
    assert_eq!(sort.active(), Some((1, SortOrder::Desc)));
}

#[test]
fn repeated_clicks_cycle() {
    let mut sort = headers();
    assert_eq!(sort.click(0), Some(SortOrder::Desc));
    assert_eq!(sort.click(0), Some(SortOrder::Asc));
    assert_eq!(sort.click(0), Some(SortOrder::Desc));
}

#[test]
fn clicking_another_header_clears_previous() {
    let mut sort = headers();
    sort.click(0);
    sort.click(0);
    assert_eq!(sort.click(1), Some(SortOrder::Desc));
    assert_eq!(sort.headers()[0].order, None);
    assert_eq!(sort.headers().iter().filter(|h| h.order.is_some()).count(), 1);
}

#[test]
fn unknown_index_is_ignored() {
    let mut sort = headers();
    sort.click(0);
    assert_eq!(sort.click(9), None);
    assert_eq!(sort.active(), Some((0, SortOrder::Desc)));
}

#[test]
fn server_rendered_order_is_respected() {
    let mut sort = SortState::new(vec![
        SortHeader::from_attributes(Some("data".into()), Some("desc")),
        SortHeader::from_attributes(Some("preco".into()), Some("bogus")),
    ]);
    assert_eq!(sort.active(), Some((0, SortOrder::Desc)));
    assert_eq!(sort.headers()[1].order, None);
    assert_eq!(sort.click(0), Some(SortOrder::Asc));
}

#[test]
fn missing_column_logs_as_undefined() {
    assert_eq!(SortHeader::from_attributes(None, None).column_name(), "undefined");
    assert_eq!(SortHeader::from_attributes(Some("loja".into()), None).column_name(), "loja");
}

#[test]
fn order_classes() {
    assert_eq!(SortOrder::Asc.class_name(), "sort-asc");
    assert_eq!(SortOrder::Desc.class_name(), "sort-desc");
    assert_eq!(SortOrder::Desc.as_str(), "desc");
}

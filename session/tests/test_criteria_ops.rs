//! FILENAME: tests/test_criteria_ops.rs
//! Integration tests for the criteria operations: select-all, chips,
//! clear-all, and the table sort.

mod common;

use common::{assert_products, SessionHarness};
use session::{ChipKind, SortDirection};

// ============================================================================
// SELECT ALL
// ============================================================================

#[test]
fn test_toggle_all_round_trip() {
    let mut harness = SessionHarness::with_sample_catalogue();
    assert!(!harness.session.is_all_selected("season"));

    harness.session.toggle_all("season").unwrap();
    assert!(harness.session.is_all_selected("season"));
    assert_eq!(
        harness.session.criteria().accepted("season"),
        Some(&["SS24".to_string(), "FW24".to_string()][..])
    );

    harness.session.toggle_all("season").unwrap();
    assert!(!harness.session.is_all_selected("season"));
    assert_eq!(harness.session.criteria().accepted("season"), Some(&[][..]));
}

#[test]
fn test_toggle_all_completes_a_partial_selection() {
    let mut harness = SessionHarness::with_sample_catalogue();

    harness.session.toggle_value("season", "SS24").unwrap();
    assert!(!harness.session.is_all_selected("season"));

    harness.session.toggle_all("season").unwrap();
    assert!(harness.session.is_all_selected("season"));

    // Unchecking one value breaks the all-selected state again.
    harness.session.toggle_value("season", "FW24").unwrap();
    assert!(!harness.session.is_all_selected("season"));
    assert_products(&harness, &["TS-001", "BT-002"]);
}

#[test]
fn test_all_is_never_selected_over_an_empty_catalogue() {
    let harness = SessionHarness::empty();
    assert!(!harness.session.is_all_selected("season"));
}

// ============================================================================
// CHIPS
// ============================================================================

#[test]
fn test_one_chip_per_accepted_value_and_narrowed_range() {
    let mut harness = SessionHarness::with_sample_catalogue();

    harness.session.toggle_value("season", "SS24").unwrap();
    harness.session.toggle_value("color", "Blue").unwrap();
    harness.session.set_range("price", 10.0, 100.0).unwrap();

    let chips = harness.session.chips();
    assert_eq!(chips.len(), 3);
    assert_eq!(chips[0].label, "Season");
    assert_eq!(chips[0].value, "SS24");
    assert_eq!(chips[1].label, "Color");
    assert_eq!(chips[2].kind, ChipKind::Range);
    assert_eq!(chips[2].label, "Price");
    assert_eq!(chips[2].value, "10 - 100");
}

#[test]
fn test_removing_a_categorical_chip_drops_one_value() {
    let mut harness = SessionHarness::with_sample_catalogue();
    harness.session.toggle_value("season", "SS24").unwrap();
    harness.session.toggle_value("season", "FW24").unwrap();

    let chips = harness.session.chips();
    harness.session.remove_chip(&chips[0]);

    assert_eq!(
        harness.session.criteria().accepted("season"),
        Some(&["FW24".to_string()][..])
    );
    assert_products(&harness, &["JK-003", "KN-004"]);
}

#[test]
fn test_removing_a_range_chip_restores_facet_bounds() {
    let mut harness = SessionHarness::with_sample_catalogue();
    harness.session.set_range("price", 10.0, 60.0).unwrap();
    assert_products(&harness, &["TS-001"]);

    let chips = harness.session.chips();
    assert_eq!(chips.len(), 1);
    harness.session.remove_chip(&chips[0]);

    assert!(harness.session.chips().is_empty());
    assert_products(&harness, &["TS-001", "BT-002", "JK-003", "KN-004"]);
}

#[test]
fn test_clear_filters_resets_entries_but_keeps_search() {
    let mut harness = SessionHarness::with_sample_catalogue();
    harness.session.set_search("core");
    harness.session.toggle_value("season", "FW24").unwrap();
    harness.session.set_range("price", 0.0, 60.0).unwrap();

    harness.session.clear_filters();

    assert!(harness.session.chips().is_empty());
    assert_eq!(harness.session.criteria().search, "core");
    // The search alone still narrows the table.
    assert_products(&harness, &["TS-001", "BT-002", "KN-004"]);
}

// ============================================================================
// SORT
// ============================================================================

#[test]
fn test_sort_by_price_both_directions() {
    let mut harness = SessionHarness::with_sample_catalogue();

    harness
        .session
        .set_sort("price", SortDirection::Ascending)
        .unwrap();
    assert_products(&harness, &["TS-001", "BT-002", "KN-004", "JK-003"]);

    harness
        .session
        .set_sort("price", SortDirection::Descending)
        .unwrap();
    assert_products(&harness, &["JK-003", "KN-004", "BT-002", "TS-001"]);
}

#[test]
fn test_sort_by_text_column_is_stable() {
    let mut harness = SessionHarness::with_sample_catalogue();

    harness
        .session
        .set_sort("season", SortDirection::Ascending)
        .unwrap();
    // FW24 sorts before SS24; catalogue order is preserved within a season.
    assert_products(&harness, &["JK-003", "KN-004", "TS-001", "BT-002"]);
}

#[test]
fn test_clear_sort_restores_catalogue_order() {
    let mut harness = SessionHarness::with_sample_catalogue();
    harness
        .session
        .set_sort("price", SortDirection::Descending)
        .unwrap();
    harness.session.clear_sort();
    assert_products(&harness, &["TS-001", "BT-002", "JK-003", "KN-004"]);
}

#[test]
fn test_unsortable_column_is_rejected() {
    let mut harness = SessionHarness::with_sample_catalogue();
    assert!(harness.session.set_sort("name", SortDirection::Ascending).is_err());
    assert!(harness.session.sort().is_none());
}

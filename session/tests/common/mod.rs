//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for catalogue session integration tests.

#![allow(dead_code)]

use catalogue::{CatalogueSchema, Record};
use session::CatalogueSession;

/// Test harness wrapping a session over a fixture catalogue.
pub struct SessionHarness {
    pub session: CatalogueSession,
}

impl SessionHarness {
    /// A session over an empty catalogue.
    pub fn empty() -> Self {
        SessionHarness {
            session: CatalogueSession::new(Vec::new(), CatalogueSchema::default()),
        }
    }

    /// A session over the standard five-product fixture.
    pub fn with_sample_catalogue() -> Self {
        SessionHarness {
            session: CatalogueSession::new(ProductFixture::records(), CatalogueSchema::default()),
        }
    }

    /// Style numbers of the current filtered (and sorted) products, in
    /// output order.
    pub fn style_numbers(&self) -> Vec<String> {
        self.session
            .products()
            .iter()
            .map(|r| r.field("style_number").render())
            .collect()
    }
}

impl Default for SessionHarness {
    fn default() -> Self {
        Self::with_sample_catalogue()
    }
}

// ============================================================================
// TEST DATA FIXTURES
// ============================================================================

/// Sample merchandising catalogue, loaded the way a host would hand records
/// in: as JSON rows with scalar and set-valued fields mixed.
///
/// Derived values, for reference in assertions:
/// - TS-001: margin 60%, margin amount 300
/// - BT-002: margin 50%, margin amount 200
/// - JK-003: margin 50%, margin amount 480
/// - KN-004: margin 50%, margin amount 180
/// - GG-005: margin undefined (price 0), margin amount -1000
pub struct ProductFixture;

impl ProductFixture {
    pub fn records() -> Vec<Record> {
        serde_json::from_value(serde_json::json!([
            {
                "style_number": "TS-001", "name": "Crew Tee",
                "season": "SS24", "line": "Core", "category": "Tops",
                "color": ["Red", "Blue"], "available_sizes": ["S", "M", "L"],
                "buyer": "ACME", "date_added": "2024-02-01",
                "quantity_sold": 10, "price": 50, "cost": 20,
                "fabric": "Cotton", "status": "Active"
            },
            {
                "style_number": "BT-002", "name": "Chino Short",
                "season": "SS24", "line": "Core", "category": "Bottoms",
                "color": ["Khaki"], "available_sizes": ["M", "L"],
                "buyer": "ACME", "date_added": "2024-02-10",
                "quantity_sold": 5, "price": 80, "cost": 40,
                "fabric": "Twill", "status": "Active"
            },
            {
                "style_number": "JK-003", "name": "Rain Shell",
                "season": "FW24", "line": "Outdoor", "category": "Outerwear",
                "color": ["Green"], "available_sizes": ["S", "M"],
                "buyer": "Northwind", "date_added": "2024-08-15",
                "quantity_sold": 8, "price": 120, "cost": 60,
                "fabric": "Nylon", "status": "Active"
            },
            {
                "style_number": "KN-004", "name": "Wool Jumper",
                "season": "FW24", "line": "Core", "category": "Tops",
                "color": ["Grey", "Navy"], "available_sizes": ["M"],
                "buyer": "Northwind", "date_added": "2024-09-01",
                "quantity_sold": 4, "price": 90, "cost": 45,
                "fabric": "Wool", "status": "Discontinued"
            },
            {
                "style_number": "GG-005", "name": "Gift Sample",
                "season": "SS24", "line": "Promo", "category": "Accessories",
                "color": ["White"], "available_sizes": ["One Size"],
                "buyer": "ACME", "date_added": "2024-03-05",
                "quantity_sold": 100, "price": 0, "cost": 10,
                "fabric": "Cotton", "status": "Sample"
            }
        ]))
        .expect("fixture catalogue should deserialize")
    }
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

/// Assert the filtered products are exactly the given style numbers, in
/// order.
pub fn assert_products(harness: &SessionHarness, expected: &[&str]) {
    let actual = harness.style_numbers();
    assert_eq!(
        actual, expected,
        "filtered products expected {:?} but got {:?}",
        expected, actual
    );
}

/// Assert one report cell, tolerating float noise.
pub fn assert_cell(view: &report_engine::ReportView, group: &str, stack: &str, expected: f64) {
    match view.cell(group, stack) {
        Some(value) => assert!(
            (value - expected).abs() < 0.001,
            "cell ({}, {}) expected {} but got {}",
            group,
            stack,
            expected,
            value
        ),
        None => panic!("cell ({}, {}) missing from view", group, stack),
    }
}

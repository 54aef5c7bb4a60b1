//! FILENAME: filter-engine/src/facets.rs
//! PURPOSE: Builds the Facet Catalog: the distinct values and numeric
//! bounds that populate the filter controls.
//! CONTEXT: Always computed over the FULL catalogue, never the filtered
//! subset, so dropdown options and range sliders stay stable while filters
//! are applied. Rebuilt only when the backing record set changes.

use serde::{Deserialize, Serialize};

use catalogue::{CatalogueSchema, KeyInterner, RangeSource, Record};

/// Distinct values observed for one multi-select field, in first-encounter
/// order (this order drives the dropdown).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetValues {
    pub field: String,
    pub label: String,
    pub values: Vec<String>,
}

/// Observed numeric bounds for one range field. `min` is a fixed floor of
/// zero, not the data minimum. With no finite observations `max` stays at
/// the fold seed: `-Infinity` for raw fields, `0` for the derived margin,
/// which callers treat as "no numeric filtering possible".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeBounds {
    pub field: String,
    pub label: String,
    pub source: RangeSource,
    pub min: f64,
    pub max: f64,
}

/// Everything the filter UI needs to render its controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetCatalog {
    pub options: Vec<FacetValues>,
    pub bounds: Vec<RangeBounds>,
}

impl FacetCatalog {
    pub fn options_for(&self, field: &str) -> Option<&FacetValues> {
        self.options.iter().find(|o| o.field == field)
    }

    pub fn bounds_for(&self, field: &str) -> Option<&RangeBounds> {
        self.bounds.iter().find(|b| b.field == field)
    }
}

/// Scans the full record set once per configured field and derives the
/// facet catalog.
pub fn build_facets(records: &[Record], schema: &CatalogueSchema) -> FacetCatalog {
    let options = schema
        .facet_fields
        .iter()
        .map(|field| {
            let mut distinct = KeyInterner::new();
            for record in records {
                for member in record.field(&field.key).members() {
                    distinct.intern(&member);
                }
            }
            FacetValues {
                field: field.key.clone(),
                label: field.label.clone(),
                values: distinct.into_keys(),
            }
        })
        .collect();

    let bounds = schema
        .range_fields
        .iter()
        .map(|range| {
            // Division by zero in the margin derivation yields NaN; those
            // records contribute nothing to the max.
            let seed = match range.source {
                RangeSource::Field => f64::NEG_INFINITY,
                RangeSource::MarginPercent => 0.0,
            };
            let max = records
                .iter()
                .map(|record| range.value_of(record))
                .filter(|value| value.is_finite())
                .fold(seed, f64::max);
            RangeBounds {
                field: range.key.clone(),
                label: range.label.clone(),
                source: range.source,
                min: 0.0,
                max,
            }
        })
        .collect();

    FacetCatalog { options, bounds }
}

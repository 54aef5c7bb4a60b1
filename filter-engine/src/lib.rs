//! FILENAME: filter-engine/src/lib.rs
//! PURPOSE: Faceting and filtering for the catalogue.
//!
//! Layers:
//! - `facets`: derives filter-control options and bounds from the full
//!   record set (what the user can pick)
//! - `criteria`: the caller-owned filtering state (what the user picked)
//! - `evaluate`: applies criteria to records (what survives)

pub mod criteria;
pub mod evaluate;
pub mod facets;

pub use criteria::{CriteriaEntry, FilterCriteria, Selection};
pub use evaluate::{evaluate, matches};
pub use facets::{build_facets, FacetCatalog, FacetValues, RangeBounds};

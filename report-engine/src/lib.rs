//! FILENAME: report-engine/src/lib.rs
//! Grouped/stacked aggregation for the catalogue.
//!
//! This crate turns an already-filtered record set into chart-ready rows.
//! It depends on `catalogue` only for the record shape and the measure
//! configuration.
//!
//! Layers:
//! - `definition`: Serializable configuration (what the report IS)
//! - `engine`: Calculation engine (HOW we calculate)
//! - `view`: Renderable output for the chart (WHAT we display)

pub mod definition;
pub mod engine;
pub mod view;

pub use definition::{Reduction, ReportDefinition};
pub use engine::{calculate_report, ReportCalculator, BLANK_LABEL};
pub use view::{ReportRow, ReportView};

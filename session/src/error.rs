//! FILENAME: session/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Unknown facet field: {0}")]
    UnknownFacetField(String),

    #[error("Unknown range field: {0}")]
    UnknownRangeField(String),

    #[error("Unknown chart field: {0}")]
    UnknownChartField(String),

    #[error("Unknown measure: {0}")]
    UnknownMeasure(String),

    #[error("Column is not sortable: {0}")]
    UnsortableColumn(String),
}

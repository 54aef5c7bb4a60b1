//! FILENAME: catalogue/src/lib.rs
//! PURPOSE: Main library entry point for the catalogue record model.
//! CONTEXT: Re-exports the record shape, field configuration, and shared
//! helpers used by the filter and report engines.

pub mod display;
pub mod distinct;
pub mod field;
pub mod record;
pub mod schema;

// Re-export commonly used types at the crate root
pub use display::display_field;
pub use distinct::{KeyId, KeyInterner};
pub use field::{format_number, FieldValue, Members};
pub use record::{Record, FIELD_COST, FIELD_PRICE, FIELD_QUANTITY_SOLD};
pub use schema::{
    CatalogueSchema, ColumnDef, ColumnFormat, FieldOption, MeasureFieldDef, MeasureSource,
    RangeFieldDef, RangeSource,
};

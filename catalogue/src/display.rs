//! FILENAME: catalogue/src/display.rs
//! PURPOSE: Schema-driven rendering of record fields for table display.
//! CONTEXT: The table renderer asks for one cell at a time; currency
//! columns get a dollar prefix and two decimals, everything else uses the
//! plain string form (set values comma-joined).

use crate::record::Record;
use crate::schema::{ColumnDef, ColumnFormat};

/// Renders one table cell. Non-finite currency values render as an empty
/// cell rather than "NaN".
pub fn display_field(record: &Record, column: &ColumnDef) -> String {
    match column.format {
        ColumnFormat::Currency => {
            let n = record.number(&column.key);
            if n.is_finite() {
                format!("${:.2}", n)
            } else {
                String::new()
            }
        }
        ColumnFormat::Text => record.field(&column.key).render(),
    }
}

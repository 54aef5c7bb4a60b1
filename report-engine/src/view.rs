//! FILENAME: report-engine/src/view.rs
//! PURPOSE: Report View - the chart-ready output.
//!
//! Every row carries one cell per stack key, in the shared stack-key order,
//! so a stacked-bar renderer can consume rows directly without probing for
//! missing series. Cells with no contributing records are zero, not absent.

use serde::{Deserialize, Serialize};

/// One group row. `cells` is parallel to the view's `stack_keys`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub group: String,
    pub cells: Vec<f64>,
}

/// The full report: the stack-key universe plus one row per group, both in
/// first-encounter order over the input records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportView {
    pub stack_keys: Vec<String>,
    pub rows: Vec<ReportRow>,
}

impl ReportView {
    pub fn row(&self, group: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|r| r.group == group)
    }

    /// The cell for one (group, stack key) pair.
    pub fn cell(&self, group: &str, stack_key: &str) -> Option<f64> {
        let index = self.stack_keys.iter().position(|k| k == stack_key)?;
        self.row(group).and_then(|r| r.cells.get(index).copied())
    }

    /// Sum over every cell of the view.
    pub fn total(&self) -> f64 {
        self.rows
            .iter()
            .map(|row| row.cells.iter().sum::<f64>())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

//! FILENAME: report-engine/src/definition.rs
//! PURPOSE: Report Definition - the serializable configuration.
//!
//! This module contains the types that DESCRIBE a grouped/stacked report.
//! These structures are designed to be:
//! - Serializable (for sending between the session and a host UI)
//! - Immutable snapshots of user intent

use serde::{Deserialize, Serialize};

use catalogue::MeasureFieldDef;

/// Numeric summary applied to the measure values in one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reduction {
    Sum,
    Average,
}

impl Default for Reduction {
    fn default() -> Self {
        Reduction::Sum
    }
}

/// What to compute, over an already-filtered record set.
///
/// `stack_by != group_by` is the caller's invariant: the engine produces a
/// well-defined (if useless) result when they collide, it never panics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDefinition {
    /// Field whose first member places each record into one row.
    pub group_by: String,

    /// Field whose members form the column universe; a set-valued record
    /// contributes to every one of its values.
    pub stack_by: String,

    /// The numeric measure, raw or derived.
    pub measure: MeasureFieldDef,

    #[serde(default)]
    pub reduction: Reduction,
}

impl ReportDefinition {
    pub fn new(group_by: &str, stack_by: &str, measure: MeasureFieldDef, reduction: Reduction) -> Self {
        ReportDefinition {
            group_by: group_by.to_string(),
            stack_by: stack_by.to_string(),
            measure,
            reduction,
        }
    }
}

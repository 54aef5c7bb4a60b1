//! FILENAME: catalogue/src/field.rs
//! PURPOSE: Defines the value model for a single catalogue record field.
//! CONTEXT: This file contains the `FieldValue` enum, the one place where
//! scalar vs. set-valued fields are distinguished. Everything downstream
//! (faceting, filtering, aggregation) inspects fields through `members()`
//! and `as_number()` instead of re-branching on the shape.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// A field's member values. Almost every field is a single value, so the
/// inline capacity keeps the common case off the heap.
pub type Members = SmallVec<[String; 2]>;

/// One field of a catalogue record: absent, a number, a single tag, or a
/// set of tags (e.g. a product available in several colors).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Many(Vec<String>),
    Empty,
}

impl FieldValue {
    /// Normalizes the field to its member values: nothing for `Empty`, a
    /// singleton for scalars, every element for `Many`.
    pub fn members(&self) -> Members {
        match self {
            FieldValue::Empty => SmallVec::new(),
            FieldValue::Number(n) => smallvec![format_number(*n)],
            FieldValue::Text(s) => smallvec![s.clone()],
            FieldValue::Many(values) => values.iter().cloned().collect(),
        }
    }

    /// Coerces the field to a number. Anything that is not numeric becomes
    /// `NaN`, which downstream range comparisons treat as "does not match".
    pub fn as_number(&self) -> f64 {
        match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
            FieldValue::Empty | FieldValue::Many(_) => f64::NAN,
        }
    }

    /// Returns the field's string form: scalars as-is, numbers without
    /// trailing decimals, set values joined with ", ".
    pub fn render(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Number(n) => format_number(*n),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Many(values) => values.join(", "),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Empty
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        FieldValue::Many(values.into_iter().map(String::from).collect())
    }
}

/// Formats a number without unnecessary decimal places.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

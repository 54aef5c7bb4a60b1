//! FILENAME: filter-engine/src/evaluate.rs
//! PURPOSE: Applies Filter Criteria to a record set.
//! CONTEXT: Pure and order-preserving; a record survives only if every
//! predicate class passes (text search, each categorical entry, each range
//! entry). Bad data degrades to "does not match", it never panics.

use catalogue::Record;

use crate::criteria::{FilterCriteria, Selection};

/// Returns the records matching the criteria, in their original order.
pub fn evaluate<'a>(records: &'a [Record], criteria: &FilterCriteria) -> Vec<&'a Record> {
    let needle = criteria.search.to_lowercase();
    records
        .iter()
        .filter(|record| matches_with_needle(record, criteria, &needle))
        .collect()
}

/// Single-record form of `evaluate`.
pub fn matches(record: &Record, criteria: &FilterCriteria) -> bool {
    matches_with_needle(record, criteria, &criteria.search.to_lowercase())
}

fn matches_with_needle(record: &Record, criteria: &FilterCriteria, needle: &str) -> bool {
    if !needle.is_empty() && !matches_search(record, needle) {
        return false;
    }

    for entry in &criteria.entries {
        match &entry.selection {
            Selection::Categorical { accepted } => {
                // An empty accepted set imposes no restriction.
                if !accepted.is_empty() {
                    let members = record.field(&entry.field).members();
                    let found = members
                        .iter()
                        .any(|member| accepted.iter().any(|a| a == member));
                    if !found {
                        return false;
                    }
                }
            }
            Selection::Range { min, max, source } => {
                // NaN (missing field, junk data, margin on a zero price)
                // fails both comparisons and rejects the record.
                let value = source.value_of(record, &entry.field);
                if !(value >= *min && value <= *max) {
                    return false;
                }
            }
        }
    }

    true
}

/// True if any field's rendered value contains the lowercased needle.
fn matches_search(record: &Record, needle: &str) -> bool {
    record
        .fields()
        .any(|(_, value)| value.render().to_lowercase().contains(needle))
}

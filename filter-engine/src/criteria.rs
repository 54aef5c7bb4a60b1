//! FILENAME: filter-engine/src/criteria.rs
//! PURPOSE: The complete filtering state: search text plus one tagged
//! entry per configured field.
//! CONTEXT: Owned and mutated by the caller, passed by reference into the
//! evaluator. The tagged form lets chip listing and clear/remove logic
//! treat every field uniformly instead of branching on field names.

use serde::{Deserialize, Serialize};

use catalogue::RangeSource;

use crate::facets::FacetCatalog;

/// One field's filter selection.
///
/// An empty accepted set means "no restriction" (accept everything), never
/// "accept only records whose value set is empty".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Selection {
    Categorical {
        #[serde(default)]
        accepted: Vec<String>,
    },
    Range {
        min: f64,
        max: f64,
        #[serde(default)]
        source: RangeSource,
    },
}

/// One configured field together with its current selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaEntry {
    pub field: String,
    #[serde(flatten)]
    pub selection: Selection,
}

/// The caller-owned filtering state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring needle; empty matches everything.
    #[serde(default)]
    pub search: String,

    /// One entry per configured field, in schema order.
    #[serde(default)]
    pub entries: Vec<CriteriaEntry>,
}

impl FilterCriteria {
    /// The no-restriction criteria for a catalogue: empty search, empty
    /// accepted sets, and every range at its full facet bounds.
    pub fn defaults(facets: &FacetCatalog) -> Self {
        let mut entries = Vec::with_capacity(facets.options.len() + facets.bounds.len());
        for option in &facets.options {
            entries.push(CriteriaEntry {
                field: option.field.clone(),
                selection: Selection::Categorical {
                    accepted: Vec::new(),
                },
            });
        }
        for bounds in &facets.bounds {
            entries.push(CriteriaEntry {
                field: bounds.field.clone(),
                selection: Selection::Range {
                    min: bounds.min,
                    max: bounds.max,
                    source: bounds.source,
                },
            });
        }
        FilterCriteria {
            search: String::new(),
            entries,
        }
    }

    pub fn entry(&self, field: &str) -> Option<&CriteriaEntry> {
        self.entries.iter().find(|e| e.field == field)
    }

    pub fn entry_mut(&mut self, field: &str) -> Option<&mut CriteriaEntry> {
        self.entries.iter_mut().find(|e| e.field == field)
    }

    /// The accepted set of a categorical entry, if the field has one.
    pub fn accepted(&self, field: &str) -> Option<&[String]> {
        match self.entry(field) {
            Some(CriteriaEntry {
                selection: Selection::Categorical { accepted },
                ..
            }) => Some(accepted),
            _ => None,
        }
    }
}

//! FILENAME: session/src/chips.rs
//! PURPOSE: The active-filter chip row shown under the header.
//! CONTEXT: Chips are derived from the tagged criteria entries, one per
//! accepted categorical value and one per narrowed range, so the renderer
//! and the remove handler never branch on field names.

use serde::{Deserialize, Serialize};

use catalogue::format_number;
use filter_engine::{FacetCatalog, FilterCriteria, Selection};

/// Which kind of entry a chip came from, and therefore how removal works:
/// a categorical chip removes one accepted value, a range chip restores
/// the field's default bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChipKind {
    Categorical,
    Range,
}

/// One removable token, rendered as "label: value".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterChip {
    pub field: String,
    pub kind: ChipKind,
    /// Field label from the schema.
    pub label: String,
    /// The accepted value, or the rendered bounds for a range chip.
    pub value: String,
}

/// Builds the chip list for the current criteria. A range entry produces a
/// chip only when its bounds differ from the facet defaults; a categorical
/// entry produces one chip per accepted value.
pub fn build_chips(
    criteria: &FilterCriteria,
    facets: &FacetCatalog,
    label_of: impl Fn(&str) -> String,
) -> Vec<FilterChip> {
    let mut chips = Vec::new();
    for entry in &criteria.entries {
        match &entry.selection {
            Selection::Categorical { accepted } => {
                for value in accepted {
                    chips.push(FilterChip {
                        field: entry.field.clone(),
                        kind: ChipKind::Categorical,
                        label: label_of(&entry.field),
                        value: value.clone(),
                    });
                }
            }
            Selection::Range { min, max, .. } => {
                let narrowed = match facets.bounds_for(&entry.field) {
                    Some(bounds) => *min != bounds.min || *max != bounds.max,
                    None => true,
                };
                if narrowed {
                    chips.push(FilterChip {
                        field: entry.field.clone(),
                        kind: ChipKind::Range,
                        label: label_of(&entry.field),
                        value: format!("{} - {}", format_number(*min), format_number(*max)),
                    });
                }
            }
        }
    }
    chips
}

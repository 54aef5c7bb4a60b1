//! FILENAME: session/src/session.rs
//! PURPOSE: The stateful session driving the pure filter and report engines.
//! CONTEXT: Mutations mirror the original UI's handlers (search box,
//! dropdown checkboxes, range inputs, chip removal, chart selectors,
//! column sort). Every derived view is recomputed on read; nothing is
//! cached across calls.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use catalogue::{CatalogueSchema, FieldValue, MeasureFieldDef, MeasureSource, Record};
use filter_engine::{build_facets, evaluate, FacetCatalog, FilterCriteria, Selection};
use report_engine::{calculate_report, Reduction, ReportDefinition, ReportView};

use crate::chips::{build_chips, ChipKind, FilterChip};
use crate::error::SessionError;

// ============================================================================
// SORT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The session's current table sort, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

/// Ordering for one sortable column: numbers before text, text
/// case-insensitively, blanks always last regardless of direction.
fn compare_fields(a: &FieldValue, b: &FieldValue, direction: SortDirection) -> Ordering {
    let ordering = match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {
            let na = a.as_number();
            let nb = b.as_number();
            match (na.is_nan(), nb.is_nan()) {
                (false, false) => na.partial_cmp(&nb).unwrap_or(Ordering::Equal),
                (false, true) => Ordering::Less,
                (true, false) => Ordering::Greater,
                (true, true) => a
                    .render()
                    .to_lowercase()
                    .cmp(&b.render().to_lowercase()),
            }
        }
    };
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

// ============================================================================
// SESSION
// ============================================================================

/// One user's browsing state over a catalogue.
pub struct CatalogueSession {
    schema: CatalogueSchema,
    records: Vec<Record>,
    facets: FacetCatalog,
    criteria: FilterCriteria,
    definition: ReportDefinition,
    sort: Option<SortSpec>,
}

impl CatalogueSession {
    /// Builds the facet catalog once and seeds the default criteria (empty
    /// search, empty accepted sets, ranges at the facet bounds) and the
    /// schema's default report parameters.
    pub fn new(records: Vec<Record>, schema: CatalogueSchema) -> Self {
        let facets = build_facets(&records, &schema);
        let criteria = FilterCriteria::defaults(&facets);
        let measure = schema
            .measure(&schema.default_measure)
            .or_else(|| schema.measures.first())
            .cloned()
            .unwrap_or_else(|| MeasureFieldDef {
                key: schema.default_measure.clone(),
                label: schema.default_measure.clone(),
                source: MeasureSource::Field,
            });
        let definition = ReportDefinition::new(
            &schema.default_group_by,
            &schema.default_stack_by,
            measure,
            Reduction::Sum,
        );
        log::info!(
            "session opened: {} records, {} facet fields",
            records.len(),
            schema.facet_fields.len()
        );
        CatalogueSession {
            schema,
            records,
            facets,
            criteria,
            definition,
            sort: None,
        }
    }

    // ------------------------------------------------------------------
    // Catalogue
    // ------------------------------------------------------------------

    /// Swaps the backing record set, rebuilds the facets, and resets every
    /// range entry to the new bounds. Accepted sets and the search text
    /// survive the swap.
    pub fn replace_records(&mut self, records: Vec<Record>) {
        log::info!("catalogue replaced: {} records", records.len());
        self.records = records;
        self.facets = build_facets(&self.records, &self.schema);
        for bounds in &self.facets.bounds {
            if let Some(entry) = self.criteria.entry_mut(&bounds.field) {
                entry.selection = Selection::Range {
                    min: bounds.min,
                    max: bounds.max,
                    source: bounds.source,
                };
            }
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn schema(&self) -> &CatalogueSchema {
        &self.schema
    }

    /// The facet catalog for the full (unfiltered) record set.
    pub fn facets(&self) -> &FacetCatalog {
        &self.facets
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn definition(&self) -> &ReportDefinition {
        &self.definition
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    // ------------------------------------------------------------------
    // Filter criteria
    // ------------------------------------------------------------------

    /// Replaces the free-text needle.
    pub fn set_search(&mut self, text: &str) {
        log::debug!("search set to {:?}", text);
        self.criteria.search = text.to_string();
    }

    /// Adds the value to the field's accepted set if absent, removes it if
    /// present (one dropdown checkbox).
    pub fn toggle_value(&mut self, field: &str, value: &str) -> Result<(), SessionError> {
        let accepted = self.accepted_mut(field)?;
        match accepted.iter().position(|v| v == value) {
            Some(index) => {
                accepted.remove(index);
            }
            None => accepted.push(value.to_string()),
        }
        log::debug!("toggled {}={}", field, value);
        Ok(())
    }

    /// The dropdown's "All" checkbox: clears the accepted set when every
    /// facet option is accepted, accepts every option otherwise.
    pub fn toggle_all(&mut self, field: &str) -> Result<(), SessionError> {
        let all = self.is_all_selected(field);
        let options = self
            .facets
            .options_for(field)
            .map(|o| o.values.clone())
            .unwrap_or_default();
        let accepted = self.accepted_mut(field)?;
        if all {
            accepted.clear();
        } else {
            *accepted = options;
        }
        log::debug!("toggled all on {}", field);
        Ok(())
    }

    /// Whether the "All" checkbox for a field should render checked: every
    /// facet option is currently accepted (and there is at least one).
    pub fn is_all_selected(&self, field: &str) -> bool {
        let accepted = match self.criteria.accepted(field) {
            Some(accepted) => accepted,
            None => return false,
        };
        match self.facets.options_for(field) {
            Some(options) => {
                !options.values.is_empty()
                    && options.values.iter().all(|v| accepted.contains(v))
            }
            None => false,
        }
    }

    /// Replaces one range entry's bounds.
    pub fn set_range(&mut self, field: &str, min: f64, max: f64) -> Result<(), SessionError> {
        let entry = self
            .criteria
            .entry_mut(field)
            .ok_or_else(|| SessionError::UnknownRangeField(field.to_string()))?;
        match &mut entry.selection {
            Selection::Range {
                min: entry_min,
                max: entry_max,
                ..
            } => {
                *entry_min = min;
                *entry_max = max;
                log::debug!("range {} set to [{}, {}]", field, min, max);
                Ok(())
            }
            Selection::Categorical { .. } => {
                Err(SessionError::UnknownRangeField(field.to_string()))
            }
        }
    }

    /// The active-filter chip row.
    pub fn chips(&self) -> Vec<FilterChip> {
        build_chips(&self.criteria, &self.facets, |field| {
            self.schema.label_of(field).to_string()
        })
    }

    /// Removes one chip: a categorical chip drops that single accepted
    /// value, a range chip restores the entry to its facet bounds.
    pub fn remove_chip(&mut self, chip: &FilterChip) {
        match chip.kind {
            ChipKind::Categorical => {
                if let Ok(accepted) = self.accepted_mut(&chip.field) {
                    accepted.retain(|v| v != &chip.value);
                }
            }
            ChipKind::Range => {
                if let Some(bounds) = self.facets.bounds_for(&chip.field).cloned() {
                    let _ = self.set_range(&chip.field, bounds.min, bounds.max);
                }
            }
        }
        log::debug!("removed chip {}:{}", chip.field, chip.value);
    }

    /// Resets every entry to its default: accepted sets emptied, ranges
    /// restored to the facet bounds. The search text is separate state and
    /// is left alone.
    pub fn clear_filters(&mut self) {
        log::debug!("cleared all filters");
        let search = std::mem::take(&mut self.criteria.search);
        self.criteria = FilterCriteria::defaults(&self.facets);
        self.criteria.search = search;
    }

    fn accepted_mut(&mut self, field: &str) -> Result<&mut Vec<String>, SessionError> {
        match self.criteria.entry_mut(field) {
            Some(entry) => match &mut entry.selection {
                Selection::Categorical { accepted } => Ok(accepted),
                Selection::Range { .. } => {
                    Err(SessionError::UnknownFacetField(field.to_string()))
                }
            },
            None => Err(SessionError::UnknownFacetField(field.to_string())),
        }
    }

    // ------------------------------------------------------------------
    // Report parameters
    // ------------------------------------------------------------------

    /// Sets the group-by axis. If the new axis collides with the current
    /// stack-by, the stack-by moves to the first non-colliding chart field
    /// so the two axes never end up equal.
    pub fn set_group_by(&mut self, field: &str) -> Result<(), SessionError> {
        self.schema
            .chart_field(field)
            .ok_or_else(|| SessionError::UnknownChartField(field.to_string()))?;
        self.definition.group_by = field.to_string();
        if self.definition.stack_by == self.definition.group_by {
            if let Some(fallback) = self.first_other_chart_field(field) {
                log::debug!("stack-by moved to {} to avoid collision", fallback);
                self.definition.stack_by = fallback;
            }
        }
        Ok(())
    }

    /// Sets the stack-by axis, moving the group-by out of the way on a
    /// collision, symmetrically to `set_group_by`.
    pub fn set_stack_by(&mut self, field: &str) -> Result<(), SessionError> {
        self.schema
            .chart_field(field)
            .ok_or_else(|| SessionError::UnknownChartField(field.to_string()))?;
        self.definition.stack_by = field.to_string();
        if self.definition.group_by == self.definition.stack_by {
            if let Some(fallback) = self.first_other_chart_field(field) {
                log::debug!("group-by moved to {} to avoid collision", fallback);
                self.definition.group_by = fallback;
            }
        }
        Ok(())
    }

    pub fn set_measure(&mut self, key: &str) -> Result<(), SessionError> {
        let measure = self
            .schema
            .measure(key)
            .ok_or_else(|| SessionError::UnknownMeasure(key.to_string()))?;
        self.definition.measure = measure.clone();
        Ok(())
    }

    pub fn set_reduction(&mut self, reduction: Reduction) {
        self.definition.reduction = reduction;
    }

    fn first_other_chart_field(&self, field: &str) -> Option<String> {
        self.schema
            .chart_fields
            .iter()
            .map(|option| option.key.clone())
            .find(|key| key != field)
    }

    // ------------------------------------------------------------------
    // Sort
    // ------------------------------------------------------------------

    pub fn set_sort(&mut self, column: &str, direction: SortDirection) -> Result<(), SessionError> {
        match self.schema.column(column) {
            Some(def) if def.sortable => {
                self.sort = Some(SortSpec {
                    column: column.to_string(),
                    direction,
                });
                Ok(())
            }
            _ => Err(SessionError::UnsortableColumn(column.to_string())),
        }
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    /// The filtered subset, in catalogue order, or in the session's sort
    /// order when one is set.
    pub fn products(&self) -> Vec<&Record> {
        let mut filtered = evaluate(&self.records, &self.criteria);
        if let Some(sort) = &self.sort {
            filtered.sort_by(|a, b| {
                compare_fields(a.field(&sort.column), b.field(&sort.column), sort.direction)
            });
        }
        filtered
    }

    /// The aggregation over the filtered subset. Runs over the unsorted
    /// filter output, so row and stack-key order track catalogue order,
    /// not the table sort.
    pub fn report(&self) -> ReportView {
        calculate_report(evaluate(&self.records, &self.criteria), &self.definition)
    }
}

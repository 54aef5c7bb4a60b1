//! FILENAME: report-engine/src/engine.rs
//! PURPOSE: The grouped/stacked aggregation engine.
//!
//! Single pass over the records: group and stack keys are interned in
//! first-encounter order, measure values accumulate into per-cell
//! accumulators, and emission zero-fills every (group, stack) cell that
//! never saw a record.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use catalogue::{KeyId, KeyInterner, Record};

use crate::definition::{Reduction, ReportDefinition};
use crate::view::{ReportRow, ReportView};

/// Label under which records with a missing group or stack value are
/// bucketed.
pub const BLANK_LABEL: &str = "(blank)";

// ============================================================================
// CELL ACCUMULATOR
// ============================================================================

/// Accumulator for one (group, stack) cell.
#[derive(Debug, Clone, Copy, Default)]
struct CellAccumulator {
    sum: f64,
    count: u64,
}

impl CellAccumulator {
    fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// An accumulator that saw no values reduces to 0 under both modes, so
    /// zero-filled cells and empty cells are indistinguishable downstream.
    fn reduce(&self, reduction: Reduction) -> f64 {
        match reduction {
            Reduction::Sum => self.sum,
            Reduction::Average => {
                if self.count > 0 {
                    self.sum / self.count as f64
                } else {
                    0.0
                }
            }
        }
    }
}

// ============================================================================
// REPORT CALCULATOR
// ============================================================================

/// The calculation engine for one report run.
pub struct ReportCalculator<'a> {
    definition: &'a ReportDefinition,

    /// Group keys in first-encounter order.
    groups: KeyInterner,

    /// Stack keys in first-encounter order; the column universe.
    stacks: KeyInterner,

    /// Sparse cell storage, keyed by (group id, stack id).
    cells: FxHashMap<(KeyId, KeyId), CellAccumulator>,
}

impl<'a> ReportCalculator<'a> {
    pub fn new(definition: &'a ReportDefinition) -> Self {
        ReportCalculator {
            definition,
            groups: KeyInterner::new(),
            stacks: KeyInterner::new(),
            cells: FxHashMap::default(),
        }
    }

    /// Folds one record into the report.
    pub fn add_record(&mut self, record: &Record) {
        // Group key: first member only, so a record lands in exactly one
        // row even when the grouping field is set-valued.
        let group_members = record.field(&self.definition.group_by).members();
        let group_id = match group_members.first() {
            Some(member) => self.groups.intern(member),
            None => self.groups.intern(BLANK_LABEL),
        };

        // Stack keys: every member, so a record with several tags counts
        // once under each of them.
        let mut stack_ids: SmallVec<[KeyId; 2]> = SmallVec::new();
        for member in record.field(&self.definition.stack_by).members() {
            stack_ids.push(self.stacks.intern(&member));
        }
        if stack_ids.is_empty() {
            stack_ids.push(self.stacks.intern(BLANK_LABEL));
        }

        // Junk data yields a non-finite measure; the record still shapes
        // the row/column universe but contributes no value.
        let measure = self.definition.measure.value_of(record);
        if !measure.is_finite() {
            return;
        }

        for stack_id in stack_ids {
            self.cells
                .entry((group_id, stack_id))
                .or_default()
                .add(measure);
        }
    }

    /// Reduces every cell and emits the rows, zero-filling the gaps.
    pub fn finish(self) -> ReportView {
        let stack_keys = self.stacks.into_keys();
        let rows = self
            .groups
            .keys()
            .iter()
            .enumerate()
            .map(|(group_index, group)| {
                let group_id = group_index as KeyId;
                let cells = (0..stack_keys.len() as KeyId)
                    .map(|stack_id| {
                        self.cells
                            .get(&(group_id, stack_id))
                            .map(|acc| acc.reduce(self.definition.reduction))
                            .unwrap_or(0.0)
                    })
                    .collect();
                ReportRow {
                    group: group.clone(),
                    cells,
                }
            })
            .collect();

        ReportView { stack_keys, rows }
    }
}

/// Runs the full calculation over an already-filtered record set.
pub fn calculate_report<'a, I>(records: I, definition: &ReportDefinition) -> ReportView
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut calculator = ReportCalculator::new(definition);
    for record in records {
        calculator.add_record(record);
    }
    calculator.finish()
}

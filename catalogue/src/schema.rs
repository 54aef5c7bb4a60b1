//! FILENAME: catalogue/src/schema.rs
//! PURPOSE: The static configuration table describing which catalogue
//! fields are filterable, groupable, stackable, and measurable.
//! CONTEXT: Enumerated once at startup and passed explicitly into the
//! engines. `Default` carries the standard merchandising table; a host may
//! deserialize a different table wholesale but the set is never edited at
//! runtime.

use serde::{Deserialize, Serialize};

use crate::record::{Record, FIELD_COST, FIELD_PRICE, FIELD_QUANTITY_SOLD};

// ============================================================================
// VALUE SOURCES
// ============================================================================

/// Where a range filter reads its per-record number from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeSource {
    /// The raw field named by the definition's key.
    Field,
    /// The derived profit ratio, `(price - cost) / price * 100`.
    MarginPercent,
}

impl RangeSource {
    /// Extracts the comparable value from a record. Non-numeric data comes
    /// back as `NaN` and fails every comparison downstream.
    pub fn value_of(&self, record: &Record, field: &str) -> f64 {
        match self {
            RangeSource::Field => record.number(field),
            RangeSource::MarginPercent => record.margin_percent(),
        }
    }
}

impl Default for RangeSource {
    fn default() -> Self {
        RangeSource::Field
    }
}

/// Where a chart measure reads its per-record number from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasureSource {
    /// The raw field named by the definition's key.
    Field,
    /// The derived profit dollars, `quantity_sold * (price - cost)`.
    MarginAmount,
}

impl MeasureSource {
    pub fn value_of(&self, record: &Record, field: &str) -> f64 {
        match self {
            MeasureSource::Field => record.number(field),
            MeasureSource::MarginAmount => record.margin_amount(),
        }
    }
}

impl Default for MeasureSource {
    fn default() -> Self {
        MeasureSource::Field
    }
}

// ============================================================================
// FIELD DEFINITIONS
// ============================================================================

/// A selectable field offered to the user (facet dropdown or chart axis).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    pub key: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(key: &str, label: &str) -> Self {
        FieldOption {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

/// A numeric field filterable by an inclusive `[min, max]` range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeFieldDef {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub source: RangeSource,
}

impl RangeFieldDef {
    pub fn value_of(&self, record: &Record) -> f64 {
        self.source.value_of(record, &self.key)
    }
}

/// A numeric field (raw or derived) offered as a chart measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureFieldDef {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub source: MeasureSource,
}

impl MeasureFieldDef {
    pub fn value_of(&self, record: &Record) -> f64 {
        self.source.value_of(record, &self.key)
    }
}

/// How a table column renders its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnFormat {
    /// String form; set-valued fields joined with ", ".
    Text,
    /// Dollar sign plus two decimals.
    Currency,
}

impl Default for ColumnFormat {
    fn default() -> Self {
        ColumnFormat::Text
    }
}

/// One column of the catalogue table. Text search scans these columns and
/// the session sort is restricted to the sortable ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub format: ColumnFormat,
    #[serde(default)]
    pub sortable: bool,
}

impl ColumnDef {
    pub fn new(key: &str, label: &str) -> Self {
        ColumnDef {
            key: key.to_string(),
            label: label.to_string(),
            format: ColumnFormat::Text,
            sortable: false,
        }
    }

    pub fn currency(mut self) -> Self {
        self.format = ColumnFormat::Currency;
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// The full configuration table for one catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogueSchema {
    /// Table columns, in display order.
    pub columns: Vec<ColumnDef>,

    /// Multi-select facet fields, in dropdown order.
    pub facet_fields: Vec<FieldOption>,

    /// Range-filterable numeric fields.
    pub range_fields: Vec<RangeFieldDef>,

    /// Fields offered as chart group/stack axes.
    pub chart_fields: Vec<FieldOption>,

    /// Fields offered as chart measures.
    pub measures: Vec<MeasureFieldDef>,

    /// Report parameters a fresh session starts from.
    pub default_group_by: String,
    pub default_stack_by: String,
    pub default_measure: String,
}

impl CatalogueSchema {
    pub fn facet_field(&self, key: &str) -> Option<&FieldOption> {
        self.facet_fields.iter().find(|f| f.key == key)
    }

    pub fn range_field(&self, key: &str) -> Option<&RangeFieldDef> {
        self.range_fields.iter().find(|f| f.key == key)
    }

    pub fn chart_field(&self, key: &str) -> Option<&FieldOption> {
        self.chart_fields.iter().find(|f| f.key == key)
    }

    pub fn measure(&self, key: &str) -> Option<&MeasureFieldDef> {
        self.measures.iter().find(|m| m.key == key)
    }

    pub fn column(&self, key: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Label for a field key, falling back to the key itself.
    pub fn label_of<'a>(&'a self, key: &'a str) -> &'a str {
        self.facet_field(key)
            .map(|f| f.label.as_str())
            .or_else(|| self.range_field(key).map(|f| f.label.as_str()))
            .or_else(|| self.column(key).map(|c| c.label.as_str()))
            .unwrap_or(key)
    }
}

impl Default for CatalogueSchema {
    fn default() -> Self {
        CatalogueSchema {
            columns: vec![
                ColumnDef::new("style_number", "Style #").sortable(),
                ColumnDef::new("image_url", "Image"),
                ColumnDef::new("name", "Name"),
                ColumnDef::new("season", "Season").sortable(),
                ColumnDef::new("line", "Line"),
                ColumnDef::new("category", "Category"),
                ColumnDef::new("color", "Color"),
                ColumnDef::new("available_sizes", "Sizes"),
                ColumnDef::new("buyer", "Buyer"),
                ColumnDef::new("date_added", "Date Added").sortable(),
                ColumnDef::new("quantity_sold", "Qty Sold").sortable(),
                ColumnDef::new(FIELD_PRICE, "Price").currency().sortable(),
                ColumnDef::new(FIELD_COST, "Cost").currency().sortable(),
                ColumnDef::new("fabric", "Fabric"),
                ColumnDef::new("status", "Status"),
            ],
            facet_fields: vec![
                FieldOption::new("season", "Season"),
                FieldOption::new("line", "Line"),
                FieldOption::new("category", "Category"),
                FieldOption::new("color", "Color"),
                FieldOption::new("available_sizes", "Sizes"),
                FieldOption::new("fabric", "Fabric"),
                FieldOption::new("buyer", "Buyer"),
                FieldOption::new("status", "Status"),
            ],
            range_fields: vec![
                RangeFieldDef {
                    key: FIELD_PRICE.to_string(),
                    label: "Price".to_string(),
                    source: RangeSource::Field,
                },
                RangeFieldDef {
                    key: FIELD_COST.to_string(),
                    label: "Cost".to_string(),
                    source: RangeSource::Field,
                },
                RangeFieldDef {
                    key: "margin".to_string(),
                    label: "Margin %".to_string(),
                    source: RangeSource::MarginPercent,
                },
            ],
            chart_fields: vec![
                FieldOption::new("season", "Season"),
                FieldOption::new("line", "Line"),
                FieldOption::new("category", "Category"),
                FieldOption::new("color", "Color"),
                FieldOption::new("buyer", "Buyer"),
                FieldOption::new("fabric", "Fabric"),
            ],
            measures: vec![
                MeasureFieldDef {
                    key: FIELD_QUANTITY_SOLD.to_string(),
                    label: "Quantity Sold".to_string(),
                    source: MeasureSource::Field,
                },
                MeasureFieldDef {
                    key: FIELD_PRICE.to_string(),
                    label: "Price".to_string(),
                    source: MeasureSource::Field,
                },
                MeasureFieldDef {
                    key: FIELD_COST.to_string(),
                    label: "Cost".to_string(),
                    source: MeasureSource::Field,
                },
                MeasureFieldDef {
                    key: "margin".to_string(),
                    label: "Margin".to_string(),
                    source: MeasureSource::MarginAmount,
                },
            ],
            default_group_by: "season".to_string(),
            default_stack_by: "category".to_string(),
            default_measure: FIELD_QUANTITY_SOLD.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema_lookups() {
        let schema = CatalogueSchema::default();
        assert!(schema.facet_field("season").is_some());
        assert!(schema.facet_field("price").is_none());
        assert_eq!(schema.range_field("margin").unwrap().source, RangeSource::MarginPercent);
        assert_eq!(schema.measure("margin").unwrap().source, MeasureSource::MarginAmount);
        assert_eq!(schema.label_of("season"), "Season");
        assert_eq!(schema.label_of("margin"), "Margin %");
        assert_eq!(schema.label_of("nonesuch"), "nonesuch");
    }

    #[test]
    fn test_derived_sources_read_records() {
        let mut record = Record::new();
        record.set(FIELD_PRICE, 50.0);
        record.set(FIELD_COST, 20.0);
        record.set(FIELD_QUANTITY_SOLD, 10.0);

        let schema = CatalogueSchema::default();
        assert_eq!(schema.range_field("margin").unwrap().value_of(&record), 60.0);
        assert_eq!(schema.measure("margin").unwrap().value_of(&record), 300.0);
        assert_eq!(schema.range_field("price").unwrap().value_of(&record), 50.0);
    }

    #[test]
    fn test_defaults_are_chartable() {
        let schema = CatalogueSchema::default();
        assert!(schema.chart_field(&schema.default_group_by).is_some());
        assert!(schema.chart_field(&schema.default_stack_by).is_some());
        assert!(schema.measure(&schema.default_measure).is_some());
        assert_ne!(schema.default_group_by, schema.default_stack_by);
    }
}

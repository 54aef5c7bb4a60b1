//! FILENAME: catalogue/src/record.rs
//! PURPOSE: Defines the catalogue record, a frozen mapping of field names to
//! values, plus the derived margin measures computed from it.
//! CONTEXT: Records arrive from an external data-loading collaborator and
//! are never mutated by the engine; accessors degrade to `Empty`/`NaN`
//! instead of failing so bad data can never crash a filter or report run.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::field::FieldValue;

/// Well-known numeric fields used by the derived measures.
pub const FIELD_PRICE: &str = "price";
pub const FIELD_COST: &str = "cost";
pub const FIELD_QUANTITY_SOLD: &str = "quantity_sold";

static EMPTY_FIELD: FieldValue = FieldValue::Empty;

/// One product row of the catalogue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Record {
            fields: HashMap::new(),
        }
    }

    /// Sets a field, replacing any previous value.
    pub fn set(&mut self, key: &str, value: impl Into<FieldValue>) {
        self.fields.insert(key.to_string(), value.into());
    }

    /// Returns the field's value, or `Empty` when the record has no such
    /// field. Missing and empty are deliberately indistinguishable here.
    pub fn field(&self, key: &str) -> &FieldValue {
        self.fields.get(key).unwrap_or(&EMPTY_FIELD)
    }

    /// The field coerced to a number (`NaN` for anything non-numeric).
    pub fn number(&self, key: &str) -> f64 {
        self.field(key).as_number()
    }

    /// Iterates over all present fields, in no particular order.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    /// Profit ratio in percent: `(price - cost) / price * 100`.
    /// Undefined when `price == 0`; returns `NaN` so range comparisons
    /// reject the record instead of producing an infinity.
    pub fn margin_percent(&self) -> f64 {
        let price = self.number(FIELD_PRICE);
        let cost = self.number(FIELD_COST);
        if price == 0.0 {
            return f64::NAN;
        }
        (price - cost) / price * 100.0
    }

    /// Absolute profit contributed: `quantity_sold * (price - cost)`.
    pub fn margin_amount(&self) -> f64 {
        self.number(FIELD_QUANTITY_SOLD) * (self.number(FIELD_PRICE) - self.number(FIELD_COST))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Record {
            fields: iter.into_iter().collect(),
        }
    }
}

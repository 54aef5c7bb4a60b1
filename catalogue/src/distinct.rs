//! FILENAME: catalogue/src/distinct.rs
//! PURPOSE: First-encounter-ordered collection of distinct field values.
//! CONTEXT: Faceting uses this to build dropdown option lists and the
//! aggregation engine uses it to assign stable ids to group and stack keys.
//! Encounter order is the contract: it drives dropdown ordering and the
//! column universe of every chart.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Identifier of one interned key. Indexes into the encounter-ordered list.
pub type KeyId = u32;

/// Deduplicates string keys while remembering the order in which they were
/// first seen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyInterner {
    /// Map from key to its id (for deduplication during the scan).
    key_to_id: FxHashMap<String, KeyId>,

    /// Ordered list of unique keys (indexed by KeyId).
    keys: Vec<String>,
}

impl KeyInterner {
    pub fn new() -> Self {
        KeyInterner {
            key_to_id: FxHashMap::default(),
            keys: Vec::new(),
        }
    }

    /// Returns the key's id, assigning the next id on first encounter.
    pub fn intern(&mut self, key: &str) -> KeyId {
        if let Some(&id) = self.key_to_id.get(key) {
            return id;
        }
        let id = self.keys.len() as KeyId;
        self.key_to_id.insert(key.to_string(), id);
        self.keys.push(key.to_string());
        id
    }

    /// Id of an already-interned key.
    pub fn get(&self, key: &str) -> Option<KeyId> {
        self.key_to_id.get(key).copied()
    }

    /// The distinct keys in first-encounter order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Consumes the interner, yielding the ordered keys.
    pub fn into_keys(self) -> Vec<String> {
        self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

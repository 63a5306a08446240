// tests/common.rs
//! Shared test utilities — in-memory stand-ins for host entries

use std::collections::HashMap;

use selection_export::FieldSource;

/// Source entry backed by a plain map, the way a host store would answer
/// field lookups after decryption
#[derive(Default)]
pub struct MapEntry {
    fields: HashMap<String, String>,
}

impl MapEntry {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }
}

impl FieldSource for MapEntry {
    fn get(&self, field: &str) -> Option<String> {
        self.fields.get(field).cloned()
    }
}

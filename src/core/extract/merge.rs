//! Deduplication of extracted keys and merging into existing dictionaries.

use std::collections::HashSet;

use serde_json::Value;

use crate::core::extract::collector::ExtractedKey;
use crate::core::parsers::json::Dictionary;

/// Unique keys in first-seen order, plus every later repeat.
#[derive(Debug, Default)]
pub struct KeySet {
    pub keys: Vec<ExtractedKey>,
    pub duplicates: Vec<ExtractedKey>,
}

impl KeySet {
    /// First occurrence wins. Repeats are kept for reporting only.
    pub fn from_occurrences(occurrences: impl IntoIterator<Item = ExtractedKey>) -> Self {
        let mut seen = HashSet::new();
        let mut set = KeySet::default();
        for key in occurrences {
            if seen.insert(key.key.clone()) {
                set.keys.push(key);
            } else {
                set.duplicates.push(key);
            }
        }
        set
    }

    /// Keys in output order: byte order when `sort`, first-seen order otherwise.
    pub fn ordered(&self, sort: bool) -> Vec<&ExtractedKey> {
        let mut keys: Vec<&ExtractedKey> = self.keys.iter().collect();
        if sort {
            keys.sort_by(|a, b| a.key.cmp(&b.key));
        }
        keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Value written for a key that has no translation yet.
pub fn initial_value(key: &ExtractedKey) -> String {
    key.default_value.clone().unwrap_or_else(|| key.key.clone())
}

/// Build a language dictionary from extracted keys.
///
/// With `existing`, its entries are kept as they are (values are never
/// overwritten) and only missing keys are added. With `sort`, the whole
/// dictionary is ordered by key. Returns the dictionary and the number of
/// keys that were added.
pub fn merge_dictionary(
    existing: Option<&Dictionary>,
    keys: &KeySet,
    sort: bool,
) -> (Dictionary, usize) {
    let mut dictionary = existing.cloned().unwrap_or_default();
    let mut added = 0;

    for key in &keys.keys {
        if !dictionary.contains_key(&key.key) {
            dictionary.insert(key.key.clone(), Value::String(initial_value(key)));
            added += 1;
        }
    }

    if sort {
        let mut entries: Vec<(String, Value)> = dictionary.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        dictionary = entries.into_iter().collect();
    }
    (dictionary, added)
}

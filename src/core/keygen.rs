//! Translation key generation.
//!
//! By default the key of a literal is the literal text itself. With key
//! generation enabled, a camelCase identifier is derived from the text and the
//! `key -> text` pair is recorded in a [`TranslationKeyMap`] that is written
//! out as a dictionary at the end of the run.

use serde_json::Value;

use crate::core::parsers::json::Dictionary;
use crate::utils::is_hangul_syllable;

/// Run-scoped `key -> original text` accumulator.
///
/// Each file gets its own map while it is rewritten; maps are merged in file
/// order afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationKeyMap {
    entries: Dictionary,
}

impl TranslationKeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: &str, text: &str) {
        self.entries
            .insert(key.to_string(), Value::String(text.to_string()));
    }

    /// Merge another map into this one. Later entries overwrite earlier values.
    pub fn extend(&mut self, other: TranslationKeyMap) {
        for (key, value) in other.entries {
            self.entries.insert(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    pub fn as_dictionary(&self) -> &Dictionary {
        &self.entries
    }
}

/// Derives translation keys from literal text.
#[derive(Debug, Clone, Default)]
pub struct KeyGenerator {
    enabled: bool,
    prefix: Option<String>,
}

impl KeyGenerator {
    pub fn new(enabled: bool, prefix: Option<String>) -> Self {
        Self {
            enabled,
            prefix: prefix.filter(|p| !p.is_empty()),
        }
    }

    /// Return the key for `text`, recording generated keys in `keys`.
    pub fn key_for(&self, text: &str, keys: &mut TranslationKeyMap) -> String {
        if !self.enabled {
            return text.to_string();
        }

        let mut key = camel_case_key(text);
        if key.is_empty() {
            key = text.trim().to_string();
        }

        let full_key = match &self.prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key,
        };

        keys.record(&full_key, text);
        full_key
    }
}

/// Build a camelCase key out of the letters, digits and whitespace of `text`.
///
/// Returns an empty string when nothing survives the filtering.
pub fn camel_case_key(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || is_hangul_syllable(c) || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .enumerate()
        .map(|(index, word)| {
            if index == 0 {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

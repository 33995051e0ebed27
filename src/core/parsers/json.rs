use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

/// A flat translation dictionary: `key -> text`.
///
/// Backed by `serde_json::Map` with `preserve_order`, so keys keep the order
/// they were inserted in (or the order of the file they were read from).
pub type Dictionary = Map<String, Value>;

/// Read a dictionary file.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_dictionary(path: &Path) -> Result<Option<Dictionary>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;

    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))?;

    match value {
        Value::Object(map) => Ok(Some(map)),
        _ => bail!("Root of JSON file must be an object: {}", path.display()),
    }
}

/// Serialize a dictionary with 2-space indentation and a trailing newline.
pub fn render_dictionary(dictionary: &Dictionary) -> Result<String> {
    let content =
        serde_json::to_string_pretty(dictionary).context("Failed to serialize JSON")?;
    Ok(format!("{}\n", content))
}

/// Write a dictionary, creating parent directories as needed.
pub fn write_dictionary(path: &Path, dictionary: &Dictionary) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, render_dictionary(dictionary)?)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}

/// String value of a dictionary entry, if it is a string.
pub fn text_of<'a>(dictionary: &'a Dictionary, key: &str) -> Option<&'a str> {
    dictionary.get(key).and_then(Value::as_str)
}

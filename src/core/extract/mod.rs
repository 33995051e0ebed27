//! Key extraction: collect `t("key")` calls and render dictionaries.

pub mod collector;
pub mod merge;
pub mod output;

use std::sync::Arc;

use anyhow::{Context, Result};
use rayon::prelude::*;
use swc_common::SourceMap;

use crate::core::ParseError;

pub use collector::{ExtractedKey, KeyCollector, collect_keys};
pub use merge::{KeySet, merge_dictionary};
pub use output::{OutputFile, OutputFormat, OutputPlan, OutputRenderer, Render};

/// Keys of every scanned file, deduplicated.
#[derive(Debug, Default)]
pub struct Extraction {
    pub keys: KeySet,
    pub parse_errors: Vec<ParseError>,
    pub files_scanned: usize,
}

/// Read and parse `files` in parallel, then merge their keys in input order.
///
/// A file that cannot be read fails the whole run. Parse failures are
/// collected and the file is skipped.
pub fn extract_files(files: &[String]) -> Result<Extraction> {
    let results: Vec<_> = files
        .par_iter()
        .map(|file_path| -> Result<_> {
            let code = std::fs::read_to_string(file_path)
                .with_context(|| format!("Failed to read file: {}", file_path))?;
            let result = collect_keys(code, file_path, Arc::new(SourceMap::default()));
            Ok((file_path, result))
        })
        .collect::<Result<_>>()?;

    let mut occurrences = Vec::new();
    let mut parse_errors = Vec::new();
    for (file_path, result) in results {
        match result {
            Ok(keys) => occurrences.extend(keys),
            Err(e) => parse_errors.push(ParseError::new(file_path, &e)),
        }
    }

    Ok(Extraction {
        keys: KeySet::from_occurrences(occurrences),
        parse_errors,
        files_scanned: files.len(),
    })
}

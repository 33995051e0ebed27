//! Core engine: parsing, literal classification, rewriting and key extraction.
//!
//! - `wrap`: rewrites hardcoded text inside React components into `t()` calls
//! - `extract`: collects `t()` keys and renders translation dictionaries
//! - `edit`: span-based source editing shared by the rewriters

pub mod classify;
pub mod edit;
pub mod extract;
pub mod file_scanner;
pub mod keygen;
pub mod parsers;
pub mod scope;
pub mod wrap;

/// A source file that could not be read or parsed. The file is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub file_path: String,
    pub error: String,
}

impl ParseError {
    pub fn new(file_path: &str, error: &anyhow::Error) -> Self {
        Self {
            file_path: file_path.to_string(),
            error: format!("{:#}", error),
        }
    }
}

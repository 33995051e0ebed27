use std::path::PathBuf;

use crate::cli::exit_status::ExitStatus;
use crate::core::ParseError;
use crate::core::extract::{ExtractedKey, OutputFile};
use crate::core::wrap::{ImportChange, ModifiedComponent, TranslatableLiteral};

#[derive(Debug)]
pub enum CommandSummary {
    Wrap(WrapSummary),
    Extract(ExtractSummary),
    Init(InitSummary),
}

/// A source file that was (or would be) rewritten.
#[derive(Debug)]
pub struct WrappedFile {
    pub path: String,
    pub literals: Vec<TranslatableLiteral>,
    pub components: Vec<ModifiedComponent>,
    pub hooks_inserted: usize,
    pub import_change: Option<ImportChange>,
}

/// Dictionary of generated keys written by `wrap --generate-keys`.
#[derive(Debug)]
pub struct KeyFileSummary {
    pub path: PathBuf,
    pub total_keys: usize,
    pub added_keys: usize,
}

#[derive(Debug)]
pub struct WrapSummary {
    pub files_scanned: usize,
    pub files: Vec<WrappedFile>,
    pub key_file: Option<KeyFileSummary>,
    pub is_dry_run: bool,
}

impl WrapSummary {
    pub fn literal_count(&self) -> usize {
        self.files.iter().map(|f| f.literals.len()).sum()
    }

    pub fn hook_count(&self) -> usize {
        self.files.iter().map(|f| f.hooks_inserted).sum()
    }
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub files_scanned: usize,
    /// Unique keys in output order.
    pub keys: Vec<ExtractedKey>,
    pub duplicates: Vec<ExtractedKey>,
    pub outputs: Vec<OutputFile>,
    pub show_file_paths: bool,
    pub show_line_numbers: bool,
    pub is_dry_run: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running an i18nexus command
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Source files that could not be read or parsed. They were skipped.
    pub parse_errors: Vec<ParseError>,
    pub exit_status: ExitStatus,
}

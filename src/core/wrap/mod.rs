//! The wrap pipeline for a single source file.
//!
//! parse → find components → rewrite literals → inject hooks → inject import →
//! apply edits. Everything here is pure per-file work; reading and writing
//! files is left to the caller.

pub mod component;
pub mod injector;
pub mod rewriter;

use std::sync::Arc;

use anyhow::Result;
use swc_common::SourceMap;

use crate::core::classify::TextClassifier;
use crate::core::edit::apply_edits;
use crate::core::keygen::{KeyGenerator, TranslationKeyMap};
use crate::core::parsers::jsx::parse_jsx_source;

pub use component::is_component_name;
pub use injector::ImportChange;
pub use rewriter::{LiteralSite, ModifiedComponent, TranslatableLiteral};

/// Name of the translation function bound by the hook.
pub const TRANSLATION_FN: &str = "t";

/// Hook that provides the translation function.
pub const HOOK_NAME: &str = "useTranslation";

/// Module the hook is imported from when nothing else is configured.
pub const DEFAULT_IMPORT_SOURCE: &str = "i18nexus";

/// Settings shared by every file of a wrap run.
#[derive(Debug, Clone)]
pub struct WrapOptions {
    pub classifier: TextClassifier,
    pub key_generator: KeyGenerator,
    pub import_source: String,
    /// Passed to `useTranslation("<namespace>")` when set.
    pub namespace: Option<String>,
}

/// Result of rewriting one file that needed changes.
#[derive(Debug, Clone)]
pub struct FileRewrite {
    pub output: String,
    pub literals: Vec<TranslatableLiteral>,
    pub components: Vec<ModifiedComponent>,
    pub hooks_inserted: usize,
    pub import_change: Option<ImportChange>,
    /// Generated keys of this file. Empty unless key generation is on.
    pub keys: TranslationKeyMap,
}

/// Rewrite `code`. Returns `Ok(None)` when no component needed changes.
pub fn rewrite_source(
    code: &str,
    file_path: &str,
    options: &WrapOptions,
    source_map: Arc<SourceMap>,
) -> Result<Option<FileRewrite>> {
    let parsed = parse_jsx_source(code.to_string(), file_path, source_map)?;

    let mut rewriter = rewriter::ComponentRewriter::new(&parsed, code, options);
    rewriter.rewrite(&parsed.module);
    if rewriter.components.is_empty() {
        return Ok(None);
    }

    let hooks_inserted = rewriter.hooks_inserted();
    let mut edits = std::mem::take(&mut rewriter.edits);
    let import_change = if hooks_inserted > 0 {
        let (change, import) =
            injector::import_edits(&parsed.module, &parsed, code, &options.import_source);
        edits.extend(import);
        Some(change)
    } else {
        None
    };

    let output = apply_edits(code, &edits)?;
    Ok(Some(FileRewrite {
        output,
        literals: rewriter.literals,
        components: rewriter.components,
        hooks_inserted,
        import_change,
        keys: rewriter.keys,
    }))
}

#[cfg(test)]
pub(crate) fn test_options() -> WrapOptions {
    use crate::core::classify::TextMode;

    WrapOptions {
        classifier: TextClassifier::from_mode(TextMode::Korean).unwrap(),
        key_generator: KeyGenerator::default(),
        import_source: DEFAULT_IMPORT_SOURCE.to_string(),
        namespace: None,
    }
}

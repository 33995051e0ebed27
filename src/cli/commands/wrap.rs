//! `i18nexus wrap`: rewrite hardcoded text into `t()` calls.
//!
//! Files are analyzed in parallel. Writes, key merging and reporting happen
//! afterwards in sorted path order.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use rayon::prelude::*;
use swc_common::SourceMap;

use super::{CommandResult, CommandSummary, KeyFileSummary, WrapSummary, WrappedFile};
use crate::cli::args::WrapArgs;
use crate::cli::exit_status::ExitStatus;
use crate::config::{CONFIG_FILE_NAME, WrapConfig, load_config};
use crate::core::ParseError;
use crate::core::classify::{TextClassifier, TextMode};
use crate::core::file_scanner::scan_files;
use crate::core::keygen::{KeyGenerator, TranslationKeyMap};
use crate::core::parsers::json::{read_dictionary, write_dictionary};
use crate::core::wrap::{FileRewrite, WrapOptions, rewrite_source};

/// Key file name used when no namespace is configured.
const DEFAULT_KEY_FILE_STEM: &str = "common";

/// Wrap settings after applying CLI overrides to the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapSettings {
    pub pattern: String,
    pub generate_keys: bool,
    pub namespace: Option<String>,
    pub text_mode: TextMode,
    pub text_regex: Option<String>,
    pub import_source: String,
    pub key_prefix: Option<String>,
    pub output_dir: String,
    pub dry_run: bool,
    pub verbose: bool,
}

impl WrapSettings {
    /// CLI flags win over the config file.
    pub fn resolve(args: WrapArgs, config: WrapConfig) -> Self {
        let korean = config.process_korean && !args.no_korean;
        let english = config.process_english || args.english;
        Self {
            pattern: args.pattern.unwrap_or(config.pattern),
            generate_keys: args.generate_keys || config.generate_keys,
            namespace: args.namespace.or(config.namespace),
            text_mode: TextMode::from_flags(korean, english),
            text_regex: args.text_regex.or(config.text_regex),
            import_source: args.import_source.unwrap_or(config.import_source),
            key_prefix: args.key_prefix.or(config.key_prefix),
            output_dir: args.output_dir.unwrap_or(config.output_dir),
            dry_run: args.dry_run,
            verbose: args.verbose,
        }
    }

    pub fn options(&self) -> Result<WrapOptions> {
        Ok(WrapOptions {
            classifier: TextClassifier::resolve(self.text_mode, self.text_regex.as_deref())?,
            key_generator: KeyGenerator::new(self.generate_keys, self.key_prefix.clone()),
            import_source: self.import_source.clone(),
            namespace: self.namespace.clone(),
        })
    }

    pub fn key_file_path(&self) -> PathBuf {
        let stem = self.namespace.as_deref().unwrap_or(DEFAULT_KEY_FILE_STEM);
        Path::new(&self.output_dir).join(format!("{}.json", stem))
    }
}

pub fn wrap(args: WrapArgs) -> Result<CommandResult> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let loaded = load_config(&cwd)?;
    if args.verbose && !loaded.from_file {
        eprintln!("Note: No {} found, using default configuration", CONFIG_FILE_NAME);
    }
    let config = loaded.config;
    let settings = WrapSettings::resolve(args, config.wrap);
    let options = settings.options()?;

    let scan = scan_files(&cwd, &settings.pattern, settings.verbose)?;

    let results: Vec<(&String, Result<Option<FileRewrite>>)> = scan
        .files
        .par_iter()
        .map(|file_path| -> Result<_> {
            let code = fs::read_to_string(cwd.join(file_path))
                .with_context(|| format!("Failed to read file: {}", file_path))?;
            let result =
                rewrite_source(&code, file_path, &options, Arc::new(SourceMap::default()));
            Ok((file_path, result))
        })
        .collect::<Result<_>>()?;

    let mut files = Vec::new();
    let mut parse_errors = Vec::new();
    let mut keys = TranslationKeyMap::new();

    for (file_path, result) in results {
        let rewrite = match result {
            Ok(Some(rewrite)) => rewrite,
            Ok(None) => continue,
            Err(e) => {
                parse_errors.push(ParseError::new(file_path, &e));
                continue;
            }
        };

        if !settings.dry_run {
            let target = cwd.join(file_path);
            fs::write(&target, &rewrite.output)
                .with_context(|| format!("Failed to write file: {}", target.display()))?;
        }

        keys.extend(rewrite.keys);
        files.push(WrappedFile {
            path: file_path.clone(),
            literals: rewrite.literals,
            components: rewrite.components,
            hooks_inserted: rewrite.hooks_inserted,
            import_change: rewrite.import_change,
        });
    }

    let key_file = if keys.is_empty() {
        None
    } else {
        Some(write_key_file(&settings.key_file_path(), &keys, settings.dry_run)?)
    };

    Ok(CommandResult {
        summary: CommandSummary::Wrap(WrapSummary {
            files_scanned: scan.files.len(),
            files,
            key_file,
            is_dry_run: settings.dry_run,
        }),
        parse_errors,
        exit_status: ExitStatus::Success,
    })
}

/// Merge generated keys into the key file. Existing entries keep their values.
fn write_key_file(path: &Path, keys: &TranslationKeyMap, dry_run: bool) -> Result<KeyFileSummary> {
    let mut dictionary = read_dictionary(path)?.unwrap_or_default();
    let mut added_keys = 0;
    for (key, text) in keys.as_dictionary() {
        if !dictionary.contains_key(key) {
            dictionary.insert(key.clone(), text.clone());
            added_keys += 1;
        }
    }

    if !dry_run {
        write_dictionary(path, &dictionary)?;
    }

    Ok(KeyFileSummary {
        path: path.to_path_buf(),
        total_keys: keys.len(),
        added_keys,
    })
}

//! `i18nexus extract`: collect `t()` keys into translation dictionaries.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::cli::args::ExtractArgs;
use crate::cli::exit_status::ExitStatus;
use crate::config::{CONFIG_FILE_NAME, ExtractConfig, load_config};
use crate::core::extract::{OutputFormat, OutputPlan, OutputRenderer, Render, extract_files};
use crate::core::file_scanner::scan_files;

/// Extract settings after applying CLI overrides to the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSettings {
    pub pattern: String,
    pub output_file: Option<String>,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub languages: Vec<String>,
    pub namespace: Option<String>,
    pub merge: bool,
    pub sort: bool,
    pub show_line_numbers: bool,
    pub show_file_paths: bool,
    pub dry_run: bool,
    pub verbose: bool,
}

impl ExtractSettings {
    /// CLI flags win over the config file.
    pub fn resolve(args: ExtractArgs, config: ExtractConfig) -> Result<Self> {
        let languages = if args.languages.is_empty() {
            config.languages
        } else {
            args.languages
                .into_iter()
                .map(|lang| lang.trim().to_string())
                .filter(|lang| !lang.is_empty())
                .collect()
        };
        if languages.is_empty() {
            bail!("At least one language is required");
        }

        Ok(Self {
            pattern: args.pattern.unwrap_or(config.pattern),
            output_file: args.output.or(config.output_file),
            output_dir: PathBuf::from(args.output_dir.unwrap_or(config.output_dir)),
            format: args.format.unwrap_or(config.format),
            languages,
            namespace: args.namespace.or(config.namespace),
            merge: config.merge && !args.no_merge,
            sort: config.sort_keys && !args.no_sort,
            show_line_numbers: args.line_numbers || config.include_line_numbers,
            show_file_paths: args.file_paths || config.include_file_paths,
            dry_run: args.dry_run,
            verbose: args.verbose,
        })
    }

    fn renderer(&self) -> OutputRenderer {
        OutputRenderer::new(
            self.format,
            self.languages.clone(),
            self.output_file.as_deref(),
        )
    }
}

pub fn extract(args: ExtractArgs) -> Result<CommandResult> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let loaded = load_config(&cwd)?;
    if args.verbose && !loaded.from_file {
        eprintln!("Note: No {} found, using default configuration", CONFIG_FILE_NAME);
    }
    let config = loaded.config;
    let settings = ExtractSettings::resolve(args, config.extract)?;

    let scan = scan_files(&cwd, &settings.pattern, settings.verbose)?;
    let extraction = extract_files(&scan.files)?;

    let outputs = settings.renderer().render(&OutputPlan {
        output_dir: &settings.output_dir,
        keys: &extraction.keys,
        namespace: settings.namespace.as_deref(),
        merge: settings.merge,
        sort: settings.sort,
    })?;

    if !settings.dry_run {
        for output in &outputs {
            output.write()?;
        }
    }

    let keys = extraction
        .keys
        .ordered(settings.sort)
        .into_iter()
        .cloned()
        .collect();

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            files_scanned: extraction.files_scanned,
            keys,
            duplicates: extraction.keys.duplicates,
            outputs,
            show_file_paths: settings.show_file_paths,
            show_line_numbers: settings.show_line_numbers,
            is_dry_run: settings.dry_run,
        }),
        parse_errors: extraction.parse_errors,
        exit_status: ExitStatus::Success,
    })
}

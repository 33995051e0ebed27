//! Rendering of extracted keys into dictionary files.
//!
//! Two layouts are supported:
//! - JSON: one dictionary per language. The file is named after `--output`,
//!   then the namespace, then the language. Named files sit directly in
//!   `<dir>` for a single language and in `<dir>/<lang>/` otherwise.
//! - CSV: a single `Key,English,Korean` sheet for spreadsheet import.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::ValueEnum;
use csv::{Terminator, WriterBuilder};
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use crate::core::extract::merge::{KeySet, initial_value, merge_dictionary};
use crate::core::parsers::json::{Dictionary, read_dictionary, render_dictionary, text_of};

pub const CSV_HEADER: [&str; 3] = ["Key", "English", "Korean"];
pub const DEFAULT_CSV_FILE: &str = "extracted-translations.csv";

/// Output layout of the extract command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

/// Inputs shared by every renderer.
pub struct OutputPlan<'a> {
    pub output_dir: &'a Path,
    pub keys: &'a KeySet,
    pub namespace: Option<&'a str>,
    /// Merge with dictionaries already on disk.
    pub merge: bool,
    pub sort: bool,
}

impl OutputPlan<'_> {
    /// Location of the `language` dictionary in a multi-language layout.
    pub fn dictionary_path(&self, language: &str) -> PathBuf {
        match self.namespace {
            Some(namespace) => self
                .output_dir
                .join(language)
                .join(format!("{}.json", namespace)),
            None => self.output_dir.join(format!("{}.json", language)),
        }
    }

    fn existing_dictionary(&self, path: &Path) -> Result<Option<Dictionary>> {
        if !self.merge {
            return Ok(None);
        }
        read_dictionary(path)
    }
}

/// A rendered file, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub contents: String,
    /// Keys that were not present before.
    pub added: usize,
}

impl OutputFile {
    pub fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create directory: {}", parent.display())
            })?;
        }
        fs::write(&self.path, &self.contents)
            .with_context(|| format!("Failed to write file: {}", self.path.display()))
    }
}

#[enum_dispatch]
pub trait Render {
    fn render(&self, plan: &OutputPlan<'_>) -> Result<Vec<OutputFile>>;
}

/// One merged JSON dictionary per language.
#[derive(Debug, Clone)]
pub struct JsonOutput {
    pub languages: Vec<String>,
    /// `--output` file name.
    pub file_name: Option<String>,
}

impl JsonOutput {
    pub fn dictionary_path(&self, plan: &OutputPlan<'_>, language: &str) -> PathBuf {
        let file_name = self
            .file_name
            .clone()
            .or_else(|| plan.namespace.map(|namespace| format!("{}.json", namespace)));
        match file_name {
            Some(file_name) if self.languages.len() == 1 => plan.output_dir.join(file_name),
            Some(file_name) => plan.output_dir.join(language).join(file_name),
            None => plan.output_dir.join(format!("{}.json", language)),
        }
    }
}

impl Render for JsonOutput {
    fn render(&self, plan: &OutputPlan<'_>) -> Result<Vec<OutputFile>> {
        self.languages
            .iter()
            .map(|language| {
                let path = self.dictionary_path(plan, language);
                let existing = plan.existing_dictionary(&path)?;
                let (dictionary, added) = merge_dictionary(existing.as_ref(), plan.keys, plan.sort);
                Ok(OutputFile {
                    path,
                    contents: render_dictionary(&dictionary)?,
                    added,
                })
            })
            .collect()
    }
}

/// `Key,English,Korean` sheet, filled from the `en` and `ko` dictionaries.
#[derive(Debug, Clone)]
pub struct CsvOutput {
    pub file_name: String,
}

impl CsvOutput {
    /// The sheet is always a `.csv` file, even when a `.json` name was given.
    pub fn new(output: Option<&str>) -> Self {
        let file_name = match output {
            Some(name) => match name.strip_suffix(".json") {
                Some(stem) => format!("{}.csv", stem),
                None => name.to_string(),
            },
            None => DEFAULT_CSV_FILE.to_string(),
        };
        Self { file_name }
    }
}

impl Render for CsvOutput {
    fn render(&self, plan: &OutputPlan<'_>) -> Result<Vec<OutputFile>> {
        let english = plan.existing_dictionary(&plan.dictionary_path("en"))?;
        let korean = plan.existing_dictionary(&plan.dictionary_path("ko"))?;

        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer.write_record(CSV_HEADER)?;

        let mut added = 0;
        for key in plan.keys.ordered(plan.sort) {
            let en = english
                .as_ref()
                .and_then(|d| text_of(d, &key.key))
                .unwrap_or_default();
            let ko = match korean.as_ref().and_then(|d| text_of(d, &key.key)) {
                Some(existing) => existing.to_string(),
                None => {
                    added += 1;
                    initial_value(key)
                }
            };
            writer.write_record([key.key.as_str(), en, ko.as_str()])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to render CSV: {}", e))?;
        let contents = String::from_utf8(bytes).context("Rendered CSV is not valid UTF-8")?;

        Ok(vec![OutputFile {
            path: plan.output_dir.join(&self.file_name),
            contents,
            added,
        }])
    }
}

#[enum_dispatch(Render)]
#[derive(Debug, Clone)]
pub enum OutputRenderer {
    Json(JsonOutput),
    Csv(CsvOutput),
}

impl OutputRenderer {
    pub fn new(format: OutputFormat, languages: Vec<String>, output: Option<&str>) -> Self {
        match format {
            OutputFormat::Json => JsonOutput {
                languages,
                file_name: output.map(str::to_string),
            }
            .into(),
            OutputFormat::Csv => CsvOutput::new(output).into(),
        }
    }
}

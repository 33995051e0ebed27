use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::classify::TextClassifier;
use crate::core::extract::OutputFormat;
use crate::core::file_scanner::compile_pattern;
use crate::core::wrap::DEFAULT_IMPORT_SOURCE;

pub const CONFIG_FILE_NAME: &str = ".i18nexusrc.json";

pub const DEFAULT_SOURCE_PATTERN: &str = "src/**/*.{js,jsx,ts,tsx}";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub wrap: WrapConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
}

/// Settings of the `wrap` command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WrapConfig {
    #[serde(default = "default_pattern")]
    pub pattern: String,
    #[serde(default)]
    pub generate_keys: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default = "default_true")]
    pub process_korean: bool,
    #[serde(default)]
    pub process_english: bool,
    /// Overrides `processKorean` / `processEnglish` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_regex: Option<String>,
    #[serde(default = "default_import_source")]
    pub import_source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_prefix: Option<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

/// Settings of the `extract` command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractConfig {
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// Output file name. JSON defaults to one file per language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default = "default_true")]
    pub merge: bool,
    #[serde(default = "default_true")]
    pub sort_keys: bool,
    #[serde(default)]
    pub include_line_numbers: bool,
    #[serde(default)]
    pub include_file_paths: bool,
}

fn default_pattern() -> String {
    DEFAULT_SOURCE_PATTERN.to_string()
}

fn default_true() -> bool {
    true
}

fn default_import_source() -> String {
    DEFAULT_IMPORT_SOURCE.to_string()
}

fn default_output_dir() -> String {
    "./locales".to_string()
}

fn default_languages() -> Vec<String> {
    ["en", "ko"].map(String::from).to_vec()
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            generate_keys: false,
            namespace: None,
            process_korean: true,
            process_english: false,
            text_regex: None,
            import_source: default_import_source(),
            key_prefix: None,
            output_dir: default_output_dir(),
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            output_file: None,
            output_dir: default_output_dir(),
            format: OutputFormat::default(),
            languages: default_languages(),
            namespace: None,
            merge: true,
            sort_keys: true,
            include_line_numbers: false,
            include_file_paths: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns, an invalid text regex, or an
    /// empty language list.
    pub fn validate(&self) -> Result<()> {
        compile_pattern(&self.wrap.pattern).context("Invalid 'wrap.pattern'")?;
        compile_pattern(&self.extract.pattern).context("Invalid 'extract.pattern'")?;

        if let Some(regex) = &self.wrap.text_regex {
            TextClassifier::from_pattern(regex).context("Invalid 'wrap.textRegex'")?;
        }

        if self.extract.languages.is_empty() {
            bail!("'extract.languages' must name at least one language");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

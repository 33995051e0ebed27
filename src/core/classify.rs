//! Decides whether a literal should be treated as translatable text.

use anyhow::{Context, Result};
use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Any precomposed Hangul syllable.
pub const KOREAN_PATTERN: &str = "[가-힣]";

/// Two or more consecutive Latin letters.
pub const ENGLISH_PATTERN: &str = "[a-zA-Z]{2,}";

/// Which scripts count as translatable text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextMode {
    #[default]
    Korean,
    English,
    Both,
}

impl TextMode {
    /// Resolve the mode from the two detection flags.
    ///
    /// With both flags off there is nothing sensible to detect, so Korean is used.
    pub fn from_flags(korean: bool, english: bool) -> Self {
        match (korean, english) {
            (true, true) => TextMode::Both,
            (false, true) => TextMode::English,
            _ => TextMode::Korean,
        }
    }

    pub fn pattern(self) -> String {
        match self {
            TextMode::Korean => KOREAN_PATTERN.to_string(),
            TextMode::English => ENGLISH_PATTERN.to_string(),
            TextMode::Both => format!("{}|{}", KOREAN_PATTERN, ENGLISH_PATTERN),
        }
    }
}

/// Regex-backed predicate over literal values.
#[derive(Debug, Clone)]
pub struct TextClassifier {
    regex: Regex,
}

impl TextClassifier {
    pub fn from_mode(mode: TextMode) -> Result<Self> {
        Self::from_pattern(&mode.pattern())
    }

    /// Build a classifier from a user supplied regular expression.
    pub fn from_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .with_context(|| format!("Invalid text regex: \"{}\"", pattern))?;
        Ok(Self { regex })
    }

    /// A custom pattern wins over the mode.
    pub fn resolve(mode: TextMode, custom: Option<&str>) -> Result<Self> {
        match custom {
            Some(pattern) => Self::from_pattern(pattern),
            None => Self::from_mode(mode),
        }
    }

    pub fn is_translatable(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

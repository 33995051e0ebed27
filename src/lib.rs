//! i18nexus - i18n automation for React projects
//!
//! i18nexus is a CLI tool and library that wraps hardcoded text in React
//! components with `t()` calls, injects the `useTranslation` hook and its
//! import, and extracts translation keys into JSON or CSV dictionaries.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reporting)
//! - `config`: `.i18nexusrc.json` loading and validation
//! - `core`: Parsing, rewriting and extraction engine
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

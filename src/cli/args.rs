//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `wrap`: Wrap hardcoded text in React components with `t()` calls
//! - `extract`: Extract `t()` keys into translation dictionaries
//! - `init`: Initialize the i18nexus configuration file
//!
//! Every option is optional on the command line. Unset options fall back to
//! `.i18nexusrc.json`, then to built-in defaults.

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::extract::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "i18nexus", author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag of the selected command.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Wrap(args)) => args.verbose,
            Some(Command::Extract(args)) => args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct WrapArgs {
    /// Source file glob, braces allowed [default: src/**/*.{js,jsx,ts,tsx}]
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Generate camelCase keys instead of using the text as the key
    #[arg(short, long)]
    pub generate_keys: bool,

    /// Namespace passed to useTranslation() and used as the key file name
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Also wrap English text
    #[arg(short, long)]
    pub english: bool,

    /// Do not wrap Korean text
    #[arg(long)]
    pub no_korean: bool,

    /// Custom regex for translatable text (overrides --english/--no-korean)
    #[arg(long)]
    pub text_regex: Option<String>,

    /// Module that provides useTranslation [default: i18nexus]
    #[arg(long)]
    pub import_source: Option<String>,

    /// Prefix for generated keys (`<prefix>.<key>`)
    #[arg(long)]
    pub key_prefix: Option<String>,

    /// Directory for the generated key file [default: ./locales]
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Show what would change without writing files
    #[arg(short, long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// Source file glob, braces allowed [default: src/**/*.{js,jsx,ts,tsx}]
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Output file name. JSON defaults to one file per language, CSV to extracted-translations.csv
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output directory [default: ./locales]
    #[arg(short = 'd', long)]
    pub output_dir: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Comma-separated languages for JSON output [default: en,ko]
    #[arg(short, long, value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Write `<lang>/<namespace>.json`, or `<namespace>.json` for a single language
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Overwrite dictionaries instead of merging with existing files
    #[arg(long)]
    pub no_merge: bool,

    /// Keep keys in the order they were found
    #[arg(long)]
    pub no_sort: bool,

    /// Show line numbers in the key listing
    #[arg(long)]
    pub line_numbers: bool,

    /// Show file paths in the key listing
    #[arg(long)]
    pub file_paths: bool,

    /// Preview output without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Wrap hardcoded text in React components with t() calls
    Wrap(WrapArgs),
    /// Extract t() keys into translation files
    Extract(ExtractArgs),
    /// Initialize a new .i18nexusrc.json configuration file
    Init,
}

//! Report formatting and printing utilities.
//!
//! Commands return plain summaries; everything user-facing is printed here so
//! the core stays usable as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary, WrapSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::ParseError;
use crate::core::extract::ExtractedKey;
use crate::core::wrap::ImportChange;
use crate::utils::plural;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Characters of each file shown by `extract --dry-run`.
const PREVIEW_CHARS: usize = 500;

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stdout = io::stdout().lock();
    print_command_output(result, verbose, &mut stdout);

    let mut stderr = io::stderr().lock();
    print_parse_errors_to(&result.parse_errors, verbose, &mut stderr);
}

fn print_command_output<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Wrap(summary) => print_wrap_to(summary, verbose, writer),
        CommandSummary::Extract(summary) => print_extract_to(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init_to(summary, writer),
    }
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

fn print_parse_errors_to<W: Write>(errors: &[ParseError], verbose: bool, writer: &mut W) {
    if verbose {
        for error in errors {
            let _ = writeln!(
                writer,
                "{} {} {}: {}",
                "warning:".bold().yellow(),
                "skipped".dimmed(),
                error.file_path,
                error.error
            );
        }
    }
    print_parse_warning_to(errors.len(), verbose, writer);
}

// ============================================================
// wrap
// ============================================================

pub fn print_wrap_to<W: Write>(summary: &WrapSummary, verbose: bool, writer: &mut W) {
    let state = if summary.is_dry_run {
        "Would be modified".yellow()
    } else {
        "Modified".green()
    };

    for file in &summary.files {
        let _ = writeln!(writer, "{} - {}", file.path.bold(), state);
        if !verbose {
            continue;
        }
        for literal in &file.literals {
            if literal.key == literal.text {
                let _ = writeln!(
                    writer,
                    "    {}:{} \"{}\"",
                    literal.line, literal.col, literal.text
                );
            } else {
                let _ = writeln!(
                    writer,
                    "    {}:{} \"{}\" {} {}",
                    literal.line,
                    literal.col,
                    literal.text,
                    "->".dimmed(),
                    literal.key.cyan()
                );
            }
        }
        for component in file.components.iter().filter(|c| c.hook_inserted) {
            let _ = writeln!(
                writer,
                "    {} useTranslation() in {}",
                "+".green(),
                component.name
            );
        }
        match file.import_change {
            Some(ImportChange::Added) => {
                let _ = writeln!(writer, "    {} import", "+".green());
            }
            Some(ImportChange::Extended) => {
                let _ = writeln!(writer, "    {} import (extended)", "~".yellow());
            }
            Some(ImportChange::Present) | None => {}
        }
    }

    if summary.files.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Scanned {} - nothing to wrap",
                plural(summary.files_scanned, "file", "files")
            )
            .green()
        );
        return;
    }

    let verb = if summary.is_dry_run {
        "Would wrap".yellow().bold()
    } else {
        "Wrapped".green().bold()
    };
    let _ = writeln!(
        writer,
        "{} {} in {} ({} inserted, {} scanned)",
        verb,
        plural(summary.literal_count(), "string", "strings"),
        plural(summary.files.len(), "file", "files"),
        plural(summary.hook_count(), "hook", "hooks"),
        summary.files_scanned
    );

    if let Some(key_file) = &summary.key_file {
        let action = if summary.is_dry_run {
            "Would update"
        } else {
            "Updated"
        };
        let _ = writeln!(
            writer,
            "{} {} ({} generated, {} new)",
            action,
            key_file.path.display(),
            plural(key_file.total_keys, "key", "keys"),
            key_file.added_keys
        );
    }

    if summary.is_dry_run {
        let _ = writeln!(writer, "Run without {} to write these changes.", "--dry-run".cyan());
    }
}

// ============================================================
// extract
// ============================================================

pub fn print_extract_to<W: Write>(summary: &ExtractSummary, verbose: bool, writer: &mut W) {
    for output in &summary.outputs {
        if summary.is_dry_run {
            let _ = writeln!(writer, "{} {}", "Would write".yellow().bold(), output.path.display());
            let preview: String = output.contents.chars().take(PREVIEW_CHARS).collect();
            let _ = writeln!(writer, "{}", preview);
            if output.contents.chars().count() > PREVIEW_CHARS {
                let _ = writeln!(writer, "{}", "...".dimmed());
            }
        } else {
            let _ = writeln!(
                writer,
                "{} Wrote {} ({})",
                SUCCESS_MARK.green(),
                output.path.display(),
                plural(output.added, "new key", "new keys")
            );
        }
    }

    let _ = writeln!(
        writer,
        "{} {} from {}",
        "Extracted".green().bold(),
        plural(summary.keys.len(), "key", "keys"),
        plural(summary.files_scanned, "file", "files")
    );

    if !summary.duplicates.is_empty() {
        let _ = writeln!(
            writer,
            "{} {} (first occurrence kept)",
            "warning:".bold().yellow(),
            plural(summary.duplicates.len(), "duplicate key", "duplicate keys")
        );
        if verbose {
            for duplicate in &summary.duplicates {
                let _ = writeln!(
                    writer,
                    "    {} {}:{}:{}",
                    duplicate.key,
                    duplicate.file_path,
                    duplicate.line,
                    duplicate.col
                );
            }
        }
    }

    if verbose || summary.show_file_paths || summary.show_line_numbers {
        print_key_listing(summary, writer);
    }
}

fn print_key_listing<W: Write>(summary: &ExtractSummary, writer: &mut W) {
    let width = summary
        .keys
        .iter()
        .map(|k| UnicodeWidthStr::width(k.key.as_str()))
        .max()
        .unwrap_or(0);

    for key in &summary.keys {
        let location = key_location(key, summary.show_file_paths, summary.show_line_numbers);
        let padding = width - UnicodeWidthStr::width(key.key.as_str());
        match location {
            Some(location) => {
                let _ = writeln!(
                    writer,
                    "  {}{:padding$}  {}",
                    key.key,
                    "",
                    location.dimmed(),
                    padding = padding
                );
            }
            None => {
                let _ = writeln!(writer, "  {}", key.key);
            }
        }
    }
}

fn key_location(key: &ExtractedKey, file_paths: bool, line_numbers: bool) -> Option<String> {
    match (file_paths, line_numbers) {
        (true, true) => Some(format!("{}:{}", key.file_path, key.line)),
        (true, false) => Some(key.file_path.clone()),
        (false, true) => Some(format!("line {}", key.line)),
        (false, false) => None,
    }
}

// ============================================================
// init
// ============================================================

fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::cli::commands::{KeyFileSummary, WrappedFile};
    use crate::core::extract::OutputFile;
    use crate::core::wrap::{LiteralSite, ModifiedComponent, TranslatableLiteral};

    fn strip_ansi(s: &str) -> String {
        let mut result = String::new();
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                result.push(c);
            }
        }
        result
    }

    fn render<F: FnOnce(&mut Vec<u8>)>(f: F) -> String {
        let mut output = Vec::new();
        f(&mut output);
        strip_ansi(&String::from_utf8(output).unwrap())
    }

    fn wrapped_file() -> WrappedFile {
        WrappedFile {
            path: "src/Welcome.tsx".to_string(),
            literals: vec![TranslatableLiteral {
                text: "환영합니다".to_string(),
                key: "환영합니다".to_string(),
                site: LiteralSite::JsxText,
                line: 2,
                col: 15,
            }],
            components: vec![ModifiedComponent {
                name: "Welcome".to_string(),
                hook_inserted: true,
            }],
            hooks_inserted: 1,
            import_change: Some(ImportChange::Added),
        }
    }

    fn extracted(key: &str, file: &str, line: usize) -> ExtractedKey {
        ExtractedKey {
            key: key.to_string(),
            default_value: None,
            file_path: file.to_string(),
            line,
            col: 1,
        }
    }

    #[test]
    fn test_wrap_report() {
        let summary = WrapSummary {
            files_scanned: 3,
            files: vec![wrapped_file()],
            key_file: None,
            is_dry_run: false,
        };

        let out = render(|w| print_wrap_to(&summary, false, w));

        assert!(out.contains("src/Welcome.tsx - Modified"));
        assert!(out.contains("Wrapped 1 string in 1 file (1 hook inserted, 3 scanned)"));
        assert!(!out.contains("2:15"));
    }

    #[test]
    fn test_wrap_report_verbose_dry_run() {
        let summary = WrapSummary {
            files_scanned: 1,
            files: vec![wrapped_file()],
            key_file: Some(KeyFileSummary {
                path: PathBuf::from("./locales/common.json"),
                total_keys: 2,
                added_keys: 1,
            }),
            is_dry_run: true,
        };

        let out = render(|w| print_wrap_to(&summary, true, w));

        assert!(out.contains("src/Welcome.tsx - Would be modified"));
        assert!(out.contains("2:15 \"환영합니다\""));
        assert!(out.contains("+ useTranslation() in Welcome"));
        assert!(out.contains("+ import"));
        assert!(out.contains("Would update ./locales/common.json (2 keys generated, 1 new)"));
        assert!(out.contains("Run without --dry-run"));
    }

    #[test]
    fn test_wrap_report_nothing_to_do() {
        let summary = WrapSummary {
            files_scanned: 2,
            files: Vec::new(),
            key_file: None,
            is_dry_run: false,
        };

        let out = render(|w| print_wrap_to(&summary, false, w));

        assert_eq!(out, "✓ Scanned 2 files - nothing to wrap\n");
    }

    #[test]
    fn test_extract_report() {
        let summary = ExtractSummary {
            files_scanned: 2,
            keys: vec![extracted("a", "src/A.tsx", 3), extracted("b", "src/B.tsx", 7)],
            duplicates: vec![extracted("a", "src/B.tsx", 9)],
            outputs: vec![OutputFile {
                path: PathBuf::from("locales/en.json"),
                contents: "{}\n".to_string(),
                added: 2,
            }],
            show_file_paths: true,
            show_line_numbers: true,
            is_dry_run: false,
        };

        let out = render(|w| print_extract_to(&summary, false, w));

        assert!(out.contains("✓ Wrote locales/en.json (2 new keys)"));
        assert!(out.contains("Extracted 2 keys from 2 files"));
        assert!(out.contains("warning: 1 duplicate key (first occurrence kept)"));
        assert!(out.contains("  a  src/A.tsx:3"));
        assert!(out.contains("  b  src/B.tsx:7"));
    }

    #[test]
    fn test_extract_dry_run_preview_is_truncated() {
        let contents = "x".repeat(PREVIEW_CHARS + 10);
        let summary = ExtractSummary {
            files_scanned: 1,
            keys: Vec::new(),
            duplicates: Vec::new(),
            outputs: vec![OutputFile {
                path: PathBuf::from("locales/ko.json"),
                contents,
                added: 0,
            }],
            show_file_paths: false,
            show_line_numbers: false,
            is_dry_run: true,
        };

        let out = render(|w| print_extract_to(&summary, false, w));

        assert!(out.contains("Would write locales/ko.json"));
        assert!(out.contains(&"x".repeat(PREVIEW_CHARS)));
        assert!(!out.contains(&"x".repeat(PREVIEW_CHARS + 1)));
        assert!(out.contains("..."));
    }

    #[test]
    fn test_key_listing_aligns_wide_keys() {
        let summary = ExtractSummary {
            files_scanned: 1,
            keys: vec![extracted("안녕", "a.tsx", 1), extracted("hello", "a.tsx", 2)],
            duplicates: Vec::new(),
            outputs: Vec::new(),
            show_file_paths: false,
            show_line_numbers: true,
            is_dry_run: false,
        };

        let out = render(|w| print_key_listing(&summary, w));

        // "안녕" is four columns wide, one short of "hello".
        assert!(out.contains("  안녕   line 1"));
        assert!(out.contains("  hello  line 2"));
    }

    #[test]
    fn test_parse_warning() {
        let out = render(|w| print_parse_warning_to(2, false, w));
        assert!(out.contains("warning: 2 file(s) could not be parsed (use -v for details)"));

        let out = render(|w| print_parse_warning_to(2, true, w));
        assert!(out.is_empty());
    }

    #[test]
    fn test_verbose_parse_errors_are_listed() {
        let errors = vec![ParseError {
            file_path: "src/Broken.tsx".to_string(),
            error: "Expected '}'".to_string(),
        }];

        let out = render(|w| print_parse_errors_to(&errors, true, w));

        assert!(out.contains("src/Broken.tsx: Expected '}'"));
        assert!(!out.contains("could not be parsed"));
    }

    #[test]
    fn test_init_report() {
        let out = render(|w| print_init_to(&InitSummary { created: true }, w));
        assert_eq!(out, "✓ Created .i18nexusrc.json\n");
    }
}

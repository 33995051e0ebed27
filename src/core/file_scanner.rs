use std::{
    collections::BTreeSet,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

/// Directories that never contain project sources.
const SKIPPED_DIRS: &[&str] = &["node_modules", ".git"];

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Result of scanning files.
#[derive(Debug)]
pub struct ScanResult {
    /// Matching files in sorted order. Relative patterns yield paths relative
    /// to the base directory, joined with `/`.
    pub files: Vec<String>,
}

/// Check if a path component contains glob wildcards.
fn is_glob_component(component: &str) -> bool {
    component.contains(['*', '?', '['])
}

/// Expand `{a,b}` alternatives, which the `glob` crate does not support.
///
/// ```
/// use i18nexus::core::file_scanner::expand_braces;
///
/// assert_eq!(
///     expand_braces("src/**/*.{ts,tsx}"),
///     vec!["src/**/*.ts", "src/**/*.tsx"]
/// );
/// assert_eq!(expand_braces("src/*.js"), vec!["src/*.js"]);
/// ```
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(open) = pattern.find('{') else {
        return vec![pattern.to_string()];
    };

    let mut depth = 0;
    let mut close = None;
    let mut splits = Vec::new();
    for (i, c) in pattern[open..].char_indices() {
        let at = open + i;
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(at);
                    break;
                }
            }
            ',' if depth == 1 => splits.push(at),
            _ => {}
        }
    }

    // Unbalanced braces are taken literally.
    let Some(close) = close else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];
    let mut bounds = vec![open];
    bounds.extend(splits);
    bounds.push(close);

    bounds
        .windows(2)
        .flat_map(|w| {
            let alternative = &pattern[w[0] + 1..w[1]];
            expand_braces(&format!("{}{}{}", prefix, alternative, suffix))
        })
        .collect()
}

/// Split a pattern into the literal directory to walk and the glob to match.
fn walk_root(pattern: &str) -> PathBuf {
    let mut root = PathBuf::new();
    let components: Vec<Component> = Path::new(pattern).components().collect();
    for (index, component) in components.iter().enumerate() {
        let is_last = index + 1 == components.len();
        if is_last || is_glob_component(&component.as_os_str().to_string_lossy()) {
            break;
        }
        root.push(component);
    }
    root
}

/// Brace alternatives of `pattern`, without a leading `./`.
fn alternatives(pattern: &str) -> Vec<String> {
    expand_braces(pattern)
        .into_iter()
        .map(|p| match p.strip_prefix("./") {
            Some(rest) => rest.to_string(),
            None => p,
        })
        .collect()
}

/// Compile every brace alternative of `pattern`.
pub fn compile_pattern(pattern: &str) -> Result<Vec<Pattern>> {
    alternatives(pattern)
        .iter()
        .map(|p| {
            Pattern::new(p).with_context(|| format!("Invalid glob pattern: \"{}\"", pattern))
        })
        .collect()
}

/// Find files under `base_dir` matching `pattern`.
pub fn scan_files(base_dir: &Path, pattern: &str, verbose: bool) -> Result<ScanResult> {
    let mut files = BTreeSet::new();
    let compiled = compile_pattern(pattern)?;

    for (expanded, glob) in alternatives(pattern).iter().zip(&compiled) {
        let absolute = Path::new(expanded).is_absolute();
        let root = base_dir.join(walk_root(expanded));
        if !root.exists() {
            continue;
        }

        let walker = WalkDir::new(&root).into_iter().filter_entry(|entry| {
            !(entry.file_type().is_dir()
                && SKIPPED_DIRS.contains(&entry.file_name().to_string_lossy().as_ref()))
        });

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let candidate = if absolute {
                path.to_path_buf()
            } else {
                match path.strip_prefix(base_dir) {
                    Ok(relative) => relative.to_path_buf(),
                    Err(_) => continue,
                }
            };
            let candidate = to_slash(&candidate);
            if glob.matches_with(&candidate, MATCH_OPTIONS) {
                files.insert(candidate);
            }
        }
    }

    Ok(ScanResult {
        files: files.into_iter().collect(),
    })
}

fn to_slash(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::RootDir => out.push('/'),
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    out
}

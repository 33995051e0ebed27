//! Span-based source editing.
//!
//! Rewrites are collected as byte-range edits against the original source
//! and applied in a single pass. Text outside the edited ranges is copied
//! verbatim, so formatting, comments and blank lines survive untouched.

use anyhow::{Result, bail};

/// A replacement of `source[start..end]` with `text`.
///
/// An edit with `start == end` is a pure insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl TextEdit {
    pub fn replace(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::replace(at, at, text)
    }

    pub fn is_insertion(&self) -> bool {
        self.start == self.end
    }
}

/// Apply a set of edits to `source`.
///
/// Edits are ordered by position. Insertions at the same offset keep the
/// order in which they were given, and an insertion at the start of a
/// replaced range lands before the replacement. Overlapping replacements are
/// rejected.
pub fn apply_edits(source: &str, edits: &[TextEdit]) -> Result<String> {
    let mut ordered: Vec<&TextEdit> = edits.iter().collect();
    ordered.sort_by_key(|edit| (edit.start, edit.end));

    let added: usize = edits.iter().map(|e| e.text.len()).sum();
    let mut output = String::with_capacity(source.len() + added);
    let mut cursor = 0;

    for edit in ordered {
        if edit.start > edit.end || edit.end > source.len() {
            bail!(
                "Edit range {}..{} is outside the source ({} bytes)",
                edit.start,
                edit.end,
                source.len()
            );
        }
        if edit.start < cursor {
            bail!(
                "Overlapping edits at {}..{} (previous edit ends at {})",
                edit.start,
                edit.end,
                cursor
            );
        }
        if !source.is_char_boundary(edit.start) || !source.is_char_boundary(edit.end) {
            bail!(
                "Edit range {}..{} does not fall on character boundaries",
                edit.start,
                edit.end
            );
        }

        output.push_str(&source[cursor..edit.start]);
        output.push_str(&edit.text);
        cursor = edit.end;
    }

    output.push_str(&source[cursor..]);
    Ok(output)
}

/// Leading whitespace of the line containing byte `offset`.
pub fn line_indent(source: &str, offset: usize) -> &str {
    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line = &source[line_start..];
    let indent_len = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..indent_len]
}

/// Line terminator used by `source`, judged by its first line.
pub fn line_ending(source: &str) -> &'static str {
    match source.find('\n') {
        Some(i) if source[..i].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

/// Whether bytes `a` and `b` lie on the same line.
pub fn same_line(source: &str, a: usize, b: usize) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    !source[lo..hi].contains('\n')
}

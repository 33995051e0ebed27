//! Common utility functions shared across the codebase.

/// Checks if the text contains at least one precomposed Hangul syllable (`가`..=`힣`).
///
/// Jamo and compatibility jamo (`ㄱ`, `ㅏ`) are not syllables and do not count.
///
/// # Examples
///
/// ```
/// use i18nexus::utils::contains_hangul;
///
/// assert!(contains_hangul("안녕하세요"));
/// assert!(contains_hangul("Hello 세계"));
/// assert!(!contains_hangul("Hello"));
/// assert!(!contains_hangul("ㅋㅋ"));
/// assert!(!contains_hangul(""));
/// ```
pub fn contains_hangul(text: &str) -> bool {
    text.chars().any(is_hangul_syllable)
}

pub fn is_hangul_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// Encode a string as a double-quoted JavaScript string literal.
///
/// JSON string syntax is a subset of JavaScript string syntax, so the JSON
/// encoder gives correct escaping for quotes, backslashes and control
/// characters while leaving non-ASCII text readable.
///
/// ```
/// use i18nexus::utils::js_string_literal;
///
/// assert_eq!(js_string_literal("안녕"), "\"안녕\"");
/// assert_eq!(js_string_literal("say \"hi\""), "\"say \\\"hi\\\"\"");
/// ```
pub fn js_string_literal(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Pluralize a noun for summary lines: `1 file`, `2 files`.
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

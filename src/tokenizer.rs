//! Line handling and script detection for free-form address text.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::AddressFormat;

static HORIZONTAL_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\r]+").expect("valid regex"));

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,，\n]").expect("valid regex"));

/// Collapse runs of spaces, tabs and carriage returns into one space and
/// trim the result. Newlines are kept: they separate lines.
#[must_use]
pub fn normalize(text: &str) -> String {
    HORIZONTAL_SPACE.replace_all(text, " ").trim().to_string()
}

/// Split normalized text into trimmed, non-empty lines on commas (ASCII or
/// full-width) and newlines.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = LINE_BREAKS.split(text).map(str::to_string).collect();
    remove_empty(&mut lines);
    lines
}

/// Trim every line and drop those left empty.
pub fn remove_empty(lines: &mut Vec<String>) {
    for line in lines.iter_mut() {
        let trimmed = line.trim();
        if trimmed.len() != line.len() {
            *line = trimmed.to_string();
        }
    }
    lines.retain(|line| !line.is_empty());
}

fn chars_eq_ci(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Byte length of the prefix of `haystack` that equals `needle` ignoring
/// case, if `haystack` starts with it.
pub fn prefix_len_ci(haystack: &str, needle: &str) -> Option<usize> {
    let mut rest = haystack.char_indices();
    for n in needle.chars() {
        match rest.next() {
            Some((_, h)) if chars_eq_ci(h, n) => {}
            _ => return None,
        }
    }
    Some(rest.next().map_or(haystack.len(), |(i, _)| i))
}

/// Byte offset where a case-insensitive `needle` suffix of `haystack`
/// begins, if `haystack` ends with it.
pub fn suffix_start_ci(haystack: &str, needle: &str) -> Option<usize> {
    let mut rest = haystack.char_indices().rev();
    let mut start = haystack.len();
    for n in needle.chars().rev() {
        match rest.next() {
            Some((i, h)) if chars_eq_ci(h, n) => start = i,
            _ => return None,
        }
    }
    Some(start)
}

fn suffix_after(haystack: &str, needle: &str, boundary: fn(char) -> bool) -> Option<usize> {
    let start = suffix_start_ci(haystack, needle)?;
    haystack[..start]
        .chars()
        .next_back()
        .is_none_or(boundary)
        .then_some(start)
}

/// Like [`suffix_start_ci`], but the suffix must either begin the line or
/// follow whitespace.
pub fn suffix_word_start_ci(haystack: &str, needle: &str) -> Option<usize> {
    suffix_after(haystack, needle, char::is_whitespace)
}

/// Like [`suffix_word_start_ci`], but a hyphen also separates the suffix,
/// as in `Sao Paulo-SP`.
pub fn suffix_token_start_ci(haystack: &str, needle: &str) -> Option<usize> {
    suffix_after(haystack, needle, |c| c.is_whitespace() || c == '-')
}

/// Characters of the CJK family: ideographs, Hangul, Kana and Bopomofo.
pub fn is_asian_char(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{20000}'..='\u{2FA1F}'
        | '\u{AC00}'..='\u{D7AF}'
        | '\u{1100}'..='\u{11FF}'
        | '\u{3130}'..='\u{318F}'
        | '\u{3040}'..='\u{309F}'
        | '\u{30A0}'..='\u{30FF}'
        | '\u{31F0}'..='\u{31FF}'
        | '\u{3100}'..='\u{312F}'
        | '\u{31A0}'..='\u{31BF}'
    )
}

/// A character that continues a Latin word.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() && !is_asian_char(c)
}

/// Whether a line contains any letter.
pub fn has_letters(line: &str) -> bool {
    line.chars().any(char::is_alphabetic)
}

/// Pick the script variant for text: Asian when CJK characters are at least
/// as numerous as ASCII non-digit characters (spaces included). Text without
/// any CJK character is Latin, even when it has no Latin letters either.
pub fn detect_format(text: &str) -> AddressFormat {
    let (asian, latin) = text.chars().fold((0usize, 0usize), |(asian, latin), c| {
        if is_asian_char(c) {
            (asian + 1, latin)
        } else if c.is_ascii() && !c.is_ascii_digit() {
            (asian, latin + 1)
        } else {
            (asian, latin)
        }
    });
    if asian >= latin && asian > 0 {
        AddressFormat::Asian
    } else {
        AddressFormat::Latin
    }
}

//! Country detection and the ordered field-extractor pipeline.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::countries::{self, NameTable};
use crate::rules::{CompiledMatcher, Extractor, Layout, LineSelector, ScanFrom};
use crate::tokenizer::{
    has_letters, is_word_char, prefix_len_ci, remove_empty, suffix_token_start_ci, suffix_word_start_ci,
};
use crate::types::{AddressFormat, Field};

static EDGE_DASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-+|-+$").expect("valid regex"));

/// A country name found in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CountryMatch {
    /// The name as written in the input
    pub(crate) name: String,
    /// ISO 3166 code of the country
    pub(crate) code: &'static str,
}

#[derive(Debug, Clone, Copy)]
enum Position {
    Prefix { end: usize },
    Suffix { start: usize, end: usize },
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    line: usize,
    position: Position,
    chars: usize,
    code: &'static str,
}

fn runs_into_word(line: &str, end: usize, name: &str) -> bool {
    name.chars().next_back().is_some_and(is_word_char) && line[end..].chars().next().is_some_and(is_word_char)
}

/// Places a country name may end, as `(line, byte offset)`: the end of the
/// last line, the end of the last line before a trailing letter-free token,
/// and the end of the line before a letter-free last line.
fn suffix_ends(lines: &[String]) -> Vec<(usize, usize)> {
    let last = lines.len() - 1;
    let line = &lines[last];
    let mut ends = vec![(last, line.len())];
    if let Some(split) = line.rfind(char::is_whitespace) {
        if !has_letters(&line[split..]) {
            ends.push((last, line[..split].trim_end().len()));
        }
    }
    if last > 0 && !has_letters(line) {
        ends.push((last - 1, lines[last - 1].len()));
    }
    ends
}

fn best_in_table(lines: &[String], table: NameTable) -> Option<Candidate> {
    if lines.is_empty() {
        return None;
    }
    let ends = suffix_ends(lines);

    let mut best: Option<Candidate> = None;
    for &(code, names) in table {
        for name in names {
            let chars = name.chars().count();
            if best.is_some_and(|b| b.chars >= chars) {
                continue;
            }
            if let Some(end) = prefix_len_ci(&lines[0], name).filter(|&end| !runs_into_word(&lines[0], end, name)) {
                best = Some(Candidate {
                    line: 0,
                    position: Position::Prefix { end },
                    chars,
                    code,
                });
                continue;
            }
            let suffix = ends
                .iter()
                .find_map(|&(i, end)| suffix_word_start_ci(&lines[i][..end], name).map(|start| (i, start, end)));
            if let Some((line, start, end)) = suffix {
                best = Some(Candidate {
                    line,
                    position: Position::Suffix { start, end },
                    chars,
                    code,
                });
            }
        }
    }
    best
}

/// Find and remove the country name, searching the localized, native and
/// English tables in turn. The first table with a hit decides.
pub(crate) fn find_country(lines: &mut Vec<String>, language: Option<&str>) -> Option<CountryMatch> {
    if lines.is_empty() {
        return None;
    }
    let candidate = countries::search_order(language)
        .into_iter()
        .find_map(|table| best_in_table(lines.as_slice(), table))?;

    let line = &lines[candidate.line];
    let (name, rest) = match candidate.position {
        Position::Prefix { end } => (line[..end].to_string(), line[end..].trim().to_string()),
        Position::Suffix { start, end } => (
            line[start..end].to_string(),
            [line[..start].trim(), line[end..].trim()].join(" ").trim().to_string(),
        ),
    };
    lines[candidate.line] = rest;
    remove_empty(lines);

    Some(CountryMatch {
        name,
        code: candidate.code,
    })
}

fn clean_value(raw: &str) -> String {
    EDGE_DASHES.replace_all(raw.trim(), "").trim().to_string()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-'
}

/// Try one matcher against one line, returning the value and what is left
/// of the line.
fn match_line(line: &str, matcher: &CompiledMatcher, scan: ScanFrom, format: AddressFormat) -> Option<(String, String)> {
    match matcher {
        CompiledMatcher::Regex { regex, group, .. } => {
            let captures = match scan {
                ScanFrom::Start => regex.captures(line),
                ScanFrom::End => regex.captures_iter(line).last(),
            }?;
            let found = captures.get(*group)?;
            let value = clean_value(found.as_str());
            if value.is_empty() {
                return None;
            }
            let joiner = match format {
                AddressFormat::Asian => "",
                AddressFormat::Latin => " ",
            };
            let rest = format!("{}{joiner}{}", &line[..found.start()], &line[found.end()..]);
            Some((value, rest.trim().to_string()))
        }
        CompiledMatcher::Names(names) => names.iter().find_map(|name| match scan {
            ScanFrom::End => suffix_token_start_ci(line, name).map(|start| {
                let rest = line[..start].trim_end_matches(is_separator).trim_start();
                (line[start..].to_string(), rest.to_string())
            }),
            ScanFrom::Start => prefix_len_ci(line, name).map(|end| {
                let rest = line[end..].trim_start_matches(is_separator).trim_end();
                (line[..end].to_string(), rest.to_string())
            }),
        }),
        CompiledMatcher::Whole => Some((line.to_string(), String::new())),
    }
}

fn candidate_lines(selector: LineSelector, count: usize) -> Box<dyn Iterator<Item = usize>> {
    match selector {
        LineSelector::First => Box::new(std::iter::once(0)),
        LineSelector::Last => Box::new(std::iter::once(count - 1)),
        LineSelector::StartAtFirst => Box::new(0..count),
        LineSelector::StartAtLast => Box::new((0..count).rev()),
    }
}

fn apply(extractor: &Extractor, lines: &mut [String], format: AddressFormat) -> Option<String> {
    let scan = extractor.line.scan_from();
    for index in candidate_lines(extractor.line, lines.len()) {
        if let Some((value, rest)) = match_line(&lines[index], &extractor.matcher, scan, format) {
            lines[index] = rest;
            return Some(value);
        }
    }
    None
}

/// Run a layout's extractors in order. An extractor whose field is already
/// filled is skipped.
pub(crate) fn run_extractors(
    lines: &mut Vec<String>,
    layout: &Layout,
    format: AddressFormat,
    fields: &mut HashMap<Field, String>,
) {
    for extractor in &layout.extractors {
        if fields.contains_key(&extractor.field) {
            continue;
        }
        remove_empty(lines);
        if lines.is_empty() {
            break;
        }
        if let Some(value) = apply(extractor, lines, format) {
            log::trace!("{} <- {value:?}", extractor.field);
            fields.insert(extractor.field, value);
        }
    }
    remove_empty(lines);
}

/// Join the lines no extractor claimed into the street address.
pub(crate) fn join_street(lines: &[String], layout: &Layout, format: AddressFormat) -> Option<String> {
    if lines.is_empty() {
        return None;
    }
    let separator = layout.join.unwrap_or(match format {
        AddressFormat::Asian => "",
        AddressFormat::Latin => ", ",
    });
    Some(lines.join(separator))
}

//! Territory rule descriptors and the compiled rule table.
//!
//! Rule data is written as `const` descriptors in the `territories` module and
//! compiled once, on first use, into [`Territory`] values holding ready
//! regexes and parsed templates. Lookup by territory code is a hash-map hit
//! and always succeeds: unknown codes resolve to the `default` entry.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};
use crate::template::Template;
use crate::territories;
use crate::types::{AddressFormat, Field, Style};

/// Code of the fallback territory entry.
pub const DEFAULT_CODE: &str = "default";

/// Which line an extractor examines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSelector {
    /// Only the first line
    First,
    /// Only the last line
    Last,
    /// The first line, from the top, that matches
    StartAtFirst,
    /// The first line, from the bottom, that matches
    StartAtLast,
}

/// Direction an extractor reads a line in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanFrom {
    /// Prefix matches; first regex match in the line
    Start,
    /// Suffix matches; last regex match in the line
    End,
}

impl LineSelector {
    /// Reading direction implied by the selector.
    pub fn scan_from(self) -> ScanFrom {
        match self {
            LineSelector::First | LineSelector::StartAtFirst => ScanFrom::Start,
            LineSelector::Last | LineSelector::StartAtLast => ScanFrom::End,
        }
    }
}

/// How an extractor recognizes its value within a line.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// A case-insensitive pattern; `group` selects the capture holding the
    /// value (0 for the whole match)
    Regex {
        /// Pattern source
        pattern: &'static str,
        /// Capture group index
        group: usize,
    },
    /// A fixed list of names
    Names(&'static [&'static str]),
    /// Any code or name from a `(code, name)` region list
    Regions(&'static [(&'static str, &'static str)]),
    /// The entire line
    Whole,
}

/// One extractor: the field it fills, where it looks and how it matches.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Field the extractor fills
    pub field: Field,
    /// Line the extractor examines
    pub line: LineSelector,
    /// How the value is recognized
    pub matcher: Matcher,
}

impl FieldRule {
    /// Extractor whose value is the whole regex match.
    pub const fn regex(field: Field, line: LineSelector, pattern: &'static str) -> Self {
        Self::regex_group(field, line, pattern, 0)
    }

    /// Extractor whose value is one capture group of a regex.
    pub const fn regex_group(field: Field, line: LineSelector, pattern: &'static str, group: usize) -> Self {
        Self {
            field,
            line,
            matcher: Matcher::Regex { pattern, group },
        }
    }

    /// Extractor matching one of a list of names.
    pub const fn names(field: Field, line: LineSelector, names: &'static [&'static str]) -> Self {
        Self {
            field,
            line,
            matcher: Matcher::Names(names),
        }
    }

    /// Extractor matching a region code or name.
    pub const fn regions(field: Field, line: LineSelector, regions: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            field,
            line,
            matcher: Matcher::Regions(regions),
        }
    }

    /// Extractor taking a whole line.
    pub const fn whole(field: Field, line: LineSelector) -> Self {
        Self {
            field,
            line,
            matcher: Matcher::Whole,
        }
    }
}

/// Extractors and templates for one script variant.
#[derive(Debug, Clone, Copy)]
pub struct LayoutRule {
    /// Extractors, run in order
    pub fields: &'static [FieldRule],
    /// Templates keyed by style name; `default` must be present
    pub formats: &'static [(&'static str, &'static str)],
    /// Separator for the leftover street lines, if not the script default
    pub join: Option<&'static str>,
}

/// Script variants a territory supports.
#[derive(Debug, Clone, Copy)]
pub enum Variants {
    /// One layout for every script
    Single(LayoutRule),
    /// Separate layouts for Latin and CJK text
    Multi {
        /// Latin-alphabet layout
        latin: LayoutRule,
        /// CJK layout
        asian: LayoutRule,
    },
}

/// Rule data for one territory.
#[derive(Debug, Clone, Copy)]
pub struct TerritoryRule {
    /// ISO 3166 code, or [`DEFAULT_CODE`]
    pub code: &'static str,
    /// Layouts by script
    pub variants: Variants,
    /// English field labels that differ from the generic ones
    pub labels: &'static [(Field, &'static str)],
    /// Regions as `(code, name)` pairs
    pub regions: &'static [(&'static str, &'static str)],
}

#[derive(Debug)]
pub(crate) enum CompiledMatcher {
    Regex {
        regex: Regex,
        group: usize,
        source: &'static str,
    },
    Names(Vec<&'static str>),
    Whole,
}

/// A compiled extractor.
#[derive(Debug)]
pub(crate) struct Extractor {
    pub(crate) field: Field,
    pub(crate) line: LineSelector,
    pub(crate) matcher: CompiledMatcher,
}

/// A compiled script variant.
#[derive(Debug)]
pub(crate) struct Layout {
    pub(crate) extractors: Vec<Extractor>,
    pub(crate) templates: HashMap<&'static str, Template>,
    pub(crate) join: Option<&'static str>,
}

/// A compiled territory entry.
#[derive(Debug)]
pub struct Territory {
    code: &'static str,
    latin: Layout,
    asian: Option<Layout>,
    labels: &'static [(Field, &'static str)],
    regions: &'static [(&'static str, &'static str)],
}

impl Territory {
    /// Territory code, or [`DEFAULT_CODE`] for the fallback entry.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Whether the territory has separate Latin and Asian layouts.
    pub fn is_multiformat(&self) -> bool {
        self.asian.is_some()
    }

    pub(crate) fn layout(&self, format: AddressFormat) -> &Layout {
        match (format, &self.asian) {
            (AddressFormat::Asian, Some(asian)) => asian,
            _ => &self.latin,
        }
    }

    /// Template for a script variant and style, falling back to the
    /// variant's default template when the style is not defined.
    pub fn template(&self, format: AddressFormat, style: &Style) -> Option<&Template> {
        let templates = &self.layout(format).templates;
        templates
            .get(style.as_str())
            .or_else(|| templates.get(Style::Default.as_str()))
    }

    /// Source of the first postal-code regex extractor of a script
    /// variant.
    pub fn postal_pattern(&self, format: AddressFormat) -> Option<&'static str> {
        self.layout(format).extractors.iter().find_map(|extractor| match &extractor.matcher {
            CompiledMatcher::Regex { source, .. } if extractor.field == Field::PostalCode => Some(*source),
            _ => None,
        })
    }

    /// English label overrides for this territory.
    pub fn labels(&self) -> &'static [(Field, &'static str)] {
        self.labels
    }

    /// Regions as `(code, name)` pairs.
    pub fn regions(&self) -> &'static [(&'static str, &'static str)] {
        self.regions
    }
}

fn longest_first(mut names: Vec<&'static str>) -> Result<CompiledMatcher> {
    if names.is_empty() {
        return Err(Error::invalid_rule("empty name list"));
    }
    names.sort_by_key(|name| std::cmp::Reverse(name.chars().count()));
    names.dedup();
    Ok(CompiledMatcher::Names(names))
}

fn compile_matcher(matcher: &Matcher) -> Result<CompiledMatcher> {
    Ok(match *matcher {
        Matcher::Regex { pattern, group } => {
            let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
            if group >= regex.captures_len() {
                return Err(Error::invalid_rule(format!(
                    "pattern '{pattern}' has no capture group {group}"
                )));
            }
            CompiledMatcher::Regex {
                regex,
                group,
                source: pattern,
            }
        }
        Matcher::Names(names) => longest_first(names.to_vec())?,
        Matcher::Regions(regions) => longest_first(
            regions
                .iter()
                .flat_map(|(code, name)| [*code, *name])
                .collect(),
        )?,
        Matcher::Whole => CompiledMatcher::Whole,
    })
}

/// Compile a layout, collecting every problem instead of stopping at the
/// first one. Broken extractors and templates are left out.
fn compile_layout(code: &str, rule: &LayoutRule, problems: &mut Vec<Error>) -> Layout {
    let mut extractors = Vec::with_capacity(rule.fields.len());
    for field_rule in rule.fields {
        match compile_matcher(&field_rule.matcher) {
            Ok(matcher) => extractors.push(Extractor {
                field: field_rule.field,
                line: field_rule.line,
                matcher,
            }),
            Err(e) => problems.push(Error::invalid_rule(format!(
                "{code}: {} extractor: {e}",
                field_rule.field
            ))),
        }
    }

    let mut templates = HashMap::with_capacity(rule.formats.len());
    for (style, source) in rule.formats {
        match Template::parse(source) {
            Ok(template) => {
                templates.insert(*style, template);
            }
            Err(e) => problems.push(Error::invalid_rule(format!("{code}: '{style}' format: {e}"))),
        }
    }
    if !templates.contains_key(Style::Default.as_str()) {
        problems.push(Error::invalid_rule(format!("{code}: no default format")));
    }

    Layout {
        extractors,
        templates,
        join: rule.join,
    }
}

fn compile(rule: &TerritoryRule, problems: &mut Vec<Error>) -> Territory {
    let (latin, asian) = match &rule.variants {
        Variants::Single(layout) => (compile_layout(rule.code, layout, problems), None),
        Variants::Multi { latin, asian } => (
            compile_layout(rule.code, latin, problems),
            Some(compile_layout(rule.code, asian, problems)),
        ),
    };
    Territory {
        code: rule.code,
        latin,
        asian,
        labels: rule.labels,
        regions: rule.regions,
    }
}

struct RuleTable {
    territories: HashMap<&'static str, Territory>,
    fallback: Territory,
}

static TABLE: LazyLock<RuleTable> = LazyLock::new(|| {
    let mut problems = Vec::new();
    let fallback = compile(&territories::DEFAULT, &mut problems);
    let territories = territories::ALL
        .iter()
        .map(|rule| (rule.code, compile(rule, &mut problems)))
        .collect();
    for problem in &problems {
        log::error!("Skipping broken address rule: {problem}");
    }
    RuleTable {
        territories,
        fallback,
    }
});

/// Rules for a territory code, or the default entry when the code is
/// unknown or absent.
pub fn lookup(code: Option<&str>) -> &'static Territory {
    code.and_then(|code| TABLE.territories.get(code))
        .unwrap_or(&TABLE.fallback)
}

/// Whether the table has a dedicated entry for `code`.
pub fn has_territory(code: &str) -> bool {
    TABLE.territories.contains_key(code)
}

/// Compile every built-in rule and report the first problem found.
pub fn verify() -> Result<()> {
    let mut problems = Vec::new();
    compile(&territories::DEFAULT, &mut problems);
    for rule in territories::ALL {
        compile(rule, &mut problems);
    }
    match problems.into_iter().next() {
        Some(problem) => Err(problem),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const BROKEN: TerritoryRule = TerritoryRule {
        code: "ZZ",
        variants: Variants::Single(LayoutRule {
            fields: &[
                FieldRule::regex(Field::PostalCode, LineSelector::StartAtLast, "([0-9]"),
                FieldRule::regex_group(Field::Locality, LineSelector::Last, "[a-z]+", 1),
                FieldRule::names(Field::Region, LineSelector::Last, &["Nord", "Nordrhein"]),
            ],
            formats: &[("default", "{streetAddress}\n{town}")],
            join: None,
        }),
        labels: &[],
        regions: &[],
    };

    #[test]
    fn test_builtin_rules_verify() {
        verify().unwrap();
    }

    #[test]
    fn test_lookup_falls_back_to_default() {
        assert_eq!(lookup(Some("US")).code(), "US");
        assert_eq!(lookup(Some("XX")).code(), DEFAULT_CODE);
        assert_eq!(lookup(None).code(), DEFAULT_CODE);
        assert!(has_territory("JP"));
        assert!(!has_territory("XX"));
    }

    #[test]
    fn test_broken_rules_are_skipped() {
        let mut problems = Vec::new();
        let territory = compile(&BROKEN, &mut problems);

        // bad pattern, missing group, bad template, no default left
        assert_eq!(problems.len(), 4);
        assert_matches!(problems[0], Error::InvalidRule { .. });
        assert_eq!(territory.latin.extractors.len(), 1);
        assert!(territory.template(AddressFormat::Latin, &Style::Default).is_none());

        match &territory.latin.extractors[0].matcher {
            CompiledMatcher::Names(names) => assert_eq!(names, &vec!["Nordrhein", "Nord"]),
            other => panic!("unexpected matcher {other:?}"),
        }
    }

    #[test]
    fn test_style_fallback() {
        let us = lookup(Some("US"));
        let default = us.template(AddressFormat::Latin, &Style::Default).unwrap();
        let custom = us.template(AddressFormat::Latin, &Style::Custom("mailing".into())).unwrap();
        assert_eq!(default, custom);
    }

    #[test]
    fn test_multiformat_territories() {
        for code in ["CN", "HK", "JP", "TW"] {
            let territory = lookup(Some(code));
            assert!(territory.is_multiformat(), "{code}");
            assert!(territory.template(AddressFormat::Asian, &Style::Default).is_some());
        }
        assert!(!lookup(Some("DE")).is_multiformat());
    }

    #[test]
    fn test_postal_pattern() {
        assert_eq!(
            lookup(Some("US")).postal_pattern(AddressFormat::Latin),
            Some("[0-9]{5}(-[0-9]{4})?")
        );
        assert_eq!(lookup(Some("DE")).postal_pattern(AddressFormat::Asian), Some("[0-9]{5}"));
        assert_eq!(lookup(Some("CN")).postal_pattern(AddressFormat::Asian), Some("[0-9]{6}"));
    }
}

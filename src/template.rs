//! Format templates.
//!
//! A template is a string of `{field}` placeholders separated by literal
//! text, with `\n` separating output lines:
//!
//! ```text
//! {streetAddress}\n{locality}, {region} {postalCode}\n{country}
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::types::Field;

static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Field(Field),
    Literal(String),
}

/// A parsed format template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    lines: Vec<Vec<Token>>,
}

impl Template {
    /// Parse a template, rejecting unknown field names and unbalanced
    /// braces.
    pub fn parse(source: &str) -> Result<Self> {
        let lines = source
            .split('\n')
            .map(|line| Self::parse_line(line, source))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            source: source.to_string(),
            lines,
        })
    }

    fn parse_line(line: &str, source: &str) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut rest = line;
        while let Some(open) = rest.find('{') {
            if rest[..open].contains('}') {
                return Err(Error::invalid_template(format!("stray '}}' in '{source}'")));
            }
            if open > 0 {
                tokens.push(Token::Literal(rest[..open].to_string()));
            }
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| Error::invalid_template(format!("unclosed '{{' in '{source}'")))?;
            tokens.push(Token::Field(after[..close].parse()?));
            rest = &after[close + 1..];
        }
        if rest.contains('}') {
            return Err(Error::invalid_template(format!("stray '}}' in '{source}'")));
        }
        if !rest.is_empty() {
            tokens.push(Token::Literal(rest.to_string()));
        }
        Ok(tokens)
    }

    /// The template text this was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Fields in the order they appear, one row per template line. Lines
    /// without fields are omitted.
    pub fn fields(&self) -> Vec<Vec<Field>> {
        self.lines
            .iter()
            .map(|line| {
                line.iter()
                    .filter_map(|token| match token {
                        Token::Field(field) => Some(*field),
                        Token::Literal(_) => None,
                    })
                    .collect::<Vec<_>>()
            })
            .filter(|row| !row.is_empty())
            .collect()
    }

    /// Render the template, looking field values up with `value`.
    ///
    /// Missing fields are skipped together with the separator that would
    /// have followed them, so no dangling commas or blank lines remain.
    pub fn render<'a>(&self, value: impl Fn(Field) -> Option<&'a str>) -> String {
        let mut out: Vec<String> = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            let mut text = String::new();
            let mut seen_field = false;
            let mut separator: Option<&str> = None;
            for token in line {
                match token {
                    Token::Literal(literal) => {
                        if seen_field && separator.is_none() {
                            separator = Some(literal.as_str());
                        }
                    }
                    Token::Field(field) => {
                        let Some(v) = value(*field).filter(|v| !v.trim().is_empty()) else {
                            continue;
                        };
                        if let Some(sep) = separator.take() {
                            text.push_str(sep);
                        }
                        text.push_str(v);
                        seen_field = true;
                    }
                }
            }
            let text = SPACE_RUN.replace_all(&text, " ");
            let text = text.trim();
            if !text.is_empty() {
                out.push(text.to_string());
            }
        }
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn lookup(field: Field) -> Option<&'static str> {
        match field {
            Field::StreetAddress => Some("1234 Any Street"),
            Field::Locality => Some("Anytown"),
            Field::PostalCode => Some("94085"),
            _ => None,
        }
    }

    #[test]
    fn test_parse_fields() {
        let template = Template::parse("{streetAddress}\n{locality}, {region} {postalCode}\n{country}").unwrap();
        assert_eq!(
            template.fields(),
            vec![
                vec![Field::StreetAddress],
                vec![Field::Locality, Field::Region, Field::PostalCode],
                vec![Field::Country],
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_matches!(Template::parse("{street}"), Err(Error::UnknownField { .. }));
        assert_matches!(Template::parse("{locality"), Err(Error::InvalidTemplate { .. }));
        assert_matches!(Template::parse("locality}"), Err(Error::InvalidTemplate { .. }));
    }

    #[test]
    fn test_render_skips_missing_fields() {
        let template = Template::parse("{streetAddress}\n{locality}, {region} {postalCode}\n{country}").unwrap();
        assert_eq!(template.render(lookup), "1234 Any Street\nAnytown, 94085");
    }

    #[test]
    fn test_render_drops_edge_literals() {
        let template = Template::parse("> {region}-{locality}, {postalCode}.").unwrap();
        assert_eq!(template.render(lookup), "Anytown, 94085");
    }

    #[test]
    fn test_render_concatenates_without_separators() {
        let template = Template::parse("{country}{region}{locality}{streetAddress}").unwrap();
        let rendered = template.render(|field| match field {
            Field::Country => Some("中國"),
            Field::Locality => Some("香港"),
            Field::StreetAddress => Some("太古城英皇道1111號"),
            _ => None,
        });
        assert_eq!(rendered, "中國香港太古城英皇道1111號");
    }

    #[test]
    fn test_render_collapses_whitespace() {
        let template = Template::parse("{streetAddress}\n{locality}  \t{postalCode}").unwrap();
        let rendered = template.render(|field| match field {
            Field::StreetAddress => Some("  Hauptstraße 1 "),
            Field::Locality => Some("Berlin"),
            Field::PostalCode => Some(" "),
            _ => None,
        });
        assert_eq!(rendered, "Hauptstraße 1\nBerlin");
    }
}

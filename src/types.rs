//! Common types and enums for locale-address.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A locale split into its language, script and region subtags.
///
/// Parsing accepts `-` or `_` as the separator, so `en-US`, `en_US`,
/// `zh-Hant-TW` and `zxx-XX` are all understood. Subtags that are neither a
/// script nor a region (variants, extensions) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Locale {
    language: Option<String>,
    script: Option<String>,
    region: Option<String>,
}

impl Locale {
    /// Parse a locale, falling back to an undetermined locale when the
    /// string is malformed.
    ///
    /// Use [`str::parse`] instead when a malformed locale should be an
    /// error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locale_address::Locale;
    ///
    /// let locale = Locale::new("de-DE");
    /// assert_eq!(locale.language(), Some("de"));
    /// assert_eq!(locale.region(), Some("DE"));
    /// ```
    pub fn new(tag: &str) -> Self {
        match tag.parse() {
            Ok(locale) => locale,
            Err(e) => {
                log::warn!("{e}; using an undetermined locale");
                Self::undetermined()
            }
        }
    }

    /// A locale with no language, script or region.
    pub fn undetermined() -> Self {
        Self {
            language: None,
            script: None,
            region: None,
        }
    }

    /// Language subtag, lowercased (e.g. "en").
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Script subtag, title-cased (e.g. "Hant").
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Region subtag, uppercased (e.g. "US").
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Replace the region subtag.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into().to_ascii_uppercase());
        self
    }

    /// Replace the language subtag.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into().to_ascii_lowercase());
        self
    }

    /// The territory this locale implies: the region subtag, or the most
    /// likely region for the language when no region was given.
    pub fn territory(&self) -> Option<String> {
        if let Some(region) = &self.region {
            return Some(region.clone());
        }
        let language = self.language.as_deref()?;
        let region = match (language, self.script.as_deref()) {
            ("zh", Some("Hant")) => "TW",
            ("zh", _) => "CN",
            ("en", _) => "US",
            ("de", _) => "DE",
            ("fr", _) => "FR",
            ("es", _) => "ES",
            ("pt", _) => "BR",
            ("nl", _) => "NL",
            ("it", _) => "IT",
            ("ja", _) => "JP",
            ("ko", _) => "KR",
            _ => return None,
        };
        Some(region.to_string())
    }

    /// Whether the language is written in a CJK script by default.
    pub fn is_asian(&self) -> bool {
        matches!(self.language.as_deref(), Some("zh" | "ja" | "ko"))
    }
}

impl Default for Locale {
    /// The default locale is `en-US`.
    fn default() -> Self {
        Self {
            language: Some("en".to_string()),
            script: None,
            region: Some("US".to_string()),
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(Error::invalid_locale("empty locale string"));
        }

        let mut locale = Self::undetermined();
        for (i, subtag) in tag.split(['-', '_']).enumerate() {
            if subtag.is_empty() || !subtag.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(Error::invalid_locale(format!("malformed subtag in '{tag}'")));
            }
            let alpha = subtag.chars().all(|c| c.is_ascii_alphabetic());
            let len = subtag.len();

            if i == 0 && alpha && (2..=3).contains(&len) {
                // A lone uppercase pair is a bare region ("US")
                if len == 2 && subtag.chars().all(|c| c.is_ascii_uppercase()) {
                    locale.region = Some(subtag.to_string());
                } else if !subtag.eq_ignore_ascii_case("und") {
                    locale.language = Some(subtag.to_ascii_lowercase());
                }
            } else if i == 0 {
                return Err(Error::invalid_locale(format!("bad language subtag in '{tag}'")));
            } else if alpha && len == 4 && locale.script.is_none() && locale.region.is_none() {
                let mut chars = subtag.chars();
                let script = chars
                    .next()
                    .map(|c| c.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase());
                locale.script = script;
            } else if locale.region.is_none()
                && ((alpha && len == 2) || (len == 3 && subtag.chars().all(|c| c.is_ascii_digit())))
            {
                locale.region = Some(subtag.to_ascii_uppercase());
            }
        }

        Ok(locale)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [self.language(), self.script(), self.region()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            write!(f, "und")
        } else {
            write!(f, "{}", parts.join("-"))
        }
    }
}

/// Script variant of an address layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AddressFormat {
    /// Latin-alphabet layout, fields separated by spaces and commas
    #[default]
    Latin,
    /// Native CJK layout, largest unit first and no separators
    Asian,
}

impl AddressFormat {
    /// Name used in rule data ("latin" or "asian").
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressFormat::Latin => "latin",
            AddressFormat::Asian => "asian",
        }
    }

    /// Look a variant up by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "latin" => Some(AddressFormat::Latin),
            "asian" => Some(AddressFormat::Asian),
            _ => None,
        }
    }
}

impl fmt::Display for AddressFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The address fields that rules extract and templates place.
///
/// `countryCode` is not a field in this sense: it is always derived, never
/// extracted from text or printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Field {
    /// Everything not otherwise classified
    StreetAddress,
    /// City or town
    Locality,
    /// State, province or prefecture
    Region,
    /// Postal or zip code
    PostalCode,
    /// Country name as written
    Country,
}

impl Field {
    /// All fields, in the order they are usually listed.
    pub const ALL: [Field; 5] = [
        Field::StreetAddress,
        Field::Locality,
        Field::Region,
        Field::PostalCode,
        Field::Country,
    ];

    /// The camelCase name used in templates and component maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::StreetAddress => "streetAddress",
            Field::Locality => "locality",
            Field::Region => "region",
            Field::PostalCode => "postalCode",
            Field::Country => "country",
        }
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| Error::unknown_field(name))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatting style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Style {
    /// Full address including the country line
    #[default]
    Default,
    /// Domestic style without the country line
    NoCountry,
    /// A named style; territories that lack it use their default template
    Custom(String),
}

impl Style {
    /// Name used in rule data.
    pub fn as_str(&self) -> &str {
        match self {
            Style::Default => "default",
            Style::NoCountry => "nocountry",
            Style::Custom(name) => name,
        }
    }

    /// Parse a style name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "default" => Style::Default,
            "nocountry" => Style::NoCountry,
            _ => Style::Custom(name.to_string()),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

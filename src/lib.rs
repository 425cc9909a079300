//! # locale-address
//!
//! Locale-aware postal address parsing and formatting.
//!
//! Free-form address text is split into street address, locality, region,
//! postal code and country using per-territory rule tables, and structured
//! addresses are laid out again the way the territory writes them. Both
//! directions are pure functions over built-in data: there is nothing to
//! download, no I/O, and malformed input degrades to a sparse result instead
//! of an error.
//!
//! ## Features
//!
//! - **Address Parsing**: Country detection in three name tables, then an
//!   ordered pipeline of field extractors per territory
//! - **Address Formatting**: Per-territory templates with `default` and
//!   `nocountry` styles
//! - **Latin and Asian layouts**: CN, HK, JP and TW switch layout by script
//! - **Form metadata**: Translated field labels and value constraints
//! - **Parallel batches**: Optional rayon-backed batch parsing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use locale_address::AddressEngine;
//!
//! let engine = AddressEngine::new()?;
//!
//! let parsed = engine.parse("950 W Maude Ave.\nSunnyvale, CA 94085\nUSA");
//! println!("Street: {}", parsed.street_address().unwrap_or_default());
//! println!("City: {}", parsed.locality().unwrap_or_default());
//! println!("Zip: {}", parsed.postal_code().unwrap_or_default());
//!
//! println!("{}", engine.format(&parsed));
//! # Ok::<(), locale_address::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod address;
pub mod countries;
pub mod error;
mod extract;
pub mod formatter;
pub mod parser;
pub mod rules;
pub mod template;
mod territories;
pub mod tokenizer;
pub mod types;

// Re-export main API
pub use address::{Address, AddressBuilder};
pub use error::{Error, Result};
pub use formatter::{AddressFormatter, Choice, Constraint, FormatComponent};
pub use parser::AddressParser;
pub use rules::Territory;
pub use types::*;

/// Main entry point: a parser and a formatter sharing one configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use locale_address::{AddressEngine, EngineConfig, Style};
///
/// let config = EngineConfig::builder()
///     .locale("de-DE")
///     .style(Style::NoCountry)
///     .build();
/// let engine = AddressEngine::with_config(config)?;
///
/// let parsed = engine.parse("Dienerstrasse 12\n80331 München\nDeutschland");
/// assert_eq!(engine.format(&parsed), "Dienerstrasse 12\n80331 München");
/// # Ok::<(), locale_address::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AddressEngine {
    config: EngineConfig,
    parser: AddressParser,
    formatter: AddressFormatter,
}

impl AddressEngine {
    /// Create an engine with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in rule data fails verification.
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLocale`] if the configured locale is
    /// malformed, or [`Error::InvalidRule`] if `verify_rules` is set and a
    /// built-in rule does not compile.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        let locale: Locale = config.locale.parse()?;
        if config.verify_rules {
            rules::verify()?;
        }
        log::debug!("Address engine ready for {locale}");

        let parser = AddressParser::new().with_locale(locale.clone());
        let formatter = AddressFormatter::new()
            .with_locale(locale)
            .with_style(config.style.clone());
        Ok(Self {
            config,
            parser,
            formatter,
        })
    }

    /// The engine's parser.
    pub fn parser(&self) -> &AddressParser {
        &self.parser
    }

    /// The engine's formatter.
    pub fn formatter(&self) -> &AddressFormatter {
        &self.formatter
    }

    /// Parse an address string.
    pub fn parse(&self, text: &str) -> Address {
        self.parser.parse(text)
    }

    /// Parse several address strings in order.
    pub fn parse_batch(&self, addresses: &[&str]) -> Vec<Address> {
        self.parser.parse_batch(addresses)
    }

    /// Format an address.
    pub fn format(&self, address: &Address) -> String {
        self.formatter.format(address)
    }

    /// Form metadata for the engine's territory, labelled in the language
    /// of `label_locale` or the engine's locale.
    pub fn format_info(&self, label_locale: Option<&str>) -> Vec<Vec<FormatComponent>> {
        self.formatter.format_info(label_locale)
    }

    /// Get the configuration used by this instance.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Configuration for [`AddressEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Locale used for parsing and as the formatter's fallback territory
    pub locale: String,

    /// Formatting style
    pub style: Style,

    /// Whether to verify the built-in rule data on construction
    pub verify_rules: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            style: Style::Default,
            verify_rules: true,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locale_address::EngineConfig;
    ///
    /// let config = EngineConfig::builder()
    ///     .locale("ja-JP")
    ///     .verify_rules(false)
    ///     .build();
    /// assert_eq!(config.locale, "ja-JP");
    /// ```
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }
}

/// Builder for EngineConfig.
#[derive(Debug, Clone)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Set the locale.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.config.locale = locale.into();
        self
    }

    /// Set the formatting style.
    pub fn style(mut self, style: Style) -> Self {
        self.config.style = style;
        self
    }

    /// Set whether to verify the built-in rule data.
    pub fn verify_rules(mut self, enabled: bool) -> Self {
        self.config.verify_rules = enabled;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> EngineConfig {
        self.config
    }
}

impl Default for EngineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.style, Style::Default);
        assert!(config.verify_rules);
        assert_eq!(EngineConfig::builder().build(), config);
    }

    #[test]
    fn test_engine_round_trip() {
        let engine = AddressEngine::new().unwrap();
        let parsed = engine.parse("950 W Maude Ave.\nSunnyvale, CA 94085\nUSA");
        assert_eq!(parsed.locality(), Some("Sunnyvale"));
        assert_eq!(engine.format(&parsed), "950 W Maude Ave.\nSunnyvale CA 94085\nUSA");
        assert_eq!(engine.config().locale, "en-US");
    }

    #[test]
    fn test_engine_with_config() {
        let config = EngineConfig::builder()
            .locale("de-DE")
            .style(Style::NoCountry)
            .verify_rules(false)
            .build();
        let engine = AddressEngine::with_config(config).unwrap();
        assert_eq!(engine.parser().locale().region(), Some("DE"));
        assert_eq!(engine.formatter().style(), &Style::NoCountry);

        let parsed = engine.parse("Dienerstrasse 12\n80331 München\nDeutschland");
        assert_eq!(parsed.country(), Some("Deutschland"));
        assert_eq!(engine.format(&parsed), "Dienerstrasse 12\n80331 München");
        assert_eq!(engine.format_info(None)[1][0].label, "Postleitzahl");
    }

    #[test]
    fn test_engine_rejects_malformed_locale() {
        let config = EngineConfig::builder().locale("en--US").build();
        assert_matches!(AddressEngine::with_config(config), Err(Error::InvalidLocale { .. }));
    }

    #[test]
    fn test_engine_batch() {
        let engine = AddressEngine::new().unwrap();
        let parsed = engine.parse_batch(&["20 Main St.\nMyTown, NY", "5-2-1 Ginza, Chuo-ku\nTokyo 170-3293\nJapan"]);
        assert_eq!(parsed[0].region(), Some("NY"));
        assert_eq!(parsed[1].country_code(), Some("JP"));
    }
}

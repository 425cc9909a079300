//! Address parsing functionality.

use std::collections::HashMap;

use crate::address::Address;
use crate::extract;
use crate::rules;
use crate::tokenizer;
use crate::types::{AddressFormat, Field, Locale};

/// Locale-bound parser turning free-form text into an [`Address`].
///
/// Parsing never fails: text that no rule recognizes ends up in the street
/// address, and the country code falls back to the locale's territory.
#[derive(Debug, Clone, Default)]
pub struct AddressParser {
    locale: Locale,
}

impl AddressParser {
    /// Create a parser for the default `en-US` locale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser for a locale string such as `"de-DE"`. Malformed
    /// strings fall back to an undetermined locale.
    pub fn for_locale(locale: &str) -> Self {
        Self {
            locale: Locale::new(locale),
        }
    }

    /// Set the locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the language used to look up localized country names.
    pub fn with_language(mut self, language: &str) -> Self {
        self.locale = self.locale.with_language(language);
        self
    }

    /// Set the region assumed when the text names no country.
    pub fn with_region(mut self, region: &str) -> Self {
        self.locale = self.locale.with_region(region);
        self
    }

    /// The parser's locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Parse an address string into structured components.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use locale_address::AddressParser;
    ///
    /// let parser = AddressParser::for_locale("es-MX");
    /// let parsed = parser.parse("Vicente Guerrero S/N, Centro\nC.P 23450 Cabo San Lucas, BCS\nMéxico");
    /// assert_eq!(parsed.locality(), Some("Cabo San Lucas"));
    /// assert_eq!(parsed.country_code(), Some("MX"));
    /// ```
    pub fn parse(&self, text: &str) -> Address {
        let normalized = tokenizer::normalize(text);
        let mut lines = tokenizer::split_lines(&normalized);

        let country = extract::find_country(&mut lines, self.locale.language());
        let country_code = country
            .as_ref()
            .map(|found| found.code.to_string())
            .or_else(|| self.locale.territory());

        let territory = rules::lookup(country_code.as_deref());
        let format = territory
            .is_multiformat()
            .then(|| tokenizer::detect_format(&normalized));
        let variant = format.unwrap_or_default();
        log::debug!(
            "Parsing with {} rules ({variant}), country {:?}",
            territory.code(),
            country.as_ref().map(|found| found.name.as_str())
        );

        let layout = territory.layout(variant);
        let mut fields = HashMap::new();
        extract::run_extractors(&mut lines, layout, variant, &mut fields);
        let street = extract::join_street(&lines, layout, variant);

        let mut builder = Address::builder();
        for (field, value) in fields {
            builder = builder.field(field, value);
        }
        if let Some(street) = street {
            builder = builder.street_address(street);
        }
        if let Some(found) = country {
            builder = builder.field(Field::Country, found.name);
        }
        if let Some(code) = country_code {
            builder = builder.country_code(code);
        }
        if let Some(format) = format {
            builder = builder.format(format);
        }
        builder.build()
    }

    /// Parse multiple addresses in order.
    pub fn parse_batch(&self, addresses: &[&str]) -> Vec<Address> {
        addresses.iter().map(|text| self.parse(text)).collect()
    }

    /// Parse multiple addresses in parallel using multiple threads.
    ///
    /// Results come back in the same order as the input. The rule table is
    /// shared read-only between threads.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use locale_address::AddressParser;
    ///
    /// let parser = AddressParser::for_locale("en-US");
    /// let addresses = vec![
    ///     "950 W Maude Ave.\nSunnyvale, CA 94085",
    ///     "P.O. Box 350\nMinneapolis MN 45678-2234",
    /// ];
    ///
    /// for parsed in parser.parse_batch_parallel(&addresses) {
    ///     println!("{:?}", parsed.locality());
    /// }
    /// ```
    #[cfg(feature = "parallel")]
    pub fn parse_batch_parallel(&self, addresses: &[&str]) -> Vec<Address> {
        use rayon::prelude::*;

        addresses.par_iter().map(|text| self.parse(text)).collect()
    }

    /// Parse multiple addresses in parallel and keep only those with at
    /// least one recognized field.
    #[cfg(feature = "parallel")]
    pub fn parse_batch_parallel_nonempty(&self, addresses: &[&str]) -> Vec<Address> {
        self.parse_batch_parallel(addresses)
            .into_iter()
            .filter(|address| !address.is_empty())
            .collect()
    }
}

/// Convenience for one-off parsing with a locale string.
pub fn parse_address(text: &str, locale: &str) -> Address {
    AddressParser::for_locale(locale).parse(text)
}

impl AddressParser {
    /// Script variant the parser would choose for `text` under `territory`.
    pub fn detect_format(text: &str, territory: &str) -> AddressFormat {
        if rules::lookup(Some(territory)).is_multiformat() {
            tokenizer::detect_format(text)
        } else {
            AddressFormat::Latin
        }
    }
}

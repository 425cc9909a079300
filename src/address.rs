//! The structured address value.

use std::collections::HashMap;
use std::fmt;

use crate::formatter::AddressFormatter;
use crate::types::{AddressFormat, Field};

/// A postal address split into its fields.
///
/// Values are produced by [`AddressParser`](crate::AddressParser) or put
/// together with [`Address::builder`]. Every field is optional; matched text
/// keeps the casing it had in the input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Address {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    street_address: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    locality: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    region: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    postal_code: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    country: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    country_code: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    format: Option<AddressFormat>,
}

impl Address {
    /// Start building an address from known fields.
    pub fn builder() -> AddressBuilder {
        AddressBuilder::default()
    }

    /// Street, house number and anything else not claimed by another field
    pub fn street_address(&self) -> Option<&str> {
        self.street_address.as_deref()
    }

    /// City, town or district
    pub fn locality(&self) -> Option<&str> {
        self.locality.as_deref()
    }

    /// State, province or prefecture
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Postal code
    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    /// Country name as written
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// ISO 3166 code of the territory the address belongs to
    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    /// Script variant, set for territories with more than one layout
    pub fn format(&self) -> Option<AddressFormat> {
        self.format
    }

    /// Value of one field.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::StreetAddress => self.street_address(),
            Field::Locality => self.locality(),
            Field::Region => self.region(),
            Field::PostalCode => self.postal_code(),
            Field::Country => self.country(),
        }
    }

    /// Get all present components as a map keyed by camelCase field name.
    pub fn components(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();

        macro_rules! add_component {
            ($field:expr, $name:expr) => {
                if let Some(ref value) = $field {
                    map.insert($name.to_string(), value.to_string());
                }
            };
        }

        add_component!(self.street_address, "streetAddress");
        add_component!(self.locality, "locality");
        add_component!(self.region, "region");
        add_component!(self.postal_code, "postalCode");
        add_component!(self.country, "country");
        add_component!(self.country_code, "countryCode");
        add_component!(self.format.map(|f| f.as_str()), "format");

        map
    }

    /// Whether no field other than the country code is set.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_none())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&AddressFormatter::default().format(self))
    }
}

/// Builder for [`Address`]. Values are stored as given.
#[derive(Debug, Clone, Default)]
pub struct AddressBuilder {
    address: Address,
}

impl AddressBuilder {
    /// Set the street address.
    pub fn street_address(mut self, value: impl Into<String>) -> Self {
        self.address.street_address = Some(value.into());
        self
    }

    /// Set the locality.
    pub fn locality(mut self, value: impl Into<String>) -> Self {
        self.address.locality = Some(value.into());
        self
    }

    /// Set the region.
    pub fn region(mut self, value: impl Into<String>) -> Self {
        self.address.region = Some(value.into());
        self
    }

    /// Set the postal code.
    pub fn postal_code(mut self, value: impl Into<String>) -> Self {
        self.address.postal_code = Some(value.into());
        self
    }

    /// Set the country name.
    pub fn country(mut self, value: impl Into<String>) -> Self {
        self.address.country = Some(value.into());
        self
    }

    /// Set the territory code.
    pub fn country_code(mut self, value: impl Into<String>) -> Self {
        self.address.country_code = Some(value.into());
        self
    }

    /// Set the script variant.
    pub fn format(mut self, format: AddressFormat) -> Self {
        self.address.format = Some(format);
        self
    }

    /// Set one field by name.
    pub fn field(self, field: Field, value: impl Into<String>) -> Self {
        match field {
            Field::StreetAddress => self.street_address(value),
            Field::Locality => self.locality(value),
            Field::Region => self.region(value),
            Field::PostalCode => self.postal_code(value),
            Field::Country => self.country(value),
        }
    }

    /// Finish building.
    pub fn build(self) -> Address {
        self.address
    }
}

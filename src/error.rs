//! Error types and handling for locale-address.
//!
//! Parsing and formatting never fail; errors only come from the
//! configuration edges (locale strings, field names, templates and the
//! built-in rule table).

/// Result type alias for locale-address operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for locale-address operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A locale string could not be parsed
    #[error("Invalid locale: {message}")]
    InvalidLocale {
        /// Error message
        message: String,
    },

    /// A field name is not one of the address fields
    #[error("Unknown address field: {message}")]
    UnknownField {
        /// Error message
        message: String,
    },

    /// A format template is malformed
    #[error("Invalid template: {message}")]
    InvalidTemplate {
        /// Error message
        message: String,
    },

    /// A territory rule is inconsistent
    #[error("Invalid rule: {message}")]
    InvalidRule {
        /// Error message
        message: String,
    },

    /// A rule pattern failed to compile
    #[error("Pattern error: {source}")]
    Pattern {
        /// Source error
        #[from]
        source: regex::Error,
    },
}

impl Error {
    /// Create a new invalid locale error
    pub fn invalid_locale(message: impl Into<String>) -> Self {
        Self::InvalidLocale {
            message: message.into(),
        }
    }

    /// Create a new unknown field error
    pub fn unknown_field(message: impl Into<String>) -> Self {
        Self::UnknownField {
            message: message.into(),
        }
    }

    /// Create a new invalid template error
    pub fn invalid_template(message: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            message: message.into(),
        }
    }

    /// Create a new invalid rule error
    pub fn invalid_rule(message: impl Into<String>) -> Self {
        Self::InvalidRule {
            message: message.into(),
        }
    }
}

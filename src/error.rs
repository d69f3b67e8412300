//! Feed binding error types

use thiserror::Error;

/// Errors raised while copying beans, converting feeds or reading and writing XML
#[derive(Error, Debug)]
pub enum SyndError {
    /// Copy source does not implement the interface the target expects
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Interface the target bean copies from
        expected: String,
        /// Interface the source bean actually implements
        found: String,
    },

    /// A nested value can be neither cloned nor copied
    #[error("Value of type {0} cannot be cloned or copied")]
    NotCopyable(String),

    /// A property name that the bean does not declare
    #[error("Unknown property {property} on {bean}")]
    UnknownProperty {
        /// Bean the property was assigned on
        bean: String,
        /// Offending property name
        property: String,
    },

    /// A property value of the wrong shape was assigned
    #[error("Invalid value for property {property}: {message}")]
    InvalidPropertyValue {
        /// Property name
        property: String,
        /// What was wrong with the value
        message: String,
    },

    /// Malformed XML
    #[error("XML error: {0}")]
    Xml(String),

    /// No parser, generator or converter is registered for the feed type
    #[error("Unsupported feed type: {0}")]
    UnsupportedFeedType(String),

    /// The document carries a DOCTYPE declaration and doctypes are disabled
    #[error("DOCTYPE declarations are not allowed")]
    DoctypeNotAllowed,

    /// A date that is neither RFC 822 nor W3C date-time
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// GeoRSS coordinate text that does not describe the geometry
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// UTF-8 decoding error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl SyndError {
    pub(crate) fn unknown_property(bean: &str, property: &str) -> Self {
        SyndError::UnknownProperty {
            bean: bean.to_string(),
            property: property.to_string(),
        }
    }
}

impl From<quick_xml::Error> for SyndError {
    fn from(err: quick_xml::Error) -> Self {
        SyndError::Xml(err.to_string())
    }
}

/// Result type alias using SyndError
pub type Result<T> = std::result::Result<T, SyndError>;

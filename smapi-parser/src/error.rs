//! Error types for SMAPI header parsing

use thiserror::Error;

/// Errors that can occur while decoding a SOAP header payload
#[derive(Error, Debug)]
pub enum ParseError {
    /// XML deserialization failed
    #[error("XML deserialization failed: {0}")]
    XmlDeserializationFailed(String),

    /// Invalid XML structure
    #[error("Invalid XML structure: {0}")]
    InvalidXmlStructure(String),

    /// Missing required element
    #[error("Missing required element: {0}")]
    MissingRequiredElement(String),

    /// The fragment is well formed but describes a different header
    #[error("Unexpected root element: expected <{expected}>, found <{found}>")]
    UnexpectedRootElement { expected: &'static str, found: String },
}

/// Result type alias for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

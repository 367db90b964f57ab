use thiserror::Error;

/// Errors reported by the music service core
///
/// Every variant is returned as a value to the transport layer, which turns it
/// into a SOAP fault using [`SmapiError::fault_code`]. Nothing here is retried.
#[derive(Debug, Error)]
pub enum SmapiError {
    /// Catalog identifier whose numeric part does not parse
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// `albumlist:` prefix with a type token we do not know
    #[error("Unknown album list type: {0}")]
    UnknownAlbumListType(String),

    /// Negative pagination arguments
    #[error("Invalid window: index {index}, count {count}")]
    InvalidWindow { index: i32, count: i32 },

    /// Missing identity where one is required, or a rejected login
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Range header present but not a single `bytes=first-[last]` range
    #[error("Unsupported range: {0}")]
    UnsupportedRange(String),

    /// Search on an id other than the search categories
    #[error("Invalid search category: {0}")]
    InvalidSearchCategory(String),

    /// SMAPI operation this service does not provide
    #[error("Operation not implemented: {0}")]
    NotImplemented(&'static str),

    /// The catalog has no entity with this id
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Catalog collaborator failure
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Invalid service configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SmapiError {
    /// Create the fault raised for a failed `getSessionId` login
    pub fn login_invalid() -> Self {
        Self::Unauthorized("Login failed".to_string())
    }

    /// SOAP fault code a controller expects for this error
    pub fn fault_code(&self) -> &'static str {
        match self {
            SmapiError::Unauthorized(_) => "Client.LoginInvalid",
            SmapiError::InvalidIdentifier(_)
            | SmapiError::UnknownAlbumListType(_)
            | SmapiError::InvalidSearchCategory(_)
            | SmapiError::ItemNotFound(_) => "Client.ItemNotFound",
            SmapiError::InvalidWindow { .. } | SmapiError::UnsupportedRange(_) => {
                "Client.InvalidArgument"
            }
            SmapiError::NotImplemented(_) => "Client.NotImplemented",
            SmapiError::Catalog(_) | SmapiError::Configuration(_) => "Server.ServiceUnknownError",
        }
    }
}

/// Type alias for results that can return a SmapiError
pub type Result<T> = std::result::Result<T, SmapiError>;

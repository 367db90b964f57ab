//! # smapi-parser
//!
//! XML decoding for the SOAP header payloads a Sonos controller attaches to
//! music service (SMAPI) calls.
//!
//! ## Usage
//!
//! ```rust
//! use smapi_parser::Credentials;
//!
//! let xml = r#"<credentials xmlns="http://www.sonos.com/Services/1.1">
//!     <sessionId>alice</sessionId>
//! </credentials>"#;
//!
//! let credentials = Credentials::from_xml(xml)?;
//! assert_eq!(credentials.session_id.as_deref(), Some("alice"));
//! # Ok::<(), smapi_parser::ParseError>(())
//! ```

pub mod common;
pub mod credentials;
pub mod error;

pub use credentials::{Credentials, Login, LoginToken, CREDENTIALS_ELEMENT};
pub use error::{ParseError, ParseResult};

//! Caller identity from SOAP headers
//!
//! The username doubles as the session id: `getSessionId` hands it out and
//! controllers echo it back in the `credentials` header of later calls.
//! Depending on the controller's SOAP stack the header arrives either already
//! decoded or as a raw XML fragment, so both forms are accepted here.

use std::borrow::Cow;

use smapi_parser::{Credentials, ParseError};
use tracing::{debug, warn};

/// One entry of the SOAP header list of a call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderEntry {
    /// Header the transport already decoded into credentials
    Credentials(Credentials),
    /// Header left as a raw XML fragment
    Markup(String),
}

impl HeaderEntry {
    /// The credentials carried by this entry, decoding markup if needed.
    ///
    /// A fragment that fails to decode is logged and treated as carrying no
    /// credentials.
    pub fn credentials(&self) -> Option<Cow<'_, Credentials>> {
        match self {
            HeaderEntry::Credentials(credentials) => Some(Cow::Borrowed(credentials)),
            HeaderEntry::Markup(xml) => match Credentials::from_xml(xml) {
                Ok(credentials) => Some(Cow::Owned(credentials)),
                Err(ParseError::UnexpectedRootElement { found, .. }) => {
                    debug!(header = %found, "Skipping non-credentials header");
                    None
                }
                Err(e) => {
                    warn!(error = %e, "Failed to decode credentials header");
                    None
                }
            },
        }
    }
}

impl From<Credentials> for HeaderEntry {
    fn from(credentials: Credentials) -> Self {
        HeaderEntry::Credentials(credentials)
    }
}

/// Username of the caller, if any header identifies one.
///
/// The session id wins over the login username when both are present.
pub fn extract_identity(headers: &[HeaderEntry]) -> Option<String> {
    if headers.is_empty() {
        debug!("No SOAP headers on call");
        return None;
    }

    let identity = headers.iter().find_map(|header| {
        let credentials = header.credentials()?;
        if let Some(session_id) = credentials.session_id() {
            return Some(session_id.to_string());
        }
        debug!("No session id in credentials, using login username");
        credentials.login_username().map(str::to_string)
    });

    if identity.is_none() {
        debug!(headers = headers.len(), "No credentials found in SOAP headers");
    }
    identity
}

//! SMAPI `credentials` SOAP header
//!
//! Every call from a Sonos controller carries a `credentials` header. The
//! first call after linking an account carries a `login` block; once
//! `getSessionId` has answered, later calls carry the issued `sessionId`
//! instead.
//!
//! ```xml
//! <credentials xmlns="http://www.sonos.com/Services/1.1">
//!   <deviceId>00-0E-58-XX-XX-XX:1</deviceId>
//!   <deviceProvider>Sonos</deviceProvider>
//!   <sessionId>alice</sessionId>
//!   <login>
//!     <username>alice</username>
//!     <password>secret</password>
//!   </login>
//! </credentials>
//! ```

use serde::{Deserialize, Serialize};

use crate::common::xml_decode;
use crate::error::{ParseError, ParseResult};

/// Local name of the header element carrying the credentials.
pub const CREDENTIALS_ELEMENT: &str = "credentials";

/// The decoded `credentials` header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename = "credentials")]
pub struct Credentials {
    /// Household device identifier of the calling player
    #[serde(rename = "deviceId", default)]
    pub device_id: Option<String>,

    /// Provider of the calling device (usually "Sonos")
    #[serde(rename = "deviceProvider", default)]
    pub device_provider: Option<String>,

    /// Session id issued by `getSessionId`
    #[serde(rename = "sessionId", default)]
    pub session_id: Option<String>,

    /// Username/password pair sent before a session exists
    #[serde(rename = "login", default)]
    pub login: Option<Login>,

    /// Device-link token, sent by controllers using the AppLink flow
    #[serde(rename = "loginToken", default)]
    pub login_token: Option<LoginToken>,
}

/// `login` block of the credentials header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Login {
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

/// `loginToken` block of the credentials header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoginToken {
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default)]
    pub key: Option<String>,

    #[serde(rename = "householdId", default)]
    pub household_id: Option<String>,
}

impl Credentials {
    /// Decode a raw `credentials` header fragment.
    ///
    /// Fails with [`ParseError::UnexpectedRootElement`] when the fragment is
    /// some other header, so callers scanning a header list can skip it.
    pub fn from_xml(xml: &str) -> ParseResult<Self> {
        let root = xml_decode::root_element_name(xml)?;
        if root != CREDENTIALS_ELEMENT {
            return Err(ParseError::UnexpectedRootElement {
                expected: CREDENTIALS_ELEMENT,
                found: root,
            });
        }

        xml_decode::parse(xml)
    }

    /// Session id, ignoring an empty element.
    pub fn session_id(&self) -> Option<&str> {
        non_blank(self.session_id.as_deref())
    }

    /// Username from the `login` block, ignoring an empty element.
    pub fn login_username(&self) -> Option<&str> {
        non_blank(self.login.as_ref().and_then(|login| login.username.as_deref()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_credentials() {
        let xml = r#"<credentials xmlns="http://www.sonos.com/Services/1.1">
            <deviceId>00-0E-58-28-3B-D4:7</deviceId>
            <deviceProvider>Sonos</deviceProvider>
            <sessionId>alice</sessionId>
        </credentials>"#;

        let credentials = Credentials::from_xml(xml).unwrap();
        assert_eq!(credentials.session_id(), Some("alice"));
        assert_eq!(credentials.device_provider.as_deref(), Some("Sonos"));
        assert!(credentials.login.is_none());
    }

    #[test]
    fn test_login_credentials() {
        let xml = r#"<ns1:credentials xmlns:ns1="http://www.sonos.com/Services/1.1">
            <ns1:login>
                <ns1:username>bob</ns1:username>
                <ns1:password>hunter2</ns1:password>
            </ns1:login>
        </ns1:credentials>"#;

        let credentials = Credentials::from_xml(xml).unwrap();
        assert_eq!(credentials.session_id(), None);
        assert_eq!(credentials.login_username(), Some("bob"));
        assert_eq!(
            credentials.login.and_then(|l| l.password).as_deref(),
            Some("hunter2")
        );
    }

    #[test]
    fn test_login_token_credentials() {
        let xml = r#"<credentials>
            <loginToken>
                <token>tok</token>
                <key>k</key>
                <householdId>Sonos_abc</householdId>
            </loginToken>
        </credentials>"#;

        let credentials = Credentials::from_xml(xml).unwrap();
        let token = credentials.login_token.unwrap();
        assert_eq!(token.token.as_deref(), Some("tok"));
        assert_eq!(token.household_id.as_deref(), Some("Sonos_abc"));
    }

    #[test]
    fn test_blank_session_id_is_absent() {
        let credentials = Credentials {
            session_id: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(credentials.session_id(), None);
    }

    #[test]
    fn test_other_header_is_rejected() {
        let xml = r#"<context xmlns="http://www.sonos.com/Services/1.1"><timeZone>+01:00</timeZone></context>"#;

        match Credentials::from_xml(xml) {
            Err(ParseError::UnexpectedRootElement { expected, found }) => {
                assert_eq!(expected, "credentials");
                assert_eq!(found, "context");
            }
            other => panic!("Expected UnexpectedRootElement, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_fragment_is_rejected() {
        assert!(Credentials::from_xml("<credentials><sessionId>alice</credentials>").is_err());
    }
}

//! Integration tests for decoding credentials headers captured from controllers

use rstest::rstest;
use smapi_parser::{Credentials, ParseError};

/// Header as sent by the Sonos desktop controller after `getSessionId`.
const SESSION_HEADER: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<credentials xmlns="http://www.sonos.com/Services/1.1">
  <deviceId>00-0E-58-28-3B-D4:7</deviceId>
  <deviceProvider>Sonos</deviceProvider>
  <sessionId>alice</sessionId>
</credentials>"#;

/// Header as sent during the first call of an account link.
const LOGIN_HEADER: &str = r#"<s1:credentials xmlns:s1="http://www.sonos.com/Services/1.1">
  <s1:deviceId>00-0E-58-28-3B-D4:7</s1:deviceId>
  <s1:deviceProvider>Sonos</s1:deviceProvider>
  <s1:login>
    <s1:username>bob</s1:username>
    <s1:password>secret</s1:password>
  </s1:login>
</s1:credentials>"#;

#[rstest]
#[case::session(SESSION_HEADER, Some("alice"), None)]
#[case::login(LOGIN_HEADER, None, Some("bob"))]
fn test_controller_headers(
    #[case] xml: &str,
    #[case] session_id: Option<&str>,
    #[case] username: Option<&str>,
) {
    let credentials = Credentials::from_xml(xml).expect("header should decode");
    assert_eq!(credentials.session_id(), session_id);
    assert_eq!(credentials.login_username(), username);
    assert_eq!(credentials.device_id.as_deref(), Some("00-0E-58-28-3B-D4:7"));
}

#[rstest]
#[case::empty("")]
#[case::not_xml("sessionId=alice")]
#[case::unclosed("<credentials><sessionId>alice</sessionId>")]
fn test_unusable_fragments(#[case] xml: &str) {
    assert!(Credentials::from_xml(xml).is_err());
}

#[test]
fn test_foreign_header_reports_its_name() {
    let err = Credentials::from_xml(r#"<deviceSession xmlns="urn:x"/>"#).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedRootElement { .. }));
    assert!(err.to_string().contains("deviceSession"));
}

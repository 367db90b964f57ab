//! XML decoding utilities for SOAP header fragments.
//!
//! Header entries reach us as standalone XML fragments carrying their own
//! namespace declarations. Parsing happens in two stages: the fragment is
//! rewritten without prefixes or `xmlns` declarations, then handed to
//! `quick_xml::de` for the serde schema type.

use crate::error::{ParseError, ParseResult};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use serde::de::DeserializeOwned;

/// Parse an XML fragment into a deserializable type with namespace stripping.
///
/// # Arguments
///
/// * `xml` - The XML fragment to parse
///
/// # Returns
///
/// The parsed value of type `T`, or an error if parsing fails.
pub fn parse<T: DeserializeOwned>(xml: &str) -> ParseResult<T> {
    let stripped = strip_namespaces(xml)?;
    quick_xml::de::from_str(&stripped)
        .map_err(|e| ParseError::XmlDeserializationFailed(e.to_string()))
}

/// Strip namespace prefixes and `xmlns` declarations from an XML fragment.
///
/// # Example
///
/// Input: `<ns:credentials xmlns:ns="urn:x"><ns:sessionId>a</ns:sessionId></ns:credentials>`
/// Output: `<credentials><sessionId>a</sessionId></credentials>`
pub fn strip_namespaces(xml: &str) -> ParseResult<String> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::with_capacity(xml.len()));
    let mut depth = 0usize;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ParseError::InvalidXmlStructure(e.to_string()))?;

        let rewritten = match event {
            Event::Start(start) => {
                depth += 1;
                Event::Start(local_start(&start)?)
            }
            Event::Empty(start) => Event::Empty(local_start(&start)?),
            Event::End(end) => {
                depth = depth.saturating_sub(1);
                let name = utf8(end.local_name().as_ref())?.to_string();
                Event::End(BytesEnd::new(name))
            }
            Event::Eof if depth > 0 => {
                return Err(ParseError::InvalidXmlStructure(format!(
                    "{} unclosed element(s) at end of input",
                    depth
                )));
            }
            Event::Eof => break,
            other => other,
        };

        writer
            .write_event(rewritten)
            .map_err(|e| ParseError::InvalidXmlStructure(e.to_string()))?;
    }

    String::from_utf8(writer.into_inner())
        .map_err(|e| ParseError::InvalidXmlStructure(e.to_string()))
}

/// Local name of the first element in the fragment.
///
/// Processing instructions, comments and whitespace ahead of the root are
/// skipped.
pub fn root_element_name(xml: &str) -> ParseResult<String> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) | Ok(Event::Empty(start)) => {
                return Ok(utf8(start.local_name().as_ref())?.to_string());
            }
            Ok(Event::Eof) => {
                return Err(ParseError::MissingRequiredElement("root element".to_string()));
            }
            Ok(_) => continue,
            Err(e) => return Err(ParseError::InvalidXmlStructure(e.to_string())),
        }
    }
}

fn local_start(start: &BytesStart<'_>) -> ParseResult<BytesStart<'static>> {
    let name = utf8(start.local_name().as_ref())?.to_string();
    let mut rewritten = BytesStart::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| ParseError::InvalidXmlStructure(e.to_string()))?;
        let key = attr.key.as_ref();
        if key == b"xmlns" || key.starts_with(b"xmlns:") {
            continue;
        }
        rewritten.push_attribute((attr.key.local_name().as_ref(), attr.value.as_ref()));
    }

    Ok(rewritten.into_owned())
}

fn utf8(bytes: &[u8]) -> ParseResult<&str> {
    std::str::from_utf8(bytes).map_err(|e| ParseError::InvalidXmlStructure(e.to_string()))
}

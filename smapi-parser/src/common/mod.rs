//! Shared XML decoding helpers
//!
//! SMAPI controllers qualify header elements with whatever prefix their SOAP
//! stack picked (`ns:credentials`, `s1:sessionId`, ...). The helpers here
//! normalize that away so the serde schema types stay prefix agnostic.

pub mod xml_decode;

pub use xml_decode::{parse, root_element_name, strip_namespaces};

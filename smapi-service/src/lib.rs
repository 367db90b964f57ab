//! Sonos music service (SMAPI) core
//!
//! Exposes a media library to Sonos controllers. The pieces here are the
//! request-scoped logic behind the SOAP actions:
//!
//! - [`CatalogSelector`] / [`CatalogResolver`]: catalog ids to catalog lookups
//! - [`paginator`]: `(index, count)` windows over listings
//! - [`extract_identity`]: the caller's username from the `credentials` header
//! - [`ByteRange`]: `Range` header parsing for audio streaming
//!
//! SOAP envelopes, service registration with the household and mapping of
//! library objects to catalog entities are left to the host application.
//!
//! ```rust,ignore
//! use smapi_service::{ServiceConfig, SmapiService};
//!
//! let service = SmapiService::new(ServiceConfig::default(), catalog, users)?;
//! let page = service.get_metadata("playlists", 0, 100, &headers)?;
//! println!("{} of {}", page.returned_count(), page.total);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod identity;
pub mod logging;
pub mod media;
pub mod operation;
pub mod paginator;
pub mod range;
pub mod search;
pub mod selector;
pub mod service;
pub mod session;

pub use catalog::{CatalogProvider, CatalogResolver, Resolved};
pub use config::ServiceConfig;
pub use error::{Result, SmapiError};
pub use identity::{extract_identity, HeaderEntry};
pub use logging::{init_logging, init_service_logging, LoggingError, LoggingMode};
pub use media::{AlbumListType, MediaEntity, MediaKind};
pub use operation::Operation;
pub use paginator::{paginate, PageResult, Window};
pub use range::ByteRange;
pub use search::SearchCategory;
pub use selector::CatalogSelector;
pub use service::{LastUpdate, SmapiService};
pub use session::{issue_session_id, UserDirectory, UserRecord};

pub use smapi_parser::{Credentials, Login, LoginToken};

//! The music service facade
//!
//! [`SmapiService`] implements the SMAPI actions on top of the host's
//! [`CatalogProvider`] and [`UserDirectory`]. The SOAP transport decodes a
//! request, calls the matching method with the call's header list and turns
//! the result (or the [`SmapiError`] fault code) into a response envelope.
//!
//! ```rust,ignore
//! let service = SmapiService::new(ServiceConfig::from_env()?, catalog, users)?;
//! let page = service.get_metadata("albumlist:newest", 0, 10, &headers)?;
//! ```

use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::catalog::{CatalogProvider, CatalogResolver};
use crate::config::ServiceConfig;
use crate::error::{Result, SmapiError};
use crate::identity::{extract_identity, HeaderEntry};
use crate::media::MediaEntity;
use crate::operation::Operation;
use crate::paginator::{PageResult, Window};
use crate::search::SearchCategory;
use crate::selector::{parse_key, CatalogSelector};
use crate::session::{issue_session_id, UserDirectory};

/// Change tokens returned by `getLastUpdate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastUpdate {
    pub catalog: String,
    pub favorites: String,
}

/// SMAPI actions over a catalog and a user directory
#[derive(Debug)]
pub struct SmapiService<C, U> {
    config: ServiceConfig,
    catalog: C,
    users: U,
}

impl<C: CatalogProvider, U: UserDirectory> SmapiService<C, U> {
    pub fn new(config: ServiceConfig, catalog: C, users: U) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            catalog,
            users,
        })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Reject actions this service does not implement
    pub fn ensure_supported(&self, operation: Operation) -> Result<()> {
        if operation.is_supported() {
            Ok(())
        } else {
            debug!(%operation, "Rejecting unsupported operation");
            Err(SmapiError::NotImplemented(operation.name()))
        }
    }

    /// `getLastUpdate`
    pub fn get_last_update(&self) -> LastUpdate {
        if self.config.disable_catalog_caching {
            LastUpdate {
                catalog: Uuid::new_v4().simple().to_string(),
                favorites: Uuid::new_v4().simple().to_string(),
            }
        } else {
            LastUpdate {
                catalog: "1".to_string(),
                favorites: "1".to_string(),
            }
        }
    }

    /// `getMetadata`: one page of the children of catalog node `id`
    pub fn get_metadata(
        &self,
        id: &str,
        index: i32,
        count: i32,
        headers: &[HeaderEntry],
    ) -> Result<PageResult> {
        let window = Window::new(index, count)?;
        let service = &self.config.service_name;
        debug!(%service, id, index, count, "getMetadata");

        let caller = if CatalogSelector::parse(id)?.requires_identity() {
            extract_identity(headers)
        } else {
            None
        };

        let page = CatalogResolver::new(&self.catalog)
            .resolve(id, window, caller.as_deref())?
            .into_page(window);

        debug!(
            %service,
            id,
            offset = page.offset,
            count = page.returned_count(),
            total = page.total,
            "getMetadata result"
        );
        Ok(page)
    }

    /// `search` within one of the search categories
    pub fn search(&self, id: &str, term: &str, index: i32, count: i32) -> Result<PageResult> {
        let category: SearchCategory = id.parse()?;
        let window = Window::new(index, count)?;
        debug!(service = %self.config.service_name, %category, term, index, count, "search");
        self.catalog.search(term, category, window)
    }

    /// `getSessionId`: the session id for a valid login
    pub fn get_session_id(&self, username: &str, password: &str) -> Result<String> {
        issue_session_id(&self.users, username, password)
    }

    /// `getMediaMetadata`: a single song
    pub fn get_media_metadata(&self, id: &str) -> Result<MediaEntity> {
        let song_id = parse_key(id, id)?;
        self.catalog
            .song(song_id)?
            .ok_or_else(|| SmapiError::ItemNotFound(id.to_string()))
    }

    /// `getMediaURI`: absolute stream url of a song
    pub fn get_media_uri(&self, id: &str) -> Result<Url> {
        let song_id = parse_key(id, id)?;
        let path = self
            .catalog
            .media_path(song_id)?
            .ok_or_else(|| SmapiError::ItemNotFound(id.to_string()))?;

        self.config
            .base_url
            .join(&path)
            .map_err(|e| SmapiError::Catalog(format!("Invalid media path '{}': {}", path, e)))
    }

    /// `createItem`: star `favorite` for the caller, echoing its id
    pub fn create_item(&self, favorite: &str, headers: &[HeaderEntry]) -> Result<String> {
        let media_id = parse_key(favorite, favorite)?;
        let username = require_identity(headers)?;
        self.catalog.star(media_id, &username)?;
        Ok(favorite.to_string())
    }

    /// `deleteItem`: unstar `favorite` for the caller
    pub fn delete_item(&self, favorite: &str, headers: &[HeaderEntry]) -> Result<()> {
        let media_id = parse_key(favorite, favorite)?;
        let username = require_identity(headers)?;
        self.catalog.unstar(media_id, &username)
    }
}

fn require_identity(headers: &[HeaderEntry]) -> Result<String> {
    extract_identity(headers)
        .ok_or_else(|| SmapiError::Unauthorized("No credentials on call".to_string()))
}

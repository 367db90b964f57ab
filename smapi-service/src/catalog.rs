//! Catalog lookup and identifier dispatch
//!
//! [`CatalogProvider`] is implemented by the host application on top of its
//! media library. [`CatalogResolver`] turns a `getMetadata` id into exactly
//! one call on it.

use tracing::debug;

use crate::error::{Result, SmapiError};
use crate::media::{AlbumListType, MediaEntity};
use crate::paginator::{paginate, PageResult, Window};
use crate::search::SearchCategory;
use crate::selector::CatalogSelector;

/// Read access to the media library, plus the favorites it keeps per user.
///
/// Listings are returned fully ordered; the caller windows them. The album
/// list and search operations window on their own because they filter while
/// counting.
pub trait CatalogProvider {
    /// Top level menu
    fn root(&self) -> Result<Vec<MediaEntity>>;

    /// Music folders of the library
    fn library(&self) -> Result<Vec<MediaEntity>>;

    /// Playlists visible to `username`
    fn playlists(&self, username: &str) -> Result<Vec<MediaEntity>>;

    /// One container per album list type
    fn album_lists(&self) -> Result<Vec<MediaEntity>>;

    /// The starred artists/albums/songs menu
    fn starred(&self) -> Result<Vec<MediaEntity>>;

    fn starred_artists(&self, username: &str) -> Result<Vec<MediaEntity>>;

    fn starred_albums(&self, username: &str) -> Result<Vec<MediaEntity>>;

    fn starred_songs(&self, username: &str) -> Result<Vec<MediaEntity>>;

    /// Placeholder containers for the search categories
    fn search_categories(&self) -> Result<Vec<MediaEntity>> {
        Ok(SearchCategory::ALL
            .into_iter()
            .map(|category| MediaEntity::container("", category.id(), category.title()))
            .collect())
    }

    /// Songs of a playlist
    fn playlist(&self, playlist_id: u32) -> Result<Vec<MediaEntity>>;

    /// One page of an album list, with the total of the whole list
    fn album_list(
        &self,
        list_type: AlbumListType,
        window: Window,
        username: &str,
    ) -> Result<PageResult>;

    /// Top level directories of a music folder
    fn music_folder(&self, folder_id: u32) -> Result<Vec<MediaEntity>>;

    /// Children of a media directory
    fn directory(&self, directory_id: u32) -> Result<Vec<MediaEntity>>;

    /// One page of search hits, with the total hit count
    fn search(&self, term: &str, category: SearchCategory, window: Window) -> Result<PageResult>;

    /// A single song, `None` when the id is unknown
    fn song(&self, song_id: u32) -> Result<Option<MediaEntity>>;

    /// Stream path of a song, relative to the service base url
    fn media_path(&self, song_id: u32) -> Result<Option<String>>;

    fn star(&self, media_id: u32, username: &str) -> Result<()>;

    fn unstar(&self, media_id: u32, username: &str) -> Result<()>;
}

/// Outcome of resolving a catalog id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// Full listing, still to be windowed
    Listing(Vec<MediaEntity>),
    /// Page already windowed by the catalog
    Page(PageResult),
}

impl Resolved {
    /// Apply `window` unless the catalog already did
    pub fn into_page(self, window: Window) -> PageResult {
        match self {
            Resolved::Listing(items) => paginate(items, window),
            Resolved::Page(page) => page,
        }
    }
}

/// Dispatches catalog ids to a [`CatalogProvider`]
#[derive(Debug)]
pub struct CatalogResolver<'a, C: ?Sized> {
    catalog: &'a C,
}

impl<'a, C: CatalogProvider + ?Sized> CatalogResolver<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Resolve `id` for `caller`.
    ///
    /// `window` is only forwarded to catalogs that window on their own.
    pub fn resolve(&self, id: &str, window: Window, caller: Option<&str>) -> Result<Resolved> {
        let selector = CatalogSelector::parse(id)?;
        debug!(id, ?selector, "Resolving catalog id");
        self.resolve_selector(selector, window, caller)
    }

    pub fn resolve_selector(
        &self,
        selector: CatalogSelector,
        window: Window,
        caller: Option<&str>,
    ) -> Result<Resolved> {
        let catalog = self.catalog;

        let listing = match selector {
            CatalogSelector::Root => catalog.root()?,
            CatalogSelector::Library => catalog.library()?,
            CatalogSelector::Playlists => catalog.playlists(require_caller(selector, caller)?)?,
            CatalogSelector::AlbumLists => catalog.album_lists()?,
            CatalogSelector::Starred => catalog.starred()?,
            CatalogSelector::StarredArtists => {
                catalog.starred_artists(require_caller(selector, caller)?)?
            }
            CatalogSelector::StarredAlbums => {
                catalog.starred_albums(require_caller(selector, caller)?)?
            }
            CatalogSelector::StarredSongs => {
                catalog.starred_songs(require_caller(selector, caller)?)?
            }
            CatalogSelector::Search => catalog.search_categories()?,
            CatalogSelector::Playlist(playlist_id) => catalog.playlist(playlist_id)?,
            CatalogSelector::AlbumList(list_type) => {
                let username = require_caller(selector, caller)?;
                return Ok(Resolved::Page(catalog.album_list(list_type, window, username)?));
            }
            CatalogSelector::MusicFolder(folder_id) => catalog.music_folder(folder_id)?,
            CatalogSelector::Directory(directory_id) => catalog.directory(directory_id)?,
        };

        Ok(Resolved::Listing(listing))
    }
}

fn require_caller(selector: CatalogSelector, caller: Option<&str>) -> Result<&str> {
    caller.ok_or_else(|| {
        SmapiError::Unauthorized(format!("'{}' requires an authenticated session", selector))
    })
}

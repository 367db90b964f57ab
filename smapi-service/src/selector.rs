//! Parsing of catalog identifiers into browse targets

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SmapiError};
use crate::media::AlbumListType;

pub const ID_ROOT: &str = "root";
pub const ID_LIBRARY: &str = "library";
pub const ID_PLAYLISTS: &str = "playlists";
pub const ID_ALBUMLISTS: &str = "albumlists";
pub const ID_STARRED: &str = "starred";
pub const ID_STARRED_ARTISTS: &str = "starred-artists";
pub const ID_STARRED_ALBUMS: &str = "starred-albums";
pub const ID_STARRED_SONGS: &str = "starred-songs";
pub const ID_SEARCH: &str = "search";

pub const ID_PLAYLIST_PREFIX: &str = "playlist:";
pub const ID_ALBUMLIST_PREFIX: &str = "albumlist:";
pub const ID_MUSICFOLDER_PREFIX: &str = "musicfolder:";

/// The catalog node a `getMetadata` id points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogSelector {
    Root,
    Library,
    Playlists,
    AlbumLists,
    Starred,
    StarredArtists,
    StarredAlbums,
    StarredSongs,
    Search,
    Playlist(u32),
    AlbumList(AlbumListType),
    MusicFolder(u32),
    /// Bare numeric id of a media directory
    Directory(u32),
}

impl CatalogSelector {
    /// Parse a wire identifier.
    ///
    /// Fixed ids are matched exactly, then the prefixed forms, and whatever is
    /// left must be a bare directory id.
    pub fn parse(id: &str) -> Result<Self> {
        let selector = match id {
            ID_ROOT => CatalogSelector::Root,
            ID_LIBRARY => CatalogSelector::Library,
            ID_PLAYLISTS => CatalogSelector::Playlists,
            ID_ALBUMLISTS => CatalogSelector::AlbumLists,
            ID_STARRED => CatalogSelector::Starred,
            ID_STARRED_ARTISTS => CatalogSelector::StarredArtists,
            ID_STARRED_ALBUMS => CatalogSelector::StarredAlbums,
            ID_STARRED_SONGS => CatalogSelector::StarredSongs,
            ID_SEARCH => CatalogSelector::Search,
            _ => {
                if let Some(key) = id.strip_prefix(ID_PLAYLIST_PREFIX) {
                    CatalogSelector::Playlist(parse_key(id, key)?)
                } else if let Some(key) = id.strip_prefix(ID_ALBUMLIST_PREFIX) {
                    CatalogSelector::AlbumList(key.parse()?)
                } else if let Some(key) = id.strip_prefix(ID_MUSICFOLDER_PREFIX) {
                    CatalogSelector::MusicFolder(parse_key(id, key)?)
                } else {
                    CatalogSelector::Directory(parse_key(id, id)?)
                }
            }
        };

        Ok(selector)
    }

    /// Whether browsing this node needs to know who is asking
    pub fn requires_identity(&self) -> bool {
        matches!(
            self,
            CatalogSelector::Playlists
                | CatalogSelector::StarredArtists
                | CatalogSelector::StarredAlbums
                | CatalogSelector::StarredSongs
                | CatalogSelector::AlbumList(_)
        )
    }

    /// Whether the catalog windows this listing itself
    pub fn is_pre_windowed(&self) -> bool {
        matches!(self, CatalogSelector::AlbumList(_))
    }
}

/// Parse the numeric key of `id`, reporting the whole id on failure
pub(crate) fn parse_key(id: &str, key: &str) -> Result<u32> {
    key.parse()
        .map_err(|_| SmapiError::InvalidIdentifier(id.to_string()))
}

impl FromStr for CatalogSelector {
    type Err = SmapiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CatalogSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSelector::Root => f.write_str(ID_ROOT),
            CatalogSelector::Library => f.write_str(ID_LIBRARY),
            CatalogSelector::Playlists => f.write_str(ID_PLAYLISTS),
            CatalogSelector::AlbumLists => f.write_str(ID_ALBUMLISTS),
            CatalogSelector::Starred => f.write_str(ID_STARRED),
            CatalogSelector::StarredArtists => f.write_str(ID_STARRED_ARTISTS),
            CatalogSelector::StarredAlbums => f.write_str(ID_STARRED_ALBUMS),
            CatalogSelector::StarredSongs => f.write_str(ID_STARRED_SONGS),
            CatalogSelector::Search => f.write_str(ID_SEARCH),
            CatalogSelector::Playlist(id) => write!(f, "{}{}", ID_PLAYLIST_PREFIX, id),
            CatalogSelector::AlbumList(t) => write!(f, "{}{}", ID_ALBUMLIST_PREFIX, t),
            CatalogSelector::MusicFolder(id) => write!(f, "{}{}", ID_MUSICFOLDER_PREFIX, id),
            CatalogSelector::Directory(id) => write!(f, "{}", id),
        }
    }
}

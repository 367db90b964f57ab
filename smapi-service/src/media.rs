//! Catalog entities handed to the controller

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SmapiError;

/// Whether an entity can be browsed into or played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    /// Folder, playlist, album list, search category, artist or album
    Container,
    /// A playable song
    Leaf,
}

/// An item of the browsable catalog
///
/// The id is the type prefix concatenated with the entity key, e.g.
/// `playlist:42` or `albumlist:newest`. Directories and songs use the bare
/// numeric key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaEntity {
    pub id: String,
    pub title: String,
    pub kind: MediaKind,
}

impl MediaEntity {
    /// Browsable entity with id `prefix` + `key`
    pub fn container(prefix: &str, key: impl fmt::Display, title: impl Into<String>) -> Self {
        Self {
            id: format!("{}{}", prefix, key),
            title: title.into(),
            kind: MediaKind::Container,
        }
    }

    /// Playable entity with id `prefix` + `key`
    pub fn leaf(prefix: &str, key: impl fmt::Display, title: impl Into<String>) -> Self {
        Self {
            id: format!("{}{}", prefix, key),
            title: title.into(),
            kind: MediaKind::Leaf,
        }
    }

    pub fn is_container(&self) -> bool {
        self.kind == MediaKind::Container
    }
}

/// Album list flavours offered under `albumlists`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlbumListType {
    Random,
    Newest,
    Starred,
    Highest,
    Frequent,
    Recent,
    Decade,
    Genre,
    Alphabetical,
}

impl AlbumListType {
    pub const ALL: [AlbumListType; 9] = [
        AlbumListType::Random,
        AlbumListType::Newest,
        AlbumListType::Starred,
        AlbumListType::Highest,
        AlbumListType::Frequent,
        AlbumListType::Recent,
        AlbumListType::Decade,
        AlbumListType::Genre,
        AlbumListType::Alphabetical,
    ];

    /// Wire token used after the `albumlist:` prefix
    pub fn id(&self) -> &'static str {
        match self {
            AlbumListType::Random => "random",
            AlbumListType::Newest => "newest",
            AlbumListType::Starred => "starred",
            AlbumListType::Highest => "highest",
            AlbumListType::Frequent => "frequent",
            AlbumListType::Recent => "recent",
            AlbumListType::Decade => "decade",
            AlbumListType::Genre => "genre",
            AlbumListType::Alphabetical => "alphabetical",
        }
    }

    /// Display title of the list
    pub fn description(&self) -> &'static str {
        match self {
            AlbumListType::Random => "Random",
            AlbumListType::Newest => "Recently added",
            AlbumListType::Starred => "Starred",
            AlbumListType::Highest => "Top rated",
            AlbumListType::Frequent => "Most played",
            AlbumListType::Recent => "Recently played",
            AlbumListType::Decade => "By decade",
            AlbumListType::Genre => "By genre",
            AlbumListType::Alphabetical => "Alphabetical",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

impl FromStr for AlbumListType {
    type Err = SmapiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| SmapiError::UnknownAlbumListType(s.to_string()))
    }
}

impl fmt::Display for AlbumListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

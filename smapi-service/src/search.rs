//! Search categories offered under the `search` container

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SmapiError;

// Must match the ids in the service's presentation map.
pub const ID_SEARCH_ARTISTS: &str = "search-artists";
pub const ID_SEARCH_ALBUMS: &str = "search-albums";
pub const ID_SEARCH_SONGS: &str = "search-songs";

/// Which index a search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchCategory {
    Artist,
    Album,
    Song,
}

impl SearchCategory {
    pub const ALL: [SearchCategory; 3] =
        [SearchCategory::Artist, SearchCategory::Album, SearchCategory::Song];

    pub fn id(&self) -> &'static str {
        match self {
            SearchCategory::Artist => ID_SEARCH_ARTISTS,
            SearchCategory::Album => ID_SEARCH_ALBUMS,
            SearchCategory::Song => ID_SEARCH_SONGS,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SearchCategory::Artist => "Artists",
            SearchCategory::Album => "Albums",
            SearchCategory::Song => "Songs",
        }
    }
}

impl FromStr for SearchCategory {
    type Err = SmapiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ID_SEARCH_ARTISTS => Ok(SearchCategory::Artist),
            ID_SEARCH_ALBUMS => Ok(SearchCategory::Album),
            ID_SEARCH_SONGS => Ok(SearchCategory::Song),
            other => Err(SmapiError::InvalidSearchCategory(other.to_string())),
        }
    }
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

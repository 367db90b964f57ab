//! In-memory collaborators shared by the integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use smapi_service::{
    AlbumListType, CatalogProvider, Credentials, HeaderEntry, MediaEntity, PageResult, Result,
    SearchCategory, SmapiError, UserDirectory, UserRecord, Window,
};

/// Catalog that records every call it receives
#[derive(Debug, Default)]
pub struct RecordingCatalog {
    calls: RefCell<Vec<String>>,
    pub album_list_total: usize,
}

impl RecordingCatalog {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            album_list_total: 250,
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }

    fn listing(&self, call: impl Into<String>, len: u32) -> Result<Vec<MediaEntity>> {
        let call = call.into();
        let items = (0..len)
            .map(|i| MediaEntity::container("", i, format!("{} #{}", call, i)))
            .collect();
        self.record(call);
        Ok(items)
    }
}

impl CatalogProvider for RecordingCatalog {
    fn root(&self) -> Result<Vec<MediaEntity>> {
        self.listing("root", 4)
    }

    fn library(&self) -> Result<Vec<MediaEntity>> {
        self.listing("library", 2)
    }

    fn playlists(&self, username: &str) -> Result<Vec<MediaEntity>> {
        self.listing(format!("playlists({})", username), 3)
    }

    fn album_lists(&self) -> Result<Vec<MediaEntity>> {
        self.listing("album_lists", AlbumListType::ALL.len() as u32)
    }

    fn starred(&self) -> Result<Vec<MediaEntity>> {
        self.listing("starred", 3)
    }

    fn starred_artists(&self, username: &str) -> Result<Vec<MediaEntity>> {
        self.listing(format!("starred_artists({})", username), 1)
    }

    fn starred_albums(&self, username: &str) -> Result<Vec<MediaEntity>> {
        self.listing(format!("starred_albums({})", username), 1)
    }

    fn starred_songs(&self, username: &str) -> Result<Vec<MediaEntity>> {
        self.listing(format!("starred_songs({})", username), 1)
    }

    fn search_categories(&self) -> Result<Vec<MediaEntity>> {
        self.record("search_categories");
        Ok(SearchCategory::ALL
            .into_iter()
            .map(|c| MediaEntity::container("", c.id(), c.title()))
            .collect())
    }

    fn playlist(&self, playlist_id: u32) -> Result<Vec<MediaEntity>> {
        self.listing(format!("playlist({})", playlist_id), 12)
    }

    fn album_list(
        &self,
        list_type: AlbumListType,
        window: Window,
        username: &str,
    ) -> Result<PageResult> {
        self.record(format!("album_list({}, {})", list_type, username));
        let end = (window.index + window.count).min(self.album_list_total);
        let start = window.index.min(end);
        Ok(PageResult {
            items: (start..end)
                .map(|i| MediaEntity::container("", i, format!("Album {}", i)))
                .collect(),
            offset: window.index,
            total: self.album_list_total,
        })
    }

    fn music_folder(&self, folder_id: u32) -> Result<Vec<MediaEntity>> {
        self.listing(format!("music_folder({})", folder_id), 6)
    }

    fn directory(&self, directory_id: u32) -> Result<Vec<MediaEntity>> {
        if directory_id == 404 {
            self.record("directory(404)");
            return Err(SmapiError::Catalog("no such directory".to_string()));
        }
        self.listing(format!("directory({})", directory_id), 5)
    }

    fn search(&self, term: &str, category: SearchCategory, window: Window) -> Result<PageResult> {
        self.record(format!("search({}, {})", category, term));
        Ok(PageResult {
            items: vec![MediaEntity::leaf("", 1, term)],
            offset: window.index,
            total: 1,
        })
    }

    fn song(&self, song_id: u32) -> Result<Option<MediaEntity>> {
        self.record(format!("song({})", song_id));
        Ok((song_id == 1017).then(|| MediaEntity::leaf("", song_id, "Teardrop")))
    }

    fn media_path(&self, song_id: u32) -> Result<Option<String>> {
        self.record(format!("media_path({})", song_id));
        Ok((song_id == 1017).then(|| format!("stream?id={}", song_id)))
    }

    fn star(&self, media_id: u32, username: &str) -> Result<()> {
        self.record(format!("star({}, {})", media_id, username));
        Ok(())
    }

    fn unstar(&self, media_id: u32, username: &str) -> Result<()> {
        self.record(format!("unstar({}, {})", media_id, username));
        Ok(())
    }
}

/// User directory backed by a map of username to password
#[derive(Debug, Default)]
pub struct MapDirectory(pub HashMap<String, String>);

impl MapDirectory {
    pub fn with_user(username: &str, password: &str) -> Self {
        let mut users = HashMap::new();
        users.insert(username.to_string(), password.to_string());
        Self(users)
    }
}

impl UserDirectory for MapDirectory {
    fn find_user(&self, username: &str) -> Result<Option<UserRecord>> {
        Ok(self.0.get(username).map(|password| UserRecord {
            username: username.to_string(),
            password: password.clone(),
        }))
    }
}

/// Header list carrying a session id
pub fn session_headers(username: &str) -> Vec<HeaderEntry> {
    vec![HeaderEntry::Credentials(Credentials {
        session_id: Some(username.to_string()),
        ..Default::default()
    })]
}

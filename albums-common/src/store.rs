//! In-memory album record store
//!
//! Ordered, append-only catalog shared by all request handlers.
//!
//! Lookups are exact, byte-for-byte matches. Id and title lookups return the
//! first record in insertion order; artist lookups return every match in
//! insertion order. Small hash indexes maintained on append answer these
//! without scanning, with the same results a linear scan would give.
//!
//! Uses RwLock for concurrent read access with rare writes. Guards are held
//! only while touching the catalog; results are cloned out before returning.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::model::{seed_albums, Album};
use crate::{Error, Result};

/// Albums plus their lookup indexes
#[derive(Debug, Default)]
struct Catalog {
    albums: Vec<Album>,
    /// id -> position of first album with that id
    by_id: HashMap<String, usize>,
    /// title -> position of first album with that title
    by_title: HashMap<String, usize>,
    /// artist -> positions of all albums by that artist, ascending
    by_artist: HashMap<String, Vec<usize>>,
}

impl Catalog {
    fn push(&mut self, album: Album) {
        let pos = self.albums.len();

        // First match wins, so later duplicates never replace an entry
        self.by_id.entry(album.id.clone()).or_insert(pos);
        self.by_title.entry(album.title.clone()).or_insert(pos);
        self.by_artist
            .entry(album.artist.clone())
            .or_default()
            .push(pos);

        self.albums.push(album);
    }
}

/// Shared handle to the album catalog
///
/// Cloning is cheap; all clones see the same records.
#[derive(Debug, Clone, Default)]
pub struct AlbumStore {
    inner: Arc<RwLock<Catalog>>,
}

impl AlbumStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `albums` in iteration order
    pub fn with_albums(albums: impl IntoIterator<Item = Album>) -> Self {
        let mut catalog = Catalog::default();
        for album in albums {
            catalog.push(album);
        }
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Create a store holding the startup seed records
    pub fn seeded() -> Self {
        Self::with_albums(seed_albums())
    }

    /// All albums in insertion order
    pub async fn list(&self) -> Vec<Album> {
        self.inner.read().await.albums.clone()
    }

    /// Append an album to the end of the catalog
    ///
    /// Never fails. Duplicate ids are accepted.
    pub async fn append(&self, album: Album) -> Album {
        let mut catalog = self.inner.write().await;
        catalog.push(album.clone());
        album
    }

    /// First album whose id equals `id`
    pub async fn find_by_id(&self, id: &str) -> Result<Album> {
        let catalog = self.inner.read().await;
        catalog
            .by_id
            .get(id)
            .map(|&pos| catalog.albums[pos].clone())
            .ok_or(Error::AlbumNotFound)
    }

    /// First album whose title equals `title`
    pub async fn find_by_title(&self, title: &str) -> Result<Album> {
        let catalog = self.inner.read().await;
        catalog
            .by_title
            .get(title)
            .map(|&pos| catalog.albums[pos].clone())
            .ok_or(Error::AlbumNotFound)
    }

    /// Every album whose artist equals `artist`, in insertion order
    ///
    /// Returns `Error::NoAlbumsForArtist` when nothing matches.
    pub async fn find_all_by_artist(&self, artist: &str) -> Result<Vec<Album>> {
        let catalog = self.inner.read().await;
        match catalog.by_artist.get(artist) {
            Some(positions) if !positions.is_empty() => Ok(positions
                .iter()
                .map(|&pos| catalog.albums[pos].clone())
                .collect()),
            _ => Err(Error::NoAlbumsForArtist(artist.to_string())),
        }
    }

    /// Number of stored albums
    pub async fn len(&self) -> usize {
        self.inner.read().await.albums.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

//! Common error types for the album catalog

use thiserror::Error;

/// Common result type for album catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the album catalog crates
///
/// The Display text of the not-found variants is what clients see in the
/// `message` field of a 404 response.
#[derive(Error, Debug)]
pub enum Error {
    /// No album matched an id or title lookup
    #[error("Album not found")]
    AlbumNotFound,

    /// No album matched an artist lookup
    #[error("No albums found for artist {0}")]
    NoAlbumsForArtist(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file could not be parsed as TOML
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// True for the lookup-miss variants
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::AlbumNotFound | Error::NoAlbumsForArtist(_))
    }
}

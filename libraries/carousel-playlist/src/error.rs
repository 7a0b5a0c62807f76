//! Error types for playlist management

use carousel_ring::RingError;
use thiserror::Error;

/// Playlist errors
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// Underlying ring operation failed
    #[error(transparent)]
    Ring(#[from] RingError),

    /// Playlist has no tracks
    #[error("Playlist is empty")]
    EmptyPlaylist,

    /// Reorder request is not a permutation of the playlist
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// No playlist with this name
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(String),

    /// A playlist with this name already exists
    #[error("Playlist already exists: {0}")]
    DuplicateName(String),

    /// Name is empty or whitespace
    #[error("Invalid playlist name: {0:?}")]
    InvalidName(String),

    /// Library holds the configured maximum number of playlists
    #[error("Library is full ({0} playlists)")]
    LibraryFull(usize),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for PlaylistError {
    fn from(err: config::ConfigError) -> Self {
        PlaylistError::Config(err.to_string())
    }
}

/// Result type for playlist operations
pub type Result<T> = std::result::Result<T, PlaylistError>;

//! Carousel - Playlist
//!
//! Named, wrapping playlists built on [`carousel_ring::Ring`], and a library
//! that keeps them by name.
//!
//! This crate provides:
//! - Tracks with title, artist, duration and optional audio file
//! - Playlists with play / next / previous that wrap at both ends
//! - Reordering and moving tracks while keeping the current track
//! - A playlist library with a single active playlist
//! - Configuration from `carousel.toml` and `CAROUSEL_*` environment variables
//!
//! # Example: Playing a playlist
//!
//! ```rust
//! use carousel_playlist::{Playlist, Track};
//!
//! let mut playlist = Playlist::new("Road Trip");
//! playlist.append(Track::new("Song A", "Artist"));
//! playlist.append(Track::new("Song B", "Artist"));
//!
//! assert_eq!(playlist.play_all().unwrap().title, "Song A");
//! assert_eq!(playlist.next_track().unwrap().title, "Song B");
//!
//! // Wraps back to the start
//! assert_eq!(playlist.next_track().unwrap().title, "Song A");
//! ```
//!
//! # Example: Library
//!
//! ```rust
//! use carousel_playlist::{LibraryConfig, PlaylistLibrary, Track};
//!
//! let mut library = PlaylistLibrary::new(LibraryConfig::default()).unwrap();
//! library.create("Focus").unwrap();
//! library.create("Workout").unwrap();
//!
//! library.select("Focus").unwrap();
//! library
//!     .active_mut()
//!     .unwrap()
//!     .append(Track::new("Drift", "Ambient Artist"));
//!
//! assert_eq!(library.names(), ["Focus", "Workout"]);
//! assert_eq!(library.get("Focus").unwrap().len(), 1);
//! ```

mod config;
mod error;
mod library;
mod playlist;
mod types;

// Public exports
pub use carousel_ring::RingError;
pub use config::{LibraryConfig, DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use error::{PlaylistError, Result};
pub use library::PlaylistLibrary;
pub use playlist::Playlist;
pub use types::{format_duration, PlaylistStats, Track};

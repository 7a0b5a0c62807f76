//! Playlist library
//!
//! Owns every playlist by name and remembers which one is active, the way a
//! player front end keeps one playlist open at a time.

use crate::config::LibraryConfig;
use crate::error::{PlaylistError, Result};
use crate::playlist::Playlist;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Name-keyed collection of playlists with one active selection
#[derive(Debug, Clone)]
pub struct PlaylistLibrary {
    config: LibraryConfig,

    /// Playlists by name
    playlists: BTreeMap<String, Playlist>,

    /// Name of the active playlist
    active: Option<String>,
}

impl PlaylistLibrary {
    /// Create library from configuration
    ///
    /// Creates the configured default playlist, if any.
    pub fn new(config: LibraryConfig) -> Result<Self> {
        config.validate()?;

        let mut library = Self {
            config,
            playlists: BTreeMap::new(),
            active: None,
        };

        if let Some(name) = library.config.default_playlist.clone() {
            let name = library.create(&name)?.name().to_string();
            library.active = Some(name);
        }

        Ok(library)
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// Create a new, empty playlist
    ///
    /// Names are trimmed; every lookup trims its argument the same way.
    pub fn create(&mut self, name: &str) -> Result<&mut Playlist> {
        let name = Self::check_name(name)?;
        if self.playlists.contains_key(&name) {
            return Err(PlaylistError::DuplicateName(name));
        }
        if let Some(max) = self.config.max_playlists {
            if self.playlists.len() >= max {
                warn!(max, "playlist limit reached");
                return Err(PlaylistError::LibraryFull(max));
            }
        }

        debug!(playlist = %name, "created playlist");
        if self.config.select_on_create {
            self.active = Some(name.clone());
        }
        Ok(self
            .playlists
            .entry(name.clone())
            .or_insert_with(|| Playlist::new(name)))
    }

    /// Delete a playlist, returning it
    ///
    /// Deleting the active playlist leaves no playlist active.
    pub fn delete(&mut self, name: &str) -> Result<Playlist> {
        let name = name.trim();
        let playlist = self
            .playlists
            .remove(name)
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;

        if self.active.as_deref() == Some(name) {
            self.active = None;
        }
        debug!(playlist = %name, "deleted playlist");
        Ok(playlist)
    }

    /// Rename a playlist, keeping it active if it was
    pub fn rename(&mut self, from: &str, to: &str) -> Result<()> {
        let from = from.trim();
        let to = Self::check_name(to)?;
        if !self.playlists.contains_key(from) {
            return Err(PlaylistError::PlaylistNotFound(from.to_string()));
        }
        if from == to {
            return Ok(());
        }
        if self.playlists.contains_key(&to) {
            return Err(PlaylistError::DuplicateName(to));
        }

        if let Some(mut playlist) = self.playlists.remove(from) {
            playlist.set_name(to.clone());
            self.playlists.insert(to.clone(), playlist);
        }
        if self.active.as_deref() == Some(from) {
            self.active = Some(to.clone());
        }
        debug!(from, to = %to, "renamed playlist");
        Ok(())
    }

    /// Make `name` the active playlist
    ///
    /// An unknown name leaves no playlist active.
    pub fn select(&mut self, name: &str) -> Result<&mut Playlist> {
        let name = name.trim();
        if !self.playlists.contains_key(name) {
            warn!(playlist = %name, "selected unknown playlist");
            self.active = None;
            return Err(PlaylistError::PlaylistNotFound(name.to_string()));
        }

        self.active = Some(name.to_string());
        self.playlists
            .get_mut(name)
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))
    }

    /// Playlist by name, ignoring surrounding whitespace
    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(name.trim())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        self.playlists.get_mut(name.trim())
    }

    /// Active playlist
    pub fn active(&self) -> Option<&Playlist> {
        self.active.as_deref().and_then(|name| self.playlists.get(name))
    }

    pub fn active_mut(&mut self) -> Option<&mut Playlist> {
        let name = self.active.as_deref()?;
        self.playlists.get_mut(name)
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Playlist names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.playlists.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    fn check_name(name: &str) -> Result<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(PlaylistError::InvalidName(name.to_string()));
        }
        Ok(trimmed.to_string())
    }
}

impl Default for PlaylistLibrary {
    fn default() -> Self {
        Self {
            config: LibraryConfig::default(),
            playlists: BTreeMap::new(),
            active: None,
        }
    }
}

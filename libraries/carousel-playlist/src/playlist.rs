//! Named playlist
//!
//! A playlist is a ring of tracks with a name. The ring cursor is the
//! "now playing" track: `next_track` and `previous_track` wrap around the
//! ends, and deleting the playing track hands playback to the one after it.

use crate::error::{PlaylistError, Result};
use crate::types::{PlaylistStats, Track};
use carousel_ring::{Iter, Ring, RingError};
use std::time::Duration;
use tracing::debug;

/// Ordered, wrapping collection of tracks
#[derive(Debug, Clone)]
pub struct Playlist {
    name: String,
    tracks: Ring<Track>,
}

impl Playlist {
    /// Create empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: Ring::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Add track to end of playlist
    pub fn append(&mut self, track: Track) {
        self.tracks.append(track);
    }

    /// Remove the first track equal to `track`
    ///
    /// If it was playing, the following track becomes current.
    pub fn remove(&mut self, track: &Track) -> Result<Track> {
        let removed = self.tracks.remove(track)?;
        debug!(playlist = %self.name, track = %removed, "removed track");
        Ok(removed)
    }

    /// Remove track by index
    pub fn remove_at(&mut self, index: usize) -> Result<Track> {
        let removed = self.tracks.remove_at(index)?;
        debug!(playlist = %self.name, index, track = %removed, "removed track");
        Ok(removed)
    }

    /// Get track at index
    pub fn get(&self, index: usize) -> Result<&Track> {
        Ok(self.tracks.get(index)?)
    }

    pub fn contains(&self, track: &Track) -> bool {
        self.tracks.contains(track)
    }

    pub fn index_of(&self, track: &Track) -> Option<usize> {
        self.tracks.index_of(track)
    }

    /// Tracks in playlist order
    pub fn iter(&self) -> Iter<'_, Track> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Underlying ring, read-only
    pub fn tracks(&self) -> &Ring<Track> {
        &self.tracks
    }

    /// Make `track` the current track
    ///
    /// Returns `false` (and keeps the current track) if it is not in the
    /// playlist.
    pub fn select(&mut self, track: &Track) -> bool {
        let found = self.tracks.set_cursor_to_item(track);
        if !found {
            debug!(
                playlist = %self.name,
                track = %track,
                "track not in playlist, selection unchanged"
            );
        }
        found
    }

    /// Start from the first track
    pub fn play_all(&mut self) -> Result<&Track> {
        self.play_at(0)
    }

    /// Start from the track at `index`
    pub fn play_at(&mut self, index: usize) -> Result<&Track> {
        if self.tracks.is_empty() {
            return Err(PlaylistError::EmptyPlaylist);
        }
        self.tracks.set_cursor_to_index(index)?;
        self.tracks.current().ok_or(PlaylistError::EmptyPlaylist)
    }

    /// Step to the following track, wrapping to the first
    ///
    /// `None` if nothing is playing.
    pub fn next_track(&mut self) -> Option<&Track> {
        self.tracks.advance()
    }

    /// Step to the preceding track, wrapping to the last
    pub fn previous_track(&mut self) -> Option<&Track> {
        self.tracks.retreat()
    }

    /// Track currently playing
    pub fn current(&self) -> Option<&Track> {
        self.tracks.current()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.tracks.cursor_index()
    }

    /// Stop tracking a current track
    pub fn stop(&mut self) {
        self.tracks.clear_cursor();
    }

    /// Remove every track
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Sum of known track durations
    pub fn total_duration(&self) -> Duration {
        self.tracks.iter().map(|track| track.duration).sum()
    }

    pub fn stats(&self) -> PlaylistStats {
        PlaylistStats {
            track_count: self.len(),
            total_duration: self.total_duration(),
        }
    }

    /// Rearrange tracks so that position `i` holds the track previously at
    /// `order[i]`
    ///
    /// `order` must be a permutation of `0..len`. The current track stays
    /// current.
    pub fn reorder(&mut self, order: &[usize]) -> Result<()> {
        let len = self.tracks.len();
        if order.len() != len {
            return Err(PlaylistError::InvalidOrder(format!(
                "expected {} indices, got {}",
                len,
                order.len()
            )));
        }

        let mut used = vec![false; len];
        for &index in order {
            match used.get_mut(index) {
                None => {
                    return Err(PlaylistError::InvalidOrder(format!(
                        "index {index} out of range"
                    )))
                }
                Some(true) => {
                    return Err(PlaylistError::InvalidOrder(format!(
                        "index {index} repeated"
                    )))
                }
                Some(seen) => *seen = true,
            }
        }

        let current = self.tracks.cursor_index();
        let mut slots: Vec<Option<Track>> = std::mem::take(&mut self.tracks)
            .into_iter()
            .map(Some)
            .collect();

        let mut tracks = Ring::with_capacity(len);
        for &index in order {
            if let Some(track) = slots[index].take() {
                tracks.append(track);
            }
        }

        self.tracks = tracks;

        if let Some(current) = current {
            if let Some(new_index) = order.iter().position(|&index| index == current) {
                self.tracks.set_cursor_to_index(new_index)?;
            }
        }

        debug!(playlist = %self.name, len, "reordered playlist");
        Ok(())
    }

    /// Move one track from `from` to `to`, shifting the ones in between
    pub fn move_track(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.tracks.len();
        for index in [from, to] {
            if index >= len {
                return Err(RingError::IndexOutOfRange { index, len }.into());
            }
        }
        if from == to {
            return Ok(());
        }

        let mut order: Vec<usize> = (0..len).collect();
        let moved = order.remove(from);
        order.insert(to, moved);
        self.reorder(&order)
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Track;
    type IntoIter = Iter<'a, Track>;

    fn into_iter(self) -> Iter<'a, Track> {
        self.iter()
    }
}

impl Extend<Track> for Playlist {
    fn extend<I: IntoIterator<Item = Track>>(&mut self, iter: I) {
        self.tracks.extend(iter);
    }
}

//! Core types for playlists

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A playable item in a playlist
///
/// Two tracks are the same track when title and artist match; duration and
/// file path are not compared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Track duration (zero when unknown)
    #[serde(default)]
    pub duration: Duration,

    /// Audio file backing this track
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Track {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration: Duration::ZERO,
            path: None,
        }
    }

    /// Track for an audio file, titled after the file stem
    pub fn from_path(path: impl Into<PathBuf>, artist: impl Into<String>) -> Self {
        let path = path.into();
        let title = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            title,
            artist: artist.into(),
            duration: Duration::ZERO,
            path: Some(path),
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Full line for track lists: `Artist - Title [m:ss] (file.mp3)`
    pub fn display_info(&self) -> String {
        let duration = if self.duration.is_zero() {
            "--:--".to_string()
        } else {
            format_duration(self.duration)
        };

        let file_name = self
            .path
            .as_deref()
            .map(file_name)
            .unwrap_or_else(|| "no file".to_string());

        format!("{} - {} [{}] ({})", self.artist, self.title, duration, file_name)
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.artist == other.artist
    }
}

impl Eq for Track {}

impl Hash for Track {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.artist.hash(state);
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.artist, self.title)?;
        if !self.duration.is_zero() {
            write!(f, " ({}s)", self.duration.as_secs())?;
        }
        Ok(())
    }
}

/// Track count and total running time of a playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistStats {
    pub track_count: usize,
    pub total_duration: Duration,
}

impl fmt::Display for PlaylistStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tracks, {}",
            self.track_count,
            format_duration(self.total_duration)
        )
    }
}

/// `m:ss`, minutes unbounded
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Last component of a path, splitting on both `/` and `\`
fn file_name(path: &Path) -> String {
    let full = path.to_string_lossy();
    full.rsplit(['/', '\\']).next().unwrap_or_default().to_string()
}

//! Playlist library configuration

use crate::error::{PlaylistError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix, e.g. `CAROUSEL_MAX_PLAYLISTS=20`
pub const ENV_PREFIX: &str = "CAROUSEL";

/// Default configuration file, read from the working directory if present
pub const DEFAULT_CONFIG_FILE: &str = "carousel.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LibraryConfig {
    /// Playlist created when the library starts
    #[serde(default)]
    pub default_playlist: Option<String>,

    /// Upper bound on the number of playlists (unbounded when unset)
    #[serde(default)]
    pub max_playlists: Option<usize>,

    /// Whether a newly created playlist becomes the active one
    #[serde(default = "default_select_on_create")]
    pub select_on_create: bool,
}

impl LibraryConfig {
    /// Load configuration from `carousel.toml` and the environment
    pub fn load() -> Result<Self> {
        let file = find_config_file(Path::new("."));
        Self::load_from(file.as_deref())
    }

    /// Load configuration from an explicit file (if any) and the environment
    ///
    /// Environment variables prefixed with `CAROUSEL_` override file values.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        Self::build(path, config::Environment::with_prefix(ENV_PREFIX))
    }

    fn build(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            settings = settings.add_source(config::File::from(path).required(true));
        }

        settings = settings.add_source(env.try_parsing(true));

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_playlists == Some(0) {
            return Err(PlaylistError::Config(
                "max_playlists must be at least 1".to_string(),
            ));
        }

        if let Some(name) = &self.default_playlist {
            if name.trim().is_empty() {
                return Err(PlaylistError::Config(
                    "default_playlist must not be blank".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// `carousel.toml` inside `dir`, if it exists
fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(DEFAULT_CONFIG_FILE);
    path.is_file().then_some(path)
}

// Default values
fn default_select_on_create() -> bool {
    true
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            default_playlist: None,
            max_playlists: None,
            select_on_create: default_select_on_create(),
        }
    }
}

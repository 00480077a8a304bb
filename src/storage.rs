//! Persistence for the dashboard repository list.
//!
//! The list is kept as JSON under a single key, read once at startup and
//! fully rewritten on every mutation.

use crate::github::responses::Repository;
use anyhow::{Context, Error};
use directories_next::ProjectDirs;
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Storage key carried over from the browser build of this app. Doubles as
/// the file name inside the data directory.
pub const STORAGE_KEY: &str = "@GithubExplore:repositories";

pub trait Storage {
    fn load(&self) -> Result<Vec<Repository>, Error>;

    fn save(&self, repositories: &[Repository]) -> Result<(), Error>;
}

/// Stores the repository list as a JSON file under [`STORAGE_KEY`].
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let path = data_dir.as_ref().join(STORAGE_KEY);
        Self { path }
    }
}

impl Storage for JsonFileStorage {
    /// Missing or undecodable content yields the empty list.
    fn load(&self) -> Result<Vec<Repository>, Error> {
        let text = match fs::read_to_string(&self.path) {
            Ok(x) => x,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored repositories");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };
        let repositories = match serde_json::from_str(&text) {
            Ok(x) => x,
            Err(err) => {
                debug!(?err, "stored repositories are not valid json, starting empty");
                Vec::new()
            }
        };
        Ok(repositories)
    }

    fn save(&self, repositories: &[Repository]) -> Result<(), Error> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let text = serde_json::to_string(repositories)?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write `{}`.", self.path.display()))?;
        Ok(())
    }
}

/// Per-user data directory for the production storage file.
pub fn default_data_dir() -> Result<PathBuf, Error> {
    let dirs = ProjectDirs::from("", "", "ghx")
        .ok_or_else(|| Error::msg("Failed to locate a home directory."))?;
    Ok(dirs.data_dir().to_owned())
}

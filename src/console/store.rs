use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::chess::snapshot::Snapshot;

/// Keeps the [`Snapshot`] of the current game in a JSON file.
#[derive(Clone, Debug)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    #[allow(missing_docs)]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored snapshot. A missing file means there is nothing to
    /// resume.
    ///
    /// # Errors
    ///
    /// Fails if the file can not be read or does not contain a snapshot.
    pub fn load(&self) -> anyhow::Result<Option<Snapshot>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()))
            },
        };
        let snapshot = serde_json::from_str(&contents)
            .with_context(|| format!("parsing snapshot from {}", self.path.display()))?;
        Ok(Some(snapshot))
    }

    /// Overwrites the stored snapshot.
    ///
    /// # Errors
    ///
    /// Fails if the file can not be written.
    pub fn save(&self, snapshot: &Snapshot) -> anyhow::Result<()> {
        let contents = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("writing snapshot to {}", self.path.display()))?;
        debug!(path = %self.path.display(), game = %snapshot.game_id, "snapshot saved");
        Ok(())
    }

    /// Forgets the stored snapshot, if there is one.
    ///
    /// # Errors
    ///
    /// Fails if an existing file can not be removed.
    pub fn delete(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => {
                Err(e).with_context(|| format!("removing {}", self.path.display()))
            },
            _ => Ok(()),
        }
    }
}

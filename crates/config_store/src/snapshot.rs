//! Immutable configuration snapshots with scoped restoration.
//!
//! Lifecycle runs mutate ambient settings files they do not own. A
//! [`ConfigSnapshot`] captures the exact state of such a file as an
//! immutable value; restoring the snapshot brings the file back to that
//! state, including removing a file that did not exist at capture time.
//! [`SnapshotGuard`] ties restoration to scope exit so the round-trip holds
//! on every exit path, including unwinding.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::Error;

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;

/// An immutable snapshot of a configuration file's state.
///
/// Captures the raw file contents rather than parsed settings, so a restore
/// reproduces the file byte for byte, comments and formatting included. A
/// file that was absent at capture time is recorded as absent and removed
/// again on restore.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSnapshot {
    path: PathBuf,
    contents: Option<String>,
}

impl ConfigSnapshot {
    /// Captures the current state of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file exists but cannot be read.
    pub fn capture(path: &Path) -> Result<Self, Error> {
        let contents = if path.exists() {
            Some(fs::read_to_string(path).map_err(|e| Error::Io {
                path: path.to_path_buf(),
                source: e,
            })?)
        } else {
            None
        };

        debug!(
            path = %path.display(),
            existed = contents.is_some(),
            "Captured configuration snapshot"
        );

        Ok(Self {
            path: path.to_path_buf(),
            contents,
        })
    }

    /// Returns the captured file contents, or `None` if the file was absent
    /// at capture time.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Returns the path the snapshot was captured from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Restores the captured state to the file the snapshot was taken from.
    ///
    /// Writes the captured contents back, or removes the file if the
    /// snapshot recorded its absence. After a successful restore the file
    /// state equals the state at capture time.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be written or removed.
    pub fn restore(&self) -> Result<(), Error> {
        match &self.contents {
            Some(contents) => {
                if let Some(parent) = self.path.parent() {
                    fs::create_dir_all(parent).map_err(|e| Error::Io {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }
                fs::write(&self.path, contents).map_err(|e| Error::Io {
                    path: self.path.clone(),
                    source: e,
                })?;
            }
            None => {
                if self.path.exists() {
                    fs::remove_file(&self.path).map_err(|e| Error::Io {
                        path: self.path.clone(),
                        source: e,
                    })?;
                }
            }
        }

        info!(path = %self.path.display(), "Restored configuration snapshot");
        Ok(())
    }
}

/// Scoped guard that restores a configuration snapshot when dropped.
///
/// Construction captures the file state; drop restores it. Restoration on
/// drop is best-effort: failures are logged as warnings since panicking in
/// `Drop` would abort an already-unwinding thread. Callers that need the
/// failure surfaced should call [`SnapshotGuard::restore_now`] instead of
/// relying on drop.
#[derive(Debug)]
pub struct SnapshotGuard {
    snapshot: Option<ConfigSnapshot>,
}

impl SnapshotGuard {
    /// Captures the state of the file at `path` and arms the guard.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file exists but cannot be read.
    pub fn capture(path: &Path) -> Result<Self, Error> {
        Ok(Self {
            snapshot: Some(ConfigSnapshot::capture(path)?),
        })
    }

    /// Returns the snapshot held by the guard.
    pub fn snapshot(&self) -> &ConfigSnapshot {
        self.snapshot
            .as_ref()
            .expect("Guard holds a snapshot until disarmed or dropped")
    }

    /// Disarms the guard and hands out the snapshot without restoring.
    ///
    /// Use this when the captured state should be kept as the new ambient
    /// state.
    pub fn disarm(mut self) -> ConfigSnapshot {
        self.snapshot
            .take()
            .expect("Guard holds a snapshot until disarmed or dropped")
    }

    /// Restores the snapshot immediately and disarms the guard.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the restore fails; the guard is disarmed
    /// either way.
    pub fn restore_now(mut self) -> Result<(), Error> {
        let snapshot = self
            .snapshot
            .take()
            .expect("Guard holds a snapshot until disarmed or dropped");
        snapshot.restore()
    }
}

impl Drop for SnapshotGuard {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            if let Err(e) = snapshot.restore() {
                warn!(
                    path = %snapshot.path().display(),
                    error = %e,
                    "Failed to restore configuration snapshot on scope exit"
                );
            }
        }
    }
}

//! Log directory layout
//!
//! A Viper log directory holds one file per session and nothing else:
//!
//! ```text
//! logs/
//! ├── J0.log
//! ├── J1.log
//! └── ...
//! ```
//!
//! The directory itself is owned by the caller. It is never created
//! here, and only its direct children are ever removed.

use crate::codec::session_file_name;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use viper_core::{Error, Result};

/// Paths within a Viper log directory
#[derive(Debug, Clone)]
pub struct LogPaths {
    root: PathBuf,
}

impl LogPaths {
    /// Create paths from the log directory
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        LogPaths {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The log directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the log file for `session_id`
    pub fn session_file(&self, session_id: u64) -> PathBuf {
        self.root.join(session_file_name(session_id))
    }

    /// Fail unless the root exists and is a directory
    pub fn validate(&self) -> Result<()> {
        if !self.root.is_dir() {
            return Err(Error::not_a_directory(&self.root));
        }
        Ok(())
    }
}

/// Delete every non-directory entry directly inside `dir`
///
/// Subdirectories are left in place and not descended into. Returns the
/// number of removed entries. Stops at the first failure; entries removed
/// before it stay removed.
pub fn clear_directory(dir: &Path) -> Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            warn!(
                target: "viper::dump",
                path = %path.display(),
                "Skipping subdirectory while clearing"
            );
            continue;
        }
        fs::remove_file(&path)?;
        removed += 1;
    }
    debug!(target: "viper::dump", dir = %dir.display(), removed, "Cleared log directory");
    Ok(removed)
}

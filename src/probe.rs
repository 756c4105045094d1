//! Read-only access to collaborator files.
//!
//! Checks never touch the filesystem directly; they go through a [`Probe`] so
//! the same suite can run against a project directory or an in-memory fixture.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::assert::ensure;
use crate::errors::CheckError;

/// A view of the files under a project root. Paths are relative to the root.
pub trait Probe {
    fn exists(&self, rel: &str) -> bool;
    fn read_to_string(&self, rel: &str) -> Result<String, CheckError>;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Clone)]
pub struct FsProbe {
    root: PathBuf,
}

impl FsProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }
}

impl Probe for FsProbe {
    fn exists(&self, rel: &str) -> bool {
        let found = self.resolve(rel).exists();
        debug!(path = rel, found, "exists");
        found
    }

    fn read_to_string(&self, rel: &str) -> Result<String, CheckError> {
        let path = self.resolve(rel);
        debug!(path = %path.display(), "read");
        // Invalid UTF-8 is replaced rather than rejected; checks only look
        // for ASCII markers.
        let bytes = fs::read(&path).map_err(|e| CheckError::io(rel, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Probe over an in-memory file map.
#[derive(Debug, Clone, Default)]
pub struct MemoryProbe {
    files: im::HashMap<String, String>,
}

impl MemoryProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a probe with `rel` added, leaving `self` untouched.
    pub fn with_file(&self, rel: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            files: self.files.update(rel.into(), content.into()),
        }
    }

    pub fn without_file(&self, rel: &str) -> Self {
        Self {
            files: self.files.without(rel),
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryProbe {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            files: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Probe for MemoryProbe {
    fn exists(&self, rel: &str) -> bool {
        self.files.contains_key(rel)
    }

    fn read_to_string(&self, rel: &str) -> Result<String, CheckError> {
        self.files.get(rel).cloned().ok_or_else(|| {
            CheckError::io(
                rel,
                io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            )
        })
    }
}

// ============================================================================
// CHECK HELPERS
// ============================================================================

/// Fails with `"<rel> not found"` when `rel` does not exist.
pub fn require_file(probe: &dyn Probe, rel: &str) -> Result<(), CheckError> {
    ensure(probe.exists(rel), format!("{} not found", rel))
}

/// Checks each path in order and stops at the first missing one.
pub fn require_all(probe: &dyn Probe, rels: &[&str]) -> Result<(), CheckError> {
    rels.iter().try_for_each(|rel| require_file(probe, rel))
}

pub fn require_contains(content: &str, needle: &str, message: &str) -> Result<(), CheckError> {
    ensure(content.contains(needle), message)
}

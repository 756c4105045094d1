//! Run configuration.

use std::path::{Path, PathBuf};

use termcolor::ColorChoice;

use crate::errors::CheckError;

/// Where to look and how to print.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub root: PathBuf,
    pub color: ColorChoice,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            color: auto_color(),
        }
    }
}

impl HarnessConfig {
    /// Resolves the project root to an absolute directory.
    pub fn resolve_root(&self) -> Result<PathBuf, CheckError> {
        let root = self.root.canonicalize().map_err(|e| {
            CheckError::setup(
                format!("cannot resolve project root '{}': {}", self.root.display(), e),
                Some("pass --root <DIR> pointing at the website checkout".to_string()),
            )
        })?;
        ensure_dir(&root)?;
        Ok(root)
    }
}

/// `termcolor`'s `Auto` only consults the environment, so fall back to plain
/// output when stdout is not a terminal.
pub fn auto_color() -> ColorChoice {
    if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn ensure_dir(root: &Path) -> Result<(), CheckError> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(CheckError::setup(
            format!("project root '{}' is not a directory", root.display()),
            None,
        ))
    }
}

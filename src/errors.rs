//! Failure values for the harness.
//!
//! Every way a check can go wrong is a [`CheckError`]. Test actions return
//! `Result<(), CheckError>`, and the runner folds the error into a failure
//! record instead of letting it escape the test case.

use std::path::PathBuf;
use std::sync::Arc;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Message used when an assertion fails without one.
pub const DEFAULT_ASSERTION_MESSAGE: &str = "Assertion failed";

/// Coarse classification of a [`CheckError`], used by tests and the log layer
/// instead of matching on display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// An explicit condition stated by a check was false.
    Assertion,
    /// A collaborator file was missing, unreadable or malformed.
    Collaborator,
    /// A test action panicked.
    Panic,
    /// The harness itself could not start.
    Setup,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Assertion => "assertion",
            FailureKind::Collaborator => "collaborator",
            FailureKind::Panic => "panic",
            FailureKind::Setup => "setup",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Diagnostic, Debug)]
pub enum CheckError {
    /// Displays as the bare message so report lines read `Error: <message>`.
    #[error("{message}")]
    #[diagnostic(code(sitecheck::assertion))]
    Assertion { message: String },

    #[error("{}: {source}", .path.display())]
    #[diagnostic(code(sitecheck::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: invalid manifest: {source}", .path.display())]
    #[diagnostic(code(sitecheck::manifest), help("package.json must be a valid JSON object"))]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
        #[source_code]
        src: Arc<NamedSource<String>>,
        #[label("parse stopped here")]
        span: SourceSpan,
    },

    #[error("test action panicked: {message}")]
    #[diagnostic(code(sitecheck::panic))]
    Panicked { message: String },

    #[error("{message}")]
    #[diagnostic(code(sitecheck::setup))]
    Setup {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl CheckError {
    pub fn assertion(message: impl Into<String>) -> Self {
        CheckError::Assertion {
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CheckError::Io {
            path: path.into(),
            source,
        }
    }

    /// Builds a manifest error pointing at the line and column the JSON
    /// parser stopped on.
    pub fn manifest(path: impl Into<PathBuf>, content: &str, source: serde_json::Error) -> Self {
        let path = path.into();
        let offset = line_col_to_offset(content, source.line(), source.column());
        let src = Arc::new(NamedSource::new(
            path.display().to_string(),
            content.to_string(),
        ));
        CheckError::Manifest {
            path,
            source,
            src,
            span: SourceSpan::from(offset),
        }
    }

    pub fn setup(message: impl Into<String>, help: Option<String>) -> Self {
        CheckError::Setup {
            message: message.into(),
            help,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            CheckError::Assertion { .. } => FailureKind::Assertion,
            CheckError::Io { .. } | CheckError::Manifest { .. } => FailureKind::Collaborator,
            CheckError::Panicked { .. } => FailureKind::Panic,
            CheckError::Setup { .. } => FailureKind::Setup,
        }
    }
}

// serde_json reports 1-based lines and columns; line 0 means "no position".
fn line_col_to_offset(content: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(content.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assertion_displays_bare_message() {
        let err = CheckError::assertion("package.json not found");
        assert_eq!(err.to_string(), "package.json not found");
        assert_eq!(err.kind(), FailureKind::Assertion);
    }

    #[test]
    fn manifest_error_is_a_collaborator_failure() {
        let content = "{\n  \"name\": \n}";
        let source = serde_json::from_str::<serde_json::Value>(content).unwrap_err();
        let err = CheckError::manifest("package.json", content, source);
        assert_eq!(err.kind(), FailureKind::Collaborator);
        assert!(err.to_string().starts_with("package.json: invalid manifest"));
    }

    #[test]
    fn offset_is_clamped_to_content() {
        assert_eq!(line_col_to_offset("abc", 0, 0), 0);
        assert_eq!(line_col_to_offset("ab\ncd", 2, 2), 4);
        assert_eq!(line_col_to_offset("ab", 9, 9), 2);
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::{Kind, Path};
use std::fmt;
use thiserror::Error;

/// Line and column in the source document, both one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// One-based line
    pub line: usize,
    /// One-based column
    pub column: usize,
}

impl Location {
    /// Create a location.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} column {}", self.line, self.column)
    }
}

/// Errors that can occur while reading a document.
///
/// Descent never fails; only parsing and typed extraction produce errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input could not be turned into a mapping-rooted document
    #[error("failed to parse document: {message}")]
    Parse {
        /// Message reported by the parser
        message: String,
        /// Where the parser stopped, when known
        location: Option<Location>,
    },
    /// A typed extractor found a value of a different kind
    #[error("expected {expected} at `{path}`, found {found}")]
    TypeMismatch {
        /// Kind the extractor asked for
        expected: Kind,
        /// Kind actually present ([`Kind::Absent`] if descent missed)
        found: Kind,
        /// Path that was attempted from the document root
        path: Path,
    },
}

impl Error {
    /// Create a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>, location: Option<Location>) -> Self {
        Self::Parse {
            message: message.into(),
            location,
        }
    }

    /// Create a type mismatch error.
    #[must_use]
    pub const fn type_mismatch(expected: Kind, found: Kind, path: Path) -> Self {
        Self::TypeMismatch {
            expected,
            found,
            path,
        }
    }

    /// Whether this is a parse error.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Whether this is a type mismatch.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Kind that was expected, for type mismatches.
    #[must_use]
    pub const fn expected(&self) -> Option<Kind> {
        match self {
            Self::TypeMismatch { expected, .. } => Some(*expected),
            Self::Parse { .. } => None,
        }
    }

    /// Kind that was found, for type mismatches.
    #[must_use]
    pub const fn found(&self) -> Option<Kind> {
        match self {
            Self::TypeMismatch { found, .. } => Some(*found),
            Self::Parse { .. } => None,
        }
    }

    /// Attempted path, for type mismatches.
    #[must_use]
    pub const fn path(&self) -> Option<&Path> {
        match self {
            Self::TypeMismatch { path, .. } => Some(path),
            Self::Parse { .. } => None,
        }
    }
}

/// Result type alias for yamlnav operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::{Kind, Path};
use std::fmt;

/// Why a descent produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    /// The mapping has no such key
    MissingKey,
    /// A key lookup was attempted on something other than a mapping
    NotAMapping {
        /// What was found instead
        found: Kind,
    },
    /// The index was negative or not below the sequence length
    IndexOutOfRange {
        /// Attempted index
        index: isize,
        /// Length of the sequence
        len: usize,
    },
    /// An index lookup was attempted on something other than a sequence
    NotASequence {
        /// What was found instead
        found: Kind,
    },
}

impl fmt::Display for MissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey => f.write_str("key not found"),
            Self::NotAMapping { found } => write!(f, "expected mapping, found {found}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for sequence of length {len}")
            }
            Self::NotASequence { found } => write!(f, "expected sequence, found {found}"),
        }
    }
}

/// The first failed step of a descent chain.
///
/// Once a chain misses, every later step carries the same `Miss`, so this
/// always points at the step that actually failed rather than the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Miss {
    reason: MissReason,
    at: Path,
}

impl Miss {
    /// Record a miss for the step ending at `at`.
    #[must_use]
    pub const fn new(reason: MissReason, at: Path) -> Self {
        Self { reason, at }
    }

    /// Why the step failed.
    #[must_use]
    pub const fn reason(&self) -> MissReason {
        self.reason
    }

    /// Path up to and including the failing step.
    #[must_use]
    pub const fn at(&self) -> &Path {
        &self.at
    }

    /// Number of steps from the root to the failing step.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.at.depth()
    }
}

impl fmt::Display for Miss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at `{}`", self.reason, self.at)
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt;

/// The shape of the value a node wraps.
///
/// Every typed extractor compares the kind it expects with the kind it finds.
/// [`Kind::Absent`] is the sentinel produced by a descent that found nothing
/// and is never the same thing as a document's own `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Nothing was found at the attempted path
    Absent,
    /// An explicit `null` / `~` scalar
    Null,
    /// A boolean scalar
    Bool,
    /// An integer scalar
    Int,
    /// A floating-point scalar
    Float,
    /// A string scalar
    String,
    /// An ordered sequence
    Sequence,
    /// An ordered mapping
    Mapping,
}

impl Kind {
    /// Lowercase name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absent => "nothing",
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        }
    }

    /// Whether values of this kind can be descended into.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Sequence | Self::Mapping)
    }

    /// Whether this is a leaf value (including `null`).
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        !self.is_container() && !matches!(self, Self::Absent)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

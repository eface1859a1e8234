// SPDX-License-Identifier: MIT OR Apache-2.0
//! Chainable descent and typed extraction.

use crate::value::{key_label, kind_of, untag};
use serde_yaml::{Mapping, Value};
use tracing::trace;
use yamlnav_core::{Error, Kind, Miss, MissReason, Path, Result};

#[derive(Debug, Clone, PartialEq)]
enum Slot<'a> {
    Present(&'a Value),
    Absent(Miss),
}

/// A read-only view of one value in a parsed document.
///
/// A node either borrows a value from the tree or is *absent*: the result of
/// a descent that found nothing. Absent nodes are distinct from a document's
/// own `null` and answer every descent with another absent node, so chains
/// never need to be checked until the final extractor.
///
/// Nodes also remember the path that was attempted to reach them, which is
/// reported in [`Error::TypeMismatch`].
#[derive(Debug, Clone, PartialEq)]
pub struct Node<'a> {
    slot: Slot<'a>,
    path: Path,
}

impl<'a> Node<'a> {
    /// Wrap a value as a root node.
    #[must_use]
    pub fn new(value: &'a Value) -> Self {
        Self::present(value, Path::root())
    }

    const fn present(value: &'a Value, path: Path) -> Self {
        Self {
            slot: Slot::Present(value),
            path,
        }
    }

    fn missed(reason: MissReason, path: Path) -> Self {
        trace!(path = %path, reason = %reason, "descent missed");
        Self {
            slot: Slot::Absent(Miss::new(reason, path.clone())),
            path,
        }
    }

    /// Continue an already failed chain, keeping the original miss.
    const fn still_missing(miss: Miss, path: Path) -> Self {
        Self {
            slot: Slot::Absent(miss),
            path,
        }
    }

    /// Descend into a mapping by key.
    ///
    /// Returns an absent node if this node is not a mapping or has no such key.
    #[must_use]
    pub fn get(&self, key: &str) -> Self {
        let path = self.path.child_key(key);
        match &self.slot {
            Slot::Absent(miss) => Self::still_missing(miss.clone(), path),
            Slot::Present(_) => match self.map() {
                Ok(mapping) => match mapping.get(key) {
                    Some(value) => Self::present(value, path),
                    None => Self::missed(MissReason::MissingKey, path),
                },
                Err(_) => Self::missed(MissReason::NotAMapping { found: self.kind() }, path),
            },
        }
    }

    /// Descend through successive mapping keys.
    ///
    /// Equivalent to chaining [`get`](Self::get); an empty path returns this
    /// node unchanged.
    #[must_use]
    pub fn get_path<I>(&self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        keys.into_iter()
            .fold(self.clone(), |node, key| node.get(key.as_ref()))
    }

    /// Descend into a sequence by zero-based index.
    ///
    /// Negative indices are out of range, not offsets from the end.
    #[must_use]
    pub fn get_index(&self, index: isize) -> Self {
        let path = self.path.child_index(index);
        match &self.slot {
            Slot::Absent(miss) => Self::still_missing(miss.clone(), path),
            Slot::Present(_) => match self.array() {
                Ok(items) => match usize::try_from(index).ok().and_then(|i| items.get(i)) {
                    Some(value) => Self::present(value, path),
                    None => Self::missed(
                        MissReason::IndexOutOfRange {
                            index,
                            len: items.len(),
                        },
                        path,
                    ),
                },
                Err(_) => Self::missed(MissReason::NotASequence { found: self.kind() }, path),
            },
        }
    }

    /// Kind of the wrapped value, [`Kind::Absent`] for an absent node.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match &self.slot {
            Slot::Present(value) => kind_of(value),
            Slot::Absent(_) => Kind::Absent,
        }
    }

    /// Whether descent found a value (which may be `null`).
    #[must_use]
    pub const fn exists(&self) -> bool {
        matches!(self.slot, Slot::Present(_))
    }

    /// Whether the wrapped value is the document's own `null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.kind() == Kind::Null
    }

    /// The wrapped value with any explicit tags stripped.
    #[must_use]
    pub fn value(&self) -> Option<&'a Value> {
        match &self.slot {
            Slot::Present(value) => Some(untag(value)),
            Slot::Absent(_) => None,
        }
    }

    /// Path attempted from the root to reach this node.
    #[must_use]
    pub const fn path(&self) -> &Path {
        &self.path
    }

    /// Why this node is absent, or `None` if it holds a value.
    ///
    /// Distinguishes a missing key from a lookup on the wrong kind of value,
    /// which [`get`](Self::get) otherwise reports identically.
    #[must_use]
    pub const fn miss(&self) -> Option<&Miss> {
        match &self.slot {
            Slot::Present(_) => None,
            Slot::Absent(miss) => Some(miss),
        }
    }

    fn mismatch(&self, expected: Kind) -> Error {
        Error::type_mismatch(expected, self.kind(), self.path.clone())
    }

    /// Extract a string.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] unless the value is a string scalar.
    pub fn string(&self) -> Result<&'a str> {
        match self.value() {
            Some(Value::String(s)) => Ok(s.as_str()),
            _ => Err(self.mismatch(Kind::String)),
        }
    }

    /// Extract an integer.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] unless the value is an integer that fits in
    /// `i64`. Floats never qualify, even when integral.
    pub fn int(&self) -> Result<i64> {
        match self.value() {
            Some(Value::Number(n)) => n.as_i64().ok_or_else(|| self.mismatch(Kind::Int)),
            _ => Err(self.mismatch(Kind::Int)),
        }
    }

    /// Extract a non-negative integer.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] unless the value is an integer in `0..=u64::MAX`.
    pub fn uint(&self) -> Result<u64> {
        match self.value() {
            Some(Value::Number(n)) => n.as_u64().ok_or_else(|| self.mismatch(Kind::Int)),
            _ => Err(self.mismatch(Kind::Int)),
        }
    }

    /// Extract a float.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] unless the value is a float scalar. Integers
    /// are not promoted.
    pub fn float(&self) -> Result<f64> {
        match self.value() {
            Some(Value::Number(n)) if n.is_f64() => {
                n.as_f64().ok_or_else(|| self.mismatch(Kind::Float))
            }
            _ => Err(self.mismatch(Kind::Float)),
        }
    }

    /// Extract a boolean.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] unless the value is a boolean scalar.
    pub fn bool(&self) -> Result<bool> {
        match self.value() {
            Some(Value::Bool(b)) => Ok(*b),
            _ => Err(self.mismatch(Kind::Bool)),
        }
    }

    /// Extract the wrapped mapping, in source order.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] unless the value is a mapping.
    pub fn map(&self) -> Result<&'a Mapping> {
        match self.value() {
            Some(Value::Mapping(mapping)) => Ok(mapping),
            _ => Err(self.mismatch(Kind::Mapping)),
        }
    }

    /// Extract the wrapped sequence.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] unless the value is a sequence.
    pub fn array(&self) -> Result<&'a [Value]> {
        match self.value() {
            Some(Value::Sequence(items)) => Ok(items.as_slice()),
            _ => Err(self.mismatch(Kind::Sequence)),
        }
    }

    /// Number of entries or elements, `None` for anything but a container.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self.value()? {
            Value::Mapping(mapping) => Some(mapping.len()),
            Value::Sequence(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Whether a container has no entries, `None` for anything but a container.
    #[must_use]
    pub fn is_empty(&self) -> Option<bool> {
        self.len().map(|len| len == 0)
    }

    /// Mapping entries as child nodes, in source order.
    ///
    /// Yields nothing unless this node is a mapping.
    pub fn entries(&self) -> impl Iterator<Item = (&'a Value, Self)> + '_ {
        self.map()
            .ok()
            .into_iter()
            .flatten()
            .map(|(key, value)| (key, Self::present(value, self.path.child_key(&key_label(key)))))
    }

    /// Sequence elements as child nodes.
    ///
    /// Yields nothing unless this node is a sequence.
    pub fn elements(&self) -> impl Iterator<Item = Self> + '_ {
        self.array()
            .unwrap_or(&[])
            .iter()
            .enumerate()
            .map(|(i, value)| Self::present(value, self.path.child_index(i as isize)))
    }
}

impl<'a> From<&'a Value> for Node<'a> {
    fn from(value: &'a Value) -> Self {
        Self::new(value)
    }
}

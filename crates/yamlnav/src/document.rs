// SPDX-License-Identifier: MIT OR Apache-2.0
//! Parsing raw bytes into a navigable document.

use crate::node::Node;
use crate::options::ParseOptions;
use crate::value::{into_untagged, kind_of};
use serde_yaml::{Mapping, Value};
use std::str::FromStr;
use tracing::debug;
use yamlnav_core::{Error, Kind, Location, Result};

/// A parsed document whose root is a mapping.
///
/// The document owns the tree; every [`Node`] handed out borrows from it.
/// The navigation methods here are shorthands for the same calls on
/// [`root`](Self::root).
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Wrap an already parsed value, applying the root checks of `options`.
    ///
    /// Merge keys are not resolved here; that only happens while parsing.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] if the value is not a mapping (or `null`, when empty
    /// documents are allowed).
    pub fn from_value(root: Value, options: &ParseOptions) -> Result<Self> {
        match kind_of(&root) {
            Kind::Mapping => Ok(Self {
                root: into_untagged(root),
            }),
            Kind::Null if options.allows_empty() => Ok(Self::empty()),
            found => Err(Error::parse(
                format!("top-level value is a {found}, expected a mapping"),
                None,
            )),
        }
    }

    fn empty() -> Self {
        Self {
            root: Value::Mapping(Mapping::new()),
        }
    }

    /// Node for the document root.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        Node::new(&self.root)
    }

    /// Shorthand for `root().get(key)`.
    #[must_use]
    pub fn get(&self, key: &str) -> Node<'_> {
        self.root().get(key)
    }

    /// Shorthand for `root().get_path(keys)`.
    #[must_use]
    pub fn get_path<I>(&self, keys: I) -> Node<'_>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.root().get_path(keys)
    }

    /// The root value, always a mapping.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.root
    }

    /// Give up navigation and take the parsed tree.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.root
    }
}

impl TryFrom<Value> for Document {
    type Error = Error;

    fn try_from(root: Value) -> Result<Self> {
        Self::from_value(root, &ParseOptions::default())
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

fn parse_error(err: &serde_yaml::Error) -> Error {
    Error::parse(
        err.to_string(),
        err.location()
            .map(|loc| Location::new(loc.line(), loc.column())),
    )
}

/// Parse a YAML document with default [`ParseOptions`].
///
/// # Errors
///
/// [`Error::Parse`] if the input is not well-formed YAML or its top-level
/// value is not a mapping.
pub fn parse(bytes: impl AsRef<[u8]>) -> Result<Document> {
    parse_with(bytes, &ParseOptions::default())
}

/// Parse a YAML document.
///
/// # Errors
///
/// [`Error::Parse`] if the input is not well-formed YAML, contains more than
/// one document, has duplicate keys or unresolvable merge keys, or its
/// top-level value is not a mapping.
///
/// Integers that do not fit in 64 bits (such as `99999999999999999999`) are
/// rejected by the parser, failing the whole document rather than being read
/// as floats.
pub fn parse_with(bytes: impl AsRef<[u8]>, options: &ParseOptions) -> Result<Document> {
    let bytes = bytes.as_ref();
    let result = parse_bytes(bytes, options);
    match &result {
        Ok(document) => debug!(
            bytes = bytes.len(),
            entries = document.root().len().unwrap_or_default(),
            "parsed document"
        ),
        Err(err) => debug!(bytes = bytes.len(), error = %err, "document rejected"),
    }
    result
}

/// Only YAML whitespace and line breaks; anything else goes to the parser.
fn is_blank(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .all(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
}

fn parse_bytes(bytes: &[u8], options: &ParseOptions) -> Result<Document> {
    if options.allows_empty() && is_blank(bytes) {
        return Ok(Document::empty());
    }
    let mut root: Value = serde_yaml::from_slice(bytes).map_err(|e| parse_error(&e))?;
    if options.resolves_merge_keys() {
        root.apply_merge().map_err(|e| parse_error(&e))?;
    }
    Document::from_value(root, options)
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! # yamlnav
//!
//! Safe, chainable navigation over parsed YAML with typed leaf extraction.
//!
//! Descent never fails: a missing key, an out-of-range index, or a lookup on
//! the wrong kind of value yields an *absent* node, and every later step on
//! that chain stays absent. Only [`parse`] and the typed extractors return
//! errors, so a whole chain can be written before checking anything.
//!
//! ```
//! let doc = yamlnav::parse("name: smallfish\nbb:\n  cc:\n    dd: [111, 222, 333]\n")?;
//!
//! assert_eq!(doc.get("name").string()?, "smallfish");
//! assert_eq!(doc.get_path(["bb", "cc", "dd"]).get_index(1).int()?, 222);
//!
//! let missing = doc.get_path(["bb", "cc", "ee"]).string();
//! assert!(missing.unwrap_err().is_type_mismatch());
//! # Ok::<(), yamlnav::Error>(())
//! ```
//!
//! Extraction is by exact kind: `"1"` is not an [`int`](Node::int), `1.0` is
//! not an `int` either, and `"true"` is not a [`bool`](Node::bool).

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

mod document;
mod node;
mod options;
mod value;

pub use document::{Document, parse, parse_with};
pub use node::Node;
pub use options::ParseOptions;
pub use value::kind_of;

/// Re-export of yamlnav-core for error and path types.
pub use yamlnav_core as core;
pub use yamlnav_core::{Error, Kind, Location, Miss, MissReason, Path, Result, Segment};

/// Document values as produced by the YAML parser.
pub use serde_yaml::{Mapping, Number, Sequence, Value};

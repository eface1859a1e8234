// SPDX-License-Identifier: MIT OR Apache-2.0
//! Core types, error handling, and path diagnostics for yamlnav
//!
//! This crate provides the parser-independent types shared by the yamlnav
//! ecosystem:
//!
//! - [`error`] - Error types and Result alias
//! - [`kind`] - Classification of document values
//! - [`path`] - Attempted descent paths
//! - [`miss`] - Diagnostics for descents that found nothing

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]

/// Error types for yamlnav operations
pub mod error;
/// Value classification
pub mod kind;
/// Descent diagnostics
pub mod miss;
/// Descent paths
pub mod path;

// Re-exports for convenience
pub use error::{Error, Location, Result};
pub use kind::Kind;
pub use miss::{Miss, MissReason};
pub use path::{Path, Segment};

// SPDX-License-Identifier: MIT OR Apache-2.0

/// Options controlling [`parse_with`](crate::parse_with).
///
/// ```
/// use yamlnav::ParseOptions;
///
/// let strict = ParseOptions::new().allow_empty(false).merge_keys(false);
/// assert!(yamlnav::parse_with("", &strict).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    merge_keys: bool,
    allow_empty: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseOptions {
    /// Defaults: merge keys resolved, empty documents accepted.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            merge_keys: true,
            allow_empty: true,
        }
    }

    /// Resolve `<<` merge keys into their surrounding mappings.
    #[must_use]
    pub const fn merge_keys(mut self, enabled: bool) -> Self {
        self.merge_keys = enabled;
        self
    }

    /// Treat an empty or `null` document as an empty root mapping instead of
    /// rejecting it.
    #[must_use]
    pub const fn allow_empty(mut self, enabled: bool) -> Self {
        self.allow_empty = enabled;
        self
    }

    /// Whether merge keys are resolved.
    #[must_use]
    pub const fn resolves_merge_keys(&self) -> bool {
        self.merge_keys
    }

    /// Whether empty documents are accepted.
    #[must_use]
    pub const fn allows_empty(&self) -> bool {
        self.allow_empty
    }
}

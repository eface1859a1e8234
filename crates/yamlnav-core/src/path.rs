// SPDX-License-Identifier: MIT OR Apache-2.0
use smallvec::SmallVec;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A single descent step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Mapping key lookup
    Key(String),
    /// Sequence index lookup (may be out of range or negative)
    Index(isize),
}

impl Segment {
    /// The key, if this is a key segment.
    #[must_use]
    pub const fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => Some(key.as_str()),
            Self::Index(_) => None,
        }
    }

    /// The index, if this is an index segment.
    #[must_use]
    pub const fn as_index(&self) -> Option<isize> {
        match self {
            Self::Key(_) => None,
            Self::Index(index) => Some(*index),
        }
    }
}

/// The sequence of descent steps taken from a document root.
///
/// Paths record what was *attempted*, so a path keeps growing after a descent
/// misses. Displays as `a.b[1].c`; the root displays as `$`. Keys that would
/// be ambiguous in dotted form are rendered as `["quoted"]`.
///
/// A path is a shared, parent-linked list: extending it is O(1) and never
/// copies the steps already taken, and clones share the same links.
#[derive(Clone, Default)]
pub struct Path {
    tail: Option<Arc<Link>>,
}

struct Link {
    parent: Path,
    segment: Segment,
    depth: usize,
}

impl Path {
    /// The empty path of a root node.
    #[must_use]
    pub const fn root() -> Self {
        Self { tail: None }
    }

    /// This path extended by a key lookup.
    #[must_use]
    pub fn child_key(&self, key: &str) -> Self {
        self.child(Segment::Key(key.to_owned()))
    }

    /// This path extended by an index lookup.
    #[must_use]
    pub fn child_index(&self, index: isize) -> Self {
        self.child(Segment::Index(index))
    }

    /// This path extended by one step.
    #[must_use]
    pub fn child(&self, segment: Segment) -> Self {
        Self {
            tail: Some(Arc::new(Link {
                parent: self.clone(),
                segment,
                depth: self.depth() + 1,
            })),
        }
    }

    /// The path without its last step, `None` at the root.
    #[must_use]
    pub fn parent(&self) -> Option<&Self> {
        self.tail.as_ref().map(|link| &link.parent)
    }

    /// The last step, `None` at the root.
    #[must_use]
    pub fn last(&self) -> Option<&Segment> {
        self.tail.as_ref().map(|link| &link.segment)
    }

    /// Steps from the last back to the first.
    pub fn iter_rev(&self) -> impl Iterator<Item = &Segment> {
        let mut next = self.tail.as_deref();
        std::iter::from_fn(move || {
            let link = next?;
            next = link.parent.tail.as_deref();
            Some(&link.segment)
        })
    }

    /// The recorded steps, outermost first.
    #[must_use]
    pub fn segments(&self) -> Vec<&Segment> {
        let mut segments: Vec<_> = self.iter_rev().collect();
        segments.reverse();
        segments
    }

    /// Number of steps from the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.tail.as_ref().map_or(0, |link| link.depth)
    }

    /// Whether this is the root path.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.tail.is_none()
    }
}

impl Drop for Path {
    // Unlink iteratively so very deep paths cannot overflow the stack.
    fn drop(&mut self) {
        let mut next = self.tail.take();
        while let Some(link) = next {
            match Arc::try_unwrap(link) {
                Ok(mut link) => next = link.parent.tail.take(),
                Err(_) => break,
            }
        }
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        match (&self.tail, &other.tail) {
            (Some(a), Some(b)) if Arc::ptr_eq(a, b) => true,
            _ => self.depth() == other.depth() && self.iter_rev().eq(other.iter_rev()),
        }
    }
}

impl Eq for Path {}

impl Hash for Path {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.depth().hash(state);
        for segment in self.iter_rev() {
            segment.hash(state);
        }
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::root(), |path, segment| path.child(segment))
    }
}

/// Keys that print unquoted in dotted form.
fn is_plain_key(key: &str) -> bool {
    !key.is_empty()
        && !key
            .chars()
            .any(|c| matches!(c, '.' | '[' | ']' | '"') || c.is_whitespace() || c.is_control())
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("$");
        }
        let mut segments: SmallVec<[&Segment; 8]> = self.iter_rev().collect();
        segments.reverse();
        for (i, segment) in segments.into_iter().enumerate() {
            match segment {
                Segment::Key(key) if is_plain_key(key) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                Segment::Key(key) => write!(f, "[{key:?}]")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.segments()).finish()
    }
}

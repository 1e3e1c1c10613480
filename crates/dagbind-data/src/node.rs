//! The generic node interface.

use serde::{Deserialize, Serialize};

use crate::error::NodeError;
use crate::kind::Kind;

/// Result type for node operations.
pub type Result<T> = std::result::Result<T, NodeError>;

/// Forward-only, single-pass iterator over a map node's entries.
///
/// A fresh call to [`Node::map_iterator`] yields a fresh, independently
/// positioned iterator; re-traversal happens at the node level.
pub type MapIter<'a> = Box<dyn Iterator<Item = (&'a str, &'a dyn Node)> + 'a>;

/// Forward-only, single-pass iterator over a list node's elements.
pub type ListIter<'a> = Box<dyn Iterator<Item = (usize, &'a dyn Node)> + 'a>;

/// Opaque content-address payload carried by a Link node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link(pub String);

impl Link {
    pub fn new(target: &str) -> Self {
        Self(target.to_owned())
    }
}

/// One step of a path into a tree: a map key or a list index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl Segment {
    pub fn key(key: &str) -> Self {
        Self::Key(key.to_owned())
    }

    pub fn index(index: usize) -> Self {
        Self::Index(index)
    }

    /// Parse a segment from its textual form. Decimal digits become an index.
    pub fn parse(s: &str) -> Self {
        match s.parse::<usize>() {
            Ok(index) => Self::Index(index),
            Err(_) => Self::Key(s.to_owned()),
        }
    }
}

/// Read-only, on-demand view of a typed value.
///
/// A node is a projection of the live backing value, not an allocated copy:
/// accessors compute their results when called, so repeated traversal always
/// reflects the current value. Every node has exactly one [`Kind`]; every
/// kind-specific operation defaults to [`NodeError::NotApplicable`] and an
/// implementation overrides exactly the operations its kind supports.
pub trait Node {
    /// The shape of this node.
    fn kind(&self) -> Kind;

    fn as_bool(&self) -> Result<bool> {
        Err(NodeError::NotApplicable)
    }

    fn as_int(&self) -> Result<i64> {
        Err(NodeError::NotApplicable)
    }

    fn as_float(&self) -> Result<f64> {
        Err(NodeError::NotApplicable)
    }

    fn as_string(&self) -> Result<&str> {
        Err(NodeError::NotApplicable)
    }

    fn as_bytes(&self) -> Result<&[u8]> {
        Err(NodeError::NotApplicable)
    }

    fn as_link(&self) -> Result<&Link> {
        Err(NodeError::NotApplicable)
    }

    /// Look up an entry by key. Succeeds only for Map nodes.
    fn lookup_by_string(&self, _key: &str) -> Result<&dyn Node> {
        Err(NodeError::NotApplicable)
    }

    /// Look up an element by position. Succeeds only for List nodes.
    fn lookup_by_index(&self, _index: usize) -> Result<&dyn Node> {
        Err(NodeError::NotApplicable)
    }

    /// Look up by path segment, dispatching on the segment's form.
    fn lookup_by_segment(&self, segment: &Segment) -> Result<&dyn Node> {
        match segment {
            Segment::Key(key) => self.lookup_by_string(key),
            Segment::Index(index) => self.lookup_by_index(*index),
        }
    }

    /// Iterate entries of a Map node. Empty for every other kind.
    fn map_iterator(&self) -> MapIter<'_> {
        Box::new(std::iter::empty())
    }

    /// Iterate elements of a List node. Empty for every other kind.
    fn list_iterator(&self) -> ListIter<'_> {
        Box::new(std::iter::empty())
    }

    /// Element count for List and Map nodes; -1 for scalars.
    fn length(&self) -> i64 {
        -1
    }

    /// Whether this node stands for a field omitted from its enclosing map.
    fn is_absent(&self) -> bool {
        false
    }

    /// Whether this node is an explicit null value.
    fn is_null(&self) -> bool {
        false
    }
}

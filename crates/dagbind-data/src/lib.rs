//! Generic tree data model for dagbind.
//!
//! Every generated binding exposes its value as a read-only [`Node`]: a lazy
//! view with exactly one [`Kind`], scalar coercions that succeed only for the
//! matching kind, and map/list navigation for container kinds. Codecs operate
//! purely against this contract, so they never need to know the concrete
//! generated type they are walking.

pub mod error;
pub mod kind;
pub mod maybe;
pub mod node;

pub use error::NodeError;
pub use kind::Kind;
pub use maybe::Maybe;
pub use node::{Link, ListIter, MapIter, Node, Result, Segment};

#[cfg(test)]
mod node_tests;

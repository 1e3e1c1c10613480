//! Generic self-describing values.
//!
//! These are the untyped trees a codec materializes: one value type per
//! [`dagbind_data::Kind`], each a lazy [`dagbind_data::Node`] over its own
//! storage, plus [`Any`] which holds a value of any kind. `Any::parse` walks
//! an arbitrary node into this backend, which makes it the in-memory decode
//! side when no wire codec is involved.

pub mod any;
pub mod list;
pub mod scalar;
pub mod structure;

pub use any::Any;
pub use list::List;
pub use scalar::{Absent, Bool, Bytes, Float, Int, LinkNode, Null, Str};
pub use structure::{Field, Structure};

#[cfg(test)]
mod any_tests;

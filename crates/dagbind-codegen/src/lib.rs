//! Binding generation for dagbind.
//!
//! Given a batch of named [`dagbind_schema::TypeDef`]s destined for one
//! package, this crate emits a single Rust source file containing, per type:
//! the type definition, a `parse` decoder, a lazy `Node` implementation, and a
//! `def()` schema accessor. Cross-package references are resolved through a
//! per-unit import table with sequential aliases assigned in first-reference
//! order, so identical input always produces byte-identical output.

mod error;
mod generate;
mod unit;

pub use error::EmitError;
pub use generate::{DATA_PKG, SCHEMA_PKG, VALUES_PKG};
pub use unit::{Binding, Unit, UnitContext};

#[cfg(test)]
mod generate_tests;
#[cfg(test)]
mod unit_tests;

//! Type IR for dagbind.
//!
//! A [`TypeDef`] describes the shape of one type: a scalar primitive, an
//! ordered tuple, a structure with named fields, a closed union, or a named
//! reference to a binding generated elsewhere. Values are immutable: they are
//! built once from schema input and consumed by the generator.

pub mod type_def;

pub use type_def::{Field, SlotIter, SlotList, Slots, Structure, Tuple, TypeDef, TypeRef, Union};

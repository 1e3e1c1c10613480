//! Type shape definitions.

use serde::{Deserialize, Serialize};

use dagbind_data::Kind;

/// The shape of one type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeDef {
    /// One scalar kind.
    Primitive(Kind),
    /// Ordered sequence of slots.
    Tuple(Tuple),
    /// Named fields in canonical declaration order.
    Structure(Structure),
    /// Closed set of registered member types.
    Any(Union),
    /// Named reference to a binding in some package.
    Ref(TypeRef),
}

impl TypeDef {
    /// Build a tuple from its slot types.
    ///
    /// The slots become a chain of cons cells; empty input yields the empty
    /// marker. Arity is structural (the cell count), never stored.
    pub fn tuple(slots: Vec<TypeDef>) -> Self {
        Self::Tuple(Tuple {
            slots: Slots::from_slice(&slots),
        })
    }

    /// Build a structure from its fields, preserving declaration order.
    pub fn structure(fields: Vec<Field>) -> Self {
        Self::Structure(Structure { fields })
    }

    /// Build a union from its registered members, preserving registration
    /// order. Decode tries members in this order.
    pub fn any(members: Vec<TypeDef>) -> Self {
        Self::Any(Union { members })
    }

    /// Reference a named binding in the given package.
    pub fn reference(package: &str, name: &str) -> Self {
        Self::Ref(TypeRef {
            package: package.to_owned(),
            name: name.to_owned(),
        })
    }

    /// Whether this is a composite shape (tuple, structure, or union).
    ///
    /// Composite shapes must be named bindings; the generator rejects them in
    /// slot or field position.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Tuple(_) | Self::Structure(_) | Self::Any(_))
    }
}

/// Ordered tuple shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuple {
    pub slots: Slots,
}

impl Tuple {
    /// Structural arity: the number of cons cells in the slot chain.
    pub fn arity(&self) -> usize {
        self.iter().count()
    }

    /// Iterate slot types in declaration order.
    pub fn iter(&self) -> SlotIter<'_> {
        SlotIter { next: &self.slots }
    }
}

/// Slot chain: either the empty marker or one cons cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Slots {
    None,
    Cons(Box<SlotList>),
}

impl Slots {
    /// Recursively build the chain: empty input yields the empty marker,
    /// otherwise the head becomes the slot and the tail becomes the rest.
    pub fn from_slice(slots: &[TypeDef]) -> Self {
        match slots.split_first() {
            None => Self::None,
            Some((first, rest)) => Self::Cons(Box::new(SlotList {
                slot: first.clone(),
                rest: Self::from_slice(rest),
            })),
        }
    }
}

/// One cons cell: a positional slot type and the remaining chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotList {
    pub slot: TypeDef,
    pub rest: Slots,
}

/// Iterator over a tuple's slot types.
pub struct SlotIter<'a> {
    next: &'a Slots,
}

impl<'a> Iterator for SlotIter<'a> {
    type Item = &'a TypeDef;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next {
            Slots::None => None,
            Slots::Cons(cell) => {
                self.next = &cell.rest;
                Some(&cell.slot)
            }
        }
    }
}

/// Structure shape. Field order is canonical: it drives both decode lookup
/// order and encode key emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    pub fields: Vec<Field>,
}

/// One named structure field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub ty: TypeDef,
    pub optional: bool,
}

impl Field {
    /// A required field.
    pub fn new(name: &str, ty: TypeDef) -> Self {
        Self {
            name: name.to_owned(),
            ty,
            optional: false,
        }
    }

    /// An optional field: may be omitted from the encoded map entirely.
    pub fn optional(name: &str, ty: TypeDef) -> Self {
        Self {
            name: name.to_owned(),
            ty,
            optional: true,
        }
    }
}

/// Union shape: the closed, registered member set for union decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Union {
    pub members: Vec<TypeDef>,
}

/// Named reference to a binding in some package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    pub package: String,
    pub name: String,
}

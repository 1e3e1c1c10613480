//! Canonical node kind definitions.

use serde::{Deserialize, Serialize};

/// The shape of a node.
///
/// This is the closed enumeration of all node kinds. Every node reports
/// exactly one kind, and every kind-specific operation on [`crate::Node`]
/// succeeds only when the node's actual kind matches.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum Kind {
    /// Explicit null value. Distinct from an absent field.
    Null = 0,
    /// Boolean scalar.
    Bool = 1,
    /// Signed integer scalar.
    Integer = 2,
    /// Floating point scalar.
    Float = 3,
    /// Unicode string scalar.
    String = 4,
    /// Raw byte string scalar.
    Bytes = 5,
    /// Content-address link scalar.
    Link = 6,
    /// Ordered sequence of nodes.
    List = 7,
    /// Ordered key/value entries.
    Map = 8,
}

impl Kind {
    /// Convert from raw discriminant.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Null),
            1 => Some(Self::Bool),
            2 => Some(Self::Integer),
            3 => Some(Self::Float),
            4 => Some(Self::String),
            5 => Some(Self::Bytes),
            6 => Some(Self::Link),
            7 => Some(Self::List),
            8 => Some(Self::Map),
            _ => None,
        }
    }

    /// Whether this kind is a scalar (everything except List and Map).
    pub fn is_scalar(self) -> bool {
        !self.is_container()
    }

    /// Whether this kind carries child nodes.
    pub fn is_container(self) -> bool {
        matches!(self, Self::List | Self::Map)
    }

    /// Display name, matching the variant name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool => "Bool",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::String => "String",
            Self::Bytes => "Bytes",
            Self::Link => "Link",
            Self::List => "List",
            Self::Map => "Map",
        }
    }
}

//! Scalar values, one per scalar kind.

use dagbind_data::{Kind, Link, Node, NodeError, Result};
use dagbind_schema::TypeDef;

/// Boolean value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn def() -> TypeDef {
        TypeDef::Primitive(Kind::Bool)
    }

    pub fn parse(n: &dyn Node) -> Result<Self> {
        if n.kind() != Kind::Bool {
            return Err(NodeError::NotApplicable);
        }
        Ok(Self(n.as_bool()?))
    }
}

impl Node for Bool {
    fn kind(&self) -> Kind {
        Kind::Bool
    }

    fn as_bool(&self) -> Result<bool> {
        Ok(self.0)
    }
}

/// Signed integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Int(pub i64);

impl Int {
    pub fn def() -> TypeDef {
        TypeDef::Primitive(Kind::Integer)
    }

    pub fn parse(n: &dyn Node) -> Result<Self> {
        if n.kind() != Kind::Integer {
            return Err(NodeError::NotApplicable);
        }
        Ok(Self(n.as_int()?))
    }
}

impl Node for Int {
    fn kind(&self) -> Kind {
        Kind::Integer
    }

    fn as_int(&self) -> Result<i64> {
        Ok(self.0)
    }
}

/// Floating point value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Float(pub f64);

impl Float {
    pub fn def() -> TypeDef {
        TypeDef::Primitive(Kind::Float)
    }

    pub fn parse(n: &dyn Node) -> Result<Self> {
        if n.kind() != Kind::Float {
            return Err(NodeError::NotApplicable);
        }
        Ok(Self(n.as_float()?))
    }
}

impl Node for Float {
    fn kind(&self) -> Kind {
        Kind::Float
    }

    fn as_float(&self) -> Result<f64> {
        Ok(self.0)
    }
}

/// Unicode string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Str(pub String);

impl Str {
    pub fn def() -> TypeDef {
        TypeDef::Primitive(Kind::String)
    }

    pub fn parse(n: &dyn Node) -> Result<Self> {
        if n.kind() != Kind::String {
            return Err(NodeError::NotApplicable);
        }
        Ok(Self(n.as_string()?.to_owned()))
    }
}

impl Node for Str {
    fn kind(&self) -> Kind {
        Kind::String
    }

    fn as_string(&self) -> Result<&str> {
        Ok(&self.0)
    }
}

/// Raw byte string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
    pub fn def() -> TypeDef {
        TypeDef::Primitive(Kind::Bytes)
    }

    pub fn parse(n: &dyn Node) -> Result<Self> {
        if n.kind() != Kind::Bytes {
            return Err(NodeError::NotApplicable);
        }
        Ok(Self(n.as_bytes()?.to_vec()))
    }
}

impl Node for Bytes {
    fn kind(&self) -> Kind {
        Kind::Bytes
    }

    fn as_bytes(&self) -> Result<&[u8]> {
        Ok(&self.0)
    }
}

/// Content-address link value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkNode(pub Link);

impl LinkNode {
    pub fn def() -> TypeDef {
        TypeDef::Primitive(Kind::Link)
    }

    pub fn parse(n: &dyn Node) -> Result<Self> {
        if n.kind() != Kind::Link {
            return Err(NodeError::NotApplicable);
        }
        Ok(Self(n.as_link()?.clone()))
    }
}

impl Node for LinkNode {
    fn kind(&self) -> Kind {
        Kind::Link
    }

    fn as_link(&self) -> Result<&Link> {
        Ok(&self.0)
    }
}

/// Explicit null value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Null;

impl Null {
    pub fn def() -> TypeDef {
        TypeDef::Primitive(Kind::Null)
    }

    pub fn parse(n: &dyn Node) -> Result<Self> {
        if n.kind() != Kind::Null {
            return Err(NodeError::NotApplicable);
        }
        Ok(Self)
    }
}

impl Node for Null {
    fn kind(&self) -> Kind {
        Kind::Null
    }

    fn is_null(&self) -> bool {
        true
    }
}

/// Marker for a field omitted from its enclosing map.
///
/// Reports the Null kind, but `is_absent` is true and `is_null` is false, so
/// absence and explicit null stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Absent;

impl Node for Absent {
    fn kind(&self) -> Kind {
        Kind::Null
    }

    fn is_absent(&self) -> bool {
        true
    }
}

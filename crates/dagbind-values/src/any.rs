//! Value of any kind.

use dagbind_data::{Kind, Link, ListIter, MapIter, Node, Result, Segment};

use crate::list::List;
use crate::scalar::{Bool, Bytes, Float, Int, LinkNode, Null, Str};
use crate::structure::Structure;

/// A value of any kind: the closed tagged dispatch over every concrete value
/// type. Node operations forward to the active variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Any {
    Null(Null),
    Bool(Bool),
    Int(Int),
    Float(Float),
    Str(Str),
    Bytes(Bytes),
    Link(LinkNode),
    List(List),
    Map(Structure),
}

impl Any {
    /// Walk an arbitrary node into this backend, dispatching on its kind.
    pub fn parse(n: &dyn Node) -> Result<Self> {
        match n.kind() {
            Kind::Null => Null::parse(n).map(Self::Null),
            Kind::Bool => Bool::parse(n).map(Self::Bool),
            Kind::Integer => Int::parse(n).map(Self::Int),
            Kind::Float => Float::parse(n).map(Self::Float),
            Kind::String => Str::parse(n).map(Self::Str),
            Kind::Bytes => Bytes::parse(n).map(Self::Bytes),
            Kind::Link => LinkNode::parse(n).map(Self::Link),
            Kind::List => List::parse(n).map(Self::List),
            Kind::Map => Structure::parse(n).map(Self::Map),
        }
    }

    fn inner(&self) -> &dyn Node {
        match self {
            Self::Null(v) => v,
            Self::Bool(v) => v,
            Self::Int(v) => v,
            Self::Float(v) => v,
            Self::Str(v) => v,
            Self::Bytes(v) => v,
            Self::Link(v) => v,
            Self::List(v) => v,
            Self::Map(v) => v,
        }
    }
}

impl Node for Any {
    fn kind(&self) -> Kind {
        self.inner().kind()
    }

    fn as_bool(&self) -> Result<bool> {
        self.inner().as_bool()
    }

    fn as_int(&self) -> Result<i64> {
        self.inner().as_int()
    }

    fn as_float(&self) -> Result<f64> {
        self.inner().as_float()
    }

    fn as_string(&self) -> Result<&str> {
        self.inner().as_string()
    }

    fn as_bytes(&self) -> Result<&[u8]> {
        self.inner().as_bytes()
    }

    fn as_link(&self) -> Result<&Link> {
        self.inner().as_link()
    }

    fn lookup_by_string(&self, key: &str) -> Result<&dyn Node> {
        self.inner().lookup_by_string(key)
    }

    fn lookup_by_index(&self, index: usize) -> Result<&dyn Node> {
        self.inner().lookup_by_index(index)
    }

    fn lookup_by_segment(&self, segment: &Segment) -> Result<&dyn Node> {
        self.inner().lookup_by_segment(segment)
    }

    fn map_iterator(&self) -> MapIter<'_> {
        self.inner().map_iterator()
    }

    fn list_iterator(&self) -> ListIter<'_> {
        self.inner().list_iterator()
    }

    fn length(&self) -> i64 {
        self.inner().length()
    }

    fn is_absent(&self) -> bool {
        self.inner().is_absent()
    }

    fn is_null(&self) -> bool {
        self.inner().is_null()
    }
}

//! Generic map value.

use dagbind_data::{Kind, MapIter, Node, NodeError, Result};

use crate::any::Any;

/// Order-preserving key/value entries.
///
/// Backed by a field list rather than a hash map so that iteration order is
/// exactly insertion order, matching the canonical order of encoded output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Structure(pub Vec<Field>);

/// One map entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: Any,
}

impl Field {
    pub fn new(name: &str, value: Any) -> Self {
        Self {
            name: name.to_owned(),
            value,
        }
    }
}

impl Structure {
    pub fn parse(n: &dyn Node) -> Result<Self> {
        if n.kind() != Kind::Map {
            return Err(NodeError::NotApplicable);
        }
        let mut fields = Vec::new();
        for (name, value) in n.map_iterator() {
            let value = Any::parse(value).map_err(|e| NodeError::at_field(name, e))?;
            fields.push(Field::new(name, value));
        }
        Ok(Self(fields))
    }
}

impl Node for Structure {
    fn kind(&self) -> Kind {
        Kind::Map
    }

    fn lookup_by_string(&self, key: &str) -> Result<&dyn Node> {
        self.0
            .iter()
            .find(|f| f.name == key)
            .map(|f| &f.value as &dyn Node)
            .ok_or(NodeError::NotApplicable)
    }

    fn map_iterator(&self) -> MapIter<'_> {
        Box::new(
            self.0
                .iter()
                .map(|f| (f.name.as_str(), &f.value as &dyn Node)),
        )
    }

    fn length(&self) -> i64 {
        self.0.len() as i64
    }
}

//! Generic list value.

use dagbind_data::{Kind, ListIter, Node, NodeError, Result};

use crate::any::Any;

/// Ordered sequence of arbitrary values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct List(pub Vec<Any>);

impl List {
    pub fn parse(n: &dyn Node) -> Result<Self> {
        if n.kind() != Kind::List {
            return Err(NodeError::NotApplicable);
        }
        let mut items = Vec::new();
        for (index, item) in n.list_iterator() {
            items.push(Any::parse(item).map_err(|e| NodeError::at_slot(index, e))?);
        }
        Ok(Self(items))
    }
}

impl Node for List {
    fn kind(&self) -> Kind {
        Kind::List
    }

    fn lookup_by_index(&self, index: usize) -> Result<&dyn Node> {
        self.0
            .get(index)
            .map(|v| v as &dyn Node)
            .ok_or(NodeError::NotApplicable)
    }

    fn list_iterator(&self) -> ListIter<'_> {
        Box::new(self.0.iter().enumerate().map(|(i, v)| (i, v as &dyn Node)))
    }

    fn length(&self) -> i64 {
        self.0.len() as i64
    }
}

use crate::error::NodeError;
use crate::kind::Kind;
use crate::maybe::Maybe;
use crate::node::{Node, Segment};

/// Minimal scalar implementation: overrides only `kind` and `as_bool`,
/// everything else falls through to the trait defaults.
struct Flag(bool);

impl Node for Flag {
    fn kind(&self) -> Kind {
        Kind::Bool
    }

    fn as_bool(&self) -> crate::Result<bool> {
        Ok(self.0)
    }
}

#[test]
fn scalar_defaults() {
    let n = Flag(true);
    assert_eq!(n.kind(), Kind::Bool);
    assert_eq!(n.as_bool(), Ok(true));
    assert_eq!(n.as_int(), Err(NodeError::NotApplicable));
    assert_eq!(n.as_float(), Err(NodeError::NotApplicable));
    assert_eq!(n.as_string(), Err(NodeError::NotApplicable));
    assert_eq!(n.as_bytes(), Err(NodeError::NotApplicable));
    assert!(n.as_link().is_err());
    assert_eq!(n.length(), -1);
    assert!(!n.is_absent());
    assert!(!n.is_null());
}

#[test]
fn scalar_navigation_fails() {
    let n = Flag(false);
    assert!(n.lookup_by_string("x").is_err());
    assert!(n.lookup_by_index(0).is_err());
    assert!(n.lookup_by_segment(&Segment::key("x")).is_err());
    assert!(n.lookup_by_segment(&Segment::index(0)).is_err());
}

#[test]
fn scalar_iterators_are_empty() {
    let n = Flag(true);
    assert_eq!(n.map_iterator().count(), 0);
    assert_eq!(n.list_iterator().count(), 0);
    // A fresh call yields a fresh iterator.
    assert_eq!(n.list_iterator().count(), 0);
}

#[test]
fn segment_parse() {
    assert_eq!(Segment::parse("7"), Segment::Index(7));
    assert_eq!(Segment::parse("f1"), Segment::Key("f1".to_owned()));
    assert_eq!(Segment::parse("-1"), Segment::Key("-1".to_owned()));
}

#[test]
fn maybe_defaults_to_absent() {
    let m: Maybe<bool> = Maybe::default();
    assert!(m.is_absent());
    assert_eq!(m.value(), None);
    assert_eq!(Maybe::from(Some(3)).value(), Some(&3));
}

#[test]
fn error_attribution_nests() {
    let err = NodeError::at_field(
        "outer",
        NodeError::at_slot(2, NodeError::NotApplicable),
    );
    assert_eq!(
        err.to_string(),
        "at field `outer`: at slot 2: operation not applicable to this node kind"
    );
}

use dagbind_data::{Kind, Node, NodeError, Segment};

use crate::any::Any;
use crate::list::List;
use crate::scalar::{Bool, Int, Str};
use crate::structure::{Field, Structure};

#[test]
fn parse_dispatches_on_kind() {
    assert_eq!(Any::parse(&Bool(true)), Ok(Any::Bool(Bool(true))));
    assert_eq!(Any::parse(&Int(9)), Ok(Any::Int(Int(9))));

    let list = List(vec![Any::Int(Int(1)), Any::Int(Int(2))]);
    assert_eq!(Any::parse(&list), Ok(Any::List(list.clone())));
}

#[test]
fn forwards_to_active_variant() {
    let v = Any::Str(Str("abc".to_owned()));
    assert_eq!(v.kind(), Kind::String);
    assert_eq!(v.as_string(), Ok("abc"));
    assert_eq!(v.as_bool(), Err(NodeError::NotApplicable));
    assert_eq!(v.length(), -1);
}

#[test]
fn list_navigation() {
    let v = Any::List(List(vec![Any::Bool(Bool(false)), Any::Int(Int(5))]));
    assert_eq!(v.length(), 2);
    assert_eq!(v.lookup_by_index(1).unwrap().as_int(), Ok(5));
    assert_eq!(
        v.lookup_by_index(2).err(),
        Some(NodeError::NotApplicable)
    );
    assert_eq!(v.lookup_by_segment(&Segment::index(0)).unwrap().as_bool(), Ok(false));

    let indices: Vec<_> = v.list_iterator().map(|(i, _)| i).collect();
    assert_eq!(indices, vec![0, 1]);
}

#[test]
fn map_navigation_through_segments() {
    let v = Any::Map(Structure(vec![Field::new("k", Any::Int(Int(7)))]));
    assert_eq!(v.lookup_by_segment(&Segment::key("k")).unwrap().as_int(), Ok(7));
    assert!(v.lookup_by_segment(&Segment::index(0)).is_err());
}

#[test]
fn nested_tree_roundtrip() {
    let tree = Any::Map(Structure(vec![
        Field::new("items", Any::List(List(vec![Any::Int(Int(1))]))),
        Field::new("name", Any::Str(Str("root".to_owned()))),
    ]));
    assert_eq!(Any::parse(&tree), Ok(tree.clone()));
}

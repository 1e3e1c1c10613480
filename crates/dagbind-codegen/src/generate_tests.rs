use indoc::indoc;

use dagbind_data::Kind;
use dagbind_schema::{Field, TypeDef};

use crate::error::EmitError;
use crate::unit::{Binding, Unit};

fn unit(package: &str, bindings: Vec<Binding>) -> Unit {
    Unit::new("out.rs", package, bindings)
}

#[test]
fn primitive_binding_full_output() {
    let u = unit(
        "demo_types",
        vec![Binding::new("Flag", TypeDef::Primitive(Kind::Bool))],
    );
    let expected = indoc! {r#"
        //! Generated bindings for package `demo_types`.

        use dagbind_schema as pd1;
        use dagbind_data as pd2;
        use dagbind_data::Node as _;

        pub struct Flag(pub bool);

        impl Flag {
            pub fn def() -> pd1::TypeDef {
                pd1::TypeDef::Primitive(pd2::Kind::Bool)
            }

            pub fn parse(n: &dyn pd2::Node) -> pd2::Result<Self> {
                if n.kind() != pd2::Kind::Bool {
                    return Err(pd2::NodeError::NotApplicable);
                }
                Ok(Self(n.as_bool()?))
            }
        }

        impl pd2::Node for Flag {
            fn kind(&self) -> pd2::Kind {
                pd2::Kind::Bool
            }

            fn as_bool(&self) -> pd2::Result<bool> {
                Ok(self.0)
            }
        }
    "#};
    assert_eq!(u.generate().unwrap(), expected);
}

#[test]
fn alias_only_unit_has_no_import_block() {
    let u = unit(
        "demo",
        vec![Binding::new("A", TypeDef::reference("demo", "B"))],
    );
    let expected = indoc! {r#"
        //! Generated bindings for package `demo`.

        pub type A = B;
    "#};
    assert_eq!(u.generate().unwrap(), expected);
}

#[test]
fn string_primitive_stores_an_owned_string() {
    let u = unit(
        "demo",
        vec![Binding::new("Name", TypeDef::Primitive(Kind::String))],
    );
    let out = u.generate().unwrap();
    assert!(out.contains("pub struct Name(pub String);"));
    assert!(out.contains("Ok(Self(n.as_string()?.to_owned()))"));
    assert!(out.contains("fn as_string(&self) -> pd2::Result<&str> {"));
}

#[test]
fn null_primitive_is_a_unit_struct() {
    let u = unit(
        "demo",
        vec![Binding::new("Nothing", TypeDef::Primitive(Kind::Null))],
    );
    let out = u.generate().unwrap();
    assert!(out.contains("pub struct Nothing;"));
    assert!(out.contains("fn is_null(&self) -> bool {"));
    assert!(out.contains("Ok(Self)"));
}

#[test]
fn container_kind_is_not_a_primitive() {
    let u = unit(
        "demo",
        vec![Binding::new("Bad", TypeDef::Primitive(Kind::Map))],
    );
    match u.generate() {
        Err(EmitError::NotAScalar { type_name, kind }) => {
            assert_eq!(type_name, "Bad");
            assert_eq!(kind, Kind::Map);
        }
        other => panic!("expected NotAScalar, got {other:?}"),
    }
}

#[test]
fn tuple_binding_checks_arity_and_attributes_slots() {
    let u = unit(
        "demo",
        vec![Binding::new(
            "Pair",
            TypeDef::tuple(vec![
                TypeDef::Primitive(Kind::Bool),
                TypeDef::Primitive(Kind::Integer),
            ]),
        )],
    );
    let out = u.generate().unwrap();
    // Slot types resolve first, so the values package takes the first alias.
    assert!(out.contains("pub struct Pair(pub pd1::Bool, pub pd1::Int);"));
    assert!(out.contains("if n.length() != 2 {"));
    assert!(out.contains("ArityMismatch { expected: 2, found: n.length() }"));
    assert!(
        out.contains("pd1::Bool::parse(n.lookup_by_index(0)?).map_err(|e| pd3::NodeError::at_slot(0, e))?,")
    );
    assert!(out.contains("let slots: [&dyn pd3::Node; 2] = [&self.0, &self.1];"));
    assert!(out.contains("pd2::TypeDef::tuple(vec![pd2::TypeDef::Primitive(pd3::Kind::Bool), pd2::TypeDef::Primitive(pd3::Kind::Integer)])"));
}

#[test]
fn zero_slot_tuple_has_no_navigation_overrides() {
    let u = unit("demo", vec![Binding::new("Unit", TypeDef::tuple(vec![]))]);
    let out = u.generate().unwrap();
    assert!(out.contains("pub struct Unit();"));
    assert!(out.contains("if n.length() != 0 {"));
    assert!(out.contains("Ok(Self())"));
    assert!(!out.contains("fn lookup_by_index"));
    assert!(!out.contains("fn list_iterator"));
}

#[test]
fn structure_binding_handles_optional_fields() {
    let u = unit(
        "demo",
        vec![Binding::new(
            "Session",
            TypeDef::structure(vec![
                Field::new("f1", TypeDef::Primitive(Kind::Bool)),
                Field::optional("f2", TypeDef::Primitive(Kind::Bool)),
            ]),
        )],
    );
    let out = u.generate().unwrap();
    assert!(out.contains("    pub f1: pd1::Bool,\n"));
    assert!(out.contains("    pub f2: pd3::Maybe<pd1::Bool>,\n"));
    assert!(out.contains(
        "Err(_) => return Err(pd3::NodeError::MissingRequiredField { field: \"f1\".to_owned() }),"
    ));
    assert!(out.contains("Err(_) => pd3::Maybe::Absent,"));
    assert!(out.contains("let mut len = 1i64;"));
    // Key emission order follows declaration order.
    let f1_push = out.find("entries.push((\"f1\", &self.f1));").unwrap();
    let f2_push = out.find("entries.push((\"f2\", v));").unwrap();
    assert!(f1_push < f2_push);
    assert!(out.contains(
        "pd2::Field::new(\"f1\", pd2::TypeDef::Primitive(pd3::Kind::Bool)), pd2::Field::optional(\"f2\", pd2::TypeDef::Primitive(pd3::Kind::Bool))"
    ));
}

#[test]
fn union_binding_tries_members_in_registration_order() {
    let u = unit(
        "demo",
        vec![Binding::new(
            "Value",
            TypeDef::any(vec![
                TypeDef::Primitive(Kind::Bool),
                TypeDef::reference("demo", "Other"),
            ]),
        )],
    );
    let out = u.generate().unwrap();
    assert!(out.contains("    Bool(pd1::Bool),\n"));
    assert!(out.contains("    Other(Other),\n"));
    let bool_trial = out.find("if let Ok(v) = pd1::Bool::parse(n) {").unwrap();
    let other_trial = out.find("if let Ok(v) = Other::parse(n) {").unwrap();
    assert!(bool_trial < other_trial);
    assert!(out.contains("Err(pd3::NodeError::NoMatchingUnionMember)"));
    assert!(out.contains("fn inner(&self) -> &dyn pd3::Node {"));
    assert!(out.contains("self.inner().lookup_by_segment(segment)"));
}

#[test]
fn union_variant_names_are_deduplicated() {
    let u = unit(
        "demo",
        vec![Binding::new(
            "Merged",
            TypeDef::any(vec![
                TypeDef::reference("pkg_a", "Item"),
                TypeDef::reference("pkg_b", "Item"),
            ]),
        )],
    );
    let out = u.generate().unwrap();
    assert!(out.contains("    Item(pd1::Item),\n"));
    assert!(out.contains("    Item2(pd2::Item),\n"));
}

#[test]
fn anonymous_composite_fields_are_rejected() {
    let inline_tuple = TypeDef::tuple(vec![TypeDef::Primitive(Kind::Bool)]);
    let u = unit(
        "demo",
        vec![Binding::new(
            "Holder",
            TypeDef::structure(vec![Field::new("inner", inline_tuple)]),
        )],
    );
    match u.generate() {
        Err(EmitError::AnonymousComposite { type_name }) => assert_eq!(type_name, "Holder"),
        other => panic!("expected AnonymousComposite, got {other:?}"),
    }
}

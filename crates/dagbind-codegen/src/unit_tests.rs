use dagbind_data::Kind;
use dagbind_schema::{Field, TypeDef};

use crate::error::EmitError;
use crate::unit::{Binding, Unit, UnitContext};

#[test]
fn refer_to_own_package_is_unqualified() {
    let mut ctx = UnitContext::new("demo");
    assert_eq!(ctx.refer_to("demo", "Thing"), "Thing");
    assert!(ctx.is_import_free());
}

#[test]
fn aliases_are_sequential_in_first_reference_order() {
    let mut ctx = UnitContext::new("demo");
    assert_eq!(ctx.refer_to("zeta", "A"), "pd1::A");
    assert_eq!(ctx.refer_to("alpha", "B"), "pd2::B");
    // Reuse, not a fresh alias.
    assert_eq!(ctx.refer_to("zeta", "C"), "pd1::C");
    let imports: Vec<_> = ctx.imports().collect();
    assert_eq!(imports, vec![("zeta", "pd1"), ("alpha", "pd2")]);
}

fn two_package_unit() -> Unit {
    Unit::new(
        "out.rs",
        "demo",
        vec![Binding::new(
            "Pair",
            TypeDef::tuple(vec![
                TypeDef::reference("alpha", "A"),
                TypeDef::reference("beta", "B"),
            ]),
        )],
    )
}

#[test]
fn distinct_packages_get_distinct_ordered_aliases() {
    let out = two_package_unit().generate().unwrap();
    let alpha = out.find("use alpha as pd1;").unwrap();
    let beta = out.find("use beta as pd2;").unwrap();
    assert!(alpha < beta);
    assert!(out.contains("pub struct Pair(pub pd1::A, pub pd2::B);"));
}

#[test]
fn identical_input_generates_identical_bytes() {
    let first = two_package_unit().generate().unwrap();
    let second = two_package_unit().generate().unwrap();
    assert_eq!(first, second);
}

#[test]
fn repeated_references_share_one_import() {
    let u = Unit::new(
        "out.rs",
        "demo",
        vec![
            Binding::new("First", TypeDef::reference("other", "A")),
            Binding::new("Second", TypeDef::reference("other", "B")),
        ],
    );
    let out = u.generate().unwrap();
    assert_eq!(out.matches("use other as pd1;").count(), 1);
    assert!(out.contains("pub type First = pd1::A;"));
    assert!(out.contains("pub type Second = pd1::B;"));
}

#[test]
fn sibling_reference_is_unqualified_and_unaliased() {
    let u = Unit::new(
        "out.rs",
        "demo",
        vec![Binding::new(
            "Holder",
            TypeDef::structure(vec![Field::new("other", TypeDef::reference("demo", "Other"))]),
        )],
    );
    let out = u.generate().unwrap();
    assert!(out.contains("    pub other: Other,\n"));
    assert!(!out.contains("use demo"));
}

#[test]
fn build_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/deep/bindings.rs");
    let u = Unit::new(
        &path,
        "demo",
        vec![Binding::new("Flag", TypeDef::Primitive(Kind::Bool))],
    );
    u.build().unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, u.generate().unwrap());
}

#[test]
fn failing_unit_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bindings.rs");
    let u = Unit::new(
        &path,
        "demo",
        vec![
            Binding::new("Good", TypeDef::Primitive(Kind::Bool)),
            Binding::new(
                "Bad",
                TypeDef::structure(vec![Field::new("inner", TypeDef::tuple(vec![]))]),
            ),
        ],
    );
    match u.build() {
        Err(EmitError::AnonymousComposite { type_name }) => assert_eq!(type_name, "Bad"),
        other => panic!("expected AnonymousComposite, got {other:?}"),
    }
    assert!(!path.exists());
}

//! Per-type binding emission.
//!
//! Each binding expands to four parts: the type definition, a `parse`
//! decoder, a lazy `Node` implementation over the live value, and a `def()`
//! schema accessor. Every runtime symbol is referenced through the unit
//! context so cross-package aliasing stays deterministic.

use dagbind_data::Kind;
use dagbind_schema::{Structure, Tuple, TypeDef, TypeRef, Union};

use crate::error::EmitError;
use crate::unit::{Binding, UnitContext};

/// Package carrying the node contract (`Node`, `Kind`, `NodeError`, `Maybe`).
pub const DATA_PKG: &str = "dagbind_data";
/// Package carrying the type IR (`TypeDef`, `Field`).
pub const SCHEMA_PKG: &str = "dagbind_schema";
/// Package carrying the generic value types primitives decode into.
pub const VALUES_PKG: &str = "dagbind_values";

pub(crate) fn emit_binding(
    ctx: &mut UnitContext,
    binding: &Binding,
    out: &mut String,
) -> Result<(), EmitError> {
    match &binding.def {
        TypeDef::Primitive(kind) => emit_primitive(ctx, &binding.name, *kind, out),
        TypeDef::Tuple(tuple) => emit_tuple(ctx, &binding.name, tuple, out),
        TypeDef::Structure(st) => emit_structure(ctx, &binding.name, st, out),
        TypeDef::Any(members) => emit_union(ctx, &binding.name, members, out),
        TypeDef::Ref(target) => emit_alias(ctx, &binding.name, target, out),
    }
}

/// The generic value type a primitive slot or field decodes into.
fn value_type(ctx: &mut UnitContext, type_name: &str, kind: Kind) -> Result<String, EmitError> {
    let symbol = match kind {
        Kind::Null => "Null",
        Kind::Bool => "Bool",
        Kind::Integer => "Int",
        Kind::Float => "Float",
        Kind::String => "Str",
        Kind::Bytes => "Bytes",
        Kind::Link => "LinkNode",
        Kind::List | Kind::Map => {
            return Err(EmitError::NotAScalar {
                type_name: type_name.to_owned(),
                kind,
            });
        }
    };
    Ok(ctx.refer_to(VALUES_PKG, symbol))
}

/// The Rust type a slot or field is stored as. Composite shapes must be named
/// bindings referenced via `TypeDef::Ref`.
fn field_type(ctx: &mut UnitContext, type_name: &str, def: &TypeDef) -> Result<String, EmitError> {
    match def {
        TypeDef::Primitive(kind) => value_type(ctx, type_name, *kind),
        TypeDef::Ref(target) => Ok(ctx.refer_to(&target.package, &target.name)),
        _ => Err(EmitError::AnonymousComposite {
            type_name: type_name.to_owned(),
        }),
    }
}

/// Render a `TypeDef` constructor expression for a `def()` body.
fn render_def(ctx: &mut UnitContext, def: &TypeDef) -> String {
    let td = ctx.refer_to(SCHEMA_PKG, "TypeDef");
    match def {
        TypeDef::Primitive(kind) => {
            let k = ctx.refer_to(DATA_PKG, "Kind");
            format!("{td}::Primitive({k}::{})", kind.name())
        }
        TypeDef::Ref(target) => {
            format!("{td}::reference(\"{}\", \"{}\")", target.package, target.name)
        }
        TypeDef::Tuple(tuple) => {
            let slots: Vec<String> = tuple.iter().map(|s| render_def(ctx, s)).collect();
            format!("{td}::tuple(vec![{}])", slots.join(", "))
        }
        TypeDef::Structure(st) => {
            let field = ctx.refer_to(SCHEMA_PKG, "Field");
            let fields: Vec<String> = st
                .fields
                .iter()
                .map(|f| {
                    let ctor = if f.optional { "optional" } else { "new" };
                    let ty = render_def(ctx, &f.ty);
                    format!("{field}::{ctor}(\"{}\", {ty})", f.name)
                })
                .collect();
            format!("{td}::structure(vec![{}])", fields.join(", "))
        }
        TypeDef::Any(u) => {
            let members: Vec<String> = u.members.iter().map(|m| render_def(ctx, m)).collect();
            format!("{td}::any(vec![{}])", members.join(", "))
        }
    }
}

fn emit_alias(
    ctx: &mut UnitContext,
    name: &str,
    target: &TypeRef,
    out: &mut String,
) -> Result<(), EmitError> {
    let target = ctx.refer_to(&target.package, &target.name);
    out.push_str(&format!("pub type {name} = {target};\n\n"));
    Ok(())
}

fn emit_primitive(
    ctx: &mut UnitContext,
    name: &str,
    kind: Kind,
    out: &mut String,
) -> Result<(), EmitError> {
    if kind == Kind::Null {
        return emit_null_primitive(ctx, name, out);
    }
    // (rust storage, accessor, accessor return, accessor body, parse suffix)
    let parts = match kind {
        Kind::Bool => ("bool".to_owned(), "as_bool", "bool".to_owned(), "self.0", ""),
        Kind::Integer => ("i64".to_owned(), "as_int", "i64".to_owned(), "self.0", ""),
        Kind::Float => ("f64".to_owned(), "as_float", "f64".to_owned(), "self.0", ""),
        Kind::String => (
            "String".to_owned(),
            "as_string",
            "&str".to_owned(),
            "&self.0",
            ".to_owned()",
        ),
        Kind::Bytes => (
            "Vec<u8>".to_owned(),
            "as_bytes",
            "&[u8]".to_owned(),
            "&self.0",
            ".to_vec()",
        ),
        Kind::Link => {
            let link = ctx.refer_to(DATA_PKG, "Link");
            (link.clone(), "as_link", format!("&{link}"), "&self.0", ".clone()")
        }
        Kind::Null | Kind::List | Kind::Map => {
            return Err(EmitError::NotAScalar {
                type_name: name.to_owned(),
                kind,
            });
        }
    };
    let (rust_ty, accessor, ret_ty, own_expr, post) = parts;
    let td = ctx.refer_to(SCHEMA_PKG, "TypeDef");
    let def_expr = render_def(ctx, &TypeDef::Primitive(kind));
    let node = ctx.refer_to(DATA_PKG, "Node");
    let result = ctx.refer_to(DATA_PKG, "Result");
    let err = ctx.refer_to(DATA_PKG, "NodeError");
    let k = ctx.refer_to(DATA_PKG, "Kind");
    let kname = kind.name();

    out.push_str(&format!("pub struct {name}(pub {rust_ty});\n\n"));
    out.push_str(&format!("impl {name} {{\n"));
    out.push_str(&format!("    pub fn def() -> {td} {{\n"));
    out.push_str(&format!("        {def_expr}\n"));
    out.push_str("    }\n\n");
    out.push_str(&format!(
        "    pub fn parse(n: &dyn {node}) -> {result}<Self> {{\n"
    ));
    out.push_str(&format!("        if n.kind() != {k}::{kname} {{\n"));
    out.push_str(&format!("            return Err({err}::NotApplicable);\n"));
    out.push_str("        }\n");
    out.push_str(&format!("        Ok(Self(n.{accessor}()?{post}))\n"));
    out.push_str("    }\n");
    out.push_str("}\n\n");
    out.push_str(&format!("impl {node} for {name} {{\n"));
    out.push_str(&format!("    fn kind(&self) -> {k} {{\n"));
    out.push_str(&format!("        {k}::{kname}\n"));
    out.push_str("    }\n\n");
    out.push_str(&format!(
        "    fn {accessor}(&self) -> {result}<{ret_ty}> {{\n"
    ));
    out.push_str(&format!("        Ok({own_expr})\n"));
    out.push_str("    }\n");
    out.push_str("}\n\n");
    Ok(())
}

fn emit_null_primitive(
    ctx: &mut UnitContext,
    name: &str,
    out: &mut String,
) -> Result<(), EmitError> {
    let td = ctx.refer_to(SCHEMA_PKG, "TypeDef");
    let def_expr = render_def(ctx, &TypeDef::Primitive(Kind::Null));
    let node = ctx.refer_to(DATA_PKG, "Node");
    let result = ctx.refer_to(DATA_PKG, "Result");
    let err = ctx.refer_to(DATA_PKG, "NodeError");
    let k = ctx.refer_to(DATA_PKG, "Kind");

    out.push_str(&format!("pub struct {name};\n\n"));
    out.push_str(&format!("impl {name} {{\n"));
    out.push_str(&format!("    pub fn def() -> {td} {{\n"));
    out.push_str(&format!("        {def_expr}\n"));
    out.push_str("    }\n\n");
    out.push_str(&format!(
        "    pub fn parse(n: &dyn {node}) -> {result}<Self> {{\n"
    ));
    out.push_str(&format!("        if n.kind() != {k}::Null {{\n"));
    out.push_str(&format!("            return Err({err}::NotApplicable);\n"));
    out.push_str("        }\n");
    out.push_str("        Ok(Self)\n");
    out.push_str("    }\n");
    out.push_str("}\n\n");
    out.push_str(&format!("impl {node} for {name} {{\n"));
    out.push_str(&format!("    fn kind(&self) -> {k} {{\n"));
    out.push_str(&format!("        {k}::Null\n"));
    out.push_str("    }\n\n");
    out.push_str("    fn is_null(&self) -> bool {\n");
    out.push_str("        true\n");
    out.push_str("    }\n");
    out.push_str("}\n\n");
    Ok(())
}

fn emit_tuple(
    ctx: &mut UnitContext,
    name: &str,
    tuple: &Tuple,
    out: &mut String,
) -> Result<(), EmitError> {
    // One per-slot template, applied uniformly for every arity including zero.
    let slot_types: Vec<String> = tuple
        .iter()
        .map(|slot| field_type(ctx, name, slot))
        .collect::<Result<_, _>>()?;
    let arity = slot_types.len();

    let td = ctx.refer_to(SCHEMA_PKG, "TypeDef");
    let def_expr = render_def(ctx, &TypeDef::Tuple(tuple.clone()));
    let node = ctx.refer_to(DATA_PKG, "Node");
    let result = ctx.refer_to(DATA_PKG, "Result");
    let err = ctx.refer_to(DATA_PKG, "NodeError");
    let k = ctx.refer_to(DATA_PKG, "Kind");

    if arity == 0 {
        out.push_str(&format!("pub struct {name}();\n\n"));
    } else {
        let decls: Vec<String> = slot_types.iter().map(|t| format!("pub {t}")).collect();
        out.push_str(&format!("pub struct {name}({});\n\n", decls.join(", ")));
    }

    out.push_str(&format!("impl {name} {{\n"));
    out.push_str(&format!("    pub fn def() -> {td} {{\n"));
    out.push_str(&format!("        {def_expr}\n"));
    out.push_str("    }\n\n");
    out.push_str(&format!(
        "    pub fn parse(n: &dyn {node}) -> {result}<Self> {{\n"
    ));
    out.push_str(&format!("        if n.kind() != {k}::List {{\n"));
    out.push_str(&format!("            return Err({err}::NotApplicable);\n"));
    out.push_str("        }\n");
    out.push_str(&format!("        if n.length() != {arity} {{\n"));
    out.push_str(&format!(
        "            return Err({err}::ArityMismatch {{ expected: {arity}, found: n.length() }});\n"
    ));
    out.push_str("        }\n");
    if arity == 0 {
        out.push_str("        Ok(Self())\n");
    } else {
        out.push_str("        Ok(Self(\n");
        for (index, slot_ty) in slot_types.iter().enumerate() {
            out.push_str(&format!(
                "            {slot_ty}::parse(n.lookup_by_index({index})?).map_err(|e| {err}::at_slot({index}, e))?,\n"
            ));
        }
        out.push_str("        ))\n");
    }
    out.push_str("    }\n");
    out.push_str("}\n\n");

    out.push_str(&format!("impl {node} for {name} {{\n"));
    out.push_str(&format!("    fn kind(&self) -> {k} {{\n"));
    out.push_str(&format!("        {k}::List\n"));
    out.push_str("    }\n\n");
    out.push_str("    fn length(&self) -> i64 {\n");
    out.push_str(&format!("        {arity}\n"));
    out.push_str("    }\n");
    if arity > 0 {
        let list_iter = ctx.refer_to(DATA_PKG, "ListIter");
        out.push_str("\n");
        out.push_str(&format!(
            "    fn lookup_by_index(&self, index: usize) -> {result}<&dyn {node}> {{\n"
        ));
        out.push_str("        match index {\n");
        for index in 0..arity {
            out.push_str(&format!("            {index} => Ok(&self.{index}),\n"));
        }
        out.push_str(&format!("            _ => Err({err}::NotApplicable),\n"));
        out.push_str("        }\n");
        out.push_str("    }\n\n");
        out.push_str(&format!(
            "    fn list_iterator(&self) -> {list_iter}<'_> {{\n"
        ));
        let refs: Vec<String> = (0..arity).map(|i| format!("&self.{i}")).collect();
        out.push_str(&format!(
            "        let slots: [&dyn {node}; {arity}] = [{}];\n",
            refs.join(", ")
        ));
        out.push_str("        Box::new(slots.into_iter().enumerate())\n");
        out.push_str("    }\n");
    }
    out.push_str("}\n\n");
    Ok(())
}

fn emit_structure(
    ctx: &mut UnitContext,
    name: &str,
    st: &Structure,
    out: &mut String,
) -> Result<(), EmitError> {
    let field_types: Vec<String> = st
        .fields
        .iter()
        .map(|f| field_type(ctx, name, &f.ty))
        .collect::<Result<_, _>>()?;

    let td = ctx.refer_to(SCHEMA_PKG, "TypeDef");
    let def_expr = render_def(ctx, &TypeDef::Structure(st.clone()));
    let node = ctx.refer_to(DATA_PKG, "Node");
    let result = ctx.refer_to(DATA_PKG, "Result");
    let err = ctx.refer_to(DATA_PKG, "NodeError");
    let k = ctx.refer_to(DATA_PKG, "Kind");
    let has_optional = st.fields.iter().any(|f| f.optional);
    let maybe = if has_optional {
        ctx.refer_to(DATA_PKG, "Maybe")
    } else {
        String::new()
    };
    let required_count = st.fields.iter().filter(|f| !f.optional).count();

    if st.fields.is_empty() {
        out.push_str(&format!("pub struct {name} {{}}\n\n"));
    } else {
        out.push_str(&format!("pub struct {name} {{\n"));
        for (field, ty) in st.fields.iter().zip(&field_types) {
            if field.optional {
                out.push_str(&format!("    pub {}: {maybe}<{ty}>,\n", field.name));
            } else {
                out.push_str(&format!("    pub {}: {ty},\n", field.name));
            }
        }
        out.push_str("}\n\n");
    }

    out.push_str(&format!("impl {name} {{\n"));
    out.push_str(&format!("    pub fn def() -> {td} {{\n"));
    out.push_str(&format!("        {def_expr}\n"));
    out.push_str("    }\n\n");
    out.push_str(&format!(
        "    pub fn parse(n: &dyn {node}) -> {result}<Self> {{\n"
    ));
    out.push_str(&format!("        if n.kind() != {k}::Map {{\n"));
    out.push_str(&format!("            return Err({err}::NotApplicable);\n"));
    out.push_str("        }\n");
    if st.fields.is_empty() {
        out.push_str("        Ok(Self {})\n");
    } else {
        out.push_str("        Ok(Self {\n");
        // Declared field order drives decode lookup order.
        for (field, ty) in st.fields.iter().zip(&field_types) {
            let fname = &field.name;
            out.push_str(&format!(
                "            {fname}: match n.lookup_by_string(\"{fname}\") {{\n"
            ));
            if field.optional {
                out.push_str(&format!(
                    "                Ok(v) => {maybe}::Value({ty}::parse(v).map_err(|e| {err}::at_field(\"{fname}\", e))?),\n"
                ));
                out.push_str(&format!("                Err(_) => {maybe}::Absent,\n"));
            } else {
                out.push_str(&format!(
                    "                Ok(v) => {ty}::parse(v).map_err(|e| {err}::at_field(\"{fname}\", e))?,\n"
                ));
                out.push_str(&format!(
                    "                Err(_) => return Err({err}::MissingRequiredField {{ field: \"{fname}\".to_owned() }}),\n"
                ));
            }
            out.push_str("            },\n");
        }
        out.push_str("        })\n");
    }
    out.push_str("    }\n");
    out.push_str("}\n\n");

    out.push_str(&format!("impl {node} for {name} {{\n"));
    out.push_str(&format!("    fn kind(&self) -> {k} {{\n"));
    out.push_str(&format!("        {k}::Map\n"));
    out.push_str("    }\n\n");
    out.push_str("    fn length(&self) -> i64 {\n");
    if has_optional {
        out.push_str(&format!("        let mut len = {required_count}i64;\n"));
        for field in st.fields.iter().filter(|f| f.optional) {
            out.push_str(&format!(
                "        if let {maybe}::Value(_) = &self.{} {{\n",
                field.name
            ));
            out.push_str("            len += 1;\n");
            out.push_str("        }\n");
        }
        out.push_str("        len\n");
    } else {
        out.push_str(&format!("        {required_count}\n"));
    }
    out.push_str("    }\n");
    if !st.fields.is_empty() {
        let map_iter = ctx.refer_to(DATA_PKG, "MapIter");
        out.push_str("\n");
        out.push_str(&format!(
            "    fn lookup_by_string(&self, key: &str) -> {result}<&dyn {node}> {{\n"
        ));
        out.push_str("        match key {\n");
        for field in &st.fields {
            let fname = &field.name;
            if field.optional {
                out.push_str(&format!("            \"{fname}\" => match &self.{fname} {{\n"));
                out.push_str(&format!("                {maybe}::Value(v) => Ok(v),\n"));
                out.push_str(&format!(
                    "                {maybe}::Absent => Err({err}::NotApplicable),\n"
                ));
                out.push_str("            },\n");
            } else {
                out.push_str(&format!("            \"{fname}\" => Ok(&self.{fname}),\n"));
            }
        }
        out.push_str(&format!("            _ => Err({err}::NotApplicable),\n"));
        out.push_str("        }\n");
        out.push_str("    }\n\n");
        out.push_str(&format!("    fn map_iterator(&self) -> {map_iter}<'_> {{\n"));
        out.push_str(&format!(
            "        let mut entries: Vec<(&str, &dyn {node})> = Vec::new();\n"
        ));
        // Declared field order drives encode key emission order.
        for field in &st.fields {
            let fname = &field.name;
            if field.optional {
                out.push_str(&format!(
                    "        if let {maybe}::Value(v) = &self.{fname} {{\n"
                ));
                out.push_str(&format!("            entries.push((\"{fname}\", v));\n"));
                out.push_str("        }\n");
            } else {
                out.push_str(&format!(
                    "        entries.push((\"{fname}\", &self.{fname}));\n"
                ));
            }
        }
        out.push_str("        Box::new(entries.into_iter())\n");
        out.push_str("    }\n");
    }
    out.push_str("}\n\n");
    Ok(())
}

fn emit_union(
    ctx: &mut UnitContext,
    name: &str,
    members: &Union,
    out: &mut String,
) -> Result<(), EmitError> {
    let member_types: Vec<String> = members
        .members
        .iter()
        .map(|m| field_type(ctx, name, m))
        .collect::<Result<_, _>>()?;
    let variants = variant_names(name, &members.members)?;

    let td = ctx.refer_to(SCHEMA_PKG, "TypeDef");
    let def_expr = render_def(ctx, &TypeDef::Any(members.clone()));
    let node = ctx.refer_to(DATA_PKG, "Node");
    let result = ctx.refer_to(DATA_PKG, "Result");
    let err = ctx.refer_to(DATA_PKG, "NodeError");
    let k = ctx.refer_to(DATA_PKG, "Kind");
    let link = ctx.refer_to(DATA_PKG, "Link");
    let segment = ctx.refer_to(DATA_PKG, "Segment");
    let map_iter = ctx.refer_to(DATA_PKG, "MapIter");
    let list_iter = ctx.refer_to(DATA_PKG, "ListIter");

    out.push_str(&format!("pub enum {name} {{\n"));
    for (variant, ty) in variants.iter().zip(&member_types) {
        out.push_str(&format!("    {variant}({ty}),\n"));
    }
    out.push_str("}\n\n");

    out.push_str(&format!("impl {name} {{\n"));
    out.push_str(&format!("    pub fn def() -> {td} {{\n"));
    out.push_str(&format!("        {def_expr}\n"));
    out.push_str("    }\n\n");
    out.push_str(&format!(
        "    pub fn parse(n: &dyn {node}) -> {result}<Self> {{\n"
    ));
    // Members are tried in registration order; first success wins.
    for (variant, ty) in variants.iter().zip(&member_types) {
        out.push_str(&format!("        if let Ok(v) = {ty}::parse(n) {{\n"));
        out.push_str(&format!("            return Ok(Self::{variant}(v));\n"));
        out.push_str("        }\n");
    }
    out.push_str(&format!("        Err({err}::NoMatchingUnionMember)\n"));
    out.push_str("    }\n\n");
    out.push_str(&format!("    fn inner(&self) -> &dyn {node} {{\n"));
    out.push_str("        match self {\n");
    for variant in &variants {
        out.push_str(&format!("            Self::{variant}(v) => v,\n"));
    }
    out.push_str("        }\n");
    out.push_str("    }\n");
    out.push_str("}\n\n");

    out.push_str(&format!("impl {node} for {name} {{\n"));
    out.push_str(&format!("    fn kind(&self) -> {k} {{\n"));
    out.push_str("        self.inner().kind()\n");
    out.push_str("    }\n\n");
    for (method, ret) in [
        ("as_bool", "bool".to_owned()),
        ("as_int", "i64".to_owned()),
        ("as_float", "f64".to_owned()),
        ("as_string", "&str".to_owned()),
        ("as_bytes", "&[u8]".to_owned()),
        ("as_link", format!("&{link}")),
    ] {
        out.push_str(&format!(
            "    fn {method}(&self) -> {result}<{ret}> {{\n"
        ));
        out.push_str(&format!("        self.inner().{method}()\n"));
        out.push_str("    }\n\n");
    }
    out.push_str(&format!(
        "    fn lookup_by_string(&self, key: &str) -> {result}<&dyn {node}> {{\n"
    ));
    out.push_str("        self.inner().lookup_by_string(key)\n");
    out.push_str("    }\n\n");
    out.push_str(&format!(
        "    fn lookup_by_index(&self, index: usize) -> {result}<&dyn {node}> {{\n"
    ));
    out.push_str("        self.inner().lookup_by_index(index)\n");
    out.push_str("    }\n\n");
    out.push_str(&format!(
        "    fn lookup_by_segment(&self, segment: &{segment}) -> {result}<&dyn {node}> {{\n"
    ));
    out.push_str("        self.inner().lookup_by_segment(segment)\n");
    out.push_str("    }\n\n");
    out.push_str(&format!("    fn map_iterator(&self) -> {map_iter}<'_> {{\n"));
    out.push_str("        self.inner().map_iterator()\n");
    out.push_str("    }\n\n");
    out.push_str(&format!(
        "    fn list_iterator(&self) -> {list_iter}<'_> {{\n"
    ));
    out.push_str("        self.inner().list_iterator()\n");
    out.push_str("    }\n\n");
    out.push_str("    fn length(&self) -> i64 {\n");
    out.push_str("        self.inner().length()\n");
    out.push_str("    }\n\n");
    out.push_str("    fn is_absent(&self) -> bool {\n");
    out.push_str("        self.inner().is_absent()\n");
    out.push_str("    }\n\n");
    out.push_str("    fn is_null(&self) -> bool {\n");
    out.push_str("        self.inner().is_null()\n");
    out.push_str("    }\n");
    out.push_str("}\n\n");
    Ok(())
}

/// Variant names for a union: the referenced type's name, or the kind name
/// for primitive members, made unique by an index suffix on collision.
fn variant_names(type_name: &str, members: &[TypeDef]) -> Result<Vec<String>, EmitError> {
    let mut names: Vec<String> = Vec::with_capacity(members.len());
    for member in members {
        let base = match member {
            TypeDef::Primitive(kind) => kind.name().to_owned(),
            TypeDef::Ref(target) => target.name.clone(),
            _ => {
                return Err(EmitError::AnonymousComposite {
                    type_name: type_name.to_owned(),
                });
            }
        };
        let mut candidate = base.clone();
        let mut suffix = 2;
        while names.contains(&candidate) {
            candidate = format!("{base}{suffix}");
            suffix += 1;
        }
        names.push(candidate);
    }
    Ok(names)
}

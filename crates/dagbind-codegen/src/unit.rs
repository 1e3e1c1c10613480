//! Output unit assembly.

use std::fs;
use std::path::PathBuf;

use indexmap::IndexMap;

use dagbind_schema::TypeDef;

use crate::error::EmitError;
use crate::generate::{self, DATA_PKG};

/// One type to generate: a name and its shape.
#[derive(Debug, Clone)]
pub struct Binding {
    pub name: String,
    pub def: TypeDef,
}

impl Binding {
    pub fn new(name: &str, def: TypeDef) -> Self {
        Self {
            name: name.to_owned(),
            def,
        }
    }
}

/// One target package/file grouping a batch of bindings.
#[derive(Debug, Clone)]
pub struct Unit {
    pub file_path: PathBuf,
    pub package: String,
    pub bindings: Vec<Binding>,
}

impl Unit {
    pub fn new(file_path: impl Into<PathBuf>, package: &str, bindings: Vec<Binding>) -> Self {
        Self {
            file_path: file_path.into(),
            package: package.to_owned(),
            bindings,
        }
    }

    /// Assemble the unit's source text.
    ///
    /// Pass 1 generates every binding body into a buffer, growing the import
    /// table as references are made. Pass 2 synthesizes the header and
    /// concatenates it with the bodies in input order. Any pass-1 failure
    /// aborts before anything is assembled.
    pub fn generate(&self) -> Result<String, EmitError> {
        let mut ctx = UnitContext::new(&self.package);
        let mut bodies = String::new();
        for binding in &self.bindings {
            generate::emit_binding(&mut ctx, binding, &mut bodies)?;
        }

        let mut out = String::new();
        out.push_str(&format!(
            "//! Generated bindings for package `{}`.\n",
            self.package
        ));
        if !ctx.is_import_free() {
            out.push('\n');
            for (package, alias) in ctx.imports() {
                out.push_str(&format!("use {package} as {alias};\n"));
            }
            if ctx.has_import(DATA_PKG) {
                // Node methods are called through method syntax in the
                // generated bodies, so the trait itself must be in scope.
                out.push_str(&format!("use {DATA_PKG}::Node as _;\n"));
            }
        }
        out.push('\n');
        out.push_str(&bodies);

        // Exactly one trailing newline.
        out.truncate(out.trim_end().len());
        out.push('\n');
        Ok(out)
    }

    /// Generate and persist the unit.
    ///
    /// The file is written only after the whole unit generates successfully;
    /// missing parent directories are created first.
    pub fn build(&self) -> Result<(), EmitError> {
        let body = self.generate()?;
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent).map_err(|e| EmitError::Io {
                path: self.file_path.clone(),
                source: e,
            })?;
        }
        fs::write(&self.file_path, body).map_err(|e| EmitError::Io {
            path: self.file_path.clone(),
            source: e,
        })
    }
}

/// Per-unit generation state: the owning package and its import table.
///
/// Each unit owns its table outright; there is no shared or global alias
/// counter, so distinct units can be generated concurrently.
#[derive(Debug)]
pub struct UnitContext {
    package: String,
    imports: IndexMap<String, String>,
}

impl UnitContext {
    pub fn new(package: &str) -> Self {
        Self {
            package: package.to_owned(),
            imports: IndexMap::new(),
        }
    }

    /// Render a reference to `symbol` in `package`.
    ///
    /// A reference to the unit's own package is unqualified. The first
    /// reference to an external package assigns the next sequential alias
    /// (`pd1`, `pd2`, ... in first-reference order); later references reuse
    /// it.
    pub fn refer_to(&mut self, package: &str, symbol: &str) -> String {
        match self.alias_for(package) {
            None => symbol.to_owned(),
            Some(alias) => format!("{alias}::{symbol}"),
        }
    }

    fn alias_for(&mut self, package: &str) -> Option<String> {
        if package == self.package {
            return None;
        }
        let next = self.imports.len() + 1;
        let alias = self
            .imports
            .entry(package.to_owned())
            .or_insert_with(|| format!("pd{next}"));
        Some(alias.clone())
    }

    /// Iterate imported packages in first-reference order.
    pub fn imports(&self) -> impl Iterator<Item = (&str, &str)> {
        self.imports.iter().map(|(p, a)| (p.as_str(), a.as_str()))
    }

    pub fn is_import_free(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn has_import(&self, package: &str) -> bool {
        self.imports.contains_key(package)
    }
}

//! Generation-time failures.
//!
//! A failure anywhere in a unit aborts that unit before anything is written,
//! carrying the offending type's name so the failing definition can be found.

use std::path::PathBuf;

use dagbind_data::Kind;

/// Generation-time failure for one output unit.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// Composite slot and field types must be named bindings referenced by
    /// name; an inline composite cannot be emitted.
    #[error("type `{type_name}` embeds an anonymous composite; give it a name and reference it")]
    AnonymousComposite { type_name: String },

    /// A primitive definition used a container kind.
    #[error("type `{type_name}` declares primitive kind {}, which is not a scalar", .kind.name())]
    NotAScalar { type_name: String, kind: Kind },

    /// Writing the assembled unit failed.
    #[error("writing unit `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

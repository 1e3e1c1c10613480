//! Decode-time failures.
//!
//! All failures are ordinary returned values. A nested failure is wrapped with
//! the field name or slot index it occurred at, so a caller can pinpoint the
//! offending position in the input tree.

/// Decode-time failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NodeError {
    /// Operation invalid for the node's actual kind.
    #[error("operation not applicable to this node kind")]
    NotApplicable,

    /// A required structure field is missing from the input map.
    #[error("missing required field `{field}`")]
    MissingRequiredField { field: String },

    /// Input list length does not equal the tuple's declared arity.
    #[error("list length {found} does not match tuple arity {expected}")]
    ArityMismatch { expected: usize, found: i64 },

    /// No registered union member matched the input node.
    #[error("no union member matched the input node")]
    NoMatchingUnionMember,

    /// A nested failure, attributed to the structure field it occurred at.
    #[error("at field `{field}`: {source}")]
    AtField {
        field: String,
        #[source]
        source: Box<NodeError>,
    },

    /// A nested failure, attributed to the tuple slot it occurred at.
    #[error("at slot {index}: {source}")]
    AtSlot {
        index: usize,
        #[source]
        source: Box<NodeError>,
    },
}

impl NodeError {
    /// Wrap a nested failure with the field it occurred at.
    pub fn at_field(field: &str, source: NodeError) -> Self {
        Self::AtField {
            field: field.to_owned(),
            source: Box::new(source),
        }
    }

    /// Wrap a nested failure with the slot index it occurred at.
    pub fn at_slot(index: usize, source: NodeError) -> Self {
        Self::AtSlot {
            index,
            source: Box::new(source),
        }
    }
}

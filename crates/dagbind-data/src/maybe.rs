//! Storage for optional structure fields.

/// An optional structure field: either absent from the encoded map or present
/// with a value.
///
/// Absence is a schema-level fact, distinct from [`crate::Kind::Null`]: an
/// absent field is omitted from the map entirely, while a null field is
/// present with an explicit null value. Both are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// Field omitted from the encoded map.
    Absent,
    /// Field present with a value.
    Value(T),
}

impl<T> Maybe<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Absent => None,
            Self::Value(v) => Some(v),
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            None => Self::Absent,
            Some(v) => Self::Value(v),
        }
    }
}

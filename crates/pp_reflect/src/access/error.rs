use alloc::string::String;
use core::fmt;

use thiserror::Error;

use crate::access::PathComponent;
use crate::info::ValueType;

// -----------------------------------------------------------------------------
// Error

/// Why a path string failed to tokenize.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedReason {
    #[error("the path is empty")]
    EmptyPath,

    #[error("empty segment")]
    EmptySegment,

    #[error("index must be one or more ASCII digits")]
    InvalidIndex,

    #[error("index does not fit in usize")]
    IndexOverflow,

    #[error("missing `]` after index")]
    UnclosedIndex,

    #[error("expected `.` or the end of the path after `]`")]
    TrailingCharacters,

    #[error("a path cannot start with an index")]
    LeadingIndex,
}

/// An error returned from resolving or assigning a path.
///
/// None of these are fatal: a failed read means "nothing to display", a
/// failed write means "edit rejected", and the graph is left untouched.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum AccessError {
    #[error("malformed path `{path}` at offset {offset}: {reason}")]
    MalformedPath {
        path: String,
        offset: usize,
        reason: MalformedReason,
    },

    #[error("type `{type_name}` has no member named `{name}`")]
    MemberNotFound { type_name: String, name: String },

    #[error("index {attempted} is out of range for a sequence of length {length}")]
    IndexOutOfRange { attempted: usize, length: usize },

    #[error("`{component}` is null, the rest of the path cannot be resolved")]
    NullIntermediate { component: PathComponent<'static> },

    #[error("the root is null")]
    NullRoot,

    #[error("a `{found}` cannot be stored in a slot of type `{expected}`")]
    TypeMismatch { expected: ValueType, found: String },

    #[error("the `{type_name}` reached through {} is a detached copy, writes into it would be lost", Via(.component))]
    UnaddressableContainer {
        type_name: String,
        component: Option<PathComponent<'static>>,
    },

    #[error("a `{type_name}` cannot be indexed")]
    NotIndexable { type_name: String },

    #[error("member `{name}` of `{type_name}` is read-only")]
    ReadOnlyMember { type_name: String, name: String },
}

struct Via<'a>(&'a Option<PathComponent<'static>>);

impl fmt::Display for Via<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(component) => write!(f, "`{component}`"),
            None => f.write_str("the root"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::AccessError;
    use crate::access::PathComponent;

    #[test]
    fn display() {
        let err = AccessError::UnaddressableContainer {
            type_name: "Vector2d".into(),
            component: Some(PathComponent::Named("velocity".into())),
        };
        assert_eq!(
            err.to_string(),
            "the `Vector2d` reached through `velocity` is a detached copy, writes into it would be lost"
        );

        let err = AccessError::NullIntermediate {
            component: PathComponent::Indexed(3),
        };
        assert_eq!(
            err.to_string(),
            "`Array.data[3]` is null, the rest of the path cannot be resolved"
        );

        let err = AccessError::IndexOutOfRange {
            attempted: 10,
            length: 3,
        };
        assert_eq!(
            err.to_string(),
            "index 10 is out of range for a sequence of length 3"
        );
    }
}

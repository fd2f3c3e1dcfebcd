use alloc::string::String;

use thiserror::Error;

use crate::info::ValueType;

// -----------------------------------------------------------------------------
// Error

/// An error returned while registering or instantiating a type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistryError {
    #[error("type `{0}` is already registered")]
    DuplicateType(String),

    #[error("type `{0}` is not registered")]
    UnknownType(String),

    #[error("`{name}` cannot derive from `{base}`: value types take no part in inheritance")]
    InvalidBase { name: String, base: String },

    #[error("member `{member}` is declared more than once on `{type_name}`")]
    DuplicateMember { type_name: String, member: String },

    #[error("field `{type_name}.{member}` holds a struct, but `{found}` is a reference type")]
    ExpectedValueType {
        type_name: String,
        member: String,
        found: String,
    },

    #[error("default value of `{type_name}.{member}` does not fit its type `{expected}`")]
    InvalidDefault {
        type_name: String,
        member: String,
        expected: ValueType,
    },

    #[error("default value of `{type_name}.{member}` holds an object or list, every instance would share it")]
    SharedDefault { type_name: String, member: String },
}

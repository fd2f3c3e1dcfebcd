//! Serialization of [`Value`] graphs.
//!
//! [`Value`] implements [`serde_core::Serialize`]:
//!
//! | value             | serialized as                                |
//! |-------------------|----------------------------------------------|
//! | `Null`            | unit                                         |
//! | scalars           | the matching native                          |
//! | structs, objects  | a map of visible stored fields, layout order |
//! | lists             | a sequence                                   |
//!
//! Private fields are included. Properties are not, they have no storage of
//! their own.
//!
//! Object graphs may contain cycles. Nesting deeper than
//! [`MAX_SERIALIZE_DEPTH`] is reported as a serializer error.
//!
//! [`Value`]: crate::value::Value

// -----------------------------------------------------------------------------
// Modules

mod ser;

// -----------------------------------------------------------------------------
// Exports

/// The deepest container nesting [`Value`](crate::value::Value) serializes.
pub const MAX_SERIALIZE_DEPTH: usize = 64;

//! Declarative descriptions of dynamic types.
//!
//! A [`TypeInfo`] names a type, states whether its instances have
//! [reference or value semantics](Semantics), optionally names a base type,
//! and lists the [members](MemberInfo) it declares. Descriptions are turned
//! into flattened layouts by the [`TypeRegistry`].
//!
//! [`TypeRegistry`]: crate::registry::TypeRegistry

// -----------------------------------------------------------------------------
// Modules

mod member_info;
mod type_info;
mod value_type;

// -----------------------------------------------------------------------------
// Exports

pub use member_info::{Getter, MemberInfo, MemberKind, Setter, Visibility};
pub use type_info::{Semantics, TypeInfo};
pub use value_type::ValueType;

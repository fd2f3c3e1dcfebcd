//! The untyped object graph walked by [`access`](crate::access).
//!
//! - [`Value`]: any value living in a slot.
//! - [`Composite`]: a typed bag of fields; held inline by [`Value::Struct`]
//!   (value semantics) or behind an [`ObjectRef`] (reference semantics).
//! - [`ObjectRef`]: a shared, interior-mutable [`Composite`].
//! - [`ListRef`]: a shared, interior-mutable sequence of values.
//!
//! Cloning a [`Value`] follows the semantics of what it holds: structs are
//! copied, objects and lists are shared.

// -----------------------------------------------------------------------------
// Modules

mod composite;
mod list;
mod object;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use composite::Composite;
pub use list::ListRef;
pub use object::ObjectRef;
pub use value::Value;

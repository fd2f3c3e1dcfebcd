//! Type registration and flattened member tables.
//!
//! Registering a [`TypeInfo`] walks its inheritance chain once and produces a
//! [`TypeLayout`]: every member the type can reach, its own and inherited,
//! indexed by name. Every later lookup on an instance of that type is a single
//! map probe on the cached layout.
//!
//! [`TypeInfo`]: crate::info::TypeInfo

// -----------------------------------------------------------------------------
// Modules

mod error;
mod type_layout;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use error::RegistryError;
pub use type_layout::{MemberSlot, SlotAccess, TypeLayout};
pub use type_registry::TypeRegistry;

//! Read and write values of an object graph through path strings.
//!
//! A path is a chain of member names separated by `.`, where the segment
//! `Array.data[N]` selects element `N` of the sequence named before it:
//!
//! ```text
//! position.x
//! items.Array.data[2].name
//! grid.Array.data[0].Array.data[3]
//! ```
//!
//! Reads copy the value found at the end of the path. Writes go to the live
//! storage of the terminal's owner. Structs have value semantics, so a struct
//! produced by a property getter is a detached copy: writing into it would
//! lose the write, and is rejected with [`AccessError::UnaddressableContainer`].
//!
//! There are three layers:
//!
//! - [`member`] and [`sequence`]: one step on one container.
//! - [`resolve_value`] and [`resolve_location`]: a walk over a parsed [`Path`].
//! - [`resolve`], [`assign`], [`PropertyAccess`] and [`PathAccess`]: the
//!   string-level facade.
//!
//! # Examples
//!
//! ```
//! use pp_reflect::access::{AccessError, PathAccess};
//! use pp_reflect::info::{MemberInfo, TypeInfo, ValueType};
//! use pp_reflect::registry::TypeRegistry;
//! use pp_reflect::value::Value;
//!
//! let mut registry = TypeRegistry::new();
//! registry
//!     .register(TypeInfo::value_type("Size").with_member(MemberInfo::field("w", ValueType::Int)))
//!     .unwrap();
//! registry
//!     .register(
//!         TypeInfo::object("Panel")
//!             .with_member(MemberInfo::field("bounds", ValueType::struct_of("Size")))
//!             .with_member(MemberInfo::property(
//!                 "size",
//!                 ValueType::struct_of("Size"),
//!                 |panel| panel.field("bounds").cloned().unwrap_or_default(),
//!                 None,
//!             )),
//!     )
//!     .unwrap();
//! let panel = registry.instantiate("Panel").unwrap();
//!
//! panel.set_path("bounds.w", 3).unwrap();
//! assert_eq!(panel.get_path("size.w"), Ok(Value::Int(3)));
//! assert!(matches!(
//!     panel.set_path("size.w", 5),
//!     Err(AccessError::UnaddressableContainer { .. })
//! ));
//! ```

// -----------------------------------------------------------------------------
// Modules

mod container;
mod error;
mod mutation;
mod path;
mod resolver;

pub mod member;
pub mod sequence;


// -----------------------------------------------------------------------------
// Exports

pub use container::{Extraction, Fetched};
pub use error::{AccessError, MalformedReason};
pub use mutation::{Mutation, PathAccess, PropertyAccess, assign, assign_with, resolve};
pub use path::{Path, PathComponent, PathParser};
pub use resolver::{Location, resolve_location, resolve_value};

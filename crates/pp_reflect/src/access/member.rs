//! Named member access on composites.
//!
//! Lookups go through the owner's cached [`TypeLayout`], so every member of
//! every ancestor is reachable whatever its visibility.
//!
//! [`TypeLayout`]: crate::registry::TypeLayout

use alloc::rc::Rc;
use alloc::string::ToString;

use crate::access::{AccessError, Extraction, Fetched, PathComponent};
use crate::registry::{MemberSlot, SlotAccess, TypeLayout};
use crate::value::{Composite, Value};

fn find<'l>(layout: &'l TypeLayout, name: &str) -> Result<&'l MemberSlot, AccessError> {
    layout
        .member(name)
        .ok_or_else(|| AccessError::MemberNotFound {
            type_name: layout.name().into(),
            name: name.into(),
        })
}

/// Reads the member `name` of `container`.
///
/// Stored fields are reported as [`Extraction::Storage`], property results
/// as [`Extraction::Copy`].
pub fn get(container: &Composite, name: &str) -> Result<Fetched, AccessError> {
    Ok(match find(container.layout(), name)?.access() {
        SlotAccess::Stored(index) => Fetched {
            value: container.slot(index).clone(),
            extraction: Extraction::Storage,
        },
        SlotAccess::Computed { get, .. } => Fetched {
            value: get(container),
            extraction: Extraction::Copy,
        },
    })
}

/// Checks that `container` has a member `name` without reading it.
pub fn probe(container: &Composite, name: &str) -> Result<(), AccessError> {
    find(container.layout(), name).map(|_| ())
}

/// Returns the storage of the stored field `name`.
///
/// Properties have no storage and yield [`AccessError::UnaddressableContainer`].
pub fn get_mut<'c>(container: &'c mut Composite, name: &str) -> Result<&'c mut Value, AccessError> {
    let layout = Rc::clone(container.layout());
    let slot = find(&layout, name)?;
    match slot.access() {
        SlotAccess::Stored(index) => Ok(container.slot_mut(index)),
        SlotAccess::Computed { .. } => Err(AccessError::UnaddressableContainer {
            type_name: slot.ty().to_string(),
            component: Some(PathComponent::Named(name.into()).into_owned()),
        }),
    }
}

/// Writes `value` into the member `name` of `container`.
///
/// Nothing is written unless the member exists, accepts the value's runtime
/// type and is writable.
pub fn set(container: &mut Composite, name: &str, value: Value) -> Result<(), AccessError> {
    let layout = Rc::clone(container.layout());
    let slot = find(&layout, name)?;

    if !slot.ty().accepts(&value) {
        return Err(AccessError::TypeMismatch {
            expected: slot.ty().clone(),
            found: value.type_name().into_owned(),
        });
    }

    match slot.access() {
        SlotAccess::Stored(index) => *container.slot_mut(index) = value,
        SlotAccess::Computed { set: Some(set), .. } => set(container, value),
        SlotAccess::Computed { set: None, .. } => {
            return Err(AccessError::ReadOnlyMember {
                type_name: layout.name().into(),
                name: name.into(),
            });
        }
    }
    Ok(())
}

//! Indexed element access on sequences.
//!
//! Bounds are `0 <= index < len`. Sequences never grow through a path:
//! writing one past the end is an error, not an append.

use crate::access::AccessError;
use crate::info::ValueType;
use crate::value::Value;

#[inline]
fn out_of_range(attempted: usize, length: usize) -> AccessError {
    AccessError::IndexOutOfRange { attempted, length }
}

/// Returns a copy of the element at `index`.
pub fn get(items: &[Value], index: usize) -> Result<Value, AccessError> {
    items
        .get(index)
        .cloned()
        .ok_or_else(|| out_of_range(index, items.len()))
}

/// Checks that `index` is in bounds without reading the element.
pub fn probe(items: &[Value], index: usize) -> Result<(), AccessError> {
    if index < items.len() {
        Ok(())
    } else {
        Err(out_of_range(index, items.len()))
    }
}

/// Returns the storage of the element at `index`.
pub fn get_mut(items: &mut [Value], index: usize) -> Result<&mut Value, AccessError> {
    let length = items.len();
    items
        .get_mut(index)
        .ok_or_else(|| out_of_range(index, length))
}

/// Replaces the element at `index`, checking it against `element` first.
pub fn set(
    element: &ValueType,
    items: &mut [Value],
    index: usize,
    value: Value,
) -> Result<(), AccessError> {
    let slot = get_mut(items, index)?;
    if !element.accepts(&value) {
        return Err(AccessError::TypeMismatch {
            expected: element.clone(),
            found: value.type_name().into_owned(),
        });
    }
    *slot = value;
    Ok(())
}

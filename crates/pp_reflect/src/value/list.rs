use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Ref, RefCell, RefMut};
use core::fmt;

use crate::info::ValueType;
use crate::value::Value;

// -----------------------------------------------------------------------------
// ListRef

/// A shared, ordered sequence of values with a declared element type.
///
/// Clones point at the same storage.
///
/// # Examples
///
/// ```
/// use pp_reflect::info::ValueType;
/// use pp_reflect::value::{ListRef, Value};
///
/// let list = ListRef::from_values(ValueType::Int, [Value::Int(1), Value::Int(2)]).unwrap();
/// assert_eq!(list.len(), 2);
///
/// // Elements must fit the element type.
/// assert_eq!(list.push(Value::Float(3.0)), Err(Value::Float(3.0)));
/// assert_eq!(list.get(1), Some(Value::Int(2)));
/// ```
#[derive(Clone)]
pub struct ListRef(Rc<ListCell>);

struct ListCell {
    element: ValueType,
    items: RefCell<Vec<Value>>,
}

impl ListRef {
    /// Creates an empty list.
    pub fn new(element: ValueType) -> Self {
        Self(Rc::new(ListCell {
            element,
            items: RefCell::new(Vec::new()),
        }))
    }

    /// Creates a list holding `values`.
    ///
    /// Returns the first value rejected by `element`.
    pub fn from_values(
        element: ValueType,
        values: impl IntoIterator<Item = Value>,
    ) -> Result<Self, Value> {
        let list = Self::new(element);
        for value in values {
            list.push(value)?;
        }
        Ok(list)
    }

    /// Returns the declared element type.
    #[inline]
    pub fn element(&self) -> &ValueType {
        &self.0.element
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.items.borrow().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of the element at `index`.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.items.borrow().get(index).cloned()
    }

    /// Appends a value, handing it back if the element type rejects it.
    pub fn push(&self, value: Value) -> Result<(), Value> {
        if !self.0.element.accepts(&value) {
            return Err(value);
        }
        self.0.items.borrow_mut().push(value);
        Ok(())
    }

    /// Immutably borrows the elements.
    ///
    /// # Panics
    ///
    /// Panics if the list is currently mutably borrowed.
    #[inline]
    pub fn borrow(&self) -> Ref<'_, [Value]> {
        Ref::map(self.0.items.borrow(), Vec::as_slice)
    }

    #[inline]
    pub(crate) fn borrow_mut(&self) -> RefMut<'_, Vec<Value>> {
        self.0.items.borrow_mut()
    }

    /// Returns `true` if both handles point at the same list.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ListRef {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ListRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "list<{}>[{}]@{:p}",
            self.0.element,
            self.len(),
            Rc::as_ptr(&self.0)
        )
    }
}

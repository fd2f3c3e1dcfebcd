use alloc::rc::Rc;
use core::cell::{Ref, RefCell, RefMut};
use core::fmt;

use crate::registry::TypeLayout;
use crate::value::Composite;

// -----------------------------------------------------------------------------
// ObjectRef

/// A shared handle to a [`Composite`] with reference semantics.
///
/// Clones point at the same storage; a write through any clone is seen by all.
/// The layout is kept outside the cell so type checks never need a borrow.
#[derive(Clone)]
pub struct ObjectRef(Rc<ObjectCell>);

struct ObjectCell {
    layout: Rc<TypeLayout>,
    data: RefCell<Composite>,
}

impl ObjectRef {
    #[inline]
    pub(crate) fn new(data: Composite) -> Self {
        Self(Rc::new(ObjectCell {
            layout: Rc::clone(data.layout()),
            data: RefCell::new(data),
        }))
    }

    /// Returns the layout of this object's type.
    #[inline]
    pub fn layout(&self) -> &Rc<TypeLayout> {
        &self.0.layout
    }

    #[inline]
    pub fn type_name(&self) -> &str {
        self.0.layout.name()
    }

    /// Immutably borrows the object's fields.
    ///
    /// # Panics
    ///
    /// Panics if the object is currently mutably borrowed.
    #[inline]
    pub fn borrow(&self) -> Ref<'_, Composite> {
        self.0.data.borrow()
    }

    #[inline]
    pub(crate) fn borrow_mut(&self) -> RefMut<'_, Composite> {
        self.0.data.borrow_mut()
    }

    /// Returns `true` if both handles point at the same object.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ObjectRef {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

// Object graphs may be cyclic, so only the identity is printed.
impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:p}", self.type_name(), Rc::as_ptr(&self.0))
    }
}

//! The capability interface shared by every container kind.
//!
//! The resolver is written once against [`ContainerRef`] and
//! [`ContainerMut`]; only this module knows which concrete value backs them.

use alloc::format;
use core::cell::Ref;
use core::ops::Deref;

use crate::access::{AccessError, PathComponent, member, sequence};
use crate::info::ValueType;
use crate::value::{Composite, Value};

// -----------------------------------------------------------------------------
// Fetched

/// How a fetched value relates to its container's storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// Read from a stored field or sequence element.
    Storage,
    /// Produced by a property getter, detached from any storage.
    Copy,
}

/// A value read through one [`PathComponent`].
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    pub value: Value,
    pub extraction: Extraction,
}

// -----------------------------------------------------------------------------
// ContainerRef

pub(crate) enum Members<'v> {
    Inline(&'v Composite),
    Shared(Ref<'v, Composite>),
}

impl Deref for Members<'_> {
    type Target = Composite;

    #[inline]
    fn deref(&self) -> &Composite {
        match self {
            Self::Inline(composite) => composite,
            Self::Shared(composite) => composite,
        }
    }
}

/// Read access to a container: a composite or a sequence.
pub(crate) enum ContainerRef<'v> {
    Members(Members<'v>),
    Sequence {
        element: &'v ValueType,
        items: Ref<'v, [Value]>,
    },
}

impl<'v> ContainerRef<'v> {
    /// Opens `value` as the container `next` is applied to.
    ///
    /// `reached_by` is the component that produced `value`, `None` for the root.
    pub(crate) fn open(
        value: &'v Value,
        next: &PathComponent<'_>,
        reached_by: Option<&PathComponent<'_>>,
    ) -> Result<Self, AccessError> {
        match value {
            Value::Struct(composite) => Ok(Self::Members(Members::Inline(composite))),
            Value::Object(object) => Ok(Self::Members(Members::Shared(object.borrow()))),
            Value::List(list) => Ok(Self::Sequence {
                element: list.element(),
                items: list.borrow(),
            }),
            Value::Null => Err(match reached_by {
                Some(component) => AccessError::NullIntermediate {
                    component: component.clone().into_owned(),
                },
                None => AccessError::NullRoot,
            }),
            scalar => Err(next.mismatch(&scalar.type_name())),
        }
    }

    /// Reads the value behind `component`.
    pub(crate) fn fetch(&self, component: &PathComponent<'_>) -> Result<Fetched, AccessError> {
        match (self, component) {
            (Self::Members(composite), PathComponent::Named(name)) => member::get(composite, name),
            (Self::Sequence { items, .. }, &PathComponent::Indexed(index)) => {
                sequence::get(items, index).map(|value| Fetched {
                    value,
                    extraction: Extraction::Storage,
                })
            }
            _ => Err(self.mismatch(component)),
        }
    }

    /// Checks that `component` can be read, without reading it.
    pub(crate) fn probe(&self, component: &PathComponent<'_>) -> Result<(), AccessError> {
        match (self, component) {
            (Self::Members(composite), PathComponent::Named(name)) => member::probe(composite, name),
            (Self::Sequence { items, .. }, &PathComponent::Indexed(index)) => {
                sequence::probe(items, index)
            }
            _ => Err(self.mismatch(component)),
        }
    }

    fn mismatch(&self, component: &PathComponent<'_>) -> AccessError {
        match self {
            Self::Members(composite) => component.mismatch(composite.type_name()),
            Self::Sequence { element, .. } => component.mismatch(&format!("list<{element}>")),
        }
    }
}

// -----------------------------------------------------------------------------
// ContainerMut

/// Write access to the live storage of a container.
pub(crate) enum ContainerMut<'v> {
    Members(&'v mut Composite),
    Sequence {
        element: &'v ValueType,
        items: &'v mut [Value],
    },
}

impl<'v> ContainerMut<'v> {
    /// Descends in place into the struct stored behind `component`.
    pub(crate) fn step(self, component: &PathComponent<'_>) -> Result<Self, AccessError> {
        let slot = match (self, component) {
            (Self::Members(composite), PathComponent::Named(name)) => {
                member::get_mut(composite, name)?
            }
            (Self::Sequence { items, .. }, &PathComponent::Indexed(index)) => {
                sequence::get_mut(items, index)?
            }
            (Self::Members(composite), _) => return Err(component.mismatch(composite.type_name())),
            (Self::Sequence { element, .. }, _) => {
                return Err(component.mismatch(&format!("list<{element}>")));
            }
        };

        match slot {
            Value::Struct(composite) => Ok(Self::Members(composite)),
            Value::Null => Err(AccessError::NullIntermediate {
                component: component.clone().into_owned(),
            }),
            other => Err(AccessError::UnaddressableContainer {
                type_name: other.type_name().into_owned(),
                component: Some(component.clone().into_owned()),
            }),
        }
    }

    /// Writes `value` into the slot behind `component`.
    pub(crate) fn set(self, component: &PathComponent<'_>, value: Value) -> Result<(), AccessError> {
        match (self, component) {
            (Self::Members(composite), PathComponent::Named(name)) => {
                member::set(composite, name, value)
            }
            (Self::Sequence { element, items }, &PathComponent::Indexed(index)) => {
                sequence::set(element, items, index, value)
            }
            (Self::Members(composite), _) => Err(component.mismatch(composite.type_name())),
            (Self::Sequence { element, .. }, _) => {
                Err(component.mismatch(&format!("list<{element}>")))
            }
        }
    }
}

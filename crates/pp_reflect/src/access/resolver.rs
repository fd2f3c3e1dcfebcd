//! Walking a tokenized path through an object graph.

use alloc::borrow::Cow;
use alloc::string::String;

use crate::access::container::{ContainerMut, ContainerRef};
use crate::access::{AccessError, Extraction, Path, PathComponent};
use crate::value::{ListRef, ObjectRef, Value};

// -----------------------------------------------------------------------------
// Read

/// Reads the value at `path`, starting from `root`.
///
/// Every hop reads from the container produced by the previous one. The
/// result is a copy: structs are cloned, objects and lists are shared.
///
/// # Examples
///
/// ```
/// use pp_reflect::access::{Path, resolve_value};
/// use pp_reflect::info::{MemberInfo, TypeInfo, ValueType};
/// use pp_reflect::registry::TypeRegistry;
/// use pp_reflect::value::Value;
///
/// let mut registry = TypeRegistry::new();
/// registry
///     .register(TypeInfo::object("Counter").with_member(
///         MemberInfo::field("count", ValueType::Int).with_default(Value::Int(3)),
///     ))
///     .unwrap();
/// let root = registry.instantiate("Counter").unwrap();
///
/// let path = Path::parse("count").unwrap();
/// assert_eq!(resolve_value(&root, &path), Ok(Value::Int(3)));
/// ```
pub fn resolve_value(root: &Value, path: &Path<'_>) -> Result<Value, AccessError> {
    let mut current = Cow::Borrowed(root);
    let mut reached_by = None;

    for component in path.components() {
        let fetched = ContainerRef::open(&current, component, reached_by)?.fetch(component)?;
        current = Cow::Owned(fetched.value);
        reached_by = Some(component);
    }

    Ok(current.into_owned())
}

// -----------------------------------------------------------------------------
// Write

/// The shared container a [`Location`] writes through.
#[derive(Debug, Clone)]
enum Anchor {
    Object(ObjectRef),
    Sequence(ListRef),
}

/// Where the walk currently stands relative to real storage.
enum Walk {
    /// The current container lives in the storage of `anchor`, reached from
    /// it through the structs named by `path[hops_start..]`.
    Anchored { anchor: Anchor, hops_start: usize },
    /// The current container is a copy nothing else holds.
    Detached {
        type_name: String,
        component: Option<PathComponent<'static>>,
    },
}

/// A writable slot: the owner of the terminal component in live storage.
///
/// The owner is kept as the nearest shared container plus the struct hops
/// from it, so a write lands in place instead of on a copy.
#[derive(Debug, Clone)]
pub struct Location<'p, 'a> {
    anchor: Anchor,
    hops: &'p [PathComponent<'a>],
    terminal: &'p PathComponent<'a>,
}

impl Location<'_, '_> {
    /// The component this location writes.
    #[inline]
    pub fn terminal(&self) -> &PathComponent<'_> {
        self.terminal
    }

    /// Writes `value` into the owner's storage.
    ///
    /// The value is checked against the slot's declared type first. On any
    /// error nothing is written.
    pub fn write(&self, value: Value) -> Result<(), AccessError> {
        match &self.anchor {
            Anchor::Object(object) => {
                let mut data = object.borrow_mut();
                self.descend(ContainerMut::Members(&mut *data), value)
            }
            Anchor::Sequence(list) => {
                let mut items = list.borrow_mut();
                let container = ContainerMut::Sequence {
                    element: list.element(),
                    items: items.as_mut_slice(),
                };
                self.descend(container, value)
            }
        }
    }

    fn descend(&self, mut container: ContainerMut<'_>, value: Value) -> Result<(), AccessError> {
        for hop in self.hops {
            container = container.step(hop)?;
        }
        container.set(self.terminal, value)
    }
}

/// Resolves the owner of the last component of `path` for a write.
///
/// Objects and lists re-anchor the walk since they are shared. Structs stored
/// in a field or element stay reachable from the current anchor. A struct
/// returned by a property getter, or a struct passed as the root, is a copy:
/// if the terminal's owner is such a copy the walk fails with
/// [`AccessError::UnaddressableContainer`] instead of writing into it.
///
/// The terminal itself is checked to exist, but not read.
pub fn resolve_location<'p, 'a>(
    root: &Value,
    path: &'p Path<'a>,
) -> Result<Location<'p, 'a>, AccessError> {
    let (terminal, intermediate) = path.split_last();

    let mut walk = match root {
        Value::Object(object) => Walk::Anchored {
            anchor: Anchor::Object(object.clone()),
            hops_start: 0,
        },
        Value::List(list) => Walk::Anchored {
            anchor: Anchor::Sequence(list.clone()),
            hops_start: 0,
        },
        other => Walk::Detached {
            type_name: other.type_name().into_owned(),
            component: None,
        },
    };

    let mut current = Cow::Borrowed(root);
    let mut reached_by = None;

    for (position, component) in intermediate.iter().enumerate() {
        let fetched = ContainerRef::open(&current, component, reached_by)?.fetch(component)?;

        match &fetched.value {
            Value::Object(object) => {
                walk = Walk::Anchored {
                    anchor: Anchor::Object(object.clone()),
                    hops_start: position + 1,
                };
            }
            Value::List(list) => {
                walk = Walk::Anchored {
                    anchor: Anchor::Sequence(list.clone()),
                    hops_start: position + 1,
                };
            }
            Value::Struct(composite) if fetched.extraction == Extraction::Copy => {
                walk = Walk::Detached {
                    type_name: composite.type_name().into(),
                    component: Some(component.clone().into_owned()),
                };
            }
            _ => {}
        }

        current = Cow::Owned(fetched.value);
        reached_by = Some(component);
    }

    ContainerRef::open(&current, terminal, reached_by)?.probe(terminal)?;

    match walk {
        Walk::Anchored { anchor, hops_start } => Ok(Location {
            anchor,
            hops: &intermediate[hops_start..],
            terminal,
        }),
        Walk::Detached {
            type_name,
            component,
        } => Err(AccessError::UnaddressableContainer {
            type_name,
            component,
        }),
    }
}

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use crate::registry::{SlotAccess, TypeLayout};
use crate::value::Value;

// -----------------------------------------------------------------------------
// Composite

/// Field storage of a dynamic type, laid out by its [`TypeLayout`].
///
/// Stored fields of every ancestor live in one flat buffer, base fields
/// first. Computed properties have no storage.
///
/// A `Composite` is created by [`TypeLayout::instantiate`] or
/// [`TypeRegistry::instantiate`], never assembled by hand, so the buffer
/// always matches the layout.
///
/// [`TypeRegistry::instantiate`]: crate::registry::TypeRegistry::instantiate
#[derive(Clone)]
pub struct Composite {
    layout: Rc<TypeLayout>,
    fields: Vec<Value>,
}

impl Composite {
    #[inline]
    pub(crate) fn from_parts(layout: Rc<TypeLayout>, fields: Vec<Value>) -> Self {
        debug_assert_eq!(layout.field_count(), fields.len());
        Self { layout, fields }
    }

    /// Returns the layout of this composite's type.
    #[inline]
    pub fn layout(&self) -> &Rc<TypeLayout> {
        &self.layout
    }

    #[inline]
    pub fn type_name(&self) -> &str {
        self.layout.name()
    }

    /// Returns the stored field visible under `name`.
    ///
    /// Returns `None` for unknown names and for computed properties.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self.layout.member(name)?.access() {
            SlotAccess::Stored(index) => self.fields.get(index),
            SlotAccess::Computed { .. } => None,
        }
    }

    /// Returns the stored field visible under `name` mutably.
    ///
    /// The write is not type checked: property setters use this to update
    /// their backing fields and must keep them consistent with their types.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Value> {
        match self.layout.member(name)?.access() {
            SlotAccess::Stored(index) => self.fields.get_mut(index),
            SlotAccess::Computed { .. } => None,
        }
    }

    /// Iterates the visible stored fields in layout order.
    ///
    /// Inherited fields hidden by a member of the same name are skipped.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        let fields = &self.fields;
        self.layout
            .visible_members()
            .filter_map(move |slot| match slot.access() {
                SlotAccess::Stored(index) => Some((slot.name(), &fields[index])),
                SlotAccess::Computed { .. } => None,
            })
    }

    /// The whole field buffer, hidden fields included.
    #[inline]
    pub(crate) fn slots(&self) -> &[Value] {
        &self.fields
    }

    #[inline]
    pub(crate) fn slot(&self, index: usize) -> &Value {
        &self.fields[index]
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut Value {
        &mut self.fields[index]
    }
}

impl PartialEq for Composite {
    fn eq(&self, other: &Self) -> bool {
        (Rc::ptr_eq(&self.layout, &other.layout) || self.type_name() == other.type_name())
            && self.fields == other.fields
    }
}

impl fmt::Debug for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut state = f.debug_struct(self.type_name());
        for (name, value) in self.fields() {
            state.field(name, value);
        }
        state.finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::info::{MemberInfo, TypeInfo, ValueType};
    use crate::registry::TypeRegistry;
    use crate::value::Value;

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry
            .register(
                TypeInfo::object("Base")
                    .with_member(MemberInfo::field("id", ValueType::Int))
                    .with_member(MemberInfo::field("label", ValueType::Str)),
            )
            .unwrap();
        registry
            .register(
                TypeInfo::object("Derived")
                    .with_base("Base")
                    .with_member(MemberInfo::field("label", ValueType::Int))
                    .with_member(MemberInfo::property(
                        "twice",
                        ValueType::Int,
                        |c| Value::Int(c.field("id").and_then(Value::as_int).unwrap_or(0) * 2),
                        None,
                    )),
            )
            .unwrap();
        registry
    }

    #[test]
    fn shadowed_fields_are_hidden() {
        let registry = registry();
        let value = registry.instantiate("Derived").unwrap();
        let object = value.as_object().unwrap().borrow();

        let names: alloc::vec::Vec<&str> = object.fields().map(|(name, _)| name).collect();
        assert_eq!(names, ["id", "label"]);
        assert_eq!(object.field("label"), Some(&Value::Int(0)));
    }

    #[test]
    fn properties_have_no_storage() {
        let registry = registry();
        let value = registry.instantiate("Derived").unwrap();
        let object = value.as_object().unwrap().borrow();

        assert!(object.layout().member("twice").is_some());
        assert_eq!(object.field("twice"), None);
        assert_eq!(object.field("missing"), None);
    }
}

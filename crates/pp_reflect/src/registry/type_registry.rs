use alloc::borrow::Cow;
use alloc::rc::Rc;

use pp_utils::NameMap;

use crate::info::TypeInfo;
use crate::registry::{RegistryError, TypeLayout};
use crate::value::Value;

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of dynamic types, keyed by type name.
///
/// A type must be registered after its base and after every struct type used
/// by its fields. Object and list fields may name types registered later,
/// which allows self-referencing types.
///
/// # Example
///
/// ```
/// use pp_reflect::info::{MemberInfo, TypeInfo, ValueType};
/// use pp_reflect::registry::TypeRegistry;
/// use pp_reflect::value::Value;
///
/// let mut registry = TypeRegistry::new();
/// registry
///     .register(
///         TypeInfo::object("Node")
///             .with_member(MemberInfo::field("value", ValueType::Int).with_default(Value::Int(3)))
///             .with_member(MemberInfo::field("next", ValueType::object_of("Node"))),
///     )
///     .unwrap();
///
/// let node = registry.instantiate("Node").unwrap();
/// let node = node.as_object().unwrap().borrow();
/// assert_eq!(node.field("value"), Some(&Value::Int(3)));
/// assert_eq!(node.field("next"), Some(&Value::Null));
/// ```
#[derive(Default)]
pub struct TypeRegistry {
    layouts: NameMap<Rc<TypeLayout>>,
}

impl TypeRegistry {
    /// Creates an empty [`TypeRegistry`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            layouts: NameMap::new(),
        }
    }

    /// Registers a type, flattening its members with those of its ancestors.
    ///
    /// Returns the cached layout shared by every instance of the type.
    pub fn register(&mut self, info: TypeInfo) -> Result<Rc<TypeLayout>, RegistryError> {
        if self.layouts.contains(info.name()) {
            return Err(RegistryError::DuplicateType(info.name().into()));
        }

        let layout = Rc::new(TypeLayout::build(info, self)?);
        log::debug!(
            "registered type `{}` ({:?}, {} members, {} fields)",
            layout.name(),
            layout.semantics(),
            layout.members().len(),
            layout.field_count(),
        );

        self.layouts
            .insert(Cow::Owned(layout.name().into()), Rc::clone(&layout));
        Ok(layout)
    }

    /// Returns the layout registered under `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Rc<TypeLayout>> {
        self.layouts.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.layouts.contains(name)
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Iterates the registered layouts in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<TypeLayout>> {
        self.layouts.iter().map(|(_, layout)| layout)
    }

    /// Creates a default instance of the type registered under `name`.
    ///
    /// See [`TypeLayout::instantiate`].
    pub fn instantiate(&self, name: &str) -> Result<Value, RegistryError> {
        self.get(name)
            .map(TypeLayout::instantiate)
            .ok_or_else(|| RegistryError::UnknownType(name.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::TypeRegistry;
    use crate::access::PathAccess;
    use crate::info::{MemberInfo, Semantics, TypeInfo, ValueType, Visibility};
    use crate::registry::RegistryError;
    use crate::value::{ListRef, Value};

    fn vector() -> TypeInfo {
        TypeInfo::value_type("Vector2d")
            .with_member(MemberInfo::field("x", ValueType::Float))
            .with_member(MemberInfo::field("y", ValueType::Float))
    }

    #[test]
    fn members_flatten_base_first() {
        let mut registry = TypeRegistry::new();
        registry.register(vector()).unwrap();
        registry
            .register(
                TypeInfo::object("Component")
                    .with_member(MemberInfo::field("id", ValueType::Int).with_visibility(Visibility::Private)),
            )
            .unwrap();
        let layout = registry
            .register(
                TypeInfo::object("Body")
                    .with_base("Component")
                    .with_member(MemberInfo::field("position", ValueType::struct_of("Vector2d"))),
            )
            .unwrap();

        let names: alloc::vec::Vec<&str> = layout.members().iter().map(|m| m.name()).collect();
        assert_eq!(names, ["id", "position"]);
        assert_eq!(layout.field_count(), 2);
        assert_eq!(layout.member("id").unwrap().declared_by(), "Component");
        assert!(layout.is_a("Body") && layout.is_a("Component"));
        assert!(!layout.is_a("Vector2d"));
    }

    #[test]
    fn nested_struct_defaults() {
        let mut registry = TypeRegistry::new();
        registry.register(vector()).unwrap();
        registry
            .register(TypeInfo::object("Body").with_member(MemberInfo::field(
                "position",
                ValueType::struct_of("Vector2d"),
            )))
            .unwrap();

        let body = registry.instantiate("Body").unwrap();
        let body = body.as_object().unwrap().borrow();
        let position = body.field("position").and_then(Value::as_struct).unwrap();
        assert_eq!(position.type_name(), "Vector2d");
        assert_eq!(position.field("x"), Some(&Value::Float(0.0)));
    }

    #[test]
    fn value_types_instantiate_as_structs() {
        let mut registry = TypeRegistry::new();
        let layout = registry.register(vector()).unwrap();
        assert_eq!(layout.semantics(), Semantics::Value);
        assert!(matches!(registry.instantiate("Vector2d"), Ok(Value::Struct(_))));
    }

    #[test]
    fn registration_errors() {
        let mut registry = TypeRegistry::new();
        registry.register(vector()).unwrap();
        registry.register(TypeInfo::object("Component")).unwrap();

        assert_eq!(
            registry.register(vector()).unwrap_err(),
            RegistryError::DuplicateType("Vector2d".into())
        );
        assert_eq!(
            registry.register(TypeInfo::object("A").with_base("Missing")).unwrap_err(),
            RegistryError::UnknownType("Missing".into())
        );
        assert!(matches!(
            registry.register(TypeInfo::object("B").with_base("Vector2d")),
            Err(RegistryError::InvalidBase { .. })
        ));
        assert!(matches!(
            registry.register(TypeInfo::value_type("C").with_base("Component")),
            Err(RegistryError::InvalidBase { .. })
        ));
        assert!(matches!(
            registry.register(
                TypeInfo::object("D")
                    .with_member(MemberInfo::field("a", ValueType::Int))
                    .with_member(MemberInfo::field("a", ValueType::Float))
            ),
            Err(RegistryError::DuplicateMember { .. })
        ));
        assert!(matches!(
            registry.register(
                TypeInfo::object("E")
                    .with_member(MemberInfo::field("c", ValueType::struct_of("Component")))
            ),
            Err(RegistryError::ExpectedValueType { .. })
        ));
        assert!(matches!(
            registry.register(
                TypeInfo::object("F")
                    .with_member(MemberInfo::field("n", ValueType::Int).with_default(Value::Bool(true)))
            ),
            Err(RegistryError::InvalidDefault { .. })
        ));
        assert_eq!(
            registry.instantiate("Nope").unwrap_err(),
            RegistryError::UnknownType("Nope".into())
        );

        // Failed registrations leave nothing behind.
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn reference_defaults_are_rejected() {
        let mut registry = TypeRegistry::new();
        let tags = ListRef::from_values(ValueType::Str, [Value::from("a")]).unwrap();
        assert_eq!(
            registry
                .register(TypeInfo::object("Bag").with_member(
                    MemberInfo::field("tags", ValueType::list_of(ValueType::Str))
                        .with_default(Value::List(tags.clone())),
                ))
                .unwrap_err(),
            RegistryError::SharedDefault {
                type_name: "Bag".into(),
                member: "tags".into(),
            }
        );

        registry
            .register(TypeInfo::value_type("Labels").with_member(MemberInfo::field(
                "tags",
                ValueType::list_of(ValueType::Str),
            )))
            .unwrap();
        let Value::Struct(mut labels) = registry.instantiate("Labels").unwrap() else {
            unreachable!()
        };
        *labels.field_mut("tags").unwrap() = Value::List(tags);
        assert!(matches!(
            registry.register(TypeInfo::object("Card").with_member(
                MemberInfo::field("labels", ValueType::struct_of("Labels"))
                    .with_default(Value::Struct(labels)),
            )),
            Err(RegistryError::SharedDefault { .. })
        ));
    }

    #[test]
    fn instances_do_not_share_storage() {
        let mut registry = TypeRegistry::new();
        registry
            .register(TypeInfo::object("Bag").with_member(MemberInfo::field(
                "tags",
                ValueType::list_of(ValueType::Str),
            )))
            .unwrap();
        let first = registry.instantiate("Bag").unwrap();
        let second = registry.instantiate("Bag").unwrap();

        let tags = ListRef::from_values(ValueType::Str, [Value::from("a")]).unwrap();
        first.set_path("tags", tags).unwrap();
        first.set_path("tags.Array.data[0]", "changed").unwrap();

        assert_eq!(first.get_path("tags.Array.data[0]"), Ok(Value::from("changed")));
        assert_eq!(second.get_path("tags"), Ok(Value::Null));
        assert_ne!(first, second);
    }
}

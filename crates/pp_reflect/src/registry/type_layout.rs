use alloc::borrow::Cow;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::iter;

use pp_utils::NameMap;

use crate::info::{Getter, MemberInfo, MemberKind, Semantics, Setter, TypeInfo, ValueType};
use crate::registry::{RegistryError, TypeRegistry};
use crate::value::{Composite, ObjectRef, Value};

// -----------------------------------------------------------------------------
// MemberSlot

/// How a [`MemberSlot`] reaches its value.
#[derive(Clone, Copy)]
pub enum SlotAccess {
    /// Index into the owner's flat field buffer.
    Stored(usize),
    /// Accessor functions of a property.
    Computed { get: Getter, set: Option<Setter> },
}

/// A member of a [`TypeLayout`], own or inherited.
#[derive(Clone)]
pub struct MemberSlot {
    info: MemberInfo,
    declared_by: Cow<'static, str>,
    access: SlotAccess,
}

impl MemberSlot {
    #[inline]
    pub fn name(&self) -> &str {
        self.info.name()
    }

    /// Returns the declared type of the member.
    #[inline]
    pub fn ty(&self) -> &ValueType {
        self.info.ty()
    }

    #[inline]
    pub fn info(&self) -> &MemberInfo {
        &self.info
    }

    /// Returns the name of the type that declares this member.
    #[inline]
    pub fn declared_by(&self) -> &str {
        &self.declared_by
    }

    #[inline]
    pub fn access(&self) -> SlotAccess {
        self.access
    }
}

impl fmt::Debug for MemberSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}: {}", self.declared_by, self.name(), self.ty())
    }
}

// -----------------------------------------------------------------------------
// TypeLayout

/// The flattened member table of a registered type.
///
/// Members are ordered base-first. The name index resolves each name to the
/// nearest declaration: a type's own members first, then its base, then the
/// base's base. Visibility plays no part in the lookup.
///
/// # Examples
///
/// ```
/// use pp_reflect::info::{MemberInfo, TypeInfo, ValueType};
/// use pp_reflect::registry::TypeRegistry;
///
/// let mut registry = TypeRegistry::new();
/// registry
///     .register(TypeInfo::object("Component").with_member(MemberInfo::field("enabled", ValueType::Bool)))
///     .unwrap();
/// let layout = registry
///     .register(TypeInfo::object("Collider").with_base("Component"))
///     .unwrap();
///
/// assert!(layout.is_a("Component"));
/// assert_eq!(layout.member("enabled").unwrap().declared_by(), "Component");
/// ```
pub struct TypeLayout {
    name: Cow<'static, str>,
    semantics: Semantics,
    base: Option<Rc<TypeLayout>>,
    members: Vec<MemberSlot>,
    index: NameMap<usize>,
    defaults: Vec<Value>,
}

impl TypeLayout {
    // Flattens `info` on top of its already registered base.
    pub(crate) fn build(info: TypeInfo, registry: &TypeRegistry) -> Result<Self, RegistryError> {
        let (name, semantics, base_name, declared) = info.into_parts();

        let base = match base_name {
            None => None,
            Some(base_name) => {
                let Some(base) = registry.get(&base_name) else {
                    return Err(RegistryError::UnknownType(base_name.into_owned()));
                };
                if semantics == Semantics::Value || base.semantics == Semantics::Value {
                    return Err(RegistryError::InvalidBase {
                        name: name.into_owned(),
                        base: base_name.into_owned(),
                    });
                }
                Some(Rc::clone(base))
            }
        };

        let (mut members, mut index, mut defaults) = match &base {
            Some(base) => (base.members.clone(), base.index.clone(), base.defaults.clone()),
            None => (Vec::new(), NameMap::new(), Vec::new()),
        };

        let mut declared_names = NameMap::with_capacity(declared.len());
        for info in declared {
            if !declared_names.try_insert(info.name_cow().clone(), || ()) {
                return Err(RegistryError::DuplicateMember {
                    type_name: name.into_owned(),
                    member: info.name().into(),
                });
            }

            let access = match info.kind() {
                MemberKind::Field => {
                    defaults.push(field_default(&name, &info, registry)?);
                    SlotAccess::Stored(defaults.len() - 1)
                }
                MemberKind::Property { get, set } => SlotAccess::Computed { get, set },
            };

            if let Some(&hidden) = index.get(info.name()) {
                let hidden: &MemberSlot = &members[hidden];
                log::trace!(
                    "`{name}.{}` hides the member inherited from `{}`",
                    info.name(),
                    hidden.declared_by,
                );
            }

            index.insert(info.name_cow().clone(), members.len());
            members.push(MemberSlot {
                info,
                declared_by: name.clone(),
                access,
            });
        }

        Ok(Self {
            name,
            semantics,
            base,
            members,
            index,
            defaults,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn semantics(&self) -> Semantics {
        self.semantics
    }

    /// Returns the base type's layout.
    #[inline]
    pub fn base(&self) -> Option<&Rc<TypeLayout>> {
        self.base.as_ref()
    }

    /// Iterates this layout and then its ancestors, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &TypeLayout> {
        iter::successors(Some(self), |layout| layout.base.as_deref())
    }

    /// Returns `true` if this type is `name` or derives from it.
    pub fn is_a(&self, name: &str) -> bool {
        self.ancestors().any(|layout| layout.name() == name)
    }

    /// Finds the member visible under `name`, searching the whole hierarchy.
    #[inline]
    pub fn member(&self, name: &str) -> Option<&MemberSlot> {
        self.index.get(name).map(|&index| &self.members[index])
    }

    /// Returns every member, hidden ones included, base-first.
    #[inline]
    pub fn members(&self) -> &[MemberSlot] {
        &self.members
    }

    /// Iterates the members reachable by name, base-first.
    pub fn visible_members(&self) -> impl Iterator<Item = &MemberSlot> {
        self.members
            .iter()
            .enumerate()
            .filter(|(position, slot)| self.index.get(slot.name()) == Some(position))
            .map(|(_, slot)| slot)
    }

    /// Returns the number of stored fields, hidden ones included.
    #[inline]
    pub fn field_count(&self) -> usize {
        self.defaults.len()
    }

    /// Creates a default instance.
    ///
    /// Returns a [`Value::Object`] for reference types and a
    /// [`Value::Struct`] for value types.
    pub fn instantiate(self: &Rc<Self>) -> Value {
        let data = Composite::from_parts(Rc::clone(self), self.defaults.clone());
        match self.semantics {
            Semantics::Reference => Value::Object(ObjectRef::new(data)),
            Semantics::Value => Value::Struct(data),
        }
    }
}

impl fmt::Debug for TypeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeLayout")
            .field("name", &self.name)
            .field("semantics", &self.semantics)
            .field("base", &self.base.as_ref().map(|base| base.name()))
            .field("members", &self.members)
            .finish()
    }
}

fn field_default(
    type_name: &str,
    info: &MemberInfo,
    registry: &TypeRegistry,
) -> Result<Value, RegistryError> {
    if let Some(value) = info.default_value() {
        if !info.ty().accepts(value) {
            return Err(RegistryError::InvalidDefault {
                type_name: type_name.into(),
                member: info.name().into(),
                expected: info.ty().clone(),
            });
        }
        if holds_reference(value) {
            return Err(RegistryError::SharedDefault {
                type_name: type_name.into(),
                member: info.name().into(),
            });
        }
        return Ok(value.clone());
    }

    Ok(match info.ty() {
        ValueType::Any | ValueType::Object(_) | ValueType::List(_) => Value::Null,
        ValueType::Bool => Value::Bool(false),
        ValueType::Int => Value::Int(0),
        ValueType::Float => Value::Float(0.0),
        ValueType::Str => Value::Str(String::new()),
        ValueType::Struct(name) => {
            let Some(layout) = registry.get(name) else {
                return Err(RegistryError::UnknownType(name.clone().into_owned()));
            };
            if layout.semantics() != Semantics::Value {
                return Err(RegistryError::ExpectedValueType {
                    type_name: type_name.into(),
                    member: info.name().into(),
                    found: name.clone().into_owned(),
                });
            }
            layout.instantiate()
        }
    })
}

// Defaults are cloned into every instance, which copies structs but shares
// objects and lists.
fn holds_reference(value: &Value) -> bool {
    match value {
        Value::Object(_) | Value::List(_) => true,
        Value::Struct(composite) => composite.slots().iter().any(holds_reference),
        _ => false,
    }
}

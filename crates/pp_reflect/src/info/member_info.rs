use alloc::borrow::Cow;
use core::fmt;

use crate::info::ValueType;
use crate::value::{Composite, Value};

// -----------------------------------------------------------------------------
// Member kinds

/// Reads a computed property from its owner.
///
/// The returned value is a copy: mutating it never reaches the owner.
pub type Getter = fn(&Composite) -> Value;

/// Writes a computed property into its owner.
///
/// Only called with values accepted by the property's [`ValueType`].
/// A setter must either fully apply the value or leave the owner untouched.
pub type Setter = fn(&mut Composite, Value);

/// Access modifier of a member.
///
/// Recorded for tooling, but path access ignores it: private and protected
/// members resolve exactly like public ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// How a member stores its value.
#[derive(Clone, Copy)]
pub enum MemberKind {
    /// A stored field, living inline in its owner's storage.
    Field,
    /// A computed property backed by accessor functions.
    Property { get: Getter, set: Option<Setter> },
}

impl fmt::Debug for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field => f.write_str("Field"),
            Self::Property { set, .. } => f
                .debug_struct("Property")
                .field("writable", &set.is_some())
                .finish(),
        }
    }
}

// -----------------------------------------------------------------------------
// MemberInfo

/// Information for a named member of a type.
///
/// # Examples
///
/// ```
/// use pp_reflect::info::{MemberInfo, ValueType, Visibility};
/// use pp_reflect::value::Value;
///
/// let field = MemberInfo::field("raw", ValueType::Int)
///     .with_visibility(Visibility::Private)
///     .with_default(Value::Int(7));
///
/// assert_eq!(field.name(), "raw");
/// assert!(field.is_field());
/// assert_eq!(field.default_value(), Some(&Value::Int(7)));
/// ```
#[derive(Debug, Clone)]
pub struct MemberInfo {
    name: Cow<'static, str>,
    ty: ValueType,
    kind: MemberKind,
    visibility: Visibility,
    default: Option<Value>,
}

impl MemberInfo {
    /// Creates a stored field.
    pub fn field(name: impl Into<Cow<'static, str>>, ty: ValueType) -> Self {
        Self {
            name: name.into(),
            ty,
            kind: MemberKind::Field,
            visibility: Visibility::Public,
            default: None,
        }
    }

    /// Creates a computed property. A property without setter is read-only.
    pub fn property(
        name: impl Into<Cow<'static, str>>,
        ty: ValueType,
        get: Getter,
        set: Option<Setter>,
    ) -> Self {
        Self {
            name: name.into(),
            ty,
            kind: MemberKind::Property { get, set },
            visibility: Visibility::Public,
            default: None,
        }
    }

    /// Sets the access modifier.
    #[inline]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Sets the initial value of a field. Ignored for properties.
    #[inline]
    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub(crate) fn name_cow(&self) -> &Cow<'static, str> {
        &self.name
    }

    /// Returns the declared type.
    #[inline]
    pub fn ty(&self) -> &ValueType {
        &self.ty
    }

    #[inline]
    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub fn is_field(&self) -> bool {
        matches!(self.kind, MemberKind::Field)
    }

    /// Returns the explicit default, if any.
    #[inline]
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

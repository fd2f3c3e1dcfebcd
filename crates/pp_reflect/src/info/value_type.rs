use alloc::borrow::Cow;
use alloc::boxed::Box;
use core::fmt;

use crate::value::Value;

// -----------------------------------------------------------------------------
// ValueType

/// The declared type of a storage slot: a member or a list element.
///
/// Used to reject writes whose runtime value does not fit the slot.
///
/// # Examples
///
/// ```
/// use pp_reflect::info::ValueType;
/// use pp_reflect::value::Value;
///
/// assert!(ValueType::Float.accepts(&Value::Float(1.0)));
/// assert!(!ValueType::Float.accepts(&Value::Int(1)));
///
/// // Reference slots may be unset.
/// assert!(ValueType::object_of("Body").accepts(&Value::Null));
/// assert!(!ValueType::struct_of("Vector2d").accepts(&Value::Null));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Accepts every value, including `Null`.
    Any,
    Bool,
    Int,
    Float,
    Str,
    /// A value-semantics composite of the named type.
    Struct(Cow<'static, str>),
    /// A reference to an object of the named type or of a type derived from it.
    Object(Cow<'static, str>),
    /// A reference to a list with the given element type.
    List(Box<ValueType>),
}

impl ValueType {
    /// Creates [`ValueType::Struct`].
    #[inline]
    pub fn struct_of(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Struct(name.into())
    }

    /// Creates [`ValueType::Object`].
    #[inline]
    pub fn object_of(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Object(name.into())
    }

    /// Creates [`ValueType::List`].
    #[inline]
    pub fn list_of(element: ValueType) -> Self {
        Self::List(Box::new(element))
    }

    /// Returns `true` if `value` may be stored in a slot of this type.
    ///
    /// Scalars must match exactly, there is no implicit widening.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Any, _) => true,
            (Self::Bool, Value::Bool(_))
            | (Self::Int, Value::Int(_))
            | (Self::Float, Value::Float(_))
            | (Self::Str, Value::Str(_)) => true,
            (Self::Struct(name), Value::Struct(composite)) => composite.type_name() == &**name,
            (Self::Object(_) | Self::List(_), Value::Null) => true,
            (Self::Object(name), Value::Object(object)) => object.layout().is_a(name),
            (Self::List(element), Value::List(list)) => list.element() == &**element,
            _ => false,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Bool => f.write_str("bool"),
            Self::Int => f.write_str("int"),
            Self::Float => f.write_str("float"),
            Self::Str => f.write_str("string"),
            Self::Struct(name) | Self::Object(name) => f.write_str(name),
            Self::List(element) => write!(f, "list<{element}>"),
        }
    }
}

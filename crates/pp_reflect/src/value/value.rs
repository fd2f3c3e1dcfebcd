use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;

use crate::value::{Composite, ListRef, ObjectRef};

// -----------------------------------------------------------------------------
// Value

/// A dynamically typed value.
///
/// `Null` stands for an unset reference.
///
/// Equality compares scalars and structs by content, objects and lists by
/// identity.
///
/// # Examples
///
/// ```
/// use pp_reflect::info::ValueType;
/// use pp_reflect::value::{ListRef, Value};
///
/// let list = ListRef::new(ValueType::Int);
/// let a = Value::List(list.clone());
/// let b = Value::List(list);
///
/// // Both values share the same storage.
/// assert_eq!(a, b);
/// assert_eq!(a.type_name(), "list<int>");
/// assert_eq!(Value::from(1.5).as_float(), Some(1.5));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// An inline composite with value semantics.
    Struct(Composite),
    /// A shared composite with reference semantics.
    Object(ObjectRef),
    /// A shared sequence with reference semantics.
    List(ListRef),
}

impl Value {
    /// Returns the runtime type name, used in diagnostics.
    pub fn type_name(&self) -> Cow<'_, str> {
        match self {
            Self::Null => Cow::Borrowed("null"),
            Self::Bool(_) => Cow::Borrowed("bool"),
            Self::Int(_) => Cow::Borrowed("int"),
            Self::Float(_) => Cow::Borrowed("float"),
            Self::Str(_) => Cow::Borrowed("string"),
            Self::Struct(composite) => Cow::Borrowed(composite.type_name()),
            Self::Object(object) => Cow::Borrowed(object.type_name()),
            Self::List(list) => Cow::Owned(format!("list<{}>", list.element())),
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for objects and lists, whose clones share storage.
    #[inline]
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Object(_) | Self::List(_))
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_struct(&self) -> Option<&Composite> {
        match self {
            Self::Struct(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&ListRef> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_from {
    ($ty:ty => $variant:ident) => {
        impl From<$ty> for Value {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::$variant(value.into())
            }
        }
    };
}

impl_from!(bool => Bool);
impl_from!(i32 => Int);
impl_from!(i64 => Int);
impl_from!(f32 => Float);
impl_from!(f64 => Float);
impl_from!(&str => Str);
impl_from!(String => Str);
impl_from!(Composite => Struct);
impl_from!(ObjectRef => Object);
impl_from!(ListRef => List);

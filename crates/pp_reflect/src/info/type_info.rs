use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::info::MemberInfo;

// -----------------------------------------------------------------------------
// Semantics

/// How instances of a type behave when copied out of their owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Semantics {
    /// Instances are shared: every holder sees every mutation.
    Reference,
    /// Instances are copied on extraction: mutating a copy never reaches the owner.
    Value,
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Description of a dynamic type, fed to the [`TypeRegistry`].
///
/// Only reference types may have a base type.
///
/// # Examples
///
/// ```
/// use pp_reflect::info::{MemberInfo, Semantics, TypeInfo, ValueType};
///
/// let info = TypeInfo::object("Rigidbody")
///     .with_base("Component")
///     .with_member(MemberInfo::field("mass", ValueType::Float));
///
/// assert_eq!(info.name(), "Rigidbody");
/// assert_eq!(info.semantics(), Semantics::Reference);
/// assert_eq!(info.base(), Some("Component"));
/// assert_eq!(info.members().len(), 1);
/// ```
///
/// [`TypeRegistry`]: crate::registry::TypeRegistry
#[derive(Debug, Clone)]
pub struct TypeInfo {
    name: Cow<'static, str>,
    semantics: Semantics,
    base: Option<Cow<'static, str>>,
    members: Vec<MemberInfo>,
}

impl TypeInfo {
    /// Describes a reference type.
    pub fn object(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name.into(), Semantics::Reference)
    }

    /// Describes a value type.
    pub fn value_type(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name.into(), Semantics::Value)
    }

    fn new(name: Cow<'static, str>, semantics: Semantics) -> Self {
        Self {
            name,
            semantics,
            base: None,
            members: Vec::new(),
        }
    }

    /// Sets the base type.
    #[inline]
    pub fn with_base(mut self, base: impl Into<Cow<'static, str>>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Appends a declared member.
    #[inline]
    pub fn with_member(mut self, member: MemberInfo) -> Self {
        self.members.push(member);
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn semantics(&self) -> Semantics {
        self.semantics
    }

    #[inline]
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// Returns the declared members, excluding inherited ones.
    #[inline]
    pub fn members(&self) -> &[MemberInfo] {
        &self.members
    }

    #[inline]
    pub(crate) fn into_parts(
        self,
    ) -> (Cow<'static, str>, Semantics, Option<Cow<'static, str>>, Vec<MemberInfo>) {
        (self.name, self.semantics, self.base, self.members)
    }
}

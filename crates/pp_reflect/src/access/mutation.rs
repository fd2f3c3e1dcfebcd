//! The string-path facade over [`resolve_value`] and [`resolve_location`].

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::access::{AccessError, Path, PathComponent, resolve_location, resolve_value};
use crate::value::{ObjectRef, Value};

// -----------------------------------------------------------------------------
// Free functions

/// Reads the value at `path`.
///
/// Equivalent to [`Path::parse`] followed by [`resolve_value`].
///
/// # Examples
///
/// ```
/// use pp_reflect::access::{AccessError, resolve};
/// use pp_reflect::info::{MemberInfo, TypeInfo, ValueType};
/// use pp_reflect::registry::TypeRegistry;
/// use pp_reflect::value::Value;
///
/// let mut registry = TypeRegistry::new();
/// registry
///     .register(TypeInfo::object("Tag").with_member(MemberInfo::field("text", ValueType::Str)))
///     .unwrap();
/// let tag = registry.instantiate("Tag").unwrap();
///
/// assert_eq!(resolve(&tag, "text"), Ok(Value::from("")));
/// assert!(matches!(resolve(&tag, "bogus"), Err(AccessError::MemberNotFound { .. })));
/// ```
pub fn resolve(root: &Value, path: &str) -> Result<Value, AccessError> {
    resolve_value(root, &Path::parse(path)?)
}

/// Writes `value` at `path`.
///
/// Equivalent to [`assign_with`] without a callback.
pub fn assign(root: &Value, path: &str, value: impl Into<Value>) -> Result<(), AccessError> {
    assign_with(root, path, value, |_| {})
}

/// Writes `value` at `path`, then hands the [`Mutation`] to `on_success`.
///
/// `on_success` runs only if the write happened. On error the graph is left
/// exactly as it was and the callback is dropped uncalled.
pub fn assign_with(
    root: &Value,
    path: &str,
    value: impl Into<Value>,
    on_success: impl FnOnce(&Mutation<'_>),
) -> Result<(), AccessError> {
    let path = Path::parse(path)?;
    resolve_location(root, &path)?.write(value.into())?;
    on_success(&Mutation { root, path: &path });
    Ok(())
}

// -----------------------------------------------------------------------------
// Mutation

/// A record of one successful write, for change tracking.
#[derive(Debug, Clone, Copy)]
pub struct Mutation<'m> {
    root: &'m Value,
    path: &'m Path<'m>,
}

impl<'m> Mutation<'m> {
    /// The root the path was resolved from.
    #[inline]
    pub fn root(&self) -> &'m Value {
        self.root
    }

    #[inline]
    pub fn path(&self) -> &'m Path<'m> {
        self.path
    }

    /// A short, human-readable description such as `Set position`.
    ///
    /// Element writes are labelled with the element, as in `Set data[2]`.
    pub fn label(&self) -> String {
        match self.path.split_last().0 {
            PathComponent::Named(name) => format!("Set {name}"),
            PathComponent::Indexed(index) => format!("Set data[{index}]"),
        }
    }
}

// -----------------------------------------------------------------------------
// PropertyAccess

/// A reusable facade that reports every successful write to a hook.
///
/// # Examples
///
/// ```
/// use core::cell::RefCell;
///
/// use pp_reflect::access::PropertyAccess;
/// use pp_reflect::info::{MemberInfo, TypeInfo, ValueType};
/// use pp_reflect::registry::TypeRegistry;
///
/// let mut registry = TypeRegistry::new();
/// registry
///     .register(TypeInfo::object("Light").with_member(MemberInfo::field("on", ValueType::Bool)))
///     .unwrap();
/// let light = registry.instantiate("Light").unwrap();
///
/// let labels = RefCell::new(Vec::new());
/// let mut access = PropertyAccess::with_hook(|mutation| labels.borrow_mut().push(mutation.label()));
///
/// access.set(&light, "on", true).unwrap();
/// assert!(access.set(&light, "on", 1).is_err());
/// drop(access);
///
/// assert_eq!(labels.into_inner(), ["Set on"]);
/// ```
#[derive(Default)]
pub struct PropertyAccess<'h> {
    on_change: Option<Box<dyn FnMut(&Mutation<'_>) + 'h>>,
}

impl<'h> PropertyAccess<'h> {
    /// Creates a facade without a hook.
    #[inline]
    pub const fn new() -> Self {
        Self { on_change: None }
    }

    /// Creates a facade calling `on_change` after each successful write.
    pub fn with_hook(on_change: impl FnMut(&Mutation<'_>) + 'h) -> Self {
        Self {
            on_change: Some(Box::new(on_change)),
        }
    }

    /// See [`resolve`].
    #[inline]
    pub fn get(&self, root: &Value, path: &str) -> Result<Value, AccessError> {
        resolve(root, path)
    }

    /// See [`assign_with`].
    pub fn set(
        &mut self,
        root: &Value,
        path: &str,
        value: impl Into<Value>,
    ) -> Result<(), AccessError> {
        match self.on_change.as_mut() {
            Some(hook) => assign_with(root, path, value, |mutation| hook(mutation)),
            None => assign(root, path, value),
        }
    }
}

impl fmt::Debug for PropertyAccess<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyAccess")
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// PathAccess

/// Path access as methods on a root.
///
/// # Examples
///
/// ```
/// use pp_reflect::access::PathAccess;
/// use pp_reflect::info::{MemberInfo, TypeInfo, ValueType};
/// use pp_reflect::registry::TypeRegistry;
/// use pp_reflect::value::Value;
///
/// let mut registry = TypeRegistry::new();
/// registry
///     .register(TypeInfo::object("Score").with_member(MemberInfo::field("points", ValueType::Int)))
///     .unwrap();
/// let score = registry.instantiate("Score").unwrap();
///
/// score.set_path("points", 10).unwrap();
/// assert_eq!(score.get_path("points"), Ok(Value::Int(10)));
/// ```
pub trait PathAccess {
    /// See [`resolve`].
    fn get_path(&self, path: &str) -> Result<Value, AccessError>;

    /// See [`assign`].
    fn set_path(&self, path: &str, value: impl Into<Value>) -> Result<(), AccessError>;
}

impl PathAccess for Value {
    #[inline]
    fn get_path(&self, path: &str) -> Result<Value, AccessError> {
        resolve(self, path)
    }

    #[inline]
    fn set_path(&self, path: &str, value: impl Into<Value>) -> Result<(), AccessError> {
        assign(self, path, value)
    }
}

impl PathAccess for ObjectRef {
    fn get_path(&self, path: &str) -> Result<Value, AccessError> {
        resolve(&Value::Object(self.clone()), path)
    }

    fn set_path(&self, path: &str, value: impl Into<Value>) -> Result<(), AccessError> {
        assign(&Value::Object(self.clone()), path, value)
    }
}

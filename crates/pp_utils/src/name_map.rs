use alloc::borrow::Cow;
use core::fmt::{self, Debug};

use crate::hash::{Entry, FixedHashState, HashMap};

// -----------------------------------------------------------------------------
// NameMap

/// A map container keyed by type or member names.
///
/// Keys are stored as `Cow<'static, str>`, so names known at compile time are
/// never copied, while lookups accept any `&str`.
///
/// The container's interface is fully abstracted, exposing no [`HashMap`]
/// specific APIs.
///
/// # Examples
///
/// ```
/// use pp_utils::NameMap;
///
/// let mut map = NameMap::new();
/// assert!(map.try_insert("x".into(), || 0_usize));
/// assert!(!map.try_insert("x".into(), || 1_usize));
///
/// let owned = String::from("x");
/// assert_eq!(map.get(&owned), Some(&0));
/// ```
#[derive(Clone)]
pub struct NameMap<V>(HashMap<Cow<'static, str>, V, FixedHashState>);

impl<V> Default for NameMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V> NameMap<V> {
    /// Creates an empty `NameMap`.
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(FixedHashState))
    }

    /// Creates an empty `NameMap` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashMap::with_capacity_and_hasher(capacity, FixedHashState))
    }

    /// Attempts to insert a key-value pair into the map.
    ///
    /// - Returns `true` if the name was not present and the pair was inserted.
    /// - Returns `false` if the name already exists, leaving the map unchanged.
    ///
    /// The closure `f` is only called if the name is not present.
    #[inline]
    pub fn try_insert(&mut self, name: Cow<'static, str>, f: impl FnOnce() -> V) -> bool {
        match self.0.entry(name) {
            Entry::Vacant(entry) => {
                entry.insert(f());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Inserts a key-value pair, returning the previous value of that name.
    #[inline]
    pub fn insert(&mut self, name: Cow<'static, str>, value: V) -> Option<V> {
        self.0.insert(name, value)
    }

    /// Returns a reference to the value registered under `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&V> {
        self.0.get(name)
    }

    /// Returns `true` if the map contains a value for `name`.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// An iterator visiting all name-value pairs in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_ref(), v))
    }
}

impl<V: Debug> Debug for NameMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

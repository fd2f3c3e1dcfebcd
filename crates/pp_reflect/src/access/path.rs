//! Tokenizing path strings.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::access::{AccessError, MalformedReason};

// -----------------------------------------------------------------------------
// PathComponent

/// A single step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathComponent<'a> {
    /// A member looked up by name.
    ///
    /// Example: the `position` of `position.x`
    Named(Cow<'a, str>),
    /// An element of the sequence named by the previous component.
    ///
    /// Example: the `2` of `items.Array.data[2]`
    Indexed(usize),
}

impl<'a> PathComponent<'a> {
    /// Converts this into an "owned" value.
    #[inline]
    pub fn into_owned(self) -> PathComponent<'static> {
        match self {
            Self::Named(name) => PathComponent::Named(Cow::Owned(name.into_owned())),
            Self::Indexed(index) => PathComponent::Indexed(index),
        }
    }

    #[inline]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Indexed(_) => None,
        }
    }

    #[inline]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Named(_) => None,
            Self::Indexed(index) => Some(*index),
        }
    }

    // The error for applying this component to a value that cannot take it.
    pub(crate) fn mismatch(&self, type_name: &str) -> AccessError {
        match self {
            Self::Named(name) => AccessError::MemberNotFound {
                type_name: type_name.into(),
                name: name.as_ref().into(),
            },
            Self::Indexed(_) => AccessError::NotIndexable {
                type_name: type_name.into(),
            },
        }
    }
}

impl fmt::Display for PathComponent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Indexed(index) => write!(f, "{INDEX_PREFIX}{index}{INDEX_SUFFIX}"),
        }
    }
}

// -----------------------------------------------------------------------------
// PathParser

const INDEX_PREFIX: &str = "Array.data[";
const INDEX_SUFFIX: char = ']';
const SEPARATOR: char = '.';

/// Splits a path string into [`PathComponent`]s.
///
/// ```text
/// path         := segment ('.' segment)*
/// segment      := indexSegment | nameSegment
/// indexSegment := "Array.data[" digits "]"
/// nameSegment  := any non-empty run of characters not containing '.'
/// ```
///
/// The iterator stops after the first error.
///
/// # Examples
///
/// ```
/// use pp_reflect::access::{PathComponent, PathParser};
///
/// let components: Result<Vec<_>, _> = PathParser::new("items.Array.data[2].name").collect();
/// assert_eq!(
///     components.unwrap(),
///     [
///         PathComponent::Named("items".into()),
///         PathComponent::Indexed(2),
///         PathComponent::Named("name".into()),
///     ]
/// );
///
/// assert!(PathParser::new("a..b").any(|c| c.is_err()));
/// ```
pub struct PathParser<'a> {
    path: &'a str,
    offset: usize,
    done: bool,
}

impl<'a> PathParser<'a> {
    #[inline]
    pub const fn new(path: &'a str) -> Self {
        Self {
            path,
            offset: 0,
            done: false,
        }
    }

    fn error(&mut self, offset: usize, reason: MalformedReason) -> AccessError {
        self.done = true;
        AccessError::MalformedPath {
            path: String::from(self.path),
            offset,
            reason,
        }
    }

    fn next_component(&mut self) -> Result<PathComponent<'a>, AccessError> {
        let path = self.path;
        let start = self.offset;
        let rest = &path[start..];

        if rest.is_empty() {
            let reason = if start == 0 {
                MalformedReason::EmptyPath
            } else {
                MalformedReason::EmptySegment
            };
            return Err(self.error(start, reason));
        }

        let (component, consumed) = if let Some(body) = rest.strip_prefix(INDEX_PREFIX) {
            let digits_at = start + INDEX_PREFIX.len();
            let Some(close) = body.find(INDEX_SUFFIX) else {
                return Err(self.error(digits_at, MalformedReason::UnclosedIndex));
            };
            let digits = &body[..close];
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(self.error(digits_at, MalformedReason::InvalidIndex));
            }
            let Ok(index) = digits.parse::<usize>() else {
                return Err(self.error(digits_at, MalformedReason::IndexOverflow));
            };
            if start == 0 {
                return Err(self.error(start, MalformedReason::LeadingIndex));
            }
            (PathComponent::Indexed(index), INDEX_PREFIX.len() + close + 1)
        } else {
            let len = rest.find(SEPARATOR).unwrap_or(rest.len());
            if len == 0 {
                return Err(self.error(start, MalformedReason::EmptySegment));
            }
            (PathComponent::Named(Cow::Borrowed(&rest[..len])), len)
        };

        self.offset += consumed;
        match path[self.offset..].chars().next() {
            None => self.done = true,
            Some(SEPARATOR) => self.offset += SEPARATOR.len_utf8(),
            Some(_) => {
                let offset = self.offset;
                return Err(self.error(offset, MalformedReason::TrailingCharacters));
            }
        }

        Ok(component)
    }
}

impl<'a> Iterator for PathParser<'a> {
    type Item = Result<PathComponent<'a>, AccessError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        Some(self.next_component())
    }
}

// -----------------------------------------------------------------------------
// Path

/// A tokenized, non-empty path.
///
/// Tokenizing never looks at an object graph: the same string always yields
/// the same components or the same error.
///
/// # Examples
///
/// ```
/// use pp_reflect::access::Path;
///
/// let path = Path::parse("items.Array.data[2].name").unwrap();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.to_string(), "items.Array.data[2].name");
///
/// assert!(Path::parse("Array.data[x]").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<'a>(Box<[PathComponent<'a>]>);

impl<'a> Path<'a> {
    /// Tokenizes `path`.
    pub fn parse(path: &'a str) -> Result<Self, AccessError> {
        let components = PathParser::new(path).collect::<Result<Vec<_>, _>>()?;
        Ok(Self(components.into_boxed_slice()))
    }

    #[inline]
    pub fn components(&self) -> &[PathComponent<'a>] {
        &self.0
    }

    /// Returns the number of components, at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the terminal component and the components leading to it.
    #[inline]
    pub fn split_last(&self) -> (&PathComponent<'a>, &[PathComponent<'a>]) {
        let (init, last) = self.0.split_at(self.0.len() - 1);
        (&last[0], init)
    }

    /// Converts this into an "owned" value.
    pub fn into_owned(self) -> Path<'static> {
        Path(self.0.into_iter().map(PathComponent::into_owned).collect())
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, component) in self.0.iter().enumerate() {
            if position > 0 {
                f.write_str(".")?;
            }
            fmt::Display::fmt(component, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{Path, PathComponent};
    use crate::access::{AccessError, MalformedReason};

    fn reason(path: &str) -> (usize, MalformedReason) {
        match Path::parse(path) {
            Err(AccessError::MalformedPath { offset, reason, .. }) => (offset, reason),
            other => panic!("`{path}` should be malformed, got {other:?}"),
        }
    }

    #[test]
    fn names_and_indices() {
        let path = Path::parse("items.Array.data[10].offset.x").unwrap();
        assert_eq!(
            path.components(),
            [
                PathComponent::Named("items".into()),
                PathComponent::Indexed(10),
                PathComponent::Named("offset".into()),
                PathComponent::Named("x".into()),
            ]
        );
        let (last, init) = path.split_last();
        assert_eq!(last, &PathComponent::Named("x".into()));
        assert_eq!(init.len(), 3);
    }

    #[test]
    fn nested_indices() {
        let path = Path::parse("grid.Array.data[1].Array.data[2]").unwrap();
        assert_eq!(
            path.components()[1..],
            [PathComponent::Indexed(1), PathComponent::Indexed(2)]
        );
    }

    #[test]
    fn names_are_verbatim() {
        let path = Path::parse("m_Value[0].<Data>k__BackingField").unwrap();
        assert_eq!(path.components()[0], PathComponent::Named("m_Value[0]".into()));
        assert_eq!(
            path.components()[1],
            PathComponent::Named("<Data>k__BackingField".into())
        );
        // Only the exact marker denotes an index.
        let path = Path::parse("Array.data.x").unwrap();
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn malformed() {
        assert_eq!(reason(""), (0, MalformedReason::EmptyPath));
        assert_eq!(reason("a..b"), (2, MalformedReason::EmptySegment));
        assert_eq!(reason(".a"), (0, MalformedReason::EmptySegment));
        assert_eq!(reason("a."), (2, MalformedReason::EmptySegment));
        assert_eq!(reason("a.Array.data[x]"), (13, MalformedReason::InvalidIndex));
        assert_eq!(reason("a.Array.data[]"), (13, MalformedReason::InvalidIndex));
        assert_eq!(reason("a.Array.data[-1]"), (13, MalformedReason::InvalidIndex));
        assert_eq!(reason("a.Array.data[1"), (13, MalformedReason::UnclosedIndex));
        assert_eq!(reason("a.Array.data[1]b"), (15, MalformedReason::TrailingCharacters));
        assert_eq!(reason("a.Array.data[1]."), (16, MalformedReason::EmptySegment));
        assert_eq!(
            reason("a.Array.data[99999999999999999999999]"),
            (13, MalformedReason::IndexOverflow)
        );
        assert_eq!(reason("Array.data[0].a"), (0, MalformedReason::LeadingIndex));
        assert!(matches!(
            reason("Array.data[x]"),
            (_, MalformedReason::InvalidIndex)
        ));
    }

    #[test]
    fn deterministic() {
        for input in ["a.b", "a..b", "x.Array.data[3]", ""] {
            assert_eq!(Path::parse(input), Path::parse(input));
        }
    }

    #[test]
    fn display_round_trip() {
        let input = "items.Array.data[2].name";
        assert_eq!(Path::parse(input).unwrap().to_string(), input);
        assert_eq!(
            Path::parse(input).unwrap().into_owned(),
            Path::parse(input).unwrap()
        );
    }
}

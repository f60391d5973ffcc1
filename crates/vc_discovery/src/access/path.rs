use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Bound, RangeBounds};
use core::slice;
use core::str::FromStr;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Constants

/// The address of the current (root) object.
pub const CURRENT: &str = ".";

/// The only name a list accessor segment may use.
pub const LIST_ACCESSOR: &str = "get";

const SEPARATOR: char = '.';

// -----------------------------------------------------------------------------
// Error

/// The reason a [`ParseError`] was raised.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("address is empty")]
    Empty,

    #[error("empty segment")]
    EmptySegment,

    #[error("empty property name")]
    EmptyName,

    #[error("list accessor name must be 'get'")]
    ListAccessorName,

    #[error("index is not a non-negative integer")]
    InvalidIndex,

    #[error("index has leading zeros")]
    LeadingZeros,

    #[error("index does not fit in `usize`")]
    IndexOverflow,

    #[error("missing closing `{0}`")]
    Unclosed(char),

    #[error("unexpected characters after `{0}`")]
    TrailingCharacters(char),

    #[error("a single segment cannot contain `.`")]
    UnexpectedSeparator,
}

/// A malformed address.
///
/// `offset` is the byte position in `path` where the problem was found.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid address `{path}` at offset {offset}: {kind}")]
pub struct ParseError {
    /// Position in `path`.
    pub offset: usize,
    /// The text that failed to parse.
    pub path: Box<str>,
    /// The underlying error.
    pub kind: ParseErrorKind,
}

impl ParseError {
    #[inline]
    fn new(path: &str, offset: usize, kind: ParseErrorKind) -> Self {
        Self {
            offset,
            path: Box::from(path),
            kind,
        }
    }
}

// -----------------------------------------------------------------------------
// PathElement

/// The kind of a [`PathElement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathElementKind {
    Object,
    ArrayIndex,
    ListAccessor,
}

/// One `.`-separated segment of a [`Path`].
///
/// | kind             | text        | meaning                                   |
/// |------------------|-------------|-------------------------------------------|
/// | `Object`         | `name`      | the property `name`                       |
/// | `ArrayIndex`     | `name[i]`   | element `i` of the sequence property `name` |
/// | `ListAccessor`   | `get(i)`    | element `i` of the current sequence       |
///
/// Names are never empty and never contain `.`, `[` or `(`.
///
/// # Examples
///
/// ```
/// use vc_discovery::access::{PathElement, PathElementKind};
///
/// let element = PathElement::parse("world[2]").unwrap();
/// assert_eq!(element.kind(), PathElementKind::ArrayIndex);
/// assert_eq!(element.name(), "world");
/// assert_eq!(element.index(), Some(2));
/// assert_eq!(element.to_string(), "world[2]");
///
/// assert!(PathElement::parse("list(1)").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathElement(Segment);

// Kept private so every element goes through a validating constructor.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Segment {
    Object(Box<str>),
    ArrayIndex(Box<str>, usize),
    ListAccessor(usize),
}

impl PathElement {
    /// Creates an `Object` element, e.g. `threshold`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid property name.
    pub fn object(name: &str) -> Self {
        assert_valid_name(name);
        Self(Segment::Object(Box::from(name)))
    }

    /// Creates an `ArrayIndex` element, e.g. `actors[1]`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid property name.
    pub fn array_index(name: &str, index: usize) -> Self {
        assert_valid_name(name);
        Self(Segment::ArrayIndex(Box::from(name), index))
    }

    /// Creates a `ListAccessor` element, e.g. `get(1)`.
    #[inline]
    pub const fn list_accessor(index: usize) -> Self {
        Self(Segment::ListAccessor(index))
    }

    /// Parses a single segment.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if let Some(offset) = text.find(SEPARATOR) {
            return Err(ParseError::new(
                text,
                offset,
                ParseErrorKind::UnexpectedSeparator,
            ));
        }
        Self::parse_at(text, 0).map_err(|(offset, kind)| ParseError::new(text, offset, kind))
    }

    // `offset` is the position of `text` in the whole address.
    fn parse_at(text: &str, offset: usize) -> Result<Self, (usize, ParseErrorKind)> {
        if text.is_empty() {
            return Err((offset, ParseErrorKind::EmptySegment));
        }

        let Some(open) = text.find(['[', '(']) else {
            return Ok(Self(Segment::Object(Box::from(text))));
        };

        let name = &text[..open];
        if name.is_empty() {
            return Err((offset, ParseErrorKind::EmptyName));
        }

        let is_list = text.as_bytes()[open] == b'(';
        if is_list && name != LIST_ACCESSOR {
            return Err((offset, ParseErrorKind::ListAccessorName));
        }

        let close = if is_list { ')' } else { ']' };
        let body = &text[open + 1..];
        let Some(end) = body.find(close) else {
            return Err((offset + text.len(), ParseErrorKind::Unclosed(close)));
        };
        if end + 1 != body.len() {
            let at = offset + open + 1 + end + 1;
            return Err((at, ParseErrorKind::TrailingCharacters(close)));
        }

        let index = parse_index(&body[..end]).map_err(|kind| (offset + open + 1, kind))?;
        if is_list {
            Ok(Self(Segment::ListAccessor(index)))
        } else {
            Ok(Self(Segment::ArrayIndex(Box::from(name), index)))
        }
    }

    /// Returns the name; `get` for list accessors.
    #[inline]
    pub fn name(&self) -> &str {
        match &self.0 {
            Segment::Object(name) | Segment::ArrayIndex(name, _) => name,
            Segment::ListAccessor(_) => LIST_ACCESSOR,
        }
    }

    /// Returns the [`PathElementKind`].
    #[inline]
    pub const fn kind(&self) -> PathElementKind {
        match self.0 {
            Segment::Object(_) => PathElementKind::Object,
            Segment::ArrayIndex(..) => PathElementKind::ArrayIndex,
            Segment::ListAccessor(_) => PathElementKind::ListAccessor,
        }
    }

    /// Returns the index, present for every kind but `Object`.
    #[inline]
    pub const fn index(&self) -> Option<usize> {
        match self.0 {
            Segment::Object(_) => None,
            Segment::ArrayIndex(_, index) | Segment::ListAccessor(index) => Some(index),
        }
    }
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Segment::Object(name) => f.write_str(name),
            Segment::ArrayIndex(name, index) => write!(f, "{name}[{index}]"),
            Segment::ListAccessor(index) => write!(f, "{LIST_ACCESSOR}({index})"),
        }
    }
}

impl fmt::Debug for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PathElement({self})")
    }
}

impl FromStr for PathElement {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns `true` if `name` can be written as a property name in an
/// address: non-empty, without `.`, `[` or `(`.
#[inline]
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['.', '[', '('])
}

#[inline]
fn assert_valid_name(name: &str) {
    assert!(is_valid_name(name), "`{name}` is not a valid property name");
}

fn parse_index(digits: &str) -> Result<usize, ParseErrorKind> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseErrorKind::InvalidIndex);
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(ParseErrorKind::LeadingZeros);
    }
    digits
        .parse::<usize>()
        .map_err(|_| ParseErrorKind::IndexOverflow)
}

// -----------------------------------------------------------------------------
// Path

/// An address into an object graph.
///
/// A path is either a non-empty sequence of [`PathElement`]s or the
/// *current object* [`CURRENT`] (`"."`), which addresses the root itself.
///
/// Paths are immutable values; every derived path is a new value and
/// cloning is cheap.
///
/// The text form is bit-exact: `parse(s).to_string() == s` for every valid
/// `s`.
///
/// ```text
/// path    := segment ('.' segment)* | "."
/// segment := NAME | NAME '[' DIGITS ']' | "get" '(' DIGITS ')'
/// ```
///
/// # Examples
///
/// ```
/// use vc_discovery::access::{Path, PathElementKind};
///
/// let path = Path::parse("hello.world[2].nothing").unwrap();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.get(1).unwrap().kind(), PathElementKind::ArrayIndex);
/// assert_eq!(path.to_string(), "hello.world[2].nothing");
///
/// let tail = path.subpath(1..);
/// assert_eq!(tail.to_string(), "world[2].nothing");
///
/// let longer = path.append("get(0)").unwrap();
/// assert_eq!(longer.to_string(), "hello.world[2].nothing.get(0)");
/// assert_eq!(path.len(), 3);
///
/// assert!(Path::parse(".").unwrap().is_current());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path {
    elements: Arc<[PathElement]>,
}

impl Path {
    /// Returns the current object path `"."`.
    #[inline]
    pub fn current() -> Self {
        Self {
            elements: Arc::new([]),
        }
    }

    /// Parses an address.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if text == CURRENT {
            return Ok(Self::current());
        }
        if text.is_empty() {
            return Err(ParseError::new(text, 0, ParseErrorKind::Empty));
        }

        let mut elements = Vec::new();
        let mut offset = 0;
        for segment in text.split(SEPARATOR) {
            let element = PathElement::parse_at(segment, offset)
                .map_err(|(at, kind)| ParseError::new(text, at, kind))?;
            elements.push(element);
            offset += segment.len() + 1;
        }

        Ok(Self {
            elements: elements.into(),
        })
    }

    /// Creates a path from elements; no elements give the current object.
    pub fn from_elements(elements: impl IntoIterator<Item = PathElement>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
        }
    }

    /// Returns `true` for the current object path.
    #[inline]
    pub fn is_current(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements, `0` for the current object.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&PathElement> {
        self.elements.get(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&PathElement> {
        self.elements.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&PathElement> {
        self.elements.last()
    }

    /// Returns the elements.
    #[inline]
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Iterates over the elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, PathElement> {
        self.elements.iter()
    }

    /// Returns the path without its last element.
    ///
    /// A single element path has the current object as parent; the current
    /// object has none.
    pub fn parent(&self) -> Option<Self> {
        match self.len() {
            0 => None,
            len => Some(self.subpath(..len - 1)),
        }
    }

    /// Returns `true` if the elements of `prefix` begin this path.
    #[inline]
    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.elements.starts_with(&prefix.elements)
    }

    /// Returns a new path over the given range of elements.
    ///
    /// An empty range gives the current object.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds, like slice indexing.
    pub fn subpath(&self, range: impl RangeBounds<usize>) -> Self {
        let bounds: (Bound<usize>, Bound<usize>) =
            (range.start_bound().cloned(), range.end_bound().cloned());
        Self::from_elements(self.elements[bounds].iter().cloned())
    }

    /// Parses `segment` as one element and returns a new path with it
    /// appended.
    pub fn append(&self, segment: &str) -> Result<Self, ParseError> {
        Ok(self.append_element(PathElement::parse(segment)?))
    }

    /// Returns a new path with `element` appended.
    pub fn append_element(&self, element: PathElement) -> Self {
        let mut elements = Vec::with_capacity(self.len() + 1);
        elements.extend_from_slice(&self.elements);
        elements.push(element);
        Self {
            elements: elements.into(),
        }
    }
}

impl Default for Path {
    /// See [`Path::current`].
    #[inline]
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements = self.elements.iter();
        let Some(first) = elements.next() else {
            return f.write_str(CURRENT);
        };
        fmt::Display::fmt(first, f)?;
        for element in elements {
            write!(f, "{SEPARATOR}{element}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({self})")
    }
}

impl FromStr for Path {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Path {
    type Error = ParseError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Path {
    type Error = ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PathElement> for Path {
    #[inline]
    fn from(element: PathElement) -> Self {
        Self::from_elements([element])
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathElement;
    type IntoIter = slice::Iter<'a, PathElement>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::{CURRENT, ParseErrorKind, Path, PathElement, PathElementKind, is_valid_name};

    #[test]
    fn three_kinds_round_trip() {
        for text in [
            "a",
            "hello.world[2].nothing",
            "pipeline.actors[10].get(3)",
            "get",
            "get(0).get(1)",
            "odd name].x)",
            "a.b.c.d.e",
            CURRENT,
        ] {
            assert_eq!(Path::parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn segments_are_classified() {
        let path = Path::parse("hello.world[2].nothing").unwrap();
        let kinds: Vec<_> = path.iter().map(PathElement::kind).collect();
        assert_eq!(
            kinds,
            [
                PathElementKind::Object,
                PathElementKind::ArrayIndex,
                PathElementKind::Object,
            ]
        );
        assert_eq!(path.get(0), Some(&PathElement::object("hello")));
        assert_eq!(path.get(1), Some(&PathElement::array_index("world", 2)));
        assert_eq!(path.get(2).unwrap().index(), None);
    }

    #[test]
    fn list_accessor_name_is_fixed() {
        let err = Path::parse("list(1)").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ListAccessorName);
        assert_eq!(err.offset, 0);

        let path = Path::parse("list.get(1)").unwrap();
        assert_eq!(path.last(), Some(&PathElement::list_accessor(1)));
        assert_eq!(path.last().unwrap().name(), "get");
    }

    #[test]
    fn malformed_addresses() {
        let cases = [
            ("", ParseErrorKind::Empty, 0),
            ("a..b", ParseErrorKind::EmptySegment, 2),
            (".a", ParseErrorKind::EmptySegment, 0),
            ("a.", ParseErrorKind::EmptySegment, 2),
            ("[1]", ParseErrorKind::EmptyName, 0),
            ("a[]", ParseErrorKind::InvalidIndex, 2),
            ("a[-1]", ParseErrorKind::InvalidIndex, 2),
            ("a[+1]", ParseErrorKind::InvalidIndex, 2),
            ("a[x]", ParseErrorKind::InvalidIndex, 2),
            ("a[01]", ParseErrorKind::LeadingZeros, 2),
            ("a.b[1", ParseErrorKind::Unclosed(']'), 5),
            ("get(1", ParseErrorKind::Unclosed(')'), 5),
            ("a[1]x", ParseErrorKind::TrailingCharacters(']'), 4),
            ("a[99999999999999999999999]", ParseErrorKind::IndexOverflow, 2),
        ];
        for (text, kind, offset) in cases {
            let err = Path::parse(text).unwrap_err();
            assert_eq!((err.kind, err.offset), (kind, offset), "{text}");
            assert_eq!(&*err.path, text);
        }
    }

    #[test]
    fn append_is_associative() {
        let base = Path::parse("pipeline.actors[1]").unwrap();
        let appended = base.append("filter").unwrap().append("get(2)").unwrap();
        let parsed = Path::parse("pipeline.actors[1].filter.get(2)").unwrap();
        assert_eq!(appended.to_string(), parsed.to_string());
        assert_eq!(appended, parsed);
        assert_eq!(base.len(), 2);

        let err = base.append("a.b").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedSeparator);

        let from_root = Path::current().append("pipeline").unwrap();
        assert_eq!(from_root.to_string(), "pipeline");
    }

    #[test]
    fn subpath_is_half_open() {
        let path = Path::parse("a.b[1].c.get(0)").unwrap();
        assert_eq!(path.subpath(1..3).to_string(), "b[1].c");
        assert_eq!(path.subpath(2..).to_string(), "c.get(0)");
        assert!(path.subpath(2..2).is_current());
        assert_eq!(path.subpath(..), path);
    }

    #[test]
    #[should_panic]
    fn subpath_out_of_range_panics() {
        let path = Path::parse("a.b").unwrap();
        let _ = path.subpath(1..3);
    }

    #[test]
    fn parent_and_prefix() {
        let path = Path::parse("a.b[1].c").unwrap();
        let parent = path.parent().unwrap();
        assert_eq!(parent.to_string(), "a.b[1]");
        assert!(path.starts_with(&parent));
        assert!(path.starts_with(&Path::current()));
        assert!(!parent.starts_with(&path));

        let top = Path::parse("a").unwrap().parent().unwrap();
        assert!(top.is_current());
        assert_eq!(top.parent(), None);
    }

    #[test]
    #[should_panic]
    fn invalid_element_name_panics() {
        let _ = PathElement::object("a.b");
    }

    #[test]
    #[should_panic]
    fn empty_index_name_panics() {
        let _ = PathElement::array_index("", 1);
    }

    #[test]
    fn built_paths_parse_back() {
        for name in ["", "a.b", "x[1]", "get(0)"] {
            assert!(!is_valid_name(name));
        }

        let path = Path::from_elements([
            PathElement::object("pipeline"),
            PathElement::array_index("actors", 1),
            PathElement::list_accessor(0),
        ]);
        assert_eq!(path.to_string(), "pipeline.actors[1].get(0)");
        assert_eq!(Path::parse(&path.to_string()).unwrap(), path);
    }
}

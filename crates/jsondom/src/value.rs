//! Dynamically-typed view of a single node.

use std::fmt;
use std::ptr;

use crate::error::{Error, Result};
use crate::mapping::Mapping;
use crate::node::{Kind, Node};
use crate::path;
use crate::render;
use crate::sequence::Sequence;

/// A borrowed handle to one node of a [`Document`](crate::Document).
///
/// `Value` is `Copy` and holds nothing but the reference, so it can be passed
/// around freely. It cannot outlive the document it was taken from.
///
/// Two values compare equal only when they refer to the same node; use
/// [`render`](crate::render()) to compare contents.
#[derive(Clone, Copy)]
pub struct Value<'doc> {
    node: &'doc Node,
}

impl<'doc> Value<'doc> {
    pub(crate) fn new(node: &'doc Node) -> Self {
        Self { node }
    }

    pub(crate) fn node(self) -> &'doc Node {
        self.node
    }

    /// The kind of the underlying node. Never fails.
    pub fn kind(self) -> Kind {
        self.node.kind()
    }

    /// Whether this is `null`.
    pub fn is_null(self) -> bool {
        matches!(self.node, Node::Null)
    }

    /// Whether this is a boolean.
    pub fn is_bool(self) -> bool {
        matches!(self.node, Node::Bool(_))
    }

    /// Whether this is a number. Integer and real literals both qualify; see
    /// [`as_i64`](Self::as_i64) for integer access.
    pub fn is_number(self) -> bool {
        matches!(self.node, Node::Number(_))
    }

    /// Whether this is a string.
    pub fn is_string(self) -> bool {
        matches!(self.node, Node::String(_))
    }

    /// Whether this is a list.
    pub fn is_list(self) -> bool {
        matches!(self.node, Node::List(_))
    }

    /// Whether this is a map.
    pub fn is_map(self) -> bool {
        matches!(self.node, Node::Map(_))
    }

    /// Read a boolean.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Type`] unless the kind is [`Kind::Bool`].
    pub fn as_bool(self) -> Result<bool> {
        match self.node {
            Node::Bool(b) => Ok(*b),
            _ => Err(self.mismatch(Kind::Bool)),
        }
    }

    /// Read a number as the stored `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Type`] unless the kind is [`Kind::Number`].
    pub fn as_number(self) -> Result<f64> {
        match self.node {
            Node::Number(n) => Ok(*n),
            _ => Err(self.mismatch(Kind::Number)),
        }
    }

    /// Read a number as an `i64`.
    ///
    /// The conversion is exact: the stored `f64` must be integral and inside
    /// the `i64` range. Nothing is rounded or truncated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Type`] for non-numbers and [`Error::NotAnInteger`] for
    /// numbers with a fractional part or out of range.
    pub fn as_i64(self) -> Result<i64> {
        let value = self.as_number()?;
        // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound.
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            Ok(value as i64)
        } else {
            Err(Error::NotAnInteger { value })
        }
    }

    /// Read a string. The returned slice borrows from the document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Type`] unless the kind is [`Kind::String`].
    pub fn as_str(self) -> Result<&'doc str> {
        match self.node {
            Node::String(s) => Ok(s),
            _ => Err(self.mismatch(Kind::String)),
        }
    }

    /// Narrow to a [`Sequence`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Type`] unless the kind is [`Kind::List`].
    pub fn as_sequence(self) -> Result<Sequence<'doc>> {
        Sequence::try_from(self)
    }

    /// Narrow to a [`Mapping`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Type`] unless the kind is [`Kind::Map`].
    pub fn as_mapping(self) -> Result<Mapping<'doc>> {
        Mapping::try_from(self)
    }

    /// Follow a dot-separated path from this value.
    ///
    /// Each segment names a map member, or, when the current value is a list,
    /// gives a decimal element index. The empty path selects `self`.
    ///
    /// ```
    /// use jsondom::Document;
    ///
    /// let doc = Document::parse(r#"{"a":{"b":[10,20]}}"#).unwrap();
    /// let v = doc.root().select("a.b.1").unwrap();
    /// assert_eq!(v.as_number().unwrap(), 20.0);
    /// ```
    ///
    /// # Errors
    ///
    /// Whatever the failing step returns: [`Error::Key`], [`Error::Index`],
    /// [`Error::Segment`], or [`Error::Type`] when a step lands on a scalar.
    pub fn select(self, path: &str) -> Result<Value<'doc>> {
        path::select(self, path)
    }

    /// Render this value as compact JSON text.
    pub fn render(self) -> String {
        render::render(self)
    }

    pub(crate) fn mismatch(self, expected: Kind) -> Error {
        Error::Type {
            expected,
            found: self.kind(),
        }
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.node, other.node)
    }
}

impl Eq for Value<'_> {}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({})", render::render(*self))
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render(*self))
    }
}

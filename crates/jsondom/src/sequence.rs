//! Positional view of a list node.

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use crate::error::{Error, Result};
use crate::node::{Kind, Node};
use crate::render;
use crate::value::Value;

/// A [`Value`] known to be a list.
///
/// Obtained with [`Value::as_sequence`] or `Sequence::try_from(value)`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Sequence<'doc> {
    value: Value<'doc>,
}

impl<'doc> Sequence<'doc> {
    fn items(self) -> &'doc [Node] {
        match self.value.node() {
            Node::List(items) => items,
            _ => unreachable!("Sequence is constructed only over list nodes"),
        }
    }

    /// Number of elements.
    pub fn len(self) -> usize {
        self.items().len()
    }

    /// Whether the list has no elements.
    pub fn is_empty(self) -> bool {
        self.items().is_empty()
    }

    /// Element at `index`, counting from zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Index`] when `index >= self.len()`.
    pub fn get(self, index: usize) -> Result<Value<'doc>> {
        self.items()
            .get(index)
            .map(Value::new)
            .ok_or_else(|| Error::Index {
                index: index as i128,
                len: self.len(),
            })
    }

    /// Like [`get`](Self::get), for callers holding a signed index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Index`] for negative indices and for indices
    /// `>= self.len()`.
    pub fn get_signed(self, index: i64) -> Result<Value<'doc>> {
        match usize::try_from(index) {
            Ok(index) => self.get(index),
            Err(_) => Err(Error::Index {
                index: index as i128,
                len: self.len(),
            }),
        }
    }

    /// Iterate over the elements in order.
    pub fn iter(self) -> Iter<'doc> {
        Iter {
            inner: self.items().iter(),
        }
    }

    /// Widen back to a [`Value`].
    pub fn as_value(self) -> Value<'doc> {
        self.value
    }

    /// Render this list as compact JSON text.
    pub fn render(self) -> String {
        render::render(self)
    }
}

impl<'doc> TryFrom<Value<'doc>> for Sequence<'doc> {
    type Error = Error;

    fn try_from(value: Value<'doc>) -> Result<Self> {
        match value.kind() {
            Kind::List => Ok(Self { value }),
            _ => Err(value.mismatch(Kind::List)),
        }
    }
}

impl<'doc> From<Sequence<'doc>> for Value<'doc> {
    fn from(seq: Sequence<'doc>) -> Self {
        seq.value
    }
}

impl<'doc> IntoIterator for Sequence<'doc> {
    type Item = Value<'doc>;
    type IntoIter = Iter<'doc>;

    fn into_iter(self) -> Iter<'doc> {
        self.iter()
    }
}

impl fmt::Debug for Sequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for Sequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

/// Iterator over the elements of a [`Sequence`].
#[derive(Clone, Debug)]
pub struct Iter<'doc> {
    inner: slice::Iter<'doc, Node>,
}

impl<'doc> Iterator for Iter<'doc> {
    type Item = Value<'doc>;

    fn next(&mut self) -> Option<Value<'doc>> {
        self.inner.next().map(Value::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Value::new)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

//! Name-keyed view of a map node.
//!
//! Lookups scan the members in source order and stop at the first name that
//! matches. JSON allows an object to repeat a name; later duplicates stay in
//! the tree and show up in [`Mapping::iter`], but [`Mapping::get`] never
//! returns them.

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use crate::error::{Error, Result};
use crate::node::{Kind, Node};
use crate::render;
use crate::value::Value;

/// A [`Value`] known to be a map.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Mapping<'doc> {
    value: Value<'doc>,
}

impl<'doc> Mapping<'doc> {
    pub(crate) fn new_unchecked(value: Value<'doc>) -> Self {
        debug_assert_eq!(value.kind(), Kind::Map);
        Self { value }
    }

    fn members(self) -> &'doc [(String, Node)] {
        match self.value.node() {
            Node::Map(members) => members,
            _ => unreachable!("Mapping is constructed only over map nodes"),
        }
    }

    /// Value of the first member called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Key`] if no member has that name.
    pub fn get(self, name: &str) -> Result<Value<'doc>> {
        self.members()
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, node)| Value::new(node))
            .ok_or_else(|| Error::Key {
                name: name.to_owned(),
            })
    }

    /// Whether any member is called `name`.
    pub fn contains_key(self, name: &str) -> bool {
        self.members().iter().any(|(key, _)| key == name)
    }

    /// Number of members, duplicates counted.
    pub fn len(self) -> usize {
        self.members().len()
    }

    /// Whether the map has no members.
    pub fn is_empty(self) -> bool {
        self.members().is_empty()
    }

    /// Iterate over `(name, value)` pairs in source order.
    pub fn iter(self) -> Members<'doc> {
        Members {
            inner: self.members().iter(),
        }
    }

    /// Iterate over member names in source order.
    pub fn keys(self) -> impl DoubleEndedIterator<Item = &'doc str> + ExactSizeIterator {
        self.members().iter().map(|(key, _)| key.as_str())
    }

    /// Widen back to a [`Value`].
    pub fn as_value(self) -> Value<'doc> {
        self.value
    }

    /// Follow a dot-separated path; see [`Value::select`].
    ///
    /// # Errors
    ///
    /// As for [`Value::select`].
    pub fn select(self, path: &str) -> Result<Value<'doc>> {
        self.value.select(path)
    }

    /// Render this map as compact JSON text.
    pub fn render(self) -> String {
        render::render(self)
    }
}

impl<'doc> TryFrom<Value<'doc>> for Mapping<'doc> {
    type Error = Error;

    fn try_from(value: Value<'doc>) -> Result<Self> {
        match value.kind() {
            Kind::Map => Ok(Self { value }),
            _ => Err(value.mismatch(Kind::Map)),
        }
    }
}

impl<'doc> From<Mapping<'doc>> for Value<'doc> {
    fn from(map: Mapping<'doc>) -> Self {
        map.value
    }
}

impl<'doc> IntoIterator for Mapping<'doc> {
    type Item = (&'doc str, Value<'doc>);
    type IntoIter = Members<'doc>;

    fn into_iter(self) -> Members<'doc> {
        self.iter()
    }
}

impl fmt::Debug for Mapping<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Display for Mapping<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

/// Iterator over the members of a [`Mapping`].
#[derive(Clone, Debug)]
pub struct Members<'doc> {
    inner: slice::Iter<'doc, (String, Node)>,
}

impl<'doc> Iterator for Members<'doc> {
    type Item = (&'doc str, Value<'doc>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, node)| (key.as_str(), Value::new(node)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Members<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(key, node)| (key.as_str(), Value::new(node)))
    }
}

impl ExactSizeIterator for Members<'_> {}

impl FusedIterator for Members<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(text: &str) -> Node {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn iteration_includes_duplicates() {
        let n = node(r#"{"k":1,"j":2,"k":3}"#);
        let map = Value::new(&n).as_mapping().unwrap();
        let pairs: Vec<(&str, f64)> = map
            .iter()
            .map(|(k, v)| (k, v.as_number().unwrap()))
            .collect();
        assert_eq!(pairs, vec![("k", 1.0), ("j", 2.0), ("k", 3.0)]);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["k", "j", "k"]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    #[should_panic(expected = "map nodes")]
    fn mapping_over_a_non_map_panics() {
        let n = node("[1,2]");
        let map = Mapping {
            value: Value::new(&n),
        };
        map.len();
    }

    #[test]
    fn contains_key() {
        let n = node(r#"{"present":null}"#);
        let map = Value::new(&n).as_mapping().unwrap();
        assert!(map.contains_key("present"));
        assert!(!map.contains_key("absent"));
    }

    #[test]
    fn debug_lists_members() {
        let n = node(r#"{"a":true}"#);
        let map = Value::new(&n).as_mapping().unwrap();
        assert_eq!(format!("{map:?}"), r#"{"a": Value(true)}"#);
    }
}

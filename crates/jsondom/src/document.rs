//! Ownership of a parsed tree.
//!
//! A [`Document`] is built by handing the input to `serde_json` once. The
//! resulting tree is kept for as long as the document lives, and every
//! [`Value`], [`Sequence`](crate::Sequence) and [`Mapping`] taken from it
//! borrows from it. Dropping the document frees the whole tree; the borrow
//! checker rejects any view still in use at that point.
//!
//! Only objects are accepted as the root. A well-formed input whose root is a
//! list or scalar is rejected with [`Error::RootNotMap`].

use std::fmt;
use std::io;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::mapping::Mapping;
use crate::node::{Kind, Node};
use crate::render;
use crate::value::Value;

/// A parsed JSON document whose root is an object.
#[derive(Clone, PartialEq)]
pub struct Document {
    root: Node,
}

impl Document {
    /// Parse a document from text.
    ///
    /// # Errors
    ///
    /// [`Error::Json`] if the text is not well-formed JSON (line and column
    /// are available through [`Error::line`] and [`Error::column`]),
    /// [`Error::RootNotMap`] if it is but the root is not an object.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_root(serde_json::from_str(text)?)
    }

    /// Parse a document from UTF-8 bytes.
    ///
    /// # Errors
    ///
    /// As for [`parse`](Self::parse); invalid UTF-8 is reported as
    /// [`Error::Json`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_root(serde_json::from_slice(bytes)?)
    }

    /// Parse a document from a reader, consuming it to the end.
    ///
    /// # Errors
    ///
    /// As for [`parse`](Self::parse); read failures are reported as
    /// [`Error::Json`].
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        Self::from_root(serde_json::from_reader(reader)?)
    }

    fn from_root(root: Node) -> Result<Self> {
        match root.kind() {
            Kind::Map => Ok(Self { root }),
            found => Err(Error::RootNotMap { found }),
        }
    }

    /// The root as a dynamically-typed value. Its kind is always [`Kind::Map`].
    pub fn root(&self) -> Value<'_> {
        Value::new(&self.root)
    }

    /// The root as a mapping.
    pub fn as_mapping(&self) -> Mapping<'_> {
        // from_root only admits map roots.
        Mapping::new_unchecked(self.root())
    }

    /// Shorthand for `self.as_mapping().get(name)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Key`] if the root has no member called `name`.
    pub fn get(&self, name: &str) -> Result<Value<'_>> {
        self.as_mapping().get(name)
    }

    /// Follow a dot-separated path from the root; see [`Value::select`].
    ///
    /// # Errors
    ///
    /// As for [`Value::select`].
    pub fn select(&self, path: &str) -> Result<Value<'_>> {
        self.root().select(path)
    }

    /// Render the whole document as compact JSON text.
    pub fn render(&self) -> String {
        render::render(self)
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<'doc> From<&'doc Document> for Value<'doc> {
    fn from(doc: &'doc Document) -> Self {
        doc.root()
    }
}

impl<'doc> From<&'doc Document> for Mapping<'doc> {
    fn from(doc: &'doc Document) -> Self {
        doc.as_mapping()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Document").field(&self.root()).finish()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root(), f)
    }
}

//! # jsondom
//!
//! Read-only document model for **JSON**, with borrowed, type-checked views.
//!
//! A [`Document`] parses its input once and owns the resulting tree. Everything
//! else is a cheap `Copy` view that borrows from it:
//!
//! - [`Value`] -- any node; kind predicates and checked scalar conversions
//! - [`Sequence`] -- a node known to be a list; length and positional access
//! - [`Mapping`] -- a node known to be an object; first-match name lookup
//!
//! Every conversion returns a [`Result`]: reading a value as the wrong kind,
//! indexing past the end, or asking for a missing name produces an [`Error`]
//! instead of a default. Views cannot outlive their document; the compiler
//! enforces it.
//!
//! ## Quick start
//!
//! ```rust
//! use jsondom::{Document, Kind};
//!
//! let doc = Document::parse(r#"{"foo":[1,"a"],"bar":1.1}"#).unwrap();
//!
//! let foo = doc.get("foo").unwrap().as_sequence().unwrap();
//! assert_eq!(foo.len(), 2);
//! assert_eq!(foo.get(0).unwrap().as_number().unwrap(), 1.0);
//! assert_eq!(foo.get(1).unwrap().as_str().unwrap(), "a");
//! assert_eq!(doc.get("bar").unwrap().kind(), Kind::Number);
//!
//! // Views render back to JSON
//! assert_eq!(foo.to_string(), r#"[1,"a"]"#);
//! ```
//!
//! A view that would outlive its document does not compile:
//!
//! ```compile_fail
//! use jsondom::Document;
//!
//! let dangling = {
//!     let doc = Document::parse(r#"{"a":1}"#).unwrap();
//!     doc.get("a").unwrap()
//! };
//! println!("{dangling}");
//! ```
//!
//! ## Modules
//!
//! - [`document`] -- parsing and ownership of the tree
//! - [`value`], [`sequence`], [`mapping`] -- the view types
//! - [`render`](mod@render) -- JSON text output, compact or indented
//! - [`error`] -- error types and their classification
//!
//! Parsing itself is done by `serde_json`; this crate only decides how the
//! parsed tree is stored, viewed and written back out.

pub mod document;
pub mod error;
pub mod mapping;
mod node;
mod path;
pub mod render;
pub mod sequence;
pub mod value;

pub use document::Document;
pub use error::{Error, ErrorKind, Result};
pub use mapping::Mapping;
pub use node::Kind;
pub use render::{render, render_with, RenderOptions};
pub use sequence::Sequence;
pub use value::Value;

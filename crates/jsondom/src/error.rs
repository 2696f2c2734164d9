//! Error types for document parsing and view access.

use std::fmt;

use thiserror::Error;

use crate::node::Kind;

/// Errors that can occur while parsing a document or reading through a view.
#[derive(Error, Debug)]
pub enum Error {
    /// The input was not well-formed JSON, was not valid UTF-8, or could not be read.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input was well-formed JSON but its root value is not an object.
    #[error("document root must be a map, found {found}")]
    RootNotMap { found: Kind },

    /// A narrowing or scalar conversion was applied to a value of another kind.
    #[error("type mismatch: expected {expected}, found {found}")]
    Type { expected: Kind, found: Kind },

    /// The value is a number, but not one that converts exactly to `i64`.
    #[error("number {value} is not representable as a 64-bit integer")]
    NotAnInteger { value: f64 },

    /// Positional access outside `[0, len)`.
    #[error("index {index} out of bounds for list of length {len}")]
    Index { index: i128, len: usize },

    /// A path segment applied to a list is not a decimal index.
    #[error("path segment {segment:?} is not a list index")]
    Segment { segment: String },

    /// Name access on a map with no member of that name.
    #[error("no member named {name:?}")]
    Key { name: String },
}

/// Coarse classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Document construction failed.
    Parse,
    /// A value was read as the wrong kind.
    Type,
    /// A list position was out of range.
    Index,
    /// A map name was not present.
    Key,
}

impl Error {
    /// The class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Json(_) | Error::RootNotMap { .. } => ErrorKind::Parse,
            Error::Type { .. } | Error::NotAnInteger { .. } => ErrorKind::Type,
            Error::Index { .. } | Error::Segment { .. } => ErrorKind::Index,
            Error::Key { .. } => ErrorKind::Key,
        }
    }

    /// 1-based line reported by the parser, when it reported one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Json(err) if err.line() > 0 => Some(err.line()),
            _ => None,
        }
    }

    /// 1-based column reported by the parser, when it reported one.
    pub fn column(&self) -> Option<usize> {
        match self {
            Error::Json(err) if err.line() > 0 => Some(err.column()),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::Parse => "parse",
            ErrorKind::Type => "type",
            ErrorKind::Index => "index",
            ErrorKind::Key => "key",
        })
    }
}

/// Convenience alias used throughout jsondom.
pub type Result<T> = std::result::Result<T, Error>;

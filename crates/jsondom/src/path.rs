//! Dot-separated path selection.
//!
//! # Path syntax
//!
//! - `""` -- the starting value itself
//! - `"name"` -- the first member called `name`
//! - `"items.0.id"` -- member `items`, its first element, that element's `id`
//!
//! A segment is read as a list index only when the value it is applied to is
//! a list. Member names containing `.` cannot be addressed this way; use
//! [`Mapping::get`](crate::Mapping::get) directly.

use crate::error::{Error, Result};
use crate::node::Kind;
use crate::value::Value;

/// A parsed path, split on dots.
#[derive(Debug, Clone)]
struct Path<'a> {
    segments: Vec<&'a str>,
}

impl<'a> Path<'a> {
    fn parse(path: &'a str) -> Self {
        if path.is_empty() {
            return Self {
                segments: Vec::new(),
            };
        }
        Self {
            segments: path.split('.').collect(),
        }
    }
}

/// Walk `path` starting at `start`, one segment at a time.
pub(crate) fn select<'doc>(start: Value<'doc>, path: &str) -> Result<Value<'doc>> {
    let mut current = start;
    for segment in Path::parse(path).segments {
        current = step(current, segment)?;
    }
    Ok(current)
}

fn step<'doc>(current: Value<'doc>, segment: &str) -> Result<Value<'doc>> {
    match current.kind() {
        Kind::Map => current.as_mapping()?.get(segment),
        Kind::List => {
            let index = parse_index(segment)?;
            current.as_sequence()?.get(index)
        }
        _ => Err(current.mismatch(Kind::Map)),
    }
}

/// Decimal digits only: no sign, no whitespace.
fn parse_index(segment: &str) -> Result<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Segment {
            segment: segment.to_owned(),
        });
    }
    segment.parse().map_err(|_| Error::Segment {
        segment: segment.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_dots() {
        assert!(Path::parse("").segments.is_empty());
        assert_eq!(Path::parse("a").segments, vec!["a"]);
        assert_eq!(Path::parse("a.0.b").segments, vec!["a", "0", "b"]);
        assert_eq!(Path::parse("a..b").segments, vec!["a", "", "b"]);
    }

    #[test]
    fn index_segments() {
        assert_eq!(parse_index("0").unwrap(), 0);
        assert_eq!(parse_index("017").unwrap(), 17);
        assert!(matches!(parse_index("-1"), Err(Error::Segment { .. })));
        assert!(matches!(parse_index("+1"), Err(Error::Segment { .. })));
        assert!(matches!(parse_index(""), Err(Error::Segment { .. })));
        assert!(matches!(
            parse_index("99999999999999999999999"),
            Err(Error::Segment { .. })
        ));
    }
}

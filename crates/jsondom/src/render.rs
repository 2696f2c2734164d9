//! JSON text output for any view.
//!
//! The default output is compact, with no whitespace between tokens:
//!
//! - **Null / booleans**: the literals `null`, `true`, `false`
//! - **Numbers**: shortest decimal form that parses back to the same `f64`;
//!   exponent notation for very large or very small magnitudes
//! - **Strings and member names**: double-quoted, with `"`, `\` and every
//!   control character escaped
//! - **Lists / maps**: `[a,b]` and `{"k":v}` in stored order; empty
//!   containers render as `[]` and `{}`
//!
//! [`RenderOptions::pretty`] switches to one element per line.
//!
//! # Example
//! ```
//! use jsondom::{render, Document};
//! let doc = Document::parse(r#"{ "foo": [1, "a"], "bar": 1.1 }"#).unwrap();
//! assert_eq!(render(&doc), r#"{"foo":[1,"a"],"bar":1.1}"#);
//! ```

use crate::node::Node;
use crate::value::Value;

/// Layout settings for [`render_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per nesting level, or `None` for compact output.
    pub indent: Option<usize>,
}

impl RenderOptions {
    /// Compact output; the same as [`render`].
    pub fn compact() -> Self {
        Self { indent: None }
    }

    /// One element or member per line, indented by `indent` spaces per level.
    pub fn pretty(indent: usize) -> Self {
        Self {
            indent: Some(indent),
        }
    }
}

/// Render a value, sequence, mapping or document as compact JSON.
pub fn render<'doc>(value: impl Into<Value<'doc>>) -> String {
    render_with(value, &RenderOptions::compact())
}

/// Render with explicit layout options.
pub fn render_with<'doc>(value: impl Into<Value<'doc>>, options: &RenderOptions) -> String {
    let value: Value<'doc> = value.into();
    let mut out = String::new();
    render_node(value.node(), options, 0, &mut out);
    out
}

/// Recursive dispatch on the node kind. Depth is bounded by the parser's
/// nesting limit.
fn render_node(node: &Node, options: &RenderOptions, depth: usize, out: &mut String) {
    match node {
        Node::Null => out.push_str("null"),
        Node::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Node::Number(n) => out.push_str(&format_number(*n)),
        Node::String(s) => encode_string(s, out),
        Node::List(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                newline(options, depth + 1, out);
                render_node(item, options, depth + 1, out);
            }
            newline(options, depth, out);
            out.push(']');
        }
        Node::Map(members) => {
            if members.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push('{');
            for (i, (name, value)) in members.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                newline(options, depth + 1, out);
                encode_string(name, out);
                out.push(':');
                if options.indent.is_some() {
                    out.push(' ');
                }
                render_node(value, options, depth + 1, out);
            }
            newline(options, depth, out);
            out.push('}');
        }
    }
}

/// Line break plus indentation in pretty mode; nothing in compact mode.
fn newline(options: &RenderOptions, depth: usize, out: &mut String) {
    if let Some(width) = options.indent {
        out.push('\n');
        out.push_str(&" ".repeat(width * depth));
    }
}

/// Format a number so that it parses back to the same `f64`.
///
/// - Integral values print without a fraction (`1.0` → `1`)
/// - Magnitudes `>= 1e16` or `< 1e-6` use exponent notation (`1e300`)
/// - Non-finite values cannot come out of the parser; they print as `null`
fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "null".to_string();
    }
    let magnitude = n.abs();
    if magnitude != 0.0 && !(1e-6..1e16).contains(&magnitude) {
        format!("{:e}", n)
    } else {
        format!("{}", n)
    }
}

/// Emit a double-quoted JSON string, escaping `"`, `\` and control characters.
fn encode_string(s: &str, out: &mut String) {
    out.reserve(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if c < '\u{20}' => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

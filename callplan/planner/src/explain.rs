//! Summary formatting shared by all plan node kinds.
//!
//! Every node renders itself as
//!
//! ```text
//! NAME: (key1: value1, key2: value2)
//!     CHILD1 ...
//!     CHILD2 ...
//! ```
//!
//! where the parameter section is omitted when there are no parameters, and each child's
//! summary is indented by [`OPERATION_INDENT`] on every line. Newlines inside single-quoted
//! literals are left untouched so that quoted values survive nesting byte for byte.

use std::fmt::Display;

use indexmap::IndexMap;
use itertools::Itertools;

pub const OPERATION_INDENT: &str = "    ";

/// Capability of rendering a human-readable summary for plan inspection.
pub trait Summarizable {
    fn as_summary_string(&self) -> String;
}

/// Formats a node named `name` with its ordered `params` and the summaries of its `children`.
pub fn format_with_children<T, F>(
    name: &str,
    params: &IndexMap<&str, String>,
    children: &[T],
    child_to_string: F,
) -> String
where
    F: Fn(&T) -> String,
{
    let description = params
        .iter()
        .map(|(key, value)| format_parameter(key, value))
        .join(", ");
    let mut output = format!("{name}:");
    if !description.trim().is_empty() {
        output.push_str(" (");
        output.push_str(&description);
        output.push(')');
    }
    for child in children {
        output.push_str(&indent(&child_to_string(child)));
    }
    output
}

#[inline]
pub fn format_parameter(name: &str, value: &str) -> String {
    format!("{name}: {value}")
}

/// Formats an ordered sequence as `[a, b, c]`.
pub fn format_sequence<T: Display>(items: &[T]) -> String {
    format!("[{}]", items.iter().join(", "))
}

/// Moves `item` onto a new line and indents each of its lines by [`OPERATION_INDENT`].
pub fn indent(item: &str) -> String {
    let bytes = item.as_bytes();
    let mut output = String::with_capacity(item.len() + OPERATION_INDENT.len() + 1);
    output.push('\n');
    output.push_str(OPERATION_INDENT);

    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\'' => {
                if let Some(end) = literal_end(bytes, i) {
                    i = end + 1;
                    continue;
                }
            }
            b'\n' => {
                output.push_str(&item[start..=i]);
                output.push_str(OPERATION_INDENT);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    output.push_str(&item[start..]);
    output
}

/// Finds the closing quote of the literal opened at `open`.
///
/// `''` inside a literal is an escaped quote. If the literal is never closed by a lone quote,
/// the longest prefix that is still a complete literal wins, i.e. the first quote of the last
/// `''` pair closes it.
fn literal_end(bytes: &[u8], open: usize) -> Option<usize> {
    let mut fallback = None;
    let mut i = open + 1;
    while i < bytes.len() {
        if bytes[i] == b'\'' {
            if bytes.get(i + 1) == Some(&b'\'') {
                fallback = Some(i);
                i += 2;
                continue;
            }
            return Some(i);
        }
        i += 1;
    }
    fallback
}

//! A built-in dynamic value type.
//!
//! Embedding runtimes normally implement [`Render`] for their own boxed
//! values; `Value` exists so the crate is usable and testable without one.

use alloc::vec::Vec;

use bstr::BString;

use crate::render::Render;

/// A host-style dynamic value: scalar, byte string, or list.
///
/// String payloads are [`BString`] rather than `String` because host strings
/// are raw byte sequences; nothing in this crate requires them to be valid
/// UTF-8.
///
/// # Examples
///
/// ```
/// use chartape::{Value, join};
///
/// let row = [Value::from("total"), Value::from(3_i64), Value::from(0.5)];
/// assert_eq!(join(&row, b'\t'), "total\t3\t0.5");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Double(f64),
    Str(BString),
    List(Vec<Value>),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.into())
    }
}

impl From<BString> for Value {
    fn from(v: BString) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::List(v)
    }
}

impl Value {
    /// Returns `true` if the value is a [`Str`].
    ///
    /// [`Str`]: Value::Str
    #[must_use]
    pub fn is_str(&self) -> bool {
        matches!(self, Self::Str(..))
    }

    /// Returns `true` if the value is a [`List`].
    ///
    /// [`List`]: Value::List
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(..))
    }

    /// The string payload, if the value is a [`Str`].
    ///
    /// [`Str`]: Value::Str
    #[must_use]
    pub fn as_str(&self) -> Option<&BString> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl Render for Value {
    fn render_to(&self, out: &mut Vec<u8>) {
        match self {
            Value::Boolean(b) => b.render_to(out),
            Value::Integer(n) => n.render_to(out),
            Value::Double(n) => n.render_to(out),
            // Raw bytes at top level; quoting only happens inside lists.
            Value::Str(s) => out.extend_from_slice(s),
            Value::List(items) => render_list(items, out),
        }
    }
}

fn render_list(items: &[Value], out: &mut Vec<u8>) {
    out.push(b'[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.extend_from_slice(b", ");
        }
        match item {
            Value::Str(s) => push_quoted(s, out),
            other => other.render_to(out),
        }
    }
    out.push(b']');
}

fn push_quoted(s: &[u8], out: &mut Vec<u8>) {
    out.push(b'"');
    for &b in s {
        if b == b'"' || b == b'\\' {
            out.push(b'\\');
        }
        out.push(b);
    }
    out.push(b'"');
}

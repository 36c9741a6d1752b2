//! The value-rendering capability.
//!
//! [`render`](crate::render()), [`join`](crate::join()) and `print` are
//! generic over how a value becomes text. That
//! polymorphism belongs to the embedding host — a scripting runtime renders
//! its own boxed values — so it is a single-method trait here rather than a
//! closed set of kinds. Implementations for ordinary Rust types cover tests
//! and simple embedders; the `values` feature adds a dynamic
//! [`Value`](crate::Value) host.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use bstr::{BStr, BString};

/// Renders a value as raw text.
///
/// Rendering is raw: a string appends its bytes with no quoting or escaping.
/// The output buffer is append-only; implementations must not inspect or
/// rewrite what is already there.
pub trait Render {
    /// Append the textual form of `self` to `out`.
    fn render_to(&self, out: &mut Vec<u8>);
}

impl<T: Render + ?Sized> Render for &T {
    fn render_to(&self, out: &mut Vec<u8>) {
        (**self).render_to(out);
    }
}

impl Render for str {
    fn render_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.as_bytes());
    }
}

impl Render for String {
    fn render_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.as_bytes());
    }
}

impl Render for BStr {
    fn render_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self);
    }
}

impl Render for BString {
    fn render_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self);
    }
}

impl Render for bool {
    fn render_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(if *self { b"true" } else { b"false" });
    }
}

impl Render for i64 {
    fn render_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.to_string().as_bytes());
    }
}

impl Render for f64 {
    fn render_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.to_string().as_bytes());
    }
}

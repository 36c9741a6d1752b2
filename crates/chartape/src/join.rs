//! Delimiter joining and tab-separated printing.

use alloc::vec::Vec;

use bstr::BString;

use crate::render::Render;

/// Renders each value and joins the results with `delim` between consecutive
/// elements — none before the first, none after the last.
///
/// ```
/// assert_eq!(chartape::join(&["a", "b", "c"], b'-'), "a-b-c");
/// ```
#[must_use]
pub fn join<V: Render>(values: &[V], delim: u8) -> BString {
    let mut out = Vec::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(delim);
        }
        value.render_to(&mut out);
    }
    out.into()
}

/// Writes `values` joined by tabs, plus a trailing newline, to `out`.
///
/// # Errors
///
/// Any error the writer reports.
#[cfg(feature = "host")]
pub fn print_to<V: Render, W: std::io::Write>(values: &[V], out: &mut W) -> std::io::Result<()> {
    let mut line = join(values, b'\t');
    line.push(b'\n');
    out.write_all(&line)
}

/// [`print_to`] on standard output.
///
/// # Errors
///
/// Any error standard output reports.
#[cfg(feature = "host")]
pub fn print<V: Render>(values: &[V]) -> std::io::Result<()> {
    print_to(values, &mut std::io::stdout().lock())
}

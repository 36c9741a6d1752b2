//! Thin delegations to the standard library and the operating system.
//!
//! Everything here is host-side plumbing around the pure core: whole-file
//! reads, subprocess capture, whole-input numeric parsing, and process
//! termination. The parse functions accept the entire input or nothing —
//! leading or trailing garbage, or an empty string, yields `None`.

use std::{
    io::{self, Read},
    process::Command,
    vec::Vec,
};

use bstr::BString;

/// Reads `input` to exhaustion.
///
/// No UTF-8 validation is performed; the result is whatever bytes the reader
/// produced.
///
/// # Errors
///
/// Any error the reader reports.
pub fn read_all<R: Read>(input: &mut R) -> io::Result<BString> {
    let mut buf = Vec::new();
    input.read_to_end(&mut buf)?;
    Ok(buf.into())
}

/// Runs `command` through `sh -c` and captures its standard output.
///
/// Exactly one trailing line feed is trimmed if present, the way shell
/// command substitution trims it. Standard error is inherited; the exit
/// status is not inspected.
///
/// # Errors
///
/// Any error spawning or waiting on the shell reports.
pub fn run_capture(command: &str) -> io::Result<BString> {
    let output = Command::new("sh").arg("-c").arg(command).output()?;
    let mut bytes = output.stdout;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    Ok(bytes.into())
}

/// Parses all of `text` as an integer in `base`.
///
/// `None` on an empty string, any unconsumed byte, overflow, or a base
/// outside 2..=36.
///
/// ```
/// assert_eq!(chartape::parse_integer(b"ff", 16), Some(255));
/// assert_eq!(chartape::parse_integer(b"12x", 10), None);
/// ```
#[must_use]
pub fn parse_integer(text: &[u8], base: u32) -> Option<i64> {
    if !(2..=36).contains(&base) {
        return None;
    }
    let text = core::str::from_utf8(text).ok()?;
    i64::from_str_radix(text, base).ok()
}

/// Parses all of `text` as a 64-bit float.
///
/// `None` on an empty string or any unconsumed byte.
#[must_use]
pub fn parse_float(text: &[u8]) -> Option<f64> {
    core::str::from_utf8(text).ok()?.parse().ok()
}

/// Terminates the process immediately with `code`.
///
/// No cleanup runs beyond what the runtime itself guarantees; buffered
/// output that matters must be flushed first.
pub fn terminate(code: i32) -> ! {
    std::process::exit(code)
}

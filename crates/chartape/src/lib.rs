//! Byte-level UTF-8 stepping over raw, possibly malformed buffers, plus a
//! minimal positional formatter and a delimiter joiner, built for embedding
//! hosts that keep strings as plain byte sequences.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(any(test, feature = "host"))]
extern crate std;

mod classify;
mod cursor;
mod error;
mod format;
mod join;
mod render;

#[cfg(feature = "host")]
mod host;
#[cfg(feature = "values")]
mod value;

#[cfg(test)]
mod tests;

pub use classify::sequence_width;
pub use cursor::{Pos, Steps, advance, char_count, index_to, steps};
pub use error::Error;
pub use format::render;
#[cfg(feature = "host")]
pub use host::{parse_float, parse_integer, read_all, run_capture, terminate};
pub use join::join;
#[cfg(feature = "host")]
pub use join::{print, print_to};
pub use render::Render;
#[cfg(feature = "values")]
pub use value::Value;

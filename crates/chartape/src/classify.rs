//! Byte classification driving every stepping operation in this crate.
//!
//! The table maps a byte to the width of the UTF-8 sequence it leads: 1 for
//! ASCII, 2–4 for multi-byte leads, and 0 for anything that cannot begin a
//! sequence (nul, continuation bytes, the overlong leads `C0`/`C1`, and
//! `F5`..=`FF`). Zero for nul is what lets iteration stop at a terminator
//! without a separate length check.
//!
//! This is a classifier, not a validator: continuation bytes after a lead are
//! never inspected, so malformed sequences still step by the lead's claimed
//! width. Callers that must make progress over stray zero-width bytes apply
//! their own guard (see `cursor`).

#[rustfmt::skip]
const SEQ_WIDTH: [u8; 256] = [
 // 0  1  2  3  4  5  6  7  8  9  A  B  C  D  E  F
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 0
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 1
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 2
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 3
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 4
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 5
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 6
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 7
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 8
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 9
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // A
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // B
    0, 0, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // C
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // D
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, // E
    4, 4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // F
];

/// Width in bytes of the UTF-8 sequence led by `byte`, or 0 if `byte` cannot
/// begin one.
///
/// ```
/// assert_eq!(chartape::sequence_width(b'a'), 1);
/// assert_eq!(chartape::sequence_width(0xC3), 2);
/// assert_eq!(chartape::sequence_width(0x80), 0);
/// ```
#[inline]
#[must_use]
pub fn sequence_width(byte: u8) -> usize {
    usize::from(SEQ_WIDTH[usize::from(byte)])
}

use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::{char_count, index_to, steps};

/// The logical string: everything before the first nul, as the cursor sees it.
fn logical(s: &str) -> &[u8] {
    let bytes = s.as_bytes();
    &bytes[..bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len())]
}

fn scaled_tests() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

#[quickcheck]
fn count_of_ascii_text_is_its_byte_length(s: String) -> bool {
    let buf = logical(&s);
    !buf.is_ascii() || char_count(buf) == buf.len()
}

/// Property: the walk visits exactly the characters of the text, in order.
#[test]
fn walk_yields_each_character_once() {
    fn prop(s: String) -> bool {
        let buf = logical(&s);
        let walk: Vec<_> = steps(buf).collect();

        if buf.is_empty() {
            // The empty buffer's single pseudo-step, then the sentinel.
            return walk == [""];
        }

        let expected: Vec<&str> = {
            // Safe: `buf` is a prefix of a `str` cut at a char boundary.
            let text = core::str::from_utf8(buf).unwrap();
            text.char_indices()
                .map(|(at, ch)| &text[at..at + ch.len_utf8()])
                .collect()
        };
        walk == expected && walk.len() == char_count(buf)
    }

    QuickCheck::new()
        .tests(scaled_tests())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: random access agrees with the walk, forward and backward, and
/// fails exactly at the boundaries.
#[test]
fn indexing_agrees_with_the_walk() {
    fn prop(s: String) -> bool {
        let buf = logical(&s);
        let walk: Vec<_> = steps(buf).filter(|step| !step.is_empty()).collect();
        let count = walk.len();

        for (i, step) in walk.iter().enumerate() {
            let forward = isize::try_from(i).unwrap();
            let backward = forward - isize::try_from(count).unwrap();
            if index_to(buf, forward) != Ok(*step) || index_to(buf, backward) != Ok(*step) {
                return false;
            }
        }

        index_to(buf, isize::try_from(count).unwrap()).is_err()
            && index_to(buf, -isize::try_from(count).unwrap() - 1).is_err()
    }

    QuickCheck::new()
        .tests(scaled_tests())
        .quickcheck(prop as fn(String) -> bool);
}

//! Integration tests for the std-backed host adapters.

#![cfg(feature = "host")]

use std::io::Cursor;

use chartape::{parse_float, parse_integer, read_all, run_capture};

#[test]
fn read_all_drains_the_reader() {
    let mut input = Cursor::new(b"line one\nline two\n".to_vec());
    assert_eq!(read_all(&mut input).unwrap(), "line one\nline two\n");
}

#[test]
fn read_all_keeps_invalid_utf8_bytes() {
    let mut input = Cursor::new(vec![0xFF, 0xC3, b'a']);
    assert_eq!(read_all(&mut input).unwrap(), &[0xFF, 0xC3, b'a'][..]);
}

#[test]
fn run_capture_trims_one_trailing_line_feed() {
    assert_eq!(run_capture("printf 'x\\n'").unwrap(), "x");
    assert_eq!(run_capture("printf 'x\\n\\n'").unwrap(), "x\n");
}

#[test]
fn run_capture_without_trailing_line_feed_is_unchanged() {
    assert_eq!(run_capture("printf x").unwrap(), "x");
}

#[test]
fn run_capture_of_a_silent_command_is_empty() {
    assert_eq!(run_capture("true").unwrap(), "");
}

#[test]
fn parse_integer_requires_the_whole_input() {
    assert_eq!(parse_integer(b"42", 10), Some(42));
    assert_eq!(parse_integer(b"-42", 10), Some(-42));
    assert_eq!(parse_integer(b"ff", 16), Some(255));
    assert_eq!(parse_integer(b"101", 2), Some(5));
    assert_eq!(parse_integer(b"z", 36), Some(35));

    assert_eq!(parse_integer(b"", 10), None);
    assert_eq!(parse_integer(b"12x", 10), None);
    assert_eq!(parse_integer(b" 12", 10), None);
    assert_eq!(parse_integer(b"0x10", 16), None);
}

#[test]
fn parse_integer_rejects_unusable_bases() {
    assert_eq!(parse_integer(b"1", 1), None);
    assert_eq!(parse_integer(b"1", 0), None);
    assert_eq!(parse_integer(b"1", 37), None);
}

#[test]
fn parse_integer_rejects_overflow() {
    assert_eq!(parse_integer(b"9223372036854775807", 10), Some(i64::MAX));
    assert_eq!(parse_integer(b"9223372036854775808", 10), None);
}

#[test]
fn parse_float_requires_the_whole_input() {
    assert_eq!(parse_float(b"1.5"), Some(1.5));
    assert_eq!(parse_float(b"-2e3"), Some(-2000.0));
    assert_eq!(parse_float(b""), None);
    assert_eq!(parse_float(b"1.5 "), None);
    assert_eq!(parse_float(b"abc"), None);
}

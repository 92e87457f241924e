//! Character-level helpers shared by both codec directions: classification,
//! the decimal count codec, and the alphabet-bounds check.
//!
//! Everything here works on single bytes of the compact form's alphabet
//! (lowercase ASCII letters and ASCII digits). All functions are total; the
//! narrow preconditions noted below are debug-asserted and left unchecked in
//! release builds, where the callers guarantee them via the classifiers.

/// Returns `true` iff `b` is a lowercase ASCII letter (`a..=z`).
#[inline]
pub fn is_letter(b: u8) -> bool {
    b.is_ascii_lowercase()
}

/// Returns `true` iff `b` is an ASCII decimal digit (`0..=9`).
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Numeric value of a single decimal digit character.
///
/// Precondition: `b` is a digit (see [`is_digit`]).
#[inline]
pub fn digit_value(b: u8) -> u8 {
    debug_assert!(is_digit(b));
    b - b'0'
}

/// Value of a two-digit decimal number, tens digit first.
///
/// Precondition: both bytes are digits.
#[inline]
pub fn two_digit_value(tens: u8, ones: u8) -> u8 {
    digit_value(tens) * 10 + digit_value(ones)
}

/// Digit character for a value in `0..=9`.
#[inline]
pub fn digit_char(v: u8) -> u8 {
    debug_assert!(v <= 9);
    b'0' + v
}

/// Returns `true` iff a run of `trailing` successor letters starting from
/// `start` stays inside the alphabet, i.e. `start + trailing` does not pass
/// `'z'`.
///
/// This is the sole guard against alphabet overrun. Decompression calls it
/// after parsing a count and before emitting any letter of the run; the
/// emitter itself ([`CharBuffer::push_run`](crate::CharBuffer::push_run))
/// does not re-check.
#[inline]
pub fn run_fits(start: u8, trailing: u8) -> bool {
    u16::from(start) + u16::from(trailing) <= u16::from(b'z')
}

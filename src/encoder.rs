use crate::alphabet::digit_char;
use crate::charbuffer::{BufferFull, CharBuffer};

/// The result of a [`compress`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed {
    /// The encoded text.
    pub text: String,
    /// Number of input characters represented by `text`.
    ///
    /// Equal to the input length unless the output buffer filled up. A run
    /// only counts once its letter and its full count have been written, so
    /// `consumed` always identifies a prefix that decompresses back exactly.
    pub consumed: usize,
}

/// Compresses a sequence of lowercase letters into run-length form.
///
/// The input is scanned left to right and split into maximal runs of
/// consecutively ascending letters. Each run is written as its first letter
/// followed by the count of letters that continue it: nothing for a lone
/// letter, one digit for counts 1 through 9, two digits (tens first) for
/// larger counts. The alphabet caps a run at 25 continuations, so two digits
/// always suffice.
///
/// Output is truncated to fit `capacity` characters, one of which is
/// reserved for the end-of-text marker. Truncation is silent; compare
/// [`Compressed::consumed`] against the input length to detect it.
///
/// The input must be lowercase ASCII letters only (checked in debug builds).
///
/// # Example
/// ```
/// use alpharun::compress;
///
/// let full = compress("abcdghijkjklmnghijkabgabcdegaj", 100);
/// assert_eq!(full.text, "a3g4j4g4a1ga4gaj");
/// assert_eq!(full.consumed, 30);
///
/// // A 4-character buffer holds 3 characters of output.
/// let tight = compress("abcjklmn", 4);
/// assert_eq!(tight.text, "a2j");
/// assert_eq!(tight.consumed, 3); // only "abc" is fully represented
/// ```
pub fn compress(input: &str, capacity: usize) -> Compressed {
    let src = input.as_bytes();
    debug_assert!(src.iter().all(|b| b.is_ascii_lowercase()));

    let mut out = CharBuffer::with_capacity(capacity);
    let mut consumed = 0;
    let mut i = 0;
    while i < src.len() && !out.is_full() {
        let start = src[i];
        let mut end = i + 1;
        let mut trailing: u8 = 0;
        while end < src.len() && src[end] == src[end - 1] + 1 {
            trailing += 1;
            end += 1;
        }
        if emit_run(&mut out, start, trailing).is_err() {
            // Whatever fit stays in place; the run is not counted as consumed.
            break;
        }
        consumed = end;
        i = end;
    }

    Compressed {
        text: out.into_string(),
        consumed,
    }
}

/// Writes one run: the start letter, then its trailing count in as few
/// digits as it needs (none, one, or tens-then-ones).
fn emit_run(out: &mut CharBuffer, start: u8, trailing: u8) -> Result<(), BufferFull> {
    out.push(start)?;
    if trailing == 0 {
        return Ok(());
    }
    if trailing >= 10 {
        out.push(digit_char(trailing / 10))?;
    }
    out.push(digit_char(trailing % 10))
}

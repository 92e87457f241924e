use crate::alphabet::{digit_value, is_digit, is_letter, run_fits, two_digit_value};
use crate::charbuffer::CharBuffer;

/// Error type for decoding failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A count would extend its run past `'z'`.
    RunOverflow {
        /// The letter the count tried to extend.
        start: char,
        /// The offending count.
        count: u8,
        /// Byte offset of the count's first digit in the input.
        offset: usize,
    },
    /// A count with no letter before it to extend.
    LeadingCount {
        /// Byte offset of the count's first digit in the input.
        offset: usize,
    },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::RunOverflow {
                start,
                count,
                offset,
            } => write!(
                f,
                "count {} at byte {} extends '{}' past the end of the alphabet",
                count, offset, start
            ),
            DecodeError::LeadingCount { offset } => {
                write!(f, "count at byte {} has no letter to extend", offset)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// The result of a [`decompress`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decompressed {
    /// The decoded text.
    pub text: String,
    /// Number of input bytes fully decoded.
    ///
    /// Equal to the input length unless the output buffer filled up. A count
    /// is only counted once every letter of its run has been written.
    pub consumed: usize,
}

/// Error returned by [`decompress`] on corrupted input.
///
/// Carries everything decoded before the bad byte, so callers can report or
/// salvage the valid prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corrupted {
    /// What was wrong with the input.
    pub error: DecodeError,
    /// The output accumulated before the error.
    pub partial: Decompressed,
}

impl std::fmt::Display for Corrupted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "corrupted input: {}", self.error)
    }
}

impl std::error::Error for Corrupted {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Decompresses run-length text back into the letter sequence it encodes.
///
/// Letters are copied through and become the anchor for what follows; a
/// count of one or two digits extends the most recently decoded letter by
/// that many ascending steps. Bytes that are neither lowercase letters nor
/// digits are skipped, which accepts inputs that space-separate their runs.
///
/// Output is truncated to fit `capacity` characters, one of which is
/// reserved for the end-of-text marker. Decoding stops at the first byte
/// that no longer fits, before that byte is validated, so a truncated
/// result is `Ok` even when corruption lurks further along the input.
/// Compare [`Decompressed::consumed`] against the input length to detect
/// truncation.
///
/// # Example
/// ```
/// use alpharun::decompress;
///
/// let out = decompress("a3g4j4g4a1ga4gaj", 100).unwrap();
/// assert_eq!(out.text, "abcdghijkjklmnghijkabgabcdegaj");
/// assert_eq!(out.consumed, 16);
///
/// // A 3-character buffer holds 2 characters; the rest is dropped.
/// let tight = decompress("c3gj4", 3).unwrap();
/// assert_eq!(tight.text, "cd");
/// assert_eq!(tight.consumed, 1);
///
/// // A count that would run past 'z' is corruption, not truncation.
/// let err = decompress("w9", 10).unwrap_err();
/// assert_eq!(err.partial.text, "w");
/// ```
pub fn decompress(input: &str, capacity: usize) -> Result<Decompressed, Corrupted> {
    let src = input.as_bytes();
    let mut out = CharBuffer::with_capacity(capacity);
    let mut last: Option<u8> = None;
    let mut consumed = 0;
    let mut i = 0;

    while i < src.len() && !out.is_full() {
        let b = src[i];
        let at = i;
        i += 1;

        if is_letter(b) {
            if out.push(b).is_err() {
                break;
            }
            last = Some(b);
            consumed = i;
        } else if is_digit(b) {
            let mut count = digit_value(b);
            if i < src.len() && is_digit(src[i]) {
                count = two_digit_value(b, src[i]);
                i += 1;
            }
            let Some(start) = last else {
                return Err(Corrupted {
                    error: DecodeError::LeadingCount { offset: at },
                    partial: Decompressed {
                        text: out.into_string(),
                        consumed,
                    },
                });
            };
            if !run_fits(start, count) {
                return Err(Corrupted {
                    error: DecodeError::RunOverflow {
                        start: start as char,
                        count,
                        offset: at,
                    },
                    partial: Decompressed {
                        text: out.into_string(),
                        consumed,
                    },
                });
            }
            if out.push_run(start, count).is_err() {
                // Out of room mid-run; keep the letters that fit.
                break;
            }
            last = Some(start + count);
            consumed = i;
        } else {
            consumed = i;
        }
    }

    Ok(Decompressed {
        text: out.into_string(),
        consumed,
    })
}

// ── Lazy iterator ──────────────────────────────────────────────────────

/// A lazy decoder that yields one letter at a time.
///
/// Yields `Err` once at the first corrupt byte and nothing after that.
/// Unlike [`decompress`] it writes to no buffer, so nothing is ever
/// truncated.
///
/// # Example
/// ```
/// use alpharun::DecoderIter;
///
/// let letters: Result<String, _> = DecoderIter::new("a3g4").collect();
/// assert_eq!(letters.unwrap(), "abcdghijk");
/// ```
pub struct DecoderIter<'a> {
    src: &'a [u8],
    pos: usize,
    /// Most recently yielded letter, the anchor for a following count.
    last: Option<u8>,
    /// A run mid-expansion: the next letter to yield and how many follow it.
    run: Option<(u8, u8)>,
    done: bool,
}

impl<'a> DecoderIter<'a> {
    /// Creates an iterator over the letters encoded in `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            src: input.as_bytes(),
            pos: 0,
            last: None,
            run: None,
            done: false,
        }
    }
}

impl<'a> Iterator for DecoderIter<'a> {
    type Item = Result<char, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if let Some((letter, left)) = self.run {
                self.run = if left > 0 {
                    Some((letter + 1, left - 1))
                } else {
                    None
                };
                self.last = Some(letter);
                return Some(Ok(letter as char));
            }

            if self.pos >= self.src.len() {
                self.done = true;
                return None;
            }

            let b = self.src[self.pos];
            let at = self.pos;
            self.pos += 1;

            if is_letter(b) {
                self.last = Some(b);
                return Some(Ok(b as char));
            }
            if is_digit(b) {
                let mut count = digit_value(b);
                if self.pos < self.src.len() && is_digit(self.src[self.pos]) {
                    count = two_digit_value(b, self.src[self.pos]);
                    self.pos += 1;
                }
                let Some(start) = self.last else {
                    self.done = true;
                    return Some(Err(DecodeError::LeadingCount { offset: at }));
                };
                if !run_fits(start, count) {
                    self.done = true;
                    return Some(Err(DecodeError::RunOverflow {
                        start: start as char,
                        count,
                        offset: at,
                    }));
                }
                if count > 0 {
                    self.run = Some((start + 1, count - 1));
                }
            }
            // Anything else is skipped; loop around for the next byte.
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_pass_through() {
        let d = decompress("zyx", 16).unwrap();
        assert_eq!(d.text, "zyx");
        assert_eq!(d.consumed, 3);
    }

    #[test]
    fn test_expands_runs() {
        let d = decompress("c3gj4", 20).unwrap();
        assert_eq!(d.text, "cdefgjklmn");
        assert_eq!(d.consumed, 5);
    }

    #[test]
    fn test_two_digit_count() {
        let d = decompress("a15", 32).unwrap();
        assert_eq!(d.text, "abcdefghijklmnop");
        assert_eq!(d.consumed, 3);
    }

    #[test]
    fn test_count_zero_adds_nothing() {
        let d = decompress("a0", 8).unwrap();
        assert_eq!(d.text, "a");
        assert_eq!(d.consumed, 2);
    }

    #[test]
    fn test_leading_zero_makes_two_digit_count() {
        // "05" parses as a two-digit count of five.
        let d = decompress("a05", 16).unwrap();
        assert_eq!(d.text, "abcdef");
        assert_eq!(d.consumed, 3);
    }

    #[test]
    fn test_skips_bytes_outside_format() {
        let d = decompress("a3 g4", 32).unwrap();
        assert_eq!(d.text, "abcdghijk");
        assert_eq!(d.consumed, 5);

        let d = decompress("A-a2", 32).unwrap();
        assert_eq!(d.text, "abc");
        assert_eq!(d.consumed, 4);
    }

    #[test]
    fn test_empty_input() {
        let d = decompress("", 8).unwrap();
        assert_eq!(d.text, "");
        assert_eq!(d.consumed, 0);
    }

    #[test]
    fn test_leading_count_is_corrupt() {
        let err = decompress("3ab", 16).unwrap_err();
        assert_eq!(err.error, DecodeError::LeadingCount { offset: 0 });
        assert_eq!(err.partial.text, "");
        assert_eq!(err.partial.consumed, 0);
    }

    #[test]
    fn test_run_past_alphabet_is_corrupt() {
        let err = decompress("abcz5", 16).unwrap_err();
        assert_eq!(
            err.error,
            DecodeError::RunOverflow {
                start: 'z',
                count: 5,
                offset: 4,
            }
        );
        assert_eq!(err.partial.text, "abcz");
        assert_eq!(err.partial.consumed, 4);
    }

    #[test]
    fn test_oversized_count_is_corrupt() {
        // 26 steps from 'a' would already pass 'z'.
        let err = decompress("a26", 64).unwrap_err();
        assert_eq!(
            err.error,
            DecodeError::RunOverflow {
                start: 'a',
                count: 26,
                offset: 1,
            }
        );
    }

    #[test]
    fn test_full_buffer_preempts_validity() {
        // With room for a single character, decoding stops after 'w' and
        // the bad count is never inspected.
        let d = decompress("w9", 2).unwrap();
        assert_eq!(d.text, "w");
        assert_eq!(d.consumed, 1);

        assert!(decompress("w9", 8).is_err());
    }

    #[test]
    fn test_truncated_mid_run_keeps_partial() {
        let d = decompress("c3gj4", 3).unwrap();
        assert_eq!(d.text, "cd");
        assert_eq!(d.consumed, 1);
    }

    #[test]
    fn test_error_formats_mention_offset() {
        let err = decompress("w9", 8).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("byte 1"));
        assert!(msg.contains('w'));
    }

    // ── Iterator ───────────────────────────────────────────────────────

    #[test]
    fn test_iter_matches_decompress() {
        for input in ["a3g4j4g4a1ga4gaj", "c3j3d8js3bsj2k4bo3k", "zyx", "a0", "j10 a2"] {
            let eager = decompress(input, 256).unwrap();
            let lazy: Result<String, _> = DecoderIter::new(input).collect();
            assert_eq!(lazy.unwrap(), eager.text, "input {:?}", input);
        }
    }

    #[test]
    fn test_iter_expands_runs() {
        let letters: Result<String, _> = DecoderIter::new("c3gj4").collect();
        assert_eq!(letters.unwrap(), "cdefgjklmn");
    }

    #[test]
    fn test_iter_stops_after_error() {
        let mut iter = DecoderIter::new("3ab");
        assert_eq!(
            iter.next(),
            Some(Err(DecodeError::LeadingCount { offset: 0 }))
        );
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_yields_prefix_before_error() {
        let collected: Vec<_> = DecoderIter::new("az9").collect();
        assert_eq!(collected[0], Ok('a'));
        assert_eq!(collected[1], Ok('z'));
        assert_eq!(
            collected[2],
            Err(DecodeError::RunOverflow {
                start: 'z',
                count: 9,
                offset: 2,
            })
        );
        assert_eq!(collected.len(), 3);
    }

    #[test]
    fn test_iter_empty_input() {
        assert_eq!(DecoderIter::new("").next(), None);
    }
}

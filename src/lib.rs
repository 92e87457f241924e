//! # Alpharun
//!
//! Run-length compression for sequences of ascending lowercase letters.
//!
//! ## Scheme overview
//!
//! The codec targets text whose letters frequently ascend one alphabet step
//! at a time (`"abcd"`, `"jklmn"`). Each maximal ascending run collapses to
//! its first letter plus a count of the letters that continue it:
//!
//! - A lone letter is written as itself; a count of zero is never spelled out.
//! - Counts 1 through 9 take one digit, larger counts two digits (tens
//!   first). The alphabet caps a run at 25 continuations, so two digits
//!   always suffice.
//! - Decoding walks the text the other way: letters copy through, and a
//!   count extends the most recently decoded letter by that many ascending
//!   steps.
//!
//! ## Example
//!
//! ```rust
//! use alpharun::{compress, decompress};
//!
//! let packed = compress("abcdghijkjklmnghijkabgabcdegaj", 100);
//! assert_eq!(packed.text, "a3g4j4g4a1ga4gaj");
//!
//! let unpacked = decompress(&packed.text, 100).unwrap();
//! assert_eq!(unpacked.text, "abcdghijkjklmnghijkabgabcdegaj");
//! ```
//!
//! ## Bounded output
//!
//! Both directions write into a buffer with a fixed character capacity, one
//! slot of which is reserved for the end-of-text marker. Output that does
//! not fit is silently truncated; the `consumed` field of the result says
//! how much input the surviving output covers:
//!
//! ```rust
//! use alpharun::compress;
//!
//! let tight = compress("abcjklmn", 4);
//! assert_eq!(tight.text, "a2j");
//! assert!(tight.consumed < "abcjklmn".len()); // truncation detected
//! ```
//!
//! ## Lazy iteration
//!
//! To decode without an output buffer, use `DecoderIter`:
//!
//! ```rust
//! use alpharun::DecoderIter;
//!
//! let letters: Result<String, _> = DecoderIter::new("a3g4").collect();
//! assert_eq!(letters.unwrap(), "abcdghijk");
//! ```

pub mod alphabet;
pub mod charbuffer;
pub mod decoder;
pub mod encoder;

// Re-export primary types at the crate root.
pub use charbuffer::{BufferFull, CharBuffer};
pub use decoder::{decompress, Corrupted, DecodeError, DecoderIter, Decompressed};
pub use encoder::{compress, Compressed};

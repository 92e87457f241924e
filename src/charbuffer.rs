/// Error returned when a write would exceed the buffer's character budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferFull;

impl std::fmt::Display for BufferFull {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "write would exceed output buffer capacity")
    }
}

impl std::error::Error for BufferFull {}

/// A growable character buffer with a hard capacity, used as the output side
/// of both codec directions.
///
/// Capacity follows the convention of fixed-size character arrays: a buffer
/// declared with capacity `c` holds at most `c - 1` characters of content,
/// with the final slot permanently reserved for the end-of-text marker. Once
/// the budget is reached, write operations return `Err(BufferFull)` instead
/// of growing; the characters written so far stay in place.
#[derive(Debug, Clone)]
pub struct CharBuffer {
    text: String,
    /// Number of content characters the buffer may hold (capacity minus the
    /// reserved terminator slot).
    budget: usize,
}

impl CharBuffer {
    /// Creates a `CharBuffer` for an output slot of `capacity` characters.
    ///
    /// A capacity of 0 or 1 leaves no room for content: every write fails.
    pub fn with_capacity(capacity: usize) -> Self {
        let budget = capacity.saturating_sub(1);
        Self {
            text: String::with_capacity(budget.min(128)),
            budget,
        }
    }

    /// Returns the number of characters written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if no characters have been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns `true` once the content budget is exhausted.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.text.len() >= self.budget
    }

    /// Returns the number of characters that still fit.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.budget - self.text.len()
    }

    /// Returns the content written so far.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the buffer and returns the content.
    #[inline]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Writes a single ASCII character.
    ///
    /// Returns `Err(BufferFull)` if the content budget is already exhausted;
    /// the buffer is unchanged in that case.
    #[inline]
    pub fn push(&mut self, b: u8) -> Result<(), BufferFull> {
        if self.text.len() >= self.budget {
            return Err(BufferFull);
        }
        debug_assert!(b.is_ascii());
        self.text.push(b as char);
        Ok(())
    }

    /// Writes `trailing` successive letters, the first one alphabet position
    /// past `start`, the next one past that, and so on.
    ///
    /// Returns `Err(BufferFull)` if the budget runs out mid-run. On error the
    /// buffer keeps the letters that fit (a partial write); callers decide
    /// whether that truncation ends the operation.
    ///
    /// Does not check that the run stays inside the alphabet; see
    /// [`run_fits`](crate::alphabet::run_fits).
    pub fn push_run(&mut self, start: u8, trailing: u8) -> Result<(), BufferFull> {
        debug_assert!(start.is_ascii_lowercase());
        let mut letter = start;
        for _ in 0..trailing {
            letter += 1;
            self.push(letter)?;
        }
        Ok(())
    }
}

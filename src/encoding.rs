//! Byte-to-character counting. Positions are reported in characters of the
//! active text encoding, so the counting rule is supplied by the caller.

/// Counts characters in a byte prefix of a haystack.
pub trait CharCounter {
    fn count_chars(&self, bytes: &[u8]) -> u64;

    /// 1-based position of a match starting at `match_start` within `haystack`.
    #[inline(always)]
    fn position(&self, haystack: &[u8], match_start: usize) -> u64 {
        1 + self.count_chars(&haystack[..match_start])
    }
}

/// One character per byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteCounter;

impl CharCounter for ByteCounter {
    #[inline(always)]
    fn count_chars(&self, bytes: &[u8]) -> u64 {
        bytes.len() as u64
    }
}

/// Counts UTF-8 code points as the number of non-continuation bytes.
/// Invalid sequences are counted, never rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Counter;

impl CharCounter for Utf8Counter {
    #[inline(always)]
    fn count_chars(&self, bytes: &[u8]) -> u64 {
        bytes.iter().filter(|&&b| (b & 0xC0) != 0x80).count() as u64
    }
}

/// Encoding selector used at the FFI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Bytes,
    Utf8,
}

impl TextEncoding {
    /// Public function name reported in errors.
    pub fn function_name(self) -> &'static str {
        match self {
            TextEncoding::Bytes => "multiSearchFirstPosition",
            TextEncoding::Utf8 => "multiSearchFirstPositionUTF8",
        }
    }
}

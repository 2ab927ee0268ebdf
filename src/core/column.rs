//! Offset-encoded string batches.
//!
//! Rows are stored back to back in one byte buffer, each followed by a
//! terminator byte. `offsets[i]` is one past the terminator of row `i`, so row
//! `i` is `data[offsets[i - 1]..offsets[i] - 1]` (with `offsets[-1] == 0`).

use crate::error::{Error, Result};

/// Terminator appended after every row by [`StringColumn`].
pub const ROW_TERMINATOR: u8 = 0;

/// Borrowed view over an offset-encoded batch. Rows are read in place.
#[derive(Debug, Clone, Copy)]
pub struct StringBatch<'a> {
    data: &'a [u8],
    offsets: &'a [u64],
}

impl<'a> StringBatch<'a> {
    /// Validates `offsets` against `data`: strictly ascending, every row
    /// keeps room for its terminator, and the last offset stays inside `data`.
    pub fn new(data: &'a [u8], offsets: &'a [u64]) -> Result<Self> {
        let mut prev = 0u64;
        for (i, &off) in offsets.iter().enumerate() {
            if off <= prev {
                return Err(Error::malformed(format!(
                    "offset {} of row {} does not exceed previous offset {}",
                    off, i, prev
                )));
            }
            prev = off;
        }
        if prev > data.len() as u64 {
            return Err(Error::malformed(format!(
                "last offset {} exceeds data length {}",
                prev,
                data.len()
            )));
        }
        Ok(Self { data, offsets })
    }

    /// Number of rows.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Row `i` without its terminator. O(1), no copy.
    ///
    /// # Panics
    /// If `i >= self.len()`.
    #[inline(always)]
    pub fn row(&self, i: usize) -> &'a [u8] {
        let start = if i == 0 { 0 } else { self.offsets[i - 1] as usize };
        let end = self.offsets[i] as usize - 1;
        &self.data[start..end]
    }

    /// Iterates rows in order, walking the offsets once.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &'a [u8]> + 'a {
        let data = self.data;
        let offsets = self.offsets;
        let mut prev = 0usize;
        offsets.iter().map(move |&off| {
            let off = off as usize;
            let row = &data[prev..off - 1];
            prev = off;
            row
        })
    }
}

/// Owned offset-encoded column, built row by row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringColumn {
    data: Vec<u8>,
    offsets: Vec<u64>,
}

impl StringColumn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(rows: usize, bytes: usize) -> Self {
        Self {
            data: Vec::with_capacity(bytes + rows),
            offsets: Vec::with_capacity(rows),
        }
    }

    /// Appends one row followed by the terminator byte.
    pub fn push(&mut self, row: &[u8]) {
        self.data.extend_from_slice(row);
        self.data.push(ROW_TERMINATOR);
        self.offsets.push(self.data.len() as u64);
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn offsets(&self) -> &[u64] {
        &self.offsets
    }

    /// Borrowed view. Offsets built by `push` are valid by construction.
    pub fn as_batch(&self) -> StringBatch<'_> {
        StringBatch {
            data: &self.data,
            offsets: &self.offsets,
        }
    }
}

impl<R: AsRef<[u8]>> FromIterator<R> for StringColumn {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut column = StringColumn::new();
        for row in iter {
            column.push(row.as_ref());
        }
        column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_exclude_terminator() {
        let column: StringColumn = ["foo", "", "barfoo"].into_iter().collect();
        assert_eq!(column.offsets(), [4, 5, 12]);
        let batch = column.as_batch();
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.row(0), b"foo");
        assert_eq!(batch.row(1), b"");
        assert_eq!(batch.row(2), b"barfoo");
        let rows: Vec<&[u8]> = batch.rows().collect();
        assert_eq!(rows, [&b"foo"[..], &b""[..], &b"barfoo"[..]]);
    }

    #[test]
    fn rejects_non_ascending_offsets() {
        let data = b"ab\0c\0";
        assert!(StringBatch::new(data, &[3, 3]).is_err());
        assert!(StringBatch::new(data, &[0]).is_err());
        assert!(StringBatch::new(data, &[3, 9]).is_err());
        assert!(StringBatch::new(data, &[3, 5]).is_ok());
    }

    #[test]
    #[should_panic]
    fn row_past_end_panics() {
        let column: StringColumn = ["a"].into_iter().collect();
        column.as_batch().row(1);
    }

    #[test]
    fn empty_batch_is_valid() {
        let batch = StringBatch::new(&[], &[]).unwrap();
        assert!(batch.is_empty());
        assert_eq!(batch.rows().count(), 0);
    }
}

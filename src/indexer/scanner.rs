//! Delimiter scanner. Splits a raw text buffer into an offset-encoded batch.
//!
//! Uses `memchr` to find row boundaries. A trailing delimiter closes the last
//! row instead of opening an empty one. When splitting on `\n`, a `\r`
//! immediately before it is dropped so `\r\n` text yields the same rows.

use memchr::memchr_iter;

use crate::core::column::StringColumn;

/// Splits `text` on `delimiter` into a [`StringColumn`].
///
/// # Arguments
/// * `text` - Raw bytes (no UTF-8 assumption).
/// * `delimiter` - Row separator byte.
///
/// # Returns
/// One row per delimited segment; empty `text` gives zero rows.
pub fn scan_rows(text: &[u8], delimiter: u8) -> StringColumn {
    let mut column = StringColumn::with_capacity(0, text.len());
    if text.is_empty() {
        return column;
    }

    let mut start = 0usize;
    for pos in memchr_iter(delimiter, text) {
        column.push(trim_row(&text[start..pos], delimiter));
        start = pos + 1;
    }
    if start < text.len() {
        column.push(trim_row(&text[start..], delimiter));
    }
    column
}

#[inline(always)]
fn trim_row(row: &[u8], delimiter: u8) -> &[u8] {
    if delimiter == b'\n' {
        row.strip_suffix(b"\r").unwrap_or(row)
    } else {
        row
    }
}

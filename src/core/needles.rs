//! Needle sets as borrowed byte views: one list shared by every row, or a
//! per-row slice of a needle batch addressed by cumulative offsets.

use tracing::warn;

use crate::core::column::StringBatch;
use crate::error::{Error, Result};

/// Bulk searchers keep the pattern id in one byte.
pub const MAX_CONSTANT_NEEDLES: usize = u8::MAX as usize;

/// Borrows a shared needle list, failing if it has more than
/// [`MAX_CONSTANT_NEEDLES`] entries.
pub fn constant_needles<'a, N: AsRef<[u8]>>(
    function: &'static str,
    needles: &'a [N],
) -> Result<Vec<&'a [u8]>> {
    if needles.len() > MAX_CONSTANT_NEEDLES {
        warn!(
            function,
            passed = needles.len(),
            "rejecting constant needle set over the cardinality limit"
        );
        return Err(Error::TooManyArguments {
            function,
            passed: needles.len(),
            max: MAX_CONSTANT_NEEDLES,
        });
    }
    Ok(needles.iter().map(AsRef::as_ref).collect())
}

/// Needles that vary per row. Row `i` owns needles
/// `offsets[i - 1]..offsets[i]` of `needles`. No cardinality limit applies.
#[derive(Debug, Clone, Copy)]
pub struct PerRowNeedles<'a> {
    needles: StringBatch<'a>,
    offsets: &'a [u64],
}

impl<'a> PerRowNeedles<'a> {
    pub fn new(needles: StringBatch<'a>, offsets: &'a [u64]) -> Result<Self> {
        let mut prev = 0u64;
        for (i, &off) in offsets.iter().enumerate() {
            if off < prev {
                return Err(Error::malformed(format!(
                    "needle offset {} of row {} is below previous offset {}",
                    off, i, prev
                )));
            }
            prev = off;
        }
        if prev > needles.len() as u64 {
            return Err(Error::malformed(format!(
                "needle offset {} exceeds needle count {}",
                prev,
                needles.len()
            )));
        }
        Ok(Self { needles, offsets })
    }

    /// Number of rows the offsets describe.
    pub fn rows(&self) -> usize {
        self.offsets.len()
    }

    /// Clears `out` and fills it with the needles of row `i`.
    ///
    /// # Panics
    /// If `i >= self.rows()`.
    pub fn fill_row(&self, i: usize, out: &mut Vec<&'a [u8]>) {
        let start = if i == 0 { 0 } else { self.offsets[i - 1] as usize };
        let end = self.offsets[i] as usize;
        out.clear();
        out.extend((start..end).map(|j| self.needles.row(j)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::column::StringColumn;

    #[test]
    fn constant_limit_is_inclusive() {
        let ok: Vec<String> = (0..255).map(|i| i.to_string()).collect();
        assert_eq!(constant_needles("f", &ok).unwrap().len(), 255);

        let too_many: Vec<String> = (0..256).map(|i| i.to_string()).collect();
        match constant_needles("f", &too_many) {
            Err(Error::TooManyArguments {
                function,
                passed,
                max,
            }) => {
                assert_eq!(function, "f");
                assert_eq!(passed, 256);
                assert_eq!(max, 255);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn per_row_slices_follow_cumulative_offsets() {
        let column: StringColumn = ["a", "b", "c"].into_iter().collect();
        let offsets = [2, 2, 3];
        let needles = PerRowNeedles::new(column.as_batch(), &offsets).unwrap();
        assert_eq!(needles.rows(), 3);

        let mut row = Vec::new();
        needles.fill_row(0, &mut row);
        assert_eq!(row, [&b"a"[..], &b"b"[..]]);
        needles.fill_row(1, &mut row);
        assert!(row.is_empty());
        needles.fill_row(2, &mut row);
        assert_eq!(row, [&b"c"[..]]);
    }

    #[test]
    fn per_row_has_no_cardinality_limit() {
        let column: StringColumn = (0..300).map(|i| i.to_string()).collect();
        let offsets = [300u64];
        let needles = PerRowNeedles::new(column.as_batch(), &offsets).unwrap();
        let mut row = Vec::new();
        needles.fill_row(0, &mut row);
        assert_eq!(row.len(), 300);
    }

    #[test]
    #[should_panic]
    fn fill_row_past_end_panics() {
        let column: StringColumn = ["a"].into_iter().collect();
        let offsets = [1u64];
        let needles = PerRowNeedles::new(column.as_batch(), &offsets).unwrap();
        needles.fill_row(1, &mut Vec::new());
    }

    #[test]
    fn per_row_rejects_bad_offsets() {
        let column: StringColumn = ["a"].into_iter().collect();
        assert!(PerRowNeedles::new(column.as_batch(), &[1, 0]).is_err());
        assert!(PerRowNeedles::new(column.as_batch(), &[2]).is_err());
    }
}

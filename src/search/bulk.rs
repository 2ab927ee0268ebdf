//! Bulk literal searcher: one `memmem::Finder` per needle, grouped into passes.
//!
//! Each pass covers a fixed-width slice of the needle list and reports the
//! earliest start among those needles. Once a candidate is known, later
//! needles only scan the prefix that could still hold an earlier start.

use memchr::memmem::Finder;

use super::searcher::MultiSearcher;

/// Needles covered by one pass.
pub const BULK_PASS_WIDTH: usize = 32;

pub struct BulkSearcher<'n> {
    finders: Vec<Finder<'n>>,
}

impl<'n> BulkSearcher<'n> {
    /// Borrows every needle; nothing is copied.
    pub fn new(needles: &[&'n [u8]]) -> Self {
        Self {
            finders: needles.iter().map(|needle| Finder::new(*needle)).collect(),
        }
    }

    pub fn needle_count(&self) -> usize {
        self.finders.len()
    }
}

impl MultiSearcher for BulkSearcher<'_> {
    fn pass_count(&self) -> usize {
        self.finders.len().div_ceil(BULK_PASS_WIDTH)
    }

    fn first_position<F>(&self, pass: usize, haystack: &[u8], mut position: F) -> u64
    where
        F: FnMut(usize, usize) -> u64,
    {
        let start = pass * BULK_PASS_WIDTH;
        let end = (start + BULK_PASS_WIDTH).min(self.finders.len());
        let Some(finders) = self.finders.get(start..end) else {
            return 0;
        };

        let mut best: Option<(usize, usize)> = None;
        for finder in finders {
            let len = finder.needle().len();
            // A match starting before `best` ends before `best + len`.
            let window = match best {
                Some((best_start, _)) => &haystack[..(best_start + len).min(haystack.len())],
                None => haystack,
            };
            if let Some(found) = finder.find(window) {
                if best.map_or(true, |(best_start, _)| found < best_start) {
                    best = Some((found, found + len));
                }
            }
        }

        match best {
            Some((match_start, match_end)) => position(match_start, match_end),
            None => 0,
        }
    }
}

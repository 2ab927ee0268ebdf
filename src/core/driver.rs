//! Batch drivers: first-match position of any needle, per haystack row.
//!
//! Both drivers share [`fold_pass`] but nest their loops differently. With a
//! shared needle set the searcher is built once and passes run outermost, so
//! each pass sweeps every row. With per-row needles a searcher is built for
//! each row and all of its passes run before moving on.

use tracing::trace;

use crate::core::aggregate::fold_pass;
use crate::core::column::StringBatch;
use crate::core::needles::{constant_needles, PerRowNeedles};
use crate::encoding::CharCounter;
use crate::error::{Error, Result};
use crate::search::{build_searcher, MultiSearcher, SearchPolicy};

/// One needle list shared by every row of `haystacks`.
///
/// Fails with `TooManyArguments` (naming `function`) before any searching if
/// there are more than 255 needles.
pub fn vector_constant<N, C>(
    function: &'static str,
    haystacks: &StringBatch<'_>,
    needles: &[N],
    policy: &SearchPolicy,
    counter: &C,
) -> Result<Vec<u64>>
where
    N: AsRef<[u8]>,
    C: CharCounter,
{
    let needles = constant_needles(function, needles)?;
    let searcher = build_searcher(&needles, policy)?;

    let mut res = vec![0u64; haystacks.len()];
    let mut iteration = 0usize;
    for pass in searcher.passes() {
        trace!(function, pass = pass.index(), rows = res.len(), "constant needle pass");
        for (slot, haystack) in res.iter_mut().zip(haystacks.rows()) {
            let found =
                pass.first_position(haystack, |start, _end| counter.position(haystack, start));
            fold_pass(iteration, slot, found);
        }
        iteration += 1;
    }
    if iteration == 0 {
        res.fill(0);
    }
    Ok(res)
}

/// Row `i` of `haystacks` is searched for the needles of row `i` of `needles`.
/// A fresh searcher is built for every row; nothing carries over between rows.
pub fn vector_vector<C>(
    haystacks: &StringBatch<'_>,
    needles: &PerRowNeedles<'_>,
    policy: &SearchPolicy,
    counter: &C,
) -> Result<Vec<u64>>
where
    C: CharCounter,
{
    if needles.rows() != haystacks.len() {
        return Err(Error::RowCountMismatch {
            expected: haystacks.len(),
            actual: needles.rows(),
        });
    }

    let mut res = Vec::with_capacity(haystacks.len());
    let mut row_needles = Vec::new();
    for (i, haystack) in haystacks.rows().enumerate() {
        needles.fill_row(i, &mut row_needles);
        let searcher = build_searcher(&row_needles, policy)?;

        let mut current = 0u64;
        let mut iteration = 0usize;
        for pass in searcher.passes() {
            let found =
                pass.first_position(haystack, |start, _end| counter.position(haystack, start));
            fold_pass(iteration, &mut current, found);
            iteration += 1;
        }
        if iteration == 0 {
            current = 0;
        }
        res.push(current);
    }
    Ok(res)
}

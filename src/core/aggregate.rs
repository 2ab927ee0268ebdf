//! Folding per-pass results into one first-match position per row.
//!
//! `0` means both "nothing seen yet" and "no match", so a real match from a
//! later pass always replaces a zero, and a later miss never erases a match.

/// Folds the result of pass `pass_index` into `current`.
#[inline(always)]
pub fn fold_pass(pass_index: usize, current: &mut u64, pass_result: u64) {
    if pass_index == 0 || *current == 0 {
        *current = pass_result;
    } else if pass_result != 0 {
        *current = (*current).min(pass_result);
    }
}

//! Multi-pass searcher contract and engine selection.
//!
//! A searcher is built once from a needle list and split into passes; the
//! passes together cover every needle exactly once. Pass state lives in the
//! [`Pass`] values handed out by [`MultiSearcher::passes`], so a searcher is
//! never mutated while searching and can be reused across rows.

use tracing::{debug, trace};

use super::bulk::BulkSearcher;
use super::policy::SearchPolicy;
use super::regex_engine::RegexSearcher;
use crate::error::{Error, Result};

pub trait MultiSearcher {
    /// Number of passes; zero for an empty needle list.
    fn pass_count(&self) -> usize;

    /// Earliest match among the needles of `pass` inside `haystack`.
    /// `position(match_start, match_end)` converts byte offsets to the reported
    /// unit. Returns 0 when no needle of this pass occurs.
    fn first_position<F>(&self, pass: usize, haystack: &[u8], position: F) -> u64
    where
        F: FnMut(usize, usize) -> u64;

    fn passes(&self) -> Passes<'_, Self>
    where
        Self: Sized,
    {
        Passes {
            searcher: self,
            next: 0,
        }
    }
}

/// One pass of a searcher.
#[derive(Debug)]
pub struct Pass<'s, S> {
    searcher: &'s S,
    index: usize,
}

impl<S> Clone for Pass<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Pass<'_, S> {}

impl<S: MultiSearcher> Pass<'_, S> {
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline(always)]
    pub fn first_position<F>(&self, haystack: &[u8], position: F) -> u64
    where
        F: FnMut(usize, usize) -> u64,
    {
        self.searcher.first_position(self.index, haystack, position)
    }
}

/// Iterator over the remaining passes of a searcher.
pub struct Passes<'s, S> {
    searcher: &'s S,
    next: usize,
}

impl<'s, S: MultiSearcher> Iterator for Passes<'s, S> {
    type Item = Pass<'s, S>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.searcher.pass_count() {
            return None;
        }
        let pass = Pass {
            searcher: self.searcher,
            index: self.next,
        };
        self.next += 1;
        Some(pass)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.searcher.pass_count().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl<S: MultiSearcher> ExactSizeIterator for Passes<'_, S> {}

/// The engines a factory can hand out.
pub enum Searcher<'n> {
    Bulk(BulkSearcher<'n>),
    Regex(RegexSearcher),
}

impl Searcher<'_> {
    pub fn engine(&self) -> &'static str {
        match self {
            Searcher::Bulk(_) => "bulk",
            Searcher::Regex(_) => "regex",
        }
    }
}

impl MultiSearcher for Searcher<'_> {
    fn pass_count(&self) -> usize {
        match self {
            Searcher::Bulk(s) => s.pass_count(),
            Searcher::Regex(s) => s.pass_count(),
        }
    }

    #[inline(always)]
    fn first_position<F>(&self, pass: usize, haystack: &[u8], position: F) -> u64
    where
        F: FnMut(usize, usize) -> u64,
    {
        match self {
            Searcher::Bulk(s) => s.first_position(pass, haystack, position),
            Searcher::Regex(s) => s.first_position(pass, haystack, position),
        }
    }
}

/// Picks an engine for `needles` under `policy`.
///
/// The regex engine is used when the policy allows it and there is at least one
/// needle. If it would exceed its compiled-size budget and `reject_expensive` is
/// off, the bulk searcher is used instead; every other construction failure is
/// returned unchanged.
pub fn build_searcher<'n>(needles: &[&'n [u8]], policy: &SearchPolicy) -> Result<Searcher<'n>> {
    if policy.allow_regex && !needles.is_empty() {
        match RegexSearcher::new(needles, policy) {
            Ok(searcher) => {
                trace!(engine = "regex", needles = needles.len(), "built searcher");
                return Ok(Searcher::Regex(searcher));
            }
            Err(Error::Regex(regex::Error::CompiledTooBig(limit))) if !policy.reject_expensive => {
                debug!(limit, needles = needles.len(), "regex too large, using bulk searcher");
            }
            Err(err) => return Err(err),
        }
    }

    let searcher = BulkSearcher::new(needles);
    trace!(
        engine = "bulk",
        needles = searcher.needle_count(),
        passes = searcher.pass_count(),
        "built searcher"
    );
    Ok(Searcher::Bulk(searcher))
}

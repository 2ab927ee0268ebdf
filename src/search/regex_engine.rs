//! Regex-engine searcher: every needle compiled into one alternation of
//! escaped byte literals. Leftmost semantics make the reported match the
//! earliest starting needle, so a single pass covers the whole set.

use regex::bytes::{Regex, RegexBuilder};

use super::policy::SearchPolicy;
use super::searcher::MultiSearcher;
use crate::error::{Error, Result};

pub struct RegexSearcher {
    regex: Regex,
    passes: usize,
}

impl RegexSearcher {
    /// Applies the policy's length limits, then compiles. Compile failures
    /// (including the size limit) are returned as `Error::Regex`.
    pub fn new(needles: &[&[u8]], policy: &SearchPolicy) -> Result<Self> {
        let mut total = 0usize;
        for needle in needles {
            if policy.max_pattern_length != 0 && needle.len() > policy.max_pattern_length {
                return Err(Error::PatternTooLong {
                    length: needle.len(),
                    max: policy.max_pattern_length,
                });
            }
            total += needle.len();
        }
        if policy.max_total_length != 0 && total > policy.max_total_length {
            return Err(Error::PatternsTooLong {
                length: total,
                max: policy.max_total_length,
            });
        }

        let regex = RegexBuilder::new(&alternation(needles))
            .unicode(false)
            .size_limit(policy.regex_size_limit)
            .build()?;

        Ok(Self {
            regex,
            passes: usize::from(!needles.is_empty()),
        })
    }
}

impl MultiSearcher for RegexSearcher {
    fn pass_count(&self) -> usize {
        self.passes
    }

    fn first_position<F>(&self, pass: usize, haystack: &[u8], mut position: F) -> u64
    where
        F: FnMut(usize, usize) -> u64,
    {
        if pass >= self.passes {
            return 0;
        }
        match self.regex.find(haystack) {
            Some(m) => position(m.start(), m.end()),
            None => 0,
        }
    }
}

/// `needle|needle|...` with every non-alphanumeric byte written as `\xNN`,
/// so arbitrary (including non-UTF-8) bytes match literally.
fn alternation(needles: &[&[u8]]) -> String {
    let mut pattern = String::new();
    for (i, needle) in needles.iter().enumerate() {
        if i > 0 {
            pattern.push('|');
        }
        if needle.is_empty() {
            pattern.push_str("(?:)");
            continue;
        }
        for &b in needle.iter() {
            if b.is_ascii_alphanumeric() {
                pattern.push(b as char);
            } else {
                pattern.push_str(&format!("\\x{:02X}", b));
            }
        }
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    fn byte_pos(start: usize, _end: usize) -> u64 {
        start as u64 + 1
    }

    #[test]
    fn escapes_metacharacters_and_raw_bytes() {
        let needles: [&[u8]; 3] = [b"a.b", b"", &[0xFF, b'z']];
        assert_eq!(alternation(&needles), "a\\x2Eb|(?:)|\\xFFz");
    }

    #[test]
    fn finds_earliest_literal() {
        let needles: [&[u8]; 3] = [b"def", b"c.", b"b+"];
        let searcher = RegexSearcher::new(&needles, &SearchPolicy::default()).unwrap();
        assert_eq!(searcher.pass_count(), 1);
        // Metacharacters are literal: "c." does not match "cd".
        assert_eq!(searcher.first_position(0, b"abcdef", byte_pos), 4);
        assert_eq!(searcher.first_position(0, b"xxb+c.", byte_pos), 3);
    }

    #[test]
    fn matches_non_utf8_bytes() {
        let needles: [&[u8]; 1] = [&[0xC3]];
        let searcher = RegexSearcher::new(&needles, &SearchPolicy::default()).unwrap();
        assert_eq!(searcher.first_position(0, "aé".as_bytes(), byte_pos), 2);
    }

    #[test]
    fn length_limits_reject() {
        let needles: [&[u8]; 2] = [b"abcd", b"ef"];
        let policy = SearchPolicy::default().with_max_pattern_length(3);
        assert!(matches!(
            RegexSearcher::new(&needles, &policy),
            Err(Error::PatternTooLong { length: 4, max: 3 })
        ));

        let policy = SearchPolicy::default().with_max_total_length(5);
        assert!(matches!(
            RegexSearcher::new(&needles, &policy),
            Err(Error::PatternsTooLong { length: 6, max: 5 })
        ));
    }

    #[test]
    fn size_limit_surfaces_regex_error() {
        // Enough literals that the alternation is compiled, not served by a literal fast path.
        let owned: Vec<String> = (0..200)
            .map(|i| format!("needle-{:03}-xyzxyzxyz", i))
            .collect();
        let needles: Vec<&[u8]> = owned.iter().map(|n| n.as_bytes()).collect();
        let policy = SearchPolicy::default().with_regex_size_limit(8);
        assert!(matches!(
            RegexSearcher::new(&needles, &policy),
            Err(Error::Regex(regex::Error::CompiledTooBig(8)))
        ));
    }
}

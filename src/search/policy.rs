//! Engine selection policy. The drivers pass it through untouched; only the
//! searcher factory reads it.

/// Default compiled-size budget for the regex engine (matches `regex`'s own default).
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Permit the regex-capable engine.
    pub allow_regex: bool,
    /// Longest single needle the regex engine accepts. 0 means unlimited.
    pub max_pattern_length: usize,
    /// Longest summed needle length the regex engine accepts. 0 means unlimited.
    pub max_total_length: usize,
    /// Fail instead of falling back when the regex engine would be too expensive to build.
    pub reject_expensive: bool,
    pub regex_size_limit: usize,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            allow_regex: false,
            max_pattern_length: 0,
            max_total_length: 0,
            reject_expensive: true,
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
        }
    }
}

impl SearchPolicy {
    pub fn with_regex(mut self, allow: bool) -> Self {
        self.allow_regex = allow;
        self
    }

    pub fn with_max_pattern_length(mut self, max: usize) -> Self {
        self.max_pattern_length = max;
        self
    }

    pub fn with_max_total_length(mut self, max: usize) -> Self {
        self.max_total_length = max;
        self
    }

    pub fn with_reject_expensive(mut self, reject: bool) -> Self {
        self.reject_expensive = reject;
        self
    }

    pub fn with_regex_size_limit(mut self, limit: usize) -> Self {
        self.regex_size_limit = limit;
        self
    }
}

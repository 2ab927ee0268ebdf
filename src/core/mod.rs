//! Batch state and drivers: offset-encoded columns, needle sets, the
//! per-row aggregation rule and the two loop orders built on it.

pub mod aggregate;
pub mod column;
pub mod driver;
pub mod needles;

//! First-match positions of any needle across batches of strings.
//!
//! FFI layer for JS: constant and per-row needle searches over offset-encoded
//! batches, a newline-delimited convenience entry point, and the process-wide
//! search policy. The Rust API is re-exported below.

use once_cell::sync::Lazy;
use std::sync::RwLock;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub mod core;
pub mod encoding;
pub mod error;
pub mod indexer;
pub mod search;

pub use crate::core::aggregate::fold_pass;
pub use crate::core::column::{StringBatch, StringColumn, ROW_TERMINATOR};
pub use crate::core::driver::{vector_constant, vector_vector};
pub use crate::core::needles::{constant_needles, PerRowNeedles, MAX_CONSTANT_NEEDLES};
pub use crate::encoding::{ByteCounter, CharCounter, TextEncoding, Utf8Counter};
pub use crate::error::{Error, Result};
pub use crate::indexer::scanner::scan_rows;
pub use crate::search::{build_searcher, MultiSearcher, SearchPolicy, Searcher};

/// Policy applied to every JS call. Searches are single-threaded per call and
/// only read it.
static POLICY: Lazy<RwLock<SearchPolicy>> = Lazy::new(|| RwLock::new(SearchPolicy::default()));

/// Snapshot of the current process-wide policy.
pub fn current_policy() -> SearchPolicy {
    *POLICY.read().expect("policy lock")
}

/// Replaces the process-wide search policy. Lengths of 0 mean unlimited.
#[wasm_bindgen]
pub fn set_search_policy(
    allow_regex: bool,
    max_pattern_length: usize,
    max_total_length: usize,
    reject_expensive: bool,
) {
    let mut policy = POLICY.write().expect("policy lock");
    *policy = policy
        .with_regex(allow_regex)
        .with_max_pattern_length(max_pattern_length)
        .with_max_total_length(max_total_length)
        .with_reject_expensive(reject_expensive);
}

/// Restores the default policy (bulk engine only).
#[wasm_bindgen]
pub fn reset_search_policy() {
    *POLICY.write().expect("policy lock") = SearchPolicy::default();
}

/// First position of any of `needles` in every row of the batch.
///
/// `haystack_offsets[i]` is one past row `i`'s terminator byte. `needles` is a JS
/// array of strings or `Uint8Array`s, at most 255 of them. With `utf8` set,
/// positions count UTF-8 characters, otherwise bytes. 0 means no match.
#[wasm_bindgen]
pub fn multi_search_first_position(
    haystack_data: &[u8],
    haystack_offsets: &[u64],
    needles: &js_sys::Array,
    utf8: bool,
) -> std::result::Result<Vec<u64>, JsError> {
    let haystacks = StringBatch::new(haystack_data, haystack_offsets)?;
    let needles = needles_from_js(needles)?;
    Ok(run_constant(&haystacks, &needles, encoding_for(utf8))?)
}

/// Per-row needles: `needle_data`/`needle_offsets` form a batch of needle strings
/// and `row_needle_offsets[i]` is the cumulative needle count up to and including
/// row `i`.
#[wasm_bindgen]
pub fn multi_search_first_position_per_row(
    haystack_data: &[u8],
    haystack_offsets: &[u64],
    needle_data: &[u8],
    needle_offsets: &[u64],
    row_needle_offsets: &[u64],
    utf8: bool,
) -> std::result::Result<Vec<u64>, JsError> {
    let haystacks = StringBatch::new(haystack_data, haystack_offsets)?;
    let needle_batch = StringBatch::new(needle_data, needle_offsets)?;
    let needles = PerRowNeedles::new(needle_batch, row_needle_offsets)?;
    let policy = current_policy();
    let res = match encoding_for(utf8) {
        TextEncoding::Bytes => vector_vector(&haystacks, &needles, &policy, &ByteCounter)?,
        TextEncoding::Utf8 => vector_vector(&haystacks, &needles, &policy, &Utf8Counter)?,
    };
    Ok(res)
}

/// Splits `text` into lines and searches each for the shared `needles`.
#[wasm_bindgen]
pub fn multi_search_first_position_lines(
    text: &[u8],
    needles: &js_sys::Array,
    utf8: bool,
) -> std::result::Result<Vec<u64>, JsError> {
    let column = scan_rows(text, b'\n');
    let needles = needles_from_js(needles)?;
    Ok(run_constant(&column.as_batch(), &needles, encoding_for(utf8))?)
}

fn encoding_for(utf8: bool) -> TextEncoding {
    if utf8 {
        TextEncoding::Utf8
    } else {
        TextEncoding::Bytes
    }
}

fn run_constant(
    haystacks: &StringBatch<'_>,
    needles: &[Vec<u8>],
    encoding: TextEncoding,
) -> Result<Vec<u64>> {
    let policy = current_policy();
    let function = encoding.function_name();
    match encoding {
        TextEncoding::Bytes => vector_constant(function, haystacks, needles, &policy, &ByteCounter),
        TextEncoding::Utf8 => vector_constant(function, haystacks, needles, &policy, &Utf8Counter),
    }
}

/// Copies JS needles into Rust. Strings are taken as UTF-8, `Uint8Array`s as raw bytes.
fn needles_from_js(needles: &js_sys::Array) -> std::result::Result<Vec<Vec<u8>>, JsError> {
    let mut out = Vec::with_capacity(needles.length() as usize);
    for value in needles.iter() {
        if let Some(s) = value.as_string() {
            out.push(s.into_bytes());
        } else if let Some(bytes) = value.dyn_ref::<js_sys::Uint8Array>() {
            out.push(bytes.to_vec());
        } else {
            return Err(JsError::new("needles must be strings or Uint8Array"));
        }
    }
    Ok(out)
}

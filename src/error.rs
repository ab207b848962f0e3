//! Error types for pipegraph
//!
//! Structural errors fail the whole conversion call with enough context to
//! locate the offending candidate; no partial results are returned.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Pipegraph error types
#[derive(Error, Debug)]
pub enum Error {
    /// Hyperparameter key with too few `:`-delimited segments
    #[error("malformed hyperparameter key `{key}` in candidate {candidate}: expected `stage:module:param...` with at least 3 segments")]
    MalformedKey {
        /// Positional index of the candidate the key belongs to
        candidate: usize,
        /// The offending flat key
        key: String,
    },

    /// Search result sequences disagree on candidate count
    #[error("inconsistent search result lengths: {scores} scores, {times} fit times, {params} parameter records")]
    CandidateCountMismatch {
        /// Length of the `mean_test_score` sequence
        scores: usize,
        /// Length of the `mean_fit_time` sequence
        times: usize,
        /// Length of the `params` sequence
        params: usize,
    },

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

//! Conversion driver - search results in, pipeline graphs out
//!
//! [`SearchResults`] is the external collaborator contract: three parallel
//! per-candidate sequences plus an optional free-text report. [`convert`]
//! processes candidates strictly sequentially, sharing one [`StageOrder`]
//! across the whole run so stage ordinals are assigned in first-seen order
//! over the full candidate sequence.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::decode::NamespaceTree;
use crate::error::{Error, Result};
use crate::graph::{GraphSynthesizer, PipelineGraph};
use crate::metric::metric_label;
use crate::order::StageOrder;

/// Raw output of a hyperparameter search run, one entry per candidate.
///
/// Mirrors the cv-results layout exposed by sklearn-style searches:
/// `mean_test_score`, `mean_fit_time`, and `params` must all have one entry
/// per candidate. Length disagreement is a structural error reported by
/// [`convert`], not silently truncated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    mean_test_score: Vec<f64>,
    mean_fit_time: Vec<f64>,
    params: Vec<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    report: Option<String>,
}

impl SearchResults {
    /// Create search results from the three per-candidate sequences.
    #[must_use]
    pub fn new(
        mean_test_score: Vec<f64>,
        mean_fit_time: Vec<f64>,
        params: Vec<Map<String, Value>>,
    ) -> Self {
        Self {
            mean_test_score,
            mean_fit_time,
            params,
            report: None,
        }
    }

    /// Create a builder for constructing search results with optional fields.
    #[must_use]
    pub fn builder(
        mean_test_score: Vec<f64>,
        mean_fit_time: Vec<f64>,
        params: Vec<Map<String, Value>>,
    ) -> SearchResultsBuilder {
        SearchResultsBuilder::new(mean_test_score, mean_fit_time, params)
    }

    /// Load search results from a serialized JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the document does not match the expected
    /// shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get the per-candidate mean test scores.
    #[must_use]
    pub fn mean_test_score(&self) -> &[f64] {
        &self.mean_test_score
    }

    /// Get the per-candidate mean fit times in seconds.
    #[must_use]
    pub fn mean_fit_time(&self) -> &[f64] {
        &self.mean_fit_time
    }

    /// Get the per-candidate flat parameter records.
    #[must_use]
    pub fn params(&self) -> &[Map<String, Value>] {
        &self.params
    }

    /// Get the free-text summary report, if one was captured.
    #[must_use]
    pub fn report(&self) -> Option<&str> {
        self.report.as_deref()
    }

    /// Validate that the three sequences agree on candidate count.
    fn candidate_count(&self) -> Result<usize> {
        let (scores, times, params) = (
            self.mean_test_score.len(),
            self.mean_fit_time.len(),
            self.params.len(),
        );
        if scores != times || scores != params {
            return Err(Error::CandidateCountMismatch {
                scores,
                times,
                params,
            });
        }
        Ok(scores)
    }
}

/// Builder for [`SearchResults`].
#[derive(Debug)]
pub struct SearchResultsBuilder {
    mean_test_score: Vec<f64>,
    mean_fit_time: Vec<f64>,
    params: Vec<Map<String, Value>>,
    report: Option<String>,
}

impl SearchResultsBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(
        mean_test_score: Vec<f64>,
        mean_fit_time: Vec<f64>,
        params: Vec<Map<String, Value>>,
    ) -> Self {
        Self {
            mean_test_score,
            mean_fit_time,
            params,
            report: None,
        }
    }

    /// Attach a free-text summary report for metric-label extraction.
    #[must_use]
    pub fn report(mut self, report: impl Into<String>) -> Self {
        self.report = Some(report.into());
        self
    }

    /// Build the [`SearchResults`].
    #[must_use]
    pub fn build(self) -> SearchResults {
        SearchResults {
            mean_test_score: self.mean_test_score,
            mean_fit_time: self.mean_fit_time,
            params: self.params,
            report: self.report,
        }
    }
}

/// Convert search results into one pipeline graph per candidate.
///
/// Graphs come back in input candidate order; the metric label is extracted
/// once and shared by every graph in the run. A fresh [`StageOrder`] is
/// constructed per call, so ordinal assignment never leaks across runs.
///
/// # Errors
///
/// Fails the whole conversion, returning no partial results, on:
/// - [`Error::CandidateCountMismatch`] if the input sequences disagree
/// - [`Error::MalformedKey`] if any candidate carries a non-selector key
///   with fewer than 3 segments
pub fn convert(results: &SearchResults, source: &str) -> Result<Vec<PipelineGraph>> {
    let candidates = results.candidate_count()?;
    let metric = metric_label(results.report());
    info!(candidates, source, metric = %metric, "converting search results");

    let mut order = StageOrder::new();
    let mut graphs = Vec::with_capacity(candidates);

    for index in 0..candidates {
        let tree = NamespaceTree::decode(&results.params[index], index)?;
        let mut synthesizer = GraphSynthesizer::new(&mut order);
        let graph = synthesizer.synthesize(
            &tree,
            results.mean_test_score[index],
            results.mean_fit_time[index],
            &metric,
            source,
            index,
        );
        debug!(candidate = index, steps = graph.steps().len(), "synthesized graph");
        graphs.push(graph);
    }

    Ok(graphs)
}

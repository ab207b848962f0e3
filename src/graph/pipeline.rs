//! Pipeline Graph - one candidate's full DAG record

use serde::{Deserialize, Serialize};

use super::step::PipelineStep;

/// Name of the single synthetic input every graph starts from.
pub const DATASET_INPUT_NAME: &str = "input dataset";

/// Reference to the synthetic dataset input.
pub const DATASET_INPUT_REF: &str = "inputs.0";

/// Score attached to a synthesized graph.
///
/// The search procedure reports a single raw value per candidate, so the
/// normalized and raw fields carry the same number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    metric: String,
    normalized: f64,
    value: f64,
}

impl Score {
    /// Create a score from the run-shared metric label and a raw value.
    #[must_use]
    pub fn new(metric: impl Into<String>, value: f64) -> Self {
        Self {
            metric: metric.into(),
            normalized: value,
            value,
        }
    }

    /// Get the human-readable metric label.
    #[must_use]
    pub fn metric(&self) -> &str {
        &self.metric
    }

    /// Get the normalized score value.
    #[must_use]
    pub const fn normalized(&self) -> f64 {
        self.normalized
    }

    /// Get the raw score value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

/// Pipeline Graph represents one converted search candidate.
///
/// Steps are ordered by layer; `outputs` is exactly the output references of
/// the last layer, in step order.
///
/// The `digest` is the candidate's positional index formatted as a string,
/// NOT a content hash: it is unique only within one conversion run and is
/// not stable across runs with reordered or filtered candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineGraph {
    inputs: Vec<String>,
    steps: Vec<PipelineStep>,
    outputs: Vec<String>,
    score: Score,
    source: String,
    digest: String,
    time: f64,
}

impl PipelineGraph {
    /// Assemble a graph record.
    ///
    /// The synthetic dataset input is added here; callers pass only what the
    /// synthesizer produced.
    #[must_use]
    pub fn new(
        steps: Vec<PipelineStep>,
        outputs: Vec<String>,
        score: Score,
        source: impl Into<String>,
        candidate_index: usize,
        time: f64,
    ) -> Self {
        Self {
            inputs: vec![DATASET_INPUT_NAME.to_string()],
            steps,
            outputs,
            score,
            source: source.into(),
            digest: candidate_index.to_string(),
            time,
        }
    }

    /// Get the graph inputs (always the single synthetic dataset input).
    #[must_use]
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// Get the steps, in layer order.
    #[must_use]
    pub fn steps(&self) -> &[PipelineStep] {
        &self.steps
    }

    /// Get the output references of the final layer, in step order.
    #[must_use]
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Get the candidate's score.
    #[must_use]
    pub const fn score(&self) -> &Score {
        &self.score
    }

    /// Get the label of the search system that produced the candidate.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Get the positional identifier (see type-level docs for caveats).
    #[must_use]
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Get the candidate's mean fit time in seconds.
    #[must_use]
    pub const fn time(&self) -> f64 {
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_mirrors_raw_value() {
        let score = Score::new("F1_MACRO", 0.9);
        assert_eq!(score.metric(), "F1_MACRO");
        assert!((score.normalized() - score.value()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_graph_assembly() {
        let graph = PipelineGraph::new(
            Vec::new(),
            Vec::new(),
            Score::new("METRIC", 0.5),
            "auto-sklearn",
            12,
            1.25,
        );

        assert_eq!(graph.inputs(), [DATASET_INPUT_NAME]);
        assert_eq!(graph.digest(), "12");
        assert_eq!(graph.source(), "auto-sklearn");
        assert!((graph.time() - 1.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_graph_serde_round_trip() {
        let graph = PipelineGraph::new(
            Vec::new(),
            vec![DATASET_INPUT_REF.to_string()],
            Score::new("ACCURACY", 0.8),
            "auto-sklearn",
            0,
            0.1,
        );

        let encoded = serde_json::to_string(&graph).unwrap();
        let decoded: PipelineGraph = serde_json::from_str(&encoded).unwrap();
        assert_eq!(graph, decoded);
    }
}

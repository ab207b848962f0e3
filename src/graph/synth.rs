//! Graph synthesis - namespace tree to layered DAG
//!
//! Stage types become sequential layers, ordered by the run-shared
//! [`StageOrder`]. Within a layer, one step is created per module in tree
//! insertion order. Wiring is full fan-in: every step receives the entire
//! frontier of the previous layer, and the new layer's outputs replace the
//! frontier wholesale.

use crate::decode::NamespaceTree;
use crate::graph::pipeline::{PipelineGraph, Score, DATASET_INPUT_REF};
use crate::graph::step::{Hyperparameter, PipelineStep};
use crate::order::StageOrder;

/// Synthesizes pipeline graphs from decoded namespace trees.
///
/// Borrows the conversion run's [`StageOrder`] so stage ordinals discovered
/// while synthesizing one candidate stay stable for all later candidates.
#[derive(Debug)]
pub struct GraphSynthesizer<'a> {
    order: &'a mut StageOrder,
}

impl<'a> GraphSynthesizer<'a> {
    /// Create a synthesizer over a run-shared stage order.
    #[must_use]
    pub fn new(order: &'a mut StageOrder) -> Self {
        Self { order }
    }

    /// Synthesize one candidate's graph.
    ///
    /// `metric` is the run-shared metric label, `source` identifies the
    /// origin search system, and `candidate_index` becomes the graph's
    /// positional digest.
    #[must_use]
    pub fn synthesize(
        &mut self,
        tree: &NamespaceTree,
        score: f64,
        fit_time: f64,
        metric: &str,
        source: &str,
        candidate_index: usize,
    ) -> PipelineGraph {
        // Resolve ordinals in tree insertion order, then sort. Resolving
        // inside the sort comparator would make first-seen assignment depend
        // on comparison order.
        let mut stages: Vec<_> = tree
            .stages()
            .iter()
            .map(|stage| (self.order.resolve(stage.stage_type()), stage))
            .collect();
        stages.sort_by_key(|(ordinal, _)| *ordinal);

        let mut steps: Vec<PipelineStep> = Vec::new();
        let mut frontier = vec![DATASET_INPUT_REF.to_string()];

        for (_, stage) in stages {
            let mut next_frontier = Vec::with_capacity(stage.modules().len());

            for module in stage.modules() {
                let hyperparams = module
                    .params()
                    .iter()
                    .map(|(name, value)| Hyperparameter::value(name, value.clone()))
                    .collect();

                let step = PipelineStep::new(
                    stage.stage_type(),
                    module.name(),
                    hyperparams,
                    frontier.clone(),
                    steps.len(),
                );
                next_frontier.push(step.reference().to_string());
                steps.push(step);
            }

            frontier = next_frontier;
        }

        PipelineGraph::new(
            steps,
            frontier,
            Score::new(metric, score),
            source,
            candidate_index,
            fit_time,
        )
    }
}

//! Property-based tests for pipegraph
//!
//! Invariants checked over generated candidate batches:
//! - conversion is length-preserving and order-preserving
//! - step counts match decoded module counts
//! - layer wiring is full fan-in over the previous layer
//! - ordinal assignment is dense and first-seen monotonic

use pipegraph::graph::DATASET_INPUT_REF;
use pipegraph::{convert, SearchResults, StageOrder};
use proptest::prelude::*;
use serde_json::{json, Map, Value};
use std::collections::HashSet;

/// Generate a stage-type label: seeded stages plus a few novel ones.
fn arb_stage_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("data_preprocessing".to_string()),
        Just("feature_preprocessor".to_string()),
        Just("classifier".to_string()),
        Just("regressor".to_string()),
        Just("balancing".to_string()),
        Just("custom_stage".to_string()),
    ]
}

fn arb_ident() -> impl Strategy<Value = String> {
    // Capped at 7 chars so generated labels never collide with the seeded
    // stage priority list (shortest seeded label is 9 chars)
    "[a-z][a-z0-9_]{0,6}"
}

/// Generate one candidate's flat parameter record (no selector keys, all
/// keys well formed).
fn arb_param_record() -> impl Strategy<Value = Map<String, Value>> {
    proptest::collection::vec(
        (arb_stage_type(), arb_ident(), arb_ident(), any::<i64>()),
        0..12,
    )
    .prop_map(|entries| {
        let mut record = Map::new();
        for (stage, module, param, value) in entries {
            record.insert(format!("{stage}:{module}:{param}"), json!(value));
        }
        record
    })
}

fn arb_results(max_candidates: usize) -> impl Strategy<Value = SearchResults> {
    proptest::collection::vec(arb_param_record(), 0..max_candidates).prop_map(|params| {
        let n = params.len();
        let scores = (0..n).map(|i| i as f64 / 10.0).collect();
        let times = (0..n).map(|i| i as f64).collect();
        SearchResults::new(scores, times, params)
    })
}

/// Count distinct (stage, module) pairs in a flat record, skipping nothing
/// (the generator emits no selector keys).
fn module_pair_count(record: &Map<String, Value>) -> usize {
    record
        .keys()
        .map(|k| {
            let mut parts = k.splitn(3, ':');
            let stage = parts.next().unwrap_or_default();
            let module = parts.next().unwrap_or_default();
            (stage.to_string(), module.to_string())
        })
        .collect::<HashSet<_>>()
        .len()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: convert returns exactly one graph per candidate, in order
    #[test]
    fn prop_one_graph_per_candidate(results in arb_results(8)) {
        let graphs = convert(&results, "auto-sklearn").unwrap();
        prop_assert_eq!(graphs.len(), results.params().len());
        for (i, graph) in graphs.iter().enumerate() {
            prop_assert_eq!(graph.digest(), i.to_string());
        }
    }

    /// Property: one step per decoded (stage, module) pair
    #[test]
    fn prop_step_count_matches_module_pairs(results in arb_results(6)) {
        let graphs = convert(&results, "auto-sklearn").unwrap();
        for (graph, record) in graphs.iter().zip(results.params()) {
            prop_assert_eq!(graph.steps().len(), module_pair_count(record));
        }
    }

    /// Property: every step's inputs equal the previous layer's outputs
    #[test]
    fn prop_full_fan_in(results in arb_results(6)) {
        let graphs = convert(&results, "auto-sklearn").unwrap();
        for graph in &graphs {
            let mut frontier = vec![DATASET_INPUT_REF.to_string()];
            let mut layer: Vec<String> = Vec::new();

            for step in graph.steps() {
                if step.inputs() != frontier.as_slice() {
                    // Layer boundary: the step consumes the layer just built
                    prop_assert_eq!(step.inputs(), layer.as_slice());
                    frontier = std::mem::take(&mut layer);
                }
                layer.push(step.reference().to_string());
            }

            let last_layer = if layer.is_empty() { frontier } else { layer };
            prop_assert_eq!(graph.outputs(), last_layer.as_slice());
        }
    }

    /// Property: step references are the dense sequence steps.i.produce
    #[test]
    fn prop_references_are_positional(results in arb_results(6)) {
        let graphs = convert(&results, "auto-sklearn").unwrap();
        for graph in &graphs {
            for (i, step) in graph.steps().iter().enumerate() {
                prop_assert_eq!(step.reference(), format!("steps.{i}.produce"));
            }
        }
    }

    /// Property: ordinals are dense and assigned in strict first-seen order
    #[test]
    fn prop_ordinals_first_seen_dense(labels in proptest::collection::vec(arb_ident(), 0..30)) {
        let mut order = StageOrder::new();
        let seeded = order.len();
        let mut seen = Vec::new();

        for label in &labels {
            let ordinal = order.resolve(label);
            if let Some(pos) = seen.iter().position(|s| s == label) {
                prop_assert_eq!(ordinal, seeded + pos);
            } else {
                prop_assert_eq!(ordinal, seeded + seen.len());
                seen.push(label.clone());
            }
        }
        prop_assert_eq!(order.len(), seeded + seen.len());
    }
}

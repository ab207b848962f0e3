//! Search Import Example
//!
//! Converts a small synthetic auto-sklearn search run into pipeline graphs
//! and prints them as JSON.
//!
//! Run with: cargo run --example import_search

use pipegraph::{convert, SearchResults};
use serde_json::{json, Map, Value};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Pipegraph Search Import ===\n");

    // -------------------------------------------------------------------------
    // 1. Build a two-candidate search result
    // -------------------------------------------------------------------------
    println!("1. Building search results...");

    let mut candidate_0 = Map::new();
    candidate_0.insert("classifier:__choice__".into(), json!("random_forest"));
    candidate_0.insert(
        "classifier:random_forest:n_estimators".into(),
        json!(100),
    );
    candidate_0.insert("feature_preprocessor:pca:n_components".into(), json!(5));

    let mut candidate_1 = Map::new();
    candidate_1.insert("classifier:__choice__".into(), json!("svm"));
    candidate_1.insert("classifier:svm:c".into(), json!(0.5));
    candidate_1.insert("classifier:svm:kernel".into(), json!("rbf"));
    candidate_1.insert(
        "data_preprocessing:numerical:imputation_strategy".into(),
        json!("median"),
    );

    let params: Vec<Map<String, Value>> = vec![candidate_0, candidate_1];
    let results = SearchResults::builder(vec![0.91, 0.87], vec![1.4, 0.6], params)
        .report("auto-sklearn results:\n  Dataset name: digits\n  Metric: f1_macro")
        .build();

    println!("   Candidates: {}", results.params().len());

    // -------------------------------------------------------------------------
    // 2. Convert to pipeline graphs
    // -------------------------------------------------------------------------
    println!("\n2. Converting to pipeline graphs...");

    let graphs = convert(&results, "auto-sklearn")?;

    for graph in &graphs {
        println!(
            "   Graph {}: {} steps, score {:.2} ({})",
            graph.digest(),
            graph.steps().len(),
            graph.score().value(),
            graph.score().metric(),
        );
        for step in graph.steps() {
            println!(
                "      {} <- {:?} ({} hyperparameters)",
                step.reference(),
                step.inputs(),
                step.hyperparams().len(),
            );
        }
    }

    // -------------------------------------------------------------------------
    // 3. Serialize
    // -------------------------------------------------------------------------
    println!("\n3. Serialized first graph:\n");
    println!("{}", serde_json::to_string_pretty(&graphs[0])?);

    Ok(())
}

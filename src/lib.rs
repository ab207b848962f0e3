//! # Pipegraph: AutoML Search Results to Pipeline Graphs
//!
//! Pipegraph decodes the flat, colon-namespaced hyperparameter records
//! produced by AutoML search procedures into structured namespace trees, and
//! synthesizes each candidate into an explicit pipeline graph: a layered DAG
//! of typed steps with deterministic stage ordering and full fan-in wiring
//! between consecutive layers.
//!
//! ## Example
//!
//! ```rust
//! use pipegraph::{convert, SearchResults};
//! use serde_json::{json, Map};
//!
//! let mut params = Map::new();
//! params.insert("classifier:random_forest:n_estimators".into(), json!(100));
//! params.insert("classifier:__choice__".into(), json!("random_forest"));
//! params.insert("feature_preprocessor:pca:n_components".into(), json!(5));
//!
//! let results = SearchResults::new(vec![0.9], vec![1.2], vec![params]);
//! let graphs = convert(&results, "auto-sklearn")?;
//!
//! assert_eq!(graphs.len(), 1);
//! assert_eq!(graphs[0].steps()[0].name(), "pca");
//! assert_eq!(graphs[0].steps()[1].name(), "random_forest");
//! # Ok::<(), pipegraph::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod convert;
pub mod decode;
pub mod error;
pub mod graph;
pub mod metric;
pub mod order;

pub use convert::{convert, SearchResults, SearchResultsBuilder};
pub use decode::NamespaceTree;
pub use error::{Error, Result};
pub use graph::{PipelineGraph, PipelineStep};
pub use order::StageOrder;

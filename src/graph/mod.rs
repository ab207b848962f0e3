//! Pipeline graph schema and synthesis
//!
//! One conversion run turns each search candidate into a [`PipelineGraph`]:
//! an ordered list of [`PipelineStep`]s forming a DAG of sequential layers,
//! with explicit input/output references.
//!
//! ```text
//! PipelineGraph (1) ──< PipelineStep (N)
//!                            │
//!                            └──< Hyperparameter (N) [literal values]
//! ```
//!
//! Steps reference their upstream outputs positionally: the synthetic dataset
//! input is `inputs.0`, and step *i* publishes `steps.i.produce`.

mod pipeline;
mod step;
mod synth;

pub use pipeline::{PipelineGraph, Score, DATASET_INPUT_NAME, DATASET_INPUT_REF};
pub use step::{Hyperparameter, HyperparameterKind, PipelineStep, STEP_OUTPUT_ID};
pub use synth::GraphSynthesizer;

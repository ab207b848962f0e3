//! Pipeline Step - one typed processing node in the graph

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Output port id shared by every step.
pub const STEP_OUTPUT_ID: &str = "produce";

/// How a hyperparameter is bound.
///
/// Decoded search records only ever carry literal values, but the tag is kept
/// explicit so serialized graphs stay self-describing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HyperparameterKind {
    /// Bound to a literal value.
    Value,
}

/// A hyperparameter bound to a step, tagged as a literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hyperparameter {
    name: String,
    #[serde(rename = "type")]
    kind: HyperparameterKind,
    data: Value,
}

impl Hyperparameter {
    /// Create a literal-value hyperparameter.
    #[must_use]
    pub fn value(name: impl Into<String>, data: Value) -> Self {
        Self {
            name: name.into(),
            kind: HyperparameterKind::Value,
            data,
        }
    }

    /// Get the parameter name. May be empty (a preserved decoding edge case).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the binding kind.
    #[must_use]
    pub const fn kind(&self) -> HyperparameterKind {
        self.kind
    }

    /// Get the opaque parameter value.
    #[must_use]
    pub const fn data(&self) -> &Value {
        &self.data
    }
}

/// Pipeline Step represents one (stage type, module) pair of a candidate.
///
/// Immutable after creation. `inputs` holds the entire frontier of the
/// previous layer, in frontier order: input *j* corresponds to frontier
/// entry *j*.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineStep {
    primitive: String,
    name: String,
    hyperparams: Vec<Hyperparameter>,
    inputs: Vec<String>,
    output_id: String,
    reference: String,
}

impl PipelineStep {
    /// Create a step for `(stage_type, module)` at global position
    /// `step_index` in the graph's step list.
    ///
    /// The primitive identifier and the step's own output reference are both
    /// derived deterministically here.
    #[must_use]
    pub fn new(
        stage_type: &str,
        module: &str,
        hyperparams: Vec<Hyperparameter>,
        inputs: Vec<String>,
        step_index: usize,
    ) -> Self {
        Self {
            primitive: Self::primitive_path(stage_type, module),
            name: module.to_string(),
            hyperparams,
            inputs,
            output_id: STEP_OUTPUT_ID.to_string(),
            reference: Self::reference_for(step_index),
        }
    }

    /// Derive the primitive identifier for a `(stage_type, module)` pair.
    #[must_use]
    pub fn primitive_path(stage_type: &str, module: &str) -> String {
        format!("auto_sklearn.primitives.{stage_type}.{module}")
    }

    /// Output reference published by the step at `step_index`.
    #[must_use]
    pub fn reference_for(step_index: usize) -> String {
        format!("steps.{step_index}.{STEP_OUTPUT_ID}")
    }

    /// Get the derived primitive identifier.
    #[must_use]
    pub fn primitive(&self) -> &str {
        &self.primitive
    }

    /// Get the bare module name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the step's hyperparameters, in decode order.
    #[must_use]
    pub fn hyperparams(&self) -> &[Hyperparameter] {
        &self.hyperparams
    }

    /// Look up a hyperparameter value by name.
    #[must_use]
    pub fn hyperparam(&self, name: &str) -> Option<&Value> {
        self.hyperparams
            .iter()
            .find(|h| h.name() == name)
            .map(Hyperparameter::data)
    }

    /// Get the upstream references this step consumes, in frontier order.
    #[must_use]
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// Get the step's output port id.
    #[must_use]
    pub fn output_id(&self) -> &str {
        &self.output_id
    }

    /// Get the step's own output reference.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }
}

//! Hyperparameter namespace decoding
//!
//! Search procedures flatten every tunable into a single record of
//! colon-delimited keys, e.g. `classifier:random_forest:n_estimators`. This
//! module decodes one such record into a three-level tree:
//! stage type → module name → parameter name → value.
//!
//! ## Key grammar
//!
//! ```text
//! <stage_type>:<module_or_selector>:<param_segment>[:<param_segment>...]
//! ```
//!
//! Keys whose second segment is a selector marker (`__choice__` or
//! `strategy`) encode which module was chosen, not a tunable value, and are
//! discarded. All other keys must have at least 3 segments.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Marker segment recording which module a stage selected.
const CHOICE_MARKER: &str = "__choice__";

/// Alternate selector marker used by imputation-style stages.
const STRATEGY_MARKER: &str = "strategy";

fn is_selector(segment: &str) -> bool {
    segment == CHOICE_MARKER || segment == STRATEGY_MARKER
}

/// Parameters of one module within a stage.
///
/// Parameter values pass through opaque; no type validation is performed.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleEntry {
    name: String,
    params: Map<String, Value>,
}

impl ModuleEntry {
    /// Get the module name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the module's parameter map, in decode order.
    #[must_use]
    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }
}

/// Modules decoded under one stage type, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct StageEntry {
    stage_type: String,
    modules: Vec<ModuleEntry>,
}

impl StageEntry {
    /// Get the stage-type label.
    #[must_use]
    pub fn stage_type(&self) -> &str {
        &self.stage_type
    }

    /// Get the stage's modules, in first-seen order.
    #[must_use]
    pub fn modules(&self) -> &[ModuleEntry] {
        &self.modules
    }
}

/// One candidate's decoded hyperparameter namespace.
///
/// Transient: built fresh per candidate and consumed by graph synthesis.
/// Stages and modules keep the insertion order of the flat record so the
/// synthesized step sequence is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamespaceTree {
    stages: Vec<StageEntry>,
}

impl NamespaceTree {
    /// Decode a flat parameter record into a namespace tree.
    ///
    /// `candidate` is the record's positional index, used only for error
    /// context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedKey`] for any non-selector key with fewer
    /// than 3 colon-delimited segments.
    pub fn decode(params: &Map<String, Value>, candidate: usize) -> Result<Self> {
        let mut tree = Self::default();

        for (key, value) in params {
            let segments: Vec<&str> = key.split(':').collect();

            // Selector keys may legally have only 2 segments, so this check
            // runs before the arity check.
            if segments.len() >= 2 && is_selector(segments[1]) {
                continue;
            }
            if segments.len() < 3 {
                return Err(Error::MalformedKey {
                    candidate,
                    key: key.clone(),
                });
            }

            // Parameter paths may nest another __choice__ segment; those are
            // dropped before joining. The result may be the empty string.
            let param = segments[2..]
                .iter()
                .filter(|s| **s != CHOICE_MARKER)
                .copied()
                .collect::<Vec<_>>()
                .join("_");

            tree.insert(segments[0], segments[1], param, value.clone());
        }

        Ok(tree)
    }

    /// Insert a value at `tree[stage_type][module][param]`, last write wins.
    fn insert(&mut self, stage_type: &str, module: &str, param: String, value: Value) {
        let stage_idx = match self.stages.iter().position(|s| s.stage_type == stage_type) {
            Some(idx) => idx,
            None => {
                self.stages.push(StageEntry {
                    stage_type: stage_type.to_string(),
                    modules: Vec::new(),
                });
                self.stages.len() - 1
            }
        };
        let stage = &mut self.stages[stage_idx];

        let module_idx = match stage.modules.iter().position(|m| m.name == module) {
            Some(idx) => idx,
            None => {
                stage.modules.push(ModuleEntry {
                    name: module.to_string(),
                    params: Map::new(),
                });
                stage.modules.len() - 1
            }
        };

        stage.modules[module_idx].params.insert(param, value);
    }

    /// Get the decoded stages, in first-seen order.
    #[must_use]
    pub fn stages(&self) -> &[StageEntry] {
        &self.stages
    }

    /// Check whether the tree holds no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

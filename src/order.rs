//! Stage ordering - deterministic ordinals for stage-type labels
//!
//! A `StageOrder` is owned by one conversion run and shared across all of its
//! candidates, so a stage type first seen while decoding candidate *k* keeps
//! the same ordinal for every later candidate in that run. It is never global
//! state and never reused across runs.

use std::collections::HashMap;

/// Stage types that always sort first, in this order.
///
/// Labels outside this list receive the next unused ordinal on first sight.
pub const DEFAULT_STAGE_PRIORITY: [&str; 4] = [
    "data_preprocessing",
    "feature_preprocessor",
    "classifier",
    "regressor",
];

/// Mutable table assigning a stable ordinal to each stage-type label.
///
/// Ordinals are dense: the first unknown label gets `len()`, and once a label
/// has an ordinal it never changes.
#[derive(Debug, Clone)]
pub struct StageOrder {
    ordinals: HashMap<String, usize>,
}

impl StageOrder {
    /// Create a resolver seeded with [`DEFAULT_STAGE_PRIORITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_priority(DEFAULT_STAGE_PRIORITY)
    }

    /// Create a resolver seeded with a custom priority sequence.
    ///
    /// Labels are assigned ordinals `0..` in iteration order; duplicates keep
    /// their first ordinal.
    #[must_use]
    pub fn with_priority<I, S>(priority: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut order = Self {
            ordinals: HashMap::new(),
        };
        for label in priority {
            let label = label.into();
            let next = order.ordinals.len();
            order.ordinals.entry(label).or_insert(next);
        }
        order
    }

    /// Resolve a stage-type label to its ordinal, assigning the next unused
    /// ordinal on first sight.
    pub fn resolve(&mut self, label: &str) -> usize {
        if let Some(&ordinal) = self.ordinals.get(label) {
            return ordinal;
        }
        let ordinal = self.ordinals.len();
        self.ordinals.insert(label.to_string(), ordinal);
        ordinal
    }

    /// Look up a label's ordinal without assigning one.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<usize> {
        self.ordinals.get(label).copied()
    }

    /// Number of labels with assigned ordinals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordinals.len()
    }

    /// Check whether no labels have been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordinals.is_empty()
    }
}

impl Default for StageOrder {
    fn default() -> Self {
        Self::new()
    }
}

//! Aggregated analysis results

use std::collections::BTreeSet;

use serde::Serialize;

use crate::observations::Observation;
use crate::scanner::Extraction;

/// Strings and observations collected from a single document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Findings {
    /// Identifiers with a higher chance of false positives
    pub loose_strings: BTreeSet<String>,
    /// Identifiers with a lower chance of false positives
    pub strict_strings: BTreeSet<String>,
    /// Observations in detection order, duplicates kept
    pub observations: Vec<Observation>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_observation(&mut self, observation: Observation) {
        self.observations.push(observation);
    }

    /// Folds an extractor's partial result into the aggregate
    pub(crate) fn merge(&mut self, extraction: Extraction) {
        self.loose_strings.extend(extraction.loose_strings);
        self.strict_strings.extend(extraction.strict_strings);
        self.observations.extend(extraction.observations);
    }

    pub fn has_observation(&self, observation: Observation) -> bool {
        self.observations.contains(&observation)
    }

    pub fn is_empty(&self) -> bool {
        self.loose_strings.is_empty() && self.strict_strings.is_empty() && self.observations.is_empty()
    }
}

use std::time::Instant;

use crate::models::InteractionRecord;

use super::detection::detect_interactions;
use super::graph::InteractionGraph;
use super::scoring::{ExponentialRiskStrategy, RiskScoringStrategy};
use super::types::InteractionAnalysis;

/// Deterministic graph-based drug interaction engine.
///
/// Builds the adjacency graph per call, detects pairwise conflicts and
/// delegates scoring to the injected strategy. Holds no state between calls.
pub struct InteractionEngine {
    strategy: Box<dyn RiskScoringStrategy>,
}

impl InteractionEngine {
    pub fn new() -> Self {
        Self::with_strategy(Box::new(ExponentialRiskStrategy::default()))
    }

    pub fn with_strategy(strategy: Box<dyn RiskScoringStrategy>) -> Self {
        Self { strategy }
    }

    /// Detect all pairwise conflicts in a prescription and score them.
    pub fn analyze_prescription<S: AsRef<str>>(
        &self,
        prescribed_drugs: &[S],
        records: &[InteractionRecord],
    ) -> InteractionAnalysis {
        let start = Instant::now();

        let graph = InteractionGraph::build(records);
        let outcome = detect_interactions(prescribed_drugs, &graph);
        let scoring = self
            .strategy
            .calculate(outcome.raw_weight, &outcome.severity_counts);

        tracing::info!(
            drugs = prescribed_drugs.len(),
            records = records.len(),
            matches = outcome.matches.len(),
            raw_weight = outcome.raw_weight,
            score = scoring.normalized_score,
            band = scoring.clinical_band.as_str(),
            processing_us = start.elapsed().as_micros() as u64,
            "Interaction analysis complete"
        );

        InteractionAnalysis::from_parts(outcome.matches, scoring)
    }
}

impl Default for InteractionEngine {
    fn default() -> Self {
        Self::new()
    }
}

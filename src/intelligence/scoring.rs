use crate::config::EngineConfig;
use crate::models::ClinicalBand;

use super::messages::MessageTemplates;
use super::types::{ScoringResult, SeverityCounts};

/// Converts detected conflicts into a bounded, explainable risk score.
/// Implementations are swappable; callers depend only on `calculate`.
pub trait RiskScoringStrategy: Send + Sync {
    fn calculate(&self, raw_weight: u32, severity_counts: &SeverityCounts) -> ScoringResult;
}

/// Deterministic asymptotic scoring: `score = 100 * (1 - e^(-k * W))`.
///
/// Capped at 100. Any contraindicated interaction raises the score to at
/// least the contraindicated floor.
#[derive(Debug, Clone)]
pub struct ExponentialRiskStrategy {
    k: f64,
    contraindicated_floor: u32,
}

impl ExponentialRiskStrategy {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            k: config.decay_k,
            contraindicated_floor: config.contraindicated_floor,
        }
    }

    fn base_score(&self, raw_weight: u32) -> u32 {
        if raw_weight == 0 {
            return 0;
        }
        let score = 100.0 * (1.0 - (-self.k * f64::from(raw_weight)).exp());
        score.round() as u32
    }
}

impl Default for ExponentialRiskStrategy {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl RiskScoringStrategy for ExponentialRiskStrategy {
    fn calculate(&self, raw_weight: u32, severity_counts: &SeverityCounts) -> ScoringResult {
        let mut normalized = self.base_score(raw_weight);

        if severity_counts.has_contraindicated() && normalized < self.contraindicated_floor {
            normalized = self.contraindicated_floor;
        }
        normalized = normalized.min(100);

        let dominant = severity_counts.dominant();
        let explanation = if raw_weight == 0 {
            MessageTemplates::no_interactions()
        } else {
            MessageTemplates::interaction_summary(severity_counts, dominant)
        };

        ScoringResult {
            raw_weight,
            normalized_score: normalized,
            clinical_band: ClinicalBand::from_score(normalized),
            severity_counts: *severity_counts,
            dominant_severity_driver: dominant,
            explanation,
        }
    }
}

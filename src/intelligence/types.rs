use serde::{Deserialize, Serialize};

use crate::models::{ClinicalBand, InteractionMatch, SeverityLevel};

// ---------------------------------------------------------------------------
// SeverityCounts
// ---------------------------------------------------------------------------

/// Number of detected interactions per severity.
/// Serializes as an object keyed by the lowercase severity names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub mild: u32,
    pub moderate: u32,
    pub severe: u32,
    pub contraindicated: u32,
}

impl SeverityCounts {
    pub fn get(&self, level: SeverityLevel) -> u32 {
        match level {
            SeverityLevel::Mild => self.mild,
            SeverityLevel::Moderate => self.moderate,
            SeverityLevel::Severe => self.severe,
            SeverityLevel::Contraindicated => self.contraindicated,
        }
    }

    pub fn increment(&mut self, level: SeverityLevel) {
        let slot = match level {
            SeverityLevel::Mild => &mut self.mild,
            SeverityLevel::Moderate => &mut self.moderate,
            SeverityLevel::Severe => &mut self.severe,
            SeverityLevel::Contraindicated => &mut self.contraindicated,
        };
        *slot += 1;
    }

    /// Counts in declaration order, mildest first.
    pub fn iter(&self) -> impl Iterator<Item = (SeverityLevel, u32)> + '_ {
        SeverityLevel::ALL.into_iter().map(move |level| (level, self.get(level)))
    }

    pub fn total(&self) -> u32 {
        self.mild + self.moderate + self.severe + self.contraindicated
    }

    pub fn has_contraindicated(&self) -> bool {
        self.contraindicated > 0
    }

    /// Highest-priority severity with a nonzero count.
    pub fn dominant(&self) -> Option<SeverityLevel> {
        SeverityLevel::PRIORITY
            .into_iter()
            .find(|level| self.get(*level) > 0)
    }
}

// ---------------------------------------------------------------------------
// ScoringResult
// ---------------------------------------------------------------------------

/// Output of a risk scoring strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub raw_weight: u32,
    /// Always within `0..=100`.
    pub normalized_score: u32,
    pub clinical_band: ClinicalBand,
    pub severity_counts: SeverityCounts,
    pub dominant_severity_driver: Option<SeverityLevel>,
    pub explanation: String,
}

// ---------------------------------------------------------------------------
// DetectionOutcome & InteractionAnalysis
// ---------------------------------------------------------------------------

/// Raw output of pairwise detection, before scoring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectionOutcome {
    pub matches: Vec<InteractionMatch>,
    pub raw_weight: u32,
    pub severity_counts: SeverityCounts,
}

/// Full interaction analysis for one prescription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionAnalysis {
    pub interactions: Vec<InteractionMatch>,
    pub risk_score: u32,
    pub clinical_band: ClinicalBand,
    pub raw_weight: u32,
    pub severity_counts: SeverityCounts,
    pub dominant_severity_driver: Option<SeverityLevel>,
    pub explanation: String,
}

impl InteractionAnalysis {
    pub fn from_parts(matches: Vec<InteractionMatch>, scoring: ScoringResult) -> Self {
        Self {
            interactions: matches,
            risk_score: scoring.normalized_score,
            clinical_band: scoring.clinical_band,
            raw_weight: scoring.raw_weight,
            severity_counts: scoring.severity_counts,
            dominant_severity_driver: scoring.dominant_severity_driver,
            explanation: scoring.explanation,
        }
    }
}

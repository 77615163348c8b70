use crate::models::SeverityLevel;

use super::types::SeverityCounts;

/// Message template builder for risk explanations and schedule notes.
/// Wording is fixed: callers and downstream tests match on it.
pub struct MessageTemplates;

impl MessageTemplates {
    /// Explanation when no interaction was detected.
    pub fn no_interactions() -> String {
        "No known pharmacological interactions detected between the prescribed medications."
            .to_string()
    }

    /// Explanation listing each nonzero severity count and the dominant driver.
    pub fn interaction_summary(
        counts: &SeverityCounts,
        dominant: Option<SeverityLevel>,
    ) -> String {
        let active: Vec<String> = counts
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(level, count)| format!("{} {}", count, level))
            .collect();
        let dominant = dominant.map_or("none", |d| d.as_str()).to_uppercase();

        let mut explanation = format!(
            "Detected {} interactions. Dominant clinical risk: {}.",
            active.join(", "),
            dominant,
        );
        if counts.has_contraindicated() {
            explanation.push_str(" WARNING: Potential terminal risk detected.");
        }
        explanation
    }

    /// Warning for a dose the optimizer could not place.
    pub fn unplaceable_dose(drug: &str) -> String {
        format!(
            "WARNING: Insufficient safe time slots to schedule '{}'. \
             It violates rigid interaction separation windows or frequency caps. \
             Please consult a physician to adjust dosage.",
            drug,
        )
    }

    /// Note describing a separation applied to an interacting pair.
    pub fn separation(drug_a: &str, drug_b: &str, severity: SeverityLevel) -> String {
        format!(
            "Separated {} and {} by at least {} hours due to {} interaction risk.",
            drug_a,
            drug_b,
            severity.min_separation_hours(),
            severity,
        )
    }

    /// Note when nothing required separation.
    pub fn standard_spreading() -> String {
        "No dangerous interactions detected. Standard spreading applied.".to_string()
    }
}

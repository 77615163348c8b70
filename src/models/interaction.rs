use serde::{Deserialize, Serialize};

use super::enums::SeverityLevel;
use super::normalize_drug_name;

/// One undirected conflict edge between two drugs, as stored by the
/// interaction database. `(A, B)` and `(B, A)` denote the same edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub drug_a: String,
    pub drug_b: String,
    pub severity: SeverityLevel,
    pub explanation: String,
}

impl InteractionRecord {
    pub fn new(
        drug_a: impl Into<String>,
        drug_b: impl Into<String>,
        severity: SeverityLevel,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            drug_a: drug_a.into(),
            drug_b: drug_b.into(),
            severity,
            explanation: explanation.into(),
        }
    }

    /// Both endpoints in canonical form.
    pub fn normalized_pair(&self) -> (String, String) {
        (
            normalize_drug_name(&self.drug_a),
            normalize_drug_name(&self.drug_b),
        )
    }
}

/// A conflict found between two prescribed drugs.
/// Drug names are canonical and `drug_a` sorts before `drug_b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionMatch {
    pub drug_a: String,
    pub drug_b: String,
    pub severity: SeverityLevel,
    pub explanation: String,
}

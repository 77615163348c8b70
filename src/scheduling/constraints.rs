use std::collections::HashMap;

use crate::models::InteractionRecord;

/// Pairwise minimum-separation map: drug -> drug -> required hours apart.
#[derive(Debug, Clone, Default)]
pub struct ConstraintGraph {
    min_gaps: HashMap<String, HashMap<String, u32>>,
}

impl ConstraintGraph {
    /// Build separation constraints from interaction records.
    /// Duplicate pairs keep the strictest (largest) gap. Stored symmetrically.
    pub fn build(records: &[InteractionRecord]) -> Self {
        let mut min_gaps: HashMap<String, HashMap<String, u32>> = HashMap::new();

        for record in records {
            let (drug_a, drug_b) = record.normalized_pair();
            let required_gap = record.severity.min_separation_hours();

            let current = min_gaps.get(&drug_a).and_then(|m| m.get(&drug_b)).copied();
            if current.map_or(true, |gap| required_gap > gap) {
                min_gaps
                    .entry(drug_a.clone())
                    .or_default()
                    .insert(drug_b.clone(), required_gap);
                min_gaps.entry(drug_b).or_default().insert(drug_a, required_gap);
            }
        }

        Self { min_gaps }
    }

    /// Required separation in hours, 0 when unconstrained.
    pub fn required_gap(&self, drug_x: &str, drug_y: &str) -> u32 {
        self.min_gaps
            .get(drug_x)
            .and_then(|m| m.get(drug_y))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct drugs `drug` has a recorded constraint with.
    /// Mild pairs count even though their gap is 0.
    pub fn degree(&self, drug: &str) -> usize {
        self.min_gaps.get(drug).map_or(0, HashMap::len)
    }
}

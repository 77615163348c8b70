use std::collections::BTreeSet;

use crate::models::{normalize_drug_name, InteractionMatch};

use super::graph::InteractionGraph;
use super::types::{DetectionOutcome, SeverityCounts};

/// Detect every known interaction between the prescribed drugs.
///
/// Names are normalized and deduplicated, then all unordered pairs are
/// checked against the graph: `n * (n - 1) / 2` lookups for `n` unique drugs.
/// The unique set is sorted, so output order depends only on the set of
/// drugs, never on input order or repetition.
pub fn detect_interactions<S: AsRef<str>>(
    prescribed_drugs: &[S],
    graph: &InteractionGraph,
) -> DetectionOutcome {
    let unique_drugs: Vec<String> = prescribed_drugs
        .iter()
        .map(|d| normalize_drug_name(d.as_ref()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut matches = Vec::new();
    let mut raw_weight = 0;
    let mut severity_counts = SeverityCounts::default();

    for (i, drug_x) in unique_drugs.iter().enumerate() {
        for drug_y in &unique_drugs[i + 1..] {
            let Some(conflict) = graph.edge(drug_x, drug_y) else {
                continue;
            };

            matches.push(InteractionMatch {
                drug_a: drug_x.clone(),
                drug_b: drug_y.clone(),
                severity: conflict.severity,
                explanation: conflict.explanation.clone(),
            });
            raw_weight += conflict.severity.weight();
            severity_counts.increment(conflict.severity);
        }
    }

    DetectionOutcome {
        matches,
        raw_weight,
        severity_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InteractionRecord, SeverityLevel};

    fn make_graph() -> InteractionGraph {
        InteractionGraph::build(&[
            InteractionRecord::new(
                "ASPIRIN",
                "WARFARIN",
                SeverityLevel::Severe,
                "Increased bleeding risk.",
            ),
            InteractionRecord::new(
                "OMEPRAZOLE",
                "WARFARIN",
                SeverityLevel::Moderate,
                "Altered metabolism.",
            ),
            InteractionRecord::new(
                "LISINOPRIL",
                "POTASSIUM",
                SeverityLevel::Contraindicated,
                "Fatal hyperkalemia risk.",
            ),
        ])
    }

    #[test]
    fn no_interactions_between_unrelated_drugs() {
        let outcome = detect_interactions(&["PARACETAMOL", "AMOXICILLIN"], &make_graph());
        assert!(outcome.matches.is_empty());
        assert_eq!(outcome.raw_weight, 0);
        assert_eq!(outcome.severity_counts.total(), 0);
    }

    #[test]
    fn empty_prescription_is_zero_not_error() {
        let empty: [&str; 0] = [];
        let outcome = detect_interactions(&empty, &make_graph());
        assert_eq!(outcome, DetectionOutcome::default());
    }

    #[test]
    fn single_severe_pair() {
        let outcome = detect_interactions(
            &["ASPIRIN", "WARFARIN", "LISINOPRIL", "PARACETAMOL"],
            &make_graph(),
        );
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.raw_weight, 4);
        assert_eq!(outcome.severity_counts.severe, 1);
        let m = &outcome.matches[0];
        assert_eq!(m.drug_a, "ASPIRIN");
        assert_eq!(m.drug_b, "WARFARIN");
        assert_eq!(m.explanation, "Increased bleeding risk.");
    }

    #[test]
    fn duplicates_and_order_do_not_change_result() {
        let graph = make_graph();
        let a = detect_interactions(&["ASPIRIN", "ASPIRIN", "WARFARIN"], &graph);
        let b = detect_interactions(&["Warfarin", "  aspirin "], &graph);
        assert_eq!(a, b);
        assert_eq!(a.matches.len(), 1);
    }

    #[test]
    fn accumulates_weight_across_severities() {
        let outcome = detect_interactions(
            &["WARFARIN", "ASPIRIN", "OMEPRAZOLE", "LISINOPRIL", "POTASSIUM"],
            &make_graph(),
        );
        assert_eq!(outcome.matches.len(), 3);
        assert_eq!(outcome.raw_weight, 4 + 2 + 5);
        assert_eq!(outcome.severity_counts.severe, 1);
        assert_eq!(outcome.severity_counts.moderate, 1);
        assert_eq!(outcome.severity_counts.contraindicated, 1);
    }

    #[test]
    fn matches_are_sorted_by_pair() {
        let outcome = detect_interactions(
            &["WARFARIN", "POTASSIUM", "OMEPRAZOLE", "LISINOPRIL", "ASPIRIN"],
            &make_graph(),
        );
        let pairs: Vec<(&str, &str)> = outcome
            .matches
            .iter()
            .map(|m| (m.drug_a.as_str(), m.drug_b.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("ASPIRIN", "WARFARIN"),
                ("LISINOPRIL", "POTASSIUM"),
                ("OMEPRAZOLE", "WARFARIN"),
            ]
        );
    }

    #[test]
    fn each_pair_counted_once_in_fully_connected_set() {
        let graph = InteractionGraph::build(&[
            InteractionRecord::new("A", "B", SeverityLevel::Mild, "ab"),
            InteractionRecord::new("A", "C", SeverityLevel::Mild, "ac"),
            InteractionRecord::new("B", "C", SeverityLevel::Mild, "bc"),
        ]);
        let outcome = detect_interactions(&["C", "B", "A", "A"], &graph);
        assert_eq!(outcome.matches.len(), 3);
        assert_eq!(outcome.raw_weight, 3);
        assert_eq!(outcome.severity_counts.mild, 3);
    }
}

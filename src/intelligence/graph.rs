use std::collections::HashMap;

use crate::models::InteractionRecord;

/// Undirected adjacency graph of known drug interactions.
///
/// Keys are canonical drug names. Every record is inserted in both
/// directions so a pair lookup is O(1) regardless of argument order.
#[derive(Debug, Clone, Default)]
pub struct InteractionGraph {
    adjacency: HashMap<String, HashMap<String, InteractionRecord>>,
}

impl InteractionGraph {
    /// Build the graph from flat interaction records.
    /// When the same pair appears twice, the later record wins.
    pub fn build(records: &[InteractionRecord]) -> Self {
        let mut adjacency: HashMap<String, HashMap<String, InteractionRecord>> = HashMap::new();

        for record in records {
            let (drug_a, drug_b) = record.normalized_pair();

            adjacency
                .entry(drug_a.clone())
                .or_default()
                .insert(drug_b.clone(), record.clone());
            adjacency
                .entry(drug_b)
                .or_default()
                .insert(drug_a, record.clone());
        }

        Self { adjacency }
    }

    /// Record connecting two canonical drug names, if any.
    pub fn edge(&self, drug_x: &str, drug_y: &str) -> Option<&InteractionRecord> {
        self.adjacency.get(drug_x)?.get(drug_y)
    }

    /// Canonical names of every drug sharing an edge with `drug`.
    pub fn neighbors(&self, drug: &str) -> impl Iterator<Item = &str> {
        self.adjacency
            .get(drug)
            .into_iter()
            .flat_map(|edges| edges.keys().map(String::as_str))
    }

    pub fn drug_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeverityLevel;

    fn make_record(a: &str, b: &str, severity: SeverityLevel) -> InteractionRecord {
        InteractionRecord::new(a, b, severity, "test")
    }

    #[test]
    fn edges_are_undirected() {
        let graph = InteractionGraph::build(&[make_record(
            "Aspirin",
            "Warfarin",
            SeverityLevel::Severe,
        )]);
        assert!(graph.edge("ASPIRIN", "WARFARIN").is_some());
        assert!(graph.edge("WARFARIN", "ASPIRIN").is_some());
        assert_eq!(graph.drug_count(), 2);
    }

    #[test]
    fn keys_are_normalized() {
        let graph = InteractionGraph::build(&[make_record(
            "  omeprazole ",
            "WARFARIN\t",
            SeverityLevel::Moderate,
        )]);
        let edge = graph.edge("OMEPRAZOLE", "WARFARIN").unwrap();
        assert_eq!(edge.severity, SeverityLevel::Moderate);
        assert!(graph.edge("omeprazole", "WARFARIN").is_none());
    }

    #[test]
    fn neighbors_lists_all_connected_drugs() {
        let graph = InteractionGraph::build(&[
            make_record("ASPIRIN", "WARFARIN", SeverityLevel::Severe),
            make_record("OMEPRAZOLE", "WARFARIN", SeverityLevel::Moderate),
        ]);
        let mut neighbors: Vec<&str> = graph.neighbors("WARFARIN").collect();
        neighbors.sort();
        assert_eq!(neighbors, vec!["ASPIRIN", "OMEPRAZOLE"]);
        assert_eq!(graph.neighbors("PARACETAMOL").count(), 0);
    }

    #[test]
    fn duplicate_pair_keeps_later_record() {
        let graph = InteractionGraph::build(&[
            make_record("A", "B", SeverityLevel::Mild),
            make_record("B", "A", SeverityLevel::Severe),
        ]);
        assert_eq!(graph.edge("A", "B").unwrap().severity, SeverityLevel::Severe);
        assert_eq!(graph.edge("B", "A").unwrap().severity, SeverityLevel::Severe);
    }

    #[test]
    fn empty_records_build_empty_graph() {
        let graph = InteractionGraph::build(&[]);
        assert!(graph.is_empty());
        assert!(graph.edge("A", "B").is_none());
    }
}

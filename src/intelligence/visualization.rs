//! Cytoscape.js payload for rendering detected interactions as a graph.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{normalize_drug_name, InteractionMatch, SeverityLevel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CytoscapeGraph {
    pub nodes: Vec<CytoscapeNode>,
    pub edges: Vec<CytoscapeEdge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CytoscapeNode {
    pub data: NodeData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CytoscapeEdge {
    pub data: EdgeData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    pub source: String,
    pub target: String,
    pub severity: SeverityLevel,
    pub color: String,
    /// Rendered as a tooltip when the edge is clicked.
    pub explanation: String,
}

/// Convert a prescription and its detected interactions into graph nodes and edges.
///
/// Every drug named by an edge becomes a node even if it is missing from
/// the prescription list. Nodes are unique and sorted.
pub fn to_cytoscape<S: AsRef<str>>(
    prescribed_drugs: &[S],
    interactions: &[InteractionMatch],
) -> CytoscapeGraph {
    let mut unique_nodes: BTreeSet<String> = prescribed_drugs
        .iter()
        .map(|d| normalize_drug_name(d.as_ref()))
        .collect();

    for interaction in interactions {
        unique_nodes.insert(normalize_drug_name(&interaction.drug_a));
        unique_nodes.insert(normalize_drug_name(&interaction.drug_b));
    }

    let nodes = unique_nodes
        .into_iter()
        .map(|id| CytoscapeNode { data: NodeData { id } })
        .collect();

    let edges = interactions
        .iter()
        .map(|interaction| CytoscapeEdge {
            data: EdgeData {
                source: normalize_drug_name(&interaction.drug_a),
                target: normalize_drug_name(&interaction.drug_b),
                severity: interaction.severity,
                color: interaction.severity.display_color().to_string(),
                explanation: interaction.explanation.clone(),
            },
        })
        .collect();

    CytoscapeGraph { nodes, edges }
}

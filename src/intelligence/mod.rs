pub mod detection;
pub mod engine;
pub mod graph;
pub mod messages;
pub mod scoring;
pub mod types;
pub mod visualization;

pub use detection::detect_interactions;
pub use engine::InteractionEngine;
pub use graph::InteractionGraph;
pub use scoring::{ExponentialRiskStrategy, RiskScoringStrategy};
pub use types::{DetectionOutcome, InteractionAnalysis, ScoringResult, SeverityCounts};
pub use visualization::{to_cytoscape, CytoscapeGraph};

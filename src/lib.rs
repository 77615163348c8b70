pub mod adherence; // Guardian escalation on consecutive missed doses
pub mod config;
pub mod intelligence; // Interaction graph, detection and risk scoring
pub mod models;
pub mod scheduling; // Conflict-aware daily dosing timeline
pub mod validation;

use tracing_subscriber::EnvFilter;

use intelligence::{InteractionAnalysis, InteractionEngine};
use models::{InteractionRecord, MedicationDosage};
use scheduling::{ScheduleOptimizer, ScheduleResult};

/// Install the global tracing subscriber.
///
/// Reads `RUST_LOG`, falling back to the default filter. Safe to call more
/// than once; later calls are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}

/// Detect and score every interaction among the prescribed drugs.
pub fn analyze_interactions<S: AsRef<str>>(
    prescribed_drugs: &[S],
    records: &[InteractionRecord],
) -> InteractionAnalysis {
    InteractionEngine::new().analyze_prescription(prescribed_drugs, records)
}

/// Build the conflict-aware daily dosing schedule.
pub fn generate_schedule(
    dosages: &[MedicationDosage],
    records: &[InteractionRecord],
) -> ScheduleResult {
    ScheduleOptimizer::new().generate_schedule(dosages, records)
}

use serde::{Deserialize, Serialize};

/// Application-level constants
pub const APP_NAME: &str = "MediGraph";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "info,medigraph=debug"
}

/// Fixed numeric tuning of the engine.
///
/// These values are part of the clinical contract: scores and slot
/// assignments are pinned against them. The default instance is the
/// only one the public call contracts use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Decay constant `k` in `100 * (1 - e^(-k * W))`.
    pub decay_k: f64,
    /// Minimum score when any contraindicated interaction is present.
    pub contraindicated_floor: u32,
    /// Minimum hours between two doses of the same drug.
    pub self_spacing_hours: u32,
    /// Daily dosing slots as hours of the day, ascending.
    pub slots: Vec<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            decay_k: 0.322,
            contraindicated_floor: 80,
            self_spacing_hours: 4,
            // 8 two-hour slots covering a 16-hour waking day
            slots: vec![8, 10, 12, 14, 16, 18, 20, 22],
        }
    }
}

pub mod monitor;
pub mod store;
pub mod types;

pub use monitor::{AdherenceMonitor, CONSECUTIVE_MISS_THRESHOLD};
pub use store::{AdherenceStore, InMemoryAdherenceStore};
pub use types::{AdherenceError, AdherenceEvent, AdherenceOutcome, GuardianAlert};

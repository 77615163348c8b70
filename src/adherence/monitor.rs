use chrono::NaiveDateTime;

use crate::models::{AdherenceStatus, GuardianAlertType};

use super::store::AdherenceStore;
use super::types::{AdherenceError, AdherenceEvent, AdherenceOutcome};

/// Consecutive misses that escalate to the patient's guardian.
pub const CONSECUTIVE_MISS_THRESHOLD: u32 = 3;

/// Evaluates dose confirmations and misses against the guardian escalation policy.
///
/// A streak reaching the threshold raises one alert; further misses are
/// debounced until the guardian acknowledges it.
pub struct AdherenceMonitor<S: AdherenceStore> {
    store: S,
}

impl<S: AdherenceStore> AdherenceMonitor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Log one adherence event and apply the escalation policy.
    pub fn process_event(
        &self,
        patient_id: &str,
        medication_name: &str,
        scheduled_time: NaiveDateTime,
        status: AdherenceStatus,
    ) -> Result<AdherenceOutcome, AdherenceError> {
        self.store.log_event(AdherenceEvent {
            patient_id: patient_id.to_string(),
            medication_name: medication_name.to_string(),
            scheduled_time,
            status,
            recorded_at: chrono::Local::now().naive_local(),
        })?;

        let misses = self.store.recent_consecutive_misses(patient_id)?;

        let mut outcome = AdherenceOutcome {
            patient_id: patient_id.to_string(),
            status_logged: status,
            consecutive_misses: misses,
            guardian_alert_triggered: false,
            notes: "Adherence logged successfully.".to_string(),
        };

        if status == AdherenceStatus::Taken {
            return Ok(outcome);
        }

        if misses < CONSECUTIVE_MISS_THRESHOLD {
            outcome.notes = format!(
                "Miss logged. {} more will trigger a guardian alert.",
                CONSECUTIVE_MISS_THRESHOLD - misses
            );
            return Ok(outcome);
        }

        let kind = GuardianAlertType::ConsecutiveMisses;
        if self.store.has_active_alert(patient_id, kind)? {
            tracing::debug!(
                patient_id,
                consecutive_misses = misses,
                "Guardian alert already active, skipping"
            );
            outcome.notes = format!(
                "WARNING: {} consecutive misses reached. Guardian already has an active, \
                 unacknowledged alert. Skipping redundant notification.",
                misses
            );
        } else {
            let alert = self.store.create_alert(patient_id, kind)?;
            tracing::info!(
                patient_id,
                alert_id = %alert.id,
                consecutive_misses = misses,
                "Guardian alert triggered"
            );
            outcome.guardian_alert_triggered = true;
            outcome.notes = format!(
                "CRITICAL: {} consecutive misses reached. First-time alert triggered for guardian.",
                misses
            );
        }

        Ok(outcome)
    }
}

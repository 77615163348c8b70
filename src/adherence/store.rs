use std::sync::RwLock;

use uuid::Uuid;

use crate::models::{AdherenceStatus, GuardianAlertType};

use super::types::{AdherenceError, AdherenceEvent, GuardianAlert};

/// How many recent events are inspected when counting a miss streak.
const MISS_LOOKBACK_EVENTS: usize = 10;

/// Storage seam for adherence events and guardian alerts.
pub trait AdherenceStore: Send + Sync {
    /// Persist one adherence event.
    fn log_event(&self, event: AdherenceEvent) -> Result<(), AdherenceError>;

    /// Consecutive misses counted back from the newest event, stopping at
    /// the first TAKEN.
    fn recent_consecutive_misses(&self, patient_id: &str) -> Result<u32, AdherenceError>;

    /// Whether an unacknowledged alert of this type exists for the patient.
    fn has_active_alert(
        &self,
        patient_id: &str,
        alert_type: GuardianAlertType,
    ) -> Result<bool, AdherenceError>;

    /// Record a new active alert.
    fn create_alert(
        &self,
        patient_id: &str,
        alert_type: GuardianAlertType,
    ) -> Result<GuardianAlert, AdherenceError>;

    /// Mark an alert as acknowledged by the guardian.
    fn acknowledge_alert(&self, alert_id: &Uuid) -> Result<(), AdherenceError>;
}

/// In-memory adherence store backed by RwLock.
pub struct InMemoryAdherenceStore {
    events: RwLock<Vec<AdherenceEvent>>,
    alerts: RwLock<Vec<GuardianAlert>>,
}

impl InMemoryAdherenceStore {
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
            alerts: RwLock::new(Vec::new()),
        }
    }

    /// All alerts ever raised for a patient, oldest first.
    pub fn alerts_for(&self, patient_id: &str) -> Result<Vec<GuardianAlert>, AdherenceError> {
        let alerts = self.alerts.read().map_err(|_| AdherenceError::LockFailed)?;
        Ok(alerts
            .iter()
            .filter(|a| a.patient_id == patient_id)
            .cloned()
            .collect())
    }
}

impl Default for InMemoryAdherenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AdherenceStore for InMemoryAdherenceStore {
    fn log_event(&self, event: AdherenceEvent) -> Result<(), AdherenceError> {
        let mut events = self.events.write().map_err(|_| AdherenceError::LockFailed)?;
        events.push(event);
        Ok(())
    }

    fn recent_consecutive_misses(&self, patient_id: &str) -> Result<u32, AdherenceError> {
        let events = self.events.read().map_err(|_| AdherenceError::LockFailed)?;

        let streak = events
            .iter()
            .rev()
            .filter(|e| e.patient_id == patient_id)
            .take(MISS_LOOKBACK_EVENTS)
            .take_while(|e| e.status == AdherenceStatus::Missed)
            .count();

        Ok(streak as u32)
    }

    fn has_active_alert(
        &self,
        patient_id: &str,
        alert_type: GuardianAlertType,
    ) -> Result<bool, AdherenceError> {
        let alerts = self.alerts.read().map_err(|_| AdherenceError::LockFailed)?;
        Ok(alerts
            .iter()
            .any(|a| a.patient_id == patient_id && a.alert_type == alert_type && a.is_active))
    }

    fn create_alert(
        &self,
        patient_id: &str,
        alert_type: GuardianAlertType,
    ) -> Result<GuardianAlert, AdherenceError> {
        let alert = GuardianAlert {
            id: Uuid::new_v4(),
            patient_id: patient_id.to_string(),
            alert_type,
            is_active: true,
            created_at: chrono::Local::now().naive_local(),
        };

        let mut alerts = self.alerts.write().map_err(|_| AdherenceError::LockFailed)?;
        alerts.push(alert.clone());
        Ok(alert)
    }

    fn acknowledge_alert(&self, alert_id: &Uuid) -> Result<(), AdherenceError> {
        let mut alerts = self.alerts.write().map_err(|_| AdherenceError::LockFailed)?;
        let alert = alerts
            .iter_mut()
            .find(|a| a.id == *alert_id)
            .ok_or(AdherenceError::AlertNotFound(*alert_id))?;
        alert.is_active = false;
        Ok(())
    }
}

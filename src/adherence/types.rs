use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{AdherenceStatus, GuardianAlertType};

/// One confirmation or miss of a scheduled dose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdherenceEvent {
    pub patient_id: String,
    pub medication_name: String,
    pub scheduled_time: NaiveDateTime,
    pub status: AdherenceStatus,
    pub recorded_at: NaiveDateTime,
}

/// Notification raised to a patient's guardian.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardianAlert {
    pub id: Uuid,
    pub patient_id: String,
    pub alert_type: GuardianAlertType,
    /// Cleared once the guardian acknowledges the alert.
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Summary returned after processing one adherence event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdherenceOutcome {
    pub patient_id: String,
    pub status_logged: AdherenceStatus,
    pub consecutive_misses: u32,
    pub guardian_alert_triggered: bool,
    pub notes: String,
}

#[derive(Error, Debug)]
pub enum AdherenceError {
    #[error("Guardian alert not found: {0}")]
    AlertNotFound(Uuid),

    #[error("Internal lock failed")]
    LockFailed,
}

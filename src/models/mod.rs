pub mod dosage;
pub mod enums;
pub mod interaction;

pub use dosage::MedicationDosage;
pub use enums::{AdherenceStatus, ClinicalBand, GuardianAlertType, SeverityLevel};
pub use interaction::{InteractionMatch, InteractionRecord};

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("Invalid value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

/// Canonical form of a drug name: trimmed and upper-cased.
/// Every comparison between drug names goes through this.
pub fn normalize_drug_name(name: &str) -> String {
    name.trim().to_uppercase()
}

//! Optional request validation for callers of the engine.
//!
//! The engine itself accepts empty input and returns degenerate results;
//! an API layer that wants to reject such requests calls these first.

use thiserror::Error;

use crate::models::{normalize_drug_name, MedicationDosage};

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Medication list cannot be empty.")]
    EmptyPrescription,

    #[error("Dosage list cannot be empty.")]
    EmptyDosages,

    #[error("Drug name at position {index} is blank")]
    BlankDrugName { index: usize },

    #[error("Invalid frequency for {drug}: {frequency} (must be at least 1 dose per day)")]
    InvalidFrequency { drug: String, frequency: u32 },
}

/// Reject empty prescriptions and blank drug names.
pub fn validate_prescription<S: AsRef<str>>(prescribed_drugs: &[S]) -> Result<(), ValidationError> {
    if prescribed_drugs.is_empty() {
        return Err(ValidationError::EmptyPrescription);
    }
    for (index, drug) in prescribed_drugs.iter().enumerate() {
        if normalize_drug_name(drug.as_ref()).is_empty() {
            return Err(ValidationError::BlankDrugName { index });
        }
    }
    Ok(())
}

/// Reject empty dosage lists, blank names and zero frequencies.
pub fn validate_dosages(dosages: &[MedicationDosage]) -> Result<(), ValidationError> {
    if dosages.is_empty() {
        return Err(ValidationError::EmptyDosages);
    }
    for (index, dosage) in dosages.iter().enumerate() {
        if normalize_drug_name(&dosage.drug_name).is_empty() {
            return Err(ValidationError::BlankDrugName { index });
        }
        if dosage.frequency == 0 {
            return Err(ValidationError::InvalidFrequency {
                drug: dosage.drug_name.clone(),
                frequency: dosage.frequency,
            });
        }
    }
    Ok(())
}

use serde::{Deserialize, Serialize};

/// A prescribed drug and how many doses of it are taken per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationDosage {
    pub drug_name: String,
    /// Doses per day (e.g. 2 = twice daily).
    pub frequency: u32,
}

impl MedicationDosage {
    pub fn new(drug_name: impl Into<String>, frequency: u32) -> Self {
        Self {
            drug_name: drug_name.into(),
            frequency,
        }
    }
}

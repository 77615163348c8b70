use serde::{Deserialize, Serialize};

/// One non-empty daily slot of the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Slot time formatted `HH:00`.
    pub time: String,
    /// Canonical drug names in placement order.
    pub medications: Vec<String>,
}

impl ScheduleEntry {
    pub fn new(hour: u32, medications: Vec<String>) -> Self {
        Self {
            time: format_slot(hour),
            medications,
        }
    }

    /// Hour of day parsed back from `time`.
    pub fn hour(&self) -> Option<u32> {
        self.time.split(':').next()?.parse().ok()
    }
}

/// Optimized daily timeline plus the explanation or warning notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub schedule: Vec<ScheduleEntry>,
    pub notes: String,
    /// Dose units that found no compatible slot, in processing order.
    #[serde(skip)]
    pub unplaced: Vec<String>,
}

impl ScheduleResult {
    /// Hours at which a drug is scheduled, ascending.
    pub fn hours_for(&self, drug: &str) -> Vec<u32> {
        self.schedule
            .iter()
            .filter(|entry| entry.medications.iter().any(|m| m == drug))
            .filter_map(ScheduleEntry::hour)
            .collect()
    }

    pub fn has_warnings(&self) -> bool {
        !self.unplaced.is_empty()
    }
}

/// `8` -> `"08:00"`.
pub fn format_slot(hour: u32) -> String {
    format!("{:02}:00", hour)
}

use std::cmp::Reverse;

use crate::config::EngineConfig;
use crate::intelligence::messages::MessageTemplates;
use crate::models::{normalize_drug_name, InteractionRecord, MedicationDosage};

use super::constraints::ConstraintGraph;
use super::types::{ScheduleEntry, ScheduleResult};

/// Greedy constraint-based daily dose scheduler.
///
/// Dose units are ordered by constraint degree (most constrained first,
/// ties keep input order) and each takes the earliest slot compatible with
/// the self-spacing rule and every pairwise separation constraint. Not
/// optimal, only feasible under this fixed placement order.
/// Runs in O(P * S * P) for P dose units and S slots.
#[derive(Debug, Clone)]
pub struct ScheduleOptimizer {
    slots: Vec<u32>,
    self_spacing_hours: u32,
}

impl ScheduleOptimizer {
    pub fn new() -> Self {
        Self::from_config(&EngineConfig::default())
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        let mut slots = config.slots.clone();
        slots.sort_unstable();
        slots.dedup();
        Self {
            slots,
            self_spacing_hours: config.self_spacing_hours,
        }
    }

    /// Place every dose of every dosage into the daily slots.
    ///
    /// Never fails: doses without a compatible slot are left out and
    /// reported as warnings in `notes`.
    pub fn generate_schedule(
        &self,
        dosages: &[MedicationDosage],
        interactions: &[InteractionRecord],
    ) -> ScheduleResult {
        let constraints = ConstraintGraph::build(interactions);

        let mut dose_units: Vec<String> = dosages
            .iter()
            .flat_map(|dosage| {
                let name = normalize_drug_name(&dosage.drug_name);
                std::iter::repeat(name).take(dosage.frequency as usize)
            })
            .collect();

        // Hardest drugs first; sort_by_key is stable so ties keep order.
        dose_units.sort_by_key(|drug| Reverse(constraints.degree(drug)));

        let mut placements: Vec<Vec<String>> = vec![Vec::new(); self.slots.len()];
        let mut unplaced = Vec::new();
        let mut notes = Vec::new();

        for drug in dose_units {
            let slot = (0..self.slots.len())
                .find(|&candidate| self.is_compatible(candidate, &drug, &placements, &constraints));

            match slot {
                Some(index) => placements[index].push(drug),
                None => {
                    tracing::warn!(drug = %drug, "No safe time slot for dose");
                    notes.push(MessageTemplates::unplaceable_dose(&drug));
                    unplaced.push(drug);
                }
            }
        }

        let schedule: Vec<ScheduleEntry> = self
            .slots
            .iter()
            .zip(placements)
            .filter(|(_, medications)| !medications.is_empty())
            .map(|(hour, medications)| ScheduleEntry::new(*hour, medications))
            .collect();

        if notes.is_empty() {
            notes = separation_notes(interactions);
        }

        tracing::debug!(
            dosages = dosages.len(),
            slots_used = schedule.len(),
            unplaced = unplaced.len(),
            "Schedule generated"
        );

        ScheduleResult {
            schedule,
            notes: notes.join(" "),
            unplaced,
        }
    }

    /// Whether `drug` may be placed in the slot at `candidate`.
    fn is_compatible(
        &self,
        candidate: usize,
        drug: &str,
        placements: &[Vec<String>],
        constraints: &ConstraintGraph,
    ) -> bool {
        let hour = self.slots[candidate];

        // Rule 1: never two doses of the same drug in one slot
        if placements[candidate].iter().any(|placed| placed == drug) {
            return false;
        }

        for (index, placed_drugs) in placements.iter().enumerate() {
            let distance = hour.abs_diff(self.slots[index]);

            for placed in placed_drugs {
                // Rule 2: fixed self-spacing between doses of the same drug
                if placed == drug && distance < self.self_spacing_hours {
                    return false;
                }

                // Rule 3: pairwise separation; a 24h gap never fits in the day
                let required_gap = constraints.required_gap(drug, placed);
                if required_gap > 0 && distance < required_gap {
                    return false;
                }
            }
        }

        true
    }
}

impl Default for ScheduleOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Explanations for every separation that a clean schedule honoured.
fn separation_notes(interactions: &[InteractionRecord]) -> Vec<String> {
    let notes: Vec<String> = interactions
        .iter()
        .filter(|record| record.severity.requires_separation_note())
        .map(|record| MessageTemplates::separation(&record.drug_a, &record.drug_b, record.severity))
        .collect();

    if notes.is_empty() {
        vec![MessageTemplates::standard_spreading()]
    } else {
        notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeverityLevel;

    fn mock_interactions() -> Vec<InteractionRecord> {
        vec![
            InteractionRecord::new(
                "ASPIRIN",
                "WARFARIN",
                SeverityLevel::Severe,
                "High bleed risk",
            ),
            InteractionRecord::new(
                "OMEPRAZOLE",
                "WARFARIN",
                SeverityLevel::Moderate,
                "Metabolite interaction",
            ),
        ]
    }

    #[test]
    fn no_interactions_scheduling() {
        let dosages = vec![
            MedicationDosage::new("PARACETAMOL", 2),
            MedicationDosage::new("AMOXICILLIN", 1),
        ];
        let result = ScheduleOptimizer::new().generate_schedule(&dosages, &[]);

        assert_eq!(result.schedule[0].time, "08:00");
        assert_eq!(result.schedule[0].medications, vec!["PARACETAMOL", "AMOXICILLIN"]);

        let times = result.hours_for("PARACETAMOL");
        assert_eq!(times, vec![8, 12]);
        assert!(times[1] - times[0] >= 4);
        assert_eq!(
            result.notes,
            "No dangerous interactions detected. Standard spreading applied."
        );
    }

    #[test]
    fn severe_interaction_separation() {
        let dosages = vec![
            MedicationDosage::new("ASPIRIN", 1),
            MedicationDosage::new("WARFARIN", 1),
        ];
        let result = ScheduleOptimizer::new().generate_schedule(&dosages, &mock_interactions());

        let aspirin = result.hours_for("ASPIRIN");
        let warfarin = result.hours_for("WARFARIN");
        assert_eq!(aspirin.len(), 1);
        assert_eq!(warfarin.len(), 1);
        assert!(aspirin[0].abs_diff(warfarin[0]) >= 4);
        // WARFARIN has two constraint partners so it is placed first
        assert_eq!(warfarin, vec![8]);
        assert_eq!(aspirin, vec![12]);
        assert!(!result.has_warnings());
        assert_eq!(
            result.notes,
            "Separated ASPIRIN and WARFARIN by at least 4 hours due to severe interaction risk. \
             Separated OMEPRAZOLE and WARFARIN by at least 2 hours due to moderate interaction risk."
        );
    }

    #[test]
    fn empty_medications() {
        let result = ScheduleOptimizer::new().generate_schedule(&[], &mock_interactions());
        assert!(result.schedule.is_empty());
        assert!(!result.notes.contains("WARNING"));
    }

    #[test]
    fn impossible_frequency_fails_gracefully() {
        let dosages = vec![MedicationDosage::new("IBUPROFEN", 5)];
        let result = ScheduleOptimizer::new().generate_schedule(&dosages, &[]);

        assert_eq!(result.hours_for("IBUPROFEN"), vec![8, 12, 16, 20]);
        assert_eq!(result.unplaced, vec!["IBUPROFEN"]);
        assert!(result.notes.contains("WARNING: Insufficient safe time slots"));
        assert_eq!(result.notes, MessageTemplates::unplaceable_dose("IBUPROFEN"));
    }

    #[test]
    fn contraindicated_pair_is_never_co_scheduled() {
        let interactions = vec![InteractionRecord::new(
            "LISINOPRIL",
            "POTASSIUM",
            SeverityLevel::Contraindicated,
            "Fatal hyperkalemia risk.",
        )];
        let dosages = vec![
            MedicationDosage::new("LISINOPRIL", 1),
            MedicationDosage::new("POTASSIUM", 1),
        ];
        let result = ScheduleOptimizer::new().generate_schedule(&dosages, &interactions);

        assert_eq!(result.hours_for("LISINOPRIL"), vec![8]);
        assert!(result.hours_for("POTASSIUM").is_empty());
        assert_eq!(result.unplaced, vec!["POTASSIUM"]);
        assert!(result.notes.contains("'POTASSIUM'"));
        assert!(!result.notes.contains("Separated"));
    }

    #[test]
    fn moderate_pair_may_not_share_a_slot() {
        let interactions = vec![InteractionRecord::new(
            "OMEPRAZOLE",
            "WARFARIN",
            SeverityLevel::Moderate,
            "Metabolite interaction",
        )];
        let dosages = vec![
            MedicationDosage::new("OMEPRAZOLE", 1),
            MedicationDosage::new("WARFARIN", 1),
        ];
        let result = ScheduleOptimizer::new().generate_schedule(&dosages, &interactions);
        assert_eq!(result.hours_for("OMEPRAZOLE"), vec![8]);
        assert_eq!(result.hours_for("WARFARIN"), vec![10]);
    }

    #[test]
    fn mild_pair_shares_a_slot() {
        let interactions = vec![InteractionRecord::new(
            "ASPIRIN",
            "VITAMIN C",
            SeverityLevel::Mild,
            "Minor",
        )];
        let dosages = vec![
            MedicationDosage::new("ASPIRIN", 1),
            MedicationDosage::new("VITAMIN C", 1),
        ];
        let result = ScheduleOptimizer::new().generate_schedule(&dosages, &interactions);
        assert_eq!(result.schedule.len(), 1);
        assert_eq!(result.schedule[0].medications, vec!["ASPIRIN", "VITAMIN C"]);
        assert_eq!(
            result.notes,
            "No dangerous interactions detected. Standard spreading applied."
        );
    }

    #[test]
    fn names_are_normalized() {
        let dosages = vec![
            MedicationDosage::new(" aspirin ", 1),
            MedicationDosage::new("Warfarin", 1),
        ];
        let result = ScheduleOptimizer::new().generate_schedule(&dosages, &mock_interactions());
        assert_eq!(result.hours_for("WARFARIN"), vec![8]);
        assert_eq!(result.hours_for("ASPIRIN"), vec![12]);
    }

    #[test]
    fn most_constrained_drug_placed_first() {
        let dosages = vec![
            MedicationDosage::new("PARACETAMOL", 1),
            MedicationDosage::new("ASPIRIN", 1),
            MedicationDosage::new("OMEPRAZOLE", 1),
            MedicationDosage::new("WARFARIN", 1),
        ];
        let result = ScheduleOptimizer::new().generate_schedule(&dosages, &mock_interactions());

        // WARFARIN (degree 2), then ASPIRIN and OMEPRAZOLE (degree 1), then PARACETAMOL
        assert_eq!(result.schedule[0].medications, vec!["WARFARIN", "PARACETAMOL"]);
        assert_eq!(result.hours_for("OMEPRAZOLE"), vec![10]);
        assert_eq!(result.hours_for("ASPIRIN"), vec![12]);
    }

    #[test]
    fn only_fixed_slots_are_produced() {
        let dosages = vec![
            MedicationDosage::new("A", 4),
            MedicationDosage::new("B", 4),
            MedicationDosage::new("C", 3),
        ];
        let interactions = vec![
            InteractionRecord::new("A", "B", SeverityLevel::Moderate, "ab"),
            InteractionRecord::new("B", "C", SeverityLevel::Severe, "bc"),
        ];
        let result = ScheduleOptimizer::new().generate_schedule(&dosages, &interactions);
        let allowed = ["08:00", "10:00", "12:00", "14:00", "16:00", "18:00", "20:00", "22:00"];
        for entry in &result.schedule {
            assert!(allowed.contains(&entry.time.as_str()));
            assert!(!entry.medications.is_empty());
        }
        assert!(result.schedule.windows(2).all(|w| w[0].hour() < w[1].hour()));
    }

    #[test]
    fn zero_frequency_schedules_nothing() {
        let dosages = vec![MedicationDosage::new("ASPIRIN", 0)];
        let result = ScheduleOptimizer::new().generate_schedule(&dosages, &[]);
        assert!(result.schedule.is_empty());
        assert!(!result.has_warnings());
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PrescriptionStatus {
    Active,
    Completed,
    Cancelled,
}

impl PrescriptionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PrescriptionStatus::Active => "active",
            PrescriptionStatus::Completed => "completed",
            PrescriptionStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Prescription {
    pub id: u32,
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub instructions: String,
    pub prescribed_by: String,
    pub prescribed_date: NaiveDate,
    pub status: PrescriptionStatus,
    /// Dose times as `HH:MM`; empty for as-needed medication.
    #[serde(default)]
    pub schedule: Vec<String>,
}

impl Prescription {
    /// One-line summary shown on the collapsed card.
    pub fn summary(&self) -> String {
        format!("{} - {}", self.dosage, self.frequency)
    }

    pub fn has_schedule(&self) -> bool {
        !self.schedule.is_empty()
    }
}

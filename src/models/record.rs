use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Diagnosis,
    Procedure,
    Allergy,
    Immunization,
}

impl RecordKind {
    /// Marker glyph drawn beside the record card.
    pub fn marker(&self) -> &'static str {
        match self {
            RecordKind::Diagnosis => "♥",
            RecordKind::Procedure => "▤",
            RecordKind::Allergy => "⛨",
            RecordKind::Immunization => "✚",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Diagnosis => "diagnosis",
            RecordKind::Procedure => "procedure",
            RecordKind::Allergy => "allergy",
            RecordKind::Immunization => "immunization",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedicalRecord {
    pub id: u32,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub title: String,
    pub details: String,
    pub doctor: String,
}

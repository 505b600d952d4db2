use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether the patient is currently admitted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AdmissionStatus {
    Admitted,
    Discharged,
}

impl AdmissionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AdmissionStatus::Admitted => "Admitted",
            AdmissionStatus::Discharged => "Discharged",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Insurance {
    pub provider: String,
    pub policy_number: String,
}

/// The signed-in patient's demographic record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Portal identifier, e.g. `PID-12345`
    pub id: String,
    pub name: String,
    pub dob: NaiveDate,
    pub gender: String,
    pub contact: Contact,
    pub emergency_contact: EmergencyContact,
    pub insurance: Insurance,
    pub status: AdmissionStatus,
}

impl Patient {
    /// First word of the name, used in the dashboard greeting.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name() {
        let json = r#"{
            "id": "PID-1", "name": "Ada Lovelace", "dob": "1815-12-10", "gender": "Female",
            "contact": {"phone": "1", "email": "a@b.c"},
            "emergencyContact": {"name": "Byron", "phone": "2"},
            "insurance": {"provider": "X", "policyNumber": "P1"},
            "status": "Admitted"
        }"#;
        let patient: Patient = serde_json::from_str(json).expect("valid patient");
        assert_eq!(patient.first_name(), "Ada");
        assert_eq!(patient.insurance.policy_number, "P1");
        assert_eq!(patient.status, AdmissionStatus::Admitted);
    }

    #[test]
    fn test_single_word_name() {
        let json = r#"{
            "id": "PID-2", "name": "Prince", "dob": "1958-06-07", "gender": "Male",
            "contact": {"phone": "1", "email": "p@b.c"},
            "emergencyContact": {"name": "N", "phone": "2"},
            "insurance": {"provider": "X", "policyNumber": "P2"},
            "status": "Discharged"
        }"#;
        let patient: Patient = serde_json::from_str(json).expect("valid patient");
        assert_eq!(patient.first_name(), "Prince");
    }
}

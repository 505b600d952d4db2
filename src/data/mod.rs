//! Compiled-in mock data.
//!
//! Fixtures are embedded as JSON and decoded on every call, so each screen
//! mount gets a fresh copy. A decode failure is reported as a
//! [`ResourceError`] and ends up in the resource's `Failed` state.

use serde::de::DeserializeOwned;

use crate::error::ResourceError;
use crate::models::{
    ActivityItem, ActivityKind, Appointment, ChatMessage, LabResult, MedicalRecord, Patient,
    Prescription, TrendPoint,
};

const PATIENT_JSON: &str = include_str!("fixtures/patient.json");
const PRESCRIPTIONS_JSON: &str = include_str!("fixtures/prescriptions.json");
const LAB_RESULTS_JSON: &str = include_str!("fixtures/lab_results.json");
const APPOINTMENTS_JSON: &str = include_str!("fixtures/appointments.json");
const MEDICAL_RECORDS_JSON: &str = include_str!("fixtures/medical_records.json");
const HEMOGLOBIN_TREND_JSON: &str = include_str!("fixtures/hemoglobin_trend.json");
const MESSAGES_JSON: &str = include_str!("fixtures/messages.json");

/// Demo credentials accepted by the login form.
pub const DEMO_PATIENT_ID: &str = "patient";
pub const DEMO_PASSWORD: &str = "password123";

/// Dashboard "Recent Activity" entries.
pub const RECENT_ACTIVITY: [ActivityItem; 2] = [
    ActivityItem {
        kind: ActivityKind::Lab,
        text: "Your CBC test results are ready.",
        age: "2h ago",
    },
    ActivityItem {
        kind: ActivityKind::Appointment,
        text: "Appointment with Dr. Sarah confirmed.",
        age: "1d ago",
    },
];

/// Entries in the header notification panel.
pub const PANEL_NOTIFICATIONS: [ActivityItem; 3] = [
    ActivityItem {
        kind: ActivityKind::Lab,
        text: "Your CBC test results are ready.",
        age: "2 hours ago",
    },
    ActivityItem {
        kind: ActivityKind::Appointment,
        text: "Appointment with Dr. Sarah confirmed for Nov 15.",
        age: "1 day ago",
    },
    ActivityItem {
        kind: ActivityKind::Message,
        text: "New message from Dr. Sarah Mohamed.",
        age: "3 days ago",
    },
];

pub(crate) fn decode<T: DeserializeOwned>(resource: &str, raw: &str) -> Result<T, ResourceError> {
    serde_json::from_str(raw).map_err(|e| {
        tracing::warn!("fixture {} failed to decode: {}", resource, e);
        ResourceError::load_failed(resource, e.to_string())
    })
}

pub fn patient() -> Result<Patient, ResourceError> {
    decode("patient", PATIENT_JSON)
}

pub fn prescriptions() -> Result<Vec<Prescription>, ResourceError> {
    decode("prescriptions", PRESCRIPTIONS_JSON)
}

pub fn lab_results() -> Result<Vec<LabResult>, ResourceError> {
    decode("lab-results", LAB_RESULTS_JSON)
}

pub fn hemoglobin_trend() -> Result<Vec<TrendPoint>, ResourceError> {
    decode("hemoglobin-trend", HEMOGLOBIN_TREND_JSON)
}

pub fn appointments() -> Result<Vec<Appointment>, ResourceError> {
    decode("appointments", APPOINTMENTS_JSON)
}

pub fn medical_records() -> Result<Vec<MedicalRecord>, ResourceError> {
    decode("medical-records", MEDICAL_RECORDS_JSON)
}

pub fn messages() -> Result<Vec<ChatMessage>, ResourceError> {
    decode("messages", MESSAGES_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AdmissionStatus, AppointmentStatus, ChatSender, LabStatus, PrescriptionStatus, RecordKind,
    };

    #[test]
    fn test_patient_fixture() {
        let patient = patient().expect("patient fixture decodes");
        assert_eq!(patient.id, "PID-12345");
        assert_eq!(patient.name, "John Doe");
        assert_eq!(patient.status, AdmissionStatus::Discharged);
        assert_eq!(patient.insurance.policy_number, "HC123456789");
        assert_eq!(patient.emergency_contact.name, "Jane Doe");
    }

    #[test]
    fn test_prescription_fixture() {
        let list = prescriptions().expect("prescriptions decode");
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].schedule, vec!["08:00", "14:00", "20:00"]);
        assert_eq!(list[2].status, PrescriptionStatus::Completed);
        assert!(!list[2].has_schedule());
    }

    #[test]
    fn test_lab_fixture() {
        let list = lab_results().expect("lab results decode");
        assert_eq!(list.len(), 3);
        assert_eq!(list[2].status, LabStatus::Pending);
        assert!(list[2].results.is_empty());
        assert_eq!(list[0].flagged().count(), 1);
        assert_eq!(list[1].flagged().count(), 2);
    }

    #[test]
    fn test_trend_fixture() {
        let trend = hemoglobin_trend().expect("trend decodes");
        assert_eq!(trend.len(), 4);
        assert_eq!(trend[1].hemoglobin, 14.8);
    }

    #[test]
    fn test_appointment_fixture() {
        let list = appointments().expect("appointments decode");
        let upcoming = list.iter().filter(|a| a.status == AppointmentStatus::Upcoming).count();
        assert_eq!(upcoming, 2);
        assert_eq!(list[2].department, "General Clinic");
    }

    #[test]
    fn test_record_fixture() {
        let list = medical_records().expect("records decode");
        let kinds: Vec<RecordKind> = list.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RecordKind::Diagnosis,
                RecordKind::Procedure,
                RecordKind::Allergy,
                RecordKind::Immunization
            ]
        );
    }

    #[test]
    fn test_message_fixture() {
        let list = messages().expect("messages decode");
        assert_eq!(list.len(), 4);
        assert_eq!(list[0].sender, ChatSender::Doctor);
        assert_eq!(list[3].text, "Okay, I will. Thanks!");
    }

    #[test]
    fn test_decode_failure_is_resource_error() {
        let err = decode::<Patient>("patient", "{\"id\": 1}").unwrap_err();
        assert_eq!(err.resource(), "patient");
    }

    #[test]
    fn test_each_call_decodes_fresh_copy() {
        let mut first = prescriptions().expect("decode");
        first.clear();
        assert_eq!(prescriptions().expect("decode").len(), 3);
    }
}

//! Domain models for the patient portal.
//!
//! All models derive serde so fixtures can be decoded from JSON.

mod appointment;
mod chat;
mod lab;
mod patient;
mod prescription;
mod record;

pub use appointment::{partition_upcoming, Appointment, AppointmentStatus, BOOKING_DEPARTMENTS};
pub use chat::{ChatMessage, ChatSender};
pub use lab::{LabParameter, LabResult, LabStatus, ParameterStatus, TrendPoint};
pub use patient::{AdmissionStatus, Contact, EmergencyContact, Insurance, Patient};
pub use prescription::{Prescription, PrescriptionStatus};
pub use record::{MedicalRecord, RecordKind};

/// Fixed entries for the dashboard's recent activity list and the
/// header notification panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub text: &'static str,
    pub age: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Lab,
    Appointment,
    Message,
}

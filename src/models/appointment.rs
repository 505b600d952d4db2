use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    pub id: u32,
    pub doctor: String,
    pub specialization: String,
    pub date: NaiveDate,
    /// Display time, e.g. `10:00 AM`
    pub time: String,
    pub department: String,
    pub purpose: String,
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn is_upcoming(&self) -> bool {
        self.status == AppointmentStatus::Upcoming
    }

    /// `2025-11-15 at 10:00 AM`
    pub fn when(&self) -> String {
        format!("{} at {}", self.date, self.time)
    }
}

/// Departments offered by the booking form.
pub const BOOKING_DEPARTMENTS: [&str; 3] = ["Cardiology", "Dermatology", "General Practice"];

/// Split appointments into (upcoming, past), preserving order.
pub fn partition_upcoming(appointments: &[Appointment]) -> (Vec<&Appointment>, Vec<&Appointment>) {
    appointments.iter().partition(|a| a.is_upcoming())
}

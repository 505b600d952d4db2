use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    Doctor,
    Patient,
}

/// A message in the patient/doctor conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u32,
    pub sender: ChatSender,
    pub text: String,
    /// Display time, e.g. `10:32 AM`
    pub timestamp: String,
}

impl ChatMessage {
    /// A message typed by the patient, stamped with `now`.
    pub fn from_patient<Tz: TimeZone>(id: u32, text: impl Into<String>, now: DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            id,
            sender: ChatSender::Patient,
            text: text.into(),
            timestamp: now.format("%I:%M %p").to_string(),
        }
    }

    /// Same as [`from_patient`](Self::from_patient) using the local clock.
    pub fn from_patient_now(id: u32, text: impl Into<String>) -> Self {
        Self::from_patient(id, text, Local::now())
    }

    pub fn is_from_patient(&self) -> bool {
        self.sender == ChatSender::Patient
    }
}

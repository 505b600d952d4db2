//! State owned by the mounted screen.
//!
//! Exactly one [`ScreenState`] exists while signed in. Navigating away drops
//! it, which drops its resources and any local edits; navigating back mounts
//! a fresh one and starts every load over.

use std::collections::BTreeSet;
use std::time::Duration;

use crate::data;
use crate::models::{
    partition_upcoming, Appointment, ChatMessage, LabResult, MedicalRecord, Patient, Prescription,
    TrendPoint, BOOKING_DEPARTMENTS,
};
use crate::screens::ScreenId;
use crate::state::{AsyncResource, FontSize};
use crate::widgets::InputBox;

/// Move a list cursor by `delta`, clamped to `len`.
pub fn step_selection(selected: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = selected as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}

fn toggle(set: &mut BTreeSet<u32>, id: u32) -> bool {
    if set.remove(&id) {
        false
    } else {
        set.insert(id);
        true
    }
}

/// Dashboard shortcuts, in display order.
pub const QUICK_ACTIONS: [(&str, ScreenId); 6] = [
    ("Medical Records", ScreenId::Records),
    ("My Prescriptions", ScreenId::Prescriptions),
    ("Lab Results", ScreenId::LabResults),
    ("Appointments", ScreenId::Appointments),
    ("Messages", ScreenId::Messages),
    ("Book Appointment", ScreenId::Appointments),
];

#[derive(Debug)]
pub struct DashboardState {
    pub patient: AsyncResource<Patient>,
    pub selected: usize,
}

impl DashboardState {
    pub fn mount(delay: Duration) -> Self {
        Self {
            patient: AsyncResource::load("patient", data::patient, delay),
            selected: 0,
        }
    }

    pub fn select(&mut self, delta: isize) {
        self.selected = step_selection(self.selected, delta, QUICK_ACTIONS.len());
    }

    pub fn target(&self) -> ScreenId {
        QUICK_ACTIONS
            .get(self.selected)
            .map(|(_, screen)| *screen)
            .unwrap_or(ScreenId::Home)
    }
}

#[derive(Debug)]
pub struct RecordsState {
    pub records: AsyncResource<Vec<MedicalRecord>>,
    pub scroll: usize,
}

impl RecordsState {
    pub fn mount(delay: Duration) -> Self {
        Self {
            records: AsyncResource::load("medical-records", data::medical_records, delay),
            scroll: 0,
        }
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let len = self.records.value().map(Vec::len).unwrap_or(0);
        self.scroll = step_selection(self.scroll, delta, len);
    }
}

#[derive(Debug)]
pub struct PrescriptionsState {
    pub prescriptions: AsyncResource<Vec<Prescription>>,
    pub selected: usize,
    pub expanded: BTreeSet<u32>,
}

impl PrescriptionsState {
    pub fn mount(delay: Duration) -> Self {
        Self {
            prescriptions: AsyncResource::load("prescriptions", data::prescriptions, delay),
            selected: 0,
            expanded: BTreeSet::new(),
        }
    }

    pub fn selected_prescription(&self) -> Option<&Prescription> {
        self.prescriptions.value()?.get(self.selected)
    }

    pub fn select(&mut self, delta: isize) {
        let len = self.prescriptions.value().map(Vec::len).unwrap_or(0);
        self.selected = step_selection(self.selected, delta, len);
    }

    /// Expand or collapse the selected card. Returns the new expanded flag.
    pub fn toggle_selected(&mut self) -> Option<bool> {
        let id = self.selected_prescription()?.id;
        Some(toggle(&mut self.expanded, id))
    }

    pub fn is_expanded(&self, id: u32) -> bool {
        self.expanded.contains(&id)
    }
}

#[derive(Debug)]
pub struct LabResultsState {
    pub results: AsyncResource<Vec<LabResult>>,
    pub trend: AsyncResource<Vec<TrendPoint>>,
    pub selected: usize,
    pub expanded: BTreeSet<u32>,
}

impl LabResultsState {
    pub fn mount(delay: Duration) -> Self {
        Self {
            results: AsyncResource::load("lab-results", data::lab_results, delay),
            trend: AsyncResource::load("hemoglobin-trend", data::hemoglobin_trend, delay),
            selected: 0,
            expanded: BTreeSet::new(),
        }
    }

    pub fn selected_result(&self) -> Option<&LabResult> {
        self.results.value()?.get(self.selected)
    }

    pub fn select(&mut self, delta: isize) {
        let len = self.results.value().map(Vec::len).unwrap_or(0);
        self.selected = step_selection(self.selected, delta, len);
    }

    pub fn toggle_selected(&mut self) -> Option<bool> {
        let id = self.selected_result()?.id;
        Some(toggle(&mut self.expanded, id))
    }

    pub fn is_expanded(&self, id: u32) -> bool {
        self.expanded.contains(&id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingField {
    #[default]
    Department,
    Date,
}

/// The "Book New Appointment" modal.
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub department: usize,
    pub date: InputBox,
    pub focus: BookingField,
}

impl BookingForm {
    pub fn new() -> Self {
        Self {
            date: InputBox::new().with_placeholder("YYYY-MM-DD"),
            ..Self::default()
        }
    }

    pub fn department_name(&self) -> &'static str {
        BOOKING_DEPARTMENTS[self.department % BOOKING_DEPARTMENTS.len()]
    }

    pub fn cycle_department(&mut self, delta: isize) {
        let len = BOOKING_DEPARTMENTS.len() as isize;
        self.department = (self.department as isize + delta).rem_euclid(len) as usize;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            BookingField::Department => BookingField::Date,
            BookingField::Date => BookingField::Department,
        };
    }
}

#[derive(Debug)]
pub struct AppointmentsState {
    pub appointments: AsyncResource<Vec<Appointment>>,
    /// Index into the upcoming appointments
    pub selected: usize,
    pub booking: Option<BookingForm>,
}

impl AppointmentsState {
    pub fn mount(delay: Duration) -> Self {
        Self {
            appointments: AsyncResource::load("appointments", data::appointments, delay),
            selected: 0,
            booking: None,
        }
    }

    pub fn upcoming(&self) -> Vec<&Appointment> {
        self.appointments
            .value()
            .map(|list| partition_upcoming(list).0)
            .unwrap_or_default()
    }

    pub fn selected_upcoming(&self) -> Option<&Appointment> {
        self.upcoming().get(self.selected).copied()
    }

    pub fn select(&mut self, delta: isize) {
        let len = self.upcoming().len();
        self.selected = step_selection(self.selected, delta, len);
    }

    pub fn open_booking(&mut self) {
        self.booking = Some(BookingForm::new());
    }

    pub fn close_booking(&mut self) -> Option<BookingForm> {
        self.booking.take()
    }
}

#[derive(Debug)]
pub struct MessagesState {
    pub chat: AsyncResource<Vec<ChatMessage>>,
    /// Conversation as shown, seeded once from the load
    pub messages: Vec<ChatMessage>,
    seeded: bool,
    pub compose: InputBox,
}

impl MessagesState {
    pub fn mount(delay: Duration) -> Self {
        Self {
            chat: AsyncResource::load("messages", data::messages, delay),
            messages: Vec::new(),
            seeded: false,
            compose: InputBox::new().with_placeholder("Type your message..."),
        }
    }

    fn seed(&mut self) {
        if self.seeded {
            return;
        }
        if let Some(loaded) = self.chat.value() {
            self.messages = loaded.clone();
            self.seeded = true;
        }
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Append `text` as a patient message. Blank text is ignored.
    pub fn push_patient_message(
        &mut self,
        text: &str,
        message: impl FnOnce(u32, &str) -> ChatMessage,
    ) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        let id = self.messages.len() as u32 + 1;
        self.messages.push(message(id, trimmed));
        true
    }

    /// Send whatever is in the compose box.
    ///
    /// Until the conversation has loaded nothing is sent and the draft is
    /// kept, since seeding replaces the list.
    pub fn send(&mut self) -> bool {
        if !self.seeded {
            tracing::debug!("send ignored: conversation still loading");
            return false;
        }
        let text = self.compose.take();
        self.push_patient_message(&text, |id, text| ChatMessage::from_patient_now(id, text))
    }
}

/// Selectable rows of the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileRow {
    HighContrast,
    Font(FontSize),
    Logout,
}

impl ProfileRow {
    pub const ALL: [ProfileRow; 5] = [
        ProfileRow::HighContrast,
        ProfileRow::Font(FontSize::Small),
        ProfileRow::Font(FontSize::Base),
        ProfileRow::Font(FontSize::Large),
        ProfileRow::Logout,
    ];
}

#[derive(Debug)]
pub struct ProfileState {
    pub patient: AsyncResource<Patient>,
    pub selected: usize,
}

impl ProfileState {
    pub fn mount(delay: Duration) -> Self {
        Self {
            patient: AsyncResource::load("patient", data::patient, delay),
            selected: 0,
        }
    }

    pub fn row(&self) -> ProfileRow {
        ProfileRow::ALL[self.selected.min(ProfileRow::ALL.len() - 1)]
    }

    pub fn select(&mut self, delta: isize) {
        self.selected = step_selection(self.selected, delta, ProfileRow::ALL.len());
    }
}

/// The mounted screen.
#[derive(Debug)]
pub enum ScreenState {
    Dashboard(DashboardState),
    Records(RecordsState),
    Prescriptions(PrescriptionsState),
    LabResults(LabResultsState),
    Appointments(AppointmentsState),
    Messages(MessagesState),
    Profile(ProfileState),
}

impl ScreenState {
    /// Mount `screen`, starting all of its loads.
    pub fn mount(screen: ScreenId, delay: Duration) -> Self {
        tracing::debug!("mount {}", screen);
        match screen {
            ScreenId::Home => ScreenState::Dashboard(DashboardState::mount(delay)),
            ScreenId::Records => ScreenState::Records(RecordsState::mount(delay)),
            ScreenId::Prescriptions => ScreenState::Prescriptions(PrescriptionsState::mount(delay)),
            ScreenId::LabResults => ScreenState::LabResults(LabResultsState::mount(delay)),
            ScreenId::Appointments => ScreenState::Appointments(AppointmentsState::mount(delay)),
            ScreenId::Messages => ScreenState::Messages(MessagesState::mount(delay)),
            ScreenId::Profile => ScreenState::Profile(ProfileState::mount(delay)),
        }
    }

    pub fn screen_id(&self) -> ScreenId {
        match self {
            ScreenState::Dashboard(_) => ScreenId::Home,
            ScreenState::Records(_) => ScreenId::Records,
            ScreenState::Prescriptions(_) => ScreenId::Prescriptions,
            ScreenState::LabResults(_) => ScreenId::LabResults,
            ScreenState::Appointments(_) => ScreenId::Appointments,
            ScreenState::Messages(_) => ScreenId::Messages,
            ScreenState::Profile(_) => ScreenId::Profile,
        }
    }

    /// Pick up finished loads. Returns `true` if anything changed.
    pub fn poll(&mut self) -> bool {
        match self {
            ScreenState::Dashboard(s) => s.patient.poll(),
            ScreenState::Records(s) => s.records.poll(),
            ScreenState::Prescriptions(s) => s.prescriptions.poll(),
            ScreenState::LabResults(s) => {
                let results = s.results.poll();
                let trend = s.trend.poll();
                results || trend
            }
            ScreenState::Appointments(s) => s.appointments.poll(),
            ScreenState::Messages(s) => {
                let changed = s.chat.poll();
                if changed {
                    s.seed();
                }
                changed
            }
            ScreenState::Profile(s) => s.patient.poll(),
        }
    }

    /// Whether any load of this screen is still in flight.
    pub fn is_loading(&self) -> bool {
        match self {
            ScreenState::Dashboard(s) => s.patient.is_loading(),
            ScreenState::Records(s) => s.records.is_loading(),
            ScreenState::Prescriptions(s) => s.prescriptions.is_loading(),
            ScreenState::LabResults(s) => s.results.is_loading() || s.trend.is_loading(),
            ScreenState::Appointments(s) => s.appointments.is_loading(),
            ScreenState::Messages(s) => s.chat.is_loading(),
            ScreenState::Profile(s) => s.patient.is_loading(),
        }
    }

    /// Wait for every pending load of this screen. Used by tests and benches.
    pub async fn settle(&mut self) {
        match self {
            ScreenState::Dashboard(s) => {
                s.patient.wait().await;
            }
            ScreenState::Records(s) => {
                s.records.wait().await;
            }
            ScreenState::Prescriptions(s) => {
                s.prescriptions.wait().await;
            }
            ScreenState::LabResults(s) => {
                s.results.wait().await;
                s.trend.wait().await;
            }
            ScreenState::Appointments(s) => {
                s.appointments.wait().await;
            }
            ScreenState::Messages(s) => {
                s.chat.wait().await;
                s.seed();
            }
            ScreenState::Profile(s) => {
                s.patient.wait().await;
            }
        }
    }

    /// Whether a text field on this screen has keyboard focus.
    pub fn is_editing(&self) -> bool {
        match self {
            ScreenState::Messages(_) => true,
            ScreenState::Appointments(s) => s
                .booking
                .as_ref()
                .is_some_and(|b| b.focus == BookingField::Date),
            _ => false,
        }
    }
}

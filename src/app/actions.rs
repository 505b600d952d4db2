//! Screen actions.
//!
//! Download, refill, mark-as-taken, cancel and booking only post a
//! notification. The loaded data is never modified.

use super::App;
use crate::screens::ScreenId;
use crate::state::screens::ProfileRow;
use crate::state::ScreenState;
use crate::widgets::InputBox;

pub const DOWNLOADING_RECORDS: &str = "Downloading records...";
pub const REFILL_REQUESTED: &str = "Refill request sent.";
pub const APPOINTMENT_BOOKED: &str = "Appointment booked successfully!";

impl App {
    /// Up/Down on the mounted screen's list.
    pub fn move_selection(&mut self, delta: isize) {
        match self.screen.as_mut() {
            Some(ScreenState::Dashboard(s)) => s.select(delta),
            Some(ScreenState::Records(s)) => s.scroll_by(delta),
            Some(ScreenState::Prescriptions(s)) => s.select(delta),
            Some(ScreenState::LabResults(s)) => s.select(delta),
            Some(ScreenState::Appointments(s)) => s.select(delta),
            Some(ScreenState::Profile(s)) => s.select(delta),
            Some(ScreenState::Messages(_)) | None => return,
        }
        self.mark_dirty();
    }

    /// Enter on the selected item.
    pub fn activate(&mut self) {
        let target = match self.screen.as_mut() {
            Some(ScreenState::Dashboard(s)) => Some(s.target()),
            Some(ScreenState::Prescriptions(s)) => {
                s.toggle_selected();
                None
            }
            Some(ScreenState::LabResults(s)) => {
                s.toggle_selected();
                None
            }
            _ => None,
        };
        if matches!(self.screen, Some(ScreenState::Profile(_))) {
            self.apply_profile_row();
        }
        if let Some(screen) = target {
            if let Err(e) = self.navigate(screen) {
                tracing::warn!("quick action: {}", e);
            }
        }
        self.mark_dirty();
    }

    pub fn download_records(&mut self) {
        if matches!(self.screen, Some(ScreenState::Records(_))) {
            self.notifications.post(DOWNLOADING_RECORDS);
            self.mark_dirty();
        }
    }

    pub fn request_refill(&mut self) {
        let Some(ScreenState::Prescriptions(s)) = self.screen.as_ref() else {
            return;
        };
        if let Some(prescription) = s.selected_prescription() {
            tracing::info!("refill requested for prescription {}", prescription.id);
            self.notifications.post(REFILL_REQUESTED);
            self.mark_dirty();
        }
    }

    pub fn mark_taken(&mut self) {
        let Some(ScreenState::Prescriptions(s)) = self.screen.as_ref() else {
            return;
        };
        if let Some(prescription) = s.selected_prescription() {
            let message = format!("{} marked as taken.", prescription.medication_name);
            self.notifications.post(message);
            self.mark_dirty();
        }
    }

    pub fn cancel_appointment(&mut self) {
        let Some(ScreenState::Appointments(s)) = self.screen.as_ref() else {
            return;
        };
        if s.booking.is_some() {
            return;
        }
        if let Some(appointment) = s.selected_upcoming() {
            let message = format!("Appointment {} has been cancelled.", appointment.id);
            self.notifications.post(message);
            self.mark_dirty();
        }
    }

    pub fn open_booking(&mut self) {
        if let Some(ScreenState::Appointments(s)) = self.screen.as_mut() {
            s.open_booking();
            self.mark_dirty();
        }
    }

    /// Confirm the booking modal. The form content is discarded.
    pub fn confirm_booking(&mut self) {
        let Some(ScreenState::Appointments(s)) = self.screen.as_mut() else {
            return;
        };
        if let Some(form) = s.close_booking() {
            tracing::info!(
                "booking requested: {} on {:?}",
                form.department_name(),
                form.date.content()
            );
            self.notifications.post(APPOINTMENT_BOOKED);
            self.mark_dirty();
        }
    }

    pub fn toggle_booking_focus(&mut self) {
        if let Some(ScreenState::Appointments(s)) = self.screen.as_mut() {
            if let Some(form) = s.booking.as_mut() {
                form.toggle_focus();
                self.mark_dirty();
            }
        }
    }

    pub fn cycle_department(&mut self, delta: i8) {
        if let Some(ScreenState::Appointments(s)) = self.screen.as_mut() {
            if let Some(form) = s.booking.as_mut() {
                form.cycle_department(delta as isize);
                self.mark_dirty();
            }
        }
    }

    /// Esc inside a modal.
    pub fn close_modal(&mut self) {
        if self.notification_panel_open {
            self.notification_panel_open = false;
        } else if let Some(ScreenState::Appointments(s)) = self.screen.as_mut() {
            s.close_booking();
        }
        self.mark_dirty();
    }

    pub fn send_message(&mut self) {
        if let Some(ScreenState::Messages(s)) = self.screen.as_mut() {
            if s.send() {
                self.mark_dirty();
            }
        }
    }

    /// Apply the selected accessibility row on the profile screen.
    pub fn apply_profile_row(&mut self) {
        let Some(ScreenState::Profile(s)) = self.screen.as_ref() else {
            return;
        };
        match s.row() {
            ProfileRow::HighContrast => self.view.toggle_theme(),
            ProfileRow::Font(size) => self.view.set_font_size(size),
            ProfileRow::Logout => self.logout(),
        }
        self.mark_dirty();
    }

    /// The text field that currently has focus, if any.
    pub fn focused_input_mut(&mut self) -> Option<&mut InputBox> {
        if !self.view.is_authenticated() {
            return Some(self.auth_form.focused_mut());
        }
        match self.screen.as_mut()? {
            ScreenState::Messages(s) => Some(&mut s.compose),
            ScreenState::Appointments(s) => s
                .booking
                .as_mut()
                .filter(|b| b.focus == crate::state::screens::BookingField::Date)
                .map(|b| &mut b.date),
            _ => None,
        }
    }

    /// Whether the mounted screen is `screen`.
    pub fn is_showing(&self, screen: ScreenId) -> bool {
        self.screen.as_ref().map(ScreenState::screen_id) == Some(screen)
    }
}

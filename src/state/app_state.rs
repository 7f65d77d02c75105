//! Application state definitions

use super::hours::HoursStatus;
use super::submission::ContactController;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Contact,
    Hours,
}

impl View {
    /// Sidebar order
    pub const ALL: [View; 2] = [View::Contact, View::Hours];

    pub fn label(&self) -> &'static str {
        match self {
            View::Contact => "Contact",
            View::Hours => "Hours",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            View::Contact => View::Hours,
            View::Hours => View::Contact,
        }
    }
}

/// Main application state
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Contact form workflow
    pub contact: ContactController,

    // Header
    pub business_name: String,
    pub hours: HoursStatus,

    // UI state
    pub status_message: Option<String>,
    /// Index of the first form row drawn when the form is taller than the screen
    pub form_scroll: usize,
}

impl AppState {
    pub fn new(business_name: impl Into<String>, fallback_phone: impl Into<String>) -> Self {
        Self {
            current_view: View::default(),
            contact: ContactController::new(fallback_phone),
            business_name: business_name.into(),
            hours: HoursStatus::now(),
            status_message: None,
            form_scroll: 0,
        }
    }

    /// Recompute the hours header from the clock
    pub fn refresh_hours(&mut self) {
        self.hours = HoursStatus::now();
    }

    /// Whether a modal overlay currently owns the keyboard
    pub fn has_modal(&self) -> bool {
        self.contact.alert.is_some()
    }
}

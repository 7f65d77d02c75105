//! The contact form and its navigation

use super::field::{FieldKind, FormField, SERVICE_OPTIONS};
use super::payload::SubmissionPayload;
use super::validation::validate_and_annotate;
use chrono::Local;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Index of the submit button row, after the six fields
pub const SUBMIT_ROW: usize = 6;

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub service: FormField,
    pub message: FormField,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            first_name: FormField::new("firstName", "First Name *", FieldKind::Text, true),
            last_name: FormField::new("lastName", "Last Name *", FieldKind::Text, true),
            email: FormField::new("email", "Email *", FieldKind::Email, true),
            phone: FormField::new("phone", "Phone", FieldKind::Telephone, false),
            service: FormField::new(
                "service",
                "Service Interest",
                FieldKind::Choice(SERVICE_OPTIONS),
                false,
            ),
            message: FormField::new("message", "Message *", FieldKind::Message, true),
            active_field_index: 0,
        }
    }

    /// Fields in display order
    pub fn fields(&self) -> [&FormField; 6] {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.service,
            &self.message,
        ]
    }

    pub fn fields_mut(&mut self) -> [&mut FormField; 6] {
        [
            &mut self.first_name,
            &mut self.last_name,
            &mut self.email,
            &mut self.phone,
            &mut self.service,
            &mut self.message,
        ]
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Validate the field at `index` and update its annotation
    pub fn validate_field_at(&mut self, index: usize) -> bool {
        match self.fields_mut().into_iter().nth(index) {
            Some(field) => validate_and_annotate(field),
            None => true,
        }
    }

    /// Validate every field, annotating each one.
    /// All fields are evaluated even after the first failure.
    pub fn validate_all(&mut self) -> bool {
        self.fields_mut()
            .into_iter()
            .fold(true, |all_valid, field| validate_and_annotate(field) && all_valid)
    }

    pub fn has_errors(&self) -> bool {
        self.fields().iter().any(|f| f.error.is_some())
    }

    /// Snapshot the current values into a payload
    pub fn to_payload(&self) -> SubmissionPayload {
        SubmissionPayload::new(
            self.first_name.trimmed(),
            self.last_name.trimmed(),
            self.email.trimmed(),
            self.phone.trimmed(),
            self.service.trimmed(),
            self.message.trimmed(),
            Local::now(),
        )
    }

    /// Reset all values and annotations, returning focus to the first field
    pub fn clear(&mut self) {
        for field in self.fields_mut() {
            field.clear();
        }
        self.active_field_index = 0;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        SUBMIT_ROW + 1 // six fields plus submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field_index;
        self.fields_mut().into_iter().nth(index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields().into_iter().nth(index)
    }
}

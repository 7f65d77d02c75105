//! Form field value objects

use super::phone::{format_phone, strip_to_digits};
use super::validation::FieldError;

/// Options offered by the service-interest selector.
/// The first entry stands for "nothing selected".
pub const SERVICE_OPTIONS: &[&str] = &[
    "",
    "Repair & Maintenance",
    "Custom Builds",
    "Parts & Accessories",
    "Bike Fitting",
    "Other",
];

/// What kind of input a field accepts, which decides its validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Telephone,
    Message,
    /// Fixed list of options, cycled with Left/Right
    Choice(&'static [&'static str]),
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    /// Error annotation currently shown under the field
    pub error: Option<FieldError>,
}

impl FormField {
    /// Create a new field of the given kind
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            name,
            label,
            kind,
            required,
            value: String::new(),
            error: None,
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::Message)
    }

    /// Trimmed value, as sent to the relay
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Push a character to the field value.
    ///
    /// Editing always drops the current error annotation; the field is only
    /// re-validated on blur or submit.
    pub fn push_char(&mut self, c: char) {
        match self.kind {
            FieldKind::Choice(_) => return,
            FieldKind::Telephone => {
                let mut raw = self.value.clone();
                raw.push(c);
                self.value = format_phone(&raw);
            }
            _ => self.value.push(c),
        }
        self.error = None;
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match self.kind {
            FieldKind::Choice(_) => {
                self.value.clear();
            }
            FieldKind::Telephone => {
                // Drop a digit, not the formatter's punctuation
                let mut digits = strip_to_digits(&self.value);
                digits.pop();
                self.value = format_phone(&digits);
            }
            _ => {
                self.value.pop();
            }
        }
        self.error = None;
    }

    /// Step through choice options; no-op for free-form fields
    pub fn cycle_choice(&mut self, forward: bool) {
        let FieldKind::Choice(options) = self.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = options
            .iter()
            .position(|o| *o == self.value)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else if current == 0 {
            options.len() - 1
        } else {
            current - 1
        };
        self.value = options[next].to_string();
        self.error = None;
    }

    /// Clear the field value and its annotation
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Choice(_) if self.value.is_empty() => "Select a service".to_string(),
            _ => self.value.clone(),
        }
    }
}

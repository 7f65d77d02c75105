//! Submission payload sent to the form relay

use chrono::{DateTime, Local};
use uuid::Uuid;

/// Sent in place of an empty phone number
pub const PHONE_NOT_PROVIDED: &str = "Not provided";
/// Sent in place of an unselected service
pub const SERVICE_NOT_SPECIFIED: &str = "Not specified";
/// Closing line of the relayed transcript
pub const TRANSCRIPT_FOOTER: &str = "Sent from the Rage Cycles website contact form";

/// Snapshot of the form taken at submit time
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPayload {
    /// Only used to correlate log lines for one attempt
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
    pub submitted_at: DateTime<Local>,
}

impl SubmissionPayload {
    /// Build a payload, substituting sentinels for empty optional fields
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: &str,
        service: &str,
        message: &str,
        submitted_at: DateTime<Local>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone: or_sentinel(phone, PHONE_NOT_PROVIDED),
            service: or_sentinel(service, SERVICE_NOT_SPECIFIED),
            message: message.to_string(),
            submitted_at,
        }
    }

    /// Subject line for the relayed email
    pub fn subject(&self) -> String {
        format!(
            "New Contact Form Submission from {} {}",
            self.first_name, self.last_name
        )
    }

    /// Human-readable transcript of the whole submission
    pub fn transcript(&self) -> String {
        format!(
            "New contact form submission:\n\
             \n\
             Name: {} {}\n\
             Email: {}\n\
             Phone: {}\n\
             Service Interest: {}\n\
             \n\
             Message:\n\
             {}\n\
             \n\
             Submitted: {}\n\
             \n\
             ---\n\
             {}",
            self.first_name,
            self.last_name,
            self.email,
            self.phone,
            self.service,
            self.message,
            self.submitted_at.format("%m/%d/%Y, %I:%M:%S %p"),
            TRANSCRIPT_FOOTER,
        )
    }

    /// Every form field the relay receives, in send order
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("firstName", self.first_name.clone()),
            ("lastName", self.last_name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("service", self.service.clone()),
            ("message", self.message.clone()),
            ("_replyto", self.email.clone()),
            ("_subject", self.subject()),
            ("_message", self.transcript()),
        ]
    }
}

fn or_sentinel(value: &str, sentinel: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        sentinel.to_string()
    } else {
        value.to_string()
    }
}

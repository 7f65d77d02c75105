//! Form domain layer
//!
//! Field model, validation rules, phone formatting, the contact form
//! aggregate and the payload it produces on submit.

mod contact_form;
mod field;
mod payload;
mod phone;
mod validation;

pub use contact_form::{ContactForm, Form, SUBMIT_ROW};
pub use field::{FieldKind, FormField};
pub use payload::SubmissionPayload;
pub use validation::FieldError;

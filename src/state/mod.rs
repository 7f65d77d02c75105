//! Application state module

mod app_state;
pub mod forms;
mod hours;
mod submission;

pub use app_state::*;
pub use forms::{FieldKind, Form, FormField, SubmissionPayload};
pub use hours::{hours_for, HoursStatus};
pub use submission::{SubmissionOutcome, SubmissionState};

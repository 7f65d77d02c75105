//! Contact form workflow controller
//!
//! Owns the contact form and drives it through
//! `Idle -> Validating -> Submitting -> {Success, Failed} -> Idle`.
//! Validation is synchronous; the relay call is the only suspension point.
//! While a submission is in flight the submit control is disabled, which is
//! the only thing preventing a second concurrent submission.

use super::forms::{ContactForm, Form, SubmissionPayload};
use crate::relay::RelayError;

/// Where the controller is in the submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

impl SubmissionState {
    /// Legal transitions of the state machine
    pub fn can_transition_to(self, next: SubmissionState) -> bool {
        use SubmissionState::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Idle)
                | (Validating, Submitting)
                | (Submitting, Success)
                | (Submitting, Failed)
                | (Success, Idle)
                | (Failed, Idle)
        )
    }
}

/// Result of one submit action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failed(String),
}

/// Controller for the single contact form of the app
#[derive(Debug, Clone)]
pub struct ContactController {
    pub form: ContactForm,
    state: SubmissionState,
    /// Success acknowledgment region is shown
    pub success_visible: bool,
    /// One-shot request for the UI to bring the acknowledgment into view
    pub scroll_to_success: bool,
    /// Fallback alert text after a failed submission
    pub alert: Option<String>,
    fallback_phone: String,
}

impl ContactController {
    pub fn new(fallback_phone: impl Into<String>) -> Self {
        Self {
            form: ContactForm::new(),
            state: SubmissionState::Idle,
            success_visible: false,
            scroll_to_success: false,
            alert: None,
            fallback_phone: fallback_phone.into(),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.state != SubmissionState::Submitting
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn fallback_phone(&self) -> &str {
        &self.fallback_phone
    }

    pub fn fallback_message(&self) -> String {
        format!(
            "Sorry, there was an error sending your message. Please call us directly at {}.",
            self.fallback_phone
        )
    }

    fn transition(&mut self, next: SubmissionState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal transition {:?} -> {:?}",
            self.state,
            next
        );
        tracing::debug!(from = ?self.state, to = ?next, "submission state");
        self.state = next;
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.push_char(c);
        }
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.pop_char();
        }
    }

    /// Cycle the active field's choice, if it has one
    pub fn cycle_choice(&mut self, forward: bool) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.cycle_choice(forward);
        }
    }

    /// Move focus forward, validating the field being left
    pub fn next_field(&mut self) {
        self.blur_active();
        self.form.next_field();
    }

    /// Move focus backward, validating the field being left
    pub fn prev_field(&mut self) {
        self.blur_active();
        self.form.prev_field();
    }

    fn blur_active(&mut self) {
        let index = self.form.active_field();
        self.form.validate_field_at(index);
    }

    /// Validate and, if the form is valid, enter `Submitting`.
    ///
    /// Returns the payload to relay, or `None` when the form is invalid or a
    /// submission is already in flight.
    pub fn begin_submission(&mut self) -> Option<SubmissionPayload> {
        if self.state != SubmissionState::Idle {
            tracing::debug!(state = ?self.state, "submit ignored");
            return None;
        }

        self.transition(SubmissionState::Validating);
        if !self.form.validate_all() {
            tracing::debug!("contact form has invalid fields, not submitting");
            self.transition(SubmissionState::Idle);
            return None;
        }

        self.transition(SubmissionState::Submitting);
        self.success_visible = false;
        self.alert = None;
        Some(self.form.to_payload())
    }

    /// Apply the relay result and return to `Idle`
    pub fn finish_submission(
        &mut self,
        payload: &SubmissionPayload,
        result: Result<(), RelayError>,
    ) -> SubmissionOutcome {
        let outcome = match result {
            Ok(()) => {
                tracing::info!(submission = %payload.id, "contact submission delivered");
                self.transition(SubmissionState::Success);
                self.form.clear();
                self.success_visible = true;
                self.scroll_to_success = true;
                SubmissionOutcome::Success
            }
            Err(err) => {
                tracing::error!(
                    submission = %payload.id,
                    kind = err.kind(),
                    error = %err,
                    "contact submission failed"
                );
                self.transition(SubmissionState::Failed);
                let message = self.fallback_message();
                self.alert = Some(message.clone());
                SubmissionOutcome::Failed(message)
            }
        };

        self.transition(SubmissionState::Idle);
        outcome
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn dismiss_success(&mut self) {
        self.success_visible = false;
        self.scroll_to_success = false;
    }

    /// Consume the scroll request raised by a successful submission
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::FieldError;

    const PHONE: &str = "(480) 968-8116";

    fn filled_controller() -> ContactController {
        let mut controller = ContactController::new(PHONE);
        controller.form.first_name.value = "Jane".to_string();
        controller.form.last_name.value = "Rider".to_string();
        controller.form.email.value = "jane@example.com".to_string();
        controller.form.message.value = "Brakes squeal on every stop".to_string();
        controller
    }

    mod state_machine {
        use super::*;

        #[test]
        fn test_legal_transitions() {
            use SubmissionState::*;
            assert!(Idle.can_transition_to(Validating));
            assert!(Validating.can_transition_to(Idle));
            assert!(Validating.can_transition_to(Submitting));
            assert!(Submitting.can_transition_to(Success));
            assert!(Submitting.can_transition_to(Failed));
            assert!(Success.can_transition_to(Idle));
            assert!(Failed.can_transition_to(Idle));
        }

        #[test]
        fn test_illegal_transitions() {
            use SubmissionState::*;
            assert!(!Idle.can_transition_to(Submitting));
            assert!(!Validating.can_transition_to(Success));
            assert!(!Submitting.can_transition_to(Idle));
            assert!(!Success.can_transition_to(Failed));
        }

        #[test]
        fn test_default_is_idle() {
            let controller = ContactController::new(PHONE);
            assert_eq!(controller.state(), SubmissionState::Idle);
            assert!(controller.is_submit_enabled());
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn test_edit_clears_annotation_without_revalidating() {
            let mut controller = ContactController::new(PHONE);
            controller.form.set_active_field(2);
            controller.form.email.value = "bad".to_string();
            controller.form.validate_field_at(2);
            assert_eq!(controller.form.email.error, Some(FieldError::InvalidEmail));

            // Still invalid after the keystroke, but the annotation is gone
            controller.input_char('x');
            assert_eq!(controller.form.email.value, "badx");
            assert!(controller.form.email.error.is_none());
        }

        #[test]
        fn test_backspace_clears_annotation() {
            let mut controller = ContactController::new(PHONE);
            controller.form.first_name.error = Some(FieldError::Required);
            controller.form.first_name.value = "J".to_string();
            controller.backspace();
            assert!(controller.form.first_name.error.is_none());
        }

        #[test]
        fn test_blur_validates_field_left() {
            let mut controller = ContactController::new(PHONE);
            controller.next_field();
            assert_eq!(controller.form.first_name.error, Some(FieldError::Required));
            assert!(controller.form.last_name.error.is_none());
            assert_eq!(controller.form.active_field(), 1);
        }

        #[test]
        fn test_prev_field_also_blurs() {
            let mut controller = ContactController::new(PHONE);
            controller.form.set_active_field(3);
            controller.form.phone.value = "123".to_string();
            controller.prev_field();
            assert_eq!(controller.form.phone.error, Some(FieldError::InvalidPhone));
            assert_eq!(controller.form.active_field(), 2);
        }

        #[test]
        fn test_phone_typing_formats() {
            let mut controller = ContactController::new(PHONE);
            controller.form.set_active_field(3);
            for c in "4809688116".chars() {
                controller.input_char(c);
            }
            assert_eq!(controller.form.phone.value, "(480) 968-8116");
        }

        #[test]
        fn test_cycle_choice_on_service() {
            let mut controller = ContactController::new(PHONE);
            controller.form.set_active_field(4);
            controller.cycle_choice(true);
            assert_eq!(controller.form.service.value, "Repair & Maintenance");
        }
    }

    mod submission {
        use super::*;

        #[test]
        fn test_empty_form_yields_no_payload() {
            let mut controller = ContactController::new(PHONE);
            let payload = controller.begin_submission();

            assert!(payload.is_none());
            assert_eq!(controller.state(), SubmissionState::Idle);
            assert!(controller.form.has_errors());
            assert!(controller.is_submit_enabled());
        }

        #[test]
        fn test_payload_carries_sentinels() {
            let mut controller = filled_controller();
            let payload = controller.begin_submission().expect("valid form");
            assert_eq!(payload.email, "jane@example.com");
            assert_eq!(payload.phone, "Not provided");
        }

        #[test]
        fn test_success_clears_form_and_shows_acknowledgment() {
            let mut controller = filled_controller();
            let payload = controller.begin_submission().expect("valid form");
            let outcome = controller.finish_submission(&payload, Ok(()));

            assert_eq!(outcome, SubmissionOutcome::Success);
            assert!(controller.success_visible);
            assert!(controller.take_scroll_request());
            assert!(!controller.take_scroll_request());
            assert!(controller.form.fields().iter().all(|f| f.value.is_empty()));
            assert!(controller.is_submit_enabled());
            assert_eq!(controller.state(), SubmissionState::Idle);
            assert!(controller.alert.is_none());
        }

        #[test]
        fn test_rejection_keeps_values_and_alerts() {
            let mut controller = filled_controller();
            let payload = controller.begin_submission().expect("valid form");
            let outcome = controller.finish_submission(
                &payload,
                Err(RelayError::Rejected {
                    status: 422,
                    message: "bad request".to_string(),
                }),
            );

            let expected = "Sorry, there was an error sending your message. \
                            Please call us directly at (480) 968-8116.";
            assert_eq!(outcome, SubmissionOutcome::Failed(expected.to_string()));
            assert_eq!(controller.alert.as_deref(), Some(expected));
            assert_eq!(controller.form.first_name.value, "Jane");
            assert_eq!(controller.form.email.value, "jane@example.com");
            assert!(!controller.success_visible);
            assert!(controller.is_submit_enabled());
            assert_eq!(controller.state(), SubmissionState::Idle);
        }

        #[test]
        fn test_transport_error_collapses_to_same_alert() {
            let mut controller = filled_controller();
            let payload = controller.begin_submission().expect("valid form");
            controller.finish_submission(
                &payload,
                Err(RelayError::Transport("connection refused".to_string())),
            );

            assert_eq!(controller.alert, Some(controller.fallback_message()));
            assert!(controller.is_submit_enabled());
        }

        #[test]
        fn test_begin_submission_disables_submit() {
            let mut controller = filled_controller();
            let payload = controller.begin_submission();

            assert!(payload.is_some());
            assert!(controller.is_submitting());
            assert!(!controller.is_submit_enabled());
        }

        #[test]
        fn test_second_submit_while_in_flight_is_ignored() {
            let mut controller = filled_controller();
            assert!(controller.begin_submission().is_some());
            assert!(controller.begin_submission().is_none());
            assert!(controller.is_submitting());
        }

        #[test]
        fn test_new_submission_hides_previous_feedback() {
            let mut controller = filled_controller();
            controller.alert = Some("old".to_string());
            controller.success_visible = true;
            controller.begin_submission();
            assert!(controller.alert.is_none());
            assert!(!controller.success_visible);
        }

        #[test]
        fn test_malformed_body_restores_control() {
            let mut controller = filled_controller();
            let payload = controller.begin_submission().expect("valid form");
            let outcome = controller.finish_submission(
                &payload,
                Err(RelayError::MalformedBody("expected value".to_string())),
            );
            assert!(matches!(outcome, SubmissionOutcome::Failed(_)));
            assert!(controller.is_submit_enabled());
        }
    }

    mod alerts {
        use super::*;

        #[test]
        fn test_dismiss_alert() {
            let mut controller = ContactController::new(PHONE);
            controller.alert = Some("x".to_string());
            controller.dismiss_alert();
            assert!(controller.alert.is_none());
        }

        #[test]
        fn test_dismiss_success() {
            let mut controller = ContactController::new(PHONE);
            controller.success_visible = true;
            controller.scroll_to_success = true;
            controller.dismiss_success();
            assert!(!controller.success_visible);
            assert!(!controller.take_scroll_request());
        }
    }
}

//! Application state and core logic

use crate::config::ContactConfig;
use crate::relay::{RelayClient, RelayClientTrait, RelayError};
use crate::state::{AppState, SubmissionOutcome, SubmissionPayload, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// Window in which a second Ctrl+C quits
const DOUBLE_CTRL_C_WINDOW: Duration = Duration::from_millis(800);

/// Relay call running in the background
struct PendingSubmission {
    payload: SubmissionPayload,
    handle: JoinHandle<Result<(), RelayError>>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the form relay
    relay: Arc<dyn RelayClientTrait>,
    /// In-flight submission, at most one
    pending: Option<PendingSubmission>,
    /// Whether the app should quit
    quit: bool,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance from configuration
    pub fn new(config: &ContactConfig) -> Self {
        let relay = Arc::new(RelayClient::new(config.relay_endpoint()));
        tracing::info!(endpoint = relay.endpoint(), "starting contact form");
        Self::with_relay(
            relay,
            config.business_name(),
            config.fallback_phone(),
        )
    }

    /// Create an App around an existing relay client
    pub fn with_relay(
        relay: Arc<dyn RelayClientTrait>,
        business_name: &str,
        fallback_phone: &str,
    ) -> Self {
        Self {
            state: AppState::new(business_name, fallback_phone),
            relay,
            pending: None,
            quit: false,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a relay call is in flight
    pub fn has_pending_submission(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c();
            return Ok(());
        }

        // Alert dialog is modal
        if self.state.has_modal() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.contact.dismiss_alert();
            }
            return Ok(());
        }

        self.state.status_message = None;

        // F2 switches views from anywhere
        if key.code == KeyCode::F(2) {
            self.state.current_view = self.state.current_view.next();
            return Ok(());
        }

        match self.state.current_view {
            View::Contact => self.handle_contact_key(key)?,
            View::Hours => self.handle_hours_key(key),
        }

        Ok(())
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        match self.last_ctrl_c {
            Some(last) if now.duration_since(last) <= DOUBLE_CTRL_C_WINDOW => {
                self.quit = true;
            }
            _ => {
                self.last_ctrl_c = Some(now);
                self.state.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
        }
    }

    fn handle_hours_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') => self.state.refresh_hours(),
            KeyCode::Esc => self.state.current_view = View::Contact,
            _ => {}
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) -> Result<()> {
        let wants_submit = match key.code {
            KeyCode::Char('s') => {
                key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER)
            }
            KeyCode::Enter => self.state.contact.form.is_submit_row_active(),
            _ => false,
        };
        if wants_submit {
            self.submit();
            return Ok(());
        }

        let contact = &mut self.state.contact;
        let on_submit_row = contact.form.is_submit_row_active();
        // Shift is part of the character; any other modifier makes it a shortcut
        let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
        let on_message = contact
            .form
            .fields()
            .get(contact.form.active_field_index)
            .is_some_and(|field| field.is_multiline());

        match key.code {
            KeyCode::Tab | KeyCode::Down => contact.next_field(),
            KeyCode::BackTab | KeyCode::Up => contact.prev_field(),
            KeyCode::Left => contact.cycle_choice(false),
            KeyCode::Right => contact.cycle_choice(true),
            KeyCode::Esc => contact.dismiss_success(),
            // Enter in the message field adds a newline
            KeyCode::Enter if on_message => contact.input_char('\n'),
            KeyCode::Enter => contact.next_field(),
            KeyCode::Char(c) if plain && !on_submit_row => contact.input_char(c),
            KeyCode::Backspace if !on_submit_row => contact.backspace(),
            _ => {}
        }

        Ok(())
    }

    /// Start a submission on a background task.
    /// Ignored while one is already in flight.
    pub fn submit(&mut self) {
        if self.pending.is_some() || !self.state.contact.is_submit_enabled() {
            return;
        }

        let Some(payload) = self.state.contact.begin_submission() else {
            self.state.status_message = Some("Please fix the highlighted fields".to_string());
            return;
        };

        let relay = Arc::clone(&self.relay);
        let task_payload = payload.clone();
        let handle = tokio::spawn(async move { relay.send(&task_payload).await });

        self.pending = Some(PendingSubmission { payload, handle });
    }

    /// Apply the relay result once the background call has finished.
    /// Called every tick from the event loop.
    pub async fn poll_submission(&mut self) -> Option<SubmissionOutcome> {
        let finished = self
            .pending
            .as_ref()
            .is_some_and(|p| p.handle.is_finished());
        if !finished {
            return None;
        }
        self.wait_for_submission().await
    }

    /// Wait for the in-flight submission, if any, and apply its result
    pub async fn wait_for_submission(&mut self) -> Option<SubmissionOutcome> {
        let PendingSubmission { payload, handle } = self.pending.take()?;
        let result = handle.await.unwrap_or_else(|e| Err(RelayError::from(e)));
        let outcome = self.state.contact.finish_submission(&payload, result);
        if outcome == SubmissionOutcome::Success {
            self.state.status_message = Some("Message sent".to_string());
        }
        Some(outcome)
    }
}

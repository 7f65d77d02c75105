//! Trait abstraction for the relay client to enable mocking in tests

use super::RelayError;
use crate::state::SubmissionPayload;
use async_trait::async_trait;

/// Trait for relay operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RelayClientTrait: Send + Sync {
    /// Deliver one submission. Exactly one request per call, no retries.
    async fn send(&self, payload: &SubmissionPayload) -> Result<(), RelayError>;
}

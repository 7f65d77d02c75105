//! Form relay client for delivering contact submissions

mod client;
mod error;
mod traits;

pub use client::RelayClient;
pub use error::RelayError;
pub use traits::RelayClientTrait;

#[cfg(test)]
pub use traits::MockRelayClientTrait;

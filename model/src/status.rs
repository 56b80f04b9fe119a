//! Status-probe display state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page fires two one-shot requests on load: one at the API
//! root and one at the greeting endpoint. Each request owns exactly one
//! display slot, and each slot moves at most once out of its initial state.
//! Nothing is retried.
//!
//! ERROR HANDLING
//! ==============
//! The root slot shows the failure reason to the user. The greeting slot
//! swallows failures and stays in `Loading`; the caller is expected to log.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::wire::MessageResponse;

/// Failure of a single probe request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    /// The request never produced a response (connection refused, CORS, ...).
    #[error("{0}")]
    Request(String),
    /// The server answered with a non-success status code.
    #[error("HTTP {0}")]
    Status(u16),
    /// The body was not a `{ "message": ... }` object.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Root-endpoint slot of the status card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Connected {
        message: String,
    },
    Failed {
        reason: String,
    },
}

impl ConnectionStatus {
    /// Resolve the slot from the root request's outcome.
    #[must_use]
    pub fn from_result(result: Result<MessageResponse, ProbeError>) -> Self {
        match result {
            Ok(body) => Self::Connected { message: body.message },
            Err(e) => Self::Failed { reason: e.to_string() },
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Connecting)
    }
}

/// Greeting slot of the status card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GreetingStatus {
    #[default]
    Loading,
    Loaded(String),
}

impl GreetingStatus {
    /// A failed request leaves the slot loading.
    #[must_use]
    pub fn from_result(result: Result<MessageResponse, ProbeError>) -> Self {
        match result {
            Ok(body) => Self::Loaded(body.message),
            Err(_) => Self::Loading,
        }
    }
}

/// Hint shown under a failed root probe.
#[must_use]
pub fn unreachable_hint(base_url: &str) -> String {
    format!("Make sure the API server is running at {base_url}")
}

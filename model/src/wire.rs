//! JSON bodies exchanged between the API service and the landing page.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

pub const ROOT_MESSAGE: &str = "Welcome to Magna Galactica API";
pub const HEALTHY: &str = "healthy";
pub const DEFAULT_HELLO_NAME: &str = "World";
/// Name the landing page sends to the greeting endpoint.
pub const PROBE_HELLO_NAME: &str = "Magna Galactica";

/// `{ "message": ... }` returned by `/` and `/api/hello`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// `{ "status": ... }` returned by `/health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Query string of `/api/hello`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloParams {
    pub name: Option<String>,
}

/// Greeting text for `name`, falling back to [`DEFAULT_HELLO_NAME`].
#[must_use]
pub fn greeting(name: Option<&str>) -> String {
    format!("Hello, {}!", name.unwrap_or(DEFAULT_HELLO_NAME))
}

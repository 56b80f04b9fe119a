//! Placeholder API endpoints probed by the landing page.

use axum::extract::Query;
use axum::response::Json;
use model::wire::{HEALTHY, ROOT_MESSAGE, greeting};
use model::{HealthResponse, HelloParams, MessageResponse};

/// `GET /` returns the fixed welcome message.
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(ROOT_MESSAGE))
}

/// `GET /health` liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: HEALTHY.to_owned() })
}

/// `GET /api/hello?name=` greets `name`, or `World` when absent.
pub async fn hello(Query(params): Query<HelloParams>) -> Json<MessageResponse> {
    tracing::debug!(name = ?params.name, "hello");
    Json(MessageResponse::new(greeting(params.name.as_deref())))
}

#[cfg(test)]
#[path = "greeting_test.rs"]
mod greeting_test;

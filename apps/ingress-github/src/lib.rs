//! GitHub webhook ingress service.
//!
//! Exposes a `/webhook` endpoint that verifies the `X-Hub-Signature-256`
//! shared-secret signature, parses `issue_comment` deliveries, and logs the
//! comment author and text.

pub mod config;
pub mod handler;
pub mod webhook;

use axum::{Router, routing::post};

use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

/// Builds the service router around an immutable [`Config`].
pub fn app(config: Config) -> Router {
    Router::new()
        .route("/webhook", post(handler::handle))
        .with_state(AppState { config })
}

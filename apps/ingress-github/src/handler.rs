//! The `POST /webhook` route.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use tracing::{debug, info, warn};

use crate::AppState;
use crate::webhook::{self, EventKind, EventPayload, HEADER_DELIVERY, ParseError};

const EXPECTED_EVENTS: &[EventKind] = &[EventKind::IssueComment];

/// Handles one webhook delivery.
///
/// Deliveries are acknowledged with 200 on every path; a rejected delivery
/// is logged, never surfaced to the sender as a status code.
pub async fn handle(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> StatusCode {
    let delivery = headers
        .get(HEADER_DELIVERY)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");
    info!(delivery_id = %delivery, "received webhook");

    match webhook::parse(&headers, &body, EXPECTED_EVENTS, &state.config.webhook_secret) {
        Ok(EventPayload::IssueComment(event)) => {
            info!(
                "User '{}' posted '{}'",
                event.comment.user.login, event.comment.body
            );
        }
        Err(ParseError::UnsupportedEvent { event }) => {
            debug!(delivery_id = %delivery, event = %event, "ignoring event kind");
        }
        Err(error) => {
            warn!(delivery_id = %delivery, error = %error, "webhook rejected");
        }
    }

    StatusCode::OK
}

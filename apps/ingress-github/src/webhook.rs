//! GitHub webhook verification and event parsing.
//!
//! The request-to-event path: verify the `X-Hub-Signature-256` HMAC over the
//! raw body, check the `X-GitHub-Event` kind against what the caller handles,
//! then decode the payload. The signature is always checked first so an
//! unauthenticated body never reaches the JSON decoder.

use axum::http::HeaderMap;
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Header naming the delivery's event kind.
pub const HEADER_EVENT: &str = "x-github-event";
/// Header carrying the HMAC-SHA256 digest of the body.
pub const HEADER_SIGNATURE: &str = "x-hub-signature-256";
/// Header carrying GitHub's delivery UUID.
pub const HEADER_DELIVERY: &str = "x-github-delivery";

const SIGNATURE_PREFIX: &str = "sha256=";

#[derive(Debug, Error)]
pub enum ParseError {
    /// Signature header missing, malformed, or digest mismatch.
    #[error("signature verification failed")]
    InvalidSignature,

    /// Authenticated delivery for an event kind this service does not
    /// handle. Nothing to do, not a failure.
    #[error("unsupported event kind: {event}")]
    UnsupportedEvent { event: String },

    /// Body does not decode against the schema for its event kind.
    #[error("payload does not match event schema: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// A header was present but could not be read as a string.
    #[error("unreadable request header: {0}")]
    TransportConversionError(&'static str),
}

/// Webhook event kinds this service knows how to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    IssueComment,
}

impl EventKind {
    pub fn from_header(value: &str) -> Option<Self> {
        match value {
            "issue_comment" => Some(Self::IssueComment),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::IssueComment => "issue_comment",
        }
    }
}

/// A verified, decoded delivery. Constructed only after signature
/// verification succeeds.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    IssueComment(IssueCommentPayload),
}

/// The slice of GitHub's `issue_comment` payload this service reads.
/// Everything else in the delivery is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IssueCommentPayload {
    pub comment: Comment,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Comment {
    pub body: String,
    pub user: User,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct User {
    pub login: String,
}

/// Verifies and decodes a webhook delivery.
///
/// `expected` is the set of event kinds the caller handles; authenticated
/// deliveries for any other kind come back as
/// [`ParseError::UnsupportedEvent`].
pub fn parse(
    headers: &HeaderMap,
    body: &[u8],
    expected: &[EventKind],
    secret: &str,
) -> Result<EventPayload, ParseError> {
    verify_signature(secret, headers, body)?;

    let event = match headers.get(HEADER_EVENT) {
        Some(value) => value
            .to_str()
            .map_err(|_| ParseError::TransportConversionError(HEADER_EVENT))?,
        None => {
            return Err(ParseError::UnsupportedEvent {
                event: "(none)".into(),
            });
        }
    };

    let kind = EventKind::from_header(event)
        .filter(|kind| expected.contains(kind))
        .ok_or_else(|| ParseError::UnsupportedEvent {
            event: event.to_string(),
        })?;

    match kind {
        EventKind::IssueComment => {
            let payload: IssueCommentPayload = serde_json::from_slice(body)?;
            Ok(EventPayload::IssueComment(payload))
        }
    }
}

/// Recomputes the body's HMAC-SHA256 under `secret` and compares it against
/// the `X-Hub-Signature-256` header (`sha256=<hex>`). The comparison runs in
/// constant time via [`Mac::verify_slice`].
pub fn verify_signature(secret: &str, headers: &HeaderMap, body: &[u8]) -> Result<(), ParseError> {
    let header = headers
        .get(HEADER_SIGNATURE)
        .ok_or(ParseError::InvalidSignature)?
        .to_str()
        .map_err(|_| ParseError::TransportConversionError(HEADER_SIGNATURE))?;

    let digest_hex = header
        .strip_prefix(SIGNATURE_PREFIX)
        .ok_or(ParseError::InvalidSignature)?;
    let digest = hex::decode(digest_hex).map_err(|_| ParseError::InvalidSignature)?;

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| ParseError::InvalidSignature)?;
    mac.update(body);
    mac.verify_slice(&digest)
        .map_err(|_| ParseError::InvalidSignature)
}

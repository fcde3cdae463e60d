//! Error types for the client core.
//!
//! # Design
//! Each failure domain gets its own type so collaborators can be written
//! against a narrow contract: [`CredentialError`] for the provider,
//! [`TransportError`] for the wire, [`ConstructionError`] for malformed
//! resource addresses. [`ClientError`] is the union the verb operations
//! return. There is no variant for HTTP error statuses on purpose — a
//! 4xx/5xx response is a successful transport result carrying an
//! error-shaped payload, and interpreting it belongs to the caller.

use thiserror::Error;

/// The credential provider could not supply a token or key.
///
/// Raised before any network work: when credential resolution fails the
/// transport is never invoked.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("credential provider could not supply an access token: {0}")]
    AccessToken(String),

    #[error("credential provider could not supply an api key: {0}")]
    ApiKey(String),
}

/// Transport-level failure. Never retried by this crate.
///
/// Timeouts and cancellation signals from the transport map to
/// [`TransportError::TimedOut`] rather than being swallowed.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("name resolution failed: {0}")]
    Dns(String),

    #[error("request timed out or was canceled: {0}")]
    TimedOut(String),

    #[error("transport failure: {0}")]
    Other(String),
}

/// A collection item was addressed without a usable id segment.
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("collection `{0}` was addressed without an item id")]
    MissingId(String),

    #[error("collection `{0}` was addressed with an empty item id")]
    EmptyId(String),
}

/// Union error returned by the verb operations.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),

    /// The request payload could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

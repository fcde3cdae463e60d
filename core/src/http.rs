//! HTTP wire types and the transport seam.
//!
//! # Design
//! Requests and responses are plain data with owned fields. The core builds
//! [`HttpRequest`] values and interprets nothing on the way back — the
//! injected [`HttpTransport`] performs the actual round-trip. A transport
//! must surface non-2xx responses as `Ok` data (the status code travels in
//! [`HttpResponse::status`]) and reserve `Err` for transport-level failures
//! such as connection, DNS or timeout errors.

use crate::error::TransportError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }

    /// PUT and POST carry their data in the body; GET and DELETE carry it
    /// in the query string.
    pub fn sends_body(&self) -> bool {
        matches!(self, Method::Put | Method::Post)
    }
}

/// An HTTP request described as plain data, ready for a transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub uri: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// The raw result of an executed request.
///
/// The body is opaque to this crate: it is typically JSON, but parsing it —
/// and deciding whether `status` means success — is the caller's job.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes one [`HttpRequest`] against the network.
///
/// Implementations must not turn non-2xx statuses into errors; error bodies
/// come back as ordinary responses. Timeout and cancellation signals map to
/// [`TransportError::TimedOut`]. Cancellation and timeout policy itself
/// belongs to the implementation — this crate imposes none.
pub trait HttpTransport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_strings_match_wire_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Put.as_str(), "PUT");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn only_put_and_post_send_a_body() {
        assert!(Method::Put.sends_body());
        assert!(Method::Post.sends_body());
        assert!(!Method::Get.sends_body());
        assert!(!Method::Delete.sends_body());
    }
}

//! Request assembly and execution.
//!
//! # Design
//! [`Dispatcher::send`] is a single best-effort attempt: resolve
//! credentials, build headers, encode the payload, execute. Credentials are
//! re-resolved on every call, so a refreshing provider never serves stale
//! values from this layer. The response comes back exactly as the transport
//! produced it — including 4xx/5xx statuses, which are payloads here, not
//! errors.

use std::sync::Arc;

use tracing::{debug, trace};
use url::form_urlencoded;

use crate::auth::CredentialProvider;
use crate::error::ClientError;
use crate::headers::HeaderSet;
use crate::http::{HttpRequest, HttpResponse, HttpTransport, Method};

/// Request data: a flat JSON object. The map is ordered by key, which keeps
/// query-string and body encodings deterministic.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// The fully-specified description of one request, independent of how it is
/// executed.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: Method,
    pub uri: String,
    /// Serialized into the query string for GET/DELETE, into the JSON body
    /// for PUT/POST.
    pub data: Option<Params>,
    pub extra_headers: Vec<(String, String)>,
}

/// Turns a [`RequestSpec`] into one executed HTTP request.
pub struct Dispatcher {
    credentials: Arc<dyn CredentialProvider>,
    transport: Arc<dyn HttpTransport>,
}

impl Dispatcher {
    pub fn new(
        credentials: Arc<dyn CredentialProvider>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    /// Execute one request.
    ///
    /// Both credentials are resolved before any transport work; if either
    /// fails the transport is never invoked. No retries, no status-code
    /// interpretation: whatever bytes the server sent come back in the
    /// [`HttpResponse`], even for error statuses.
    pub fn send(&self, spec: &RequestSpec) -> Result<HttpResponse, ClientError> {
        let token = self.credentials.access_token()?;
        let key = self.credentials.api_key()?;

        let mut headers = HeaderSet::defaults(&token, &key);
        headers.merge(
            spec.extra_headers
                .iter()
                .map(|(n, v)| (n.as_str(), v.as_str())),
        );

        let (uri, body) = if spec.method.sends_body() {
            let data = spec.data.clone().unwrap_or_default();
            (spec.uri.clone(), Some(serde_json::to_string(&data)?))
        } else {
            (append_query(&spec.uri, spec.data.as_ref()), None)
        };

        debug!(method = spec.method.as_str(), %uri, "dispatching request");
        let response = self.transport.execute(HttpRequest {
            method: spec.method,
            uri,
            headers: headers.into_pairs(),
            body,
        })?;
        trace!(status = response.status, "response received");

        Ok(response)
    }
}

/// Append `data` as a URL-encoded query string. Absent or empty data leaves
/// the URI untouched.
fn append_query(uri: &str, data: Option<&Params>) -> String {
    let Some(data) = data.filter(|d| !d.is_empty()) else {
        return uri.to_string();
    };

    let mut query = form_urlencoded::Serializer::new(String::new());
    for (name, value) in data {
        query.append_pair(name, &query_text(value));
    }
    format!("{uri}?{}", query.finish())
}

/// Render one query value. The wire format is a flat key-value mapping:
/// strings pass through, other scalars use their JSON text, `null` renders
/// empty.
fn query_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

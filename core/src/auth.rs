//! Credential collaborators.
//!
//! The dispatcher re-resolves credentials on every request, so providers
//! that cache or refresh tokens implement that behind this trait and never
//! go stale in this layer. Implementations must be safe for concurrent
//! reads.

use crate::error::CredentialError;

/// Supplies the bearer token and API key injected into every request.
pub trait CredentialProvider: Send + Sync {
    fn access_token(&self) -> Result<String, CredentialError>;

    fn api_key(&self) -> Result<String, CredentialError>;
}

/// Fixed credentials known up front.
///
/// Token acquisition and refresh are out of scope for this crate; pair this
/// with an external OAuth flow when the token has a lifetime.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    access_token: String,
    api_key: String,
}

impl StaticCredentials {
    pub fn new(access_token: &str, api_key: &str) -> Self {
        Self {
            access_token: access_token.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

impl CredentialProvider for StaticCredentials {
    fn access_token(&self) -> Result<String, CredentialError> {
        Ok(self.access_token.clone())
    }

    fn api_key(&self) -> Result<String, CredentialError> {
        Ok(self.api_key.clone())
    }
}

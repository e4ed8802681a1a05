//! Auth endpoints over the shared transport.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::transport::{ApiTransport, endpoints};
use crate::domain::entities::AuthToken;
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;
use crate::domain::protocol::{Ack, Envelope, LoginData, LoginPayload};

/// Production [`AuthPort`] adapter.
pub struct HttpAuthClient {
    transport: Arc<ApiTransport>,
}

impl HttpAuthClient {
    /// Creates a client over the shared transport.
    #[must_use]
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl AuthPort for HttpAuthClient {
    async fn login(&self, payload: &LoginPayload) -> Result<Envelope<LoginData>, AuthError> {
        debug!("posting credentials to the login endpoint");
        self.transport.post_json(endpoints::LOGIN, payload).await
    }

    async fn authenticate_by_token(&self, token: &AuthToken) -> Result<Ack, AuthError> {
        debug!(token = %token, "posting token exchange");
        self.transport
            .post_json(endpoints::AUTH_BY_TOKEN, &serde_json::json!({ "token": token.as_str() }))
            .await
    }

    async fn logout(&self, token: &AuthToken) -> Result<Ack, AuthError> {
        debug!("posting logout");
        self.transport.post_bearer(endpoints::LOGOUT, token).await
    }
}

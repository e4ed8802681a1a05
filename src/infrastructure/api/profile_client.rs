//! Profile endpoint over the shared transport.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::transport::{ApiTransport, endpoints};
use crate::domain::errors::AuthError;
use crate::domain::ports::ProfilePort;
use crate::domain::protocol::{Envelope, ProfileData};

/// Production [`ProfilePort`] adapter.
pub struct HttpProfileClient {
    transport: Arc<ApiTransport>,
}

impl HttpProfileClient {
    /// Creates a client over the shared transport.
    #[must_use]
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl ProfilePort for HttpProfileClient {
    async fn fetch_profile(&self) -> Result<Envelope<ProfileData>, AuthError> {
        debug!("requesting profile");
        self.transport.get(endpoints::PROFILE).await
    }
}

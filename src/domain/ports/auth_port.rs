//! Authentication port definition.

use async_trait::async_trait;

use crate::domain::entities::AuthToken;
use crate::domain::errors::AuthError;
use crate::domain::protocol::{Ack, Envelope, LoginData, LoginPayload};

/// Port for the backend's auth endpoints. Adapters only perform transport
/// and decoding; interpreting response codes is the session manager's job.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// `POST /login` with credentials and a device snapshot.
    async fn login(&self, payload: &LoginPayload) -> Result<Envelope<LoginData>, AuthError>;

    /// `POST /authByToken`, exchanging the token for a session cookie. The
    /// transport's shared cookie jar absorbs any `Set-Cookie` in the
    /// response.
    async fn authenticate_by_token(&self, token: &AuthToken) -> Result<Ack, AuthError>;

    /// `POST /logout` with the token as bearer credential.
    async fn logout(&self, token: &AuthToken) -> Result<Ack, AuthError>;
}

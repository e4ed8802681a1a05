//! Auth/session lifecycle manager.
//!
//! Owns the decision logic across the login, re-authentication, and logout
//! flows: how response codes map to the error taxonomy, when the persisted
//! token and the transient session cookie are created or destroyed, and
//! what "authenticated" means. The manager holds no token copy beyond a
//! call's lifetime; the secret store is the single owner.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{LoginReceipt, LogoutReceipt};
use crate::domain::cancel::CancelToken;
use crate::domain::entities::{AuthToken, Credentials, DeviceInfo};
use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthPort, ConnectivityPort, SessionPort, TokenStoragePort};
use crate::domain::protocol::{LoginPayload, SessionPolicy};

/// Auth/session lifecycle manager.
#[derive(Clone)]
pub struct SessionManager {
    auth: Arc<dyn AuthPort>,
    storage: Arc<dyn TokenStoragePort>,
    session: Arc<dyn SessionPort>,
    connectivity: Arc<dyn ConnectivityPort>,
    policy: SessionPolicy,
}

impl SessionManager {
    /// Creates a new manager over the injected collaborators.
    #[must_use]
    pub fn new(
        auth: Arc<dyn AuthPort>,
        storage: Arc<dyn TokenStoragePort>,
        session: Arc<dyn SessionPort>,
        connectivity: Arc<dyn ConnectivityPort>,
        policy: SessionPolicy,
    ) -> Self {
        Self {
            auth,
            storage,
            session,
            connectivity,
            policy,
        }
    }

    /// Returns whether a token is currently retrievable from the secret
    /// store. Computed on demand, never cached; a store read failure reads
    /// as "not authenticated".
    pub async fn is_authenticated(&self) -> bool {
        self.storage.has_token().await
    }

    /// Performs credential login: posts credentials and the device
    /// snapshot, persists the issued token, then immediately exchanges it
    /// for a session cookie.
    ///
    /// The token persists even when the final session-establishment step
    /// fails; password auth and session establishment are deliberately
    /// decoupled, so the caller may retry re-auth later without
    /// re-entering credentials.
    ///
    /// # Errors
    /// `NoInternetConnection` when offline or on transport failure,
    /// `AuthFailed` on credential rejection, `ServerError` on any other
    /// non-zero response code, `NoToken` when a success envelope carries no
    /// token, `Network` when the token cannot be persisted, `Cancelled`
    /// when `cancel` is tripped.
    pub async fn login(
        &self,
        credentials: &Credentials,
        device_info: DeviceInfo,
        cancel: &CancelToken,
    ) -> Result<LoginReceipt, AuthError> {
        if !self.connectivity.is_connected() {
            warn!("login attempted while offline");
            return Err(AuthError::NoInternetConnection);
        }
        cancel.check()?;

        debug!(login = credentials.login(), "posting login");
        let envelope = self.auth.login(&LoginPayload::new(credentials, device_info)).await?;
        cancel.check()?;

        if !envelope.is_success() {
            if self.policy.is_invalid_credentials(envelope.response_code) {
                warn!("credentials rejected");
                return Err(AuthError::AuthFailed);
            }
            warn!(code = envelope.response_code, "login rejected by server");
            return Err(AuthError::server(envelope.response_code, envelope.response_message));
        }

        let Some(token) = envelope.data.and_then(|d| d.token).and_then(AuthToken::new) else {
            warn!("login succeeded but the payload carried no token");
            return Err(AuthError::NoToken);
        };

        self.storage.store_token(&token).await.map_err(|e| {
            tracing::error!(error = %e, "failed to persist auth token");
            AuthError::network(format!("failed to persist auth token: {e}"))
        })?;
        info!("auth token persisted");

        self.authenticate_by_token(&token, cancel).await?;

        Ok(LoginReceipt::new(envelope.response_message))
    }

    /// Exchanges `token` for a session cookie. Idempotent and safe to
    /// repeat; mutates only the transport's cookie jar.
    ///
    /// # Errors
    /// `NoInternetConnection` when offline or on transport failure,
    /// `ServerError` on a non-zero response code, `Cancelled` when `cancel`
    /// is tripped.
    pub async fn authenticate_by_token(
        &self,
        token: &AuthToken,
        cancel: &CancelToken,
    ) -> Result<(), AuthError> {
        if !self.connectivity.is_connected() {
            warn!("re-authentication attempted while offline");
            return Err(AuthError::NoInternetConnection);
        }
        cancel.check()?;

        debug!(token = %token, "exchanging token for a session");
        let ack = self.auth.authenticate_by_token(token).await?;
        cancel.check()?;

        if !ack.is_success() {
            warn!(code = ack.response_code, "token exchange rejected");
            return Err(AuthError::server(ack.response_code, ack.response_message));
        }

        debug!(
            session_cookie = self.session.has_session_cookie(),
            "session established"
        );
        Ok(())
    }

    /// Re-establishes the session from the stored token. Recovery entry
    /// point for the profile service.
    ///
    /// # Errors
    /// `NoToken` when no token is stored (or the store is unreadable);
    /// otherwise as [`Self::authenticate_by_token`].
    pub async fn reauthenticate(&self, cancel: &CancelToken) -> Result<(), AuthError> {
        let token = self.stored_token().await.ok_or(AuthError::NoToken)?;
        self.authenticate_by_token(&token, cancel).await
    }

    /// Logs out: posts the logout request, then deletes the persisted token
    /// and clears the backend-domain cookies. Both local deletions are
    /// best-effort; the server-side session is already invalidated, and a
    /// dangling local artifact is the lesser failure mode.
    ///
    /// A network failure does NOT clear the persisted token: the server
    /// session is still live, and local bookkeeping must not orphan it.
    ///
    /// # Errors
    /// `NoToken` when no token is stored (no HTTP call is made),
    /// `NoInternetConnection` when offline or on transport failure,
    /// `ServerError` on a non-zero response code, `Cancelled` when `cancel`
    /// is tripped.
    pub async fn logout(&self, cancel: &CancelToken) -> Result<LogoutReceipt, AuthError> {
        let Some(token) = self.stored_token().await else {
            debug!("logout requested with no stored token");
            return Err(AuthError::NoToken);
        };

        if !self.connectivity.is_connected() {
            warn!("logout attempted while offline");
            return Err(AuthError::NoInternetConnection);
        }
        cancel.check()?;

        let ack = self.auth.logout(&token).await?;
        cancel.check()?;

        if !ack.is_success() {
            warn!(code = ack.response_code, "logout rejected by server");
            return Err(AuthError::server(ack.response_code, ack.response_message));
        }

        if let Err(e) = self.storage.delete_token().await {
            warn!(error = %e, "failed to delete persisted token after logout");
        }
        self.session.clear_session();
        info!("logged out, local session state cleared");

        Ok(LogoutReceipt::new(ack.response_message))
    }

    async fn stored_token(&self) -> Option<AuthToken> {
        match self.storage.get_token().await {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "token read failed, treating as absent");
                None
            }
        }
    }
}

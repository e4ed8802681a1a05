//! Profile retrieval with bounded session recovery.
//!
//! A missing session cookie or a response code in the expiry band both mean
//! the server-side session is gone; the service delegates to the session
//! manager for token-based re-authentication and retries once. The retry is
//! bounded: a second expiry signal within the same call is terminal, so a
//! misbehaving server can never trap the client in a recovery loop.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::services::SessionManager;
use crate::domain::cancel::CancelToken;
use crate::domain::entities::Profile;
use crate::domain::errors::AuthError;
use crate::domain::ports::{ProfilePort, SessionPort};
use crate::domain::protocol::SessionPolicy;

/// Profile retrieval service.
#[derive(Clone)]
pub struct ProfileService {
    profile: Arc<dyn ProfilePort>,
    sessions: Arc<SessionManager>,
    session: Arc<dyn SessionPort>,
    policy: SessionPolicy,
}

impl ProfileService {
    /// Creates a new service over the injected collaborators.
    #[must_use]
    pub fn new(
        profile: Arc<dyn ProfilePort>,
        sessions: Arc<SessionManager>,
        session: Arc<dyn SessionPort>,
        policy: SessionPolicy,
    ) -> Self {
        Self {
            profile,
            sessions,
            session,
            policy,
        }
    }

    /// Fetches the profile, transparently recovering from one session
    /// expiry. An absent session cookie skips the doomed GET entirely and
    /// goes straight to recovery.
    ///
    /// # Errors
    /// `ReauthFailed` when a freshly recovered session expires again within
    /// the same call; `ServerError` for non-expiry response codes, echoed
    /// exactly; reauthentication errors (`NoToken`, transport, server)
    /// propagate unchanged; `NoInternetConnection` on transport failure;
    /// `Cancelled` when `cancel` is tripped.
    pub async fn fetch_profile(&self, cancel: &CancelToken) -> Result<Profile, AuthError> {
        let mut recovered = false;

        loop {
            cancel.check()?;

            if !self.session.has_session_cookie() {
                debug!("no session cookie, skipping the profile request");
                self.recover(&mut recovered, cancel).await?;
                continue;
            }

            let envelope = self.profile.fetch_profile().await?;
            cancel.check()?;

            if envelope.is_success() {
                return Ok(Profile::from_payload(envelope.data));
            }

            if self.policy.is_session_expired(envelope.response_code) {
                debug!(code = envelope.response_code, "session expired during profile fetch");
                self.recover(&mut recovered, cancel).await?;
                continue;
            }

            warn!(code = envelope.response_code, "profile fetch rejected by server");
            return Err(AuthError::server(envelope.response_code, envelope.response_message));
        }
    }

    async fn recover(&self, recovered: &mut bool, cancel: &CancelToken) -> Result<(), AuthError> {
        if *recovered {
            // the session we just re-established did not hold
            warn!("second expiry signal within one fetch, giving up");
            return Err(AuthError::ReauthFailed);
        }

        info!("attempting session recovery");
        self.sessions.reauthenticate(cancel).await?;
        *recovered = true;
        Ok(())
    }
}

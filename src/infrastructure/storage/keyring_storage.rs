//! Keyring-based token storage.

use async_trait::async_trait;
use keyring::Entry;
use tracing::{debug, warn};

use crate::domain::entities::AuthToken;
use crate::domain::errors::SecretError;
use crate::domain::ports::TokenStoragePort;

const KEYRING_SERVICE: &str = "skyhall";
const KEYRING_USER: &str = "auth-token";

/// System keyring token storage adapter. Holds the single persisted secret
/// under a fixed logical key in the application's own namespace.
pub struct KeyringTokenStorage {
    service: String,
    user: String,
}

impl KeyringTokenStorage {
    /// Creates storage with the default names.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: KEYRING_SERVICE.to_string(),
            user: KEYRING_USER.to_string(),
        }
    }

    /// Creates storage with custom names.
    #[must_use]
    pub fn with_names(service: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            user: user.into(),
        }
    }

    fn entry(&self) -> Result<Entry, SecretError> {
        Entry::new(&self.service, &self.user)
            .map_err(|e| SecretError::AccessFailed(e.to_string()))
    }
}

impl Default for KeyringTokenStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStoragePort for KeyringTokenStorage {
    async fn get_token(&self) -> Result<Option<AuthToken>, SecretError> {
        debug!(service = %self.service, "retrieving token from keyring");

        let entry = self.entry()?;

        match entry.get_password() {
            Ok(password) => {
                debug!("token found in keyring");
                Ok(AuthToken::new(password))
            }
            Err(keyring::Error::NoEntry) => {
                debug!("no token stored in keyring");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "failed to retrieve token from keyring");
                Err(SecretError::RetrievalFailed(e.to_string()))
            }
        }
    }

    async fn store_token(&self, token: &AuthToken) -> Result<(), SecretError> {
        debug!(service = %self.service, "storing token in keyring");

        let entry = self.entry()?;

        entry.set_password(token.as_str()).map_err(|e| {
            warn!(error = %e, "failed to store token in keyring");
            SecretError::StorageFailed(e.to_string())
        })?;

        debug!("token stored");
        Ok(())
    }

    async fn delete_token(&self) -> Result<(), SecretError> {
        debug!(service = %self.service, "deleting token from keyring");

        let entry = self.entry()?;

        match entry.delete_credential() {
            Ok(()) => {
                debug!("token deleted from keyring");
                Ok(())
            }
            Err(keyring::Error::NoEntry) => {
                debug!("no token to delete");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "failed to delete token from keyring");
                Err(SecretError::DeletionFailed(e.to_string()))
            }
        }
    }
}

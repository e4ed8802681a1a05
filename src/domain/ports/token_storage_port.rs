//! Token storage port definition.

use async_trait::async_trait;

use crate::domain::entities::AuthToken;
use crate::domain::errors::SecretError;

/// Port for persisting the single auth token in a secure key-value store.
#[async_trait]
pub trait TokenStoragePort: Send + Sync {
    /// Retrieves the stored token, `None` if no token is stored.
    async fn get_token(&self) -> Result<Option<AuthToken>, SecretError>;

    /// Stores the token, replacing any previous one.
    async fn store_token(&self, token: &AuthToken) -> Result<(), SecretError>;

    /// Deletes the stored token. Deleting a missing token is not an error.
    async fn delete_token(&self) -> Result<(), SecretError>;

    /// Returns whether a token is currently retrievable. A read failure
    /// reads as "no token".
    async fn has_token(&self) -> bool {
        matches!(self.get_token().await, Ok(Some(_)))
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockTokenStorage;
    use super::*;

    #[test]
    fn test_has_token_reads_through() {
        let storage = MockTokenStorage::with_token(AuthToken::new_unchecked("tok-1"));
        assert!(tokio_test::block_on(storage.has_token()));
    }

    #[test]
    fn test_has_token_read_failure_is_false() {
        let storage = MockTokenStorage::with_token(AuthToken::new_unchecked("tok-1"));
        storage.fail_reads();

        assert!(!tokio_test::block_on(storage.has_token()));
    }
}

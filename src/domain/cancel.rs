//! Cooperative cancellation token.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::errors::AuthError;

/// Cancellation handle passed explicitly into long-running operations.
///
/// Cloning yields a handle to the same flag. Operations check the token at
/// each suspension point (before issuing a request, after receiving the
/// response) and bail out with [`AuthError::Cancelled`] without further side
/// effects.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a fresh, un-tripped token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Trips the token. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Returns whether the token has been tripped.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Returns `Err(AuthError::Cancelled)` if the token has been tripped.
    ///
    /// # Errors
    /// Fails iff the token is cancelled.
    pub fn check(&self) -> Result<(), AuthError> {
        if self.is_cancelled() {
            Err(AuthError::Cancelled)
        } else {
            Ok(())
        }
    }
}

//! Profile port definition.

use async_trait::async_trait;

use crate::domain::errors::AuthError;
use crate::domain::protocol::{Envelope, ProfileData};

/// Port for the backend's profile endpoint. Returns the decoded envelope;
/// interpreting response codes (including session expiry) is the profile
/// service's job.
#[async_trait]
pub trait ProfilePort: Send + Sync {
    /// `GET /profile`, relying on the transport's session cookie.
    async fn fetch_profile(&self) -> Result<Envelope<ProfileData>, AuthError>;
}

#[cfg(test)]
pub mod mock {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use parking_lot::Mutex;

    use super::{AuthError, Envelope, ProfileData, ProfilePort, async_trait};

    /// Scripted profile port for testing. Pops the next queued result; an
    /// empty queue yields an empty success envelope.
    pub struct MockProfilePort {
        queue: Mutex<VecDeque<Result<Envelope<ProfileData>, AuthError>>>,
        fetch_calls: AtomicUsize,
    }

    impl MockProfilePort {
        /// Creates a mock that always succeeds with an empty payload.
        pub fn new() -> Self {
            Self {
                queue: Mutex::new(VecDeque::new()),
                fetch_calls: AtomicUsize::new(0),
            }
        }

        /// Builds an envelope with the given code, message, and payload.
        pub fn envelope(code: i32, message: &str, data: Option<ProfileData>) -> Envelope<ProfileData> {
            Envelope {
                response_code: code,
                response_message: message.to_string(),
                data,
            }
        }

        /// Queues the next fetch result.
        pub fn push(&self, result: Result<Envelope<ProfileData>, AuthError>) {
            self.queue.lock().push_back(result);
        }

        /// Number of fetch calls observed.
        pub fn fetch_calls(&self) -> usize {
            self.fetch_calls.load(Ordering::SeqCst)
        }
    }

    impl Default for MockProfilePort {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl ProfilePort for MockProfilePort {
        async fn fetch_profile(&self) -> Result<Envelope<ProfileData>, AuthError> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            self.queue
                .lock()
                .pop_front()
                .unwrap_or_else(|| Ok(Self::envelope(0, "OK", Some(ProfileData::default()))))
        }
    }
}

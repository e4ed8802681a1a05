//! Session cookie jar port definition.

/// Port for the transport's shared cookie jar. The server-side session is
/// represented client-side only by a well-known cookie; its presence or
/// absence is the only thing the core ever asks the jar.
pub trait SessionPort: Send + Sync {
    /// Returns whether the backend-domain session cookie is present.
    fn has_session_cookie(&self) -> bool;

    /// Clears the backend-domain session cookies. Best-effort; never fails.
    fn clear_session(&self);
}

#[cfg(test)]
pub mod mock {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use parking_lot::Mutex;

    use super::SessionPort;

    /// Scripted cookie jar view for testing. `has_session_cookie` pops from
    /// a state sequence; the last state is sticky. `clear_session` calls are
    /// counted and force the sticky state to absent.
    pub struct MockSessionPort {
        states: Mutex<VecDeque<bool>>,
        current: AtomicBool,
        clear_calls: AtomicUsize,
    }

    impl MockSessionPort {
        /// Creates a jar whose cookie is present.
        pub fn present() -> Self {
            Self::with_sequence([true])
        }

        /// Creates a jar whose cookie is absent.
        pub fn absent() -> Self {
            Self::with_sequence([false])
        }

        /// Creates a jar that reports the given states in order, then
        /// sticks to the last one.
        pub fn with_sequence(states: impl IntoIterator<Item = bool>) -> Self {
            let mut queue: VecDeque<bool> = states.into_iter().collect();
            let first = queue.pop_front().unwrap_or(false);
            Self {
                states: Mutex::new(queue),
                current: AtomicBool::new(first),
                clear_calls: AtomicUsize::new(0),
            }
        }

        /// Number of clear calls observed.
        pub fn clear_calls(&self) -> usize {
            self.clear_calls.load(Ordering::SeqCst)
        }
    }

    impl SessionPort for MockSessionPort {
        fn has_session_cookie(&self) -> bool {
            let state = self.current.load(Ordering::SeqCst);
            if let Some(next) = self.states.lock().pop_front() {
                self.current.store(next, Ordering::SeqCst);
            }
            state
        }

        fn clear_session(&self) {
            self.clear_calls.fetch_add(1, Ordering::SeqCst);
            self.states.lock().clear();
            self.current.store(false, Ordering::SeqCst);
        }
    }
}

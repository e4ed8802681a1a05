//! Authentication DTOs.

/// Decoded outcome of a successful login. The issued token is persisted by
/// the session manager and deliberately not carried here.
#[derive(Debug, Clone)]
pub struct LoginReceipt {
    /// Server status message.
    pub message: String,
}

impl LoginReceipt {
    /// Creates a new receipt.
    #[must_use]
    pub const fn new(message: String) -> Self {
        Self { message }
    }
}

/// Decoded outcome of a successful logout.
#[derive(Debug, Clone)]
pub struct LogoutReceipt {
    /// Server status message.
    pub message: String,
}

impl LogoutReceipt {
    /// Creates a new receipt.
    #[must_use]
    pub const fn new(message: String) -> Self {
        Self { message }
    }
}

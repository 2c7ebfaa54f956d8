//! Confirmation messages for operation feedback.

use std::fmt;

/// Wrapper type for displaying a successful operation's confirmation line.
pub struct OperationStatus {
    pub message: String,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Success: {}", self.message)
    }
}

//! Error types

/// Result type for session storage operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can happen during session storage operations.
///
/// Only genuine storage malfunctions are represented here. Conditions where
/// the session is effectively gone - never written, expired, or with an
/// unreadable payload - are all normalized to an absent (`Ok(None)`) result
/// by the storage, so middleware never has to tell those cases apart.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// An underlying filesystem operation (directory creation, write, read
    /// or delete) failed for a reason other than the session being absent
    #[error("Session storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The session payload could not be serialized for storage
    #[error("Failed to serialize session: {0}")]
    Serialization(#[from] serde_json::Error),
}

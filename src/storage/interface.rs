//! Shared interface for session storage

use async_trait::async_trait;

use crate::error::SessionResult;

/// Trait representing a session backend storage, consumed by a session
/// middleware. You can use your own session storage by implementing this
/// trait.
///
/// The middleware owns session ID generation and decides when to call each
/// operation; the storage is only responsible for persisting payloads and
/// honoring the TTL handed to [`set`](SessionStorage::set).
#[async_trait]
pub trait SessionStorage<T>: Send + Sync
where
    T: Send + Sync,
{
    /// Load the session payload for the given ID. Returns `Ok(None)` when
    /// there is no valid session - never written, expired, or with a payload
    /// that can no longer be deserialized. Only a storage-layer malfunction
    /// is returned as an error.
    async fn get(&self, id: &str) -> SessionResult<Option<T>>;

    /// Save a session payload with the given TTL (time-to-live in
    /// milliseconds). Creates or overwrites the session for this ID.
    async fn set(&self, id: &str, data: T, ttl_ms: u64) -> SessionResult<()>;

    /// Delete the session for the given ID. Destroying a session that
    /// doesn't exist is a successful no-op.
    async fn destroy(&self, id: &str) -> SessionResult<()>;
}

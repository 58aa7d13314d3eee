//! Repository trait for redirect storage.

use crate::error::StoreError;
use async_trait::async_trait;

/// Storage for the short name → destination mapping.
///
/// Mutations are persisted before they return. When persisting fails the
/// in-memory mapping keeps the mutation, so memory and backing storage
/// diverge until the next successful write.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileRedirectRepository`] - JSON file
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectRepository: Send + Sync {
    /// Inserts or overwrites the destination of `short`, then persists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the mapping could not be persisted.
    async fn upsert(&self, short: &str, destination: &str) -> Result<(), StoreError>;

    /// Removes `short` if present, then persists. Removing an unknown name is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the mapping could not be persisted.
    async fn remove(&self, short: &str) -> Result<(), StoreError>;

    /// Looks up the destination of `short`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(destination))` if found
    /// - `Ok(None)` if not found
    async fn find(&self, short: &str) -> Result<Option<String>, StoreError>;

    /// Returns the persisted representation of the mapping, byte for byte.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the backing storage cannot be read.
    async fn snapshot(&self) -> Result<Vec<u8>, StoreError>;

    /// Counts stored redirects.
    async fn count(&self) -> usize;
}

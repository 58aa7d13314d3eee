//! Redirect management and resolution service.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::entities::Redirect;
use crate::domain::repositories::RedirectRepository;
use crate::error::{AppError, StoreError};

/// Service for adding, removing, resolving and listing redirects.
///
/// Destinations are normalized (see [`Redirect::new`]) before they reach the
/// repository.
pub struct RedirectService<R: RedirectRepository> {
    repository: Arc<R>,
}

impl<R: RedirectRepository> RedirectService<R> {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Adds or updates a redirect, returning it with its normalized
    /// destination.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the mapping could not be persisted. The
    /// redirect is still served from memory in that case.
    pub async fn add_redirect(&self, short: &str, destination: &str) -> Result<Redirect, StoreError> {
        let redirect = Redirect::new(short, destination);

        self.repository
            .upsert(&redirect.short, &redirect.destination)
            .await?;

        Ok(redirect)
    }

    /// Removes a redirect. Unknown short names are not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the mapping could not be persisted.
    pub async fn remove_redirect(&self, short: &str) -> Result<(), StoreError> {
        self.repository.remove(short).await
    }

    /// Resolves a short name to its destination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no redirect matches `short`.
    /// Returns [`AppError::Internal`] if the repository lookup fails.
    pub async fn resolve(&self, short: &str) -> Result<String, AppError> {
        match self.repository.find(short).await {
            Ok(Some(destination)) => {
                debug!("Found match {} -> {}", short, destination);
                Ok(destination)
            }
            Ok(None) => {
                info!("No match for {} found", short);
                Err(AppError::not_found(format!("No match for {short} found")))
            }
            Err(e) => {
                error!("Failed looking up match for {}, {}", short, e);
                Err(AppError::internal(format!(
                    "Failed looking up match for {short}, {e}"
                )))
            }
        }
    }

    /// Returns the persisted mapping verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the backing file cannot be read.
    pub async fn list_redirects(&self) -> Result<Vec<u8>, StoreError> {
        self.repository.snapshot().await
    }

    /// Number of redirects currently served.
    pub async fn count(&self) -> usize {
        self.repository.count().await
    }
}

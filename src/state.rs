//! Shared application state injected into request handlers.

use std::sync::Arc;

use crate::application::services::RedirectService;
use crate::infrastructure::persistence::JsonFileRedirectRepository;

/// State shared by every request handler.
///
/// The redirect store is owned here and handed to handlers explicitly; it is
/// never reachable through a global.
#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService<JsonFileRedirectRepository>>,
}

impl AppState {
    /// Builds the state around an opened redirect repository.
    pub fn new(repository: Arc<JsonFileRedirectRepository>) -> Self {
        Self {
            redirect_service: Arc::new(RedirectService::new(repository)),
        }
    }
}

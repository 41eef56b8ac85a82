//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::{RedirectService, RegistrationService};
use crate::domain::repositories::UrlRepository;

/// Services and the store they share, constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub registration_service: Arc<RegistrationService<dyn UrlRepository>>,
    pub redirect_service: Arc<RedirectService<dyn UrlRepository>>,
    pub url_repository: Arc<dyn UrlRepository>,
}

impl AppState {
    /// Wires both services to the given store.
    pub fn new(url_repository: Arc<dyn UrlRepository>) -> Self {
        Self {
            registration_service: Arc::new(RegistrationService::new(url_repository.clone())),
            redirect_service: Arc::new(RedirectService::new(url_repository.clone())),
            url_repository,
        }
    }
}

//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AdminAuthService, LinkService};
use crate::infrastructure::persistence::InMemoryLinkRepository;

/// Link service bound to the process-lifetime store.
pub type AppLinkService = LinkService<InMemoryLinkRepository>;

/// Handles to the services, cloned cheaply into every request.
///
/// Built once by [`crate::server::run`]; all clones share the same store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    pub admin_auth: Arc<AdminAuthService>,
}

impl AppState {
    pub fn new(link_service: Arc<AppLinkService>, admin_auth: Arc<AdminAuthService>) -> Self {
        Self {
            link_service,
            admin_auth,
        }
    }
}

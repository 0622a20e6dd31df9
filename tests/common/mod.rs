#![allow(dead_code)]

use std::sync::Arc;

use free_tools::application::services::{AdminAuthService, CodeSettings, LinkService};
use free_tools::infrastructure::persistence::InMemoryLinkRepository;
use free_tools::state::AppState;

pub const BASE_URL: &str = "https://tools.example.com";
pub const ADMIN_PASSWORD: &str = "test-admin-password";

/// State around a fresh store with the admin gate enabled.
pub fn create_test_state() -> AppState {
    create_state(Some(ADMIN_PASSWORD), CodeSettings::default())
}

/// State around a fresh store with no admin password configured.
pub fn create_state_without_admin() -> AppState {
    create_state(None, CodeSettings::default())
}

pub fn create_state(admin_password: Option<&str>, code_settings: CodeSettings) -> AppState {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(repository, BASE_URL, code_settings));
    let admin_auth = Arc::new(AdminAuthService::new(
        admin_password,
        b"test-signing-secret".to_vec(),
    ));

    AppState::new(link_service, admin_auth)
}

/// Stores a link directly and returns its code.
pub fn create_test_link(state: &AppState, url: &str) -> String {
    state
        .link_service
        .create_short_link(url)
        .expect("test link should be created")
        .code
}

pub fn bearer(password: &str) -> String {
    format!("Bearer {password}")
}

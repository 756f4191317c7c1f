//! Application-wide reactive state shared through context.

use leptos::*;

use crate::services::{api, session};
use crate::types::{SiteSettings, UserProfile};

/// Global signals provided by [`crate::App`].
#[derive(Clone, Copy)]
pub struct AppState {
    /// Branding and footer links, defaults until the backend answers
    pub settings: RwSignal<SiteSettings>,
    /// Signed-in storefront user
    pub user: RwSignal<Option<UserProfile>>,
    /// Whether this tab holds an admin token
    pub is_admin: RwSignal<bool>,
}

impl AppState {
    /// Create the state, load settings and provide it as context.
    pub fn provide() -> Self {
        let state = Self {
            settings: create_rw_signal(SiteSettings::default()),
            user: create_rw_signal(session::current_user()),
            is_admin: create_rw_signal(session::admin_token().is_some()),
        };
        provide_context(state);
        state.reload_settings();
        state
    }

    /// Re-read the browser storage after login, logout or a `storage` event.
    pub fn refresh_session(&self) {
        self.user.set(session::current_user());
        self.is_admin.set(session::admin_token().is_some());
    }

    pub fn reload_settings(&self) {
        let settings = self.settings;
        spawn_local(async move {
            match api::fetch_settings().await {
                Ok(loaded) => settings.set(loaded),
                Err(e) => log::warn!("Could not load settings: {}", e),
            }
        });
    }
}

/// State provided by [`AppState::provide`].
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

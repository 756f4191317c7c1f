//! BantConfirm - Frontend Rust/Leptos Application
//!
//! A WebAssembly storefront for the BantConfirm B2B lead marketplace,
//! plus the admin console that manages it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (brand, nav, session)                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── Storefront (home, products, wizard, blog, faq...)      │
//! │  ├── Accounts (user login/signup, admin login)              │
//! │  └── AdminPage (tabs over leads, catalog, settings)         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store changes arrive over SSE and bump a revision counter that every
//! list resource depends on, so open pages refetch on their own.
//!
//! # Modules
//!
//! - [`types`] - Mirrors of the backend JSON (Product, Lead, Session, etc.)
//! - [`state`] - Settings and session signals shared through context
//! - [`components`] - UI components (Header, ProductGrid, ImageInput, etc.)
//! - [`pages`] - Routed pages and the admin console
//! - [`services`] - Backend calls, SSE, browser storage and files

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;
pub mod pages;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Catalog
    BlogPost, Product, SiteSettings, VendorLogo,
    // Pipeline
    BantAnalysis, Lead, LeadStatus, Vendor,
    // Accounts
    Session, UserProfile,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 BantConfirm - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let state = state::AppState::provide();

    // Initialize SSE connection ONCE at app startup
    init_store_events();

    // Keep the tab title and description in line with the saved settings
    let description = move || state.settings.with(|s| s.meta_description.clone());
    let keywords = move || state.settings.with(|s| s.meta_keywords.clone());
    create_effect(move |_| {
        let favicon = state.settings.with(|s| s.favicon.clone());
        if !favicon.is_empty() {
            set_favicon(&favicon);
        }
    });

    view! {
        <Title formatter=|text: String| if text.is_empty() { APP_NAME.to_string() } else { text }/>
        <Meta name="description" content=description/>
        <Meta name="keywords" content=keywords/>
        <Router>
            <Header/>
            <main>
                <Routes>
                    <Route path="/" view=pages::HomePage/>
                    <Route path="/products" view=pages::ProductsPage/>
                    <Route path="/products/:slug" view=pages::ProductDetailPage/>
                    <Route path="/lead-wizard" view=pages::LeadWizardPage/>
                    <Route path="/blog" view=pages::BlogPage/>
                    <Route path="/about" view=pages::AboutPage/>
                    <Route path="/faq" view=pages::FaqPage/>
                    <Route path="/user-login" view=pages::UserLoginPage/>
                    <Route path="/user-signup" view=pages::UserSignupPage/>
                    <Route path="/vendor-registration" view=pages::VendorRegistrationPage/>
                    <Route path="/login" view=pages::AdminLoginPage/>
                    <Route path="/admin" view=pages::AdminPage/>
                    <Route path="/*any" view=pages::NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

/// Point the existing `<link rel="icon">` at the configured favicon.
fn set_favicon(href: &str) {
    let link = document().query_selector("link[rel='icon']").ok().flatten();
    if let Some(link) = link {
        if let Err(e) = link.set_attribute("href", href) {
            log::warn!("Could not update favicon: {:?}", e);
        }
    }
}

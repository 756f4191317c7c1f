//! # BantConfirm - B2B lead marketplace backend
//!
//! Storage, lead scoring and HTTP API behind the BantConfirm marketing site
//! and admin console.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Lead wizard │────▶│   Intake    │────▶│  AI scorer  │────▶│  JSON store │
//! │   (web)     │     │ (validate)  │     │ (fallback)  │     │  (per key)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per concern
//! - [`config`] - Environment configuration
//! - [`models`] - Domain records (Product, Vendor, Lead, ...)
//! - [`store`] - JSON document store and seed data
//! - [`validation`] - Form schema validation
//! - [`marketplace`] - CRUD over products, vendors, leads, blogs, logos, categories, settings
//! - [`intake`] - Lead wizard submission
//! - [`ai`] - BANT scoring and consultancy client
//! - [`export`] - CSV export of leads
//! - [`auth`] - Accounts and sessions
//! - [`api`] - HTTP API server

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Persistence
pub mod store;

// Validation
pub mod validation;

// Domain operations
pub mod export;
pub mod intake;
pub mod marketplace;

// AI
pub mod ai;

// Accounts
pub mod auth;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    AuthError, ConfigError, ExportError, MarketplaceError, ScoringError, ServerError, StoreError,
    ValidationError,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    BantAnalysis, BantStatus, BlogPost, Lead, LeadStatus, PricingType, Product, SiteSettings,
    User, UserProfile, Vendor, VendorLogo,
};

// =============================================================================
// Re-exports - Services
// =============================================================================

pub use ai::{LeadScorer, ScoringClient};
pub use auth::{Accounts, Role, Session};
pub use config::AppConfig;
pub use export::leads_to_csv;
pub use intake::{submit, LeadDraft, Submission, WizardStep};
pub use marketplace::{Marketplace, ProductQuery};
pub use store::{JsonStore, StorageKey};

// Server
pub mod server {
    pub use crate::api::server::start_server;
}

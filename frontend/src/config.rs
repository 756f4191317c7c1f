//! Application configuration.
//!
//! Centralized configuration for the BantConfirm frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Backend API base URL.
///
/// The bantconfirm backend serving catalog, leads and admin routes.
pub const BACKEND_URL: &str = "http://localhost:3000";

/// Brand name shown when settings have not loaded yet.
pub const APP_NAME: &str = "BANTConfirm";

/// `localStorage` key holding the signed-in storefront user.
pub const USER_STORAGE_KEY: &str = "currentUser";

/// `localStorage` key holding the storefront session token.
pub const USER_TOKEN_KEY: &str = "userToken";

/// `sessionStorage` key holding the admin session token.
///
/// Session storage so the console locks again when the tab closes.
pub const ADMIN_TOKEN_KEY: &str = "adminToken";

/// Products shown in the home page grid.
pub const HOME_PRODUCT_LIMIT: usize = 4;

/// Maximum image size accepted by admin uploads (in bytes).
///
/// 2 MB limit, data URLs are stored inline.
pub const MAX_IMAGE_SIZE: f64 = 2.0 * 1024.0 * 1024.0;

/// How long confirmation banners stay visible (in milliseconds).
pub const NOTICE_MILLIS: u32 = 2_500;

/// Catch-all catalog tab served ahead of the stored categories.
pub const ALL_SOLUTIONS: &str = "All Solutions";

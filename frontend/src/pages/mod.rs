//! Routed pages.
//!
//! # Storefront
//! - [`HomePage`], [`ProductsPage`], [`ProductDetailPage`] - Catalog
//! - [`LeadWizardPage`] - Three-step requirement capture with BANT scoring
//! - [`BlogPage`], [`AboutPage`], [`FaqPage`] - Content
//! - [`VendorRegistrationPage`] - Partner applications
//!
//! # Accounts
//! - [`UserLoginPage`], [`UserSignupPage`] - Storefront users
//! - [`AdminLoginPage`], [`AdminPage`] - Back-office console

mod about;
mod admin;
mod admin_login;
mod blog;
mod faq;
mod home;
mod lead_wizard;
mod product_detail;
mod products;
mod user_login;
mod user_signup;
mod vendor_registration;

pub use about::AboutPage;
pub use admin::AdminPage;
pub use admin_login::AdminLoginPage;
pub use blog::BlogPage;
pub use faq::FaqPage;
pub use home::HomePage;
pub use lead_wizard::LeadWizardPage;
pub use product_detail::{NotFound, ProductDetailPage};
pub use products::ProductsPage;
pub use user_login::UserLoginPage;
pub use user_signup::UserSignupPage;
pub use vendor_registration::VendorRegistrationPage;

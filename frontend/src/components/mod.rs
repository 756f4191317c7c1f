//! UI Components for the BantConfirm application.
//!
//! This module contains the Leptos components shared across pages:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with brand, session and CTA
//! - [`Footer`] - Link groups and social links from settings
//! - [`Brand`] - Logo image or two-tone brand text
//! - [`PageHeading`] - Eyebrow, title and subtitle block
//!
//! # Feature Components
//! - [`ProductCard`] / [`ProductGrid`] / [`CategoryTabs`] - Catalog tiles and filters
//! - [`ImageInput`] - URL or data-URL image field for admin forms
//! - [`ConsultBox`] - AI consultancy question box

mod brand;
mod consult;
mod footer;
mod header;
mod hero;
mod image_input;
mod product_card;

pub use brand::*;
pub use consult::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use image_input::*;
pub use product_card::*;

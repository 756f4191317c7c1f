//! Marketplace CRUD over the JSON store.
//!
//! Each entity list lives under its own [`StorageKey`] and is rewritten
//! wholesale on every change. There is no referential integrity between
//! lists: deleting a vendor leaves leads that point at it untouched.

pub mod blog;
pub mod categories;
pub mod leads;
pub mod logos;
pub mod products;
pub mod settings;
pub mod vendors;

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{MarketplaceError, MarketplaceResult};
use crate::models::{BlogPost, Lead, Product, Vendor, VendorLogo};
use crate::store::{JsonStore, StorageKey};

pub use blog::BlogDraft;
pub use leads::LeadPatch;
pub use logos::LogoDraft;
pub use products::{ProductDraft, ProductQuery, ALL_SOLUTIONS};
pub use vendors::{VendorDraft, VendorRegistration};

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Lowercase `s` and replace each whitespace run with `-`.
///
/// Edges are not trimmed, so surrounding whitespace becomes a dash too.
pub fn slugify(s: &str) -> String {
    WHITESPACE.replace_all(&s.to_lowercase(), "-").into_owned()
}

/// Fresh record id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Today's date as shown on blog posts and vendor cards.
pub fn today() -> String {
    chrono::Local::now().format("%d/%m/%Y").to_string()
}

/// Date and time as shown on leads.
pub fn now() -> String {
    chrono::Local::now().format("%d/%m/%Y, %H:%M:%S").to_string()
}

/// Counts shown on the admin OVERVIEW tab
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Overview {
    pub leads: usize,
    pub vendors: usize,
    pub products: usize,
}

/// A stored entity addressed by id.
pub trait Record: Serialize + DeserializeOwned {
    const KIND: &'static str;
    const KEY: StorageKey;

    fn id(&self) -> &str;

    /// Contents of the list before anything was saved
    fn seed() -> Vec<Self> {
        Vec::new()
    }
}

impl Record for Product {
    const KIND: &'static str = "Product";
    const KEY: StorageKey = StorageKey::Products;
    fn id(&self) -> &str {
        &self.id
    }
    fn seed() -> Vec<Self> {
        crate::store::seed::default_products()
    }
}

impl Record for Vendor {
    const KIND: &'static str = "Vendor";
    const KEY: StorageKey = StorageKey::Vendors;
    fn id(&self) -> &str {
        &self.id
    }
    fn seed() -> Vec<Self> {
        crate::store::seed::default_vendors()
    }
}

impl Record for Lead {
    const KIND: &'static str = "Lead";
    const KEY: StorageKey = StorageKey::Leads;
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for BlogPost {
    const KIND: &'static str = "Blog post";
    const KEY: StorageKey = StorageKey::Blogs;
    fn id(&self) -> &str {
        &self.id
    }
    fn seed() -> Vec<Self> {
        crate::store::seed::default_blogs()
    }
}

impl Record for VendorLogo {
    const KIND: &'static str = "Vendor logo";
    const KEY: StorageKey = StorageKey::VendorLogos;
    fn id(&self) -> &str {
        &self.id
    }
    fn seed() -> Vec<Self> {
        crate::store::seed::default_logos()
    }
}

/// Where a newly created record goes in its list
#[derive(Debug, Clone, Copy)]
pub enum Placement {
    Prepend,
    Append,
}

/// Entry point for every marketplace operation.
#[derive(Clone)]
pub struct Marketplace {
    store: Arc<JsonStore>,
}

impl Marketplace {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<JsonStore> {
        &self.store
    }

    /// Full list for `T`, seeding defaults on first read
    pub fn list<T: Record>(&self) -> MarketplaceResult<Vec<T>> {
        Ok(self.store.load_or_seed(T::KEY, T::seed)?)
    }

    /// Insert a new record or replace the one with the same id.
    ///
    /// `existing` says whether the caller is editing; editing an unknown id
    /// is an error rather than a silent insert.
    pub fn upsert<T: Record + Clone>(
        &self,
        record: T,
        existing: bool,
        placement: Placement,
    ) -> MarketplaceResult<T> {
        self.store.update(T::KEY, T::seed, |list: &mut Vec<T>| {
            if existing {
                let slot = list
                    .iter_mut()
                    .find(|r| r.id() == record.id())
                    .ok_or_else(|| MarketplaceError::not_found(T::KIND, record.id()))?;
                *slot = record.clone();
            } else {
                match placement {
                    Placement::Prepend => list.insert(0, record.clone()),
                    Placement::Append => list.push(record.clone()),
                }
            }
            Ok(record)
        })
    }

    /// Remove the record with `id`, returning it
    pub fn remove<T: Record>(&self, id: &str) -> MarketplaceResult<T> {
        self.store.update(T::KEY, T::seed, |list: &mut Vec<T>| {
            let index = list
                .iter()
                .position(|r| r.id() == id)
                .ok_or_else(|| MarketplaceError::not_found(T::KIND, id))?;
            Ok(list.remove(index))
        })
    }

    pub fn overview(&self) -> MarketplaceResult<Overview> {
        Ok(Overview {
            leads: self.list::<Lead>()?.len(),
            vendors: self.list::<Vendor>()?.len(),
            products: self.list::<Product>()?.len(),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::TempDir;

    pub(crate) fn marketplace() -> (TempDir, Marketplace) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        (dir, Marketplace::new(Arc::new(store)))
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Zoho CRM  Plus"), "zoho-crm-plus");
        assert_eq!(slugify("Tally\tPrime"), "tally-prime");
        assert_eq!(slugify("already-slugged"), "already-slugged");
    }

    #[test]
    fn test_slugify_keeps_edge_whitespace() {
        assert_eq!(slugify(" Zoho "), "-zoho-");
        assert_eq!(slugify("\n\tTally  "), "-tally-");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(new_id(), new_id());
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(today().len(), 10);
        assert!(now().contains(", "));
    }

    #[test]
    fn test_overview_counts_seeded_lists() {
        let (_dir, market) = marketplace();
        let overview = market.overview().unwrap();
        assert_eq!(overview.leads, 0);
        assert_eq!(overview.vendors, 1);
        assert_eq!(overview.products, crate::store::seed::default_products().len());
    }

    #[test]
    fn test_remove_unknown_id() {
        let (_dir, market) = marketplace();
        let err = market.remove::<Lead>("nope").unwrap_err();
        assert!(matches!(err, MarketplaceError::NotFound { kind: "Lead", .. }));
    }
}

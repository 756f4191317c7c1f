//! Catalog queries and product editing.

use serde::{Deserialize, Serialize};

use super::{new_id, slugify, Marketplace, Placement};
use crate::error::{MarketplaceError, MarketplaceResult, ValidationError};
use crate::models::{PricingType, Product};
use crate::store::seed::DEFAULT_PRODUCT_IMAGE;

/// Pseudo-category that matches every product
pub const ALL_SOLUTIONS: &str = "All Solutions";

const DEFAULT_FEATURE: &str = "Standard B2B Support";
const DEFAULT_RATING: f32 = 5.0;
const DEFAULT_VENDOR_RATING: f32 = 4.8;

/// Catalog filter used by the home page tabs and the products page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
    #[serde(alias = "q")]
    pub search: Option<String>,
    pub limit: Option<usize>,
}

impl ProductQuery {
    fn matches(&self, product: &Product) -> bool {
        let category_ok = match self.category.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(c) if c.eq_ignore_ascii_case(ALL_SOLUTIONS) => true,
            Some(c) => product.category.to_lowercase() == c.to_lowercase(),
        };

        let search_ok = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                product.name.to_lowercase().contains(&term)
                    || product.short_description.to_lowercase().contains(&term)
            }
        };

        category_ok && search_ok
    }
}

/// Product form from the admin console. Missing fields get catalog defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDraft {
    pub id: Option<String>,
    pub name: String,
    pub slug: Option<String>,
    pub short_description: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub pricing_type: Option<PricingType>,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub rating: Option<f32>,
    pub features: Option<Vec<String>>,
    pub vendor_name: String,
    pub vendor_rating: Option<f32>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn positive(value: Option<f32>) -> Option<f32> {
    value.filter(|v| *v > 0.0)
}

impl ProductDraft {
    /// Apply defaults and produce the record to store.
    ///
    /// Returns the product and whether it edits an existing one.
    pub fn into_product(self) -> Result<(Product, bool), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".into()));
        }

        let id = non_empty(self.id);
        let existing = id.is_some();
        let cover = non_empty(self.image);
        let images: Vec<String> = self
            .images
            .into_iter()
            .filter(|i| !i.trim().is_empty())
            .collect();

        let image = images
            .first()
            .cloned()
            .or_else(|| cover.clone())
            .unwrap_or_else(|| DEFAULT_PRODUCT_IMAGE.to_string());
        let images = if images.is_empty() {
            vec![cover.unwrap_or_else(|| DEFAULT_PRODUCT_IMAGE.to_string())]
        } else {
            images
        };

        let features = match self.features {
            Some(list) => list.into_iter().filter(|f| !f.trim().is_empty()).collect(),
            None => vec![DEFAULT_FEATURE.to_string()],
        };

        let product = Product {
            id: id.unwrap_or_else(new_id),
            slug: non_empty(self.slug).unwrap_or_else(|| slugify(&self.name)),
            name: self.name,
            short_description: self.short_description,
            description: self.description,
            category: self.category,
            price: self.price,
            pricing_type: self.pricing_type.unwrap_or_default(),
            image,
            images,
            rating: positive(self.rating).unwrap_or(DEFAULT_RATING),
            features,
            vendor_name: self.vendor_name,
            vendor_rating: positive(self.vendor_rating).unwrap_or(DEFAULT_VENDOR_RATING),
        };

        Ok((product, existing))
    }
}

impl Marketplace {
    pub fn list_products(&self) -> MarketplaceResult<Vec<Product>> {
        self.list()
    }

    /// Products matching `query`, in catalog order
    pub fn query_products(&self, query: &ProductQuery) -> MarketplaceResult<Vec<Product>> {
        let matching = self
            .list_products()?
            .into_iter()
            .filter(|p| query.matches(p));

        Ok(match query.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        })
    }

    pub fn product_by_slug(&self, slug: &str) -> MarketplaceResult<Product> {
        self.list_products()?
            .into_iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| MarketplaceError::not_found("Product", slug))
    }

    /// Other products in the same category
    pub fn related_products(&self, product: &Product) -> MarketplaceResult<Vec<Product>> {
        Ok(self
            .list_products()?
            .into_iter()
            .filter(|p| p.category == product.category && p.slug != product.slug)
            .collect())
    }

    pub fn save_product(&self, draft: ProductDraft) -> MarketplaceResult<Product> {
        let (product, existing) = draft.into_product()?;
        self.upsert(product, existing, Placement::Prepend)
    }

    pub fn delete_product(&self, id: &str) -> MarketplaceResult<Product> {
        self.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketplace::tests::marketplace;

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.into(),
            category: "Software".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_draft_defaults() {
        let (product, existing) = draft("Fresh Desk Pro").into_product().unwrap();
        assert!(!existing);
        assert_eq!(product.slug, "fresh-desk-pro");
        assert_eq!(product.image, DEFAULT_PRODUCT_IMAGE);
        assert_eq!(product.images, vec![DEFAULT_PRODUCT_IMAGE.to_string()]);
        assert_eq!(product.features, vec![DEFAULT_FEATURE.to_string()]);
        assert_eq!(product.rating, 5.0);
        assert_eq!(product.vendor_rating, 4.8);
        assert_eq!(product.pricing_type, PricingType::Subscription);
    }

    #[test]
    fn test_draft_image_precedence() {
        let mut d = draft("Cam");
        d.image = Some("cover.png".into());
        let (product, _) = d.clone().into_product().unwrap();
        assert_eq!(product.image, "cover.png");
        assert_eq!(product.images, vec!["cover.png".to_string()]);

        d.images = vec!["g1.png".into(), "g2.png".into()];
        let (product, _) = d.into_product().unwrap();
        assert_eq!(product.image, "g1.png");
        assert_eq!(product.images.len(), 2);
    }

    #[test]
    fn test_blank_features_dropped() {
        let mut d = draft("Router");
        d.features = Some(vec!["Wi-Fi 6".into(), "  ".into()]);
        let (product, _) = d.into_product().unwrap();
        assert_eq!(product.features, vec!["Wi-Fi 6".to_string()]);
    }

    #[test]
    fn test_name_required() {
        assert!(draft("  ").into_product().is_err());
    }

    #[test]
    fn test_query_category_and_search() {
        let (_dir, market) = marketplace();

        let all = market
            .query_products(&ProductQuery {
                category: Some(ALL_SOLUTIONS.into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(all.len(), market.list_products().unwrap().len());

        let telecom = market
            .query_products(&ProductQuery {
                category: Some("telecom".into()),
                ..Default::default()
            })
            .unwrap();
        assert!(!telecom.is_empty());
        assert!(telecom.iter().all(|p| p.category == "Telecom"));

        let search = market
            .query_products(&ProductQuery {
                search: Some("msme".into()),
                ..Default::default()
            })
            .unwrap();
        assert!(search.iter().any(|p| p.name == "Tally Prime"));

        let limited = market
            .query_products(&ProductQuery {
                limit: Some(4),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(limited.len(), 4);
    }

    #[test]
    fn test_save_prepends_and_edit_replaces() {
        let (_dir, market) = marketplace();
        let saved = market.save_product(draft("Freshworks CRM")).unwrap();
        assert_eq!(market.list_products().unwrap()[0].id, saved.id);

        let mut edit = draft("Freshworks CRM Suite");
        edit.id = Some(saved.id.clone());
        let before = market.list_products().unwrap().len();
        market.save_product(edit).unwrap();

        let products = market.list_products().unwrap();
        assert_eq!(products.len(), before);
        assert_eq!(market.product_by_slug("freshworks-crm-suite").unwrap().id, saved.id);
    }

    #[test]
    fn test_edit_unknown_id_is_not_found() {
        let (_dir, market) = marketplace();
        let mut edit = draft("Ghost");
        edit.id = Some("missing".into());
        let err = market.save_product(edit).unwrap_err();
        assert!(matches!(err, MarketplaceError::NotFound { .. }));
    }

    #[test]
    fn test_delete_and_related() {
        let (_dir, market) = marketplace();
        let product = market.product_by_slug("zoho-crm-plus").unwrap();
        let related = market.related_products(&product).unwrap();
        assert!(related.iter().all(|p| p.category == "Software" && p.slug != product.slug));

        market.delete_product(&product.id).unwrap();
        assert!(market.product_by_slug("zoho-crm-plus").is_err());
    }
}

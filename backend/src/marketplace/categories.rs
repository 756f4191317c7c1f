use super::{Marketplace, ALL_SOLUTIONS};
use crate::error::{MarketplaceError, MarketplaceResult, ValidationError};
use crate::store::seed::default_categories;
use crate::store::StorageKey;

impl Marketplace {
    pub fn list_categories(&self) -> MarketplaceResult<Vec<String>> {
        Ok(self
            .store()
            .load_or_seed(StorageKey::Categories, default_categories)?)
    }

    /// Category tabs for the catalog, led by the catch-all entry
    pub fn catalog_categories(&self) -> MarketplaceResult<Vec<String>> {
        let mut tabs = vec![ALL_SOLUTIONS.to_string()];
        tabs.extend(self.list_categories()?);
        Ok(tabs)
    }

    /// Add a category. Existing names (any case) are left as they are.
    pub fn add_category(&self, name: &str) -> MarketplaceResult<Vec<String>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("category".into()).into());
        }

        self.store().update(
            StorageKey::Categories,
            default_categories,
            |categories: &mut Vec<String>| {
                if !categories.iter().any(|c| c.eq_ignore_ascii_case(name)) {
                    categories.push(name.to_string());
                }
                Ok::<_, MarketplaceError>(categories.clone())
            },
        )
    }

    pub fn remove_category(&self, name: &str) -> MarketplaceResult<Vec<String>> {
        self.store().update(
            StorageKey::Categories,
            default_categories,
            |categories: &mut Vec<String>| {
                let index = categories
                    .iter()
                    .position(|c| c == name)
                    .ok_or_else(|| MarketplaceError::not_found("Category", name))?;
                categories.remove(index);
                Ok(categories.clone())
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::marketplace::tests::marketplace;

    #[test]
    fn test_duplicate_category_not_added_twice() {
        let (_dir, market) = marketplace();
        let first = market.add_category("Cloud").unwrap();
        let second = market.add_category(" cloud ").unwrap();
        assert_eq!(first, second);
        assert_eq!(second.iter().filter(|c| c.eq_ignore_ascii_case("cloud")).count(), 1);
    }

    #[test]
    fn test_blank_category_rejected() {
        let (_dir, market) = marketplace();
        assert!(market.add_category("   ").is_err());
    }

    #[test]
    fn test_catalog_tabs_and_remove() {
        let (_dir, market) = marketplace();
        let tabs = market.catalog_categories().unwrap();
        assert_eq!(tabs[0], "All Solutions");
        assert_eq!(tabs.len(), 5);

        let remaining = market.remove_category("Telecom").unwrap();
        assert!(!remaining.contains(&"Telecom".to_string()));
        assert!(market.remove_category("Telecom").is_err());
    }
}

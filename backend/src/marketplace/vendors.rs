//! Supplier records: admin editing and public self-registration.

use serde::{Deserialize, Serialize};

use super::{new_id, today, Marketplace, Placement};
use crate::error::{MarketplaceResult, ValidationError};
use crate::models::Vendor;
use crate::validation::{validate_form, FormSchema};

/// Category recorded when the registration form leaves it blank
pub const DEFAULT_VENDOR_CATEGORY: &str = "SOFTWARE";

/// Vendor form from the admin console.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VendorDraft {
    pub id: Option<String>,
    pub name: String,
    pub company_name: String,
    pub mobile: String,
    pub email: String,
    pub location: String,
    pub category: String,
    pub product_expertise: String,
    pub custom_box: String,
    pub verified: bool,
    pub date_joined: Option<String>,
}

/// Public supplier application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VendorRegistration {
    pub name: String,
    pub company_name: String,
    pub mobile: String,
    pub email: String,
    pub location: String,
    pub category: String,
    pub product_expertise: String,
    pub custom_box: String,
}

impl Marketplace {
    pub fn list_vendors(&self) -> MarketplaceResult<Vec<Vendor>> {
        self.list()
    }

    pub fn vendor(&self, id: &str) -> MarketplaceResult<Option<Vendor>> {
        Ok(self.list_vendors()?.into_iter().find(|v| v.id == id))
    }

    pub fn save_vendor(&self, draft: VendorDraft) -> MarketplaceResult<Vendor> {
        if draft.company_name.trim().is_empty() {
            return Err(ValidationError::MissingField("companyName".into()).into());
        }

        let id = draft.id.filter(|id| !id.trim().is_empty());
        let existing = id.is_some();
        let vendor = Vendor {
            id: id.unwrap_or_else(new_id),
            name: draft.name,
            company_name: draft.company_name,
            mobile: draft.mobile,
            email: draft.email,
            location: draft.location,
            category: draft.category,
            product_expertise: draft.product_expertise,
            custom_box: draft.custom_box,
            verified: draft.verified,
            date_joined: draft.date_joined,
        };
        self.upsert(vendor, existing, Placement::Prepend)
    }

    /// Record a public application as an unverified vendor
    pub fn register_vendor(&self, form: VendorRegistration) -> MarketplaceResult<Vendor> {
        validate_form(FormSchema::VendorRegistration, &form)?;

        let category = if form.category.trim().is_empty() {
            DEFAULT_VENDOR_CATEGORY.to_string()
        } else {
            form.category
        };

        let vendor = Vendor {
            id: new_id(),
            name: form.name,
            company_name: form.company_name,
            mobile: form.mobile,
            email: form.email,
            location: form.location,
            category,
            product_expertise: form.product_expertise,
            custom_box: form.custom_box,
            verified: false,
            date_joined: Some(today()),
        };
        tracing::info!(vendor = %vendor.company_name, "vendor registered");
        self.upsert(vendor, false, Placement::Prepend)
    }

    pub fn delete_vendor(&self, id: &str) -> MarketplaceResult<Vendor> {
        self.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarketplaceError;
    use crate::marketplace::tests::marketplace;

    fn registration() -> VendorRegistration {
        VendorRegistration {
            name: "Priya Nair".into(),
            company_name: "Kochi Networks".into(),
            mobile: "9000000001".into(),
            email: "priya@kochinet.in".into(),
            location: "Kochi".into(),
            category: String::new(),
            product_expertise: "SD-WAN".into(),
            custom_box: String::new(),
        }
    }

    #[test]
    fn test_registration_is_unverified_and_dated() {
        let (_dir, market) = marketplace();
        let vendor = market.register_vendor(registration()).unwrap();

        assert!(!vendor.verified);
        assert_eq!(vendor.category, DEFAULT_VENDOR_CATEGORY);
        assert_eq!(vendor.date_joined.as_deref(), Some(today().as_str()));

        let vendors = market.list_vendors().unwrap();
        assert_eq!(vendors[0].id, vendor.id);
        assert_eq!(vendors.len(), 2);
    }

    #[test]
    fn test_registration_requires_fields() {
        let (_dir, market) = marketplace();
        let mut form = registration();
        form.product_expertise = " ".into();
        let err = market.register_vendor(form).unwrap_err();
        assert!(matches!(err, MarketplaceError::Validation(_)));
        assert_eq!(market.list_vendors().unwrap().len(), 1);
    }

    #[test]
    fn test_admin_save_requires_company() {
        let (_dir, market) = marketplace();
        let err = market.save_vendor(VendorDraft::default()).unwrap_err();
        assert!(matches!(err, MarketplaceError::Validation(_)));
    }

    #[test]
    fn test_admin_edit_and_delete() {
        let (_dir, market) = marketplace();
        let draft = VendorDraft {
            id: Some("1".into()),
            company_name: "Nexus Solutions Pvt Ltd".into(),
            verified: true,
            ..Default::default()
        };
        market.save_vendor(draft).unwrap();
        let vendor = market.vendor("1").unwrap().unwrap();
        assert_eq!(vendor.company_name, "Nexus Solutions Pvt Ltd");

        market.delete_vendor("1").unwrap();
        assert!(market.vendor("1").unwrap().is_none());
    }
}

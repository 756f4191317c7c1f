//! Domain models for the marketplace.
//!
//! Records are stored as plain JSON arrays, camelCase on the wire:
//!
//! - [`Product`] - Catalog entry with gallery, features and vendor rating
//! - [`Vendor`] - Supplier in the marketplace
//! - [`Lead`] - A buyer requirement with BANT fields and intent score
//! - [`BlogPost`] - Insight article
//! - [`VendorLogo`] - Logo shown in the home page marquee
//! - [`SiteSettings`] - Branding, SEO, notification and social configuration
//! - [`User`] - Storefront account
//! - [`BantAnalysis`] - Result of the lead scoring call

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Product
// =============================================================================

/// How a product is billed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PricingType {
    OneTime,
    #[default]
    Subscription,
    Usage,
}

/// A catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Free text, e.g. `₹5000/mo`.
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub pricing_type: PricingType,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub vendor_name: String,
    #[serde(default)]
    pub vendor_rating: f32,
}

impl Product {
    /// Images to show in the gallery, falling back to the cover image.
    pub fn gallery(&self) -> Vec<String> {
        if self.images.is_empty() {
            vec![self.image.clone()]
        } else {
            self.images.clone()
        }
    }
}

// =============================================================================
// Vendor
// =============================================================================

/// A supplier. Distinct from the site administrator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub company_name: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub product_expertise: String,
    #[serde(default)]
    pub custom_box: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_joined: Option<String>,
}

// =============================================================================
// Lead
// =============================================================================

/// Pipeline status shown in the admin lead table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum LeadStatus {
    Qualified,
    #[default]
    Pending,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Qualified => "Qualified",
            Self::Pending => "Pending",
        }
    }
}

/// A buyer requirement captured by the lead wizard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub contact_name: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub requirement: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub authority: String,
    #[serde(default)]
    pub need: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default)]
    pub remarks: String,
    /// Vendor the admin routed this lead to, if any.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub assigned_vendor_id: Option<String>,
    #[serde(default)]
    pub intent_score: Option<u8>,
}

/// Older blobs store "no vendor" as an empty string.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

// =============================================================================
// Blog & Logos
// =============================================================================

/// An insight article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub image: String,
}

/// A brand logo in the home page marquee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VendorLogo {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub image: String,
}

// =============================================================================
// Site Settings
// =============================================================================

/// Social profile links shown in the footer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SocialLinks {
    pub linkedin: String,
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            linkedin: "https://linkedin.com".into(),
            facebook: "https://facebook.com".into(),
            twitter: "https://twitter.com".into(),
            instagram: "https://instagram.com".into(),
        }
    }
}

/// Branding, SEO and notification configuration edited from the admin console.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    pub logo_text: String,
    pub logo_color: String,
    pub logo_image: String,
    pub favicon: String,
    pub whatsapp_api_key: String,
    pub whatsapp_instance_id: String,
    pub notify_admin_email: bool,
    #[serde(rename = "notifyAdminWhatsApp")]
    pub notify_admin_whatsapp: bool,
    pub notify_user_post: bool,
    pub notify_vendor_lead: bool,
    pub notify_user_login: bool,
    pub meta_description: String,
    pub meta_keywords: String,
    pub social_links: SocialLinks,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            logo_text: "BANTConfirm".into(),
            logo_color: "#2563eb".into(),
            logo_image: String::new(),
            favicon: "https://cdn-icons-png.flaticon.com/512/2092/2092063.png".into(),
            whatsapp_api_key: String::new(),
            whatsapp_instance_id: String::new(),
            notify_admin_email: true,
            notify_admin_whatsapp: false,
            notify_user_post: true,
            notify_vendor_lead: true,
            notify_user_login: true,
            meta_description: "Verified B2B marketplace for MSMEs and Enterprises. Software, IT Hardware, and Telecom solutions qualified with AI-driven BANT matching.".into(),
            meta_keywords: "B2B Marketplace, India IT, MSME Software, BANT Qualification, Enterprise IT Procurement".into(),
            social_links: SocialLinks::default(),
        }
    }
}

// =============================================================================
// Users
// =============================================================================

/// A storefront account as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub mobile: String,
    pub email: String,
    #[serde(default)]
    pub location: String,
    /// Hex SHA-256 of `salt || password`.
    pub password_hash: String,
    pub salt: String,
}

/// The account fields safe to hand to a browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub company_name: String,
    pub mobile: String,
    pub email: String,
    pub location: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            company_name: user.company_name.clone(),
            mobile: user.mobile.clone(),
            email: user.email.clone(),
            location: user.location.clone(),
        }
    }
}

// =============================================================================
// BANT Analysis
// =============================================================================

/// Qualification verdict from the scoring call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BantStatus {
    Qualified,
    #[default]
    Partial,
    Unqualified,
}

impl BantStatus {
    /// Lenient parse; anything unrecognized is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "qualified" => Some(Self::Qualified),
            "partial" | "partially qualified" => Some(Self::Partial),
            "unqualified" | "not qualified" | "disqualified" => Some(Self::Unqualified),
            _ => None,
        }
    }
}

/// Summary used when the scoring call cannot produce one.
pub const FALLBACK_SUMMARY: &str = "Analysis currently unavailable.";

/// Intent score used when the scoring call cannot produce one.
pub const FALLBACK_INTENT_SCORE: u8 = 50;

/// Scored BANT qualification of a lead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BantAnalysis {
    /// Purchase readiness, 0-100.
    pub intent_score: u8,
    pub bant_status: BantStatus,
    pub summary: String,
    /// Information the buyer did not provide.
    #[serde(default)]
    pub gaps: Vec<String>,
}

impl BantAnalysis {
    /// Fixed record returned whenever scoring fails.
    pub fn fallback() -> Self {
        Self {
            intent_score: FALLBACK_INTENT_SCORE,
            bant_status: BantStatus::Partial,
            summary: FALLBACK_SUMMARY.to_string(),
            gaps: Vec::new(),
        }
    }

    pub fn lead_status(&self) -> LeadStatus {
        match self.bant_status {
            BantStatus::Qualified => LeadStatus::Qualified,
            _ => LeadStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_reads_stored_blob() {
        let value = json!({
            "id": "1",
            "name": "Zoho CRM",
            "slug": "zoho-crm",
            "shortDescription": "CRM for growing teams",
            "description": "",
            "category": "Software",
            "price": "₹1200/mo",
            "pricingType": "one-time",
            "image": "a.png",
            "images": [],
            "rating": 4.5,
            "features": ["Pipelines"],
            "vendorName": "Zoho",
            "vendorRating": 4.8
        });
        let product: Product = serde_json::from_value(value).unwrap();
        assert_eq!(product.pricing_type, PricingType::OneTime);
        assert_eq!(product.gallery(), vec!["a.png".to_string()]);
    }

    #[test]
    fn test_lead_status_wire_format() {
        let lead = Lead {
            id: "1".into(),
            contact_name: "Rahul".into(),
            status: LeadStatus::Qualified,
            ..Default::default()
        };
        let value = serde_json::to_value(&lead).unwrap();
        assert_eq!(value["status"], "Qualified");
        assert_eq!(value["contactName"], "Rahul");
        assert!(value["assignedVendorId"].is_null());
    }

    #[test]
    fn test_empty_vendor_id_is_unassigned() {
        let lead: Lead = serde_json::from_value(json!({
            "id": "7",
            "contactName": "Asha",
            "assignedVendorId": ""
        }))
        .unwrap();
        assert_eq!(lead.assigned_vendor_id, None);
        assert_eq!(lead.status, LeadStatus::Pending);
    }

    #[test]
    fn test_settings_tolerate_partial_blob() {
        let settings: SiteSettings =
            serde_json::from_value(json!({ "logoText": "Acme", "notifyAdminWhatsApp": true })).unwrap();
        assert_eq!(settings.logo_text, "Acme");
        assert!(settings.notify_admin_whatsapp);
        assert_eq!(settings.logo_color, "#2563eb");
        assert_eq!(settings.social_links.linkedin, "https://linkedin.com");
    }

    #[test]
    fn test_bant_status_parse() {
        assert_eq!(BantStatus::parse(" Qualified "), Some(BantStatus::Qualified));
        assert_eq!(BantStatus::parse("unqualified"), Some(BantStatus::Unqualified));
        assert_eq!(BantStatus::parse("maybe"), None);
    }

    #[test]
    fn test_fallback_analysis() {
        let fallback = BantAnalysis::fallback();
        assert_eq!(fallback.intent_score, 50);
        assert_eq!(fallback.bant_status, BantStatus::Partial);
        assert_eq!(fallback.summary, "Analysis currently unavailable.");
        assert!(fallback.gaps.is_empty());
        assert_eq!(fallback.lead_status(), LeadStatus::Pending);
    }
}

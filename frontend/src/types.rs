//! Common types used across the frontend application.
//!
//! These mirror the JSON the backend serves so pages can deserialize
//! responses directly.
//!
//! # Categories
//!
//! - **Catalog Types** - Products, blog posts, vendor logos
//! - **Pipeline Types** - Leads, vendors, BANT analysis
//! - **Account Types** - Sessions and user profiles
//! - **Form Types** - Payloads the pages send
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Catalog Types
// =============================================================================

/// Billing model of a product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingType {
    OneTime,
    #[default]
    Subscription,
    Usage,
}

impl PricingType {
    pub const ALL: [PricingType; 3] = [Self::OneTime, Self::Subscription, Self::Usage];

    /// Wire value, also used as `<option>` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneTime => "one-time",
            Self::Subscription => "subscription",
            Self::Usage => "usage",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "one-time" => Self::OneTime,
            "usage" => Self::Usage,
            _ => Self::Subscription,
        }
    }
}

/// A catalog entry.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub short_description: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub pricing_type: PricingType,
    pub image: String,
    pub images: Vec<String>,
    pub rating: f32,
    pub features: Vec<String>,
    pub vendor_name: String,
    pub vendor_rating: f32,
}

impl Product {
    /// Images for the detail gallery, falling back to the main image.
    pub fn gallery(&self) -> Vec<String> {
        if self.images.is_empty() {
            vec![self.image.clone()]
        } else {
            self.images.clone()
        }
    }
}

/// Product page payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub product: Product,
    pub related: Vec<Product>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub date: String,
    pub image: String,
}

/// Partner logo for the home page marquee.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorLogo {
    pub id: String,
    pub name: String,
    pub image: String,
}

// =============================================================================
// Settings Types
// =============================================================================

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub linkedin: String,
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
}

impl SocialLinks {
    /// Platform name and URL, in footer order.
    pub fn entries(&self) -> [(&'static str, String); 4] {
        [
            ("linkedin", self.linkedin.clone()),
            ("facebook", self.facebook.clone()),
            ("twitter", self.twitter.clone()),
            ("instagram", self.instagram.clone()),
        ]
    }
}

/// Site-wide branding, notification and SEO settings.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
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

impl SiteSettings {
    /// Brand text split for the two-tone logo: first four characters, rest.
    pub fn logo_parts(&self) -> (String, String) {
        let text = if self.logo_text.is_empty() {
            crate::APP_NAME
        } else {
            self.logo_text.as_str()
        };
        let head: String = text.chars().take(4).collect();
        let tail: String = text.chars().skip(4).collect();
        (head, tail)
    }
}

// =============================================================================
// Pipeline Types
// =============================================================================

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub company_name: String,
    pub mobile: String,
    pub email: String,
    pub location: String,
    pub category: String,
    pub product_expertise: String,
    pub custom_box: String,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_joined: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
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

    /// Get CSS class for the status badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Qualified => "badge badge-success",
            Self::Pending => "badge badge-warning",
        }
    }
}

/// A captured buyer requirement.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Lead {
    pub id: String,
    pub contact_name: String,
    pub company_name: String,
    pub location: String,
    pub mobile: String,
    pub email: String,
    pub requirement: String,
    pub budget: String,
    pub authority: String,
    pub need: String,
    pub timeline: String,
    pub date: String,
    pub status: LeadStatus,
    pub remarks: String,
    pub assigned_vendor_id: Option<String>,
    pub intent_score: Option<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BantStatus {
    Qualified,
    #[default]
    Partial,
    Unqualified,
}

/// AI verdict on a lead.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BantAnalysis {
    pub intent_score: u8,
    pub bant_status: BantStatus,
    pub summary: String,
    pub gaps: Vec<String>,
}

/// Wizard submission outcome.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Submission {
    pub lead: Lead,
    pub analysis: BantAnalysis,
}

/// Record counts for the admin overview.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Overview {
    pub leads: usize,
    pub vendors: usize,
    pub products: usize,
}

/// Change notice relayed from the backend over SSE.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StoreEvent {
    pub key: String,
    pub change: String,
    pub at: String,
}

// =============================================================================
// Account Types
// =============================================================================

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: String,
    pub company_name: String,
    pub mobile: String,
    pub email: String,
    pub location: String,
}

impl UserProfile {
    /// First word of the name, for the header greeting.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Session issued by the backend on login or signup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: Role,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

// =============================================================================
// Form Types
// =============================================================================

/// Lead wizard form state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadDraft {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub location: String,
    pub company_name: String,
    pub industry: String,
    pub budget: String,
    pub authority: String,
    pub need: String,
    pub timeline: String,
}

impl Default for LeadDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            mobile: String::new(),
            location: String::new(),
            company_name: String::new(),
            industry: String::new(),
            budget: String::new(),
            authority: "Not Provided".to_string(),
            need: String::new(),
            timeline: "Not Provided".to_string(),
        }
    }
}

impl LeadDraft {
    /// Copy contact fields from the signed-in user.
    pub fn prefill(&mut self, user: &UserProfile) {
        self.name = user.name.clone();
        self.email = user.email.clone();
        self.mobile = user.mobile.clone();
        self.company_name = user.company_name.clone();
        self.location = user.location.clone();
    }

    /// Contact details and the requirement are mandatory.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.mobile, &self.need]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub name: String,
    pub company_name: String,
    pub mobile: String,
    pub email: String,
    pub location: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
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

/// Admin edits to a lead; `None` leaves the field unchanged.
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_vendor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
}

/// Admin product editor payload. No `id` creates a new product.
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub short_description: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub pricing_type: PricingType,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub rating: Option<f32>,
    pub features: Option<Vec<String>>,
    pub vendor_name: String,
    pub vendor_rating: Option<f32>,
}

impl From<&Product> for ProductDraft {
    fn from(p: &Product) -> Self {
        Self {
            id: Some(p.id.clone()),
            name: p.name.clone(),
            slug: Some(p.slug.clone()),
            short_description: p.short_description.clone(),
            description: p.description.clone(),
            category: p.category.clone(),
            price: p.price.clone(),
            pricing_type: p.pricing_type,
            image: Some(p.image.clone()),
            images: p.images.clone(),
            rating: Some(p.rating),
            features: Some(p.features.clone()),
            vendor_name: p.vendor_name.clone(),
            vendor_rating: Some(p.vendor_rating),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub image: String,
}

impl From<&BlogPost> for BlogDraft {
    fn from(b: &BlogPost) -> Self {
        Self {
            id: Some(b.id.clone()),
            title: b.title.clone(),
            slug: Some(b.slug.clone()),
            excerpt: b.excerpt.clone(),
            content: b.content.clone(),
            author: b.author.clone(),
            category: Some(b.category.clone()),
            date: Some(b.date.clone()),
            image: b.image.clone(),
        }
    }
}

/// Admin vendor editor payload. No `id` creates a new vendor.
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_joined: Option<String>,
}

impl From<&Vendor> for VendorDraft {
    fn from(v: &Vendor) -> Self {
        Self {
            id: Some(v.id.clone()),
            name: v.name.clone(),
            company_name: v.company_name.clone(),
            mobile: v.mobile.clone(),
            email: v.email.clone(),
            location: v.location.clone(),
            category: v.category.clone(),
            product_expertise: v.product_expertise.clone(),
            custom_box: v.custom_box.clone(),
            verified: v.verified,
            date_joined: v.date_joined.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default, Serialize)]
pub struct LogoDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub image: String,
}

/// Catalog filter sent as query string.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub limit: Option<usize>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AppError {
    /// Backend answered with an error status.
    Api { status: u16, message: String },
    /// Network/HTTP error.
    Network(String),
    /// Browser API failed (storage, files, downloads).
    Browser(String),
    /// Invalid data format.
    Validation(String),
}

impl AppError {
    /// True when the backend rejected the session token.
    pub fn is_auth(&self) -> bool {
        matches!(self, AppError::Api { status: 401 | 403, .. })
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Api { message, .. } => write!(f, "{}", message),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Browser(msg) => write!(f, "Browser error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_deserialization() {
        let json = r#"{
            "id": "7f1c",
            "contactName": "Rahul Sharma",
            "companyName": "Acme Tech",
            "location": "Noida, UP",
            "mobile": "9876543210",
            "email": "rahul@company.in",
            "requirement": "CRM for 40 seats",
            "budget": "2-5 Lakhs",
            "authority": "Decider",
            "need": "CRM for 40 seats",
            "timeline": "1 Month",
            "date": "12/03/2025, 10:15:00",
            "status": "Qualified",
            "remarks": "Strong intent",
            "intentScore": 82
        }"#;

        let lead: Lead = serde_json::from_str(json).unwrap();
        assert_eq!(lead.status, LeadStatus::Qualified);
        assert_eq!(lead.intent_score, Some(82));
        assert_eq!(lead.assigned_vendor_id, None);
    }

    #[test]
    fn test_settings_keep_whatsapp_key_casing() {
        let settings = SiteSettings {
            notify_admin_whatsapp: true,
            ..Default::default()
        };
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value["notifyAdminWhatsApp"], true);
        assert!(value.get("notifyAdminWhatsapp").is_none());
    }

    #[test]
    fn test_logo_parts_split_after_four_chars() {
        let settings = SiteSettings {
            logo_text: "BANTConfirm".into(),
            ..Default::default()
        };
        assert_eq!(
            settings.logo_parts(),
            ("BANT".to_string(), "Confirm".to_string())
        );
    }

    #[test]
    fn test_new_product_draft_omits_id() {
        let draft = ProductDraft {
            name: "Freshdesk".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["pricingType"], "subscription");
    }

    #[test]
    fn test_lead_patch_sends_only_changes() {
        let patch = LeadPatch {
            remarks: Some("Called twice".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, serde_json::json!({ "remarks": "Called twice" }));
    }

    #[test]
    fn test_draft_completeness() {
        let mut draft = LeadDraft::default();
        assert!(!draft.is_complete());
        draft.prefill(&UserProfile {
            name: "Rahul Sharma".into(),
            email: "rahul@company.in".into(),
            mobile: "9876543210".into(),
            ..Default::default()
        });
        assert!(!draft.is_complete());
        draft.need = "Leased line".into();
        assert!(draft.is_complete());
    }

    #[test]
    fn test_api_error_display_is_backend_message() {
        let err = AppError::Api {
            status: 409,
            message: "Email already registered".into(),
        };
        assert_eq!(err.to_string(), "Email already registered");
        assert!(!err.is_auth());
        assert!(AppError::Api { status: 401, message: String::new() }.is_auth());
    }
}

use serde::{Deserialize, Serialize};

use super::{new_id, Marketplace, Placement};
use crate::error::{MarketplaceResult, ValidationError};
use crate::models::VendorLogo;

/// Logo editor form. `image` is a URL or a data URL from an upload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoDraft {
    pub id: Option<String>,
    pub name: String,
    pub image: String,
}

impl Marketplace {
    pub fn list_logos(&self) -> MarketplaceResult<Vec<VendorLogo>> {
        self.list()
    }

    /// New logos join the end of the marquee
    pub fn save_logo(&self, draft: LogoDraft) -> MarketplaceResult<VendorLogo> {
        if draft.image.trim().is_empty() {
            return Err(ValidationError::MissingField("image".into()).into());
        }

        let id = draft.id.filter(|id| !id.trim().is_empty());
        let existing = id.is_some();
        let logo = VendorLogo {
            id: id.unwrap_or_else(new_id),
            name: draft.name,
            image: draft.image,
        };
        self.upsert(logo, existing, Placement::Append)
    }

    pub fn delete_logo(&self, id: &str) -> MarketplaceResult<VendorLogo> {
        self.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketplace::tests::marketplace;

    #[test]
    fn test_logo_appended() {
        let (_dir, market) = marketplace();
        let logo = market
            .save_logo(LogoDraft {
                name: "Infosys".into(),
                image: "data:image/png;base64,AAAA".into(),
                ..Default::default()
            })
            .unwrap();
        let logos = market.list_logos().unwrap();
        assert_eq!(logos.last().map(|l| l.id.as_str()), Some(logo.id.as_str()));
    }

    #[test]
    fn test_logo_requires_image() {
        let (_dir, market) = marketplace();
        let err = market.save_logo(LogoDraft {
            name: "Blank".into(),
            ..Default::default()
        });
        assert!(err.is_err());
    }

    #[test]
    fn test_logo_delete() {
        let (_dir, market) = marketplace();
        market.delete_logo("d1").unwrap();
        assert!(market.list_logos().unwrap().iter().all(|l| l.id != "d1"));
    }
}

use super::Marketplace;
use crate::error::MarketplaceResult;
use crate::models::SiteSettings;
use crate::store::StorageKey;

impl Marketplace {
    pub fn settings(&self) -> MarketplaceResult<SiteSettings> {
        Ok(self
            .store()
            .load_or_seed(StorageKey::SiteSettings, SiteSettings::default)?)
    }

    /// Replace the whole settings object
    pub fn update_settings(&self, settings: SiteSettings) -> MarketplaceResult<SiteSettings> {
        self.store().save(StorageKey::SiteSettings, &settings)?;
        tracing::info!(logo = %settings.logo_text, "site settings updated");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use crate::marketplace::tests::marketplace;

    #[test]
    fn test_settings_roundtrip() {
        let (_dir, market) = marketplace();
        let mut settings = market.settings().unwrap();
        assert_eq!(settings.logo_text, "BANTConfirm");

        settings.logo_text = "Acme Leads".into();
        settings.notify_admin_whatsapp = true;
        market.update_settings(settings).unwrap();

        let reloaded = market.settings().unwrap();
        assert_eq!(reloaded.logo_text, "Acme Leads");
        assert!(reloaded.notify_admin_whatsapp);
    }
}

//! Lead pipeline: listing, vendor routing, remarks, export.

use serde::{Deserialize, Serialize};

use super::{Marketplace, Placement};
use crate::error::{MarketplaceError, MarketplaceResult, ValidationError};
use crate::export::{export_file_name, leads_to_csv};
use crate::models::{Lead, LeadStatus};

/// Admin edits to a lead. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadPatch {
    /// Empty string unassigns
    pub assigned_vendor_id: Option<String>,
    pub remarks: Option<String>,
    pub status: Option<LeadStatus>,
}

/// Rendered CSV ready to download
#[derive(Debug, Clone)]
pub struct LeadExport {
    pub file_name: String,
    pub csv: String,
}

impl Marketplace {
    pub fn list_leads(&self) -> MarketplaceResult<Vec<Lead>> {
        self.list()
    }

    /// Store a newly captured lead at the top of the pipeline
    pub fn add_lead(&self, lead: Lead) -> MarketplaceResult<Lead> {
        self.upsert(lead, false, Placement::Prepend)
    }

    pub fn update_lead(&self, id: &str, patch: LeadPatch) -> MarketplaceResult<Lead> {
        let assigned = match patch.assigned_vendor_id {
            Some(vendor_id) if vendor_id.trim().is_empty() => Some(None),
            Some(vendor_id) => {
                if self.vendor(&vendor_id)?.is_none() {
                    return Err(ValidationError::InvalidValue {
                        field: "assignedVendorId".into(),
                        message: format!("no vendor with id {}", vendor_id),
                    }
                    .into());
                }
                Some(Some(vendor_id))
            }
            None => None,
        };

        self.store().update(
            crate::store::StorageKey::Leads,
            Vec::new,
            |leads: &mut Vec<Lead>| {
                let lead = leads
                    .iter_mut()
                    .find(|l| l.id == id)
                    .ok_or_else(|| MarketplaceError::not_found("Lead", id))?;

                if let Some(vendor) = assigned {
                    lead.assigned_vendor_id = vendor;
                }
                if let Some(remarks) = patch.remarks {
                    lead.remarks = remarks;
                }
                if let Some(status) = patch.status {
                    lead.status = status;
                }
                Ok(lead.clone())
            },
        )
    }

    pub fn delete_lead(&self, id: &str) -> MarketplaceResult<Lead> {
        self.remove(id)
    }

    /// CSV of every lead with vendor names resolved
    pub fn export_leads(&self) -> MarketplaceResult<LeadExport> {
        let leads = self.list_leads()?;
        let vendors = self.list_vendors()?;
        let csv = leads_to_csv(&leads, &vendors)?;
        Ok(LeadExport {
            file_name: export_file_name(),
            csv,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use crate::marketplace::tests::marketplace;

    fn lead(id: &str) -> Lead {
        Lead {
            id: id.into(),
            contact_name: "Rahul Sharma".into(),
            requirement: "CRM for 20 users".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_leads_are_prepended() {
        let (_dir, market) = marketplace();
        market.add_lead(lead("a")).unwrap();
        market.add_lead(lead("b")).unwrap();
        let ids: Vec<_> = market.list_leads().unwrap().into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_assign_and_unassign_vendor() {
        let (_dir, market) = marketplace();
        market.add_lead(lead("a")).unwrap();

        let updated = market
            .update_lead(
                "a",
                LeadPatch {
                    assigned_vendor_id: Some("1".into()),
                    remarks: Some("Call on Monday".into()),
                    status: Some(LeadStatus::Qualified),
                },
            )
            .unwrap();
        assert_eq!(updated.assigned_vendor_id.as_deref(), Some("1"));
        assert_eq!(updated.remarks, "Call on Monday");
        assert_eq!(updated.status, LeadStatus::Qualified);

        let updated = market
            .update_lead(
                "a",
                LeadPatch {
                    assigned_vendor_id: Some(String::new()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.assigned_vendor_id, None);
        assert_eq!(updated.remarks, "Call on Monday");
    }

    #[test]
    fn test_assign_unknown_vendor_rejected() {
        let (_dir, market) = marketplace();
        market.add_lead(lead("a")).unwrap();
        let err = market
            .update_lead(
                "a",
                LeadPatch {
                    assigned_vendor_id: Some("ghost".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, MarketplaceError::Validation(_)));
    }

    #[test]
    fn test_delete_lead_removes_it() {
        let (_dir, market) = marketplace();
        market.add_lead(lead("a")).unwrap();
        market.delete_lead("a").unwrap();
        assert!(market.list_leads().unwrap().is_empty());
        assert!(market.delete_lead("a").is_err());
    }

    #[test]
    fn test_export_without_leads() {
        let (_dir, market) = marketplace();
        let err = market.export_leads().unwrap_err();
        assert!(matches!(err, MarketplaceError::Export(ExportError::NoLeads)));
    }

    #[test]
    fn test_export_resolves_vendor() {
        let (_dir, market) = marketplace();
        let mut assigned = lead("a");
        assigned.assigned_vendor_id = Some("1".into());
        market.add_lead(assigned).unwrap();

        let export = market.export_leads().unwrap();
        assert!(export.file_name.starts_with("leads_export_"));
        assert!(export.csv.contains("\"Nexus Solutions\""));
    }
}

//! CSV export of the lead pipeline.
//!
//! Every field is quoted and embedded quotes are doubled, so requirement
//! text and remarks survive spreadsheet import intact.

use csv::{QuoteStyle, WriterBuilder};

use crate::error::{ExportError, ExportResult};
use crate::models::{Lead, Vendor};

/// Column order of the export
pub const HEADERS: [&str; 9] = [
    "Date",
    "Contact",
    "Company",
    "Email",
    "Mobile",
    "Requirement",
    "Status",
    "Remarks",
    "Assigned Vendor",
];

/// Shown when a lead has no vendor or its vendor no longer exists
pub const UNASSIGNED: &str = "Unassigned";

/// Download name, stamped with the current time in milliseconds
pub fn export_file_name() -> String {
    format!("leads_export_{}.csv", chrono::Utc::now().timestamp_millis())
}

fn vendor_name<'a>(lead: &Lead, vendors: &'a [Vendor]) -> &'a str {
    lead.assigned_vendor_id
        .as_deref()
        .and_then(|id| vendors.iter().find(|v| v.id == id))
        .map(|v| v.company_name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNASSIGNED)
}

/// Render `leads` as CSV, resolving assigned vendors by id.
pub fn leads_to_csv(leads: &[Lead], vendors: &[Vendor]) -> ExportResult<String> {
    if leads.is_empty() {
        return Err(ExportError::NoLeads);
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADERS)?;
    for lead in leads {
        writer.write_record([
            lead.date.as_str(),
            lead.contact_name.as_str(),
            lead.company_name.as_str(),
            lead.email.as_str(),
            lead.mobile.as_str(),
            lead.requirement.as_str(),
            lead.status.as_str(),
            lead.remarks.as_str(),
            vendor_name(lead, vendors),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Buffer(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeadStatus;

    fn lead(requirement: &str, vendor: Option<&str>) -> Lead {
        Lead {
            id: "1".into(),
            contact_name: "Rahul Sharma".into(),
            company_name: "Sharma Traders".into(),
            email: "rahul@sharma.in".into(),
            mobile: "9876543210".into(),
            requirement: requirement.into(),
            date: "19/10/2026, 10:00:00".into(),
            status: LeadStatus::Qualified,
            remarks: "Ready to buy".into(),
            assigned_vendor_id: vendor.map(String::from),
            ..Default::default()
        }
    }

    fn nexus() -> Vendor {
        Vendor {
            id: "v1".into(),
            company_name: "Nexus Solutions".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_export_rejected() {
        let err = leads_to_csv(&[], &[]).unwrap_err();
        assert_eq!(err.to_string(), "No leads to download");
    }

    #[test]
    fn test_header_and_row_are_quoted() {
        let csv = leads_to_csv(&[lead("CRM", Some("v1"))], &[nexus()]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            r#""Date","Contact","Company","Email","Mobile","Requirement","Status","Remarks","Assigned Vendor""#
        );
        assert_eq!(
            lines.next().unwrap(),
            r#""19/10/2026, 10:00:00","Rahul Sharma","Sharma Traders","rahul@sharma.in","9876543210","CRM","Qualified","Ready to buy","Nexus Solutions""#
        );
    }

    #[test]
    fn test_embedded_quotes_doubled() {
        let csv = leads_to_csv(&[lead(r#"Need a "rugged" laptop"#, None)], &[]).unwrap();
        assert!(csv.contains(r#""Need a ""rugged"" laptop""#));
    }

    #[test]
    fn test_missing_vendor_is_unassigned() {
        let csv = leads_to_csv(&[lead("CRM", Some("deleted"))], &[nexus()]).unwrap();
        assert!(csv.trim_end().ends_with("\"Unassigned\""));
    }

    #[test]
    fn test_file_name_shape() {
        let name = export_file_name();
        assert!(name.starts_with("leads_export_"));
        assert!(name.ends_with(".csv"));
    }
}

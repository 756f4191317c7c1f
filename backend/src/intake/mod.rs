//! Lead intake wizard.
//!
//! A buyer walks through three steps (contact, requirement, context) and
//! submits. Submission scores the draft, turns it into a [`Lead`] and stores
//! it at the top of the pipeline. Scoring never blocks a submission: when
//! the AI call fails the fallback analysis is recorded instead.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::ai::LeadScorer;
use crate::error::{MarketplaceResult, ValidationError};
use crate::marketplace::{new_id, now, Marketplace};
use crate::models::{BantAnalysis, Lead, UserProfile, FALLBACK_INTENT_SCORE};
use crate::validation::{validate_form, FormSchema};

/// Authority and timeline before the buyer picks one
pub const NOT_PROVIDED: &str = "Not Provided";
/// Stored for blank budget, authority or timeline
pub const NOT_SPECIFIED: &str = "Not Specified";
/// Stored when no company is given
pub const DEFAULT_COMPANY: &str = "Individual / MSME";
/// Stored when no location is given
pub const DEFAULT_LOCATION: &str = "Pan-India";

pub const AUTHORITY_OPTIONS: [&str; 3] = ["Decider", "Evaluator", "Researcher"];
pub const TIMELINE_OPTIONS: [&str; 4] = ["Immediate", "1 Month", "1-3 Months", "Exploring"];

/// Wizard position. The form shows steps 1 to 3; step 4 is the result card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum WizardStep {
    #[default]
    Contact = 1,
    Requirement = 2,
    Context = 3,
    Complete = 4,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn next(self) -> Self {
        match self {
            Self::Contact => Self::Requirement,
            Self::Requirement => Self::Context,
            Self::Context | Self::Complete => Self::Complete,
        }
    }

    pub fn back(self) -> Self {
        match self {
            Self::Contact | Self::Requirement => Self::Contact,
            Self::Context => Self::Requirement,
            Self::Complete => Self::Context,
        }
    }
}

/// Form state of the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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
            authority: NOT_PROVIDED.to_string(),
            need: String::new(),
            timeline: NOT_PROVIDED.to_string(),
        }
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

impl LeadDraft {
    /// Copy contact fields from the signed-in user
    pub fn prefill(&mut self, user: &UserProfile) {
        self.name = user.name.clone();
        self.email = user.email.clone();
        self.mobile = user.mobile.clone();
        self.company_name = user.company_name.clone();
        self.location = user.location.clone();
    }

    /// Contact details and the requirement are mandatory.
    ///
    /// On failure the wizard goes back to [`WizardStep::Contact`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_form(FormSchema::LeadDraft, self).map_err(|_| ValidationError::IncompleteLead)
    }

    /// Build the stored lead from this draft and its analysis.
    ///
    /// A score of 0 is stored as the fallback score; the analysis returned
    /// to the wizard keeps the raw value.
    pub fn into_lead(self, analysis: &BantAnalysis) -> Lead {
        Lead {
            id: new_id(),
            contact_name: self.name,
            company_name: or_default(&self.company_name, DEFAULT_COMPANY),
            location: or_default(&self.location, DEFAULT_LOCATION),
            mobile: self.mobile,
            email: self.email,
            requirement: self.need.clone(),
            budget: or_default(&self.budget, NOT_SPECIFIED),
            authority: or_default(&self.authority, NOT_SPECIFIED),
            need: self.need,
            timeline: or_default(&self.timeline, NOT_SPECIFIED),
            date: now(),
            status: analysis.lead_status(),
            remarks: analysis.summary.clone(),
            assigned_vendor_id: None,
            intent_score: Some(stored_score(analysis.intent_score)),
        }
    }
}

fn stored_score(score: u8) -> u8 {
    if score == 0 {
        FALLBACK_INTENT_SCORE
    } else {
        score
    }
}

/// Outcome shown on the wizard's result card
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub lead: Lead,
    pub analysis: BantAnalysis,
}

/// Validate, score and store a wizard submission.
pub async fn submit<S: LeadScorer>(
    market: &Marketplace,
    scorer: &S,
    draft: LeadDraft,
) -> MarketplaceResult<Submission> {
    if let Err(e) = draft.validate() {
        warn!("lead submission rejected: incomplete contact details");
        return Err(e.into());
    }

    let analysis = scorer.score_lead(&draft).await;
    let lead = market.add_lead(draft.into_lead(&analysis))?;

    info!(
        lead = %lead.id,
        score = analysis.intent_score,
        status = lead.status.as_str(),
        "lead captured"
    );

    Ok(Submission { lead, analysis })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ScoringClient;
    use crate::config::ScoringConfig;
    use crate::error::MarketplaceError;
    use crate::marketplace::tests::marketplace;
    use crate::models::{BantStatus, LeadStatus, FALLBACK_SUMMARY};

    fn complete_draft() -> LeadDraft {
        LeadDraft {
            name: "Rahul Sharma".into(),
            email: "rahul@company.in".into(),
            mobile: "9876543210".into(),
            need: "Cloud telephony for 3 branches".into(),
            ..Default::default()
        }
    }

    /// Scorer that answers with a fixed analysis
    struct Fixed(BantAnalysis);

    impl LeadScorer for Fixed {
        async fn score_lead(&self, _draft: &LeadDraft) -> BantAnalysis {
            self.0.clone()
        }
    }

    #[test]
    fn test_step_navigation_saturates() {
        assert_eq!(WizardStep::default().number(), 1);
        assert_eq!(WizardStep::Contact.back(), WizardStep::Contact);
        assert_eq!(WizardStep::Context.next(), WizardStep::Complete);
        assert_eq!(WizardStep::Complete.next(), WizardStep::Complete);
        assert_eq!(WizardStep::Requirement.next().number(), 3);
    }

    #[test]
    fn test_prefill_from_profile() {
        let mut draft = LeadDraft::default();
        draft.prefill(&UserProfile {
            name: "Asha".into(),
            company_name: "Asha Foods".into(),
            mobile: "9123456780".into(),
            email: "asha@foods.in".into(),
            location: "Pune".into(),
        });
        assert_eq!(draft.company_name, "Asha Foods");
        assert_eq!(draft.authority, NOT_PROVIDED);
    }

    #[test]
    fn test_incomplete_draft_message() {
        let err = LeadDraft::default().validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please provide your contact details and requirement summary."
        );
    }

    #[test]
    fn test_lead_defaults() {
        let mut draft = complete_draft();
        draft.authority = String::new();
        let lead = draft.into_lead(&BantAnalysis::fallback());

        assert_eq!(lead.company_name, DEFAULT_COMPANY);
        assert_eq!(lead.location, DEFAULT_LOCATION);
        assert_eq!(lead.budget, NOT_SPECIFIED);
        assert_eq!(lead.authority, NOT_SPECIFIED);
        assert_eq!(lead.timeline, NOT_PROVIDED);
        assert_eq!(lead.requirement, lead.need);
        assert_eq!(lead.assigned_vendor_id, None);
    }

    #[tokio::test]
    async fn test_qualified_analysis_sets_status() {
        let (_dir, market) = marketplace();
        let scorer = Fixed(BantAnalysis {
            intent_score: 88,
            bant_status: BantStatus::Qualified,
            summary: "Budget approved, decision this month.".into(),
            gaps: vec![],
        });

        let submission = submit(&market, &scorer, complete_draft()).await.unwrap();
        assert_eq!(submission.lead.status, LeadStatus::Qualified);
        assert_eq!(submission.lead.intent_score, Some(88));
        assert_eq!(submission.lead.remarks, "Budget approved, decision this month.");
        assert_eq!(market.list_leads().unwrap()[0].id, submission.lead.id);
    }

    #[tokio::test]
    async fn test_scoring_failure_still_stores_lead() {
        let (_dir, market) = marketplace();
        let scorer = ScoringClient::new(ScoringConfig {
            api_key: Some("test-key".into()),
            endpoint: "http://127.0.0.1:9".into(),
            ..Default::default()
        });

        let submission = submit(&market, &scorer, complete_draft()).await.unwrap();
        assert_eq!(submission.analysis, BantAnalysis::fallback());
        assert_eq!(submission.lead.status, LeadStatus::Pending);
        assert_eq!(submission.lead.intent_score, Some(50));
        assert_eq!(submission.lead.remarks, FALLBACK_SUMMARY);
        assert_eq!(market.list_leads().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_zero_score_is_stored_as_fallback() {
        let (_dir, market) = marketplace();
        let scorer = Fixed(BantAnalysis {
            intent_score: 0,
            bant_status: BantStatus::Unqualified,
            summary: "No budget and no timeline.".into(),
            gaps: vec!["Budget".into()],
        });

        let submission = submit(&market, &scorer, complete_draft()).await.unwrap();
        assert_eq!(submission.analysis.intent_score, 0);
        assert_eq!(submission.lead.intent_score, Some(50));
        assert_eq!(submission.lead.status, LeadStatus::Pending);
        assert_eq!(market.list_leads().unwrap()[0].intent_score, Some(50));
    }

    #[tokio::test]
    async fn test_incomplete_submission_stores_nothing() {
        let (_dir, market) = marketplace();
        let scorer = Fixed(BantAnalysis::fallback());
        let err = submit(&market, &scorer, LeadDraft::default()).await.unwrap_err();
        assert!(matches!(err, MarketplaceError::Validation(ValidationError::IncompleteLead)));
        assert!(market.list_leads().unwrap().is_empty());
    }
}

//! Prompts for lead scoring and buyer consultancy.

use crate::intake::LeadDraft;

/// Prompt asking for a BANT qualification of `draft` as JSON
pub fn bant_prompt(draft: &LeadDraft) -> String {
    let data = serde_json::to_string(draft).unwrap_or_else(|_| "{}".to_string());
    format!(
        r#"Analyze this B2B lead data for BANT (Budget, Authority, Need, Timeline) qualification.
Data: {data}

Respond in JSON format with:
1. intentScore (integer 0-100, how ready the buyer is to purchase)
2. bantStatus ("qualified", "partial", "unqualified")
3. summary (concise paragraph for the sales team)
4. gaps (array of strings: what information is missing?)"#
    )
}

/// Prompt for the marketplace business consultant
pub fn consult_prompt(query: &str) -> String {
    format!(
        r#"You are a world-class AI Business Consultant for BantConfirm, an Indian B2B marketplace.
Help the user find the best IT, Software, or Telecom solution based on their requirements.
Keep it professional, data-driven, and brief.
Query: {query}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bant_prompt_embeds_draft() {
        let draft = LeadDraft {
            name: "Rahul".into(),
            need: "Leased line".into(),
            ..Default::default()
        };
        let prompt = bant_prompt(&draft);
        assert!(prompt.contains(r#""need":"Leased line""#));
        assert!(prompt.contains("bantStatus"));
        assert!(prompt.contains("Not Provided"));
    }

    #[test]
    fn test_consult_prompt_embeds_query() {
        let prompt = consult_prompt("Best CRM under 2 lakh?");
        assert!(prompt.ends_with("Query: Best CRM under 2 lakh?"));
    }
}

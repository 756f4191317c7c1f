//! Generative-AI client for lead scoring and consultancy.
//!
//! Talks to the Gemini `generateContent` REST endpoint. Replies are read
//! leniently and every failure is absorbed: [`ScoringClient::score_lead`]
//! returns [`BantAnalysis::fallback`] and [`ScoringClient::consult`] returns
//! a fixed apology. There is no retry.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bantconfirm::ai::ScoringClient;
//! use bantconfirm::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! let client = ScoringClient::new(config.scoring);
//! let analysis = client.score_lead(&draft).await;
//! ```

pub mod prompt;

use std::future::Future;

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::ScoringConfig;
use crate::error::{ScoringError, ScoringResult};
use crate::intake::LeadDraft;
use crate::models::{BantAnalysis, BantStatus, FALLBACK_INTENT_SCORE, FALLBACK_SUMMARY};

pub use prompt::{bant_prompt, consult_prompt};

/// Reply shown when the consultancy call fails
pub const CONSULT_FALLBACK: &str =
    "I'm having trouble connecting right now. Please try again or contact our sales team.";

const SCORING_TEMPERATURE: f32 = 0.2;

/// Anything that can score a lead draft.
pub trait LeadScorer {
    /// Never fails; implementations fall back to a neutral analysis.
    fn score_lead(&self, draft: &LeadDraft) -> impl Future<Output = BantAnalysis> + Send;
}

/// Gemini API client
#[derive(Clone)]
pub struct ScoringClient {
    http: reqwest::Client,
    config: ScoringConfig,
}

/// Gemini `generateContent` response
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Gemini error envelope
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl ScoringClient {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Score `draft`, returning the raw error on failure
    pub async fn try_score(&self, draft: &LeadDraft) -> ScoringResult<BantAnalysis> {
        let generation = json!({
            "responseMimeType": "application/json",
            "temperature": SCORING_TEMPERATURE
        });
        let text = self
            .generate(&prompt::bant_prompt(draft), Some(generation))
            .await?;
        parse_analysis(&text)
    }

    /// Answer a buyer question, returning the raw error on failure
    pub async fn try_consult(&self, query: &str) -> ScoringResult<String> {
        self.generate(&prompt::consult_prompt(query), None).await
    }

    /// Answer a buyer question; never fails
    pub async fn consult(&self, query: &str) -> String {
        match self.try_consult(query).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!(error = %e, "consultancy call failed, using fallback reply");
                CONSULT_FALLBACK.to_string()
            }
        }
    }

    /// Call `generateContent` and return the text of the first candidate
    async fn generate(&self, prompt: &str, generation: Option<Value>) -> ScoringResult<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ScoringError::MissingApiKey)?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        );

        let mut body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }]
        });
        if let Some(generation) = generation {
            body["generationConfig"] = generation;
        }

        debug!(model = %self.config.model, "calling generateContent");

        let mut request = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body);
        if let Some(timeout) = self.config.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(request_error)?;
        let status = response.status();
        let body = response.text().await.map_err(request_error)?;

        if !status.is_success() {
            if let Ok(error) = serde_json::from_str::<ApiErrorBody>(&body) {
                return Err(ScoringError::ApiError(error.error.message));
            }
            return Err(ScoringError::ApiError(format!("HTTP {}", status)));
        }

        let reply: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| ScoringError::InvalidResponse(e.to_string()))?;

        let text = reply
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect::<String>())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ScoringError::InvalidResponse("Empty response".to_string()));
        }

        debug!(bytes = text.len(), "received reply");
        Ok(text)
    }
}

impl LeadScorer for ScoringClient {
    async fn score_lead(&self, draft: &LeadDraft) -> BantAnalysis {
        match self.try_score(draft).await {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!(error = %e, "lead scoring failed, using fallback analysis");
                BantAnalysis::fallback()
            }
        }
    }
}

fn request_error(e: reqwest::Error) -> ScoringError {
    if e.is_timeout() {
        ScoringError::Timeout
    } else {
        ScoringError::HttpError(e.to_string())
    }
}

/// Read an analysis out of a model reply, tolerating missing or odd fields
pub fn parse_analysis(text: &str) -> ScoringResult<BantAnalysis> {
    let json_str = extract_json(text);
    let value: Value = serde_json::from_str(&json_str).map_err(|e| {
        ScoringError::InvalidResponse(format!(
            "{}. Response was: {}",
            e,
            text.chars().take(200).collect::<String>()
        ))
    })?;

    if !value.is_object() {
        return Err(ScoringError::InvalidResponse("Expected a JSON object".to_string()));
    }

    let intent_score = match &value["intentScore"] {
        Value::Number(n) => n.as_f64().map(clamp_score),
        Value::String(s) => s.trim().trim_end_matches('%').parse::<f64>().ok().map(clamp_score),
        _ => None,
    }
    .unwrap_or(FALLBACK_INTENT_SCORE);

    let bant_status = value["bantStatus"]
        .as_str()
        .and_then(BantStatus::parse)
        .unwrap_or_default();

    let summary = value["summary"]
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_SUMMARY)
        .to_string();

    let gaps = match &value["gaps"] {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    };

    Ok(BantAnalysis {
        intent_score,
        bant_status,
        summary,
        gaps,
    })
}

fn clamp_score(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

/// Extract JSON from a reply that may wrap it in a markdown code block
fn extract_json(text: &str) -> String {
    if let Some(start) = text.find("```") {
        let after_fence = start + 3;
        // Skip a language tag such as `json`
        let content_start = text[after_fence..]
            .find('\n')
            .map(|i| after_fence + i + 1)
            .unwrap_or(after_fence);

        if let Some(end) = text[content_start..].find("```") {
            return text[content_start..content_start + end].trim().to_string();
        }
    }

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if start < end {
            return text[start..=end].to_string();
        }
    }

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_client() -> ScoringClient {
        ScoringClient::new(ScoringConfig {
            api_key: Some("test-key".into()),
            endpoint: "http://127.0.0.1:9".into(),
            ..Default::default()
        })
    }

    #[test]
    fn test_extract_json_from_code_block() {
        let reply = "Here you go:\n```json\n{\"intentScore\": 70}\n```\nDone";
        assert_eq!(extract_json(reply), "{\"intentScore\": 70}");
    }

    #[test]
    fn test_extract_raw_json() {
        let reply = r#"Sure. {"intentScore": 70} Thanks"#;
        assert_eq!(extract_json(reply), r#"{"intentScore": 70}"#);
    }

    #[test]
    fn test_parse_complete_reply() {
        let analysis = parse_analysis(
            r#"{"intentScore": 82, "bantStatus": "qualified", "summary": "Strong buyer.", "gaps": ["Budget range"]}"#,
        )
        .unwrap();
        assert_eq!(analysis.intent_score, 82);
        assert_eq!(analysis.bant_status, BantStatus::Qualified);
        assert_eq!(analysis.gaps, vec!["Budget range".to_string()]);
    }

    #[test]
    fn test_parse_lenient_fields() {
        let analysis = parse_analysis(
            r#"{"intentScore": 140.6, "bantStatus": "Maybe", "gaps": "Timeline unclear"}"#,
        )
        .unwrap();
        assert_eq!(analysis.intent_score, 100);
        assert_eq!(analysis.bant_status, BantStatus::Partial);
        assert_eq!(analysis.summary, FALLBACK_SUMMARY);
        assert_eq!(analysis.gaps, vec!["Timeline unclear".to_string()]);

        let analysis = parse_analysis(r#"{"intentScore": "65%"}"#).unwrap();
        assert_eq!(analysis.intent_score, 65);

        let analysis = parse_analysis(r#"{"intentScore": -5}"#).unwrap();
        assert_eq!(analysis.intent_score, 0);
    }

    #[test]
    fn test_parse_missing_score_uses_default() {
        let analysis = parse_analysis(r#"{"bantStatus": "unqualified"}"#).unwrap();
        assert_eq!(analysis.intent_score, 50);
        assert_eq!(analysis.bant_status, BantStatus::Unqualified);
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(parse_analysis("no idea").is_err());
        assert!(parse_analysis("[1, 2]").is_err());
    }

    #[tokio::test]
    async fn test_missing_key_falls_back() {
        let client = ScoringClient::new(ScoringConfig::default());
        let err = client.try_score(&LeadDraft::default()).await.unwrap_err();
        assert!(matches!(err, ScoringError::MissingApiKey));
        assert_eq!(client.score_lead(&LeadDraft::default()).await, BantAnalysis::fallback());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_falls_back() {
        let client = unreachable_client();
        assert_eq!(client.score_lead(&LeadDraft::default()).await, BantAnalysis::fallback());
        assert_eq!(client.consult("Which CRM?").await, CONSULT_FALLBACK);
    }
}

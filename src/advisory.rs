//! Advisory client: AI tokenomics critique and marketing copy.
//!
//! Two independent request/response operations against a generateContent
//! endpoint. Each builds a prompt from the current token draft, issues one
//! request, and on ANY failure (transport, non-2xx status, malformed body)
//! substitutes a fixed local fallback instead of propagating the error.
//! Failures are logged but never surfaced to the wizard user.
//!
//! Callers enforce the input preconditions (non-empty name/symbol, and a
//! non-empty description for the assessment); this component does not
//! retry, queue, or re-validate.

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::AdvisoryConfig;
use crate::error::AdvisoryError;
use crate::wizard::TokenDraft;

/// Structured tokenomics assessment, immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenomicsAssessment {
    /// Expected range 0-100; not clamped.
    pub viability_score: f64,
    pub market_analysis: String,
    pub suggested_improvements: Vec<String>,
    #[serde(default)]
    pub risk_warnings: Vec<String>,
}

impl TokenomicsAssessment {
    /// Fixed value returned whenever the remote assessment fails.
    pub fn fallback() -> Self {
        Self {
            viability_score: 50.0,
            market_analysis: "Unable to perform deep analysis at this moment. \
                              The configuration seems standard."
                .to_string(),
            suggested_improvements: vec![
                "Ensure liquidity is locked after minting".to_string(),
                "Verify community interest before launch".to_string(),
            ],
            risk_warnings: vec!["Standard market volatility risks apply".to_string()],
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, or a malformed-response
    /// error when the payload carries no usable text.
    fn into_text(self) -> Result<String, AdvisoryError> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AdvisoryError::Malformed(
                "response contained no candidate text".to_string(),
            ));
        }
        Ok(text)
    }
}

/// JSON response schema for the assessment call: exactly the four fields
/// of [`TokenomicsAssessment`], all required.
fn assessment_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "viabilityScore": { "type": "NUMBER", "description": "A score from 0-100" },
            "marketAnalysis": { "type": "STRING" },
            "suggestedImprovements": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "riskWarnings": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": ["viabilityScore", "marketAnalysis", "suggestedImprovements", "riskWarnings"]
    })
}

fn assessment_prompt(draft: &TokenDraft) -> String {
    format!(
        "Analyze the following cryptocurrency token proposal and provide a \
         professional evaluation.\n\
         Network: {network}\n\
         Name: {name}\n\
         Symbol: {symbol}\n\
         Total Supply: {supply}\n\
         Decimals: {decimals}\n\
         Description: {description}\n\n\
         Provide a JSON response with market viability, suggested improvements, \
         and potential risks.",
        network = draft.network,
        name = draft.name,
        symbol = draft.symbol,
        supply = draft.total_supply,
        decimals = draft.decimals,
        description = draft.description,
    )
}

fn rewrite_prompt(draft: &TokenDraft) -> String {
    format!(
        "Write a compelling 100-word marketing description for a new crypto token \
         named {name} (${symbol}) on the {network} network based on this draft: \
         \"{description}\". Highlight its utility and community value.",
        name = draft.name,
        symbol = draft.symbol,
        network = draft.network,
        description = draft.description,
    )
}

/// Client for the external text-generation service.
pub struct AdvisoryClient {
    config: AdvisoryConfig,
    client: reqwest::Client,
}

impl AdvisoryClient {
    pub fn new(config: AdvisoryConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { config, client }
    }

    /// Request a structured tokenomics assessment of the draft.
    ///
    /// Returns [`TokenomicsAssessment::fallback`] on any failure.
    pub async fn assess_tokenomics(&self, draft: &TokenDraft) -> TokenomicsAssessment {
        match self.try_assess(draft).await {
            Ok(assessment) => assessment,
            Err(e) => {
                tracing::warn!("Tokenomics assessment unavailable: {}. Using fallback.", e);
                TokenomicsAssessment::fallback()
            }
        }
    }

    /// Request a ~100-word marketing rewrite of the draft description.
    ///
    /// Returns the original description unchanged on any failure.
    pub async fn rewrite_description(&self, draft: &TokenDraft) -> String {
        match self.try_rewrite(draft).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Description rewrite unavailable: {}. Keeping draft text.", e);
                draft.description.clone()
            }
        }
    }

    async fn try_assess(&self, draft: &TokenDraft) -> Result<TokenomicsAssessment, AdvisoryError> {
        let prompt = assessment_prompt(draft);
        let text = self.generate(&prompt, Some(assessment_schema())).await?;
        parse_assessment(&text)
    }

    async fn try_rewrite(&self, draft: &TokenDraft) -> Result<String, AdvisoryError> {
        let prompt = rewrite_prompt(draft);
        self.generate(&prompt, None).await
    }

    /// Issue one generateContent request and extract the response text.
    async fn generate(
        &self,
        prompt: &str,
        response_schema: Option<serde_json::Value>,
    ) -> Result<String, AdvisoryError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: response_schema.map(|schema| GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            }),
        };

        let mut request = self.client.post(&url).json(&body);
        if let Some(ref key) = self.config.api_key {
            request = request.header("x-goog-api-key", key.expose_secret());
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisoryError::Status { status, body });
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AdvisoryError::Malformed(e.to_string()))?;
        payload.into_text()
    }
}

fn parse_assessment(text: &str) -> Result<TokenomicsAssessment, AdvisoryError> {
    serde_json::from_str(text).map_err(|e| AdvisoryError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use crate::network::Network;

    fn draft() -> TokenDraft {
        TokenDraft {
            name: "Galactic Credits".to_string(),
            symbol: "GALA".to_string(),
            decimals: 9,
            total_supply: "1000000000".to_string(),
            description: "Credits for the galaxy".to_string(),
            network: Network::Solana,
        }
    }

    /// Client pointed at an unroutable endpoint so every call fails fast.
    fn unreachable_client() -> AdvisoryClient {
        AdvisoryClient::new(AdvisoryConfig {
            api_key: None,
            base_url: "http://127.0.0.1:9".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            timeout: Duration::from_millis(500),
        })
    }

    #[test]
    fn assessment_prompt_embeds_every_draft_field() {
        let prompt = assessment_prompt(&draft());
        assert!(prompt.contains("SOLANA"));
        assert!(prompt.contains("Galactic Credits"));
        assert!(prompt.contains("GALA"));
        assert!(prompt.contains("1000000000"));
        assert!(prompt.contains("Decimals: 9"));
        assert!(prompt.contains("Credits for the galaxy"));
    }

    #[test]
    fn rewrite_prompt_quotes_the_draft_description() {
        let prompt = rewrite_prompt(&draft());
        assert!(prompt.contains("$GALA"));
        assert!(prompt.contains("\"Credits for the galaxy\""));
        assert!(prompt.contains("100-word"));
    }

    #[test]
    fn assessment_schema_requires_all_four_fields() {
        let schema = assessment_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            required,
            vec![
                "viabilityScore",
                "marketAnalysis",
                "suggestedImprovements",
                "riskWarnings"
            ]
        );
    }

    #[test]
    fn parse_assessment_accepts_schema_conformant_json() {
        let text = r#"{
            "viabilityScore": 82.5,
            "marketAnalysis": "Strong niche appeal.",
            "suggestedImprovements": ["Lock liquidity"],
            "riskWarnings": []
        }"#;
        let parsed = parse_assessment(text).unwrap();
        assert_eq!(parsed.viability_score, 82.5);
        assert_eq!(parsed.market_analysis, "Strong niche appeal.");
        assert!(parsed.risk_warnings.is_empty());
    }

    #[test]
    fn parse_assessment_rejects_non_json() {
        assert!(parse_assessment("not json").is_err());
    }

    #[test]
    fn response_text_extraction_joins_first_candidate_parts() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"Hello "},{"text":"world"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_text().unwrap(), "Hello world");
    }

    #[test]
    fn response_without_candidates_is_malformed() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(response.into_text().is_err());
    }

    #[test]
    fn fallback_values_match_documented_literals() {
        let fallback = TokenomicsAssessment::fallback();
        assert_eq!(fallback.viability_score, 50.0);
        assert_eq!(fallback.suggested_improvements.len(), 2);
        assert_eq!(
            fallback.risk_warnings,
            vec!["Standard market volatility risks apply".to_string()]
        );
    }

    #[tokio::test]
    async fn assessment_failure_returns_fallback_not_error() {
        let client = unreachable_client();
        let result = client.assess_tokenomics(&draft()).await;
        assert_eq!(result, TokenomicsAssessment::fallback());
    }

    #[tokio::test]
    async fn rewrite_failure_returns_original_description() {
        let client = unreachable_client();
        let result = client.rewrite_description(&draft()).await;
        assert_eq!(result, "Credits for the galaxy");
    }
}

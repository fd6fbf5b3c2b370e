//! HTTP client for the narrative generation service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use cra_types::RingScores;

use crate::error::InsightError;

/// Substituted whenever narrative generation fails for any reason.
pub const FALLBACK_INSIGHT: &str =
    "Critical: Immediate intervention required for missing Master Treatment Plan and VOB documentation.";

/// Builds the generation prompt from the three ring scores.
fn build_prompt(rings: &RingScores) -> String {
    format!(
        "Analyze: Compliance {}%, Process {}%, Data {}%. Generate a 2-sentence medical director action plan.",
        rings.compliance, rings.process, rings.data
    )
}

/// A collaborator that turns ring scores into a short narrative.
#[async_trait]
pub trait InsightClient: Send + Sync {
    async fn generate(&self, rings: &RingScores) -> Result<String, InsightError>;
}

/// Request body for the insight endpoint.
#[derive(Serialize)]
struct InsightRequest<'a> {
    prompt: &'a str,
}

/// Response body from the insight endpoint.
#[derive(Deserialize)]
struct InsightResponse {
    text: String,
}

/// HTTP implementation posting the prompt to a configured endpoint.
pub struct HttpInsightClient {
    endpoint: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl HttpInsightClient {
    /// Creates a client for the given endpoint with a per-request timeout.
    pub fn new(endpoint: &str, timeout_secs: u64) -> Result<Self, InsightError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| InsightError::Connection(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        })
    }
}

#[async_trait]
impl InsightClient for HttpInsightClient {
    async fn generate(&self, rings: &RingScores) -> Result<String, InsightError> {
        let prompt = build_prompt(rings);
        let body = InsightRequest { prompt: &prompt };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    InsightError::Timeout(self.timeout_secs)
                } else if e.is_connect() {
                    InsightError::Connection(self.endpoint.clone())
                } else {
                    InsightError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InsightError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: InsightResponse = response
            .json()
            .await
            .map_err(|e| InsightError::ResponseParsing(e.to_string()))?;

        Ok(parsed.text)
    }
}

/// Generates a narrative, substituting [`FALLBACK_INSIGHT`] on any failure
/// or empty response. Never fails.
pub async fn insight_or_fallback(client: &dyn InsightClient, rings: &RingScores) -> String {
    match client.generate(rings).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            tracing::warn!("insight service returned an empty narrative, using fallback");
            FALLBACK_INSIGHT.to_string()
        }
        Err(e) => {
            tracing::warn!("insight generation failed, using fallback: {}", e);
            FALLBACK_INSIGHT.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cra_types::RingScore;

    fn rings(compliance: u8, process: u8, data: u8) -> RingScores {
        RingScores {
            compliance: RingScore::new(compliance).expect("valid score"),
            process: RingScore::new(process).expect("valid score"),
            data: RingScore::new(data).expect("valid score"),
        }
    }

    struct FixedClient(Result<String, ()>);

    #[async_trait]
    impl InsightClient for FixedClient {
        async fn generate(&self, _rings: &RingScores) -> Result<String, InsightError> {
            self.0
                .clone()
                .map_err(|_| InsightError::Connection("http://localhost:9".into()))
        }
    }

    #[test]
    fn prompt_carries_all_three_scores() {
        let prompt = build_prompt(&rings(42, 61, 88));
        assert!(prompt.contains("Compliance 42%"));
        assert!(prompt.contains("Process 61%"));
        assert!(prompt.contains("Data 88%"));
    }

    #[tokio::test]
    async fn delivers_generated_narrative() {
        let client = FixedClient(Ok("Chart is in good order.".to_string()));
        let text = insight_or_fallback(&client, &rings(90, 90, 90)).await;
        assert_eq!(text, "Chart is in good order.");
    }

    #[tokio::test]
    async fn substitutes_fallback_on_failure() {
        let client = FixedClient(Err(()));
        let text = insight_or_fallback(&client, &rings(42, 61, 88)).await;
        assert_eq!(text, FALLBACK_INSIGHT);
    }

    #[tokio::test]
    async fn substitutes_fallback_on_empty_narrative() {
        let client = FixedClient(Ok("   ".to_string()));
        let text = insight_or_fallback(&client, &rings(42, 61, 88)).await;
        assert_eq!(text, FALLBACK_INSIGHT);
    }
}

//! HTTP client for the vision model that estimates meal nutrition.
//!
//! [`VisionClient`] holds the endpoint configuration for the chat
//! completions API. Call [`VisionClient::analyze_photo`] with a
//! base64-encoded JPEG to get a [`MealAnalysis`] back.

use serde::Deserialize;
use serde_json::json;

use crate::analysis::{self, MealAnalysis};

/// Instruction prompt sent alongside every meal photo. The reply must be a
/// single JSON object matching [`MealAnalysis`].
const ANALYSIS_PROMPT: &str = r#"Analyze this meal photo and provide detailed nutritional information.

Return a JSON object with this exact structure:
{
  "foodItems": ["item1", "item2"],
  "calories": total_calories_number,
  "protein": protein_grams_number,
  "carbs": carbs_grams_number,
  "fats": fats_grams_number,
  "confidence": "high/medium/low"
}

Be as accurate as possible with portion sizes. Only return the JSON object, no other text."#;

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o";
const MAX_TOKENS: u32 = 500;

/// Endpoint configuration for the vision API.
#[derive(Debug, Clone)]
pub struct VisionConfig {
    /// Bearer token for the API.
    pub api_key: String,
    /// Chat completions endpoint URL.
    pub api_url: String,
    /// Model identifier to request.
    pub model: String,
}

impl VisionConfig {
    /// Load configuration from the environment.
    ///
    /// `OPENAI_API_KEY` is required. `VISION_API_URL` and `VISION_MODEL`
    /// override the endpoint and model, which is mainly useful for
    /// pointing tests at a local stub server.
    pub fn from_env() -> Result<Self, VisionError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| VisionError::Config("OPENAI_API_KEY is not set".to_owned()))?;
        Ok(Self {
            api_key,
            api_url: std::env::var("VISION_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_owned()),
            model: std::env::var("VISION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_owned()),
        })
    }
}

/// Client for the meal-photo analysis endpoint.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its connection
/// pool across clones.
#[derive(Clone)]
pub struct VisionClient {
    http: reqwest::Client,
    config: VisionConfig,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl VisionClient {
    pub fn new(config: VisionConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Send one meal photo for analysis.
    ///
    /// The image is inlined as a `data:` URL, so `image_base64` must be the
    /// raw base64 payload without a URL prefix. Returns the parsed estimate
    /// or an error; there is no retry.
    pub async fn analyze_photo(&self, image_base64: &str) -> Result<MealAnalysis, VisionError> {
        let body = json!({
            "model": self.config.model,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text", "text": ANALYSIS_PROMPT },
                    {
                        "type": "image_url",
                        "image_url": { "url": format!("data:image/jpeg;base64,{image_base64}") }
                    }
                ]
            }],
            "max_tokens": MAX_TOKENS,
        });

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "vision API request failed");
            return Err(VisionError::Api {
                status: status.as_u16(),
            });
        }

        let reply: ChatResponse = response.json().await?;
        let content = reply
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or(VisionError::EmptyReply)?;

        let estimate = analysis::parse_analysis(content)
            .map_err(|e| VisionError::Parse(e.to_string()))?;
        tracing::debug!(
            items = estimate.food_items.len(),
            calories = estimate.calories,
            "meal photo analyzed"
        );
        Ok(estimate)
    }
}

/// Errors from the vision API round trip.
#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    /// Missing or invalid client configuration.
    #[error("Vision config error: {0}")]
    Config(String),

    /// Transport-level failure talking to the API.
    #[error("Vision request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Vision API returned status {status}")]
    Api { status: u16 },

    /// The API answered successfully but with no choices.
    #[error("Vision API returned an empty reply")]
    EmptyReply,

    /// The reply text was not a valid nutrition estimate.
    #[error("Could not parse analysis: {0}")]
    Parse(String),
}

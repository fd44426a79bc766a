use crate::config::ProviderConfig;
use crate::error::{BackendError, GeneratorError};
use crate::providers::LlmProvider;
use async_trait::async_trait;
use log::{debug, error, warn};
use reqwest::Client;
use serde_json::{json, Value};

/// Chat model used for every request
pub const OPENAI_MODEL: &str = "gpt-3.5-turbo";

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, GeneratorError> {
        // Try config first, then fall back to environment variable.
        // A blank key counts as unset at either level.
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
            .ok_or(GeneratorError::MissingApiKey)?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self::with_base_url(api_key, base_url))
    }

    /// Create a new OpenAI provider talking to the public API
    pub fn with_api_key(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        OpenAIProvider {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAIProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, prompt: &str) -> Result<String, BackendError> {
        debug!("Making request to OpenAI with prompt: {}", prompt);

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": OPENAI_MODEL,
                "messages": [
                    {"role": "user", "content": prompt}
                ]
            }))
            .send()
            .await
            .map_err(|e| {
                error!("Error from OpenAI: {}", e);
                BackendError::Request(e)
            })?;

        // Check status code before attempting to parse JSON
        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!("Failed to read OpenAI error body: {}", e);
                    String::new()
                }
            };
            error!("OpenAI request failed with status {}: {}", status, body);
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response_body: Value = response.json().await?;
        debug!("Response from OpenAI: {:?}", response_body);
        debug!("Choices: {:?}", response_body["choices"]);

        let content = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(BackendError::MissingContent)?
            .to_string();

        Ok(content)
    }
}

use async_trait::async_trait;
use serde_json::json;

use super::{GeneratorError, NarrativeGenerator};

pub const TEMPERATURE: f64 = 0.7;

pub struct OpenAiGenerator {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiGenerator {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl NarrativeGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        if self.api_key.trim().is_empty() {
            return Err(GeneratorError::MissingApiKey);
        }

        let body = json!({
            "model": self.model,
            "messages": [{
                "role": "user",
                "content": prompt,
            }],
            "temperature": TEMPERATURE,
        });

        tracing::info!(model = %self.model, prompt_chars = prompt.len(), "requesting generated post");

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await?;
            return Err(GeneratorError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let data: serde_json::Value = resp.json().await?;

        data["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or(GeneratorError::MissingContent)
    }
}

use anyhow::Context;
use serde::Deserialize;

use super::submission::DealsForm;

#[derive(Deserialize)]
struct DealsReply {
    post: Option<String>,
}

/// HTTP client for the deals API, used by the form process.
pub struct DealsApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl DealsApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Issues one `POST /deals` call built from the form.
    pub async fn fetch_post(&self, form: &DealsForm) -> anyhow::Result<String> {
        let query = form
            .query_pairs()
            .context("failed to encode vehicle parameters")?;

        let reply: DealsReply = self
            .client
            .post(format!("{}/deals", self.base_url))
            .query(&query)
            .json(&form.flight_payload())
            .send()
            .await
            .context("failed to call deals API")?
            .error_for_status()
            .context("deals API returned error")?
            .json()
            .await
            .context("failed to parse deals response")?;

        Ok(reply.post.unwrap_or_else(|| "No post returned.".to_string()))
    }
}

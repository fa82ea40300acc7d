use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::{Method, RequestBuilder};
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::Mutex;

use super::{ProviderError, TravelProvider};
use crate::models::{FlightSearchRequest, HotelSearchRequest};

const TOKEN_PATH: &str = "/v1/security/oauth2/token";
const FLIGHT_OFFERS_PATH: &str = "/v2/shopping/flight-offers";
const HOTELS_BY_CITY_PATH: &str = "/v1/reference-data/locations/hotels/by-city";

// Refresh a little before the provider's stated expiry.
const TOKEN_EXPIRY_MARGIN_SECS: i64 = 10;

#[derive(Deserialize)]
struct TokenGrant {
    access_token: String,
    expires_in: i64,
}

struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

pub struct AmadeusProvider {
    base_url: String,
    client_id: String,
    client_secret: String,
    client: reqwest::Client,
    token: Mutex<Option<AccessToken>>,
}

impl AmadeusProvider {
    pub fn new(base_url: String, client_id: String, client_secret: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id,
            client_secret,
            client: reqwest::Client::new(),
            token: Mutex::new(None),
        }
    }

    async fn access_token(&self) -> Result<String, ProviderError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.expires_at > Utc::now() {
                return Ok(token.value.clone());
            }
        }

        tracing::debug!("requesting Amadeus access token");
        let resp = self
            .client
            .post(format!("{}{TOKEN_PATH}", self.base_url))
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await?;
            tracing::warn!(status = status.as_u16(), "Amadeus token exchange failed");
            return Err(ProviderError::Response {
                status: status.as_u16(),
                body,
            });
        }

        let grant: TokenGrant = resp.json().await?;
        let lifetime = (grant.expires_in - TOKEN_EXPIRY_MARGIN_SECS).max(0);
        *cached = Some(AccessToken {
            value: grant.access_token.clone(),
            expires_at: Utc::now() + Duration::seconds(lifetime),
        });

        Ok(grant.access_token)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Value, ProviderError> {
        let token = self.access_token().await?;
        let resp = builder.bearer_auth(token).send().await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Amadeus API returned error");
            return Err(ProviderError::Response {
                status: status.as_u16(),
                body,
            });
        }

        let mut payload: Value = serde_json::from_str(&body)
            .map_err(|e| ProviderError::Transport(format!("failed to parse Amadeus response: {e}")))?;

        Ok(payload.get_mut("data").map(Value::take).unwrap_or(Value::Null))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl TravelProvider for AmadeusProvider {
    async fn search_flight_offers(&self, search: &FlightSearchRequest) -> Result<Value, ProviderError> {
        tracing::info!(
            origin = %search.origin_location_code,
            destination = %search.destination_location_code,
            "searching flight offers"
        );
        let builder = self
            .client
            .get(self.url(FLIGHT_OFFERS_PATH))
            .query(&search.query_pairs());
        self.send(builder).await
    }

    async fn search_hotels_by_city(&self, search: &HotelSearchRequest) -> Result<Value, ProviderError> {
        tracing::info!(city = %search.city_code, "searching hotels by city");
        let builder = self
            .client
            .get(self.url(HOTELS_BY_CITY_PATH))
            .query(&search.query_pairs());
        self.send(builder).await
    }

    async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, ProviderError> {
        tracing::info!(%method, path, "calling Amadeus");
        let mut builder = self.client.request(method, self.url(path));
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        self.send(builder).await
    }
}

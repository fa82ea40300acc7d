pub mod amadeus;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::models::{FlightSearchRequest, HotelSearchRequest, VehicleSearchRequest};

pub const TRANSFER_OFFERS_PATH: &str = "/v1/shopping/transfer-offers";

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider answered with a non-success status; `body` is its raw text.
    #[error("{body}")]
    Response { status: u16, body: String },

    #[error("{0}")]
    Transport(String),
}

impl ProviderError {
    pub fn status_code(&self) -> u16 {
        match self {
            ProviderError::Response { status, .. } => *status,
            ProviderError::Transport(_) => 500,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Transport(err.to_string())
    }
}

/// Travel-data search backend. Each call is one-shot and returns the `data`
/// member of the provider's response untouched.
#[async_trait]
pub trait TravelProvider: Send + Sync {
    async fn search_flight_offers(&self, search: &FlightSearchRequest) -> Result<Value, ProviderError>;

    async fn search_hotels_by_city(&self, search: &HotelSearchRequest) -> Result<Value, ProviderError>;

    /// Authenticated call to an endpoint without a dedicated method.
    async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, ProviderError>;

    async fn search_transfer_offers(&self, search: &VehicleSearchRequest) -> Result<Value, ProviderError> {
        let body = serde_json::to_value(search)
            .map_err(|e| ProviderError::Transport(format!("failed to encode transfer request: {e}")))?;
        self.request(Method::POST, TRANSFER_OFFERS_PATH, Some(body)).await
    }
}

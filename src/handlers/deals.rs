use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::{ApiJson, ApiMultiQuery};
use crate::models::{FlightSearchRequest, HotelSearchRequest, VehicleSearchRequest};
use crate::services::deals::{self, DEFAULT_TOP_K};
use crate::state::AppState;

/// Query half of `POST /deals`: hotel parameters, `top_k`, and an optional
/// JSON-encoded transfer request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealsQuery {
    #[serde(alias = "city_code")]
    pub city_code: String,
    pub radius: u32,
    #[serde(alias = "radius_unit")]
    pub radius_unit: String,
    pub ratings: Vec<String>,
    #[serde(alias = "hotel_source")]
    pub hotel_source: String,
    #[serde(rename = "top_k", alias = "topK", default = "default_top_k")]
    pub top_k: u32,
    #[serde(default)]
    pub vehicle: Option<String>,
}

fn default_top_k() -> u32 {
    DEFAULT_TOP_K
}

impl DealsQuery {
    pub fn hotel_search(&self) -> HotelSearchRequest {
        HotelSearchRequest {
            city_code: self.city_code.clone(),
            radius: self.radius,
            radius_unit: self.radius_unit.clone(),
            ratings: self.ratings.clone(),
            hotel_source: self.hotel_source.clone(),
        }
    }

    /// The caller's transfer request, or the demo itinerary when none was sent.
    pub fn vehicle_search(&self) -> Result<VehicleSearchRequest, AppError> {
        match self.vehicle.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => serde_json::from_str(raw)
                .map_err(|e| AppError::Validation(format!("vehicle: {e}"))),
            _ => Ok(deals::default_transfer_request()),
        }
    }
}

#[derive(Serialize)]
pub struct DealsResponse {
    pub post: String,
}

// POST /deals
pub async fn best_deals(
    State(state): State<Arc<AppState>>,
    ApiMultiQuery(query): ApiMultiQuery<DealsQuery>,
    ApiJson(flight): ApiJson<FlightSearchRequest>,
) -> Result<Json<DealsResponse>, AppError> {
    let hotel = query.hotel_search();
    let vehicle = query.vehicle_search()?;

    tracing::info!(
        origin = %flight.origin_location_code,
        destination = %flight.destination_location_code,
        city = %hotel.city_code,
        top_k = query.top_k,
        custom_vehicle = query.vehicle.is_some(),
        "generating deals post"
    );

    let post = deals::generate_deals_post(
        state.provider.as_ref(),
        state.generator.as_ref(),
        &flight,
        &hotel,
        &vehicle,
        query.top_k,
    )
    .await?;

    Ok(Json(DealsResponse { post }))
}

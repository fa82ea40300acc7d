use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::errors::{AppError, SearchKind};
use crate::extract::{ApiJson, ApiMultiQuery, ApiQuery};
use crate::models::{FlightSearchRequest, HotelSearchRequest, VehicleSearchRequest};
use crate::state::AppState;

#[derive(Serialize)]
pub struct DataResponse {
    pub data: Value,
}

// GET /flights
pub async fn search_flights(
    State(state): State<Arc<AppState>>,
    ApiQuery(search): ApiQuery<FlightSearchRequest>,
) -> Result<Json<DataResponse>, AppError> {
    let data = state
        .provider
        .search_flight_offers(&search)
        .await
        .map_err(AppError::provider(SearchKind::Flight))?;

    Ok(Json(DataResponse { data }))
}

// GET /hotels
pub async fn search_hotels(
    State(state): State<Arc<AppState>>,
    ApiMultiQuery(search): ApiMultiQuery<HotelSearchRequest>,
) -> Result<Json<DataResponse>, AppError> {
    let data = state
        .provider
        .search_hotels_by_city(&search)
        .await
        .map_err(AppError::provider(SearchKind::Hotel))?;

    Ok(Json(DataResponse { data }))
}

// POST /vehicle
pub async fn search_vehicles(
    State(state): State<Arc<AppState>>,
    ApiJson(search): ApiJson<VehicleSearchRequest>,
) -> Result<Json<DataResponse>, AppError> {
    tracing::info!(
        from = %search.start_location_code,
        to = %search.end_city_name,
        passengers = search.passengers,
        "searching transfer offers"
    );

    let data = state
        .provider
        .search_transfer_offers(&search)
        .await
        .map_err(AppError::provider(SearchKind::Vehicle))?;

    Ok(Json(DataResponse { data }))
}

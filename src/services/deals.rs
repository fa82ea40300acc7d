use serde_json::Value;

use crate::errors::{AppError, SearchKind};
use crate::models::{
    ConnectedSegment, FlightSearchRequest, HotelSearchRequest, PassengerCharacteristic,
    SegmentEndpoint, TransferType, VehicleSearchRequest,
};
use crate::services::ai::NarrativeGenerator;
use crate::services::provider::TravelProvider;

pub const DEFAULT_TOP_K: u32 = 3;

const CLOSING_INSTRUCTION: &str = "Please include a clear ranking of the deals and highlight key details (such as prices, durations, locations, etc.) that make each option attractive.";

/// Demo itinerary used when the caller supplies no transfer parameters:
/// a private car from CDG to the 7th arrondissement after flight AF380.
pub fn default_transfer_request() -> VehicleSearchRequest {
    VehicleSearchRequest {
        start_location_code: "CDG".to_string(),
        end_address_line: "Avenue Anatole France, 5".to_string(),
        end_city_name: "Paris".to_string(),
        end_zip_code: "75007".to_string(),
        end_country_code: "FR".to_string(),
        end_name: "Souvenirs De La Tour".to_string(),
        end_geo_code: "48.859466,2.2976965".to_string(),
        transfer_type: TransferType::Private,
        start_date_time: "2024-04-10T10:30:00".to_string(),
        passengers: 2,
        stop_overs: Vec::new(),
        start_connected_segment: ConnectedSegment {
            transportation_type: "FLIGHT".to_string(),
            transportation_number: "AF380".to_string(),
            departure: SegmentEndpoint {
                local_date_time: "2024-04-10T09:00:00".to_string(),
                iata_code: "NCE".to_string(),
            },
            arrival: SegmentEndpoint {
                local_date_time: "2024-04-10T10:00:00".to_string(),
                iata_code: "CDG".to_string(),
            },
        },
        passenger_characteristics: vec![
            PassengerCharacteristic {
                passenger_type_code: "ADT".to_string(),
                age: 20,
            },
            PassengerCharacteristic {
                passenger_type_code: "CHD".to_string(),
                age: 10,
            },
        ],
    }
}

pub fn build_prompt(top_k: u32, flights: &Value, hotels: &Value, vehicles: &Value) -> String {
    format!(
        "Based on the following data, create an engaging blog post that highlights the top {top_k} best flight deals, \
         the top {top_k} best hotel deals, and the top {top_k} best vehicle deals.\n\n\
         Flight Deals Data: {flights}\n\n\
         Hotel Deals Data: {hotels}\n\n\
         Vehicle Deals Data: {vehicles}\n\n\
         {CLOSING_INSTRUCTION}"
    )
}

/// Runs the three searches in order and hands the combined prompt to the
/// generator. The first failing search aborts the whole operation.
pub async fn generate_deals_post(
    provider: &dyn TravelProvider,
    generator: &dyn NarrativeGenerator,
    flight: &FlightSearchRequest,
    hotel: &HotelSearchRequest,
    vehicle: &VehicleSearchRequest,
    top_k: u32,
) -> Result<String, AppError> {
    let flights = provider
        .search_flight_offers(flight)
        .await
        .map_err(AppError::provider(SearchKind::Flight))?;

    let hotels = provider
        .search_hotels_by_city(hotel)
        .await
        .map_err(AppError::provider(SearchKind::Hotel))?;

    let vehicles = provider
        .search_transfer_offers(vehicle)
        .await
        .map_err(AppError::provider(SearchKind::Vehicle))?;

    let prompt = build_prompt(top_k, &flights, &hotels, &vehicles);
    tracing::debug!(top_k, prompt_chars = prompt.len(), "built deals prompt");

    let post = generator.generate(&prompt).await?;
    Ok(post)
}

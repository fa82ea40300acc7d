use serde::{Deserialize, Serialize};

use crate::models::{
    ConnectedSegment, FlightSearchRequest, PassengerCharacteristic, SegmentEndpoint, TransferType,
    TravelClass, VehicleSearchRequest,
};

/// Everything the deals page collects, one field per input. Fields missing
/// from a submission take the page's pre-filled values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DealsForm {
    // flight
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    pub return_date: String,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    pub travel_class: TravelClass,
    pub currency: String,
    pub max_price: u32,
    pub max_offers: u32,

    // hotel
    pub city_code: String,
    pub radius: u32,
    pub radius_unit: String,
    pub ratings: String,
    pub hotel_source: String,

    // vehicle
    pub start_location_code: String,
    pub end_address_line: String,
    pub end_city_name: String,
    pub end_zip_code: String,
    pub end_country_code: String,
    pub end_name: String,
    pub end_geo_code: String,
    pub transfer_type: TransferType,
    pub start_date_time: String,
    pub passengers: u32,
    pub transportation_type: String,
    pub transportation_number: String,
    pub departure_local_date_time: String,
    pub departure_iata_code: String,
    pub arrival_local_date_time: String,
    pub arrival_iata_code: String,
    pub adult_age: u32,
    pub child_age: u32,

    pub top_k: u32,
}

impl Default for DealsForm {
    fn default() -> Self {
        Self {
            origin: "JFK".to_string(),
            destination: "LHR".to_string(),
            departure_date: "2025-03-01".to_string(),
            return_date: "2025-03-10".to_string(),
            adults: 1,
            children: 1,
            infants: 0,
            travel_class: TravelClass::Economy,
            currency: "USD".to_string(),
            max_price: 1500,
            max_offers: 2,

            city_code: "PAR".to_string(),
            radius: 20,
            radius_unit: "KM".to_string(),
            ratings: "1,2,3,4,5".to_string(),
            hotel_source: "ALL".to_string(),

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
            transportation_type: "FLIGHT".to_string(),
            transportation_number: "AF380".to_string(),
            departure_local_date_time: "2024-04-10T09:00:00".to_string(),
            departure_iata_code: "NCE".to_string(),
            arrival_local_date_time: "2024-04-10T10:00:00".to_string(),
            arrival_iata_code: "CDG".to_string(),
            adult_age: 20,
            child_age: 10,

            top_k: 3,
        }
    }
}

/// Splits "1, 2,,3" into ["1", "2", "3"].
pub fn parse_ratings(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect()
}

impl DealsForm {
    pub fn flight_payload(&self) -> FlightSearchRequest {
        FlightSearchRequest {
            origin_location_code: self.origin.clone(),
            destination_location_code: self.destination.clone(),
            departure_date: self.departure_date.clone(),
            return_date: self.return_date.clone(),
            adults: self.adults,
            children: self.children,
            infants: self.infants,
            travel_class: self.travel_class,
            currency_code: self.currency.clone(),
            max_price: self.max_price,
            max: self.max_offers,
        }
    }

    pub fn vehicle_payload(&self) -> VehicleSearchRequest {
        VehicleSearchRequest {
            start_location_code: self.start_location_code.clone(),
            end_address_line: self.end_address_line.clone(),
            end_city_name: self.end_city_name.clone(),
            end_zip_code: self.end_zip_code.clone(),
            end_country_code: self.end_country_code.clone(),
            end_name: self.end_name.clone(),
            end_geo_code: self.end_geo_code.clone(),
            transfer_type: self.transfer_type,
            start_date_time: self.start_date_time.clone(),
            passengers: self.passengers,
            stop_overs: Vec::new(),
            start_connected_segment: ConnectedSegment {
                transportation_type: self.transportation_type.clone(),
                transportation_number: self.transportation_number.clone(),
                departure: SegmentEndpoint {
                    local_date_time: self.departure_local_date_time.clone(),
                    iata_code: self.departure_iata_code.clone(),
                },
                arrival: SegmentEndpoint {
                    local_date_time: self.arrival_local_date_time.clone(),
                    iata_code: self.arrival_iata_code.clone(),
                },
            },
            passenger_characteristics: vec![
                PassengerCharacteristic {
                    passenger_type_code: "ADT".to_string(),
                    age: self.adult_age,
                },
                PassengerCharacteristic {
                    passenger_type_code: "CHD".to_string(),
                    age: self.child_age,
                },
            ],
        }
    }

    /// Query string for `POST /deals`: hotel parameters with one `ratings`
    /// entry per rating, `top_k`, and the transfer request as a JSON string.
    pub fn query_pairs(&self) -> serde_json::Result<Vec<(&'static str, String)>> {
        let mut pairs = vec![
            ("cityCode", self.city_code.clone()),
            ("radius", self.radius.to_string()),
            ("radiusUnit", self.radius_unit.clone()),
        ];
        for rating in parse_ratings(&self.ratings) {
            pairs.push(("ratings", rating));
        }
        pairs.push(("hotelSource", self.hotel_source.clone()));
        pairs.push(("top_k", self.top_k.to_string()));
        pairs.push(("vehicle", serde_json::to_string(&self.vehicle_payload())?));
        Ok(pairs)
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TravelClass {
    Economy,
    Business,
    First,
}

impl TravelClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelClass::Economy => "ECONOMY",
            TravelClass::Business => "BUSINESS",
            TravelClass::First => "FIRST",
        }
    }
}

/// Flight-offer search parameters.
///
/// Serializes with the provider's camelCase names and accepts either those or
/// the snake_case field names on input. Passenger counts and `max` fall back
/// to their defaults when omitted; everything else is required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchRequest {
    #[serde(alias = "origin_location_code")]
    pub origin_location_code: String,
    #[serde(alias = "destination_location_code")]
    pub destination_location_code: String,
    #[serde(alias = "departure_date")]
    pub departure_date: String,
    #[serde(alias = "return_date")]
    pub return_date: String,
    #[serde(default = "default_adults")]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub infants: u32,
    #[serde(alias = "travel_class")]
    pub travel_class: TravelClass,
    #[serde(alias = "currency_code")]
    pub currency_code: String,
    #[serde(alias = "max_price")]
    pub max_price: u32,
    #[serde(default = "default_max")]
    pub max: u32,
}

fn default_adults() -> u32 {
    1
}

fn default_max() -> u32 {
    1
}

impl FlightSearchRequest {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("originLocationCode", self.origin_location_code.clone()),
            ("destinationLocationCode", self.destination_location_code.clone()),
            ("departureDate", self.departure_date.clone()),
            ("returnDate", self.return_date.clone()),
            ("adults", self.adults.to_string()),
            ("children", self.children.to_string()),
            ("infants", self.infants.to_string()),
            ("travelClass", self.travel_class.as_str().to_string()),
            ("currencyCode", self.currency_code.clone()),
            ("maxPrice", self.max_price.to_string()),
            ("max", self.max.to_string()),
        ]
    }
}

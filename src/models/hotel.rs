use serde::{Deserialize, Serialize};

/// Hotel-by-city search parameters. `ratings` arrives as a repeated query key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearchRequest {
    #[serde(alias = "city_code")]
    pub city_code: String,
    pub radius: u32,
    #[serde(alias = "radius_unit")]
    pub radius_unit: String,
    pub ratings: Vec<String>,
    #[serde(alias = "hotel_source")]
    pub hotel_source: String,
}

impl HotelSearchRequest {
    /// Query parameters as the provider names them. Ratings are sent comma-joined.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("cityCode", self.city_code.clone()),
            ("radius", self.radius.to_string()),
            ("radiusUnit", self.radius_unit.clone()),
            ("ratings", self.ratings.join(",")),
            ("hotelSource", self.hotel_source.clone()),
        ]
    }
}

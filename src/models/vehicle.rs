use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransferType {
    Private,
    Shared,
}

/// Local time and airport of one end of a connecting segment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SegmentEndpoint {
    pub local_date_time: String,
    pub iata_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedSegment {
    pub transportation_type: String,
    pub transportation_number: String,
    pub departure: SegmentEndpoint,
    pub arrival: SegmentEndpoint,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PassengerCharacteristic {
    pub passenger_type_code: String,
    pub age: u32,
}

/// An intermediate stop on a transfer. Every field is optional; unset fields
/// are left off the wire and keys without a named field ride along in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StopOver {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Transfer-offer search body, forwarded to the provider as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSearchRequest {
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
    #[serde(default)]
    pub stop_overs: Vec<StopOver>,
    pub start_connected_segment: ConnectedSegment,
    pub passenger_characteristics: Vec<PassengerCharacteristic>,
}

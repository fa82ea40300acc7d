pub mod flight;
pub mod hotel;
pub mod vehicle;

pub use flight::{FlightSearchRequest, TravelClass};
pub use hotel::HotelSearchRequest;
pub use vehicle::{
    ConnectedSegment, PassengerCharacteristic, SegmentEndpoint, StopOver, TransferType,
    VehicleSearchRequest,
};

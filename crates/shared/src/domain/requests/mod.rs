mod finance;
mod patch;
mod trip;
mod trip_service;

pub use self::finance::{
    CreateExchangeRateRequest, FinanceSummaryRequest, UpdateExchangeRateRequest,
};
pub use self::patch::Patch;
pub use self::trip::{
    CreateTripRequest, FindAllTrips, NewTrip, TripListQuery, TripPatch, UpdateTripRequest,
};
pub use self::trip_service::{ServiceLine, TripServiceUpdate, UpdateServiceLine};

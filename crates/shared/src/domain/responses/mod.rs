mod api;
mod finance;
mod pagination;
mod trip;
mod trip_service;

pub use self::api::{ApiResponse, ApiResponsePagination};
pub use self::finance::{CurrencySummaryResponse, ExchangeRateIdResponse, MonthSummaryResponse};
pub use self::pagination::Pagination;
pub use self::trip::{TripIdResponse, TripResponse, TripServiceResponse};
pub use self::trip_service::ServiceTypeResponse;

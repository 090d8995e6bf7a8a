use crate::{
    domain::{
        requests::FindAllTrips,
        responses::{ApiResponse, ApiResponsePagination, TripResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTripQueryService = Arc<dyn TripQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait TripQueryServiceTrait {
    async fn list_trips(
        &self,
        req: &FindAllTrips,
    ) -> Result<ApiResponsePagination<Vec<TripResponse>>, ServiceError>;
    async fn get_trip(&self, id: &str) -> Result<ApiResponse<TripResponse>, ServiceError>;
}

use crate::{
    domain::{
        requests::{CreateTripRequest, UpdateTripRequest},
        responses::{ApiResponse, TripIdResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTripCommandService = Arc<dyn TripCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait TripCommandServiceTrait {
    async fn create_trip(
        &self,
        req: &CreateTripRequest,
    ) -> Result<ApiResponse<TripIdResponse>, ServiceError>;
    async fn update_trip(
        &self,
        id: &str,
        req: &UpdateTripRequest,
    ) -> Result<ApiResponse<TripIdResponse>, ServiceError>;
    async fn delete_trip(&self, id: &str) -> Result<ApiResponse<TripIdResponse>, ServiceError>;
}

use crate::{
    domain::{
        requests::{ServiceLine, UpdateServiceLine},
        responses::{ApiResponse, ServiceTypeResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTripServiceService = Arc<dyn TripServiceServiceTrait + Send + Sync>;

#[async_trait]
pub trait TripServiceServiceTrait {
    async fn list_service_catalog(
        &self,
    ) -> Result<ApiResponse<Vec<ServiceTypeResponse>>, ServiceError>;
    async fn attach_service(
        &self,
        trip_id: &str,
        line: &ServiceLine,
    ) -> Result<ApiResponse<()>, ServiceError>;
    async fn update_attached_service(
        &self,
        trip_id: &str,
        service_type_id: i64,
        changes: &UpdateServiceLine,
    ) -> Result<ApiResponse<()>, ServiceError>;
    async fn detach_service(
        &self,
        trip_id: &str,
        service_type_id: i64,
    ) -> Result<ApiResponse<()>, ServiceError>;
}

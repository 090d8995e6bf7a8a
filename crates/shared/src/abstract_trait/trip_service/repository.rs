use crate::{
    domain::requests::{ServiceLine, UpdateServiceLine},
    engine::ConnRef,
    errors::RepositoryError,
    model::trip_service::ServiceTypeModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTripServiceRepository = Arc<dyn TripServiceRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TripServiceRepositoryTrait {
    async fn find_catalog(&self) -> Result<Vec<ServiceTypeModel>, RepositoryError>;
    async fn create_for_trip(
        &self,
        trip_id: &str,
        line: &ServiceLine,
        conn: Option<ConnRef<'_>>,
    ) -> Result<(), RepositoryError>;
    /// Returns affected rows; zero means the trip has no such service.
    async fn update_for_trip(
        &self,
        trip_id: &str,
        service_type_id: i64,
        changes: &UpdateServiceLine,
        conn: Option<ConnRef<'_>>,
    ) -> Result<u64, RepositoryError>;
    async fn delete_for_trip(
        &self,
        trip_id: &str,
        service_type_id: i64,
        conn: Option<ConnRef<'_>>,
    ) -> Result<u64, RepositoryError>;
}

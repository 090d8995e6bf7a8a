use crate::{
    domain::requests::{NewTrip, TripPatch},
    engine::ConnRef,
    errors::RepositoryError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTripCommandRepository = Arc<dyn TripCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TripCommandRepositoryTrait {
    async fn create(&self, trip: &NewTrip, conn: Option<ConnRef<'_>>)
    -> Result<String, RepositoryError>;
    async fn update(
        &self,
        id: &str,
        patch: &TripPatch,
        conn: Option<ConnRef<'_>>,
    ) -> Result<String, RepositoryError>;
    async fn delete(&self, id: &str, conn: Option<ConnRef<'_>>) -> Result<String, RepositoryError>;
}

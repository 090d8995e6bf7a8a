use crate::{
    domain::requests::TripListQuery, engine::ConnRef, errors::RepositoryError,
    model::trip::TripModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTripQueryRepository = Arc<dyn TripQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TripQueryRepositoryTrait {
    /// One page of trips plus the unpaginated total.
    async fn find_all(&self, query: &TripListQuery)
    -> Result<(Vec<TripModel>, i64), RepositoryError>;
    async fn find_by_id(
        &self,
        id: &str,
        conn: Option<ConnRef<'_>>,
    ) -> Result<Option<TripModel>, RepositoryError>;
}

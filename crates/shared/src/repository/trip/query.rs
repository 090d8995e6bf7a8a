use crate::{
    abstract_trait::trip::repository::query::TripQueryRepositoryTrait,
    domain::requests::TripListQuery,
    engine::{ConnRef, Param},
    errors::RepositoryError,
    executor::QueryExecutor,
    model::trip::TripModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

const LIST_TRIPS: &str = "obtener_viajes";
const FIND_TRIP: &str = "obtener_viaje";

pub struct TripQueryRepository {
    executor: QueryExecutor,
}

impl TripQueryRepository {
    pub fn new(executor: QueryExecutor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl TripQueryRepositoryTrait for TripQueryRepository {
    async fn find_all(
        &self,
        query: &TripListQuery,
    ) -> Result<(Vec<TripModel>, i64), RepositoryError> {
        let params = vec![
            Param::from(query.filter.clone()),
            Param::from(query.limit),
            Param::from(query.offset),
            Param::from(query.month.map(i64::from)),
            Param::from(query.year),
        ];

        let bundle = self
            .executor
            .fetch_result_sets(None, LIST_TRIPS, params)
            .await?;

        // Result sets are not positionally stable across procedure versions:
        // the count set is located by its `total` column.
        let total = bundle.find_total().unwrap_or(0);

        let Some(set) = bundle.data_set() else {
            return Ok((Vec::new(), total));
        };

        let mut trips = Vec::with_capacity(set.len());
        for (index, row) in set.decode_each::<TripModel>().into_iter().enumerate() {
            match row {
                Ok(trip) => trips.push(trip),
                Err(e) => warn!(row = index, "⚠️ Skipping unreadable trip row from {LIST_TRIPS}: {e}"),
            }
        }

        if trips.is_empty() {
            warn!(
                sets = bundle.sets().len(),
                rows = set.len(),
                "⚠️ No readable trip rows from {LIST_TRIPS}, answering with an empty page"
            );
            return Ok((Vec::new(), 0));
        }

        info!("📄 {LIST_TRIPS} returned {} trips of {total}", trips.len());

        Ok((trips, total))
    }

    async fn find_by_id(
        &self,
        id: &str,
        conn: Option<ConnRef<'_>>,
    ) -> Result<Option<TripModel>, RepositoryError> {
        self.executor
            .fetch_one(conn, FIND_TRIP, vec![Param::from(id)], true)
            .await
    }
}

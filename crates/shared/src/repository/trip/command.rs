use crate::{
    abstract_trait::trip::repository::command::TripCommandRepositoryTrait,
    domain::requests::{NewTrip, TripPatch},
    engine::{ConnRef, Param},
    errors::{EngineError, RepositoryError},
    executor::QueryExecutor,
    model::trip::{Destination, TripIdRow},
};
use anyhow::Result;
use async_trait::async_trait;

const INSERT_TRIP: &str = "insertar_viaje";
const UPDATE_TRIP: &str = "actualizar_viaje";
const DELETE_TRIP: &str = "eliminar_viaje";

pub struct TripCommandRepository {
    executor: QueryExecutor,
}

impl TripCommandRepository {
    pub fn new(executor: QueryExecutor) -> Self {
        Self { executor }
    }
}

fn destination_param(destination: Destination) -> Param {
    match destination {
        Destination::Domestic => Param::from("nacional"),
        Destination::International => Param::from("internacional"),
    }
}

#[async_trait]
impl TripCommandRepositoryTrait for TripCommandRepository {
    async fn create(
        &self,
        trip: &NewTrip,
        conn: Option<ConnRef<'_>>,
    ) -> Result<String, RepositoryError> {
        let params = vec![
            Param::from(trip.surname.clone()),
            Param::from(trip.total_value),
            destination_param(trip.destination),
            Param::from(trip.departure_date),
            Param::from(trip.return_date),
            Param::from(trip.currency_id),
            Param::from(trip.exchange_rate),
        ];

        let row: Option<TripIdRow> = self
            .executor
            .fetch_one(conn, INSERT_TRIP, params, true)
            .await?;

        row.map(|row| row.id)
            .ok_or_else(|| RepositoryError::Infrastructure {
                description: format!("{INSERT_TRIP} returned no id"),
                cause: EngineError::Decode("missing {id} row".to_string()),
            })
    }

    async fn update(
        &self,
        id: &str,
        patch: &TripPatch,
        conn: Option<ConnRef<'_>>,
    ) -> Result<String, RepositoryError> {
        let patch = patch.clone();
        let params = vec![
            Param::from(id),
            Param::from(patch.surname),
            Param::from(patch.total_value),
            patch
                .destination
                .into_option()
                .map_or(Param::Null, destination_param),
            Param::from(patch.departure_date),
            Param::from(patch.return_date),
            Param::from(patch.currency_id),
            Param::from(patch.exchange_rate),
        ];

        let row: Option<TripIdRow> = self
            .executor
            .fetch_one(conn, UPDATE_TRIP, params, false)
            .await?;

        Ok(row.map_or_else(|| id.to_string(), |row| row.id))
    }

    async fn delete(&self, id: &str, conn: Option<ConnRef<'_>>) -> Result<String, RepositoryError> {
        let row: Option<TripIdRow> = self
            .executor
            .fetch_one(conn, DELETE_TRIP, vec![Param::from(id)], false)
            .await?;

        Ok(row.map_or_else(|| id.to_string(), |row| row.id))
    }
}

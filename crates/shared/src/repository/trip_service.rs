use crate::{
    abstract_trait::trip_service::repository::TripServiceRepositoryTrait,
    domain::requests::{ServiceLine, UpdateServiceLine},
    engine::{ConnRef, Param},
    errors::RepositoryError,
    executor::QueryExecutor,
    model::trip_service::ServiceTypeModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

const LIST_CATALOG: &str = "SELECT id, nombre, descripcion FROM servicio_tipo";
const INSERT_SERVICE: &str = "insertar_servicio_viaje";
const UPDATE_SERVICE: &str = "actualizar_servicio_viaje";
const DELETE_SERVICE: &str = "eliminar_servicio_viaje";

pub struct TripServiceRepository {
    executor: QueryExecutor,
}

impl TripServiceRepository {
    pub fn new(executor: QueryExecutor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl TripServiceRepositoryTrait for TripServiceRepository {
    async fn find_catalog(&self) -> Result<Vec<ServiceTypeModel>, RepositoryError> {
        let catalog: Vec<ServiceTypeModel> =
            self.executor.query_all(None, LIST_CATALOG, Vec::new()).await?;

        info!("📚 Service catalog has {} entries", catalog.len());

        Ok(catalog)
    }

    async fn create_for_trip(
        &self,
        trip_id: &str,
        line: &ServiceLine,
        conn: Option<ConnRef<'_>>,
    ) -> Result<(), RepositoryError> {
        let params = vec![
            Param::from(trip_id),
            Param::from(line.service_type_id),
            Param::from(line.amount),
            Param::from(line.paid_by.clone()),
            Param::from(line.currency_id),
            Param::from(line.exchange_rate),
        ];

        self.executor
            .call_affected(conn, INSERT_SERVICE, params)
            .await?;

        Ok(())
    }

    async fn update_for_trip(
        &self,
        trip_id: &str,
        service_type_id: i64,
        changes: &UpdateServiceLine,
        conn: Option<ConnRef<'_>>,
    ) -> Result<u64, RepositoryError> {
        let changes = changes.clone();
        let params = vec![
            Param::from(trip_id),
            Param::from(service_type_id),
            Param::from(changes.amount),
            Param::from(changes.paid_by),
            Param::from(changes.currency_id),
            Param::from(changes.exchange_rate),
        ];

        self.executor
            .call_affected(conn, UPDATE_SERVICE, params)
            .await
    }

    async fn delete_for_trip(
        &self,
        trip_id: &str,
        service_type_id: i64,
        conn: Option<ConnRef<'_>>,
    ) -> Result<u64, RepositoryError> {
        let params = vec![Param::from(trip_id), Param::from(service_type_id)];

        self.executor
            .call_affected(conn, DELETE_SERVICE, params)
            .await
    }
}

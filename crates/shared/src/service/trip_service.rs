use crate::{
    abstract_trait::trip_service::{
        repository::DynTripServiceRepository, service::TripServiceServiceTrait,
    },
    config::ValidationConfig,
    domain::{
        requests::{Patch, ServiceLine, UpdateServiceLine},
        responses::{ApiResponse, ServiceTypeResponse},
    },
    errors::{ServiceError, format_validation_errors},
    executor::TransactionManager,
    utils::validation::is_valid_trip_id,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct TripServiceService {
    transactions: TransactionManager,
    repository: DynTripServiceRepository,
    validation: ValidationConfig,
    max_attempts: u32,
}

impl TripServiceService {
    pub fn new(
        transactions: TransactionManager,
        repository: DynTripServiceRepository,
        validation: ValidationConfig,
        max_attempts: u32,
    ) -> Self {
        Self {
            transactions,
            repository,
            validation,
            max_attempts,
        }
    }

    fn check_target(&self, trip_id: &str, service_type_id: i64) -> Vec<String> {
        let mut errors = Vec::new();
        if !is_valid_trip_id(trip_id) {
            errors.push(format!("viaje: '{trip_id}' no es un id de viaje válido"));
        }
        if service_type_id <= 0 {
            errors.push(format!("servicio: '{service_type_id}' no es un id válido"));
        }
        errors
    }

    fn check_payer(&self, payer: &str, errors: &mut Vec<String>) {
        if !self.validation.is_known_payer(payer) {
            errors.push(format!("pagado_por: '{payer}' no es un pagador válido"));
        }
    }
}

fn not_attached(trip_id: &str, service_type_id: i64) -> ServiceError {
    ServiceError::NotFound(format!(
        "El servicio {service_type_id} no está asociado al viaje {trip_id}"
    ))
}

#[async_trait]
impl TripServiceServiceTrait for TripServiceService {
    async fn list_service_catalog(
        &self,
    ) -> Result<ApiResponse<Vec<ServiceTypeResponse>>, ServiceError> {
        info!("📚 Fetching service catalog");

        let catalog = self.repository.find_catalog().await.map_err(|e| {
            error!("❌ Failed to fetch service catalog: {e:?}");
            ServiceError::from(e)
        })?;

        Ok(ApiResponse::success(
            "Service catalog retrieved successfully",
            catalog.into_iter().map(ServiceTypeResponse::from).collect(),
        ))
    }

    async fn attach_service(
        &self,
        trip_id: &str,
        line: &ServiceLine,
    ) -> Result<ApiResponse<()>, ServiceError> {
        let mut errors = self.check_target(trip_id, line.service_type_id);
        if let Err(e) = line.validate() {
            errors.extend(format_validation_errors(&e));
        }
        self.check_payer(&line.paid_by, &mut errors);
        if !errors.is_empty() {
            error!("❌ Service attachment rejected: {errors:?}");
            return Err(ServiceError::Validation(errors));
        }

        info!(
            "📎 Attaching service {} to trip {trip_id}",
            line.service_type_id
        );

        let repository = self.repository.clone();
        let trip = trip_id.to_string();
        let line = line.clone();

        self.transactions
            .execute_with_retry(self.max_attempts, move |conn| {
                let repository = repository.clone();
                let trip = trip.clone();
                let line = line.clone();

                Box::pin(async move {
                    repository.create_for_trip(&trip, &line, Some(conn)).await?;
                    Ok::<_, ServiceError>(())
                })
            })
            .await
            .inspect_err(|e| error!("❌ Failed to attach service to trip {trip_id}: {e:?}"))?;

        Ok(ApiResponse::success("Service attached successfully", ()))
    }

    async fn update_attached_service(
        &self,
        trip_id: &str,
        service_type_id: i64,
        changes: &UpdateServiceLine,
    ) -> Result<ApiResponse<()>, ServiceError> {
        let mut errors = self.check_target(trip_id, service_type_id);
        if let Err(e) = changes.validate() {
            errors.extend(format_validation_errors(&e));
        }
        if let Patch::Set(payer) = &changes.paid_by {
            self.check_payer(payer, &mut errors);
        }
        if !errors.is_empty() {
            error!("❌ Service update rejected: {errors:?}");
            return Err(ServiceError::Validation(errors));
        }

        info!("✏️ Updating service {service_type_id} of trip {trip_id}");

        let repository = self.repository.clone();
        let trip = trip_id.to_string();
        let changes = changes.clone();

        self.transactions
            .execute_with_retry(self.max_attempts, move |conn| {
                let repository = repository.clone();
                let trip = trip.clone();
                let changes = changes.clone();

                Box::pin(async move {
                    let affected = repository
                        .update_for_trip(&trip, service_type_id, &changes, Some(conn))
                        .await?;

                    if affected == 0 {
                        return Err(not_attached(&trip, service_type_id));
                    }
                    Ok::<_, ServiceError>(())
                })
            })
            .await
            .inspect_err(|e| {
                error!("❌ Failed to update service {service_type_id} of trip {trip_id}: {e:?}")
            })?;

        Ok(ApiResponse::success("Service updated successfully", ()))
    }

    async fn detach_service(
        &self,
        trip_id: &str,
        service_type_id: i64,
    ) -> Result<ApiResponse<()>, ServiceError> {
        let errors = self.check_target(trip_id, service_type_id);
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        info!("🗑️ Detaching service {service_type_id} from trip {trip_id}");

        let repository = self.repository.clone();
        let trip = trip_id.to_string();

        self.transactions
            .execute_with_retry(self.max_attempts, move |conn| {
                let repository = repository.clone();
                let trip = trip.clone();

                Box::pin(async move {
                    let affected = repository
                        .delete_for_trip(&trip, service_type_id, Some(conn))
                        .await?;

                    if affected == 0 {
                        return Err(not_attached(&trip, service_type_id));
                    }
                    Ok::<_, ServiceError>(())
                })
            })
            .await
            .inspect_err(|e| {
                error!("❌ Failed to detach service {service_type_id} from trip {trip_id}: {e:?}")
            })?;

        Ok(ApiResponse::success("Service detached successfully", ()))
    }
}

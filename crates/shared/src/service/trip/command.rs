use crate::{
    abstract_trait::{
        trip::{
            repository::{command::DynTripCommandRepository, query::DynTripQueryRepository},
            service::command::TripCommandServiceTrait,
        },
        trip_service::repository::DynTripServiceRepository,
    },
    config::ValidationConfig,
    domain::{
        requests::{CreateTripRequest, NewTrip, Patch, TripPatch, UpdateTripRequest},
        responses::{ApiResponse, TripIdResponse},
    },
    errors::{RepositoryError, ServiceError, format_validation_errors},
    executor::TransactionManager,
    model::trip::TripModel,
    utils::validation::{is_valid_trip_id, parse_date, validate_date_range},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info, warn};
use validator::Validate;

pub struct TripCommandService {
    transactions: TransactionManager,
    command: DynTripCommandRepository,
    query: DynTripQueryRepository,
    services: DynTripServiceRepository,
    validation: ValidationConfig,
    max_attempts: u32,
}

impl TripCommandService {
    pub fn new(
        transactions: TransactionManager,
        command: DynTripCommandRepository,
        query: DynTripQueryRepository,
        services: DynTripServiceRepository,
        validation: ValidationConfig,
        max_attempts: u32,
    ) -> Self {
        Self {
            transactions,
            command,
            query,
            services,
            validation,
            max_attempts,
        }
    }
}

fn validation_messages<T: Validate>(req: &T) -> Vec<String> {
    match req.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => format_validation_errors(&errors),
    }
}

fn check_trip_id(id: &str) -> Result<(), ServiceError> {
    if is_valid_trip_id(id) {
        Ok(())
    } else {
        Err(ServiceError::validation(format!(
            "id: '{id}' no es un id de viaje válido"
        )))
    }
}

fn trip_not_found(id: &str) -> ServiceError {
    ServiceError::NotFound(format!("Viaje {id} no encontrado"))
}

/// Everything a create needs checked before any database work.
pub fn prepare_create(
    req: &CreateTripRequest,
    validation: &ValidationConfig,
) -> Result<NewTrip, ServiceError> {
    let mut errors = validation_messages(req);

    let departure = parse_date("fecha_ida", &req.departure_date)
        .map_err(|e| errors.push(e))
        .ok();
    let return_date = parse_date("fecha_vuelta", &req.return_date)
        .map_err(|e| errors.push(e))
        .ok();

    if let (Some(departure), Some(return_date)) = (departure, return_date) {
        errors.extend(validate_date_range(departure, return_date).err());
    }

    for (index, line) in req.services.iter().enumerate() {
        if !validation.is_known_payer(&line.paid_by) {
            errors.push(format!(
                "servicios[{index}].pagado_por: '{}' no es un pagador válido",
                line.paid_by
            ));
        }
    }

    match (departure, return_date) {
        (Some(departure_date), Some(return_date)) if errors.is_empty() => Ok(NewTrip {
            surname: req.surname.trim().to_string(),
            total_value: req.total_value,
            destination: req.destination,
            departure_date,
            return_date,
            currency_id: req.currency_id,
            exchange_rate: req.exchange_rate,
        }),
        _ => Err(ServiceError::Validation(errors)),
    }
}

/// Everything an update can check without loading the trip.
pub fn prepare_update(
    req: &UpdateTripRequest,
    validation: &ValidationConfig,
) -> Result<TripPatch, ServiceError> {
    let mut errors = validation_messages(req);

    let departure_date = match &req.departure_date {
        Patch::Set(raw) => match parse_date("fecha_ida", raw) {
            Ok(date) => Patch::Set(date),
            Err(e) => {
                errors.push(e);
                Patch::Keep
            }
        },
        Patch::Keep => Patch::Keep,
    };
    let return_date = match &req.return_date {
        Patch::Set(raw) => match parse_date("fecha_vuelta", raw) {
            Ok(date) => Patch::Set(date),
            Err(e) => {
                errors.push(e);
                Patch::Keep
            }
        },
        Patch::Keep => Patch::Keep,
    };

    if let (Patch::Set(departure), Patch::Set(return_date)) = (&departure_date, &return_date) {
        errors.extend(validate_date_range(*departure, *return_date).err());
    }

    for (index, line) in req.services.iter().flatten().enumerate() {
        if let Patch::Set(payer) = &line.changes.paid_by {
            if !validation.is_known_payer(payer) {
                errors.push(format!(
                    "servicios[{index}].pagado_por: '{payer}' no es un pagador válido"
                ));
            }
        }
    }

    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    Ok(TripPatch {
        surname: req.surname.clone().map(|s| s.trim().to_string()),
        total_value: req.total_value.clone(),
        destination: req.destination.clone(),
        departure_date,
        return_date,
        currency_id: req.currency_id.clone(),
        exchange_rate: req.exchange_rate.clone(),
    })
}

/// When only one date changes, the new one must still be ordered against the
/// stored one.
pub fn check_merged_dates(patch: &TripPatch, current: &TripModel) -> Result<(), ServiceError> {
    let pair = match (&patch.departure_date, &patch.return_date) {
        (Patch::Set(departure), Patch::Keep) => current.return_date.map(|r| (*departure, r)),
        (Patch::Keep, Patch::Set(return_date)) => current.departure_date.map(|d| (d, *return_date)),
        _ => None,
    };

    match pair {
        Some((departure, return_date)) => {
            validate_date_range(departure, return_date).map_err(ServiceError::validation)
        }
        None => Ok(()),
    }
}

#[async_trait]
impl TripCommandServiceTrait for TripCommandService {
    async fn create_trip(
        &self,
        req: &CreateTripRequest,
    ) -> Result<ApiResponse<TripIdResponse>, ServiceError> {
        let trip = prepare_create(req, &self.validation).inspect_err(|e| {
            error!("❌ Trip creation rejected: {e}");
        })?;

        info!(
            "✈️ Creating trip for '{}' with {} services",
            trip.surname,
            req.services.len()
        );

        let command = self.command.clone();
        let services = self.services.clone();
        let lines = req.services.clone();

        let id = self
            .transactions
            .execute_with_retry(self.max_attempts, move |conn| {
                let command = command.clone();
                let services = services.clone();
                let trip = trip.clone();
                let lines = lines.clone();

                Box::pin(async move {
                    let id = command.create(&trip, Some(&mut *conn)).await?;

                    for (index, line) in lines.iter().enumerate() {
                        services
                            .create_for_trip(&id, line, Some(&mut *conn))
                            .await
                            .inspect_err(|e| {
                                warn!("⚠️ Service line {} of trip {id} failed: {e}", index + 1);
                            })?;
                    }

                    Ok::<_, ServiceError>(id)
                })
            })
            .await
            .inspect_err(|e| error!("❌ Failed to create trip: {e:?}"))?;

        info!("✅ Trip {id} created");

        Ok(ApiResponse::success(
            "Trip created successfully",
            TripIdResponse { id },
        ))
    }

    async fn update_trip(
        &self,
        id: &str,
        req: &UpdateTripRequest,
    ) -> Result<ApiResponse<TripIdResponse>, ServiceError> {
        check_trip_id(id)?;
        let patch = prepare_update(req, &self.validation).inspect_err(|e| {
            error!("❌ Trip update rejected: {e}");
        })?;

        let lines = req.services.clone().unwrap_or_default();

        info!("✏️ Updating trip {id} with {} service changes", lines.len());

        let command = self.command.clone();
        let query = self.query.clone();
        let services = self.services.clone();
        let trip_id = id.to_string();

        let updated = self
            .transactions
            .execute_with_retry(self.max_attempts, move |conn| {
                let command = command.clone();
                let query = query.clone();
                let services = services.clone();
                let patch = patch.clone();
                let lines = lines.clone();
                let id = trip_id.clone();

                Box::pin(async move {
                    let current = query
                        .find_by_id(&id, Some(&mut *conn))
                        .await?
                        .ok_or_else(|| trip_not_found(&id))?;

                    check_merged_dates(&patch, &current)?;

                    let updated = command
                        .update(&id, &patch, Some(&mut *conn))
                        .await
                        .map_err(|e| match e {
                            RepositoryError::NotFound(_) => trip_not_found(&id),
                            other => ServiceError::from(other),
                        })?;

                    for line in &lines {
                        let affected = services
                            .update_for_trip(
                                &id,
                                line.service_type_id,
                                &line.changes,
                                Some(&mut *conn),
                            )
                            .await?;

                        if affected == 0 {
                            return Err(ServiceError::NotFound(format!(
                                "El servicio {} no está asociado al viaje {id}",
                                line.service_type_id
                            )));
                        }
                    }

                    Ok::<_, ServiceError>(updated)
                })
            })
            .await
            .inspect_err(|e| error!("❌ Failed to update trip {id}: {e:?}"))?;

        info!("✅ Trip {updated} updated");

        Ok(ApiResponse::success(
            "Trip updated successfully",
            TripIdResponse { id: updated },
        ))
    }

    async fn delete_trip(&self, id: &str) -> Result<ApiResponse<TripIdResponse>, ServiceError> {
        check_trip_id(id)?;

        info!("🗑️ Deleting trip {id}");

        let command = self.command.clone();
        let query = self.query.clone();
        let trip_id = id.to_string();

        let deleted = self
            .transactions
            .execute_with_retry(self.max_attempts, move |conn| {
                let command = command.clone();
                let query = query.clone();
                let id = trip_id.clone();

                Box::pin(async move {
                    // Some engine versions echo the id even when nothing matched.
                    if query.find_by_id(&id, Some(&mut *conn)).await?.is_none() {
                        return Err(trip_not_found(&id));
                    }

                    let deleted = command
                        .delete(&id, Some(conn))
                        .await
                        .map_err(|e| match e {
                            RepositoryError::NotFound(_) => trip_not_found(&id),
                            other => ServiceError::from(other),
                        })?;

                    Ok::<_, ServiceError>(deleted)
                })
            })
            .await
            .inspect_err(|e| error!("❌ Failed to delete trip {id}: {e:?}"))?;

        info!("✅ Trip {deleted} deleted");

        Ok(ApiResponse::success(
            "Trip deleted successfully",
            TripIdResponse { id: deleted },
        ))
    }
}

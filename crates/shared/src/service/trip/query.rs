use crate::{
    abstract_trait::trip::{
        repository::query::DynTripQueryRepository, service::query::TripQueryServiceTrait,
    },
    config::ValidationConfig,
    domain::{
        requests::{FindAllTrips, TripListQuery},
        responses::{ApiResponse, ApiResponsePagination, Pagination, TripResponse},
    },
    errors::ServiceError,
    utils::validation::{is_valid_trip_id, sanitize_filter, validate_month, validate_year},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

pub struct TripQueryService {
    query: DynTripQueryRepository,
    validation: ValidationConfig,
}

impl TripQueryService {
    pub fn new(query: DynTripQueryRepository, validation: ValidationConfig) -> Self {
        Self { query, validation }
    }
}

/// Clamps paging and checks the period. Returns the normalised query and the
/// requested page.
pub fn normalize_list_request(
    req: &FindAllTrips,
    validation: &ValidationConfig,
) -> Result<(TripListQuery, i64), ServiceError> {
    let limit = req
        .limit
        .unwrap_or(validation.default_limit)
        .clamp(validation.min_limit, validation.max_limit);
    let page = req.page.unwrap_or(1).max(1);

    let mut errors = Vec::new();
    if let Some(month) = req.month {
        errors.extend(validate_month(month).err());
    }
    if let Some(year) = req.year {
        errors.extend(validate_year(year, validation.min_trip_year).err());
    }
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    let query = TripListQuery {
        filter: sanitize_filter(req.filter.as_deref(), validation.max_filter_length),
        limit,
        offset: (page - 1).saturating_mul(limit),
        month: req.month,
        year: req.year,
    };

    Ok((query, page))
}

#[async_trait]
impl TripQueryServiceTrait for TripQueryService {
    async fn list_trips(
        &self,
        req: &FindAllTrips,
    ) -> Result<ApiResponsePagination<Vec<TripResponse>>, ServiceError> {
        let (query, page) = normalize_list_request(req, &self.validation).inspect_err(|e| {
            error!("❌ Invalid trip listing request: {e}");
        })?;

        info!(
            "🔍 Listing trips | Page: {page}, Limit: {}, Filter: {:?}, Month: {:?}, Year: {:?}",
            query.limit, query.filter, query.month, query.year
        );

        let (trips, total) = self.query.find_all(&query).await.map_err(|e| {
            error!("❌ Failed to list trips: {e:?}");
            ServiceError::from(e)
        })?;

        let pagination = Pagination::build(page, query.limit, total);
        let data: Vec<TripResponse> = trips.into_iter().map(TripResponse::from).collect();

        info!(
            "✅ Found {} trips (page {} of {})",
            data.len(),
            pagination.current_page,
            pagination.total_pages
        );

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Trips retrieved successfully".to_string(),
            data,
            pagination,
        })
    }

    async fn get_trip(&self, id: &str) -> Result<ApiResponse<TripResponse>, ServiceError> {
        if !is_valid_trip_id(id) {
            return Err(ServiceError::validation(format!("id: '{id}' no es un id de viaje válido")));
        }

        info!("🔍 Fetching trip id={id}");

        let trip = self
            .query
            .find_by_id(id, None)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch trip {id}: {e:?}");
                ServiceError::from(e)
            })?
            .ok_or_else(|| ServiceError::NotFound(format!("Viaje {id} no encontrado")))?;

        Ok(ApiResponse::success(
            "Trip retrieved successfully",
            TripResponse::from(trip),
        ))
    }
}

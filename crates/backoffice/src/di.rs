use shared::{
    abstract_trait::{
        finance::{repository::DynFinanceRepository, service::DynFinanceService},
        trip::{
            repository::{command::DynTripCommandRepository, query::DynTripQueryRepository},
            service::{command::DynTripCommandService, query::DynTripQueryService},
        },
        trip_service::{repository::DynTripServiceRepository, service::DynTripServiceService},
    },
    config::Config,
    engine::DynEngine,
    executor::{QueryExecutor, TransactionManager},
    repository::{
        finance::FinanceRepository,
        trip::{command::TripCommandRepository, query::TripQueryRepository},
        trip_service::TripServiceRepository,
    },
    service::{
        finance::FinanceService,
        trip::{command::TripCommandService, query::TripQueryService},
        trip_service::TripServiceService,
    },
};
use std::sync::Arc;

/// Everything the outer layer needs, wired once at startup.
#[derive(Clone)]
pub struct DependenciesInject {
    pub trip_query: DynTripQueryService,
    pub trip_command: DynTripCommandService,
    pub trip_service: DynTripServiceService,
    pub finance: DynFinanceService,
}

impl DependenciesInject {
    pub fn new(engine: DynEngine, config: &Config) -> Self {
        let executor = QueryExecutor::new(engine.clone());
        let transactions = TransactionManager::new(engine);

        let trip_query_repo =
            Arc::new(TripQueryRepository::new(executor.clone())) as DynTripQueryRepository;
        let trip_command_repo =
            Arc::new(TripCommandRepository::new(executor.clone())) as DynTripCommandRepository;
        let trip_service_repo =
            Arc::new(TripServiceRepository::new(executor.clone())) as DynTripServiceRepository;
        let finance_repo = Arc::new(FinanceRepository::new(executor)) as DynFinanceRepository;

        let trip_query = Arc::new(TripQueryService::new(
            trip_query_repo.clone(),
            config.validation.clone(),
        )) as DynTripQueryService;

        let trip_command = Arc::new(TripCommandService::new(
            transactions.clone(),
            trip_command_repo,
            trip_query_repo,
            trip_service_repo.clone(),
            config.validation.clone(),
            config.tx_max_attempts,
        )) as DynTripCommandService;

        let trip_service = Arc::new(TripServiceService::new(
            transactions,
            trip_service_repo,
            config.validation.clone(),
            config.tx_max_attempts,
        )) as DynTripServiceService;

        let finance = Arc::new(FinanceService::new(finance_repo, config.validation.clone()))
            as DynFinanceService;

        Self {
            trip_query,
            trip_command,
            trip_service,
            finance,
        }
    }
}

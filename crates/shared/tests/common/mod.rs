//! In-memory stand-in for the MySQL procedures. Every connection, statement
//! and transaction boundary is recorded so tests can assert on them.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use shared::{
    config::ValidationConfig,
    engine::{
        DynEngine, Engine, EngineConnection, ExecOutcome, Param, ResultBundle, ResultSet, Row,
    },
    errors::EngineError,
    executor::{Backoff, QueryExecutor, TransactionManager},
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
use std::{
    collections::BTreeMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Acquired(usize),
    Begun(usize),
    Committed(usize),
    RolledBack(usize),
    Released(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredTrip {
    pub id: String,
    pub surname: String,
    pub total_value: Decimal,
    pub destination: String,
    pub departure: NaiveDate,
    pub return_date: NaiveDate,
    pub currency_id: i64,
    pub rate: Option<Decimal>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredService {
    pub trip_id: String,
    pub service_type_id: i64,
    pub amount: Decimal,
    pub payer: String,
    pub currency_id: i64,
    pub rate: Option<Decimal>,
}

#[derive(Debug, Clone, Default)]
struct Store {
    trips: BTreeMap<String, StoredTrip>,
    services: Vec<StoredService>,
    rates: BTreeMap<u64, (i64, Decimal)>,
    next_trip: u32,
    next_rate: u64,
}

#[derive(Debug, Default)]
struct Failures {
    service_type: Option<i64>,
    contention: u32,
    malformed_page: bool,
    malformed_trips: Vec<String>,
    shuffled_sets: bool,
    echo_missing_ids: bool,
}

struct State {
    store: Store,
    catalog: Vec<(i64, &'static str)>,
    currencies: Vec<(i64, &'static str)>,
    finance_rows: Vec<Row>,
    failures: Failures,
    events: Vec<Event>,
    calls: Vec<String>,
    next_conn: usize,
}

#[derive(Debug)]
pub struct FakeDbError {
    message: String,
    foreign_key: bool,
}

impl fmt::Display for FakeDbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FakeDbError {}

impl sqlx::error::DatabaseError for FakeDbError {
    fn message(&self) -> &str {
        &self.message
    }

    fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> sqlx::error::ErrorKind {
        if self.foreign_key {
            sqlx::error::ErrorKind::ForeignKeyViolation
        } else {
            sqlx::error::ErrorKind::UniqueViolation
        }
    }
}

fn foreign_key_error(message: &str) -> EngineError {
    EngineError::Sqlx(sqlx::Error::Database(Box::new(FakeDbError {
        message: message.to_string(),
        foreign_key: true,
    })))
}

fn duplicate_error(message: &str) -> EngineError {
    EngineError::Sqlx(sqlx::Error::Database(Box::new(FakeDbError {
        message: message.to_string(),
        foreign_key: false,
    })))
}

#[derive(Clone)]
pub struct ScriptedEngine {
    state: Arc<Mutex<State>>,
}

impl Default for ScriptedEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                store: Store::default(),
                catalog: vec![(1, "Hotel"), (2, "Vuelo"), (3, "Traslado")],
                currencies: vec![(1, "ARS"), (2, "USD")],
                finance_rows: Vec::new(),
                failures: Failures::default(),
                events: Vec::new(),
                calls: Vec::new(),
                next_conn: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn dyn_engine(&self) -> DynEngine {
        Arc::new(self.clone())
    }

    /// Commits `count` trips directly, bypassing the call log.
    pub fn seed_trips(&self, count: usize) -> Vec<String> {
        let mut state = self.lock();
        (0..count)
            .map(|i| {
                let day = (i % 20) as u32 + 1;
                let trip = StoredTrip {
                    id: String::new(),
                    surname: format!("Pasajero{i}"),
                    total_value: Decimal::from(1000 + i as i64),
                    destination: "nacional".into(),
                    departure: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
                    return_date: NaiveDate::from_ymd_opt(2025, 3, day + 5).unwrap(),
                    currency_id: 1,
                    rate: None,
                    status: "pendiente".into(),
                };
                insert_trip(&mut state.store, trip)
            })
            .collect()
    }

    pub fn seed_service(&self, trip_id: &str, service_type_id: i64, amount: i64) {
        self.lock().store.services.push(StoredService {
            trip_id: trip_id.to_string(),
            service_type_id,
            amount: Decimal::from(amount),
            payer: "pablo".into(),
            currency_id: 1,
            rate: None,
        });
    }

    pub fn fail_on_service_type(&self, service_type_id: i64) {
        self.lock().failures.service_type = Some(service_type_id);
    }

    /// The next `times` trip inserts fail with a deadlock.
    pub fn fail_with_contention(&self, times: u32) {
        self.lock().failures.contention = times;
    }

    pub fn serve_malformed_page(&self) {
        self.lock().failures.malformed_page = true;
    }

    /// Only this trip's listing row comes back unreadable.
    pub fn serve_malformed_trip(&self, id: &str) {
        self.lock().failures.malformed_trips.push(id.to_string());
    }

    pub fn set_trip_status(&self, id: &str, status: &str) {
        if let Some(trip) = self.lock().store.trips.get_mut(id) {
            trip.status = status.to_string();
        }
    }

    /// Write procedures answer `{id}` even when no row matched.
    pub fn echo_missing_ids(&self) {
        self.lock().failures.echo_missing_ids = true;
    }

    /// Listing answers with the status set first and the page last.
    pub fn shuffle_result_sets(&self) {
        self.lock().failures.shuffled_sets = true;
    }

    pub fn set_finance_rows(&self, rows: Vec<Value>) {
        self.lock().finance_rows = rows.into_iter().map(to_row).collect();
    }

    pub fn trip(&self, id: &str) -> Option<StoredTrip> {
        self.lock().store.trips.get(id).cloned()
    }

    pub fn trip_count(&self) -> usize {
        self.lock().store.trips.len()
    }

    pub fn services_of(&self, trip_id: &str) -> Vec<StoredService> {
        self.lock()
            .store
            .services
            .iter()
            .filter(|s| s.trip_id == trip_id)
            .cloned()
            .collect()
    }

    pub fn service_count(&self) -> usize {
        self.lock().store.services.len()
    }

    pub fn rate(&self, id: u64) -> Option<(i64, Decimal)> {
        self.lock().store.rates.get(&id).copied()
    }

    pub fn events(&self) -> Vec<Event> {
        self.lock().events.clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub fn clear_log(&self) {
        let mut state = self.lock();
        state.events.clear();
        state.calls.clear();
    }

    pub fn count(&self, pick: fn(&Event) -> bool) -> usize {
        self.lock().events.iter().filter(|e| pick(e)).count()
    }

    /// Connections handed out and not yet given back.
    pub fn open_connections(&self) -> usize {
        let opened = self.count(|e| matches!(e, Event::Acquired(_) | Event::Begun(_)));
        let released = self.count(|e| matches!(e, Event::Released(_)));
        opened - released
    }

    fn open(&self, transactional: bool) -> ScriptedConnection {
        let mut state = self.lock();
        state.next_conn += 1;
        let id = state.next_conn;

        let working = if transactional {
            state.events.push(Event::Begun(id));
            Some(state.store.clone())
        } else {
            state.events.push(Event::Acquired(id));
            None
        };

        ScriptedConnection {
            id,
            state: self.state.clone(),
            working,
        }
    }
}

#[async_trait]
impl Engine for ScriptedEngine {
    async fn acquire(&self) -> Result<Box<dyn EngineConnection>, EngineError> {
        Ok(Box::new(self.open(false)))
    }

    async fn begin(&self) -> Result<Box<dyn EngineConnection>, EngineError> {
        Ok(Box::new(self.open(true)))
    }
}

struct ScriptedConnection {
    id: usize,
    state: Arc<Mutex<State>>,
    working: Option<Store>,
}

impl ScriptedConnection {
    fn run<R>(
        &mut self,
        name: &str,
        op: impl FnOnce(&mut Store, &mut Failures, &Catalog) -> Result<R, EngineError>,
    ) -> Result<R, EngineError> {
        let mut guard = self.state.lock().unwrap();
        let state = &mut *guard;
        state.calls.push(name.to_string());

        let catalog = Catalog {
            services: state.catalog.clone(),
            currencies: state.currencies.clone(),
            finance_rows: state.finance_rows.clone(),
        };
        let store = match self.working.as_mut() {
            Some(working) => working,
            None => &mut state.store,
        };

        op(store, &mut state.failures, &catalog)
    }

    fn finish(&mut self, event: Event, publish: bool) {
        let mut state = self.state.lock().unwrap();
        if publish {
            if let Some(working) = self.working.take() {
                state.store = working;
            }
        }
        state.events.push(event);
        state.events.push(Event::Released(self.id));
    }
}

struct Catalog {
    services: Vec<(i64, &'static str)>,
    currencies: Vec<(i64, &'static str)>,
    finance_rows: Vec<Row>,
}

impl Catalog {
    fn currency_name(&self, id: i64) -> Option<&'static str> {
        self.currencies.iter().find(|(c, _)| *c == id).map(|(_, n)| *n)
    }

    fn service_name(&self, id: i64) -> Option<&'static str> {
        self.services.iter().find(|(s, _)| *s == id).map(|(_, n)| *n)
    }
}

#[async_trait]
impl EngineConnection for ScriptedConnection {
    async fn call(
        &mut self,
        procedure: &str,
        params: &[Param],
    ) -> Result<ResultBundle, EngineError> {
        self.run(procedure, |store, failures, catalog| {
            dispatch(store, failures, catalog, procedure, params)
        })
    }

    async fn query(&mut self, statement: &str, _params: &[Param]) -> Result<ResultSet, EngineError> {
        self.run(statement, |_, _, catalog| {
            if statement.contains("FROM servicio_tipo") {
                let rows = catalog
                    .services
                    .iter()
                    .map(|(id, name)| to_row(json!({ "id": id, "nombre": name, "descripcion": null })))
                    .collect();
                Ok(ResultSet::new(rows))
            } else {
                Err(EngineError::Sqlx(sqlx::Error::Protocol(format!(
                    "unexpected query: {statement}"
                ))))
            }
        })
    }

    async fn execute(
        &mut self,
        statement: &str,
        params: &[Param],
    ) -> Result<ExecOutcome, EngineError> {
        let params = params.to_vec();
        self.run(statement, move |store, _, catalog| {
            if statement.starts_with("INSERT INTO tipo_cambio") {
                let currency = int(&params[0]).unwrap_or_default();
                if catalog.currency_name(currency).is_none() {
                    return Err(foreign_key_error("moneda_id does not exist"));
                }
                store.next_rate += 1;
                let id = store.next_rate;
                store
                    .rates
                    .insert(id, (currency, decimal(&params[1]).unwrap_or_default()));
                Ok(ExecOutcome {
                    last_insert_id: id,
                    rows_affected: 1,
                })
            } else if statement.starts_with("UPDATE tipo_cambio") {
                let rate = decimal(&params[0]).unwrap_or_default();
                let id = int(&params[1]).unwrap_or_default() as u64;
                let rows_affected = match store.rates.get_mut(&id) {
                    Some(entry) => {
                        entry.1 = rate;
                        1
                    }
                    None => 0,
                };
                Ok(ExecOutcome {
                    last_insert_id: 0,
                    rows_affected,
                })
            } else {
                Err(EngineError::Sqlx(sqlx::Error::Protocol(format!(
                    "unexpected statement: {statement}"
                ))))
            }
        })
    }

    async fn commit(self: Box<Self>) -> Result<(), EngineError> {
        let mut conn = self;
        conn.finish(Event::Committed(conn.id), true);
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), EngineError> {
        let mut conn = self;
        conn.working = None;
        conn.finish(Event::RolledBack(conn.id), false);
        Ok(())
    }

    async fn release(self: Box<Self>) {
        self.state
            .lock()
            .unwrap()
            .events
            .push(Event::Released(self.id));
    }
}

fn dispatch(
    store: &mut Store,
    failures: &mut Failures,
    catalog: &Catalog,
    procedure: &str,
    params: &[Param],
) -> Result<ResultBundle, EngineError> {
    let status = ResultSet::default();

    match procedure {
        "obtener_viajes" => {
            let filter = text(&params[0]).map(|f| f.to_lowercase());
            let limit = int(&params[1]).unwrap_or(10) as usize;
            let offset = int(&params[2]).unwrap_or(0) as usize;

            let matching: Vec<&StoredTrip> = store
                .trips
                .values()
                .filter(|t| {
                    filter.as_ref().is_none_or(|f| {
                        t.surname.to_lowercase().contains(f) || t.id.to_lowercase() == *f
                    })
                })
                .collect();
            let total = matching.len();

            let mut page: Vec<Row> = matching
                .into_iter()
                .skip(offset)
                .take(limit)
                .map(|t| trip_row(store, catalog, t))
                .collect();
            for row in &mut page {
                let unreadable = failures.malformed_page
                    || row
                        .get("id")
                        .and_then(Value::as_str)
                        .is_some_and(|id| failures.malformed_trips.iter().any(|t| t == id));
                if unreadable {
                    row.insert("valor_total".into(), json!("not a number"));
                }
            }

            let page = ResultSet::new(page);
            let count = ResultSet::new(vec![to_row(json!({ "total": total }))]);
            let sets = if failures.shuffled_sets {
                vec![status, count, page]
            } else {
                vec![page, count, status]
            };
            Ok(ResultBundle::new(sets, 0))
        }
        "obtener_viaje" => {
            let id = text(&params[0]).unwrap_or_default();
            let rows = store
                .trips
                .get(&id)
                .map(|t| vec![trip_row(store, catalog, t)])
                .unwrap_or_default();
            Ok(ResultBundle::new(vec![ResultSet::new(rows), status], 0))
        }
        "insertar_viaje" => {
            if failures.contention > 0 {
                failures.contention -= 1;
                return Err(EngineError::Contention("Deadlock found".into()));
            }
            let currency_id = int(&params[5]).unwrap_or_default();
            if catalog.currency_name(currency_id).is_none() {
                return Err(foreign_key_error("moneda_id does not exist"));
            }
            let trip = StoredTrip {
                id: String::new(),
                surname: text(&params[0]).unwrap_or_default(),
                total_value: decimal(&params[1]).unwrap_or_default(),
                destination: text(&params[2]).unwrap_or_default(),
                departure: date(&params[3]).unwrap_or_default(),
                return_date: date(&params[4]).unwrap_or_default(),
                currency_id,
                rate: decimal(&params[6]),
                status: "pendiente".into(),
            };
            let id = insert_trip(store, trip);
            Ok(id_bundle(&id, 1))
        }
        "actualizar_viaje" => {
            let id = text(&params[0]).unwrap_or_default();
            if let Some(currency) = int(&params[6]) {
                if catalog.currency_name(currency).is_none() {
                    return Err(foreign_key_error("moneda_id does not exist"));
                }
            }
            let Some(trip) = store.trips.get_mut(&id) else {
                return Ok(missing_row(failures, &id, status));
            };
            if let Some(v) = text(&params[1]) {
                trip.surname = v;
            }
            if let Some(v) = decimal(&params[2]) {
                trip.total_value = v;
            }
            if let Some(v) = text(&params[3]) {
                trip.destination = v;
            }
            if let Some(v) = date(&params[4]) {
                trip.departure = v;
            }
            if let Some(v) = date(&params[5]) {
                trip.return_date = v;
            }
            if let Some(v) = int(&params[6]) {
                trip.currency_id = v;
            }
            if let Some(v) = decimal(&params[7]) {
                trip.rate = Some(v);
            }
            Ok(id_bundle(&id, 1))
        }
        "eliminar_viaje" => {
            let id = text(&params[0]).unwrap_or_default();
            if store.trips.remove(&id).is_none() {
                return Ok(missing_row(failures, &id, status));
            }
            store.services.retain(|s| s.trip_id != id);
            Ok(id_bundle(&id, 1))
        }
        "insertar_servicio_viaje" => {
            let trip_id = text(&params[0]).unwrap_or_default();
            let service_type_id = int(&params[1]).unwrap_or_default();
            let currency_id = int(&params[4]).unwrap_or_default();

            if failures.service_type == Some(service_type_id) {
                return Err(EngineError::Sqlx(sqlx::Error::Protocol(
                    "connection reset while inserting service".into(),
                )));
            }
            if !store.trips.contains_key(&trip_id)
                || catalog.service_name(service_type_id).is_none()
                || catalog.currency_name(currency_id).is_none()
            {
                return Err(foreign_key_error("referenced row does not exist"));
            }
            if store
                .services
                .iter()
                .any(|s| s.trip_id == trip_id && s.service_type_id == service_type_id)
            {
                return Err(duplicate_error("Duplicate entry for servicio_viaje"));
            }

            store.services.push(StoredService {
                trip_id,
                service_type_id,
                amount: decimal(&params[2]).unwrap_or_default(),
                payer: text(&params[3]).unwrap_or_default(),
                currency_id,
                rate: decimal(&params[5]),
            });
            Ok(ResultBundle::new(vec![status], 1))
        }
        "actualizar_servicio_viaje" => {
            let trip_id = text(&params[0]).unwrap_or_default();
            let service_type_id = int(&params[1]).unwrap_or_default();

            let Some(service) = store
                .services
                .iter_mut()
                .find(|s| s.trip_id == trip_id && s.service_type_id == service_type_id)
            else {
                return Ok(ResultBundle::new(vec![status], 0));
            };
            if let Some(v) = decimal(&params[2]) {
                service.amount = v;
            }
            if let Some(v) = text(&params[3]) {
                service.payer = v;
            }
            if let Some(v) = int(&params[4]) {
                service.currency_id = v;
            }
            if let Some(v) = decimal(&params[5]) {
                service.rate = Some(v);
            }
            Ok(ResultBundle::new(vec![status], 1))
        }
        "eliminar_servicio_viaje" => {
            let trip_id = text(&params[0]).unwrap_or_default();
            let service_type_id = int(&params[1]).unwrap_or_default();
            let before = store.services.len();
            store
                .services
                .retain(|s| !(s.trip_id == trip_id && s.service_type_id == service_type_id));
            let removed = (before - store.services.len()) as u64;
            Ok(ResultBundle::new(vec![status], removed))
        }
        "resumen_financiero" => {
            let month = int(&params[0]);
            let rows = catalog
                .finance_rows
                .iter()
                .filter(|row| {
                    month.is_none_or(|m| row.get("mes_num").and_then(Value::as_i64) == Some(m))
                })
                .cloned()
                .collect();
            Ok(ResultBundle::new(vec![ResultSet::new(rows), status], 0))
        }
        other => Err(EngineError::Sqlx(sqlx::Error::Protocol(format!(
            "unknown procedure {other}"
        )))),
    }
}

fn insert_trip(store: &mut Store, mut trip: StoredTrip) -> String {
    store.next_trip += 1;
    trip.id = format!("V{:04}", store.next_trip);
    let id = trip.id.clone();
    store.trips.insert(id.clone(), trip);
    id
}

fn trip_row(store: &Store, catalog: &Catalog, trip: &StoredTrip) -> Row {
    let services: Vec<Value> = store
        .services
        .iter()
        .filter(|s| s.trip_id == trip.id)
        .map(|s| {
            json!({
                "id": s.service_type_id,
                "nombre": catalog.service_name(s.service_type_id),
                "valor": s.amount.to_string(),
                "pagado_por": s.payer,
                "moneda": catalog.currency_name(s.currency_id),
                "valor_tasa_cambio": s.rate.map(|r| r.to_string()),
            })
        })
        .collect();
    let cost: Decimal = store
        .services
        .iter()
        .filter(|s| s.trip_id == trip.id)
        .map(|s| s.amount)
        .sum();

    to_row(json!({
        "id": trip.id,
        "apellido": trip.surname,
        "valor_total": trip.total_value.to_string(),
        "destino": trip.destination,
        "fecha_ida": trip.departure.format("%Y-%m-%d").to_string(),
        "fecha_vuelta": trip.return_date.format("%Y-%m-%d").to_string(),
        "moneda": catalog.currency_name(trip.currency_id),
        "estado": trip.status,
        "costo": cost.to_string(),
        "ganancia": (trip.total_value - cost).to_string(),
        "valor_tasa_cambio": trip.rate.map(|r| r.to_string()),
        "fecha": "2025-01-01 10:00:00",
        "servicios": Value::Array(services).to_string(),
    }))
}

fn missing_row(failures: &Failures, id: &str, status: ResultSet) -> ResultBundle {
    if failures.echo_missing_ids {
        id_bundle(id, 0)
    } else {
        ResultBundle::new(vec![ResultSet::default(), status], 0)
    }
}

fn id_bundle(id: &str, affected: u64) -> ResultBundle {
    ResultBundle::new(
        vec![
            ResultSet::new(vec![to_row(json!({ "id": id }))]),
            ResultSet::default(),
        ],
        affected,
    )
}

pub fn to_row(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        _ => Row::new(),
    }
}

fn text(param: &Param) -> Option<String> {
    match param {
        Param::Text(v) => Some(v.clone()),
        Param::Int(v) => Some(v.to_string()),
        _ => None,
    }
}

fn int(param: &Param) -> Option<i64> {
    match param {
        Param::Int(v) => Some(*v),
        _ => None,
    }
}

fn decimal(param: &Param) -> Option<Decimal> {
    match param {
        Param::Decimal(v) => Some(*v),
        Param::Int(v) => Some(Decimal::from(*v)),
        _ => None,
    }
}

fn date(param: &Param) -> Option<NaiveDate> {
    match param {
        Param::Date(v) => Some(*v),
        _ => None,
    }
}

/// Services wired over one scripted engine, the way the binary wires them.
pub struct Harness {
    pub engine: ScriptedEngine,
    pub executor: QueryExecutor,
    pub transactions: TransactionManager,
    pub trip_query: TripQueryService,
    pub trip_command: TripCommandService,
    pub trip_service: TripServiceService,
    pub finance: FinanceService,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_attempts(1)
    }

    pub fn with_attempts(max_attempts: u32) -> Self {
        let engine = ScriptedEngine::new();
        let dyn_engine = engine.dyn_engine();
        let validation = ValidationConfig::default();

        let executor = QueryExecutor::new(dyn_engine.clone());
        let transactions = TransactionManager::with_backoff(
            dyn_engine,
            Backoff {
                base: Duration::from_millis(5),
                cap: Duration::from_millis(20),
            },
        );

        let trip_query_repo = Arc::new(TripQueryRepository::new(executor.clone()));
        let trip_command_repo = Arc::new(TripCommandRepository::new(executor.clone()));
        let trip_service_repo = Arc::new(TripServiceRepository::new(executor.clone()));
        let finance_repo = Arc::new(FinanceRepository::new(executor.clone()));

        Self {
            trip_query: TripQueryService::new(trip_query_repo.clone(), validation.clone()),
            trip_command: TripCommandService::new(
                transactions.clone(),
                trip_command_repo,
                trip_query_repo,
                trip_service_repo.clone(),
                validation.clone(),
                max_attempts,
            ),
            trip_service: TripServiceService::new(
                transactions.clone(),
                trip_service_repo,
                validation.clone(),
                max_attempts,
            ),
            finance: FinanceService::new(finance_repo, validation),
            engine,
            executor,
            transactions,
        }
    }
}

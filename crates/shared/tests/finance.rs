mod common;

use common::{Event, Harness};
use rust_decimal::Decimal;
use serde_json::json;
use shared::{
    abstract_trait::finance::service::FinanceServiceTrait,
    domain::requests::{
        CreateExchangeRateRequest, FinanceSummaryRequest, UpdateExchangeRateRequest,
    },
    errors::ErrorKind,
};

fn summary(year: i32, month: Option<u32>) -> FinanceSummaryRequest {
    FinanceSummaryRequest {
        year,
        month,
        currency_id: None,
    }
}

#[tokio::test]
async fn currencies_of_one_month_share_a_bucket() {
    let h = Harness::new();
    h.engine.set_finance_rows(vec![
        json!({ "mes_num": 1, "moneda": "USD", "ingreso": 100, "egreso": 40 }),
        json!({ "mes_num": 1, "moneda": "ARS", "ingreso": 5000, "egreso": 2000 }),
    ]);

    let months = h.finance.finance_summary(&summary(2025, None)).await.unwrap().data;

    assert_eq!(months.len(), 1);
    assert_eq!(months[0].mes_num, 1);
    assert_eq!(months[0].mes, "Enero");
    let profits: Vec<_> = months[0].resumen.iter().map(|c| c.ganancia).collect();
    assert_eq!(profits, vec![Decimal::from(60), Decimal::from(3000)]);
    assert_eq!(h.engine.open_connections(), 0);
}

#[tokio::test]
async fn group_without_priced_trips_is_summarised_not_rejected() {
    let h = Harness::new();
    h.engine.set_finance_rows(vec![
        json!({ "mes": "Mayo", "mes_num": 5, "moneda": "USD", "ingreso": "100.00", "egreso": "40.00", "ganancia": "60.00" }),
        json!({ "mes": "Mayo", "mes_num": 5, "moneda": "ARS", "ingreso": "2500.00", "egreso": null, "ganancia": null }),
    ]);

    let months = h.finance.finance_summary(&summary(2025, None)).await.unwrap().data;

    assert_eq!(months.len(), 1);
    let ars = &months[0].resumen[1];
    assert_eq!(ars.moneda, "ARS");
    assert_eq!(ars.egreso, Decimal::ZERO);
    assert_eq!(ars.ganancia, Decimal::from(2500));
}

#[tokio::test]
async fn month_filter_is_passed_through() {
    let h = Harness::new();
    h.engine.set_finance_rows(vec![
        json!({ "mes": "Febrero", "mes_num": 2, "moneda": "USD", "ingreso": "10.50", "egreso": "0.50", "ganancia": "10.00" }),
        json!({ "mes": "Marzo", "mes_num": 3, "moneda": "USD", "ingreso": "1", "egreso": "0", "ganancia": "1" }),
    ]);

    let months = h
        .finance
        .finance_summary(&summary(2025, Some(3)))
        .await
        .unwrap()
        .data;

    assert_eq!(months.len(), 1);
    assert_eq!(months[0].mes, "Marzo");
}

#[tokio::test]
async fn year_before_the_ledger_starts_is_rejected() {
    let h = Harness::new();

    let err = h
        .finance
        .finance_summary(&summary(2024, None))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(h.engine.calls().is_empty());
}

#[tokio::test]
async fn exchange_rate_is_created_and_updated() {
    let h = Harness::new();

    let id = h
        .finance
        .create_exchange_rate(&CreateExchangeRateRequest {
            currency_id: 2,
            rate: Decimal::new(102550, 2),
        })
        .await
        .unwrap()
        .data
        .id;

    assert_eq!(id, 1);
    assert_eq!(h.engine.rate(id), Some((2, Decimal::new(102550, 2))));

    h.finance
        .update_exchange_rate(id, &UpdateExchangeRateRequest {
            rate: Decimal::from(1100),
        })
        .await
        .unwrap();

    assert_eq!(h.engine.rate(id), Some((2, Decimal::from(1100))));
    assert_eq!(
        h.engine.events(),
        vec![
            Event::Acquired(1),
            Event::Released(1),
            Event::Acquired(2),
            Event::Released(2),
        ]
    );
}

#[tokio::test]
async fn updating_an_unknown_exchange_rate_is_not_found() {
    let h = Harness::new();

    let err = h
        .finance
        .update_exchange_rate(42, &UpdateExchangeRateRequest {
            rate: Decimal::from(5),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn exchange_rate_input_is_validated() {
    let h = Harness::new();

    let err = h
        .finance
        .create_exchange_rate(&CreateExchangeRateRequest {
            currency_id: 0,
            rate: Decimal::ZERO,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let err = h
        .finance
        .update_exchange_rate(0, &UpdateExchangeRateRequest {
            rate: Decimal::from(5),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    assert!(h.engine.calls().is_empty());
}

#[tokio::test]
async fn rate_for_unknown_currency_is_invalid_input() {
    let h = Harness::new();

    let err = h
        .finance
        .create_exchange_rate(&CreateExchangeRateRequest {
            currency_id: 9,
            rate: Decimal::ONE,
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

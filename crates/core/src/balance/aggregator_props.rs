//! Property tests for the monthly balance series.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::aggregator::{aggregate, AggregateOptions};
use crate::company::Company;
use crate::invoice::testing::invoice_between;
use crate::ledger::Ledger;
use crate::order::Order;
use faktura_shared::types::{Money, OrderId, YearMonth};

/// Random orders through 2023-2025, each with one income invoice of a
/// random net price.
fn orders_strategy() -> impl Strategy<Value = (Vec<Order>, Ledger)> {
    prop::collection::vec(
        (2023i32..2026, 1u32..13, 1u32..29, -100_000i64..100_000),
        1..12,
    )
    .prop_map(|specs| {
        let mine = Company::new("Mine", "MINE", true);
        let client = Company::new("Client", "CLI", false);

        let mut ledger = Ledger::new();
        let mut orders = Vec::with_capacity(specs.len());
        for (i, (year, month, day, cents)) in specs.into_iter().enumerate() {
            let mut invoice = invoice_between(&format!("FV {i}/X"), &mine, &client);
            invoice.net_price = Money::new(Decimal::new(cents, 2));
            invoice.vat = Money::ZERO;
            invoice.gross = invoice.net_price;
            let end_date = NaiveDate::from_ymd_opt(year, month, day).unwrap();

            orders.push(Order {
                id: OrderId::new(),
                name: format!("CLI-{i}/01/2024"),
                company: client.clone(),
                contract: None,
                create_date: end_date,
                start_date: end_date,
                end_date,
                income_invoices: BTreeSet::from([invoice.id]),
                cost_invoices: BTreeSet::new(),
            });
            ledger.insert(invoice);
        }
        (orders, ledger)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The series is contiguous: each point's month is the successor of the
    /// previous point's month, ending at the horizon month.
    #[test]
    fn prop_series_is_contiguous((orders, ledger) in orders_strategy()) {
        let horizon = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
        let series = aggregate(&orders, &ledger, horizon, AggregateOptions::default()).unwrap();

        prop_assert!(!series.is_empty());
        for pair in series.windows(2) {
            prop_assert_eq!(pair[1].period, pair[0].period.succ());
        }
        prop_assert_eq!(series.last().unwrap().period, YearMonth::from_date(horizon));
    }

    /// The series starts at the earliest order end month.
    #[test]
    fn prop_series_starts_at_first_activity((orders, ledger) in orders_strategy()) {
        let horizon = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
        let series = aggregate(&orders, &ledger, horizon, AggregateOptions::default()).unwrap();

        let earliest = orders
            .iter()
            .map(|order| YearMonth::from_date(order.end_date))
            .min()
            .unwrap();
        prop_assert_eq!(series[0].period, earliest);
    }

    /// Total of the series equals the total of all order nets: zero-filling
    /// and month bucketing neither invent nor drop value.
    #[test]
    fn prop_series_conserves_value((orders, ledger) in orders_strategy()) {
        let horizon = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
        let series = aggregate(&orders, &ledger, horizon, AggregateOptions::default()).unwrap();

        let expected: Money = orders
            .iter()
            .flat_map(|order| &order.income_invoices)
            .map(|&id| ledger.get(id).unwrap().net_price)
            .sum();
        let actual: Money = series.iter().map(|point| point.net_balance).sum();
        prop_assert_eq!(actual, expected);
    }

    /// Identical inputs and horizon produce identical output.
    #[test]
    fn prop_aggregate_is_deterministic((orders, ledger) in orders_strategy()) {
        let horizon = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
        let first = aggregate(&orders, &ledger, horizon, AggregateOptions::default()).unwrap();
        let second = aggregate(&orders, &ledger, horizon, AggregateOptions::default()).unwrap();
        prop_assert_eq!(first, second);
    }
}

//! Monthly cash-balance aggregation.
//!
//! Folds orders' invoice families into an ordered monthly time series. Each
//! order's net value lands in the calendar month of its `end_date`; the
//! series stays contiguous from the first active month to the horizon, with
//! idle months at zero, so a chart axis never has gaps.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use faktura_shared::types::{InvoiceId, Money, YearMonth};
use tracing::debug;

use super::error::AggregationError;
use super::types::MonthlyBalancePoint;
use crate::invoice::InvoiceKind;
use crate::ledger::{Ledger, LedgerError};
use crate::order::Order;

/// Aggregation policy knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateOptions {
    /// Whether CORRECTING invoices not assigned to any order contribute,
    /// attributed by their payment date. Off by default: an unassigned
    /// correction represents no order activity yet.
    pub include_unassigned_correcting: bool,
}

impl From<&faktura_shared::config::BalanceConfig> for AggregateOptions {
    fn from(config: &faktura_shared::config::BalanceConfig) -> Self {
        Self {
            include_unassigned_correcting: config.include_unassigned_correcting,
        }
    }
}

/// Folds orders into the monthly balance series up to `horizon_end`'s month.
///
/// Each order's invoice selection is expanded to full families first, so a
/// family listed twice counts once and a partially listed family counts
/// whole. ORIGINAL, DUPLICATE, and CORRECTING invoices contribute their
/// signed net price; PROFORMA never contributes. Output is deterministic
/// for identical inputs.
///
/// # Errors
///
/// Family resolution failures and a horizon preceding all activity are
/// rejected whole; no partial series is returned.
pub fn aggregate(
    orders: &[Order],
    ledger: &Ledger,
    horizon_end: NaiveDate,
    options: AggregateOptions,
) -> Result<Vec<MonthlyBalancePoint>, AggregationError> {
    let horizon = YearMonth::from_date(horizon_end);
    debug!(orders = orders.len(), %horizon, "aggregating monthly balance");

    let mut by_month: BTreeMap<YearMonth, Money> = BTreeMap::new();
    let mut assigned: BTreeSet<InvoiceId> = BTreeSet::new();

    for order in orders {
        let month = YearMonth::from_date(order.end_date);
        let mut net = Money::ZERO;

        let income_family = ledger.closure(&order.income_invoices)?;
        for &id in &income_family {
            net += settled_net(ledger, id)?;
        }

        let cost_family = ledger.closure(&order.cost_invoices)?;
        for &id in &cost_family {
            net -= settled_net(ledger, id)?;
        }

        assigned.extend(income_family);
        assigned.extend(cost_family);
        *by_month.entry(month).or_insert(Money::ZERO) += net;
    }

    if options.include_unassigned_correcting {
        let mut unassigned: Vec<&crate::invoice::Invoice> = ledger
            .iter()
            .filter(|invoice| {
                invoice.kind == InvoiceKind::Correcting && !assigned.contains(&invoice.id)
            })
            .collect();
        unassigned.sort_by_key(|invoice| invoice.id);

        for invoice in unassigned {
            let month = YearMonth::from_date(invoice.payment_date);
            let signed = if invoice.is_income() {
                invoice.net_price
            } else {
                -invoice.net_price
            };
            *by_month.entry(month).or_insert(Money::ZERO) += signed;
        }
    }

    let Some((&start, _)) = by_month.first_key_value() else {
        return Ok(Vec::new());
    };
    if horizon < start {
        return Err(AggregationError::HorizonBeforeActivity { horizon, start });
    }

    let mut series = Vec::new();
    let mut month = start;
    while month <= horizon {
        series.push(MonthlyBalancePoint {
            period: month,
            net_balance: by_month.get(&month).copied().unwrap_or(Money::ZERO),
        });
        month = month.succ();
    }
    Ok(series)
}

/// An invoice's contribution to its family's settled value: net price for
/// originals, duplicates, and corrections; nothing for proformas.
fn settled_net(ledger: &Ledger, id: InvoiceId) -> Result<Money, AggregationError> {
    let invoice = ledger
        .get(id)
        .ok_or(AggregationError::Ledger(LedgerError::UnknownInvoice(id)))?;
    Ok(match invoice.kind {
        InvoiceKind::Proforma => Money::ZERO,
        InvoiceKind::Original | InvoiceKind::Duplicate | InvoiceKind::Correcting => {
            invoice.net_price
        }
    })
}

//! Order domain types.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use faktura_shared::types::{ContractId, InvoiceId, OrderId, YearMonth};
use serde::{Deserialize, Serialize};

use crate::company::Company;

/// A unit of billable work for a company, to which invoices are assigned
/// for balance accounting. The order owns the association, not the invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier.
    pub id: OrderId,
    /// Generated unique display name (see [`order_name`]).
    pub name: String,
    /// The counterparty the order is for.
    pub company: Company,
    /// Optional contract reference.
    pub contract: Option<ContractId>,
    /// Date the order was created.
    pub create_date: NaiveDate,
    /// Date work starts.
    pub start_date: NaiveDate,
    /// Date work ends; monthly balance attribution uses this date's month.
    pub end_date: NaiveDate,
    /// Invoices where the operating company sells.
    pub income_invoices: BTreeSet<InvoiceId>,
    /// Invoices where the operating company buys.
    pub cost_invoices: BTreeSet<InvoiceId>,
}

/// Composes an order's display name from a freshly minted counter.
///
/// Format: `"{shortcut}-{counter}/{month}/{year}"`, e.g. `"ACME-3/02/2024"`.
#[must_use]
pub fn order_name(shortcut: &str, counter: u32, period: YearMonth) -> String {
    format!(
        "{shortcut}-{counter}/{:02}/{}",
        period.month, period.year
    )
}

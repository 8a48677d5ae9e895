//! Invoice-to-order assignment.
//!
//! An assignment always moves a complete invoice family: the seed selection
//! is expanded through the ledger before any association is recorded, so a
//! later balance aggregation can neither double-count a family nor drop
//! part of it.

use std::collections::{BTreeMap, BTreeSet};

use faktura_shared::types::InvoiceId;
use tracing::debug;

use super::error::AssignmentError;
use super::types::Order;
use crate::ledger::Ledger;

/// Expands `seeds` to full families and records them on the order,
/// partitioned into income (operating company sells) and cost (operating
/// company buys) sides.
///
/// # Errors
///
/// Fails without modifying the order if a seed is unknown, the family is
/// cyclic, an invoice has no operating-company side, or one family's members
/// would straddle both sides.
pub fn assign_invoices(
    order: &mut Order,
    seeds: &BTreeSet<InvoiceId>,
    ledger: &Ledger,
) -> Result<(), AssignmentError> {
    let family = ledger.closure(seeds)?;

    let mut income = BTreeSet::new();
    let mut cost = BTreeSet::new();
    let mut family_sides: BTreeMap<InvoiceId, bool> = BTreeMap::new();

    for &id in &family {
        let invoice = ledger
            .get(id)
            .ok_or(AssignmentError::Ledger(crate::ledger::LedgerError::UnknownInvoice(id)))?;

        let is_income = match (invoice.is_income(), invoice.is_cost()) {
            (true, false) => true,
            (false, true) => false,
            _ => return Err(AssignmentError::UndeterminedDirection(id)),
        };

        let root = ledger.root_of(id)?;
        if let Some(&side) = family_sides.get(&root) {
            if side != is_income {
                return Err(AssignmentError::StraddledFamily(root));
            }
        } else {
            family_sides.insert(root, is_income);
        }

        if is_income {
            income.insert(id);
        } else {
            cost.insert(id);
        }
    }

    debug!(
        order = %order.id,
        income = income.len(),
        cost = cost.len(),
        "assigned invoice families to order"
    );

    order.income_invoices.extend(income);
    order.cost_invoices.extend(cost);
    Ok(())
}

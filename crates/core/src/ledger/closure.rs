//! Linked-invoice family resolution.
//!
//! Proforma, duplicate, and correcting invoices are not independently
//! meaningful for balance accounting; they represent one real transaction.
//! Any operation assigning invoices must therefore move the whole family
//! together, or balance aggregation would double-count or silently drop
//! value.

use std::collections::{BTreeSet, HashSet, VecDeque};

use faktura_shared::types::InvoiceId;
use tracing::error;

use super::arena::Ledger;
use super::error::LedgerError;

impl Ledger {
    /// Expands a seed selection into its complete linked family.
    ///
    /// Returns the smallest superset of `seeds` closed under "is parent of"
    /// and "is child of". The walk runs to a fixpoint over the arena's
    /// parent pointers and children index; termination is guaranteed by the
    /// visited set. An empty seed set yields an empty closure.
    ///
    /// # Errors
    ///
    /// `UnknownInvoice` if a seed or a linked parent is missing from the
    /// ledger; `CycleDetected` if the resolved family's parent chain loops,
    /// which indicates upstream data corruption — the operation is aborted,
    /// the cycle never silently broken.
    pub fn closure(&self, seeds: &BTreeSet<InvoiceId>) -> Result<BTreeSet<InvoiceId>, LedgerError> {
        let mut family = BTreeSet::new();
        let mut queue = VecDeque::new();

        for &id in seeds {
            if !self.contains(id) {
                return Err(LedgerError::UnknownInvoice(id));
            }
            if family.insert(id) {
                queue.push_back(id);
            }
        }

        while let Some(id) = queue.pop_front() {
            let invoice = self.get(id).ok_or(LedgerError::UnknownInvoice(id))?;

            if let Some(parent) = invoice.linked_invoice {
                if !self.contains(parent) {
                    return Err(LedgerError::UnknownInvoice(parent));
                }
                if family.insert(parent) {
                    queue.push_back(parent);
                }
            }

            for child in self.children_of(id) {
                if family.insert(child) {
                    queue.push_back(child);
                }
            }
        }

        self.verify_acyclic(&family)?;
        Ok(family)
    }

    /// Checks every parent chain within `family` for loops.
    fn verify_acyclic(&self, family: &BTreeSet<InvoiceId>) -> Result<(), LedgerError> {
        let mut cleared: HashSet<InvoiceId> = HashSet::new();

        for &start in family {
            let mut path = Vec::new();
            let mut cursor = start;
            loop {
                if cleared.contains(&cursor) {
                    break;
                }
                if path.contains(&cursor) {
                    error!(invoice = %cursor, "invoice family contains a cycle, aborting");
                    return Err(LedgerError::CycleDetected(cursor));
                }
                path.push(cursor);
                match self.get(cursor).and_then(|invoice| invoice.linked_invoice) {
                    Some(parent) => cursor = parent,
                    None => break,
                }
            }
            cleared.extend(path);
        }

        Ok(())
    }
}

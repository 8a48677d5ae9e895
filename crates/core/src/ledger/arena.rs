//! The invoice arena.
//!
//! Invoices are indexed by ID with a nullable parent id rather than live
//! object references, so acyclicity stays checkable by a bounded ancestor
//! walk. A derived children index gives O(1) child lookup for family
//! resolution.

use std::collections::{BTreeSet, HashMap};

use faktura_shared::types::InvoiceId;

use super::error::LedgerError;
use crate::invoice::Invoice;

/// The complete set of invoice records for the operating company and its
/// counterparties.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    invoices: HashMap<InvoiceId, Invoice>,
    children: HashMap<InvoiceId, BTreeSet<InvoiceId>>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of invoices in the ledger.
    #[must_use]
    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    /// Returns true if the ledger holds no invoices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }

    /// Inserts or replaces an invoice, maintaining the children index.
    pub fn insert(&mut self, invoice: Invoice) {
        if let Some(previous) = self.invoices.get(&invoice.id)
            && let Some(old_parent) = previous.linked_invoice
        {
            self.unlink_child(old_parent, invoice.id);
        }
        if let Some(parent) = invoice.linked_invoice {
            self.children.entry(parent).or_default().insert(invoice.id);
        }
        self.invoices.insert(invoice.id, invoice);
    }

    /// Removes an invoice, maintaining the children index.
    pub fn remove(&mut self, id: InvoiceId) -> Option<Invoice> {
        let invoice = self.invoices.remove(&id)?;
        if let Some(parent) = invoice.linked_invoice {
            self.unlink_child(parent, id);
        }
        Some(invoice)
    }

    fn unlink_child(&mut self, parent: InvoiceId, child: InvoiceId) {
        if let Some(children) = self.children.get_mut(&parent) {
            children.remove(&child);
            if children.is_empty() {
                self.children.remove(&parent);
            }
        }
    }

    /// Looks up an invoice by id.
    #[must_use]
    pub fn get(&self, id: InvoiceId) -> Option<&Invoice> {
        self.invoices.get(&id)
    }

    /// Returns true if the invoice exists.
    #[must_use]
    pub fn contains(&self, id: InvoiceId) -> bool {
        self.invoices.contains_key(&id)
    }

    /// Looks up an invoice by its unique display name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Invoice> {
        self.invoices.values().find(|invoice| invoice.name == name)
    }

    /// Iterates over all invoices in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Invoice> {
        self.invoices.values()
    }

    /// The direct children of an invoice (invoices whose parent pointer is
    /// `id`), in id order.
    pub fn children_of(&self, id: InvoiceId) -> impl Iterator<Item = InvoiceId> + '_ {
        self.children.get(&id).into_iter().flatten().copied()
    }

    /// Walks the parent chain from `id` to its root.
    ///
    /// # Errors
    ///
    /// `UnknownInvoice` if `id` or a parent on the chain is missing;
    /// `CycleDetected` if the chain revisits an invoice.
    pub fn ancestors(&self, id: InvoiceId) -> Result<Vec<InvoiceId>, LedgerError> {
        if !self.contains(id) {
            return Err(LedgerError::UnknownInvoice(id));
        }

        let mut chain = Vec::new();
        let mut seen = std::collections::HashSet::from([id]);
        let mut cursor = id;

        while let Some(parent) = self
            .get(cursor)
            .ok_or(LedgerError::UnknownInvoice(cursor))?
            .linked_invoice
        {
            if !seen.insert(parent) {
                return Err(LedgerError::CycleDetected(parent));
            }
            if !self.contains(parent) {
                return Err(LedgerError::UnknownInvoice(parent));
            }
            chain.push(parent);
            cursor = parent;
        }

        Ok(chain)
    }

    /// The root original of an invoice's family (the invoice itself when it
    /// has no parent).
    pub fn root_of(&self, id: InvoiceId) -> Result<InvoiceId, LedgerError> {
        Ok(self.ancestors(id)?.last().copied().unwrap_or(id))
    }
}

impl FromIterator<Invoice> for Ledger {
    fn from_iter<T: IntoIterator<Item = Invoice>>(iter: T) -> Self {
        let mut ledger = Self::new();
        for invoice in iter {
            ledger.insert(invoice);
        }
        ledger
    }
}

//! Invoice domain types.

use chrono::NaiveDate;
use faktura_shared::types::{InvoiceId, Money};
use serde::{Deserialize, Serialize};

use crate::company::Company;

/// The role an invoice plays within its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceKind {
    /// The authoritative record of a transaction. Never linked to a parent.
    Original,
    /// A reissued copy of an original; mirrors the parent exactly.
    Duplicate,
    /// A pre-billing document; carries no settled value.
    Proforma,
    /// A corrective adjustment to an original or duplicate.
    Correcting,
}

impl std::fmt::Display for InvoiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original => write!(f, "original"),
            Self::Duplicate => write!(f, "duplicate"),
            Self::Proforma => write!(f, "proforma"),
            Self::Correcting => write!(f, "correcting"),
        }
    }
}

/// An invoice record.
///
/// `linked_invoice` is a single-parent pointer: many children may share one
/// parent, forming a family tree rooted at an original. The tree must stay
/// acyclic; the validator walks the ancestor chain to enforce that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier.
    pub id: InvoiceId,
    /// Unique display name (e.g., "FV 7/03/2024").
    pub name: String,
    /// The party issuing the invoice.
    pub seller: Company,
    /// The party being billed.
    pub buyer: Company,
    /// Net value before tax.
    pub net_price: Money,
    /// Tax amount.
    pub vat: Money,
    /// Total value; must equal net + vat exactly.
    pub gross: Money,
    /// Date the invoice was issued.
    pub create_date: NaiveDate,
    /// Date the billed service was performed.
    pub service_date: NaiveDate,
    /// Date payment is due.
    pub payment_date: NaiveDate,
    /// Role within the invoice family.
    pub kind: InvoiceKind,
    /// Parent invoice, if this record derives from one.
    pub linked_invoice: Option<InvoiceId>,
    /// Whether the invoice has been settled.
    pub is_paid: bool,
}

impl Invoice {
    /// Returns true if the operating company is the seller.
    #[must_use]
    pub fn is_income(&self) -> bool {
        self.seller.is_mine
    }

    /// Returns true if the operating company is the buyer.
    #[must_use]
    pub fn is_cost(&self) -> bool {
        self.buyer.is_mine
    }
}

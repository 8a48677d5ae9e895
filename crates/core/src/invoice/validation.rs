//! Cross-field invariant validation for invoice records.
//!
//! The validator never short-circuits: a form-like caller needs every
//! violation from one pass, so failures come back as a list of field-tagged
//! values rather than a raised error.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::invoice::types::{Invoice, InvoiceKind};
use crate::ledger::Ledger;

/// Fields an invariant violation can be attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvoiceField {
    /// Display name.
    Name,
    /// Issuing party.
    Seller,
    /// Billed party.
    Buyer,
    /// Net value.
    NetPrice,
    /// Tax amount.
    Vat,
    /// Total value.
    Gross,
    /// Service date.
    ServiceDate,
    /// Payment due date.
    PaymentDate,
    /// Settlement flag.
    IsPaid,
    /// Parent pointer.
    LinkedInvoice,
}

impl std::fmt::Display for InvoiceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Seller => "seller",
            Self::Buyer => "buyer",
            Self::NetPrice => "net_price",
            Self::Vat => "vat",
            Self::Gross => "gross",
            Self::ServiceDate => "service_date",
            Self::PaymentDate => "payment_date",
            Self::IsPaid => "is_paid",
            Self::LinkedInvoice => "linked_invoice",
        };
        write!(f, "{name}")
    }
}

/// A single invariant violation, tagged by field.
///
/// Violations are data, not control flow; the caller decides how to surface
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldViolation {
    /// The field the violation is attributed to.
    pub field: InvoiceField,
    /// Human-readable description.
    pub message: String,
}

impl FieldViolation {
    fn new(field: InvoiceField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validation tunables.
#[derive(Debug, Clone)]
pub struct ValidationPolicy {
    /// Maximum VAT as a fraction of net price.
    pub vat_cap: Decimal,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            // 23% — the standard VAT rate.
            vat_cap: Decimal::new(23, 2),
        }
    }
}

impl From<&faktura_shared::config::ValidationConfig> for ValidationPolicy {
    fn from(config: &faktura_shared::config::ValidationConfig) -> Self {
        Self {
            vat_cap: config.vat_cap,
        }
    }
}

/// Validates a candidate invoice against the ledger.
///
/// Evaluates every cross-field invariant without short-circuiting and
/// returns all violations from one call. The ledger is consulted only to
/// resolve the candidate's parent, to check name uniqueness, and to walk
/// the ancestor chain. Monetary comparisons are exact decimal equality.
///
/// # Errors
///
/// Returns every violated invariant as a `FieldViolation`; an empty error
/// list is never returned.
pub fn validate(
    candidate: &Invoice,
    ledger: &Ledger,
    policy: &ValidationPolicy,
) -> Result<(), Vec<FieldViolation>> {
    let mut violations = Vec::new();

    check_amounts(candidate, policy, &mut violations);
    check_parties(candidate, &mut violations);
    check_name_unique(candidate, ledger, &mut violations);
    check_linkage(candidate, ledger, &mut violations);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check_amounts(candidate: &Invoice, policy: &ValidationPolicy, out: &mut Vec<FieldViolation>) {
    if candidate.gross != candidate.net_price + candidate.vat {
        out.push(FieldViolation::new(
            InvoiceField::Gross,
            format!(
                "gross ({}) must equal net ({}) + vat ({}) exactly",
                candidate.gross, candidate.net_price, candidate.vat
            ),
        ));
    }

    if candidate.vat.amount() > candidate.net_price.amount() * policy.vat_cap {
        out.push(FieldViolation::new(
            InvoiceField::Vat,
            format!(
                "vat ({}) exceeds {} of net price ({})",
                candidate.vat, policy.vat_cap, candidate.net_price
            ),
        ));
    }
}

fn check_parties(candidate: &Invoice, out: &mut Vec<FieldViolation>) {
    if candidate.seller.id == candidate.buyer.id {
        out.push(FieldViolation::new(
            InvoiceField::Buyer,
            "seller and buyer must be different companies",
        ));
    }

    if !candidate.seller.is_mine && !candidate.buyer.is_mine {
        out.push(FieldViolation::new(
            InvoiceField::Seller,
            "either seller or buyer must be the operating company",
        ));
    }
}

fn check_name_unique(candidate: &Invoice, ledger: &Ledger, out: &mut Vec<FieldViolation>) {
    if let Some(existing) = ledger.find_by_name(&candidate.name)
        && existing.id != candidate.id
    {
        out.push(FieldViolation::new(
            InvoiceField::Name,
            format!("an invoice named \"{}\" already exists", candidate.name),
        ));
    }
}

fn check_linkage(candidate: &Invoice, ledger: &Ledger, out: &mut Vec<FieldViolation>) {
    match (candidate.kind, candidate.linked_invoice) {
        (InvoiceKind::Original, Some(_)) => {
            out.push(FieldViolation::new(
                InvoiceField::LinkedInvoice,
                "an original invoice cannot link to a parent",
            ));
        }
        (InvoiceKind::Duplicate | InvoiceKind::Proforma, Some(parent_id)) => {
            match ledger.get(parent_id) {
                Some(parent) => check_mirrors_parent(candidate, parent, out),
                None => out.push(unknown_parent(parent_id)),
            }
        }
        (InvoiceKind::Correcting, Some(parent_id)) => match ledger.get(parent_id) {
            Some(parent) => {
                if matches!(parent.kind, InvoiceKind::Proforma | InvoiceKind::Correcting) {
                    out.push(FieldViolation::new(
                        InvoiceField::LinkedInvoice,
                        format!(
                            "a correcting invoice may only link to an original or duplicate, not a {}",
                            parent.kind
                        ),
                    ));
                }
            }
            None => out.push(unknown_parent(parent_id)),
        },
        _ => {}
    }

    check_acyclic(candidate, ledger, out);
}

fn unknown_parent(parent_id: faktura_shared::types::InvoiceId) -> FieldViolation {
    FieldViolation::new(
        InvoiceField::LinkedInvoice,
        format!("linked invoice {parent_id} does not exist in the ledger"),
    )
}

/// Invariant 6: duplicates and proformas mirror their parent's transaction
/// fields; duplicates additionally mirror both dates.
fn check_mirrors_parent(candidate: &Invoice, parent: &Invoice, out: &mut Vec<FieldViolation>) {
    let mirrored: &[(InvoiceField, bool)] = &[
        (InvoiceField::Seller, candidate.seller.id == parent.seller.id),
        (InvoiceField::Buyer, candidate.buyer.id == parent.buyer.id),
        (
            InvoiceField::NetPrice,
            candidate.net_price == parent.net_price,
        ),
        (InvoiceField::Vat, candidate.vat == parent.vat),
        (InvoiceField::Gross, candidate.gross == parent.gross),
        (InvoiceField::IsPaid, candidate.is_paid == parent.is_paid),
    ];

    for &(field, matches) in mirrored {
        if !matches {
            out.push(FieldViolation::new(
                field,
                format!("must equal the linked invoice's {field}"),
            ));
        }
    }

    if candidate.kind == InvoiceKind::Duplicate {
        if candidate.service_date != parent.service_date {
            out.push(FieldViolation::new(
                InvoiceField::ServiceDate,
                "must equal the linked invoice's service_date",
            ));
        }
        if candidate.payment_date != parent.payment_date {
            out.push(FieldViolation::new(
                InvoiceField::PaymentDate,
                "must equal the linked invoice's payment_date",
            ));
        }
    }
}

/// Invariant 8: the candidate must not be its own transitive ancestor.
///
/// Bounded ancestor walk with a visited-set guard; a revisit anywhere on the
/// chain means the ledger itself holds a cycle, which is also reported.
fn check_acyclic(candidate: &Invoice, ledger: &Ledger, out: &mut Vec<FieldViolation>) {
    let mut visited = std::collections::HashSet::new();
    visited.insert(candidate.id);

    let mut cursor = candidate.linked_invoice;
    while let Some(id) = cursor {
        if id == candidate.id {
            out.push(FieldViolation::new(
                InvoiceField::LinkedInvoice,
                "invoice would become its own transitive ancestor",
            ));
            return;
        }
        if !visited.insert(id) {
            out.push(FieldViolation::new(
                InvoiceField::LinkedInvoice,
                "ancestor chain already contains a cycle",
            ));
            return;
        }
        cursor = ledger.get(id).and_then(|parent| parent.linked_invoice);
    }
}

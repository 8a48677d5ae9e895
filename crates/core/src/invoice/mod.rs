//! Invoice records and their cross-field invariants.
//!
//! An invoice exists as an authoritative original, a reissued duplicate, a
//! pre-billing proforma, or a corrective adjustment. This module holds the
//! record types and the validator that keeps a candidate structurally
//! consistent with its linked family.

pub mod types;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;
#[cfg(test)]
mod validation_props;

pub use types::{Invoice, InvoiceKind};
pub use validation::{validate, FieldViolation, InvoiceField, ValidationPolicy};

//! Ledger error types.

use faktura_shared::types::InvoiceId;
use thiserror::Error;

/// Errors from ledger lookups and family resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A referenced invoice is not present in the ledger.
    #[error("Invoice not found in ledger: {0}")]
    UnknownInvoice(InvoiceId),

    /// The parent chain loops back on itself. Only possible if the stored
    /// data is corrupt; the operation is aborted, never repaired in place.
    #[error("Invoice family contains a cycle through {0}")]
    CycleDetected(InvoiceId),
}

impl From<LedgerError> for faktura_shared::AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::UnknownInvoice(_) => Self::NotFound(err.to_string()),
            LedgerError::CycleDetected(_) => Self::DataCorruption(err.to_string()),
        }
    }
}

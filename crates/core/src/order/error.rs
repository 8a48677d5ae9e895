//! Order error types.

use faktura_shared::types::{CompanyId, InvoiceId, YearMonth};
use thiserror::Error;

use crate::ledger::LedgerError;

/// Errors from the order identifier sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequencerError {
    /// The counter's critical section could not be entered. The counter was
    /// not advanced; the caller may retry, the sequencer itself never does.
    #[error("Counter for company {company} in {period} is contended, retry")]
    Contention {
        /// The company the counter is scoped to.
        company: CompanyId,
        /// The calendar month the counter is scoped to.
        period: YearMonth,
    },
}

impl From<SequencerError> for faktura_shared::AppError {
    fn from(err: SequencerError) -> Self {
        Self::Contention(err.to_string())
    }
}

/// Errors from assigning invoices to an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// Family resolution failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The invoice names neither the operating company nor a counterparty
    /// the operating company trades with, so it has no income/cost side.
    #[error("Invoice {0} has no operating-company side")]
    UndeterminedDirection(InvoiceId),

    /// Members of one family would land on both the income and cost side.
    #[error("Invoice family rooted at {0} straddles income and cost")]
    StraddledFamily(InvoiceId),
}

impl From<AssignmentError> for faktura_shared::AppError {
    fn from(err: AssignmentError) -> Self {
        match err {
            AssignmentError::Ledger(inner) => inner.into(),
            AssignmentError::UndeterminedDirection(_) | AssignmentError::StraddledFamily(_) => {
                Self::Validation(err.to_string())
            }
        }
    }
}

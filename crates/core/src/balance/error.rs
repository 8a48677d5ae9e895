//! Balance aggregation error types.

use faktura_shared::types::YearMonth;
use thiserror::Error;

use crate::ledger::LedgerError;

/// Errors rejected before or during aggregation; no partial series is ever
/// returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AggregationError {
    /// Family resolution failed against the ledger snapshot.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The horizon ends before the first month with any activity, so there
    /// is no valid series to produce.
    #[error("Horizon {horizon} ends before first activity month {start}")]
    HorizonBeforeActivity {
        /// The requested horizon month.
        horizon: YearMonth,
        /// The earliest month with activity.
        start: YearMonth,
    },
}

impl From<AggregationError> for faktura_shared::AppError {
    fn from(err: AggregationError) -> Self {
        match err {
            AggregationError::Ledger(inner) => inner.into(),
            AggregationError::HorizonBeforeActivity { .. } => Self::InvalidInput(err.to_string()),
        }
    }
}

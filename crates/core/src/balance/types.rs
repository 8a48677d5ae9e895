//! Monthly balance series types.

use faktura_shared::types::{Money, YearMonth};
use serde::{Deserialize, Serialize};

/// One point of the monthly cash-balance series. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBalancePoint {
    /// The calendar month.
    pub period: YearMonth,
    /// Income net minus cost net attributed to this month.
    pub net_balance: Money,
}

impl MonthlyBalancePoint {
    /// A zero-balance point for an idle month.
    #[must_use]
    pub const fn zero(period: YearMonth) -> Self {
        Self {
            period,
            net_balance: Money::ZERO,
        }
    }
}

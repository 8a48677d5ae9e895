//! Monthly cash-balance aggregation.
//!
//! - `types` - the derived series point
//! - `aggregator` - the fold from orders and their invoice families into a
//!   contiguous monthly series
//! - `error` - typed failures; no partial series is ever produced

pub mod aggregator;
pub mod error;
pub mod types;

#[cfg(test)]
mod aggregator_props;

pub use aggregator::{aggregate, AggregateOptions};
pub use error::AggregationError;
pub use types::MonthlyBalancePoint;

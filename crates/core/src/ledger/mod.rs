//! The invoice ledger: an arena of invoices and family resolution over it.
//!
//! - `arena` - invoices indexed by id with parent pointers and a children index
//! - `closure` - expansion of a partial selection into its complete family
//! - `error` - typed failures for lookups and resolution

pub mod arena;
pub mod closure;
pub mod error;

#[cfg(test)]
mod closure_props;

pub use arena::Ledger;
pub use error::LedgerError;

//! Core invoice-ledger logic for Faktura.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. The surrounding application supplies validated record
//! snapshots and reads back results.
//!
//! # Modules
//!
//! - `company` - the operating entity and its counterparties
//! - `invoice` - invoice records and cross-field invariant validation
//! - `ledger` - the invoice arena and linked-family resolution
//! - `order` - order records, identifier sequencing, invoice assignment
//! - `balance` - the monthly cash-balance time series

pub mod balance;
pub mod company;
pub mod invoice;
pub mod ledger;
pub mod order;

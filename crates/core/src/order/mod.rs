//! Orders: identifier sequencing and invoice assignment.
//!
//! - `types` - the order record and display-name composition
//! - `sequencer` - monotonic per-(company, month) counters, safe under
//!   concurrent creation
//! - `assignment` - whole-family invoice association
//! - `error` - typed failures for both operations

pub mod assignment;
pub mod error;
pub mod sequencer;
pub mod types;

pub use assignment::assign_invoices;
pub use error::{AssignmentError, SequencerError};
pub use sequencer::{CounterKey, CounterState, OrderSequencer};
pub use types::{order_name, Order};

//! Ledger domain models: validated transactions, the session ledger, and totals.

pub mod clock;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod summary;
pub mod transaction;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ledger::{Ledger, Recorded, TransactionFilter};
pub use summary::{Report, Summary};
pub use transaction::{Transaction, TransactionKind};

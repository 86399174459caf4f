//! The ledger engine: totals for the read path, row placement and batched writes for the append
//! path.
//!
//! Nothing in here reads configuration or holds a client. Aggregation works on a grid that the
//! caller fetched, and the writer works through whatever `Sheet` it is handed.

mod aggregate;
pub mod layout;
mod placement;
mod writer;

pub use aggregate::{category_detail, monthly_summary};
pub use placement::RowPlacement;
pub use writer::{append_transaction, transaction_ranges, Appended};

//! Types that represent the ledger data model, such as `Amount`, `Category` and `Transaction`.
mod amount;
mod category;
mod cell_ref;
mod totals;
mod transaction;

pub use amount::{Amount, AmountError, Won, WON};
pub use category::Category;
pub use cell_ref::{CellRange, CellRef, Column};
pub use totals::{DetailTotals, MonthlyTotals};
pub use transaction::{Transaction, DATE_FORMAT};

/// The rows of one worksheet, each row a sequence of cell strings. Rows may have different
/// lengths because the Sheets API omits trailing empty cells.
pub type Grid = Vec<Vec<String>>;

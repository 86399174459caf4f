//! The physical layout of the ledger spreadsheet.
//!
//! These offsets are a contract with a hand-maintained spreadsheet that carries no schema
//! version, so they cannot be validated at runtime. Columns are 0-based.

use crate::model::Column;

/// Layout of a monthly sheet, one per calendar month, named e.g. `5월`.
pub mod monthly {
    use super::Column;

    /// Title and column header rows at the top of the sheet.
    pub const HEADER_ROWS: usize = 3;

    /// Rows 1 through 20 hold the header and a summary region, so entries start at row 21.
    pub const MIN_START_ROW: usize = 21;

    /// Column C. A row is occupied when this cell is non-empty.
    pub const DATE: Column = Column(2);

    /// Column D.
    pub const CATEGORY: Column = Column(3);

    /// Column G, the first of detail, amount, payment method and description.
    pub const DETAIL: Column = Column(6);

    /// Column H.
    pub const AMOUNT: Column = Column(7);

    /// Column I.
    pub const PAYMENT: Column = Column(8);

    /// Column J.
    pub const DESCRIPTION: Column = Column(9);
}

/// Layout of the single chart conversion sheet, which flattens every month into one table.
pub mod chart {
    use super::Column;

    pub const SHEET_NAME: &str = "차트변환용시트";

    pub const HEADER_ROWS: usize = 1;

    /// Column AN.
    pub const CATEGORY: Column = Column(39);

    /// Column AO.
    pub const DETAIL: Column = Column(40);

    /// Column BB.
    pub const AMOUNT: Column = Column(53);
}

/// The name of the monthly sheet for `month` (1 through 12), e.g. `5월`.
pub fn month_sheet_name(month: u32) -> String {
    format!("{month}월")
}

//! Appends a transaction to its monthly sheet.

use crate::api::{CellValue, Sheet, SheetRange};
use crate::error::LedgerResult;
use crate::ledger::layout::{month_sheet_name, monthly};
use crate::ledger::RowPlacement;
use crate::model::{CellRange, Transaction};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where a transaction was written.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Appended {
    pub sheet_name: String,
    pub row: RowPlacement,
}

/// Builds the two range writes that persist `transaction` in row `row`:
/// - `C:D` holds the date and the main category
/// - `G:J` holds the detail, the amount, the payment method and the description
///
/// The amount is written as an integer cell, everything else as text.
pub fn transaction_ranges(transaction: &Transaction, row: RowPlacement) -> [SheetRange; 2] {
    let row = row.row();
    [
        SheetRange {
            range: CellRange::row_span(row, monthly::DATE, monthly::CATEGORY),
            values: vec![vec![
                transaction.date_cell().into(),
                transaction.main_category().into(),
            ]],
        },
        SheetRange {
            range: CellRange::row_span(row, monthly::DETAIL, monthly::DESCRIPTION),
            values: vec![vec![
                transaction.detail().into(),
                CellValue::Integer(transaction.amount().value()),
                transaction.payment().into(),
                transaction.description().into(),
            ]],
        },
    ]
}

/// Appends `transaction` to the monthly sheet named after its month.
///
/// The next row is computed from the occupied count of the date column, then both ranges are
/// sent in a single batch. Fails with `LedgerError::MissingSheet` when the month's sheet does not
/// exist, in which case nothing is written.
///
/// Two concurrent callers can compute the same row from the same count; nothing here guards
/// against that.
pub async fn append_transaction(
    sheet: &mut (dyn Sheet + Send),
    transaction: &Transaction,
) -> LedgerResult<Appended> {
    let sheet_name = month_sheet_name(transaction.month());
    let occupied = sheet.occupied_count(&sheet_name, monthly::DATE).await?;
    let row = RowPlacement::next(occupied);
    debug!("{sheet_name} has {occupied} occupied rows, writing to row {row}");

    let ranges = transaction_ranges(transaction, row);
    sheet.write_ranges(&sheet_name, &ranges).await?;
    Ok(Appended { sheet_name, row })
}

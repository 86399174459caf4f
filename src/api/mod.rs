//! The boundary between the ledger engine and the spreadsheet that stores the ledger.
//!
//! The engine only talks to the `Sheet` trait. `GoogleSheet` implements it against the Google
//! Sheets API and `TestSheet` implements it in memory so that the whole program can run without
//! network access.

mod files;
mod oauth;
mod sheet;
mod sheet_test_client;

use crate::error::LedgerResult;
use crate::model::{CellRange, Column, Grid};
use crate::{Config, Result};
use std::fmt;
use tracing::debug;

pub(crate) use oauth::TokenProvider;
pub use sheet_test_client::TestSheet;

/// OAuth scopes required for reading and writing spreadsheet values.
const OAUTH_SCOPES: &[&str] = &["https://www.googleapis.com/auth/spreadsheets"];

/// When this environment variable is set and non-empty, the program uses `TestSheet` instead of
/// Google Sheets.
pub const TEST_MODE_ENV: &str = "LEDGER_IN_TEST_MODE";

/// Selects the spreadsheet collaborator.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum Mode {
    /// Use the Google Sheets API.
    #[default]
    Google,
    /// Use a seeded, in-memory `TestSheet`.
    Testing,
}

impl Mode {
    /// Returns `Mode::Testing` when `LEDGER_IN_TEST_MODE` is set to a non-empty value.
    pub fn from_env() -> Self {
        match std::env::var(TEST_MODE_ENV) {
            Ok(value) if !value.is_empty() => Mode::Testing,
            _ => Mode::Google,
        }
    }
}

/// A value to be written into one cell.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CellValue {
    /// Stored as text, even if it looks like a number or a date.
    Text(String),
    /// Stored as a number.
    Integer(i64),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

/// A block of values to be written at `range`, row-major. The range is relative to a sheet, the
/// sheet name is given separately to `Sheet::write_ranges`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SheetRange {
    pub range: CellRange,
    pub values: Vec<Vec<CellValue>>,
}

/// The operations the ledger needs from a spreadsheet.
#[async_trait::async_trait]
pub trait Sheet {
    /// The names of all worksheets in the spreadsheet.
    async fn sheet_names(&mut self) -> LedgerResult<Vec<String>>;

    /// All values of a worksheet. Fails with `LedgerError::MissingSheet` if it does not exist.
    async fn get(&mut self, sheet_name: &str) -> LedgerResult<Grid>;

    /// The 1-based index of the last non-empty cell in `column`, or 0 if the column is empty.
    /// Fails with `LedgerError::MissingSheet` if the worksheet does not exist.
    async fn occupied_count(&mut self, sheet_name: &str, column: Column) -> LedgerResult<usize>;

    /// Writes every range in `data` as one batch. Either all ranges are applied or none are.
    async fn write_ranges(&mut self, sheet_name: &str, data: &[SheetRange]) -> LedgerResult<()>;
}

/// Creates the `Sheet` collaborator for `mode`.
pub(crate) async fn sheet(config: &Config, mode: Mode) -> Result<Box<dyn Sheet + Send>> {
    debug!("Using the {mode:?} sheet");
    Ok(match mode {
        Mode::Google => {
            let token_provider =
                TokenProvider::load(config.client_secret_path(), config.token_path()).await?;
            Box::new(sheet::GoogleSheet::new(config.clone(), token_provider).await?)
        }
        Mode::Testing => Box::new(TestSheet::seeded()?),
    })
}

/// Qualifies `range` with a quoted sheet name, e.g. `'5월'!C21:D21`.
pub(crate) fn a1(sheet_name: &str, range: impl fmt::Display) -> String {
    format!("'{}'!{range}", sheet_name.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a1() {
        let range: CellRange = "C21:D21".parse().unwrap();
        assert_eq!(a1("5월", range), "'5월'!C21:D21");
        assert_eq!(a1("Bob's", "A:ZZ"), "'Bob''s'!A:ZZ");
    }

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::from("식비").to_string(), "식비");
        assert_eq!(CellValue::from(-15_000).to_string(), "-15000");
    }
}

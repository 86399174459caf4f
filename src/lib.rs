//! A household account book kept in a Google spreadsheet.
//!
//! The `ledger` module holds the engine: it totals monthly sheets by category, breaks a category
//! down by detail label, and appends transactions below the last used row of a month. It reaches
//! the spreadsheet only through the `Sheet` trait, implemented against Google Sheets and, for
//! tests and offline runs, in memory by `TestSheet`.

mod api;
pub mod args;
pub mod commands;
mod config;
mod error;
pub mod ledger;
pub mod model;
mod utils;


pub use api::{CellValue, Mode, Sheet, SheetRange, TestSheet, TEST_MODE_ENV};
pub use config::Config;
pub use error::{Error, LedgerError, LedgerResult, Result};

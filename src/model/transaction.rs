use crate::model::Amount;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The date format written to, and read from, the date column of a monthly sheet.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One ledger entry to be appended to a monthly sheet.
///
/// A `Transaction` is immutable once built. The main category is kept as free text because the
/// sheet accepts labels beyond the four that the monthly summary recognizes.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Transaction {
    date: NaiveDate,
    main_category: String,
    detail: String,
    amount: Amount,
    payment: String,
    description: String,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        main_category: impl Into<String>,
        detail: impl Into<String>,
        amount: Amount,
        payment: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            main_category: main_category.into(),
            detail: detail.into(),
            amount,
            payment: payment.into(),
            description: description.into(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The calendar month of `date`, 1 through 12.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// The date as it is written into the sheet, e.g. `2025-05-03`.
    pub fn date_cell(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn main_category(&self) -> &str {
        &self.main_category
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn payment(&self) -> &str {
        &self.payment
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

use crate::api::{self, Sheet};
use crate::commands::Out;
use crate::error::LedgerError;
use crate::ledger::layout::month_sheet_name;
use crate::ledger::monthly_summary;
use crate::model::MonthlyTotals;
use crate::{Config, Mode, Result};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// The totals of one monthly sheet.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MonthSummary {
    pub sheet_name: String,
    pub totals: MonthlyTotals,
}

/// Handles `ledger summary`: totals the income, expense, saving and investment rows of `month`,
/// or of the current local month when `month` is `None`.
///
/// Any failure to read the sheet is logged and reported as zero totals: unusable credentials, a
/// missing sheet or a failed fetch.
pub async fn summary(config: Config, mode: Mode, month: Option<u32>) -> Result<Out<MonthSummary>> {
    let sheet_name = month_sheet_name(month.unwrap_or_else(|| Local::now().month()));
    let summary = match api::sheet(&config, mode).await {
        Ok(mut sheet) => summarize(sheet.as_mut(), &sheet_name).await,
        Err(e) => {
            error!("Unable to reach the spreadsheet, showing zero totals: {e:#}");
            MonthSummary {
                sheet_name,
                totals: MonthlyTotals::default(),
            }
        }
    };
    Ok(Out::new(
        format!("{}: {}", summary.sheet_name, summary.totals),
        summary,
    ))
}

async fn summarize(sheet: &mut (dyn Sheet + Send), sheet_name: &str) -> MonthSummary {
    let totals = match sheet.get(sheet_name).await {
        Ok(grid) => monthly_summary(&grid),
        Err(e @ LedgerError::MissingSheet { .. }) => {
            warn!("{e}, showing zero totals");
            MonthlyTotals::default()
        }
        Err(e) => {
            error!("Unable to read '{sheet_name}', showing zero totals: {e}");
            MonthlyTotals::default()
        }
    };
    MonthSummary {
        sheet_name: sheet_name.to_string(),
        totals,
    }
}

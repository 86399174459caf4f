use crate::api;
use crate::commands::Out;
use crate::ledger::category_detail;
use crate::ledger::layout::chart;
use crate::model::DetailTotals;
use crate::{Config, Mode, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// The detail totals of one main category, read from the chart conversion sheet.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CategoryStats {
    pub category: String,
    pub totals: DetailTotals,
}

/// Handles `ledger stats CATEGORY`: sums the amounts of every detail label whose main category is
/// `category`. Unlike `summary`, a missing chart sheet is an error.
pub async fn stats(config: Config, mode: Mode, category: &str) -> Result<Out<CategoryStats>> {
    let category = category.trim();
    let mut sheet = api::sheet(&config, mode).await?;
    let grid = sheet
        .get(chart::SHEET_NAME)
        .await
        .with_context(|| format!("Unable to read the statistics for '{category}'"))?;
    let totals = category_detail(&grid, category);

    let mut message = if totals.is_empty() {
        format!("No entries found for '{category}'")
    } else {
        format!("{category}:")
    };
    for (detail, amount) in totals.iter() {
        message.push_str(&format!("\n  {detail}: {amount}"));
    }

    Ok(Out::new(
        message,
        CategoryStats {
            category: category.to_string(),
            totals,
        },
    ))
}

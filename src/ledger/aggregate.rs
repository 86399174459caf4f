//! Sums ledger rows into category totals.
//!
//! Both functions are pure and tolerant: a row that is too short, has an unrecognized category or
//! holds a non-numeric amount contributes nothing. Neither function can fail.

use crate::ledger::layout::{chart, monthly};
use crate::model::{Amount, Category, Column, DetailTotals, MonthlyTotals};
use tracing::trace;

/// Totals the four top-level categories of one monthly sheet.
///
/// The first `monthly::HEADER_ROWS` rows are skipped. A row counts when it reaches the amount
/// column, its category cell is exactly one of the four category labels and its amount cell
/// normalizes to a number.
pub fn monthly_summary(grid: &[Vec<String>]) -> MonthlyTotals {
    let mut totals = MonthlyTotals::default();
    for (ix, row) in rows_after_header(grid, monthly::HEADER_ROWS) {
        if row.len() <= monthly::AMOUNT.index() {
            continue;
        }
        let Some(category) = cell(row, monthly::CATEGORY).and_then(Category::from_label) else {
            continue;
        };
        match cell(row, monthly::AMOUNT).and_then(Amount::parse) {
            Some(amount) => totals.add(category, amount),
            None => trace!("Skipping row {}: amount is not a number", ix + 1),
        }
    }
    totals
}

/// Totals the amounts of the chart conversion sheet for one top-level category, keyed by detail
/// label.
///
/// The category and detail cells are trimmed before use; `target` is compared as given.
pub fn category_detail(grid: &[Vec<String>], target: &str) -> DetailTotals {
    let mut totals = DetailTotals::default();
    for (ix, row) in rows_after_header(grid, chart::HEADER_ROWS) {
        if row.len() <= chart::AMOUNT.index() {
            continue;
        }
        if cell(row, chart::CATEGORY).map(str::trim) != Some(target) {
            continue;
        }
        let detail = cell(row, chart::DETAIL).map(str::trim).unwrap_or_default();
        match cell(row, chart::AMOUNT).and_then(Amount::parse) {
            Some(amount) => totals.add(detail, amount),
            None => trace!("Skipping row {}: amount is not a number", ix + 1),
        }
    }
    totals
}

/// Enumerates rows with their 0-based index, skipping the first `header_rows`.
fn rows_after_header(
    grid: &[Vec<String>],
    header_rows: usize,
) -> impl Iterator<Item = (usize, &Vec<String>)> {
    grid.iter().enumerate().skip(header_rows)
}

/// The cell at `column`, or `None` when the row is shorter than that.
fn cell(row: &[String], column: Column) -> Option<&str> {
    row.get(column.index()).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(n: usize) -> Vec<Vec<String>> {
        (0..n).map(|_| vec!["header".to_string(); 10]).collect()
    }

    /// A monthly row with the category in D and the amount in H.
    fn monthly_row(category: &str, amount: &str) -> Vec<String> {
        let mut row = vec![String::new(); 10];
        row[2] = "2025-05-01".into();
        row[3] = category.into();
        row[6] = "detail".into();
        row[7] = amount.into();
        row
    }

    /// A chart row with the category in AN, the detail in AO and the amount in BB.
    fn chart_row(category: &str, detail: &str, amount: &str) -> Vec<String> {
        let mut row = vec![String::new(); 54];
        row[39] = category.into();
        row[40] = detail.into();
        row[53] = amount.into();
        row
    }

    #[test]
    fn test_monthly_summary_example() {
        let mut grid = header(3);
        grid.push(monthly_row("수입", "1,000"));
        grid.push(monthly_row("지출", "-500"));
        let totals = monthly_summary(&grid);
        assert_eq!(
            totals,
            MonthlyTotals {
                income: Amount::new(1000),
                expense: Amount::new(-500),
                saving: Amount::ZERO,
                invest: Amount::ZERO,
            }
        );
    }

    #[test]
    fn test_monthly_summary_all_categories() {
        let mut grid = header(3);
        grid.push(monthly_row("수입", "₩3,000,000"));
        grid.push(monthly_row("지출", "12,000"));
        grid.push(monthly_row("지출", "8,000"));
        grid.push(monthly_row("저축", "500,000"));
        grid.push(monthly_row("투자", "-200,000"));
        let totals = monthly_summary(&grid);
        assert_eq!(totals.income, Amount::new(3_000_000));
        assert_eq!(totals.expense, Amount::new(20_000));
        assert_eq!(totals.saving, Amount::new(500_000));
        assert_eq!(totals.invest, Amount::new(-200_000));
    }

    #[test]
    fn test_monthly_summary_header_only() {
        assert_eq!(monthly_summary(&header(3)), MonthlyTotals::default());
        assert_eq!(monthly_summary(&header(1)), MonthlyTotals::default());
        assert_eq!(monthly_summary(&[]), MonthlyTotals::default());
    }

    #[test]
    fn test_monthly_summary_skips_header_rows_with_data() {
        // Header rows are skipped even when they look like entries.
        let grid = vec![
            monthly_row("수입", "100"),
            monthly_row("수입", "100"),
            monthly_row("수입", "100"),
            monthly_row("수입", "7"),
        ];
        assert_eq!(monthly_summary(&grid).income, Amount::new(7));
    }

    #[test]
    fn test_monthly_summary_tolerates_anomalies() {
        let mut grid = header(3);
        grid.push(monthly_row("지출", "N/A"));
        grid.push(monthly_row("지출", ""));
        grid.push(monthly_row("지출", "12.5"));
        grid.push(monthly_row("기타", "1,000"));
        grid.push(monthly_row(" 지출", "1,000"));
        grid.push(vec![]);
        grid.push(vec!["".into(), "".into(), "2025-05-01".into(), "지출".into()]);
        grid.push(monthly_row("지출", "250"));
        let totals = monthly_summary(&grid);
        assert_eq!(totals.expense, Amount::new(250));
        assert_eq!(totals.income, Amount::ZERO);
    }

    #[test]
    fn test_monthly_summary_row_ending_at_amount() {
        // The API drops trailing empty cells, so a row without payment or description ends at H.
        let mut grid = header(3);
        let mut row = monthly_row("저축", "5,000");
        row.truncate(8);
        grid.push(row);
        assert_eq!(monthly_summary(&grid).saving, Amount::new(5000));
    }

    #[test]
    fn test_rows_count_once_they_reach_the_amount_column() {
        let mut monthly = header(3);
        let mut eight = monthly_row("수입", "1,000");
        eight.truncate(8);
        monthly.push(eight);
        let mut seven = monthly_row("수입", "9,999");
        seven.truncate(7);
        monthly.push(seven);
        assert_eq!(monthly_summary(&monthly).income, Amount::new(1000));

        let mut chart = header(1);
        let row = chart_row("지출", "식비", "3,000");
        assert_eq!(row.len(), 54);
        chart.push(row);
        let totals = category_detail(&chart, "지출");
        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get("식비"), Some(Amount::new(3000)));
    }

    #[test]
    fn test_monthly_summary_idempotent() {
        let mut grid = header(3);
        grid.push(monthly_row("수입", "1,000"));
        grid.push(monthly_row("투자", "-3"));
        let first = monthly_summary(&grid);
        let second = monthly_summary(&grid);
        assert_eq!(first, second);
    }

    #[test]
    fn test_category_detail_example() {
        let mut grid = header(1);
        grid.push(chart_row("지출", "식비", "3,000"));
        let totals = category_detail(&grid, "지출");
        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get("식비"), Some(Amount::new(3000)));

        grid.push(chart_row("지출", "식비", "2,000"));
        let totals = category_detail(&grid, "지출");
        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get("식비"), Some(Amount::new(5000)));
    }

    #[test]
    fn test_category_detail_trims_cells() {
        let mut grid = header(1);
        grid.push(chart_row(" 지출 ", " 식비", "1,000"));
        grid.push(chart_row("지출", "식비 ", "₩500"));
        let totals = category_detail(&grid, "지출");
        assert_eq!(totals.get("식비"), Some(Amount::new(1500)));
    }

    #[test]
    fn test_category_detail_filters_category() {
        let mut grid = header(1);
        grid.push(chart_row("지출", "식비", "1,000"));
        grid.push(chart_row("수입", "월급", "3,000,000"));
        grid.push(chart_row("지출", "교통", "1,250"));
        let expense = category_detail(&grid, "지출");
        assert_eq!(expense.len(), 2);
        assert_eq!(expense.get("교통"), Some(Amount::new(1250)));
        assert_eq!(expense.get("월급"), None);
        let income = category_detail(&grid, "수입");
        assert_eq!(income.len(), 1);
        assert!(category_detail(&grid, "투자").is_empty());
    }

    #[test]
    fn test_category_detail_tolerates_anomalies() {
        let mut grid = header(1);
        grid.push(chart_row("지출", "식비", "없음"));
        grid.push(chart_row("지출", "식비", ""));
        let mut short = chart_row("지출", "식비", "1,000");
        short.truncate(53);
        grid.push(short);
        grid.push(vec!["지출".into()]);
        let totals = category_detail(&grid, "지출");
        assert!(totals.is_empty());
    }

    #[test]
    fn test_category_detail_skips_header() {
        let grid = vec![chart_row("지출", "식비", "1,000")];
        assert!(category_detail(&grid, "지출").is_empty());
        assert!(category_detail(&[], "지출").is_empty());
    }

    #[test]
    fn test_category_detail_empty_detail_label() {
        let mut grid = header(1);
        grid.push(chart_row("지출", "", "700"));
        let totals = category_detail(&grid, "지출");
        assert_eq!(totals.get(""), Some(Amount::new(700)));
    }
}

//! Implements the `Sheet` trait using in-memory data for testing purposes.
//!
//! Note: this is compiled even in the "production" version of this app so that we can run the whole
//! app, top-to-bottom, without using Google Sheets.

use crate::api::{Sheet, SheetRange};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::layout::{chart, month_sheet_name, monthly};
use crate::model::{Column, Grid};
use crate::Result;
use anyhow::anyhow;
use std::collections::HashMap;
use std::io::Cursor;

/// An implementation of the `Sheet` trait that does not use Google sheets. It holds its worksheets
/// in memory and records every batch written to it.
#[derive(Debug, Default, Clone)]
pub struct TestSheet {
    data: HashMap<String, Grid>,
    batches: Vec<(String, Vec<SheetRange>)>,
}

impl TestSheet {
    /// Create a new `TestSheet` using `data`. The map key is sheet name and the map value is the
    /// rows of the sheet.
    pub fn new(data: HashMap<String, Grid>) -> Self {
        Self {
            data,
            batches: Vec::new(),
        }
    }

    /// Create a `TestSheet` holding twelve monthly sheets and a chart conversion sheet.
    pub fn seeded() -> Result<Self> {
        Ok(Self::new(default_data()?))
    }

    /// The current contents of every worksheet.
    pub fn data(&self) -> &HashMap<String, Grid> {
        &self.data
    }

    /// Every successful `write_ranges` call, in order, as `(sheet_name, ranges)`.
    pub fn batches(&self) -> &[(String, Vec<SheetRange>)] {
        &self.batches
    }

    fn grid(&self, sheet_name: &str) -> LedgerResult<&Grid> {
        self.data
            .get(sheet_name)
            .ok_or_else(|| LedgerError::missing_sheet(sheet_name))
    }
}

#[async_trait::async_trait]
impl Sheet for TestSheet {
    async fn sheet_names(&mut self) -> LedgerResult<Vec<String>> {
        let mut names: Vec<String> = self.data.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn get(&mut self, sheet_name: &str) -> LedgerResult<Grid> {
        // Like the Sheets API, leave out trailing empty cells and rows.
        let mut rows: Grid = self
            .grid(sheet_name)?
            .iter()
            .map(|row| {
                let len = row.iter().rposition(|c| !c.is_empty()).map_or(0, |i| i + 1);
                row[..len].to_vec()
            })
            .collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        Ok(rows)
    }

    async fn occupied_count(&mut self, sheet_name: &str, column: Column) -> LedgerResult<usize> {
        let grid = self.grid(sheet_name)?;
        Ok(grid
            .iter()
            .rposition(|row| row.get(column.index()).is_some_and(|c| !c.is_empty()))
            .map_or(0, |i| i + 1))
    }

    async fn write_ranges(&mut self, sheet_name: &str, data: &[SheetRange]) -> LedgerResult<()> {
        let grid = self
            .data
            .get_mut(sheet_name)
            .ok_or_else(|| LedgerError::missing_sheet(sheet_name))?;

        // Check every range before touching the grid so that a bad batch writes nothing.
        for sr in data {
            let too_tall = sr.values.len() > sr.range.height();
            let too_wide = sr.values.iter().any(|row| row.len() > sr.range.width());
            if too_tall || too_wide {
                return Err(LedgerError::transport(anyhow!(
                    "The values do not fit in range {}",
                    sr.range
                )));
            }
        }

        for sr in data {
            for (i, values) in sr.values.iter().enumerate() {
                let r = sr.range.start.row - 1 + i;
                if grid.len() <= r {
                    grid.resize(r + 1, Vec::new());
                }
                let row = &mut grid[r];
                for (j, value) in values.iter().enumerate() {
                    let c = sr.range.start.column.index() + j;
                    if row.len() <= c {
                        row.resize(c + 1, String::new());
                    }
                    row[c] = value.to_string();
                }
            }
        }
        self.batches.push((sheet_name.to_string(), data.to_vec()));
        Ok(())
    }
}

/// Provides the seed data from this module.
fn default_data() -> Result<HashMap<String, Grid>> {
    let mut map = HashMap::new();
    for month in 1..=12 {
        map.insert(month_sheet_name(month), monthly_data(month)?);
    }
    map.insert(chart::SHEET_NAME.to_string(), chart_data());
    Ok(map)
}

/// A monthly sheet: the header rows, an empty summary region, then a few entries starting at
/// `monthly::MIN_START_ROW`.
fn monthly_data(month: u32) -> Result<Grid> {
    let mut rows = load_csv(MONTHLY_HEADER)?;
    debug_assert_eq!(rows.len(), monthly::HEADER_ROWS);
    rows.resize(monthly::MIN_START_ROW - 1, Vec::new());
    let entries = MONTHLY_ENTRIES.replace("{month}", &format!("{month:02}"));
    rows.extend(load_csv(&entries)?);
    Ok(rows)
}

/// The chart conversion sheet: a header row followed by rows that only fill the three columns the
/// ledger reads.
fn chart_data() -> Grid {
    let mut rows = vec![vec!["대분류".to_string(), "상세".to_string(), "금액".to_string()]];
    for (category, detail, amount) in CHART_ENTRIES {
        let mut row = vec![String::new(); chart::AMOUNT.index() + 1];
        row[chart::CATEGORY.index()] = category.to_string();
        row[chart::DETAIL.index()] = detail.to_string();
        row[chart::AMOUNT.index()] = amount.to_string();
        rows.push(row);
    }
    rows
}

/// Loads data from a CSV-formatted string.
fn load_csv(csv_data: &str) -> Result<Grid> {
    let bytes = csv_data.as_bytes();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(bytes));

    let mut rows: Grid = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }
    Ok(rows)
}

/// Seed header rows of a monthly sheet.
const MONTHLY_HEADER: &str = r##"가계부,,,,,,,,,
,,,,,,,,,
,,날짜,대분류,,,상세,금액,결제수단,내용
"##;

/// Seed entries of a monthly sheet. `{month}` is replaced with the two-digit month.
const MONTHLY_ENTRIES: &str = r##",,2025-{month}-01,수입,,,월급,"3,000,000",계좌이체,급여
,,2025-{month}-03,지출,,,식비,"₩12,000",카드,점심
,,2025-{month}-05,저축,,,적금,"500,000",계좌이체,
,,2025-{month}-07,투자,,,주식,"-200,000",계좌이체,매도 정정
,,2025-{month}-09,지출,,,교통,N/A,카드,금액 미정
"##;

/// Seed rows of the chart conversion sheet as `(category, detail, amount)`.
const CHART_ENTRIES: &[(&str, &str, &str)] = &[
    ("지출", "식비", "12,000"),
    (" 지출 ", "식비 ", "3,000"),
    ("지출", "교통", "1,250"),
    ("지출", "기타", "없음"),
    ("수입", "월급", "3,000,000"),
    ("저축", "적금", "₩500,000"),
];

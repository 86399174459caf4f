//! Implements the `Sheet` trait using the `sheets:Client` to interact with a Google sheet.

use crate::api::{a1, CellValue, Sheet, SheetRange, TokenProvider};
use crate::error::{LedgerError, LedgerResult};
use crate::model::{Column, Grid};
use crate::{Config, Result};
use anyhow::Context;
use sheets::types::{
    BatchUpdateValuesRequest, DateTimeRenderOption, Dimension, ValueInputOption, ValueRange,
    ValueRenderOption,
};
use sheets::ClientError;
use tracing::trace;

/// Implements the `Sheet` trait using the `sheets:Client` to interact with a Google sheet. It takes
/// a `TokenProvider`, on which it calls refresh to keep the token up-to-date.
pub(super) struct GoogleSheet {
    config: Config,
    token_provider: TokenProvider,
    client: sheets::Client,
}

impl GoogleSheet {
    pub(super) async fn new(config: Config, mut token_provider: TokenProvider) -> Result<Self> {
        let client = create_sheets_client(&mut token_provider).await?;
        Ok(Self {
            config,
            token_provider,
            client,
        })
    }

    /// Refreshes the sheets client with a new access token if needed
    async fn refresh_client(&mut self) -> LedgerResult<()> {
        self.client = create_sheets_client(&mut self.token_provider)
            .await
            .map_err(LedgerError::transport)?;
        Ok(())
    }

    /// Fails with `MissingSheet` unless a worksheet named `sheet_name` exists.
    async fn ensure_exists(&mut self, sheet_name: &str) -> LedgerResult<()> {
        let names = self.sheet_names().await?;
        if names.iter().any(|n| n == sheet_name) {
            Ok(())
        } else {
            Err(LedgerError::missing_sheet(sheet_name))
        }
    }

    /// Fetches the formatted values of `range`, one `Vec` per row.
    async fn values(&mut self, range: &str) -> LedgerResult<Grid> {
        self.refresh_client().await?;
        let response = self
            .client
            .spreadsheets()
            .values_get(
                self.config.spreadsheet_id(),
                range,
                DateTimeRenderOption::FormattedString,
                Dimension::Rows,
                ValueRenderOption::FormattedValue,
            )
            .await
            .map_err(map_client_error)
            .with_context(|| format!("Failed to fetch {range}"))
            .map_err(LedgerError::transport)?;
        Ok(response.body.values)
    }
}

#[async_trait::async_trait]
impl Sheet for GoogleSheet {
    async fn sheet_names(&mut self) -> LedgerResult<Vec<String>> {
        trace!("sheet_names");
        self.refresh_client().await?;
        let response = self
            .client
            .spreadsheets()
            .get(self.config.spreadsheet_id(), false, &[])
            .await
            .map_err(map_client_error)
            .context("Failed to fetch the spreadsheet properties")
            .map_err(LedgerError::transport)?;
        Ok(response
            .body
            .sheets
            .into_iter()
            .filter_map(|s| s.properties.map(|p| p.title))
            .collect())
    }

    async fn get(&mut self, sheet_name: &str) -> LedgerResult<Grid> {
        trace!("get for {sheet_name}");
        self.ensure_exists(sheet_name).await?;
        // Get all columns
        self.values(&a1(sheet_name, "A:ZZ")).await
    }

    async fn occupied_count(&mut self, sheet_name: &str, column: Column) -> LedgerResult<usize> {
        trace!("occupied_count for {sheet_name} column {column}");
        self.ensure_exists(sheet_name).await?;
        // The API stops at the last non-empty row and returns empty rows before it, so the row
        // count is the index of the last occupied cell.
        let rows = self.values(&a1(sheet_name, format!("{column}:{column}"))).await?;
        Ok(rows.len())
    }

    async fn write_ranges(&mut self, sheet_name: &str, data: &[SheetRange]) -> LedgerResult<()> {
        self.ensure_exists(sheet_name).await?;
        self.refresh_client().await?;
        let value_ranges: Vec<ValueRange> = data
            .iter()
            .map(|sr| ValueRange {
                major_dimension: Some(Dimension::Rows),
                range: a1(sheet_name, &sr.range),
                values: sr
                    .values
                    .iter()
                    .map(|row| row.iter().map(user_entered).collect())
                    .collect(),
            })
            .collect();

        let request = BatchUpdateValuesRequest {
            data: value_ranges,
            include_values_in_response: Some(false),
            response_date_time_render_option: None,
            response_value_render_option: None,
            value_input_option: Some(ValueInputOption::UserEntered),
        };

        self.client
            .spreadsheets()
            .values_batch_update(self.config.spreadsheet_id(), &request)
            .await
            .map_err(map_client_error)
            .with_context(|| format!("Failed to write ranges to {sheet_name}"))
            .map_err(LedgerError::transport)?;
        Ok(())
    }
}

/// Renders a value for `ValueInputOption::UserEntered`. Numbers are sent bare so the sheet stores
/// them as numbers. Text gets a leading apostrophe so the sheet keeps it as text instead of
/// parsing dates, numbers or formulas out of it.
fn user_entered(value: &CellValue) -> String {
    match value {
        CellValue::Integer(n) => n.to_string(),
        CellValue::Text(s) if s.is_empty() => String::new(),
        CellValue::Text(s) => format!("'{s}"),
    }
}

/// Creates a new sheets client with a refreshed access token.
async fn create_sheets_client(token_provider: &mut TokenProvider) -> Result<sheets::Client> {
    // Get the access token (will refresh if needed)
    let access_token = token_provider.token_with_refresh().await?;

    // The sheets crate requires client_id, client_secret, and redirect_uri, but we don't need
    // them for API calls, only the access token
    Ok(sheets::Client::new(
        String::new(),
        String::new(),
        String::new(),
        access_token.to_string(),
        String::new(), // refresh_token (not needed, we handle refresh ourselves)
    ))
}

fn map_client_error(e: ClientError) -> anyhow::Error {
    let error_name = match &e {
        ClientError::EmptyRefreshToken => "EmptyRefreshToken".to_string(),
        ClientError::FromUtf8Error(inner) => format!("FromUtf8Error {inner}"),
        ClientError::UrlParserError(inner) => format!("UrlParserError {inner}"),
        ClientError::SerdeJsonError(inner) => format!("SerdeJsonError {inner}"),
        ClientError::ReqwestError(inner) => format!("ReqwestError {inner}"),
        ClientError::InvalidHeaderValue(inner) => format!("InvalidHeaderValue {inner}"),
        ClientError::ReqwestMiddleWareError(inner) => format!("ReqwestMiddleWareError {inner}"),
        ClientError::HttpError { .. } => "HttpError".to_string(),
        ClientError::Other(_) => "Other".to_string(),
    };
    anyhow::Error::new(e).context(error_name)
}

use crate::commands::Out;
use crate::{Config, Result};
use anyhow::Context;
use std::path::Path;

/// Creates the data directory, its secrets subdirectory and:
/// - Creates an initial `config.json` file using `sheet_url`
/// - Moves `secret_file` into its default location in the data dir.
///
/// # Arguments
/// - `ledger_home` - The directory that will be the root of data directory, e.g. `$HOME/ledger`
/// - `secret_file` - The downloaded OAuth 2.0 client credentials JSON.
/// - `sheet_url` - The URL of the ledger spreadsheet.
///
/// # Errors
/// - Returns an error if the URL is not a spreadsheet URL or if any file operations fail.
pub async fn init(ledger_home: &Path, secret_file: &Path, url: &str) -> Result<Out<()>> {
    let config = Config::create(ledger_home, secret_file, url)
        .await
        .context("Unable to create the data directory and configs")?;
    Ok(format!(
        "Successfully created the ledger directory at {}. Place your OAuth token at {}",
        config.root().display(),
        config.token_path().display()
    )
    .into())
}

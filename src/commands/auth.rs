//! Authentication command handlers.
//!
//! This module implements the CLI commands for:
//! - `ledger auth` - Check that the saved token loads and carries the spreadsheet scope
//! - `ledger auth --verify` - Also refresh the token against Google
//!
//! Neither command opens a browser. The token has to be obtained beforehand and saved to the
//! token path.

use crate::api::TokenProvider;
use crate::commands::Out;
use crate::{Config, Result};
use anyhow::Context;

/// Handles `ledger auth`: loads the client secret and the token and reports where they live.
///
/// # Errors
/// Returns an error if either file is missing, unreadable or lacks the spreadsheet scope.
pub async fn auth(config: &Config) -> Result<Out<()>> {
    load(config).await?;
    Ok(format!(
        "Found a usable OAuth token at {}",
        config.token_path().display()
    )
    .into())
}

/// Handles `ledger auth --verify`: loads the token and exchanges the refresh token for a new
/// access token, which is saved back to the token file.
///
/// # Errors
/// Returns an error if loading fails or Google rejects the refresh.
pub async fn auth_verify(config: &Config) -> Result<Out<()>> {
    let mut token_provider = load(config).await?;
    token_provider
        .refresh()
        .await
        .context("Unable to refresh the token")?;
    Ok("Your OAuth token is valid!".into())
}

async fn load(config: &Config) -> Result<TokenProvider> {
    TokenProvider::load(config.client_secret_path(), config.token_path())
        .await
        .with_context(|| {
            format!(
                "Unable to use the credentials in {}. The client secret must be at {} and a token \
                with the spreadsheets scope must be at {}",
                config.secrets().display(),
                config.client_secret_path().display(),
                config.token_path().display()
            )
        })
}

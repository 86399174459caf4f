//! Access token management for the Google Sheets API.
//!
//! The interactive consent flow is not part of this program. `TokenProvider` starts from an
//! existing `token.json`, hands out its access token, and uses the refresh token to get a new one
//! when it is about to expire.

use crate::api::files::{File, SecretFile, TokenFile};
use crate::Result;
use anyhow::Context;
use chrono::Utc;
use oauth2::basic::BasicClient;
use oauth2::{ClientId, ClientSecret, RefreshToken, TokenResponse, TokenUrl};
use std::path::Path;
use tracing::{debug, info};

/// Holds the OAuth client credentials and the current token, refreshing the token on demand.
#[derive(Debug, Clone)]
pub(crate) struct TokenProvider {
    secret: SecretFile,
    token: File<TokenFile>,
}

impl TokenProvider {
    /// Loads the client secret and token files. Fails if either is missing or if the token was
    /// not granted the spreadsheet scope.
    pub(crate) async fn load(
        client_secret_path: impl AsRef<Path>,
        token_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let secret = SecretFile::load(client_secret_path.as_ref()).await?;
        let token = TokenFile::load(token_path.as_ref()).await?;
        Ok(Self { secret, token })
    }

    /// The current access token, which may be expired.
    pub(crate) fn token(&self) -> &str {
        self.token.data().access_token()
    }

    /// The current access token, refreshed first if it is expired or about to expire.
    pub(crate) async fn token_with_refresh(&mut self) -> Result<&str> {
        if self.token.data().is_expired() {
            self.refresh().await?;
        }
        Ok(self.token())
    }

    /// Exchanges the refresh token for a new access token and saves it to the token file.
    pub(crate) async fn refresh(&mut self) -> Result<()> {
        debug!("Refreshing the OAuth access token");
        let token_url = TokenUrl::new(self.secret.token_uri().to_string())
            .context("The token_uri in the client secret file is not a valid URL")?;
        let client = BasicClient::new(ClientId::new(self.secret.client_id().to_string()))
            .set_client_secret(ClientSecret::new(self.secret.client_secret().to_string()))
            .set_token_uri(token_url);

        let http_client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .context("Unable to build the HTTP client")?;

        let refresh_token = RefreshToken::new(self.token.data().refresh_token().to_string());
        let response = client
            .exchange_refresh_token(&refresh_token)
            .request_async(&http_client)
            .await
            .context("Failed to refresh the OAuth access token")?;

        let expires_in = response
            .expires_in()
            .and_then(|d| chrono::Duration::from_std(d).ok())
            .unwrap_or_else(|| chrono::Duration::hours(1));
        let new_refresh_token = response.refresh_token().map(|t| t.secret().to_string());
        self.token.data_mut().update(
            response.access_token().secret().to_string(),
            Utc::now() + expires_in,
            new_refresh_token,
        );
        self.token.save().await?;
        info!(
            "Refreshed the access token, valid until {} ({})",
            self.token.data().expires_at(),
            self.token.path().display()
        );
        Ok(())
    }
}

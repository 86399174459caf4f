//! Serialization and deserialization structures for Google OAuth credential files.
//! - `client_secret.json`: OAuth 2.0 client credentials from Google Cloud Console
//! - `token.json`: the access and refresh tokens

use crate::api::OAUTH_SCOPES;
use crate::{utils, Result};
use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

/// Represents a file that we want to `Serialize`, `Deserialize`, and read from memory in-between
/// serializations and deserialization. Basically we are just holding the `path` and the `data`
/// here.
#[derive(Default, Debug, Clone)]
pub(super) struct File<F>
where
    F: Serialize + DeserializeOwned + Clone + Debug,
{
    path: PathBuf,
    data: F,
}

impl<F> File<F>
where
    F: Serialize + DeserializeOwned + Clone + Debug,
{
    /// Load data from a file and create a File instance
    pub(super) async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let data: F = utils::deserialize(&path).await?;
        Ok(Self { path, data })
    }

    /// Save the current data to the file
    pub(super) async fn save(&self) -> Result<()> {
        let json =
            serde_json::to_string_pretty(&self.data).context("Failed to serialize data to JSON")?;
        utils::write(&self.path, json).await?;

        // Set restrictive permissions on Unix-like systems
        #[cfg(unix)]
        {
            use std::fs::Permissions;
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, Permissions::from_mode(0o600))
                .context("Failed to set file permissions")?;
        }

        Ok(())
    }

    pub(super) fn data(&self) -> &F {
        &self.data
    }

    pub(super) fn data_mut(&mut self) -> &mut F {
        &mut self.data
    }

    pub(super) fn path(&self) -> &Path {
        &self.path
    }
}

/// Represents the structure of the `client_secret.json` file downloaded from Google Cloud Console.
///
/// This file contains OAuth 2.0 Desktop Application credentials. The standard format from Google
/// has an "installed" wrapper around the actual credentials.
///
/// Example:
/// ```json
/// {
///   "installed": {
///     "client_id": "YOUR_CLIENT_ID.apps.googleusercontent.com",
///     "client_secret": "YOUR_CLIENT_SECRET",
///     "redirect_uris": ["http://localhost"],
///     "auth_uri": "https://accounts.google.com/o/oauth2/auth",
///     "token_uri": "https://oauth2.googleapis.com/token"
///   }
/// }
/// ```
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) struct SecretFile {
    installed: InstalledCredentials,
}

impl SecretFile {
    pub(super) async fn load(path: &Path) -> Result<SecretFile> {
        utils::deserialize(path)
            .await
            .context("Unable to read the client secret file")
    }

    pub(super) fn client_id(&self) -> &str {
        &self.installed.client_id
    }

    pub(super) fn client_secret(&self) -> &str {
        &self.installed.client_secret
    }

    pub(super) fn token_uri(&self) -> &str {
        &self.installed.token_uri
    }
}

/// The actual OAuth credentials nested within the `client_secret.json` file.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) struct InstalledCredentials {
    client_id: String,
    client_secret: String,
    token_uri: String,
}

/// This is how we save the token information that we receive from Google OAuth.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(super) struct TokenFile {
    scopes: Vec<String>,
    access_token: String,
    refresh_token: String,
    expires_at: DateTime<Utc>,
    id_token: Option<String>,
}

impl TokenFile {
    /// Loads the token file and checks that it was granted the scopes we need.
    pub(super) async fn load(p: impl AsRef<Path>) -> Result<File<Self>> {
        let file: File<Self> = File::load(p.as_ref())
            .await
            .context("Unable to deserialize the token JSON file")?;
        file.data().validate_scopes()?;
        Ok(file)
    }

    fn validate_scopes(&self) -> Result<()> {
        let found_scopes: HashSet<&str> = self.scopes.iter().map(|s| s.as_str()).collect();
        for &required_scope in OAUTH_SCOPES {
            if !found_scopes.contains(required_scope) {
                bail!("OAuth scope '{required_scope}' is missing.");
            }
        }
        Ok(())
    }

    pub(super) fn access_token(&self) -> &str {
        &self.access_token
    }

    pub(super) fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    pub(super) fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Check if the token is expired or will expire soon (within 5 minutes)
    pub(super) fn is_expired(&self) -> bool {
        let now = Utc::now();
        let buffer = chrono::Duration::minutes(5);
        self.expires_at <= now + buffer
    }

    /// Update the token with new values
    pub(super) fn update(
        &mut self,
        access_token: String,
        expires_at: DateTime<Utc>,
        refresh_token: Option<String>,
    ) {
        self.access_token = access_token;
        self.expires_at = expires_at;
        if let Some(rt) = refresh_token {
            self.refresh_token = rt;
        }
    }
}

//! Configuration file handling for the ledger.
//!
//! The configuration file is stored at `$LEDGER_HOME/config.json` and holds the URL of the ledger
//! spreadsheet along with the paths of the OAuth credential files.

use crate::{utils, Result};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

const APP_NAME: &str = "ledger";
const CONFIG_VERSION: u8 = 1;
const SECRETS: &str = ".secrets";
const CLIENT_SECRET_JSON: &str = "client_secret.json";
const TOKEN_JSON: &str = "token.json";
const CONFIG_JSON: &str = "config.json";

/// The `Config` object represents the configuration of the app. You instantiate it by providing
/// the path to `$LEDGER_HOME` and from there it loads `$LEDGER_HOME/config.json`. It provides
/// paths to other items that are either configurable or are expected in a certain location within
/// the ledger home directory.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    secrets: PathBuf,
    config_path: PathBuf,
    config_file: ConfigFile,
    spreadsheet_id: String,
}

impl Config {
    /// Creates the data directory, its secrets subdirectory and:
    /// - Creates an initial `config.json` file using `sheet_url`
    /// - Moves `secret_file` into its default location in the data dir.
    ///
    /// # Arguments
    /// - `dir` - The directory that will be the root of data directory, e.g. `$HOME/ledger`
    /// - `secret_file` - The downloaded OAuth 2.0 client credentials JSON. This will be moved to
    ///   `.secrets/client_secret.json` in the data directory.
    /// - `sheet_url` - The URL of the household ledger spreadsheet, e.g.
    ///   https://docs.google.com/spreadsheets/d/1a7Km9FxQwRbPt82JvN4LzYpH5OcGnWsT6iDuE3VhMjX/edit
    ///
    /// # Errors
    /// - Returns an error if the URL has no spreadsheet ID or if any file operations fail.
    pub async fn create(
        dir: impl Into<PathBuf>,
        secret_file: &Path,
        sheet_url: &str,
    ) -> Result<Self> {
        // Check the URL before touching the filesystem
        let spreadsheet_id = extract_spreadsheet_id(sheet_url)
            .context("Failed to extract spreadsheet ID from sheet URL")?;

        let maybe_relative = dir.into();
        utils::make_dir(&maybe_relative)
            .await
            .context("Unable to create the ledger home directory")?;
        let root = utils::canonicalize(&maybe_relative).await?;

        let secrets_dir = root.join(SECRETS);
        utils::make_dir(&secrets_dir).await?;
        utils::rename(secret_file, secrets_dir.join(CLIENT_SECRET_JSON)).await?;

        let config_path = root.join(CONFIG_JSON);
        let config_file = ConfigFile {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            sheet_url: sheet_url.to_string(),
            client_secret_path: None,
            token_path: None,
        };
        config_file.save(&config_path).await?;

        Ok(Self {
            root,
            secrets: secrets_dir,
            config_path,
            config_file,
            spreadsheet_id,
        })
    }

    /// This will
    /// - validate that `ledger_home` exists and that the config file exists
    /// - load the config file
    /// - validate that the secrets directory exists
    /// - return the loaded configuration object
    pub async fn load(ledger_home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = ledger_home.into();
        let root = utils::canonicalize(&maybe_relative)
            .await
            .context("Ledger home is missing, run 'ledger init' first")?;

        let config_path = root.join(CONFIG_JSON);
        if !config_path.is_file() {
            bail!("The config file is missing '{}'", config_path.display())
        }
        let config_file = ConfigFile::load(&config_path).await?;

        let spreadsheet_id = extract_spreadsheet_id(&config_file.sheet_url)
            .context("Failed to extract spreadsheet ID from sheet URL")?;

        let secrets = root.join(SECRETS);
        if !secrets.is_dir() {
            bail!("The secrets directory is missing '{}'", secrets.display())
        }

        Ok(Self {
            root,
            secrets,
            config_path,
            config_file,
            spreadsheet_id,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn secrets(&self) -> &Path {
        &self.secrets
    }

    pub fn sheet_url(&self) -> &str {
        &self.config_file.sheet_url
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    /// Returns the stored `client_secret_path` if it is absolute, otherwise resolves it against
    /// the ledger home.
    pub fn client_secret_path(&self) -> PathBuf {
        self.resolve(self.config_file.client_secret_path())
    }

    /// Returns the stored `token_path` if it is absolute, otherwise resolves it against the
    /// ledger home.
    pub fn token_path(&self) -> PathBuf {
        self.resolve(self.config_file.token_path())
    }

    fn resolve(&self, p: PathBuf) -> PathBuf {
        if p.is_absolute() {
            return p;
        }
        self.root.join(p)
    }
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "ledger",
///   "config_version": 1,
///   "sheet_url": "https://docs.google.com/spreadsheets/d/7KpXm2RfZwNJgs84QhVYno5DU6iM9Wlr3bCzAv1txRpL/edit",
///   "client_secret_path": ".secrets/client_secret.json",
///   "token_path": ".secrets/token.json"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, always "ledger"
    app_name: String,

    config_version: u8,

    /// URL of the ledger spreadsheet
    sheet_url: String,

    /// Defaults to $LEDGER_HOME/.secrets/client_secret.json
    #[serde(skip_serializing_if = "Option::is_none")]
    client_secret_path: Option<PathBuf>,

    /// Defaults to $LEDGER_HOME/.secrets/token.json
    #[serde(skip_serializing_if = "Option::is_none")]
    token_path: Option<PathBuf>,
}

impl ConfigFile {
    async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: ConfigFile = utils::deserialize(path).await?;
        anyhow::ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );
        Ok(config)
    }

    async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let data = serde_json::to_string_pretty(self).context("Unable to serialize config")?;
        utils::write(path.as_ref(), data)
            .await
            .context("Unable to write config file")
    }

    fn client_secret_path(&self) -> PathBuf {
        self.client_secret_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(SECRETS).join(CLIENT_SECRET_JSON))
    }

    fn token_path(&self) -> PathBuf {
        self.token_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(SECRETS).join(TOKEN_JSON))
    }
}

/// Extracts the spreadsheet ID from a Google Sheets URL, which is the path segment that follows
/// `/d/`, e.g. `https://docs.google.com/spreadsheets/d/SPREADSHEET_ID/edit#gid=0`.
fn extract_spreadsheet_id(sheet_url: &str) -> Result<String> {
    let url = Url::parse(sheet_url).with_context(|| format!("'{sheet_url}' is not a URL"))?;
    let mut segments = url
        .path_segments()
        .with_context(|| format!("'{sheet_url}' has no path"))?;
    while let Some(segment) = segments.next() {
        if segment == "d" {
            if let Some(id) = segments.next().filter(|id| !id.is_empty()) {
                return Ok(id.to_string());
            }
        }
    }
    bail!(
        "Invalid Google Sheets URL '{sheet_url}'. Expected: \
        https://docs.google.com/spreadsheets/d/SPREADSHEET_ID"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SHEET_URL: &str =
        "https://docs.google.com/spreadsheets/d/7KpXm2RfZwNJgs84QhVYno5DU6iM9Wlr3bCzAv1txRpL/edit";

    #[tokio::test]
    async fn test_config_create() {
        let dir = TempDir::new().unwrap();
        let home_dir = dir.path().join("ledger_home");
        let secret_source_file = dir.path().join("x.json");
        utils::write(&secret_source_file, "12345").await.unwrap();

        let config = Config::create(&home_dir, &secret_source_file, SHEET_URL)
            .await
            .unwrap();

        assert_eq!(SHEET_URL, config.sheet_url());
        assert_eq!(
            "7KpXm2RfZwNJgs84QhVYno5DU6iM9Wlr3bCzAv1txRpL",
            config.spreadsheet_id()
        );
        let found = utils::read(&config.client_secret_path()).await.unwrap();
        assert_eq!("12345", found);
        assert!(!secret_source_file.exists());
        assert!(config.secrets().is_dir());
        assert!(config.config_path().is_file());
        assert_eq!(config.token_path(), config.root().join(SECRETS).join(TOKEN_JSON));
    }

    #[tokio::test]
    async fn test_config_create_bad_url_leaves_no_trace() {
        let dir = TempDir::new().unwrap();
        let home_dir = dir.path().join("ledger_home");
        let secret_file = dir.path().join("x.json");
        utils::write(&secret_file, "{}").await.unwrap();

        let result = Config::create(&home_dir, &secret_file, "https://example.com/nothing").await;
        assert!(result.is_err());
        assert!(!home_dir.exists());
        assert!(secret_file.exists());
    }

    #[tokio::test]
    async fn test_config_load() {
        let dir = TempDir::new().unwrap();
        let home_dir = dir.path().join("ledger_home");
        let secret_file = dir.path().join("x.json");
        utils::write(&secret_file, "{}").await.unwrap();
        let created = Config::create(&home_dir, &secret_file, SHEET_URL)
            .await
            .unwrap();

        let loaded = Config::load(&home_dir).await.unwrap();
        assert_eq!(created.root(), loaded.root());
        assert_eq!(created.spreadsheet_id(), loaded.spreadsheet_id());
        assert_eq!(created.client_secret_path(), loaded.client_secret_path());
    }

    #[tokio::test]
    async fn test_config_load_missing_home() {
        let dir = TempDir::new().unwrap();
        let message = format!(
            "{:#}",
            Config::load(dir.path().join("nope")).await.unwrap_err()
        );
        assert!(message.contains("ledger init"));
    }

    #[tokio::test]
    async fn test_config_load_missing_secrets_dir() {
        let dir = TempDir::new().unwrap();
        let file = ConfigFile {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            sheet_url: SHEET_URL.to_string(),
            client_secret_path: None,
            token_path: None,
        };
        file.save(dir.path().join(CONFIG_JSON)).await.unwrap();
        let message = Config::load(dir.path()).await.unwrap_err().to_string();
        assert!(message.contains("secrets directory is missing"));
    }

    #[tokio::test]
    async fn test_config_file_custom_paths() {
        let dir = TempDir::new().unwrap();
        let json = r#"{
            "app_name": "ledger",
            "config_version": 1,
            "sheet_url": "https://docs.google.com/spreadsheets/d/abc",
            "client_secret_path": "/etc/ledger/secret.json",
            "token_path": "keys/token.json"
        }"#;
        utils::make_dir(dir.path().join(SECRETS)).await.unwrap();
        utils::write(dir.path().join(CONFIG_JSON), json)
            .await
            .unwrap();

        let config = Config::load(dir.path()).await.unwrap();
        assert_eq!(
            config.client_secret_path(),
            PathBuf::from("/etc/ledger/secret.json")
        );
        assert_eq!(config.token_path(), config.root().join("keys/token.json"));
        assert_eq!(config.spreadsheet_id(), "abc");
    }

    #[tokio::test]
    async fn test_config_file_invalid_app_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_JSON);
        let json = r#"{
            "app_name": "budget",
            "config_version": 1,
            "sheet_url": "https://docs.google.com/spreadsheets/d/test"
        }"#;
        utils::write(&path, json).await.unwrap();
        let message = ConfigFile::load(&path).await.unwrap_err().to_string();
        assert!(message.contains("Invalid app_name"));
    }

    #[test]
    fn test_config_file_serialization_omits_none_fields() {
        let file = ConfigFile {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            sheet_url: SHEET_URL.to_string(),
            client_secret_path: None,
            token_path: None,
        };
        let json = serde_json::to_string(&file).unwrap();
        assert!(!json.contains("client_secret_path"));
        assert!(!json.contains("token_path"));
    }

    #[test]
    fn test_extract_spreadsheet_id() {
        assert_eq!(
            extract_spreadsheet_id(SHEET_URL).unwrap(),
            "7KpXm2RfZwNJgs84QhVYno5DU6iM9Wlr3bCzAv1txRpL"
        );
        assert_eq!(
            extract_spreadsheet_id("https://docs.google.com/spreadsheets/d/ABC123?foo=bar")
                .unwrap(),
            "ABC123"
        );
        assert_eq!(
            extract_spreadsheet_id("https://docs.google.com/spreadsheets/d/ABC123#gid=0").unwrap(),
            "ABC123"
        );
        assert!(extract_spreadsheet_id("https://example.com/invalid").is_err());
        assert!(extract_spreadsheet_id("https://docs.google.com/spreadsheets/d/").is_err());
        assert!(extract_spreadsheet_id("").is_err());
        assert!(extract_spreadsheet_id("not a url").is_err());
    }
}

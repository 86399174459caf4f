//! These structs provide the CLI interface for the ledger CLI.

use crate::model::Amount;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// ledger: a command-line household account book backed by a Google spreadsheet.
///
/// The spreadsheet has one sheet per month, named "1월" through "12월", where transactions are
/// recorded from row 21 down, and a "차트변환용시트" sheet that flattens every entry for charts.
/// This program sums a month by main category, sums the details of one category, and appends new
/// transactions to the right month.
///
/// You will need a Google OAuth client and a token with the spreadsheets scope. Run `ledger init`
/// first, then place the token at $LEDGER_HOME/.secrets/token.json.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the data directory and initialize the configuration files.
    ///
    /// This is the first command you should run. You need two things beforehand:
    ///
    /// - The URL of your ledger spreadsheet, passed as --sheet-url.
    ///
    /// - The OAuth 2.0 desktop client credentials downloaded from the Google Cloud Console,
    ///   passed as --client-secret. The file is moved into $LEDGER_HOME/.secrets.
    Init(InitArgs),
    /// Check the saved OAuth token. There is no browser flow, the token must already exist.
    Auth(AuthArgs),
    /// Show the income, expense, saving and investment totals of a month.
    Summary(SummaryArgs),
    /// Show the totals of each detail label within one main category.
    Stats(StatsArgs),
    /// Append a transaction to the sheet of its month.
    Add(AddArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber EnvFilter for details.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where ledger configuration and credentials are held. Defaults to ~/ledger
    #[arg(long, env = "LEDGER_HOME", default_value_t = default_ledger_home())]
    ledger_home: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, ledger_home: PathBuf) -> Self {
        Self {
            log_level,
            ledger_home: ledger_home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn ledger_home(&self) -> &DisplayPath {
        &self.ledger_home
    }
}

/// (Not shown): Args for the `ledger init` command.
#[derive(Debug, Parser, Clone)]
pub struct InitArgs {
    /// The URL of your ledger spreadsheet. It looks like this:
    /// https://docs.google.com/spreadsheets/d/1a7Km9FxQwRbPt82JvN4LzYpH5OcGnWsT6iDuE3VhMjX/edit
    #[arg(long)]
    sheet_url: String,

    /// The path to your downloaded OAuth client credentials. This file will be moved to the
    /// default secrets location in the data directory.
    #[arg(long)]
    client_secret: PathBuf,
}

impl InitArgs {
    pub fn new(sheet_url: impl Into<String>, client_secret: impl Into<PathBuf>) -> Self {
        Self {
            sheet_url: sheet_url.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn sheet_url(&self) -> &str {
        &self.sheet_url
    }

    pub fn client_secret(&self) -> &Path {
        &self.client_secret
    }
}

/// (Not shown): Args for the `ledger auth` command.
#[derive(Debug, Parser, Clone)]
pub struct AuthArgs {
    /// Also exchange the refresh token for a new access token, proving that Google accepts it.
    #[arg(long)]
    verify: bool,
}

impl AuthArgs {
    pub fn new(verify: bool) -> Self {
        Self { verify }
    }

    pub fn verify(&self) -> bool {
        self.verify
    }
}

/// (Not shown): Args for the `ledger summary` command.
#[derive(Debug, Parser, Clone)]
pub struct SummaryArgs {
    /// The month to summarize, 1 through 12. Defaults to the current local month.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,
}

impl SummaryArgs {
    pub fn new(month: Option<u32>) -> Self {
        Self { month }
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }
}

/// (Not shown): Args for the `ledger stats` command.
#[derive(Debug, Parser, Clone)]
pub struct StatsArgs {
    /// The main category to break down, e.g. 지출
    category: String,
}

impl StatsArgs {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// (Not shown): Args for the `ledger add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// The transaction date as YYYY-MM-DD. Its month selects the sheet.
    #[arg(long)]
    date: NaiveDate,

    /// The main category: 수입, 지출, 저축 or 투자
    #[arg(long)]
    category: String,

    /// The detail label, e.g. 식비
    #[arg(long)]
    detail: String,

    /// A whole number amount. Thousands separators and ₩ are accepted, e.g. 15,000
    #[arg(long, allow_hyphen_values = true)]
    amount: Amount,

    /// The payment method, e.g. 카드
    #[arg(long, default_value = "")]
    payment: String,

    /// A free-form description
    #[arg(long, default_value = "")]
    description: String,
}

impl AddArgs {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        detail: impl Into<String>,
        amount: Amount,
        payment: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            detail: detail.into(),
            amount,
            payment: payment.into(),
            description: description.into(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn payment(&self) -> &str {
        &self.payment
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

fn default_ledger_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("ledger"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --ledger-home or LEDGER_HOME instead of relying on the default \
                ledger home directory. If you continue using the program right now, you may have \
                problems!",
            );
            PathBuf::from("ledger")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        let mut argv = vec!["ledger", "--ledger-home", "/tmp/ledger"];
        argv.extend_from_slice(args);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_add_args() {
        let args = parse(&[
            "add",
            "--date",
            "2025-05-03",
            "--category",
            "지출",
            "--detail",
            "식비",
            "--amount",
            "₩15,000",
        ]);
        let Command::Add(add) = args.command() else {
            panic!("expected add, got {:?}", args.command());
        };
        assert_eq!(add.date(), NaiveDate::from_ymd_opt(2025, 5, 3).unwrap());
        assert_eq!(add.amount().value(), 15_000);
        assert_eq!(add.payment(), "");
        assert_eq!(add.description(), "");
        assert_eq!(args.common().ledger_home().path(), Path::new("/tmp/ledger"));
        assert_eq!(args.common().log_level(), LevelFilter::INFO);
    }

    #[test]
    fn test_add_negative_amount() {
        let args = parse(&[
            "add",
            "--date",
            "2025-05-03",
            "--category",
            "투자",
            "--detail",
            "주식",
            "--amount",
            "-200,000",
        ]);
        let Command::Add(add) = args.command() else {
            panic!("expected add");
        };
        assert_eq!(add.amount().value(), -200_000);
    }

    #[test]
    fn test_add_rejects_bad_amount() {
        let result = Args::try_parse_from([
            "ledger", "add", "--date", "2025-05-03", "--category", "지출", "--detail", "식비",
            "--amount", "12.5",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_summary_month_range() {
        let args = parse(&["summary", "--month", "12"]);
        let Command::Summary(summary) = args.command() else {
            panic!("expected summary");
        };
        assert_eq!(summary.month(), Some(12));
        assert!(Args::try_parse_from(["ledger", "summary", "--month", "13"]).is_err());
        assert!(Args::try_parse_from(["ledger", "summary", "--month", "0"]).is_err());
    }

    #[test]
    fn test_stats_args() {
        let args = parse(&["--log-level", "debug", "stats", "지출"]);
        let Command::Stats(stats) = args.command() else {
            panic!("expected stats");
        };
        assert_eq!(stats.category(), "지출");
        assert_eq!(args.common().log_level(), LevelFilter::DEBUG);
    }
}

use clap::Parser;
use sheet_ledger::args::{Args, Command};
use sheet_ledger::{commands, Config, Mode, Result};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let home = args.common().ledger_home().path();

    // This allows for running the program without hitting the Google APIs. When
    // LEDGER_IN_TEST_MODE is set and non-empty, the mode will be Mode::Testing, otherwise it will
    // be Mode::Google.
    let mode = Mode::from_env();

    let _: () = match args.command() {
        Command::Init(init_args) => {
            commands::init(home, init_args.client_secret(), init_args.sheet_url())
                .await?
                .print()
        }

        Command::Auth(auth_args) => {
            let config = Config::load(home).await?;
            if auth_args.verify() {
                commands::auth_verify(&config).await?.print()
            } else {
                commands::auth(&config).await?.print()
            }
        }

        Command::Summary(summary_args) => {
            let config = Config::load(home).await?;
            commands::summary(config, mode, summary_args.month())
                .await?
                .print()
        }

        Command::Stats(stats_args) => {
            let config = Config::load(home).await?;
            commands::stats(config, mode, stats_args.category())
                .await?
                .print()
        }

        Command::Add(add_args) => {
            let config = Config::load(home).await?;
            commands::add(config, mode, add_args.clone()).await?.print()
        }
    };
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                "sheet_ledger",
                level,
                env!("CARGO_CRATE_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

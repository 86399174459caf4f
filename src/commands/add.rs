use crate::api;
use crate::args::AddArgs;
use crate::commands::Out;
use crate::ledger::layout::month_sheet_name;
use crate::ledger::{append_transaction, Appended};
use crate::model::Transaction;
use crate::{Config, Mode, Result};
use anyhow::Context;
use tracing::debug;

/// Handles `ledger add`: appends one transaction to the monthly sheet of its date.
///
/// The amount has already been normalized while parsing the arguments, so it is written as a
/// number. Fails, without writing anything, when the month's sheet does not exist.
pub async fn add(config: Config, mode: Mode, args: AddArgs) -> Result<Out<Appended>> {
    let transaction = Transaction::new(
        args.date(),
        args.category(),
        args.detail(),
        args.amount(),
        args.payment(),
        args.description(),
    );
    debug!("Appending {transaction:?}");

    let mut sheet = api::sheet(&config, mode).await?;
    let appended = append_transaction(sheet.as_mut(), &transaction)
        .await
        .with_context(|| {
            format!(
                "Unable to save the transaction to '{}'",
                month_sheet_name(transaction.month())
            )
        })?;

    Ok(Out::new(
        format!(
            "{}: saved {} {} {} at row {}",
            appended.sheet_name,
            transaction.main_category(),
            transaction.detail(),
            transaction.amount().won(),
            appended.row
        ),
        appended,
    ))
}

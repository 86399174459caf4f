//! Error types.
//!
//! Application plumbing (config files, credentials, the CLI) uses `anyhow`. The ledger engine and
//! the `Sheet` collaborator report the narrower `LedgerError` so that callers can tell a missing
//! worksheet apart from a failed request.

pub type Error = anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// The result type returned by the ledger engine and the `Sheet` collaborator.
pub type LedgerResult<T> = std::result::Result<T, LedgerError>;

/// Failures that the ledger engine surfaces to its caller. Malformed cells are never represented
/// here, they are skipped where they are found.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// The named worksheet does not exist in the spreadsheet.
    #[error("The sheet '{name}' does not exist")]
    MissingSheet { name: String },

    /// The spreadsheet could not complete a fetch or write.
    #[error("Spreadsheet request failed: {message}")]
    Transport { message: String },
}

impl LedgerError {
    pub fn missing_sheet(name: impl Into<String>) -> Self {
        LedgerError::MissingSheet { name: name.into() }
    }

    /// Wraps an underlying failure, keeping its full context chain in the message.
    pub fn transport(e: impl Into<anyhow::Error>) -> Self {
        LedgerError::Transport {
            message: format!("{:#}", e.into()),
        }
    }

    /// The sheet name, if this error is a `MissingSheet`.
    pub fn missing_sheet_name(&self) -> Option<&str> {
        match self {
            LedgerError::MissingSheet { name } => Some(name),
            LedgerError::Transport { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_missing_sheet_message() {
        let e = LedgerError::missing_sheet("5월");
        assert_eq!(e.to_string(), "The sheet '5월' does not exist");
        assert_eq!(e.missing_sheet_name(), Some("5월"));
    }

    #[test]
    fn test_transport_keeps_context_chain() {
        let inner: Result<()> = Err(anyhow::anyhow!("connection reset")).context("Failed to fetch");
        let e = LedgerError::transport(inner.unwrap_err());
        assert_eq!(
            e.to_string(),
            "Spreadsheet request failed: Failed to fetch: connection reset"
        );
        assert!(e.missing_sheet_name().is_none());
    }

    #[test]
    fn test_downcast_from_anyhow() {
        let e: Error = LedgerError::missing_sheet("차트변환용시트").into();
        let ledger_error = e.downcast_ref::<LedgerError>().unwrap();
        assert_eq!(ledger_error.missing_sheet_name(), Some("차트변환용시트"));
    }
}

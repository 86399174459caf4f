use crate::ledger::layout::monthly;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The 1-based row at which a new entry is written in a monthly sheet.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowPlacement(usize);

impl RowPlacement {
    /// The row after the last occupied row of the date column, but never above
    /// `monthly::MIN_START_ROW`.
    pub fn next(occupied: usize) -> Self {
        Self((occupied + 1).max(monthly::MIN_START_ROW))
    }

    pub fn row(&self) -> usize {
        self.0
    }
}

impl fmt::Display for RowPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

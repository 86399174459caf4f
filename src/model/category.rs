//! The four top-level ledger categories.

use serde::{Deserialize, Serialize};

/// The top-level classification of a ledger row. Labels are matched exactly as they are written
/// in the sheet, so `"지출 "` (with a trailing space) is not an `Expense`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "수입")]
    Income,
    #[serde(rename = "지출")]
    Expense,
    #[serde(rename = "저축")]
    Saving,
    #[serde(rename = "투자")]
    Invest,
}

serde_plain::derive_display_from_serialize!(Category);
serde_plain::derive_fromstr_from_deserialize!(Category);

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Income,
        Category::Expense,
        Category::Saving,
        Category::Invest,
    ];

    /// Classifies a sheet label, returning `None` for anything that is not one of the four
    /// recognized labels.
    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label() {
        assert_eq!(Category::from_label("수입"), Some(Category::Income));
        assert_eq!(Category::from_label("지출"), Some(Category::Expense));
        assert_eq!(Category::from_label("저축"), Some(Category::Saving));
        assert_eq!(Category::from_label("투자"), Some(Category::Invest));
    }

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(Category::from_label(" 지출"), None);
        assert_eq!(Category::from_label("지출 "), None);
        assert_eq!(Category::from_label("Expense"), None);
        assert_eq!(Category::from_label(""), None);
        assert_eq!(Category::from_label("기타"), None);
    }

    #[test]
    fn test_display() {
        let labels: Vec<String> = Category::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(labels, vec!["수입", "지출", "저축", "투자"]);
    }
}

//! Amount type for handling whole-won monetary values as they appear in ledger cells.
//!
//! Cells are typed by hand into the sheet, so the same value can show up as `15000`, `15,000`,
//! `₩15,000` or ` - 15,000 `. `Amount::parse` reduces all of these to one integer and treats
//! anything else as not-a-number.

use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// The currency glyph that may prefix an amount.
pub const WON: char = '₩';

/// The thousands separator that may appear in an amount.
const SEPARATOR: char = ',';

/// Represents a signed amount of whole currency units.
///
/// # Examples
///
/// ```
/// # use sheet_ledger::model::Amount;
/// let amount = Amount::parse("₩1,500").unwrap();
/// assert_eq!(amount.value(), 1500);
/// assert_eq!(amount.to_string(), "1,500");
/// assert_eq!(amount.won().to_string(), "₩1,500");
/// ```
///
/// Cells that are not whole numbers are rejected:
/// ```
/// # use sheet_ledger::model::Amount;
/// assert!(Amount::parse("12.50").is_none());
/// assert!(Amount::parse("--5").is_none());
/// assert!(Amount::parse("").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value.
    pub const fn value(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Normalizes a raw cell into an amount, returning `None` when the cell is not a number.
    ///
    /// Separators, the won glyph and all whitespace are removed first. What remains must be an
    /// optional single leading `-` followed by one or more ASCII digits.
    pub fn parse(cell: &str) -> Option<Self> {
        let cleaned: String = cell
            .chars()
            .filter(|&c| c != SEPARATOR && c != WON && !c.is_whitespace())
            .collect();
        let digits = cleaned.strip_prefix('-').unwrap_or(&cleaned);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // Overflow is possible with enough digits.
        cleaned.parse::<i64>().ok().map(Amount)
    }

    /// Returns a `Display` adapter that renders the amount with the won glyph, e.g. `-₩1,000`.
    pub fn won(&self) -> Won {
        Won(*self)
    }
}

/// Renders an `Amount` with the won glyph. Created by `Amount::won`.
#[derive(Debug, Clone, Copy)]
pub struct Won(Amount);

impl fmt::Display for Won {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0.is_negative() { "-" } else { "" };
        write!(f, "{sign}{WON}{}", grouped(self.0.value().unsigned_abs()))
    }
}

/// The reason a string could not be read as an `Amount`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a whole number amount")]
pub struct AmountError(String);

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::parse(s).ok_or_else(|| AmountError(s.to_string()))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{sign}{}", grouped(self.0.unsigned_abs()))
    }
}

/// Formats a magnitude with thousands separators.
fn grouped(magnitude: u64) -> String {
    magnitude.to_formatted_string(&Locale::en)
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount(value)
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(Amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(s: &str) -> Option<i64> {
        Amount::parse(s).map(|a| a.value())
    }

    #[test]
    fn test_parse_plain() {
        assert_eq!(parsed("15000"), Some(15000));
        assert_eq!(parsed("0"), Some(0));
    }

    #[test]
    fn test_parse_separators_and_glyph() {
        assert_eq!(parsed("1,000"), Some(1000));
        assert_eq!(parsed("₩1,234,567"), Some(1_234_567));
        assert_eq!(parsed("  ₩ 12,000 "), Some(12_000));
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(parsed("-500"), Some(-500));
        assert_eq!(parsed("-₩60,000"), Some(-60_000));
        assert_eq!(parsed("₩-60,000"), Some(-60_000));
        assert_eq!(parsed("- 7"), Some(-7));
    }

    #[test]
    fn test_parse_empty_is_not_a_number() {
        assert_eq!(parsed(""), None);
        assert_eq!(parsed("   "), None);
        assert_eq!(parsed("₩"), None);
        assert_eq!(parsed(",,"), None);
        assert_eq!(parsed("-"), None);
    }

    #[test]
    fn test_parse_rejects_letters() {
        for s in ["abc", "12a", "N/A", "1O0", "₩1,000원", "1e5"] {
            assert_eq!(parsed(s), None, "{s}");
        }
    }

    #[test]
    fn test_parse_rejects_multiple_signs() {
        for s in ["--5", "-5-", "+5", "5-", "-1,000-", "- -3"] {
            assert_eq!(parsed(s), None, "{s}");
        }
    }

    #[test]
    fn test_parse_rejects_decimal_points() {
        for s in ["12.50", "1,000.00", "-0.5", ".5", "5."] {
            assert_eq!(parsed(s), None, "{s}");
        }
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        assert_eq!(parsed("١٢٣"), None);
    }

    #[test]
    fn test_parse_overflow_is_not_a_number() {
        assert_eq!(parsed("99999999999999999999"), None);
        assert_eq!(parsed("9,223,372,036,854,775,807"), Some(i64::MAX));
    }

    #[test]
    fn test_formatted_values_normalize_back() {
        let values = [
            0,
            1,
            -1,
            999,
            -1000,
            1000,
            12_345,
            -987_654,
            1_000_000,
            -3_000_000,
            123_456_789_012,
            (1 << 53) + 1,
            1_234_567_890_123_456_789,
            i64::MAX,
            i64::MIN + 1,
        ];
        for n in values {
            let amount = Amount::new(n);
            assert_eq!(Amount::parse(&amount.to_string()), Some(amount), "{n}");
            assert_eq!(Amount::parse(&amount.won().to_string()), Some(amount), "{n}");
            let glyph_after_sign = format!("{WON}{amount}");
            assert_eq!(Amount::parse(&glyph_after_sign), Some(amount), "{n}");
        }
    }

    #[test]
    fn test_display_large_values_keep_every_digit() {
        assert_eq!(
            Amount::new((1 << 53) + 1).to_string(),
            "9,007,199,254,740,993"
        );
        assert_eq!(
            Amount::new(i64::MAX).to_string(),
            "9,223,372,036,854,775,807"
        );
        assert_eq!(
            Amount::new(i64::MIN).won().to_string(),
            "-₩9,223,372,036,854,775,808"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::new(0).to_string(), "0");
        assert_eq!(Amount::new(500).to_string(), "500");
        assert_eq!(Amount::new(1000).to_string(), "1,000");
        assert_eq!(Amount::new(-500).to_string(), "-500");
        assert_eq!(Amount::new(-1_234_567).to_string(), "-1,234,567");
    }

    #[test]
    fn test_display_won() {
        assert_eq!(Amount::new(3000).won().to_string(), "₩3,000");
        assert_eq!(Amount::new(-3000).won().to_string(), "-₩3,000");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("₩15,000".parse::<Amount>().unwrap(), Amount::new(15_000));
        let err = "15.5".parse::<Amount>().unwrap_err();
        assert_eq!(err.to_string(), "'15.5' is not a whole number amount");
    }

    #[test]
    fn test_add() {
        let mut total = Amount::ZERO;
        total += Amount::new(3000);
        total += Amount::new(-500);
        assert_eq!(total, Amount::new(2500));
    }

    #[test]
    fn test_serde_as_integer() {
        let json = serde_json::to_string(&Amount::new(-1500)).unwrap();
        assert_eq!(json, "-1500");
        let amount: Amount = serde_json::from_str("42").unwrap();
        assert_eq!(amount, Amount::new(42));
    }
}

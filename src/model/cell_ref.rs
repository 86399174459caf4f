//! A1-notation cell references such as `C21` and ranges such as `G21:J21`.

use anyhow::{bail, Context};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 0-based column index. Displays as its A1 letters, so `Column(0)` is `A` and `Column(26)` is
/// `AA`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Column(pub usize);

impl Column {
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut n = self.0 + 1;
        let mut letters = Vec::new();
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push(char::from(b'A' + rem as u8));
            n = (n - 1) / 26;
        }
        let s: String = letters.iter().rev().collect();
        f.write_str(&s)
    }
}

impl FromStr for Column {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            bail!("A column must have at least one letter");
        }
        let mut n: usize = 0;
        for c in s.chars() {
            if !c.is_ascii_uppercase() {
                bail!("Invalid column letters '{s}'");
            }
            let digit = (c as u8 - b'A') as usize + 1;
            n = n
                .checked_mul(26)
                .and_then(|n| n.checked_add(digit))
                .with_context(|| format!("Column '{s}' is out of range"))?;
        }
        Ok(Column(n - 1))
    }
}

/// A single cell: a 1-based row and a column. Displays as e.g. `C21`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CellRef {
    pub row: usize,
    pub column: Column,
}

impl CellRef {
    pub fn new(row: usize, column: Column) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl FromStr for CellRef {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_digit())
            .with_context(|| format!("Cell reference '{s}' has no row number"))?;
        let (letters, digits) = s.split_at(split);
        let column = letters.parse::<Column>()?;
        let row = digits
            .parse::<usize>()
            .map_err(|e| anyhow::anyhow!("Invalid row in '{s}': {e}"))?;
        if row == 0 {
            bail!("Rows are 1-based, got '{s}'");
        }
        Ok(CellRef { row, column })
    }
}

/// A rectangular block of cells, inclusive on both ends. Displays as e.g. `G21:J21`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CellRange {
    pub start: CellRef,
    pub end: CellRef,
}

impl CellRange {
    /// A range covering columns `first..=last` of a single `row`.
    pub fn row_span(row: usize, first: Column, last: Column) -> Self {
        Self {
            start: CellRef::new(row, first),
            end: CellRef::new(row, last),
        }
    }

    pub fn height(&self) -> usize {
        self.end.row - self.start.row + 1
    }

    pub fn width(&self) -> usize {
        self.end.column.index() - self.start.column.index() + 1
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

impl FromStr for CellRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = match s.split_once(':') {
            Some((a, b)) => (a.parse::<CellRef>()?, b.parse::<CellRef>()?),
            None => {
                let cell = s.parse::<CellRef>()?;
                (cell, cell)
            }
        };
        if end.row < start.row || end.column < start.column {
            bail!("Range '{s}' ends before it starts");
        }
        Ok(CellRange { start, end })
    }
}

impl Serialize for CellRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CellRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CellRange::from_str(&s).map_err(serde::de::Error::custom)
    }
}
